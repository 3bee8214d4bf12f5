use crate::utils::error::Result;
use std::path::Path;

pub trait AssetSource: Send + Sync {
    /// Full UTF-8 text of the asset at `path`, relative to the source's root.
    fn read_text(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}
