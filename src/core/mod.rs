pub mod checker;

pub use crate::domain::model::{AssetSpec, CheckReport, Diagnostic};
pub use crate::domain::ports::AssetSource;
pub use crate::utils::error::Result;
