use crate::core::AssetSource;
use crate::utils::error::{Result, SmokeError};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct LocalAssetSource {
    root: PathBuf,
}

impl LocalAssetSource {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetSource for LocalAssetSource {
    async fn read_text(&self, path: &Path) -> Result<String> {
        let full_path = self.root.join(path);
        // read_to_string rejects invalid UTF-8 with ErrorKind::InvalidData
        tokio::fs::read_to_string(&full_path)
            .await
            .map_err(|source| SmokeError::AssetRead {
                path: full_path,
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_reads_relative_to_root() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir_all(temp_dir.path().join("js")).unwrap();
        std::fs::write(temp_dir.path().join("js/game.js"), "togglePause();").unwrap();

        let source = LocalAssetSource::new(temp_dir.path());
        let text = source.read_text(Path::new("js/game.js")).await.unwrap();
        assert_eq!(text, "togglePause();");
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_read_error() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("index.html"), [0xff, 0xfe, 0x00]).unwrap();

        let source = LocalAssetSource::new(temp_dir.path());
        let err = source.read_text(Path::new("index.html")).await.unwrap_err();
        match err {
            SmokeError::AssetRead { source, .. } => {
                assert_eq!(source.kind(), std::io::ErrorKind::InvalidData)
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
