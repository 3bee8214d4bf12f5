use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SmokeError {
    /// Only the underlying cause is displayed; the asset's file name is
    /// already part of the diagnostic built from this error.
    #[error("{source}")]
    AssetRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Manifest parsing error: {message}")]
    ManifestParseError { message: String },

    #[error("Invalid value for '{field}': {reason} (got '{value}')")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl SmokeError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            SmokeError::AssetRead { path, source } => {
                format!("Could not read asset {}: {}", path.display(), source)
            }
            SmokeError::IoError(e) => format!("File system error: {}", e),
            SmokeError::SerializationError(e) => format!("Could not render report: {}", e),
            SmokeError::ManifestParseError { message } => {
                format!("The asset manifest is not valid: {}", message)
            }
            SmokeError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SmokeError::AssetRead { .. } | SmokeError::IoError(_) => {
                "Check that --root points at the project directory and the file is readable UTF-8"
            }
            SmokeError::SerializationError(_) => "Retry with --format text",
            SmokeError::ManifestParseError { .. } => {
                "Each [[asset]] table needs 'kind', 'path' and a 'snippets' array"
            }
            SmokeError::InvalidConfigValueError { .. } => {
                "Fix the highlighted field in the manifest or command line"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SmokeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_read_displays_only_cause() {
        let err = SmokeError::AssetRead {
            path: PathBuf::from("neon-snake/index.html"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "gone");
        assert!(err.user_friendly_message().contains("neon-snake/index.html"));
    }
}
