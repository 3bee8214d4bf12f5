use crate::core::AssetSpec;
use crate::utils::error::{Result, SmokeError};
use crate::utils::validation::{
    validate_non_empty_list, validate_non_empty_string, validate_relative_path, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const HTML_PATH: &str = "neon-snake/index.html";
pub const JS_PATH: &str = "neon-snake/js/game.js";

pub const REQUIRED_HTML: [&str; 8] = [
    r#"data-page-target="upgrades""#,
    r#"data-page-target="tips""#,
    r#"data-page-target="contracts""#,
    r#"id="touchControls""#,
    r#"name="inputMode""#,
    r#"data-page="upgrades""#,
    r#"data-page="tips""#,
    r#"data-page="contracts""#,
];

pub const REQUIRED_JS: [&str; 5] = [
    "createInputController",
    "createNavigation",
    "applyDirection",
    "togglePause",
    "renderUpgrades",
];

/// The built-in table: the game page first, then its script.
pub fn default_assets() -> Vec<AssetSpec> {
    vec![
        AssetSpec::new("HTML", HTML_PATH, REQUIRED_HTML),
        AssetSpec::new("JS", JS_PATH, REQUIRED_JS),
    ]
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetManifest {
    #[serde(rename = "asset")]
    pub assets: Vec<AssetSpec>,
}

impl Default for AssetManifest {
    fn default() -> Self {
        Self {
            assets: default_assets(),
        }
    }
}

impl AssetManifest {
    /// 從 TOML 檔案載入資產清單
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SmokeError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SmokeError::ManifestParseError {
            message: e.to_string(),
        })
    }

    /// 替換環境變數 (例如 ${GAME_DIR})；未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        use std::sync::OnceLock;

        static VAR_RE: OnceLock<Regex> = OnceLock::new();
        let re = VAR_RE.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"));

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn into_assets(self) -> Vec<AssetSpec> {
        self.assets
    }
}

impl Validate for AssetManifest {
    fn validate(&self) -> Result<()> {
        validate_non_empty_list("asset", &self.assets)?;

        for (i, asset) in self.assets.iter().enumerate() {
            validate_non_empty_string(&format!("asset[{}].kind", i), &asset.kind)?;
            validate_relative_path(
                &format!("asset[{}].path", i),
                &asset.path.to_string_lossy(),
            )?;
            validate_non_empty_list(&format!("asset[{}].snippets", i), &asset.snippets)?;
            for (j, snippet) in asset.snippets.iter().enumerate() {
                // An empty snippet would always match.
                if snippet.is_empty() {
                    return Err(SmokeError::InvalidConfigValueError {
                        field: format!("asset[{}].snippets[{}]", i, j),
                        value: snippet.clone(),
                        reason: "Snippet cannot be empty".to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}
