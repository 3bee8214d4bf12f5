use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// One asset to verify: where it lives and which literal snippets it must contain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetSpec {
    /// Label used in diagnostics, e.g. `HTML` or `JS`.
    pub kind: String,
    /// Path relative to the project root.
    pub path: PathBuf,
    pub snippets: Vec<String>,
}

impl AssetSpec {
    pub fn new<P, I, S>(kind: &str, path: P, snippets: I) -> Self
    where
        P: Into<PathBuf>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind: kind.to_string(),
            path: path.into(),
            snippets: snippets.into_iter().map(Into::into).collect(),
        }
    }

    /// File name shown in read-failure diagnostics.
    pub fn file_name(&self) -> String {
        display_name(&self.path)
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Diagnostic {
    AssetUnreadable { file: String, reason: String },
    SnippetMissing { kind: String, snippet: String },
}

impl Diagnostic {
    pub fn is_unreadable(&self) -> bool {
        matches!(self, Diagnostic::AssetUnreadable { .. })
    }

    /// The snippet this diagnostic names, if it is a missing-snippet diagnostic.
    pub fn snippet(&self) -> Option<&str> {
        match self {
            Diagnostic::SnippetMissing { snippet, .. } => Some(snippet),
            Diagnostic::AssetUnreadable { .. } => None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::AssetUnreadable { file, reason } => {
                write!(f, "Failed to read {}: {}", file, reason)
            }
            Diagnostic::SnippetMissing { kind, snippet } => {
                write!(f, "Missing {} snippet: {}", kind, snippet)
            }
        }
    }
}

pub const PASS_MESSAGE: &str = "Smoke check passed.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    diagnostics: Vec<Diagnostic>,
    assets_checked: usize,
}

impl CheckReport {
    pub fn new(diagnostics: Vec<Diagnostic>, assets_checked: usize) -> Self {
        Self {
            diagnostics,
            assets_checked,
        }
    }

    pub fn is_success(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn assets_checked(&self) -> usize {
        self.assets_checked
    }

    pub fn unreadable_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_unreadable()).count()
    }

    pub fn missing_count(&self) -> usize {
        self.len() - self.unreadable_count()
    }

    /// Lines for standard output: the pass message, or one line per diagnostic.
    pub fn render_text(&self) -> String {
        if self.is_success() {
            return PASS_MESSAGE.to_string();
        }
        self.diagnostics
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn to_json(&self) -> serde_json::Value {
        let diagnostics: Vec<serde_json::Value> = self
            .diagnostics
            .iter()
            .map(|d| {
                let mut value = serde_json::to_value(d).unwrap_or_default();
                if let Some(obj) = value.as_object_mut() {
                    obj.insert("message".to_string(), d.to_string().into());
                }
                value
            })
            .collect();

        serde_json::json!({
            "passed": self.is_success(),
            "assets_checked": self.assets_checked,
            "diagnostics": diagnostics,
        })
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}
