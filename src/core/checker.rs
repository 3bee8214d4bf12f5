use crate::core::{AssetSource, AssetSpec, CheckReport, Diagnostic};
use crate::utils::error::SmokeError;

/// Literal, case-sensitive containment check of one asset's content.
/// Diagnostics keep the declared snippet order.
pub fn check_content(spec: &AssetSpec, content: &str) -> Vec<Diagnostic> {
    spec.snippets
        .iter()
        .filter(|snippet| !content.contains(snippet.as_str()))
        .map(|snippet| Diagnostic::SnippetMissing {
            kind: spec.kind.clone(),
            snippet: snippet.clone(),
        })
        .collect()
}

pub struct AssetChecker<S: AssetSource> {
    source: S,
    assets: Vec<AssetSpec>,
}

impl<S: AssetSource> AssetChecker<S> {
    pub fn new(source: S, assets: Vec<AssetSpec>) -> Self {
        Self { source, assets }
    }

    pub fn assets(&self) -> &[AssetSpec] {
        &self.assets
    }

    /// Checks every asset in declared order. A read failure is recorded and
    /// the asset is checked as empty text, so one run reports everything.
    pub async fn run(&self) -> CheckReport {
        let mut diagnostics = Vec::new();

        for spec in &self.assets {
            tracing::debug!("Checking {} asset {}", spec.kind, spec.path.display());

            let content = match self.source.read_text(&spec.path).await {
                Ok(content) => content,
                Err(e) => {
                    tracing::warn!(
                        "Could not read {} ({}): {}",
                        spec.path.display(),
                        spec.kind,
                        e
                    );
                    diagnostics.push(Diagnostic::AssetUnreadable {
                        file: spec.file_name(),
                        reason: unreadable_reason(&e),
                    });
                    String::new()
                }
            };

            let missing = check_content(spec, &content);
            tracing::debug!(
                "{}: {}/{} snippets present",
                spec.path.display(),
                spec.snippets.len() - missing.len(),
                spec.snippets.len()
            );
            diagnostics.extend(missing);
        }

        let report = CheckReport::new(diagnostics, self.assets.len());
        if report.is_success() {
            tracing::info!("All {} assets contain their required snippets", report.assets_checked());
        } else {
            tracing::info!(
                "{} problems found ({} unreadable, {} missing snippets)",
                report.len(),
                report.unreadable_count(),
                report.missing_count()
            );
        }
        report
    }
}

fn unreadable_reason(err: &SmokeError) -> String {
    match err {
        SmokeError::AssetRead { source, .. } => source.to_string(),
        other => other.to_string(),
    }
}
