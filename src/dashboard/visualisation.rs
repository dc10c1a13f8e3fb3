//! Interactive LDA Visualisation
//!
//! Conditional inclusion of the pre-rendered pyLDAvis document. The file is
//! read fresh on every render where the viewer has expanded the section;
//! a missing or unreadable file is an expected state and renders as a fixed
//! inline message, never as a request failure.

use std::path::Path;

/// Embed height in CSS pixels for the visualisation iframe.
pub const EMBED_HEIGHT_PX: u32 = 800;

/// Fixed message shown in place of the embed when the artifact is absent.
pub const MISSING_MESSAGE: &str =
    "LDA visualization file not found. Ensure `lda_vis.html` exists in the repository.";

/// State of the visualisation section for one render.
#[derive(Debug, Clone, PartialEq)]
pub enum Visualisation {
    /// Viewer has not expanded the section; nothing was read.
    Collapsed,
    /// Document contents, embedded verbatim as an isolated sub-document.
    Embedded(String),
    /// Artifact absent at the configured path.
    Missing,
}

/// Read the visualisation document for an expanded render.
pub fn load(path: &Path) -> Visualisation {
    match std::fs::read_to_string(path) {
        Ok(contents) => Visualisation::Embedded(contents),
        Err(e) => {
            tracing::warn!("Visualisation artifact not readable at {}: {}", path.display(), e);
            Visualisation::Missing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("lda_dashboard_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_load_present_file() {
        let path = scratch_path("vis.html");
        std::fs::write(&path, "<html><body>ldavis</body></html>").unwrap();

        let vis = load(&path);
        assert_eq!(
            vis,
            Visualisation::Embedded("<html><body>ldavis</body></html>".to_string())
        );

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_missing_file() {
        let path = scratch_path("no_such_vis.html");
        assert_eq!(load(&path), Visualisation::Missing);
    }
}
