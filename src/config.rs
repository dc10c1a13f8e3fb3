//! Dashboard Configuration
//!
//! Immutable configuration for the dashboard: page metadata, researcher
//! details, the illustrative image, and the location of the pre-rendered
//! LDA visualisation artifact. Built once at process start; the server
//! binary only overrides `vis_path` (VIS_PATH) before boot.

use std::path::PathBuf;

/// Page layout mode. The dashboard always renders wide, but the value is
/// carried as configuration rather than hard-coded into the template.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Layout {
    #[default]
    Wide,
    Centered,
}

impl Layout {
    pub fn css_class(&self) -> &'static str {
        match self {
            Layout::Wide => "layout-wide",
            Layout::Centered => "layout-centered",
        }
    }
}

/// Fixed researcher details shown in the Researcher Overview section.
#[derive(Debug, Clone)]
pub struct Researcher {
    pub name: String,
    pub field: String,
    pub institution: String,
}

/// Process-lifetime configuration for the dashboard.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Browser tab title.
    pub page_title: String,

    /// Main page heading.
    pub heading: String,

    pub layout: Layout,

    pub researcher: Researcher,

    /// Contact address interpolated into the Contact Information section.
    pub email: String,

    /// Remote illustrative image shown under the researcher details.
    pub image_url: String,
    pub image_caption: String,

    /// Path of the pre-rendered pyLDAvis document. Read fresh on each
    /// expanded render; absence is an expected state.
    pub vis_path: PathBuf,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            page_title: "Topic Modelling with LDA | Twitter Data".to_string(),
            heading: "Topic Modelling using LDA with Twitter Data".to_string(),
            layout: Layout::Wide,
            researcher: Researcher {
                name: "Melissa K Mlotshwa".to_string(),
                field: "Business and Financial Analytics".to_string(),
                institution: "University of the Free State".to_string(),
            },
            email: "2021276346@ufs4life.ac.za".to_string(),
            image_url: "https://cdn.pixabay.com/photo/2015/04/23/22/00/tree-736885_1280.jpg"
                .to_string(),
            image_caption: "Visual metaphor for topic structures (Pixabay)".to_string(),
            vis_path: PathBuf::from("lda_vis.html"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.page_title, "Topic Modelling with LDA | Twitter Data");
        assert_eq!(config.layout, Layout::Wide);
        assert_eq!(config.researcher.name, "Melissa K Mlotshwa");
        assert_eq!(config.email, "2021276346@ufs4life.ac.za");
        assert_eq!(config.vis_path, PathBuf::from("lda_vis.html"));
    }

    #[test]
    fn test_layout_css_class() {
        assert_eq!(Layout::Wide.css_class(), "layout-wide");
        assert_eq!(Layout::Centered.css_class(), "layout-centered");
    }
}
