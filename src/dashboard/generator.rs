//! Dashboard Generator
//!
//! Produces every fixed markdown block of the dashboard in page order.
//! The intro paragraph and the sidebar navigation list are emitted here;
//! the named page sections are delegated to `sections::s1_…` through
//! `sections::s8_…`. Interactive state (topic selection, visualisation
//! expansion, uploads) is layered on top by the web tier.

use crate::config::DashboardConfig;
use crate::dashboard::sections::{
    s1_overview, s2_context, s3_methodology, s4_findings, s5_visualisation, s6_evaluation,
    s7_conclusion, s8_contact,
};

/// The fixed markdown blocks of one dashboard page, in rendering order.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticSections {
    pub intro: String,
    pub sidebar: String,
    pub overview: String,
    pub context: String,
    pub methodology: String,
    pub findings: String,
    pub visualisation_guide: String,
    pub evaluation: String,
    pub conclusion: String,
    pub contact: String,
}

/// Stateless generator for the fixed page content.
pub struct DashboardGenerator;

impl DashboardGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate all static blocks. Pure: identical output for identical
    /// configuration, whatever the viewer-supplied inputs are.
    pub fn generate(&self, config: &DashboardConfig) -> StaticSections {
        StaticSections {
            intro: generate_intro(),
            sidebar: generate_sidebar(),
            overview: s1_overview::generate(config),
            context: s2_context::generate(),
            methodology: s3_methodology::generate(),
            findings: s4_findings::generate(),
            visualisation_guide: s5_visualisation::generate(),
            evaluation: s6_evaluation::generate(),
            conclusion: s7_conclusion::generate(),
            contact: s8_contact::generate(config),
        }
    }
}

impl Default for DashboardGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed introductory paragraph shown under the page title.
fn generate_intro() -> String {
    "This application provides an **interactive overview** of a topic modelling analysis\n\
     conducted on Twitter data using **Latent Dirichlet Allocation (LDA)**.\n\
     \n\
     It summarises the full workflow implemented in the accompanying Jupyter notebook,\n\
     from preprocessing to interpretation."
        .to_string()
}

/// Fixed sidebar navigation list. Static labels, not interactive.
fn generate_sidebar() -> String {
    "- \u{1f4cc} Research Context\n\
     - \u{1f9f9} NLP Methodology\n\
     - \u{1f4ca} Key Results\n\
     - \u{1f50d} Interactive Topic Visualisation\n\
     - \u{1f9e0} Topic Interpretation\n\
     - \u{1f4c8} Model Evaluation\n\
     - \u{1f4ec} Contact Information"
        .to_string()
}
