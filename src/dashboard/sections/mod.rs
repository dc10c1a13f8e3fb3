//! Dashboard Sections
//!
//! One module per fixed page block, rendered in page order by the
//! generator. Every section is a pure function returning markdown; the two
//! that interpolate configuration (overview, contact) take the config.

pub mod s1_overview;
pub mod s2_context;
pub mod s3_methodology;
pub mod s4_findings;
pub mod s5_visualisation;
pub mod s6_evaluation;
pub mod s7_conclusion;
pub mod s8_contact;
