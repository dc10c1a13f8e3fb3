//! Dashboard Content Module
//!
//! Everything that determines what the page says, independent of HTTP:
//! the fixed markdown sections, the closed topic enumeration, the
//! conditional visualisation inclusion, and the uploaded-publications
//! table.
//!
//! ## Page blocks
//! 1. Researcher Overview - name, field, institution, image
//! 2. Research Context - framing paragraph + objectives
//! 3. Methodology Overview - offline pipeline stages + note
//! 4. Key Findings - results summary
//! 5. Interactive Topic Modelling - explainer + embedded pyLDAvis artifact
//! 6. Model Evaluation - coherence and perplexity
//! 7. Conclusion / Contact Information

pub mod generator;
pub mod publications;
pub mod sections;
pub mod topics;
pub mod visualisation;

pub use generator::{DashboardGenerator, StaticSections};
pub use publications::{parse_publications, PublicationsTable};
pub use topics::TopicChoice;
pub use visualisation::{Visualisation, EMBED_HEIGHT_PX, MISSING_MESSAGE};
