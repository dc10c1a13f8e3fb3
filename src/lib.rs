//! LDA Results Dashboard
//!
//! Single-page dashboard presenting the artifacts of an offline topic
//! modelling analysis (LDA over Twitter data). All modelling happened
//! elsewhere; this crate only renders its outputs:
//! - `config`: immutable page/researcher configuration
//! - `dashboard/`: fixed sections, topic guide, visualisation inclusion,
//!   uploaded-publications table
//! - `render`: markdown to HTML conversion
//! - `web/`: Askama page assembly
//! - `server`: Axum routes, state, and error surface

pub mod config;
pub mod dashboard;
pub mod render;
pub mod server;
pub mod web;

// Re-export commonly used types
pub use config::{DashboardConfig, Layout, Researcher};
pub use dashboard::{PublicationsTable, TopicChoice, Visualisation};
pub use server::{create_router, AppState};
