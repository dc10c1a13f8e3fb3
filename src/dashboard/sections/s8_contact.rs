//! S8: Contact Information
//!
//! One sentence interpolating the researcher name and contact address.

use crate::config::DashboardConfig;

/// Generate the Contact Information section.
pub fn generate(config: &DashboardConfig) -> String {
    format!(
        "## Contact Information\n\
         \n\
         You can reach **{}** at {}.",
        config.researcher.name, config.email,
    )
}
