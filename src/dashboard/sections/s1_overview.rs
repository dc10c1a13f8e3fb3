//! S1: Researcher Overview
//!
//! Name, field, and institution from the configuration, followed by the
//! fixed illustrative image with its caption.

use crate::config::DashboardConfig;

/// Generate the Researcher Overview section.
pub fn generate(config: &DashboardConfig) -> String {
    let mut blocks = Vec::new();

    blocks.push("## Researcher Overview".to_string());
    blocks.push(format!("**Name:** {}", config.researcher.name));
    blocks.push(format!("**Field of Research:** {}", config.researcher.field));
    blocks.push(format!("**Institution:** {}", config.researcher.institution));
    blocks.push(format!(
        "![{caption}]({url})\n*{caption}*",
        caption = config.image_caption,
        url = config.image_url,
    ));

    blocks.join("\n\n")
}
