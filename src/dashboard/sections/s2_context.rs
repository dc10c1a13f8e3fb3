//! S2: Research Context
//!
//! Fixed framing paragraph plus the research objectives list.

/// Generate the Research Context section.
pub fn generate() -> String {
    "## Research Context\n\
     \n\
     Social media platforms such as Twitter generate large volumes of unstructured text data.\n\
     This project applies **topic modelling** to uncover latent themes in public discourse.\n\
     \n\
     **Research objectives:**\n\
     \n\
     - Identify dominant discussion themes\n\
     - Explore relationships between keywords\n\
     - Understand topic prevalence within the corpus"
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_objectives_present() {
        let section = generate();
        assert!(section.starts_with("## Research Context"));
        assert!(section.contains("- Identify dominant discussion themes"));
        assert!(section.contains("- Understand topic prevalence within the corpus"));
    }
}
