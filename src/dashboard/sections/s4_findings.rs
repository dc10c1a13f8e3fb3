//! S4: Key Findings
//!
//! Fixed summary of what the offline LDA run produced.

/// Generate the Key Findings section.
pub fn generate() -> String {
    "## Key Findings\n\
     \n\
     - The LDA model identified **distinct latent topics** within Twitter discussions\n\
     - Topics varied in prevalence, indicating unequal representation in the corpus\n\
     - Keyword overlap revealed thematic proximity between certain topics\n\
     - The results demonstrate LDA\u{2019}s usefulness for exploratory text analysis"
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_findings_list() {
        let section = generate();
        assert!(section.starts_with("## Key Findings"));
        assert_eq!(section.matches("\n- ").count(), 4);
    }
}
