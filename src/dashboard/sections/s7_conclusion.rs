//! S7: Conclusion
//!
//! Fixed closing paragraph and the list of what the dashboard provides.

/// Generate the Conclusion section.
pub fn generate() -> String {
    "## Conclusion\n\
     \n\
     This application serves as a **research companion dashboard** to the original notebook.\n\
     \n\
     It transforms technical outputs into:\n\
     \n\
     - Interpretable visuals\n\
     - Structured explanations\n\
     - Interactive exploration tools\n\
     \n\
     Such dashboards are valuable for communicating NLP research to both technical\n\
     and non-technical audiences."
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conclusion_list() {
        let section = generate();
        assert!(section.contains("**research companion dashboard**"));
        assert!(section.contains("- Interactive exploration tools"));
    }
}
