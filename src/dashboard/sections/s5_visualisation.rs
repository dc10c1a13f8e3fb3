//! S5: Interactive Topic Modelling
//!
//! Static lead-in for the visualisation section: what the embedded pyLDAvis
//! document offers, and the fixed reading-guide callout. The embed itself
//! is handled by `dashboard::visualisation` and the page template.

/// Generate the fixed explanatory part of the visualisation section.
pub fn generate() -> String {
    "## Interactive Topic Modelling (LDA)\n\
     \n\
     The interactive visualisation below allows you to:\n\
     \n\
     - Explore topic distances\n\
     - Examine keyword relevance\n\
     - Adjust the \u{3bb} parameter for interpretation\n\
     \n\
     > \u{1f4a1} **How to read this visualisation**\n\
     >\n\
     > - Larger circles = more prevalent topics\n\
     > - Distance between circles = topic similarity\n\
     > - Adjust \u{3bb} to balance frequency vs exclusivity"
        .to_string()
}
