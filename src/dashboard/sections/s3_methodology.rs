//! S3: Methodology Overview
//!
//! The four offline pipeline stages as nested bullet blocks, closed by the
//! fixed informational note. Display only; none of these stages run here.

/// Generate the Methodology Overview section.
pub fn generate() -> String {
    "## Methodology Overview\n\
     \n\
     The notebook follows a standard **Natural Language Processing (NLP) pipeline**:\n\
     \n\
     \u{1f9f9} **Text Preprocessing**\n\
     \n\
     - Tokenisation\n\
     - Stopword removal\n\
     - Lemmatization\n\
     \n\
     \u{1f4ca} **Vectorisation**\n\
     \n\
     - Bag-of-Words representation\n\
     - Document\u{2013}Term Matrix using `CountVectorizer`\n\
     \n\
     \u{1f9e0} **Topic Modelling**\n\
     \n\
     - Latent Dirichlet Allocation (LDA)\n\
     - Optimal topic number selection\n\
     \n\
     \u{1f4c8} **Evaluation & Interpretation**\n\
     \n\
     - Topic coherence and perplexity\n\
     - Interactive visualisation using pyLDAvis\n\
     \n\
     > This dashboard summarises these steps without recomputing the model."
        .to_string()
}
