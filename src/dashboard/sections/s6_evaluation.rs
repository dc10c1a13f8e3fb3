//! S6: Model Evaluation
//!
//! Fixed explanation of the two quality metrics used offline.

/// Generate the Model Evaluation section.
pub fn generate() -> String {
    "## Model Evaluation\n\
     \n\
     The notebook evaluated model quality using:\n\
     \n\
     - **Topic Coherence**: measures interpretability and semantic consistency\n\
     - **Perplexity**: measures model generalisation to unseen data\n\
     \n\
     A balance between these metrics was used to select the optimal number of topics."
        .to_string()
}
