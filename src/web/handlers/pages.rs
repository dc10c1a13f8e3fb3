// Page assembly for HTML rendering with Askama

use askama::Template;

use crate::config::DashboardConfig;
use crate::dashboard::{
    DashboardGenerator, PublicationsTable, TopicChoice, Visualisation, EMBED_HEIGHT_PX,
    MISSING_MESSAGE,
};
use crate::render::markdown_to_html;

// ============================================================================
// Dashboard Page
// ============================================================================

/// One entry of the topic selector control.
pub struct TopicOption {
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Template)]
#[template(path = "pages/dashboard.html")]
pub struct DashboardTemplate {
    pub page_title: String,
    pub layout_class: &'static str,
    pub heading: String,

    // Fixed blocks, already rendered to HTML fragments
    pub intro_html: String,
    pub sidebar_html: String,
    pub overview_html: String,
    pub context_html: String,
    pub methodology_html: String,
    pub findings_html: String,
    pub visualisation_guide_html: String,
    pub evaluation_html: String,
    pub conclusion_html: String,
    pub contact_html: String,

    // Topic Interpretation Guide
    pub topics: Vec<TopicOption>,
    pub selected_label: &'static str,
    pub topic_html: String,

    // Interactive Topic Modelling
    pub visualisation: Visualisation,
    pub expanded: bool,
    pub embed_height: u32,
    pub missing_message: &'static str,
    pub expand_query: String,
    pub collapse_query: String,

    // Related Publications
    pub publications: Option<PublicationsTable>,
    pub upload_error: Option<String>,
}

/// Assemble the full page for one render.
///
/// The fixed blocks depend only on the configuration; `topic`,
/// `visualisation`, and the upload outcome carry the viewer-supplied state.
pub fn build_page(
    config: &DashboardConfig,
    topic: TopicChoice,
    visualisation: Visualisation,
    publications: Option<PublicationsTable>,
    upload_error: Option<String>,
) -> DashboardTemplate {
    let sections = DashboardGenerator::new().generate(config);

    // Expander links must round-trip the selected topic; the labels contain
    // spaces, an ampersand, and an en-dash.
    let encoded_topic = urlencoding::encode(topic.label());
    let expand_query = format!("vis=open&topic={}", encoded_topic);
    let collapse_query = format!("topic={}", encoded_topic);

    let topics = TopicChoice::ALL
        .into_iter()
        .map(|t| TopicOption {
            label: t.label(),
            selected: t == topic,
        })
        .collect();

    let expanded = !matches!(visualisation, Visualisation::Collapsed);

    DashboardTemplate {
        page_title: config.page_title.clone(),
        layout_class: config.layout.css_class(),
        heading: config.heading.clone(),
        intro_html: markdown_to_html(&sections.intro),
        sidebar_html: markdown_to_html(&sections.sidebar),
        overview_html: markdown_to_html(&sections.overview),
        context_html: markdown_to_html(&sections.context),
        methodology_html: markdown_to_html(&sections.methodology),
        findings_html: markdown_to_html(&sections.findings),
        visualisation_guide_html: markdown_to_html(&sections.visualisation_guide),
        evaluation_html: markdown_to_html(&sections.evaluation),
        conclusion_html: markdown_to_html(&sections.conclusion),
        contact_html: markdown_to_html(&sections.contact),
        topics,
        selected_label: topic.label(),
        topic_html: markdown_to_html(topic.description()),
        visualisation,
        expanded,
        embed_height: EMBED_HEIGHT_PX,
        missing_message: MISSING_MESSAGE,
        expand_query,
        collapse_query,
        publications,
        upload_error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(page: DashboardTemplate) -> String {
        page.render().expect("template should render")
    }

    #[test]
    fn test_collapsed_page_has_no_iframe() {
        let html = render(build_page(
            &DashboardConfig::default(),
            TopicChoice::default(),
            Visualisation::Collapsed,
            None,
            None,
        ));
        assert!(!html.contains("<iframe"));
        assert!(html.contains("View Interactive Topic Model"));
    }

    #[test]
    fn test_embedded_document_is_escaped_into_srcdoc() {
        let html = render(build_page(
            &DashboardConfig::default(),
            TopicChoice::default(),
            Visualisation::Embedded("<div id=\"vis\">payload</div>".to_string()),
            None,
            None,
        ));
        assert!(html.contains("srcdoc="));
        assert!(html.contains("payload"));
        assert!(!html.contains("srcdoc=\"<div"));
        assert!(html.contains("height=\"800\""));
        assert!(html.contains("scrolling=\"yes\""));
    }

    #[test]
    fn test_missing_document_message() {
        let html = render(build_page(
            &DashboardConfig::default(),
            TopicChoice::default(),
            Visualisation::Missing,
            None,
            None,
        ));
        assert!(html.contains("LDA visualization file not found."));
        assert!(!html.contains("<iframe"));
    }

    #[test]
    fn test_selected_topic_marked_in_control() {
        let html = render(build_page(
            &DashboardConfig::default(),
            TopicChoice::PolicyGovernance,
            Visualisation::Collapsed,
            None,
            None,
        ));
        assert!(html.contains("Policy frameworks"));
        assert!(!html.contains("Economic growth"));
        assert!(!html.contains("Health systems"));
        assert!(!html.contains("Organisational processes"));
    }

    #[test]
    fn test_expander_link_encodes_topic() {
        let page = build_page(
            &DashboardConfig::default(),
            TopicChoice::SocialBehaviouralTrends,
            Visualisation::Collapsed,
            None,
            None,
        );
        assert_eq!(
            page.expand_query,
            "vis=open&topic=Topic%203%20%E2%80%93%20Social%20%26%20Behavioural%20Trends"
        );
    }

    #[test]
    fn test_upload_error_shown_inline() {
        let html = render(build_page(
            &DashboardConfig::default(),
            TopicChoice::default(),
            Visualisation::Collapsed,
            None,
            Some("Could not read the uploaded file as CSV".to_string()),
        ));
        assert!(html.contains("Could not read the uploaded file as CSV"));
        assert!(!html.contains("<table class=\"publications\""));
    }

    #[test]
    fn test_publications_table_rendered() {
        let table = PublicationsTable {
            columns: vec!["title".to_string(), "year".to_string()],
            rows: vec![vec!["LDA at scale".to_string(), "2019".to_string()]],
        };
        let html = render(build_page(
            &DashboardConfig::default(),
            TopicChoice::default(),
            Visualisation::Collapsed,
            Some(table),
            None,
        ));
        assert!(html.contains("<th>title</th>"));
        assert!(html.contains("<th>year</th>"));
        assert!(html.contains("<td>LDA at scale</td>"));
        assert!(html.contains("<td>2019</td>"));
    }
}
