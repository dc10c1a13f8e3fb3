//! Topic Interpretation Guide
//!
//! The four latent topics identified by the offline LDA run, as a closed
//! enumeration. The selector control is seeded from [`TopicChoice::ALL`],
//! so every value arriving from the page maps to exactly one variant and
//! the description dispatch is total.

/// One of the four fixed topics from the LDA analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TopicChoice {
    #[default]
    EconomicImpact,
    PublicHealthDiscourse,
    SocialBehaviouralTrends,
    PolicyGovernance,
}

impl TopicChoice {
    /// Selector order. The first entry is the default selection.
    pub const ALL: [TopicChoice; 4] = [
        TopicChoice::EconomicImpact,
        TopicChoice::PublicHealthDiscourse,
        TopicChoice::SocialBehaviouralTrends,
        TopicChoice::PolicyGovernance,
    ];

    /// Display label, as produced by the offline analysis.
    pub fn label(&self) -> &'static str {
        match self {
            TopicChoice::EconomicImpact => "Topic 1 \u{2013} Economic Impact",
            TopicChoice::PublicHealthDiscourse => "Topic 2 \u{2013} Public Health Discourse",
            TopicChoice::SocialBehaviouralTrends => "Topic 3 \u{2013} Social & Behavioural Trends",
            TopicChoice::PolicyGovernance => "Topic 4 \u{2013} Policy & Governance",
        }
    }

    /// Fixed interpretation block for the topic, in markdown.
    pub fn description(&self) -> &'static str {
        match self {
            TopicChoice::EconomicImpact => {
                "This topic is dominated by terms related to:\n\
                 - Economic growth\n\
                 - Financial impact\n\
                 - Market and cost dynamics"
            }
            TopicChoice::PublicHealthDiscourse => {
                "This topic reflects discussions around:\n\
                 - Health systems\n\
                 - Community health outcomes\n\
                 - Program implementation"
            }
            TopicChoice::SocialBehaviouralTrends => {
                "This topic captures:\n\
                 - Organisational processes\n\
                 - Social practices\n\
                 - Behavioural patterns"
            }
            TopicChoice::PolicyGovernance => {
                "This topic is associated with:\n\
                 - Policy frameworks\n\
                 - Governance structures\n\
                 - Institutional responses"
            }
        }
    }

    /// Parse a selector value back to its variant.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_first() {
        assert_eq!(TopicChoice::default(), TopicChoice::ALL[0]);
    }

    #[test]
    fn test_labels_round_trip() {
        for topic in TopicChoice::ALL {
            assert_eq!(TopicChoice::from_label(topic.label()), Some(topic));
        }
        assert_eq!(TopicChoice::from_label("Topic 5 – Something Else"), None);
    }

    #[test]
    fn test_descriptions_distinct() {
        for a in TopicChoice::ALL {
            for b in TopicChoice::ALL {
                if a != b {
                    assert_ne!(a.description(), b.description());
                }
            }
        }
    }

    #[test]
    fn test_description_markers() {
        assert!(TopicChoice::EconomicImpact.description().contains("Economic growth"));
        assert!(TopicChoice::PublicHealthDiscourse.description().contains("Health systems"));
        assert!(TopicChoice::SocialBehaviouralTrends
            .description()
            .contains("Organisational processes"));
        assert!(TopicChoice::PolicyGovernance.description().contains("Policy frameworks"));
    }
}
