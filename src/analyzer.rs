//! Keyword classification of prompts into the sources worth querying.

use serde::{Deserialize, Serialize};
use std::fmt;

const TWITTER_TERMS: &[&str] = &["social", "twitter", "opinion", "trending"];
const YOUTUBE_TERMS: &[&str] = &["video", "youtube", "tutorial", "explanation"];
const WEB_TERMS: &[&str] = &["research", "article", "news"];
/// Presence of this term turns the default web search off.
const VIDEO_TERM: &str = "video";

const TECHNOLOGY_TERMS: &[&str] = &["tech", "ai", "programming"];
const NEWS_TERMS: &[&str] = &["news", "current"];
const EDUCATION_TERMS: &[&str] = &["learn", "tutorial"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopicCategory {
    Technology,
    News,
    Education,
    General,
}

impl fmt::Display for TopicCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TopicCategory::Technology => "technology",
            TopicCategory::News => "news",
            TopicCategory::Education => "education",
            TopicCategory::General => "general",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSelection {
    pub needs_twitter: bool,
    pub needs_youtube: bool,
    pub needs_web: bool,
    /// Informational only; nothing downstream branches on it.
    pub category: TopicCategory,
}

fn contains_any(haystack: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| haystack.contains(term))
}

/// Decides which sources a query needs by substring match on its lower-cased
/// form. Web is on unless the query mentions video, and a web term always
/// turns it back on.
pub fn classify(query: &str) -> SourceSelection {
    let lower = query.to_lowercase();

    SourceSelection {
        needs_twitter: contains_any(&lower, TWITTER_TERMS),
        needs_youtube: contains_any(&lower, YOUTUBE_TERMS),
        needs_web: contains_any(&lower, WEB_TERMS) || !lower.contains(VIDEO_TERM),
        category: categorize_lower(&lower),
    }
}

pub fn categorize(query: &str) -> TopicCategory {
    categorize_lower(&query.to_lowercase())
}

// Plain substring matching: "ai" also hits words like "explain".
fn categorize_lower(lower: &str) -> TopicCategory {
    if contains_any(lower, TECHNOLOGY_TERMS) {
        TopicCategory::Technology
    } else if contains_any(lower, NEWS_TERMS) {
        TopicCategory::News
    } else if contains_any(lower, EDUCATION_TERMS) {
        TopicCategory::Education
    } else {
        TopicCategory::General
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_keywords_defaults_to_web() {
        for query in ["best hiking boots", "how do volcanoes form", "", "   "] {
            let sel = classify(query);
            assert!(sel.needs_web, "{query:?}");
            assert!(!sel.needs_twitter, "{query:?}");
            assert!(!sel.needs_youtube, "{query:?}");
        }
    }

    #[test]
    fn test_video_term_disables_web() {
        let sel = classify("funny cat video compilation");
        assert!(sel.needs_youtube);
        assert!(!sel.needs_web);
    }

    #[test]
    fn test_web_term_overrides_video_exclusion() {
        for query in [
            "video research on sleep",
            "news video of the launch",
            "article with embedded video",
        ] {
            let sel = classify(query);
            assert!(sel.needs_youtube, "{query:?}");
            assert!(sel.needs_web, "{query:?}");
        }
    }

    #[test]
    fn test_youtube_terms_without_video_keep_web() {
        let sel = classify("youtube channel recommendations");
        assert!(sel.needs_youtube);
        assert!(sel.needs_web);
    }

    #[test]
    fn test_twitter_terms() {
        for query in ["social impact", "TRENDING topics", "public opinion", "twitter drama"] {
            assert!(classify(query).needs_twitter, "{query:?}");
        }
    }

    #[test]
    fn test_case_insensitive() {
        let sel = classify("Best TUTORIAL Video");
        assert!(sel.needs_youtube);
        assert!(!sel.needs_web);
    }

    #[test]
    fn test_rust_tutorial_video_scenario() {
        let sel = classify("best tutorial video on rust");
        assert!(sel.needs_youtube);
        assert!(!sel.needs_web);
        assert!(!sel.needs_twitter);
        assert_eq!(sel.category, TopicCategory::Education);
    }

    #[test]
    fn test_categories() {
        assert_eq!(categorize("programming languages"), TopicCategory::Technology);
        assert_eq!(categorize("current events"), TopicCategory::News);
        assert_eq!(categorize("learn to cook"), TopicCategory::Education);
        assert_eq!(categorize("gardening"), TopicCategory::General);
    }

    #[test]
    fn test_category_precedence() {
        // technology wins over news, news over education
        assert_eq!(categorize("tech news"), TopicCategory::Technology);
        assert_eq!(categorize("news to learn from"), TopicCategory::News);
    }

    #[test]
    fn test_category_substring_match() {
        assert_eq!(categorize("explain gravity"), TopicCategory::Technology);
    }

    #[test]
    fn test_category_display() {
        assert_eq!(TopicCategory::Education.to_string(), "education");
    }
}
