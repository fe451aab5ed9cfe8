use serde::{Deserialize, Serialize};

use crate::config::MIN_SUBREDDIT_TITLE_LEN;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubredditSummary {
    pub title: String,
    #[serde(default)]
    pub post_count: u64,
    #[serde(default)]
    pub subscriber_count: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubredditCreateRequest {
    pub title: String,
}

impl SubredditCreateRequest {
    pub fn new(title: &str) -> Result<Self, String> {
        let title = title.trim();
        if title.chars().count() < MIN_SUBREDDIT_TITLE_LEN {
            return Err(format!(
                "Title must be at least {MIN_SUBREDDIT_TITLE_LEN} characters."
            ));
        }
        if !title.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err("Title may only contain letters, digits and underscores.".to_string());
        }
        Ok(Self {
            title: title.to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Availability {
    pub available: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_trims_title() {
        assert_eq!(SubredditCreateRequest::new("  rust ").unwrap().title, "rust");
    }

    #[test]
    fn create_request_rejects_short_or_odd_titles() {
        assert!(SubredditCreateRequest::new("ab").is_err());
        assert!(SubredditCreateRequest::new("has space").is_err());
    }

    #[test]
    fn summary_deserializes() {
        let list: Vec<SubredditSummary> =
            serde_json::from_str(r#"[{"title":"rust","postCount":4,"subscriberCount":9}]"#)
                .unwrap();
        assert_eq!(list[0].post_count, 4);
        assert_eq!(list[0].subscriber_count, 9);
    }
}
