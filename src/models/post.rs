use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Post as shown in listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    pub id: String,
    pub title: String,
    pub creator_username: String,
    pub subreddit_title: String,
    #[serde(default)]
    pub upvotes: i64,
    #[serde(default)]
    pub downvotes: i64,
    #[serde(default)]
    pub comment_count: u64,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub created_on: String,
}

impl PostSummary {
    pub const fn score(&self) -> i64 {
        self.upvotes - self.downvotes
    }
}

/// One page of posts plus the total available.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PostsPage {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub posts: Vec<PostSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetails {
    pub id: String,
    pub title: String,
    pub creator_username: String,
    pub subreddit_title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub upvotes: i64,
    #[serde(default)]
    pub downvotes: i64,
    #[serde(default)]
    pub comment_count: u64,
    #[serde(default)]
    pub created_on: String,
}

impl PostDetails {
    pub const fn score(&self) -> i64 {
        self.upvotes - self.downvotes
    }
}

/// Text fields of a new post; the optional file travels alongside in the
/// multipart form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostCreateRequest {
    pub title: String,
    pub subreddit: String,
    pub url: String,
    pub content: String,
}

impl PostCreateRequest {
    pub fn validate(&self, has_file: bool) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Please enter a title.".to_string());
        }
        if self.subreddit.trim().is_empty() {
            return Err("Please choose a subreddit.".to_string());
        }
        if has_file && !self.url.trim().is_empty() {
            return Err("Attach either a file or a link, not both.".to_string());
        }
        Ok(())
    }

    /// Non-empty form fields in the order they are sent.
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        [
            ("title", self.title.trim()),
            ("subreddit", self.subreddit.trim()),
            ("url", self.url.trim()),
            ("content", self.content.trim()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .collect()
    }
}

/// A vote as the server encodes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteChoice {
    Up,
    Down,
    None,
}

impl VoteChoice {
    pub const fn as_param(self) -> i8 {
        match self {
            Self::Up => 1,
            Self::Down => -1,
            Self::None => 0,
        }
    }

    pub const fn from_param(value: i8) -> Self {
        match value {
            1 => Self::Up,
            -1 => Self::Down,
            _ => Self::None,
        }
    }

    /// Vote to send when `pressed` is clicked while `self` is the current
    /// vote: pressing the same arrow again withdraws the vote.
    pub fn toggle(self, pressed: Self) -> Self {
        if self == pressed {
            Self::None
        } else {
            pressed
        }
    }

    /// Change in (upvotes, downvotes) when moving from `self` to `next`.
    pub const fn tally_delta(self, next: Self) -> (i64, i64) {
        let before = self.counts();
        let after = next.counts();
        (after.0 - before.0, after.1 - before.1)
    }

    const fn counts(self) -> (i64, i64) {
        match self {
            Self::Up => (1, 0),
            Self::Down => (0, 1),
            Self::None => (0, 0),
        }
    }
}

/// Votes the current user has cast, keyed by post or comment id.
pub type UserVotes = HashMap<String, i8>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posts_page_deserializes() {
        let page: PostsPage = serde_json::from_str(
            r#"{"total":12,"posts":[{"id":"p1","title":"Hi","creatorUsername":"bob",
                "subredditTitle":"rust","upvotes":5,"downvotes":2,"commentCount":3,
                "createdOn":"2019-05-12T10:11:12"}]}"#,
        )
        .unwrap();
        assert_eq!(page.total, 12);
        assert_eq!(page.posts[0].subreddit_title, "rust");
        assert_eq!(page.posts[0].score(), 3);
        assert!(page.posts[0].thumbnail_url.is_none());
    }

    #[test]
    fn toggle_same_vote_clears() {
        assert_eq!(VoteChoice::Up.toggle(VoteChoice::Up), VoteChoice::None);
        assert_eq!(VoteChoice::Down.toggle(VoteChoice::Up), VoteChoice::Up);
        assert_eq!(VoteChoice::None.toggle(VoteChoice::Down), VoteChoice::Down);
    }

    #[test]
    fn tally_delta_when_switching_sides() {
        assert_eq!(VoteChoice::Up.tally_delta(VoteChoice::Down), (-1, 1));
        assert_eq!(VoteChoice::None.tally_delta(VoteChoice::Up), (1, 0));
        assert_eq!(VoteChoice::Down.tally_delta(VoteChoice::None), (0, -1));
    }

    #[test]
    fn vote_params() {
        assert_eq!(VoteChoice::from_param(1), VoteChoice::Up);
        assert_eq!(VoteChoice::from_param(-1), VoteChoice::Down);
        assert_eq!(VoteChoice::from_param(7), VoteChoice::None);
        assert_eq!(VoteChoice::Down.as_param(), -1);
    }

    #[test]
    fn create_request_drops_empty_fields() {
        let request = PostCreateRequest {
            title: " Title ".to_string(),
            subreddit: "rust".to_string(),
            url: String::new(),
            content: "body".to_string(),
        };
        assert_eq!(
            request.fields(),
            vec![("title", "Title"), ("subreddit", "rust"), ("content", "body")]
        );
    }

    #[test]
    fn create_request_rejects_file_and_link() {
        let request = PostCreateRequest {
            title: "t".to_string(),
            subreddit: "rust".to_string(),
            url: "https://example.com".to_string(),
            content: String::new(),
        };
        assert!(request.validate(false).is_ok());
        assert!(request.validate(true).is_err());
        assert!(PostCreateRequest::default().validate(false).is_err());
    }
}
