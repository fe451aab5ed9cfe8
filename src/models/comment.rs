use serde::{Deserialize, Serialize};

/// A comment with its replies nested under `children`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub creator_username: String,
    pub content: String,
    #[serde(default)]
    pub upvotes: i64,
    #[serde(default)]
    pub downvotes: i64,
    #[serde(default)]
    pub post_id: Option<String>,
    #[serde(default)]
    pub post_title: Option<String>,
    #[serde(default)]
    pub created_on: String,
    #[serde(default)]
    pub children: Vec<Comment>,
}

impl Comment {
    pub const fn score(&self) -> i64 {
        self.upvotes - self.downvotes
    }

    /// This comment plus all of its descendants.
    pub fn thread_len(&self) -> usize {
        1 + self.children.iter().map(Self::thread_len).sum::<usize>()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CommentsPage {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentCreateRequest {
    pub post_id: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

/// Sort orders accepted by `GET /comment/post`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommentSort {
    #[default]
    New,
    Old,
    Top,
}

impl CommentSort {
    pub const ALL: [Self; 3] = [Self::New, Self::Old, Self::Top];

    pub const fn as_param(self) -> &'static str {
        match self {
            Self::New => "createdOn,desc",
            Self::Old => "createdOn,asc",
            Self::Top => "upvotes,desc",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "Newest",
            Self::Old => "Oldest",
            Self::Top => "Top",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_comments_deserialize() {
        let comments: Vec<Comment> = serde_json::from_str(
            r#"[{"id":"c1","creatorUsername":"a","content":"root","upvotes":2,
                 "children":[{"id":"c2","creatorUsername":"b","content":"reply",
                   "children":[{"id":"c3","creatorUsername":"c","content":"deep"}]}]}]"#,
        )
        .unwrap();
        assert_eq!(comments[0].children[0].children[0].id, "c3");
        assert_eq!(comments[0].thread_len(), 3);
        assert_eq!(comments[0].score(), 2);
    }

    #[test]
    fn top_level_comment_omits_parent() {
        let json = serde_json::to_string(&CommentCreateRequest {
            post_id: "p1".to_string(),
            content: "hello".to_string(),
            parent_id: None,
        })
        .unwrap();
        assert_eq!(json, r#"{"postId":"p1","content":"hello"}"#);
    }
}
