use serde::Deserialize;

/// A comment that referenced the current user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mention {
    pub id: String,
    pub creator_username: String,
    #[serde(default)]
    pub receiver_username: String,
    #[serde(default)]
    pub comment_content: String,
    pub post_id: String,
    #[serde(default)]
    pub post_title: String,
    #[serde(default, alias = "isRead")]
    pub read: bool,
    #[serde(default)]
    pub created_on: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MentionsPage {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub mentions: Vec<Mention>,
}
