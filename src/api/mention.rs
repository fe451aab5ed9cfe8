use super::{with_query, ApiClient, PageRequest};
use crate::error::ApiError;
use crate::models::{ApiMessage, MentionsPage};

impl ApiClient {
    pub async fn mentions(&self, page: PageRequest) -> Result<MentionsPage, ApiError> {
        self.get(&with_query("/mention/user", &page.query_pairs())).await
    }

    pub async fn mark_mention(&self, mention_id: &str, read: bool) -> Result<ApiMessage, ApiError> {
        let path = if read {
            "/mention/mark-read"
        } else {
            "/mention/mark-unread"
        };
        self.post(&with_query(path, &[("mentionId", mention_id.to_string())]))
            .await
    }
}
