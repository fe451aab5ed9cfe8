use super::{with_query, ApiClient};
use crate::error::ApiError;
use crate::models::{ApiMessage, Availability, SubredditCreateRequest, SubredditSummary};

impl ApiClient {
    /// Subreddit titles, for the post form's picker.
    pub async fn subreddit_titles(&self) -> Result<Vec<String>, ApiError> {
        self.get("/subreddit/all").await
    }

    pub async fn subreddits_with_counts(&self) -> Result<Vec<SubredditSummary>, ApiError> {
        self.get("/subreddit/all-with-post-count").await
    }

    pub async fn is_subreddit_available(&self, title: &str) -> Result<bool, ApiError> {
        let path = with_query(
            "/subreddit/check-subreddit-availability",
            &[("title", title.to_string())],
        );
        let availability: Availability = self.get(&path).await?;
        Ok(availability.available)
    }

    pub async fn create_subreddit(
        &self,
        request: &SubredditCreateRequest,
    ) -> Result<ApiMessage, ApiError> {
        self.post_json("/subreddit/create", request).await
    }

    pub async fn set_subscription(
        &self,
        subreddit: &str,
        subscribe: bool,
    ) -> Result<ApiMessage, ApiError> {
        let path = if subscribe {
            "/subreddit/subscribe"
        } else {
            "/subreddit/unsubscribe"
        };
        self.post(&with_query(path, &[("subreddit", subreddit.to_string())]))
            .await
    }

    pub async fn is_subscribed(&self, subreddit: &str) -> Result<bool, ApiError> {
        self.get(&with_query(
            "/subreddit/is-subscribed",
            &[("subreddit", subreddit.to_string())],
        ))
        .await
    }
}
