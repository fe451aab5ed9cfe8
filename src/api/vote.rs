use super::{with_query, ApiClient};
use crate::error::ApiError;
use crate::models::{ApiMessage, UserVotes, VoteChoice};

impl ApiClient {
    pub async fn vote_post(&self, post_id: &str, choice: VoteChoice) -> Result<ApiMessage, ApiError> {
        let pairs = [
            ("choice", choice.as_param().to_string()),
            ("postId", post_id.to_string()),
        ];
        self.post(&with_query("/post/vote", &pairs)).await
    }

    pub async fn vote_comment(
        &self,
        comment_id: &str,
        choice: VoteChoice,
    ) -> Result<ApiMessage, ApiError> {
        let pairs = [
            ("choice", choice.as_param().to_string()),
            ("commentId", comment_id.to_string()),
        ];
        self.post(&with_query("/comment/vote", &pairs)).await
    }

    /// Every vote the signed-in user has cast, by post or comment id.
    pub async fn user_votes(&self) -> Result<UserVotes, ApiError> {
        self.get("/vote/votes-user").await
    }
}
