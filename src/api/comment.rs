use super::{with_query, ApiClient, PageRequest};
use crate::error::ApiError;
use crate::models::{ApiMessage, Comment, CommentCreateRequest, CommentSort, CommentsPage};

impl ApiClient {
    pub async fn post_comments(
        &self,
        post_id: &str,
        sort: CommentSort,
    ) -> Result<Vec<Comment>, ApiError> {
        let pairs = [
            ("postId", post_id.to_string()),
            ("sort", sort.as_param().to_string()),
        ];
        self.get(&with_query("/comment/post", &pairs)).await
    }

    pub async fn user_comments(
        &self,
        username: &str,
        page: PageRequest,
    ) -> Result<CommentsPage, ApiError> {
        let mut pairs = vec![("username", username.to_string())];
        pairs.extend(page.query_pairs());
        self.get(&with_query("/comment/user", &pairs)).await
    }

    pub async fn create_comment(
        &self,
        request: &CommentCreateRequest,
    ) -> Result<ApiMessage, ApiError> {
        self.post_json("/comment/create", request).await
    }
}
