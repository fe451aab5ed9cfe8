use super::{with_query, ApiClient};
use crate::error::ApiError;
use crate::models::{ApiMessage, ChangeRoleRequest, SessionApi, User, UserSummary};

impl SessionApi for ApiClient {
    /// Fails fast without a network round trip when no token is stored.
    async fn current_user(&self) -> Result<User, ApiError> {
        if !self.has_token() {
            return Err(ApiError::Rejected {
                status: 401,
                message: "No access token set.".to_string(),
            });
        }
        self.get("/user/me").await
    }

    async fn unread_mention_count(&self) -> Result<u32, ApiError> {
        self.get("/mention/unread").await
    }
}

impl ApiClient {
    pub async fn all_users(&self) -> Result<Vec<UserSummary>, ApiError> {
        self.get("/user/all").await
    }

    pub async fn change_role(&self, request: &ChangeRoleRequest) -> Result<ApiMessage, ApiError> {
        self.post_json("/user/promote", request).await
    }

    pub async fn delete_user(&self, user_id: &str) -> Result<ApiMessage, ApiError> {
        self.delete(&with_query("/user/delete", &[("userId", user_id.to_string())]))
            .await
    }
}
