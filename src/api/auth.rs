use super::ApiClient;
use crate::error::ApiError;
use crate::models::{ApiMessage, JwtResponse, LoginRequest, SignUpRequest};

impl ApiClient {
    pub async fn sign_in(&self, request: &LoginRequest) -> Result<JwtResponse, ApiError> {
        self.post_json("/auth/signin", request).await
    }

    pub async fn sign_up(&self, request: &SignUpRequest) -> Result<ApiMessage, ApiError> {
        self.post_json("/auth/signup", request).await
    }
}
