use web_sys::{File, FormData};

use super::{encode, with_query, ApiClient, PageRequest};
use crate::error::ApiError;
use crate::models::{ApiMessage, PostCreateRequest, PostDetails, PostsPage};
use crate::routes::UserListing;

/// A paged post listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostFeed {
    /// Subscriptions when signed in, the default subreddits otherwise.
    Home { authenticated: bool },
    User { username: String, listing: UserListing },
    Subreddit { title: String },
}

impl PostFeed {
    /// API path (without paging) serving this feed.
    pub fn path(&self) -> String {
        match self {
            Self::Home {
                authenticated: true,
            } => "/post/subscribed".to_string(),
            Self::Home {
                authenticated: false,
            } => "/post/default".to_string(),
            Self::User {
                username,
                listing: UserListing::Posts,
            } => format!("/post/user/{}", encode(username)),
            Self::User {
                username,
                listing: UserListing::Upvoted,
            } => format!("/user/{}/upvoted", encode(username)),
            Self::User {
                username,
                listing: UserListing::Downvoted,
            } => format!("/user/{}/downvoted", encode(username)),
            Self::Subreddit { title } => format!("/post/subreddit/{}", encode(title)),
        }
    }

    pub const fn empty_message(&self) -> &'static str {
        match self {
            Self::Home {
                authenticated: true,
            } => "Nothing here yet. Subscribe to a few subreddits!",
            Self::Home { .. } | Self::Subreddit { .. } => "No posts yet.",
            Self::User {
                listing: UserListing::Posts,
                ..
            } => "This user has not posted anything.",
            Self::User { .. } => "No votes yet.",
        }
    }
}

impl ApiClient {
    pub async fn feed(&self, feed: &PostFeed, page: PageRequest) -> Result<PostsPage, ApiError> {
        self.get(&with_query(&feed.path(), &page.query_pairs())).await
    }

    pub async fn post_details(&self, post_id: &str) -> Result<PostDetails, ApiError> {
        self.get(&format!("/post/{}", encode(post_id))).await
    }

    /// Sent as multipart so an image or other file can ride along.
    pub async fn create_post(
        &self,
        request: &PostCreateRequest,
        file: Option<&File>,
    ) -> Result<ApiMessage, ApiError> {
        let form = FormData::new().map_err(super::browser_error)?;
        for (name, value) in request.fields() {
            form.append_with_str(name, value)
                .map_err(super::browser_error)?;
        }
        if let Some(file) = file {
            form.append_with_blob_and_filename("file", file, &file.name())
                .map_err(super::browser_error)?;
        }
        self.post_multipart("/post/create", &form).await
    }

    pub async fn delete_post(&self, post_id: &str) -> Result<ApiMessage, ApiError> {
        self.delete(&with_query("/post/delete", &[("postId", post_id.to_string())]))
            .await
    }
}
