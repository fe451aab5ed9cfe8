//! Build-time configuration for the client.
//!
//! Everything here is fixed when the WASM bundle is compiled. The API base URL
//! can be overridden by exporting `NOTREDDIT_API_BASE_URL` before `trunk build`.

/// Base URL of the notreddit REST API.
pub const API_BASE_URL: &str = match option_env!("NOTREDDIT_API_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:8000/api",
};

/// localStorage key holding the bearer token.
pub const ACCESS_TOKEN: &str = "accessToken";

/// Page size for every paged listing.
pub const PAGE_SIZE: u32 = 10;

/// Sort order sent with paged listings.
pub const DEFAULT_SORT: &str = "createdOn,desc";

/// How long a toast stays on screen (milliseconds).
pub const NOTIFICATION_DURATION_MS: i32 = 2000;

/// Role required for the admin user list.
pub const ADMIN_ROLE: &str = "ADMIN";

/// Role allowed to delete other users' posts.
pub const MODERATOR_ROLE: &str = "MODERATOR";

/// Landing route for redirects.
pub const HOME_PATH: &str = "/home";

/// Shown when the server gives no usable message.
pub const GENERIC_ERROR_MESSAGE: &str = "Sorry! Something went wrong. Please try again!";

/// Minimum subreddit title length accepted by the server.
pub const MIN_SUBREDDIT_TITLE_LEN: usize = 3;
