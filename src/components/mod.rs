pub mod comment_form;
pub mod comment_tree;
pub mod header;
pub mod loading_indicator;
pub mod notification_bar;
pub mod post_item;
pub mod post_list;
pub mod vote_buttons;

pub use comment_form::CommentForm;
pub use comment_tree::CommentTree;
pub use header::AppHeader;
pub use loading_indicator::LoadingIndicator;
pub use notification_bar::NotificationBar;
pub use post_item::PostItem;
pub use post_list::PostList;
pub use vote_buttons::{VoteButtons, VoteTarget};
