pub mod comment;
pub mod generation;
pub mod mention;
pub mod message;
pub mod notification;
pub mod post;
pub mod session;
pub mod session_state;
pub mod subreddit;
pub mod user;

pub use comment::{Comment, CommentCreateRequest, CommentSort, CommentsPage};
pub use generation::Generation;
pub use mention::{Mention, MentionsPage};
pub use message::ApiMessage;
pub use notification::{Notification, NotificationLevel, Notifier};
pub use post::{PostCreateRequest, PostDetails, PostSummary, PostsPage, UserVotes, VoteChoice};
pub use session::Session;
pub use session_state::{SessionApi, SessionStore};
pub use subreddit::{Availability, SubredditCreateRequest, SubredditSummary};
pub use user::{ChangeRoleRequest, JwtResponse, LoginRequest, SignUpRequest, User, UserSummary};
