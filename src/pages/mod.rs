pub mod all_users;
pub mod home;
pub mod login;
pub mod mentions;
pub mod not_found;
pub mod post_create;
pub mod post_details;
pub mod signup;
pub mod subreddit_create;
pub mod subreddit_list;
pub mod subreddit_posts;
pub mod user_comments;
pub mod user_posts;

use leptos::prelude::*;

use crate::routes::Page;

pub use all_users::AllUsers;
pub use home::Home;
pub use login::Login;
pub use mentions::MentionList;
pub use not_found::NotFound;
pub use post_create::PostCreate;
pub use post_details::PostDetails;
pub use signup::Signup;
pub use subreddit_create::SubredditCreate;
pub use subreddit_list::SubredditList;
pub use subreddit_posts::SubredditPosts;
pub use user_comments::UserComments;
pub use user_posts::UserPosts;

/// View for a page the gate decided to render.
pub fn render(page: Page) -> AnyView {
    match page {
        Page::Login => view! { <Login /> }.into_any(),
        Page::Signup => view! { <Signup /> }.into_any(),
        Page::AllUsers => view! { <AllUsers /> }.into_any(),
        Page::SubredditCreate => view! { <SubredditCreate /> }.into_any(),
        Page::PostCreate => view! { <PostCreate /> }.into_any(),
        Page::Mentions => view! { <MentionList /> }.into_any(),
        Page::PostDetails { id } => view! { <PostDetails id=id /> }.into_any(),
        Page::Home => view! { <Home /> }.into_any(),
        Page::UserPosts { username, listing } => {
            view! { <UserPosts username=username listing=listing /> }.into_any()
        }
        Page::UserComments { username } => view! { <UserComments username=username /> }.into_any(),
        Page::SubredditList => view! { <SubredditList /> }.into_any(),
        Page::SubredditPosts { subreddit } => {
            view! { <SubredditPosts subreddit=subreddit /> }.into_any()
        }
    }
}
