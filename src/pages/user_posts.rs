use leptos::prelude::*;

use crate::api::PostFeed;
use crate::components::PostList;
use crate::routes::UserListing;

/// Profile tabs shared by the user pages.
#[component]
pub fn UserTabs(username: String, active: &'static str) -> impl IntoView {
    let tabs = [
        ("posts", "Posts", format!("/user/{username}/posts")),
        ("comments", "Comments", format!("/user/{username}/comments")),
        ("upvoted", "Upvoted", format!("/user/{username}/upvoted")),
        ("downvoted", "Downvoted", format!("/user/{username}/downvoted")),
    ];

    view! {
        <div class="user-header">
            <h2>{format!("u/{username}")}</h2>
            <nav class="tabs">
                {tabs
                    .into_iter()
                    .map(|(key, label, href)| {
                        view! {
                            <a href=href class:active={key == active}>
                                {label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </div>
    }
}

#[component]
pub fn UserPosts(username: String, listing: UserListing) -> impl IntoView {
    let active = match listing {
        UserListing::Posts => "posts",
        UserListing::Upvoted => "upvoted",
        UserListing::Downvoted => "downvoted",
    };
    let feed = PostFeed::User {
        username: username.clone(),
        listing,
    };

    view! {
        <section class="user-posts">
            <UserTabs username=username active=active />
            <PostList feed=feed />
        </section>
    }
}
