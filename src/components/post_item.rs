use leptos::prelude::*;

use crate::components::{VoteButtons, VoteTarget};
use crate::format::time_ago;
use crate::models::{PostSummary, VoteChoice};

/// One row of a post listing.
#[component]
pub fn PostItem(post: PostSummary, #[prop(default = VoteChoice::None)] vote: VoteChoice) -> impl IntoView {
    let details_href = format!("/post/{}", post.id);
    let comments_label = match post.comment_count {
        1 => "1 comment".to_string(),
        n => format!("{n} comments"),
    };

    view! {
        <article class="post-item">
            <VoteButtons
                target=VoteTarget::Post(post.id.clone())
                initial=vote
                upvotes=post.upvotes
                downvotes=post.downvotes
            />
            {post.thumbnail_url.clone().map(|src| view! {
                <img class="post-thumbnail" src=src alt="" />
            })}
            <div class="post-body">
                <a class="post-title" href=details_href.clone()>{post.title.clone()}</a>
                {post.url.clone().map(|url| view! {
                    <a class="post-link" href=url.clone() target="_blank" rel="noopener noreferrer">
                        {url.clone()}
                    </a>
                })}
                <div class="post-meta">
                    "submitted " {time_ago(&post.created_on)} " by "
                    <a href=format!("/user/{}", post.creator_username)>
                        {post.creator_username.clone()}
                    </a>
                    " to "
                    <a href=format!("/subreddit/{}", post.subreddit_title)>
                        {format!("r/{}", post.subreddit_title)}
                    </a>
                </div>
                <a class="post-comments" href=details_href>{comments_label}</a>
            </div>
        </article>
    }
}
