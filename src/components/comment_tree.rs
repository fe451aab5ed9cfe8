use leptos::prelude::*;

use crate::components::{CommentForm, VoteButtons, VoteTarget};
use crate::format::time_ago;
use crate::models::{Comment, SessionStore, UserVotes, VoteChoice};

/// Nested comment thread of a post.
#[component]
pub fn CommentTree(
    comments: Vec<Comment>,
    post_id: String,
    #[prop(into)] votes: Signal<UserVotes>,
    #[prop(into)] on_changed: Callback<()>,
) -> impl IntoView {
    if comments.is_empty() {
        return view! { <p class="empty">"No comments yet."</p> }.into_any();
    }

    view! {
        <ul class="comment-tree">
            {comments
                .into_iter()
                .map(|comment| {
                    view! {
                        <CommentNode
                            comment=comment
                            post_id=post_id.clone()
                            votes=votes
                            on_changed=on_changed
                        />
                    }
                })
                .collect_view()}
        </ul>
    }
    .into_any()
}

#[component]
fn CommentNode(
    comment: Comment,
    post_id: String,
    votes: Signal<UserVotes>,
    on_changed: Callback<()>,
) -> AnyView {
    let session = expect_context::<SessionStore>();
    let replying = RwSignal::new(false);

    let vote = votes.with_untracked(|v| {
        v.get(&comment.id)
            .copied()
            .map_or(VoteChoice::None, VoteChoice::from_param)
    });
    let comment_id = comment.id.clone();
    let reply_post_id = post_id.clone();

    let children = comment
        .children
        .into_iter()
        .map(|child| {
            view! {
                <CommentNode
                    comment=child
                    post_id=post_id.clone()
                    votes=votes
                    on_changed=on_changed
                />
            }
            .into_any()
        })
        .collect_view();

    view! {
        <li class="comment">
            <div class="comment-meta">
                <a href=format!("/user/{}", comment.creator_username)>
                    {comment.creator_username.clone()}
                </a>
                " · "
                {time_ago(&comment.created_on)}
            </div>
            <p class="comment-content">{comment.content}</p>
            <div class="comment-actions">
                <VoteButtons
                    target=VoteTarget::Comment(comment.id)
                    initial=vote
                    upvotes=comment.upvotes
                    downvotes=comment.downvotes
                />
                <Show when=move || session.is_authenticated()>
                    <button class="link-button" on:click=move |_| replying.update(|r| *r = !*r)>
                        "Reply"
                    </button>
                </Show>
            </div>
            <Show when=move || replying.get()>
                <CommentForm
                    post_id=reply_post_id.clone()
                    parent_id=comment_id.clone()
                    on_created=Callback::new(move |()| {
                        replying.set(false);
                        on_changed.run(());
                    })
                />
            </Show>
            <ul class="comment-children">{children}</ul>
        </li>
    }
    .into_any()
}
