use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api::ApiClient;
use crate::components::{CommentForm, CommentTree, LoadingIndicator, VoteButtons, VoteTarget};
use crate::config::{HOME_PATH, MODERATOR_ROLE};
use crate::format::time_ago;
use crate::models::{
    Comment, CommentSort, Generation, Notifier, PostDetails as Post, SessionStore, UserVotes,
    VoteChoice,
};

#[component]
pub fn PostDetails(id: String) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let notifier = expect_context::<Notifier>();
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let post = RwSignal::new(None::<Post>);
    let missing = RwSignal::new(false);
    let comments = RwSignal::new(Vec::<Comment>::new());
    let sort = RwSignal::new(CommentSort::default());
    let votes = RwSignal::new(UserVotes::new());
    let post_id = StoredValue::new(id);

    {
        let id = post_id.get_value();
        spawn_local(async move {
            match api.post_details(&id).await {
                Ok(details) => post.set(Some(details)),
                Err(e) => {
                    log::warn!("Failed to load post {id}: {e}");
                    missing.set(true);
                }
            }
        });
    }

    let comments_generation = Generation::new();

    let load_comments = move || {
        let id = post_id.get_value();
        let sort = sort.get_untracked();
        let ticket = comments_generation.next();
        spawn_local(async move {
            let result = api.post_comments(&id, sort).await;
            if !comments_generation.is_current(ticket) {
                log::debug!("Discarding stale comments for post {id}");
                return;
            }
            match result {
                Ok(list) => comments.set(list),
                Err(e) => notifier.error(e.user_message()),
            }
        });
    };

    Effect::new(move |_| {
        sort.track();
        load_comments();
    });

    Effect::new(move |_| {
        if session.is_authenticated() {
            spawn_local(async move {
                match api.user_votes().await {
                    Ok(user_votes) => votes.set(user_votes),
                    Err(e) => log::warn!("Failed to load user votes: {e}"),
                }
            });
        }
    });

    let can_delete = move || {
        let creator = post.with(|p| p.as_ref().map(|p| p.creator_username.clone()));
        creator.is_some_and(|creator| {
            session.username().as_deref() == Some(creator.as_str())
                || session.has_role(MODERATOR_ROLE)
        })
    };

    let on_delete = move |_| {
        let id = post_id.get_value();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api.delete_post(&id).await {
                Ok(response) => {
                    notifier.success(response.message);
                    navigate(HOME_PATH, Default::default());
                }
                Err(e) => notifier.error(e.user_message()),
            }
        });
    };

    let on_comment = Callback::new(move |()| load_comments());

    view! {
        <section class="post-details">
            {move || {
                if missing.get() {
                    return view! { <p class="empty">"This post does not exist."</p> }.into_any();
                }
                let Some(details) = post.get() else {
                    return view! { <LoadingIndicator /> }.into_any();
                };
                let vote = votes.with(|v| {
                    v.get(&details.id).copied().map_or(VoteChoice::None, VoteChoice::from_param)
                });
                view! {
                    <article class="post">
                        <VoteButtons
                            target=VoteTarget::Post(details.id.clone())
                            initial=vote
                            upvotes=details.upvotes
                            downvotes=details.downvotes
                        />
                        <div class="post-body">
                            <h1 class="post-title">{details.title.clone()}</h1>
                            <div class="post-meta">
                                "submitted " {time_ago(&details.created_on)} " by "
                                <a href=format!("/user/{}", details.creator_username)>
                                    {details.creator_username.clone()}
                                </a>
                                " to "
                                <a href=format!("/subreddit/{}", details.subreddit_title)>
                                    {format!("r/{}", details.subreddit_title)}
                                </a>
                            </div>
                            {details.file_url.clone().map(|src| view! {
                                <img class="post-image" src=src alt=details.title.clone() />
                            })}
                            {details.url.clone().map(|url| view! {
                                <a class="post-link" href=url.clone() target="_blank" rel="noopener noreferrer">
                                    {url.clone()}
                                </a>
                            })}
                            {details.content.clone().map(|content| view! {
                                <p class="post-content">{content}</p>
                            })}
                        </div>
                    </article>
                }
                    .into_any()
            }}
            <Show when=can_delete>
                <button class="danger" on:click=on_delete.clone()>
                    "Delete post"
                </button>
            </Show>
            <Show when=move || session.is_authenticated()>
                <CommentForm post_id=post_id.get_value() on_created=on_comment />
            </Show>
            <div class="comment-sort">
                "Sort by "
                <select on:change=move |ev| {
                    let value = event_target_value(&ev);
                    if let Some(choice) = CommentSort::ALL.into_iter().find(|s| s.label() == value) {
                        sort.set(choice);
                    }
                }>
                    {CommentSort::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.label() selected=move || sort.get() == s>{s.label()}</option> })
                        .collect_view()}
                </select>
            </div>
            {move || {
                view! {
                    <CommentTree
                        comments=comments.get()
                        post_id=post_id.get_value()
                        votes=votes
                        on_changed=on_comment
                    />
                }
            }}
        </section>
    }
}
