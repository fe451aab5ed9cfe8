use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiClient, PageRequest, PostFeed};
use crate::components::{LoadingIndicator, PostItem};
use crate::models::{Generation, Notifier, PostSummary, SessionStore, UserVotes, VoteChoice};

/// Paged listing of one feed with "load more".
///
/// The feed is reactive: when it changes (a different subreddit, or the home
/// feed switching after login) the list restarts from the first page.
#[component]
pub fn PostList(#[prop(into)] feed: Signal<PostFeed>) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let notifier = expect_context::<Notifier>();
    let api = expect_context::<ApiClient>();

    let posts = RwSignal::new(Vec::<PostSummary>::new());
    let total = RwSignal::new(0_u64);
    let current_page = RwSignal::new(PageRequest::first());
    let loading = RwSignal::new(false);
    let votes = RwSignal::new(UserVotes::new());
    let generation = Generation::new();

    // A first page replaces the listing; "load more" continues it.
    let load_page = move |feed: PostFeed, page: PageRequest, append: bool| {
        let ticket = if append { generation.current() } else { generation.next() };
        loading.set(true);
        spawn_local(async move {
            let result = api.feed(&feed, page).await;
            if !generation.is_current(ticket) {
                log::debug!("Discarding stale {} page {}", feed.path(), page.page);
                return;
            }
            match result {
                Ok(result) => {
                    total.set(result.total);
                    if append {
                        posts.update(|p| p.extend(result.posts));
                    } else {
                        posts.set(result.posts);
                    }
                    current_page.set(page);
                }
                Err(e) => notifier.error(e.user_message()),
            }
            loading.set(false);
        });
    };

    Effect::new(move |_| {
        let feed = feed.get();
        load_page(feed, PageRequest::first(), false);
    });

    // Highlight the viewer's own votes
    let votes_generation = Generation::new();
    Effect::new(move |_| {
        let ticket = votes_generation.next();
        if session.is_authenticated() {
            spawn_local(async move {
                match api.user_votes().await {
                    Ok(user_votes) if votes_generation.is_current(ticket) => votes.set(user_votes),
                    Ok(_) => log::debug!("Discarding stale user votes"),
                    Err(e) => log::warn!("Failed to load user votes: {e}"),
                }
            });
        } else {
            votes.set(UserVotes::new());
        }
    });

    view! {
        <div class="post-list">
            {move || {
                let votes = votes.get();
                posts
                    .get()
                    .into_iter()
                    .map(|post| {
                        let vote = votes
                            .get(&post.id)
                            .copied()
                            .map_or(VoteChoice::None, VoteChoice::from_param);
                        view! { <PostItem post=post vote=vote /> }
                    })
                    .collect_view()
            }}
            <Show when=move || !loading.get() && posts.with(Vec::is_empty)>
                <p class="empty">{move || feed.with(PostFeed::empty_message)}</p>
            </Show>
            <Show when=move || loading.get()>
                <LoadingIndicator />
            </Show>
            <Show when=move || !loading.get() && current_page.get().has_more(total.get())>
                <button
                    class="load-more"
                    on:click=move |_| {
                        load_page(feed.get_untracked(), current_page.get_untracked().next(), true);
                    }
                >
                    "Load more"
                </button>
            </Show>
        </div>
    }
}
