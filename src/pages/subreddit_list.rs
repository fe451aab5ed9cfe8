use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::components::LoadingIndicator;
use crate::models::{Notifier, SessionStore, SubredditSummary};

/// Every subreddit with its post and subscriber counts.
#[component]
pub fn SubredditList() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let notifier = expect_context::<Notifier>();
    let api = expect_context::<ApiClient>();

    let subreddits = RwSignal::new(None::<Vec<SubredditSummary>>);

    spawn_local(async move {
        match api.subreddits_with_counts().await {
            Ok(list) => subreddits.set(Some(list)),
            Err(e) => {
                notifier.error(e.user_message());
                subreddits.set(Some(Vec::new()));
            }
        }
    });

    view! {
        <section class="subreddit-list">
            <div class="list-header">
                <h2>"Subreddits"</h2>
                <Show when=move || session.is_authenticated()>
                    <a class="button" href="/subreddit/create">"Create subreddit"</a>
                </Show>
            </div>
            {move || match subreddits.get() {
                None => view! { <LoadingIndicator /> }.into_any(),
                Some(list) if list.is_empty() => {
                    view! { <p class="empty">"No subreddits yet."</p> }.into_any()
                }
                Some(list) => view! {
                    <table>
                        <thead>
                            <tr><th>"Title"</th><th>"Posts"</th><th>"Subscribers"</th></tr>
                        </thead>
                        <tbody>
                            {list
                                .into_iter()
                                .map(|s| view! {
                                    <tr>
                                        <td><a href=format!("/subreddit/{}", s.title)>{format!("r/{}", s.title)}</a></td>
                                        <td>{s.post_count}</td>
                                        <td>{s.subscriber_count}</td>
                                    </tr>
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }
                    .into_any(),
            }}
        </section>
    }
}
