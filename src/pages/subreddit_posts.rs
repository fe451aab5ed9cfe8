use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiClient, PostFeed};
use crate::components::PostList;
use crate::models::{Notifier, SessionStore};

/// Posts of one subreddit with a subscribe toggle for members.
#[component]
pub fn SubredditPosts(subreddit: String) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let notifier = expect_context::<Notifier>();
    let api = expect_context::<ApiClient>();

    let subscribed = RwSignal::new(None::<bool>);
    let title = StoredValue::new(subreddit.clone());

    Effect::new(move |_| {
        if !session.is_authenticated() {
            subscribed.set(None);
            return;
        }
        let title = title.get_value();
        spawn_local(async move {
            match api.is_subscribed(&title).await {
                Ok(value) => subscribed.set(Some(value)),
                Err(e) => log::warn!("Failed to check subscription to {title}: {e}"),
            }
        });
    });

    let toggle = move |_| {
        let Some(current) = subscribed.get_untracked() else {
            return;
        };
        let title = title.get_value();
        spawn_local(async move {
            match api.set_subscription(&title, !current).await {
                Ok(response) => {
                    subscribed.set(Some(!current));
                    notifier.success(response.message);
                }
                Err(e) => notifier.error(e.user_message()),
            }
        });
    };

    let feed = PostFeed::Subreddit {
        title: subreddit.clone(),
    };

    view! {
        <section class="subreddit-posts">
            <div class="list-header">
                <h2>{format!("r/{subreddit}")}</h2>
                {move || {
                    subscribed.get().map(|is_subscribed| view! {
                        <button class="subscribe" on:click=toggle>
                            {if is_subscribed { "Unsubscribe" } else { "Subscribe" }}
                        </button>
                    })
                }}
            </div>
            <PostList feed=feed />
        </section>
    }
}
