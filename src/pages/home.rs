use leptos::prelude::*;

use crate::api::PostFeed;
use crate::components::PostList;
use crate::models::SessionStore;

/// Subscribed posts for members, default subreddits for visitors.
#[component]
pub fn Home() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let feed = Signal::derive(move || PostFeed::Home {
        authenticated: session.is_authenticated(),
    });

    view! {
        <section class="home">
            <PostList feed=feed />
        </section>
    }
}
