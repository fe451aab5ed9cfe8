use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::api::ApiClient;
use crate::config::ADMIN_ROLE;
use crate::models::{Notifier, SessionStore};

/// Top navigation bar. Its links follow the session: sign-in links for
/// visitors, create/mention/profile links and logout for members.
#[component]
pub fn AppHeader() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let notifier = expect_context::<Notifier>();
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        let navigate = navigate.clone();
        session.logout(&api.tokens(), &notifier, move |path| {
            navigate(path, Default::default());
        });
    };

    view! {
        <header class="app-header">
            <a class="app-title" href="/home">"notreddit"</a>
            <nav class="app-menu">
                <a href="/home">"Home"</a>
                <a href="/subreddit/all">"Subreddits"</a>
                {move || {
                    if session.is_authenticated() {
                        let username = session.username().unwrap_or_default();
                        let on_logout = on_logout.clone();
                        view! {
                            <a href="/post/create">"New post"</a>
                            <a href="/subreddit/create">"New subreddit"</a>
                            <a href="/user/mentions" class="mentions-link">
                                "Mentions"
                                <MentionBadge count=session.mention_count() />
                            </a>
                            {session
                                .has_role(ADMIN_ROLE)
                                .then(|| view! { <a href="/user/all">"Users"</a> })}
                            <a href=format!("/user/{username}")>{username.clone()}</a>
                            <button class="link-button" on:click=on_logout>
                                "Logout"
                            </button>
                        }
                            .into_any()
                    } else {
                        view! {
                            <a href="/login">"Login"</a>
                            <a href="/signup">"Signup"</a>
                        }
                            .into_any()
                    }
                }}
            </nav>
        </header>
    }
}

#[component]
fn MentionBadge(count: u32) -> impl IntoView {
    (count > 0).then(|| view! { <span class="badge">{count}</span> })
}
