use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Redirect, Router};
use leptos_router::hooks::use_location;

use crate::api::ApiClient;
use crate::components::{AppHeader, LoadingIndicator, NotificationBar};
use crate::models::{Notifier, SessionStore};
use crate::pages::{self, NotFound};
use crate::routes::{resolve, Outcome};

/// Root application component that provides global context and mounts the router.
#[component]
pub fn App() -> impl IntoView {
    let session = SessionStore::new();
    let notifier = Notifier::new();
    let api = ApiClient::from_config();

    provide_context(session);
    provide_context(notifier);
    provide_context(api);

    // Restore the session from a stored token, if any
    spawn_local(session.load(api));

    view! {
        <Router>
            <AppHeader />
            <NotificationBar />
            <main class="app-content">
                <div class="container">
                    <RouteView />
                </div>
            </main>
        </Router>
    }
}

/// Renders whatever the route gate decides for the current location.
#[component]
fn RouteView() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let location = use_location();

    let outcome = Memo::new(move |_| resolve(&location.pathname.get(), &session.snapshot()));

    move || {
        if session.is_loading() {
            return view! { <LoadingIndicator /> }.into_any();
        }
        match outcome.get() {
            Outcome::Render(page) => pages::render(page),
            Outcome::Redirect(path) => view! { <Redirect path=path /> }.into_any(),
            Outcome::Blank => ().into_any(),
            Outcome::NotFound => view! { <NotFound /> }.into_any(),
        }
    }
}
