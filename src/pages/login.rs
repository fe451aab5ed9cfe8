use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api::ApiClient;
use crate::models::{LoginRequest, Notifier, SessionStore};
use crate::storage::TokenStore;

#[component]
pub fn Login() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let notifier = expect_context::<Notifier>();
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = LoginRequest {
            username_or_email: username.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        if request.username_or_email.is_empty() || request.password.is_empty() {
            notifier.error("Please enter your username or email and password.");
            return;
        }

        submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match api.sign_in(&request).await {
                Ok(jwt) => {
                    api.tokens().set_token(&jwt.access_token);
                    session
                        .login(api, &notifier, move |path| navigate(path, Default::default()))
                        .await;
                }
                Err(e) if e.is_unauthorized() => {
                    notifier.error("Your Username or Password is incorrect. Please try again!");
                }
                Err(e) => notifier.error(e.user_message()),
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="login-container">
            <h1 class="page-title">"Login"</h1>
            <form class="login-form" on:submit=on_submit>
                <label>
                    "Username or Email"
                    <input
                        type="text"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" class="primary" disabled=move || submitting.get()>
                    "Login"
                </button>
                <p>"Or " <a href="/signup">"register now!"</a></p>
            </form>
        </div>
    }
}
