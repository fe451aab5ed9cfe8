use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api::ApiClient;
use crate::models::{Notifier, SignUpRequest};

#[component]
pub fn Signup() -> impl IntoView {
    let notifier = expect_context::<Notifier>();
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let problem = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = SignUpRequest {
            username: username.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        if let Err(message) = request.validate() {
            problem.set(Some(message));
            return;
        }
        problem.set(None);
        submitting.set(true);

        let navigate = navigate.clone();
        spawn_local(async move {
            match api.sign_up(&request).await {
                Ok(_) => {
                    notifier.success(
                        "Thank you! You're successfully registered. Please Login to continue!",
                    );
                    navigate("/login", Default::default());
                }
                Err(e) => notifier.error(e.user_message()),
            }
            submitting.set(false);
        });
    };

    let field = move |label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <label>
                {label}
                <input
                    type=kind
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <div class="signup-container">
            <h1 class="page-title">"Sign Up"</h1>
            <form class="signup-form" on:submit=on_submit>
                {field("Username", "text", username)}
                {field("Email", "email", email)}
                {field("Password", "password", password)}
                {field("Confirm password", "password", confirm_password)}
                {move || problem.get().map(|message| view! { <p class="form-error">{message}</p> })}
                <button type="submit" class="primary" disabled=move || submitting.get()>
                    "Sign up"
                </button>
                <p>"Already registered? " <a href="/login">"Login now!"</a></p>
            </form>
        </div>
    }
}
