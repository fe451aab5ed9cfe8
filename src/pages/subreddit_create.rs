use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api::ApiClient;
use crate::models::{Notifier, SubredditCreateRequest};

#[component]
pub fn SubredditCreate() -> impl IntoView {
    let notifier = expect_context::<Notifier>();
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let title = RwSignal::new(String::new());
    let problem = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = match SubredditCreateRequest::new(&title.get_untracked()) {
            Ok(request) => request,
            Err(message) => {
                problem.set(Some(message));
                return;
            }
        };
        problem.set(None);
        submitting.set(true);

        let navigate = navigate.clone();
        spawn_local(async move {
            match api.is_subreddit_available(&request.title).await {
                Ok(false) => {
                    problem.set(Some("This subreddit already exists.".to_string()));
                    submitting.set(false);
                    return;
                }
                Ok(true) => {}
                Err(e) => log::warn!("Availability check failed: {e}"),
            }

            match api.create_subreddit(&request).await {
                Ok(response) => {
                    notifier.success(response.message);
                    navigate(&format!("/subreddit/{}", request.title), Default::default());
                }
                Err(e) => notifier.error(e.user_message()),
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="subreddit-create">
            <h1 class="page-title">"Create subreddit"</h1>
            <form on:submit=on_submit>
                <label>
                    "Title"
                    <input
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>
                {move || problem.get().map(|message| view! { <p class="form-error">{message}</p> })}
                <button type="submit" class="primary" disabled=move || submitting.get()>
                    "Create"
                </button>
            </form>
        </div>
    }
}
