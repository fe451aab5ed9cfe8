use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use send_wrapper::SendWrapper;
use web_sys::{File, HtmlInputElement};

use crate::api::ApiClient;
use crate::models::{Notifier, PostCreateRequest};

#[component]
pub fn PostCreate() -> impl IntoView {
    let notifier = expect_context::<Notifier>();
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let title = RwSignal::new(String::new());
    let subreddit = RwSignal::new(String::new());
    let url = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    // Browser handles are !Send; signals need Send values.
    let file = RwSignal::new(None::<SendWrapper<File>>);
    let subreddits = RwSignal::new(Vec::<String>::new());
    let problem = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    spawn_local(async move {
        match api.subreddit_titles().await {
            Ok(titles) => subreddits.set(titles),
            Err(e) => notifier.error(e.user_message()),
        }
    });

    let on_file = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let selected = input.files().and_then(|files| files.get(0));
        file.set(selected.map(SendWrapper::new));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = PostCreateRequest {
            title: title.get_untracked(),
            subreddit: subreddit.get_untracked(),
            url: url.get_untracked(),
            content: content.get_untracked(),
        };
        let attachment = file.get_untracked();
        if let Err(message) = request.validate(attachment.is_some()) {
            problem.set(Some(message));
            return;
        }
        problem.set(None);
        submitting.set(true);

        let navigate = navigate.clone();
        spawn_local(async move {
            let file = attachment.as_deref();
            match api.create_post(&request, file).await {
                Ok(response) => {
                    notifier.success(response.message);
                    navigate(
                        &format!("/subreddit/{}", request.subreddit.trim()),
                        Default::default(),
                    );
                }
                Err(e) => notifier.error(e.user_message()),
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="post-create">
            <h1 class="page-title">"Create post"</h1>
            <form on:submit=on_submit>
                <label>
                    "Title"
                    <input
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Subreddit"
                    <select on:change=move |ev| subreddit.set(event_target_value(&ev))>
                        <option value="" selected=move || subreddit.with(String::is_empty)>
                            "Choose a subreddit"
                        </option>
                        {move || {
                            subreddits
                                .get()
                                .into_iter()
                                .map(|name| {
                                    let value = name.clone();
                                    view! {
                                        <option
                                            value=name.clone()
                                            selected=move || subreddit.with(|s| *s == value)
                                        >
                                            {name.clone()}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </label>
                <label>
                    "Link"
                    <input
                        type="url"
                        placeholder="https://"
                        prop:value=move || url.get()
                        on:input=move |ev| url.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "File"
                    <input type="file" on:change=on_file />
                </label>
                <label>
                    "Text"
                    <textarea
                        rows="6"
                        prop:value=move || content.get()
                        on:input=move |ev| content.set(event_target_value(&ev))
                    ></textarea>
                </label>
                {move || problem.get().map(|message| view! { <p class="form-error">{message}</p> })}
                <button type="submit" class="primary" disabled=move || submitting.get()>
                    "Submit"
                </button>
            </form>
        </div>
    }
}
