use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::models::{CommentCreateRequest, Notifier};

/// Text box posting a comment, top-level or as a reply to `parent_id`.
#[component]
pub fn CommentForm(
    post_id: String,
    #[prop(optional)] parent_id: Option<String>,
    #[prop(into)] on_created: Callback<()>,
) -> impl IntoView {
    let notifier = expect_context::<Notifier>();
    let api = expect_context::<ApiClient>();

    let content = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);
    let target = StoredValue::new((post_id, parent_id));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = content.get_untracked();
        if text.trim().is_empty() {
            notifier.error("Comment cannot be empty.");
            return;
        }

        let (post_id, parent_id) = target.get_value();
        let request = CommentCreateRequest {
            post_id,
            content: text.trim().to_string(),
            parent_id,
        };
        submitting.set(true);

        spawn_local(async move {
            match api.create_comment(&request).await {
                Ok(response) => {
                    content.set(String::new());
                    notifier.success(if response.message.is_empty() {
                        "Comment posted.".to_string()
                    } else {
                        response.message
                    });
                    on_created.run(());
                }
                Err(e) => notifier.error(e.user_message()),
            }
            submitting.set(false);
        });
    };

    view! {
        <form class="comment-form" on:submit=on_submit>
            <textarea
                rows="3"
                placeholder="What are your thoughts?"
                prop:value=move || content.get()
                on:input=move |ev| content.set(event_target_value(&ev))
            ></textarea>
            <button type="submit" disabled=move || submitting.get()>
                "Comment"
            </button>
        </form>
    }
}
