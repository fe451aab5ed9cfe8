use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiClient, PageRequest};
use crate::components::LoadingIndicator;
use crate::format::time_ago;
use crate::models::{Mention, Notifier, SessionStore};

/// Comments that mention the current user, newest first.
#[component]
pub fn MentionList() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let notifier = expect_context::<Notifier>();
    let api = expect_context::<ApiClient>();

    let mentions = RwSignal::new(Vec::<Mention>::new());
    let total = RwSignal::new(0_u64);
    let current_page = RwSignal::new(PageRequest::first());
    let loading = RwSignal::new(false);

    let load_page = move |page: PageRequest| {
        loading.set(true);
        spawn_local(async move {
            match api.mentions(page).await {
                Ok(result) => {
                    total.set(result.total);
                    mentions.update(|m| m.extend(result.mentions));
                    current_page.set(page);
                }
                Err(e) => notifier.error(e.user_message()),
            }
            loading.set(false);
        });
    };

    let mark = move |id: String, read: bool| {
        spawn_local(async move {
            match api.mark_mention(&id, read).await {
                Ok(_) => {
                    mentions.update(|list| {
                        if let Some(mention) = list.iter_mut().find(|m| m.id == id) {
                            mention.read = read;
                        }
                    });
                    session.adjust_mention_count(if read { -1 } else { 1 });
                }
                Err(e) => notifier.error(e.user_message()),
            }
        });
    };

    load_page(PageRequest::first());

    view! {
        <section class="mentions">
            <h2>"Mentions"</h2>
            <ul class="mention-list">
                {move || {
                    mentions
                        .get()
                        .into_iter()
                        .map(|mention| {
                            let id = mention.id.clone();
                            let read = mention.read;
                            view! {
                                <li class="mention" class:unread={!read}>
                                    <div class="mention-meta">
                                        <a href=format!("/user/{}", mention.creator_username)>
                                            {mention.creator_username.clone()}
                                        </a>
                                        " mentioned you in "
                                        <a href=format!("/post/{}", mention.post_id)>
                                            {mention.post_title.clone()}
                                        </a>
                                        " · "
                                        {time_ago(&mention.created_on)}
                                    </div>
                                    <p class="mention-content">{mention.comment_content.clone()}</p>
                                    <button class="link-button" on:click=move |_| mark(id.clone(), !read)>
                                        {if read { "Mark as unread" } else { "Mark as read" }}
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
            <Show when=move || !loading.get() && mentions.with(Vec::is_empty)>
                <p class="empty">"No mentions yet."</p>
            </Show>
            <Show when=move || loading.get()>
                <LoadingIndicator />
            </Show>
            <Show when=move || !loading.get() && current_page.get().has_more(total.get())>
                <button class="load-more" on:click=move |_| load_page(current_page.get_untracked().next())>
                    "Load more"
                </button>
            </Show>
        </section>
    }
}
