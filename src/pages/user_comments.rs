use leptos::prelude::*;
use leptos::task::spawn_local;

use super::user_posts::UserTabs;
use crate::api::{ApiClient, PageRequest};
use crate::components::LoadingIndicator;
use crate::format::{points, time_ago};
use crate::models::{Comment, Notifier};

#[component]
pub fn UserComments(username: String) -> impl IntoView {
    let notifier = expect_context::<Notifier>();
    let api = expect_context::<ApiClient>();

    let comments = RwSignal::new(Vec::<Comment>::new());
    let total = RwSignal::new(0_u64);
    let current_page = RwSignal::new(PageRequest::first());
    let loading = RwSignal::new(false);
    let owner = StoredValue::new(username.clone());

    let load_page = move |page: PageRequest| {
        loading.set(true);
        let username = owner.get_value();
        spawn_local(async move {
            match api.user_comments(&username, page).await {
                Ok(result) => {
                    total.set(result.total);
                    comments.update(|c| c.extend(result.comments));
                    current_page.set(page);
                }
                Err(e) => notifier.error(e.user_message()),
            }
            loading.set(false);
        });
    };

    load_page(PageRequest::first());

    view! {
        <section class="user-comments">
            <UserTabs username=username active="comments" />
            <ul class="comment-list">
                {move || comments.get().into_iter().map(|comment| view! { <UserComment comment=comment /> }).collect_view()}
            </ul>
            <Show when=move || !loading.get() && comments.with(Vec::is_empty)>
                <p class="empty">"No comments yet."</p>
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

#[component]
fn UserComment(comment: Comment) -> impl IntoView {
    let post_link = comment.post_id.clone().map(|id| {
        let title = comment.post_title.clone().unwrap_or_else(|| "post".to_string());
        view! { <a href=format!("/post/{id}")>{title}</a> }
    });

    view! {
        <li class="comment">
            <div class="comment-meta">
                {points(comment.score())} " · " {time_ago(&comment.created_on)}
                {post_link.map(|link| view! { " · on " {link} })}
            </div>
            <p class="comment-content">{comment.content}</p>
        </li>
    }
}
