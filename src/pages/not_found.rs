use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="page-not-found">
            <h1 class="title">"404"</h1>
            <p class="desc">"The page you're looking for was not found."</p>
            <a class="go-back" href="/home">"Go back"</a>
        </div>
    }
}
