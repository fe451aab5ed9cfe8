use leptos::prelude::*;

/// Spinner shown while data is in flight.
#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="loading-indicator" aria-busy="true">
            <span class="spinner"></span>
        </div>
    }
}
