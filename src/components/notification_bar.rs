use leptos::prelude::*;
use leptos::tachys::dom::window;
use wasm_bindgen::JsCast;

use crate::config::NOTIFICATION_DURATION_MS;
use crate::models::Notifier;

/// Displays transient toasts (non-modal).
#[component]
pub fn NotificationBar() -> impl IntoView {
    let notifier = use_context::<Notifier>().expect("Notifier context missing");

    let last_timeout_id = std::rc::Rc::new(std::cell::Cell::new(None::<i32>));

    // Auto-dismiss effect
    Effect::new({
        let last_timeout_id = std::rc::Rc::clone(&last_timeout_id);
        move |_| {
            // A newer toast restarts the countdown
            if let Some(timeout_id) = last_timeout_id.take() {
                window().clear_timeout_with_handle(timeout_id);
            }

            if notifier.current().is_some() {
                let callback: wasm_bindgen::prelude::Closure<dyn FnMut()> =
                    wasm_bindgen::closure::Closure::new(move || {
                        notifier.clear();
                    });

                if let Ok(handle) = window().set_timeout_with_callback_and_timeout_and_arguments_0(
                    callback.as_ref().unchecked_ref(),
                    NOTIFICATION_DURATION_MS,
                ) {
                    last_timeout_id.set(Some(handle));
                    // Keep the closure alive for the timeout duration
                    callback.forget();
                }
            }
        }
    });

    view! {
        {move || {
            notifier.current().map(|notification| {
                view! {
                    <div
                        class=format!("notification-bar {}", notification.level.css_class())
                        role="status"
                        on:click=move |_| notifier.clear()
                    >
                        {notification.message}
                    </div>
                }
            })
        }}
    }
}
