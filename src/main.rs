use leptos::prelude::*;
use notreddit_ui::logging::setup_logging;
use notreddit_ui::App;

fn main() {
    setup_logging();
    mount_to_body(|| view! { <App /> });
}
