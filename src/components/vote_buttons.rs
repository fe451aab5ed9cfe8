use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::format::points;
use crate::models::{Notifier, SessionStore, VoteChoice};

/// What a vote is cast on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoteTarget {
    Post(String),
    Comment(String),
}

/// Up/down arrows with the running score.
#[component]
pub fn VoteButtons(
    target: VoteTarget,
    #[prop(default = VoteChoice::None)] initial: VoteChoice,
    upvotes: i64,
    downvotes: i64,
) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let notifier = expect_context::<Notifier>();
    let api = expect_context::<ApiClient>();

    let current = RwSignal::new(initial);
    let tally = RwSignal::new((upvotes, downvotes));
    let busy = RwSignal::new(false);
    let target = StoredValue::new(target);

    let cast = move |pressed: VoteChoice| {
        if !session.is_authenticated() {
            notifier.error("You must be logged in to vote.");
            return;
        }
        if busy.get_untracked() {
            return;
        }

        let previous = current.get_untracked();
        let next = previous.toggle(pressed);
        let target = target.get_value();
        busy.set(true);

        spawn_local(async move {
            let result = match &target {
                VoteTarget::Post(id) => api.vote_post(id, next).await,
                VoteTarget::Comment(id) => api.vote_comment(id, next).await,
            };
            match result {
                Ok(_) => {
                    let (up, down) = previous.tally_delta(next);
                    tally.update(|(u, d)| {
                        *u += up;
                        *d += down;
                    });
                    current.set(next);
                }
                Err(e) => notifier.error(e.user_message()),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="vote-buttons">
            <button
                class="vote-up"
                class:active=move || current.get() == VoteChoice::Up
                disabled=move || busy.get()
                on:click=move |_| cast(VoteChoice::Up)
            >
                "▲"
            </button>
            <span class="score">{move || points(tally.with(|(u, d)| u - d))}</span>
            <button
                class="vote-down"
                class:active=move || current.get() == VoteChoice::Down
                disabled=move || busy.get()
                on:click=move |_| cast(VoteChoice::Down)
            >
                "▼"
            </button>
        </div>
    }
}
