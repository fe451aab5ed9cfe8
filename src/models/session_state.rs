use std::future::Future;

use leptos::prelude::*;

use crate::config::HOME_PATH;
use crate::error::ApiError;
use crate::models::{Generation, Notifier, Session, User};
use crate::storage::TokenStore;

pub const LOGIN_MESSAGE: &str = "You're successfully logged in.";
pub const LOGOUT_MESSAGE: &str = "You're successfully logged out.";

/// The two calls a session load needs. Implemented by `ApiClient`.
#[allow(async_fn_in_trait)]
pub trait SessionApi {
    async fn current_user(&self) -> Result<User, ApiError>;
    async fn unread_mention_count(&self) -> Result<u32, ApiError>;
}

/// Reactive session store shared with every component via `use_context()`.
///
/// All writes go through the methods below. Each load and logout takes a new
/// epoch; a load finishing under an older epoch drops its result, so a logout
/// issued while a load is in flight cannot be undone by the late response.
#[derive(Clone, Copy)]
pub struct SessionStore {
    session: RwSignal<Session>,
    loading: RwSignal<bool>,
    epoch: Generation,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(Session::anonymous()),
            loading: RwSignal::new(false),
            epoch: Generation::new(),
        }
    }

    /// Tracked copy of the whole session.
    pub fn snapshot(&self) -> Session {
        self.session.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(Session::is_authenticated)
    }

    pub fn current_user(&self) -> Option<User> {
        self.session.with(|s| s.current_user().cloned())
    }

    pub fn username(&self) -> Option<String> {
        self.session.with(|s| s.username().map(str::to_string))
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.session.with(|s| s.has_role(role))
    }

    pub fn mention_count(&self) -> u32 {
        self.session.with(Session::mention_count)
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    pub fn set_mention_count(&self, count: u32) {
        self.session.update(|s| s.set_mention_count(count));
    }

    pub fn adjust_mention_count(&self, delta: i32) {
        self.session.update(|s| s.adjust_mention_count(delta));
    }

    /// Ask the server who we are. A failure means "anonymous visitor" and is
    /// never surfaced; a failed mention count only logs.
    ///
    /// The epoch and loading flag are taken when this is called, not when the
    /// returned future is first polled, so the loading indicator is up before
    /// the first render.
    pub fn load<A: SessionApi>(&self, api: A) -> impl Future<Output = ()> {
        let store = *self;
        let epoch = store.epoch.next();
        store.loading.set(true);

        async move {
            let result = api.current_user().await;
            if !store.epoch.is_current(epoch) {
                log::debug!("Discarding stale session load (epoch {epoch})");
                return;
            }

            let user = match result {
                Ok(user) => user,
                Err(e) => {
                    log::debug!("No active session: {e}");
                    store.loading.set(false);
                    return;
                }
            };

            log::info!("Session loaded for {}", user.username);
            store.session.set(Session::authenticated(user));
            store.loading.set(false);

            match api.unread_mention_count().await {
                Ok(count) if store.epoch.is_current(epoch) => store.set_mention_count(count),
                Ok(_) => log::debug!("Discarding stale mention count (epoch {epoch})"),
                Err(e) => log::warn!("Failed to fetch unread mention count: {e}"),
            }
        }
    }

    /// Called once a token has been stored after a successful sign-in.
    pub async fn login<A, N>(&self, api: A, notifier: &Notifier, navigate: N)
    where
        A: SessionApi,
        N: Fn(&str),
    {
        notifier.success(LOGIN_MESSAGE);
        navigate(HOME_PATH);
        self.load(api).await;
    }

    pub fn logout<T, N>(&self, tokens: &T, notifier: &Notifier, navigate: N)
    where
        T: TokenStore + ?Sized,
        N: Fn(&str),
    {
        tokens.clear();
        self.epoch.next();
        self.session.set(Session::anonymous());
        self.loading.set(false);
        log::info!("Logged out");

        navigate(HOME_PATH);
        notifier.success(LOGOUT_MESSAGE);
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
