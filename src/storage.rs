use std::cell::RefCell;

use crate::config::ACCESS_TOKEN;

/// Where the bearer token lives between page loads.
pub trait TokenStore {
    fn token(&self) -> Option<String>;
    fn set_token(&self, token: &str);
    fn clear(&self);
}

/// Token persisted in the browser's localStorage under [`ACCESS_TOKEN`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTokenStore;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for LocalTokenStore {
    fn token(&self) -> Option<String> {
        local_storage()
            .and_then(|storage| storage.get_item(ACCESS_TOKEN).ok().flatten())
            .filter(|token| !token.is_empty())
    }

    fn set_token(&self, token: &str) {
        let Some(storage) = local_storage() else {
            log::warn!("localStorage unavailable, token not persisted");
            return;
        };
        if let Err(e) = storage.set_item(ACCESS_TOKEN, token) {
            log::warn!("Failed to store access token: {e:?}");
        }
    }

    fn clear(&self) {
        if let Some(storage) = local_storage() {
            if let Err(e) = storage.remove_item(ACCESS_TOKEN) {
                log::warn!("Failed to remove access token: {e:?}");
            }
        }
    }
}

/// Token held in memory only; lost on reload.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RefCell::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn set_token(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
    }
}
