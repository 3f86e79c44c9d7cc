use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_storage::{LocalStorage, SessionStorage, Storage};

use crate::utils::constants::STORAGE_KEY_REDIRECT_AFTER_LOGIN;

/// Durable boolean hints ("try to verify this role on next load").
///
/// Advisory only: a `true` hint merely allows one verification request.
pub trait HintStore {
    fn get(&self, key: &str) -> bool;
    fn set(&self, key: &str, value: bool);
    fn clear(&self, key: &str);
}

/// Hints kept in `window.localStorage`
#[derive(Clone, Copy, Default)]
pub struct LocalHints;

impl HintStore for LocalHints {
    fn get(&self, key: &str) -> bool {
        // Accept both JSON booleans and the "true" string older builds wrote
        match LocalStorage::get::<serde_json::Value>(key) {
            Ok(serde_json::Value::Bool(value)) => value,
            Ok(serde_json::Value::String(value)) => value == "true",
            _ => false,
        }
    }

    fn set(&self, key: &str, value: bool) {
        if let Err(e) = LocalStorage::set(key, value) {
            log::warn!("⚠️ Could not persist hint {}: {}", key, e);
        }
    }

    fn clear(&self, key: &str) {
        LocalStorage::delete(key);
    }
}

/// In-memory hints, for tests and non-browser runs
#[derive(Clone, Default)]
pub struct MemoryHints {
    values: Rc<RefCell<HashMap<String, bool>>>,
}

impl MemoryHints {
    pub fn with(entries: &[(&str, bool)]) -> Self {
        let hints = Self::default();
        for (key, value) in entries {
            hints.set(key, *value);
        }
        hints
    }
}

impl HintStore for MemoryHints {
    fn get(&self, key: &str) -> bool {
        self.values.borrow().get(key).copied().unwrap_or(false)
    }

    fn set(&self, key: &str, value: bool) {
        self.values.borrow_mut().insert(key.to_string(), value);
    }

    fn clear(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

/// Remembers the path a guard redirected away from
pub fn remember_redirect(path: &str) {
    if let Err(e) = SessionStorage::set(STORAGE_KEY_REDIRECT_AFTER_LOGIN, path) {
        log::warn!("⚠️ Could not remember redirect path: {}", e);
    }
}

/// Returns and forgets the remembered path
pub fn take_redirect() -> Option<String> {
    let path = SessionStorage::get::<String>(STORAGE_KEY_REDIRECT_AFTER_LOGIN).ok();
    SessionStorage::delete(STORAGE_KEY_REDIRECT_AFTER_LOGIN);
    path.filter(|p| p.starts_with('/'))
}
