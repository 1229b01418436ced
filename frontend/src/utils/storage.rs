//! Durable key/value storage for the browser session.
//!
//! On wasm32 this is `window.localStorage`. Host builds keep an in-memory
//! map per thread so tests can inspect what the session layer persisted.

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

#[cfg(target_arch = "wasm32")]
mod backend {
    use web_sys::{Storage, Window};

    pub fn window() -> Result<Window, String> {
        web_sys::window().ok_or_else(|| "No window object".to_string())
    }

    pub fn local_storage() -> Result<Storage, String> {
        window()?
            .local_storage()
            .map_err(|_| "No localStorage".to_string())?
            .ok_or_else(|| "No localStorage".to_string())
    }

    pub fn get_item(key: &str) -> Result<Option<String>, String> {
        local_storage()?
            .get_item(key)
            .map_err(|_| format!("Failed to read '{}'", key))
    }

    pub fn set_item(key: &str, value: &str) -> Result<(), String> {
        local_storage()?
            .set_item(key, value)
            .map_err(|_| format!("Failed to store '{}'", key))
    }

    pub fn remove_item(key: &str) -> Result<(), String> {
        local_storage()?
            .remove_item(key)
            .map_err(|_| format!("Failed to remove '{}'", key))
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static ITEMS: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub fn get_item(key: &str) -> Result<Option<String>, String> {
        Ok(ITEMS.with(|items| items.borrow().get(key).cloned()))
    }

    pub fn set_item(key: &str, value: &str) -> Result<(), String> {
        ITEMS.with(|items| {
            items.borrow_mut().insert(key.to_string(), value.to_string());
        });
        Ok(())
    }

    pub fn remove_item(key: &str) -> Result<(), String> {
        ITEMS.with(|items| {
            items.borrow_mut().remove(key);
        });
        Ok(())
    }

    #[cfg(test)]
    pub fn clear() {
        ITEMS.with(|items| items.borrow_mut().clear());
    }
}

pub use backend::*;

/// Removes the persisted token and user together.
pub fn clear_session() {
    if let Err(err) = remove_item(TOKEN_KEY) {
        log::warn!("{}", err);
    }
    if let Err(err) = remove_item(USER_KEY) {
        log::warn!("{}", err);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    #[test]
    fn clear_session_removes_both_keys() {
        clear();
        set_item(TOKEN_KEY, "abc").unwrap();
        set_item(USER_KEY, "{}").unwrap();
        set_item("other", "kept").unwrap();

        clear_session();

        assert_eq!(get_item(TOKEN_KEY).unwrap(), None);
        assert_eq!(get_item(USER_KEY).unwrap(), None);
        assert_eq!(get_item("other").unwrap().as_deref(), Some("kept"));
    }
}
