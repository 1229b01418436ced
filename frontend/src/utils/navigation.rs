//! Full-page navigation outside the router.
//!
//! Session teardown happens below the component tree (in the API client),
//! so it cannot use `use_navigate`. Host builds record the last target
//! instead of touching `window.location`.

#[cfg(target_arch = "wasm32")]
mod backend {
    pub fn current_path() -> Option<String> {
        web_sys::window().and_then(|w| w.location().pathname().ok())
    }

    pub fn current_location() -> Option<String> {
        let location = web_sys::window()?.location();
        let path = location.pathname().ok()?;
        let search = location.search().unwrap_or_default();
        Some(format!("{}{}", path, search))
    }

    pub fn redirect_to(target: &str) {
        if let Some(window) = web_sys::window() {
            if window.location().set_href(target).is_err() {
                log::warn!("Failed to navigate to {}", target);
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use std::cell::RefCell;

    thread_local! {
        static CURRENT_PATH: RefCell<String> = RefCell::new("/".to_string());
        static LAST_REDIRECT: RefCell<Option<String>> = const { RefCell::new(None) };
    }

    pub fn current_path() -> Option<String> {
        Some(CURRENT_PATH.with(|path| path.borrow().clone()))
    }

    pub fn current_location() -> Option<String> {
        current_path()
    }

    pub fn redirect_to(target: &str) {
        LAST_REDIRECT.with(|last| *last.borrow_mut() = Some(target.to_string()));
        CURRENT_PATH.with(|path| *path.borrow_mut() = target.to_string());
    }

    #[cfg(test)]
    pub fn set_current_path(value: &str) {
        CURRENT_PATH.with(|path| *path.borrow_mut() = value.to_string());
    }

    #[cfg(test)]
    pub fn take_last_redirect() -> Option<String> {
        LAST_REDIRECT.with(|last| last.borrow_mut().take())
    }
}

pub use backend::*;

pub const LOGIN_PATH: &str = "/login";
pub const DEFAULT_LANDING: &str = "/dashboard";

/// Sends the browser to the login page unless it is already there.
pub fn redirect_to_login_if_needed() {
    if current_path().as_deref() == Some(LOGIN_PATH) {
        return;
    }
    redirect_to(LOGIN_PATH);
}

/// Login URL that brings the user back to `requested` afterwards.
pub fn login_url_for(requested: &str) -> String {
    if requested.is_empty() || requested == "/" || requested.starts_with(LOGIN_PATH) {
        return LOGIN_PATH.to_string();
    }
    let encoded =
        percent_encoding::utf8_percent_encode(requested, percent_encoding::NON_ALPHANUMERIC);
    format!("{}?redirect={}", LOGIN_PATH, encoded)
}

/// Decoded value of `key` in the query part of `location`.
pub fn query_value(location: &str, key: &str) -> Option<String> {
    let (_, query) = location.split_once('?')?;
    query.split('&').find_map(|pair| {
        let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
        if name != key {
            return None;
        }
        let value = value.replace('+', " ");
        percent_encoding::percent_decode_str(&value)
            .decode_utf8()
            .ok()
            .map(|decoded| decoded.into_owned())
    })
}

pub fn current_query_value(key: &str) -> Option<String> {
    current_location().and_then(|location| query_value(&location, key))
}

/// Accepts only same-origin absolute paths as post-login targets.
pub fn sanitize_redirect(candidate: Option<&str>) -> String {
    match candidate.map(str::trim) {
        Some(path) if is_same_origin_path(path) && !path.starts_with(LOGIN_PATH) => {
            path.to_string()
        }
        _ => DEFAULT_LANDING.to_string(),
    }
}

/// Browsers read `\` as `/` and drop tabs and newlines, so either can turn a
/// relative path into `//host`.
fn is_same_origin_path(path: &str) -> bool {
    path.starts_with('/')
        && !path.starts_with("//")
        && !path.chars().any(|c| c == '\\' || c.is_control())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_url_encodes_requested_path() {
        assert_eq!(
            login_url_for("/admin/students?q=a b"),
            "/login?redirect=%2Fadmin%2Fstudents%3Fq%3Da%20b"
        );
        assert_eq!(login_url_for("/"), "/login");
        assert_eq!(login_url_for("/login"), "/login");
    }

    #[test]
    fn query_value_decodes_redirect() {
        let url = login_url_for("/admin/students?q=a b");
        assert_eq!(
            query_value(&url, "redirect").as_deref(),
            Some("/admin/students?q=a b")
        );
        assert_eq!(query_value("/login?x=1&redirect=", "redirect").as_deref(), Some(""));
        assert_eq!(query_value("/login", "redirect"), None);
        assert_eq!(query_value("/login?other=1", "redirect"), None);
    }

    #[test]
    fn sanitize_redirect_rejects_foreign_targets() {
        assert_eq!(sanitize_redirect(Some("/student/fees")), "/student/fees");
        assert_eq!(sanitize_redirect(Some("//evil.example")), "/dashboard");
        assert_eq!(sanitize_redirect(Some("https://evil.example")), "/dashboard");
        assert_eq!(sanitize_redirect(Some("/\\evil.example")), "/dashboard");
        assert_eq!(sanitize_redirect(Some("/\t/evil.example")), "/dashboard");
        assert_eq!(sanitize_redirect(Some("/student\\..\\x")), "/dashboard");
        assert_eq!(sanitize_redirect(Some("/login")), "/dashboard");
        assert_eq!(sanitize_redirect(None), "/dashboard");
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    #[test]
    fn redirect_skipped_when_already_on_login() {
        set_current_path("/login");
        let _ = take_last_redirect();
        redirect_to_login_if_needed();
        assert_eq!(take_last_redirect(), None);

        set_current_path("/admin/programs");
        redirect_to_login_if_needed();
        assert_eq!(take_last_redirect().as_deref(), Some("/login"));
    }
}
