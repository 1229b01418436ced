use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
mod globals {
    use super::RuntimeConfig;

    fn read_global(name: &str, keys: [&str; 2]) -> Option<String> {
        let w = web_sys::window()?;
        let any = js_sys::Reflect::get(&w, &name.into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        let obj = js_sys::Object::from(any);
        keys.iter()
            .filter_map(|key| js_sys::Reflect::get(&obj, &(*key).into()).ok())
            .find(|v| !v.is_undefined() && !v.is_null())
            .and_then(|v| v.as_string())
    }

    // window.__ACADEMIC_PORTAL_ENV = { API_BASE_URL: "..." } from env.js wins
    // over window.__ACADEMIC_PORTAL_CONFIG written after config.json loads.
    pub fn snapshot() -> Option<String> {
        read_global("__ACADEMIC_PORTAL_ENV", ["API_BASE_URL", "api_base_url"])
            .or_else(|| read_global("__ACADEMIC_PORTAL_CONFIG", ["api_base_url", "API_BASE_URL"]))
    }

    pub fn write(cfg: &RuntimeConfig) {
        let (Some(url), Some(w)) = (cfg.api_base_url.as_ref(), web_sys::window()) else {
            return;
        };
        let obj = js_sys::Object::new();
        let _ = js_sys::Reflect::set(
            &obj,
            &"api_base_url".into(),
            &wasm_bindgen::JsValue::from_str(url),
        );
        let _ = js_sys::Reflect::set(&w, &"__ACADEMIC_PORTAL_CONFIG".into(), &obj);
    }

    pub async fn fetch() -> Option<RuntimeConfig> {
        let origin = web_sys::window()?.location().origin().ok()?;
        let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
        if !resp.status().is_success() {
            log::info!("config.json not available ({})", resp.status());
            return None;
        }
        resp.json::<RuntimeConfig>().await.ok()
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod globals {
    use super::RuntimeConfig;

    pub fn snapshot() -> Option<String> {
        None
    }

    pub fn write(_cfg: &RuntimeConfig) {}

    pub async fn fetch() -> Option<RuntimeConfig> {
        None
    }
}

fn normalize(value: &str) -> Option<String> {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn cache_base_url(value: &str) -> String {
    let value = normalize(value).unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
    let _ = API_BASE_URL.set(value.clone());
    API_BASE_URL.get().cloned().unwrap_or(value)
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = globals::snapshot().as_deref().and_then(normalize) {
        return cache_base_url(&existing);
    }
    if let Some(cfg) = globals::fetch().await {
        globals::write(&cfg);
        if let Some(url) = cfg.api_base_url.as_deref().and_then(normalize) {
            return cache_base_url(&url);
        }
    }
    log::debug!("Using default API base URL {}", DEFAULT_API_BASE_URL);
    cache_base_url(DEFAULT_API_BASE_URL)
}

pub async fn init() {
    let base = await_api_base_url().await;
    log::info!("API base URL: {}", base);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_trailing_slash_and_blanks() {
        assert_eq!(
            normalize(" https://portal.example/api/ ").as_deref(),
            Some("https://portal.example/api")
        );
        assert_eq!(normalize("   "), None);
        assert_eq!(normalize("/"), None);
    }

    #[test]
    fn runtime_config_reads_snake_case_key() {
        let cfg: RuntimeConfig =
            serde_json::from_str(r#"{"api_base_url":"https://x.example/api"}"#).unwrap();
        assert_eq!(cfg.api_base_url.as_deref(), Some("https://x.example/api"));
    }
}
