pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

#[cfg(target_arch = "wasm32")]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log_level()).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Starting Academic Portal frontend");

    // Pages resolve the base URL lazily, so mounting does not wait for this.
    leptos::spawn_local(async move {
        config::init().await;
    });

    router::mount_app();
}

#[cfg(not(target_arch = "wasm32"))]
pub fn start() {
    log::info!(
        "Academic Portal frontend runs in the browser; host builds log at {}",
        log_level()
    );
}
