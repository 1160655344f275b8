//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Logger setup
//! - Seeding new sessions
//! - Exposing the session to the JS presentation layer (wasm32 only)

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Seed for a new session when the caller doesn't supply one
#[cfg(target_arch = "wasm32")]
pub fn fresh_seed() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
pub fn fresh_seed() -> u64 {
    rand::random()
}

/// Route `log` output to the browser console
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Route `log` output to stderr (filtered by RUST_LOG)
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    let _ = env_logger::try_init();
}
