//! Browser bindings
//!
//! The page owns the form, the SVG path view and the intro screen; it talks
//! to the puzzle through `WebSession`. Snapshots cross the boundary as JSON
//! strings (points serialize as `[x, y]`).

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::session::Session;
use crate::settings::Settings;

#[wasm_bindgen(start)]
pub fn wasm_main() {
    super::init_logging();
    log::info!("Hot/Cold starting...");
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| js_sys::Error::new(&e.to_string()).into())
}

fn to_js_error(e: anyhow::Error) -> JsValue {
    js_sys::Error::new(&format!("{:#}", e)).into()
}

#[wasm_bindgen]
pub struct WebSession {
    session: Session,
    show_hint: bool,
}

#[wasm_bindgen]
impl WebSession {
    /// New session using stored settings; pass no seed to seed from the clock
    #[wasm_bindgen(constructor)]
    pub fn new(seed: Option<u64>) -> Result<WebSession, JsValue> {
        let seed = seed.unwrap_or_else(super::fresh_seed);
        let settings = Settings::load();
        let show_hint = settings.show_hint;
        let session = Session::new(settings, seed).map_err(to_js_error)?;
        Ok(Self { session, show_hint })
    }

    /// Apply a numeric step; throws on non-finite input
    pub fn step(&mut self, distance: f64, direction_deg: f64) -> Result<String, JsValue> {
        let state = self
            .session
            .step(distance, direction_deg)
            .map_err(to_js_error)?;
        to_json(&state)
    }

    /// Apply a step straight from the form's text fields; throws with a
    /// readable message when either field doesn't parse
    pub fn submit(&mut self, distance: &str, direction: &str) -> Result<String, JsValue> {
        let state = self
            .session
            .submit(distance, direction)
            .map_err(to_js_error)?;
        to_json(&state)
    }

    /// Start a new attempt with a fresh goal
    pub fn reset(&mut self) -> Result<String, JsValue> {
        to_json(&self.session.reset())
    }

    pub fn state_json(&self) -> Result<String, JsValue> {
        to_json(&self.session.state())
    }

    /// First solved snapshot, or `null`
    pub fn solved_json(&self) -> Result<String, JsValue> {
        to_json(&self.session.solved_state())
    }

    pub fn lines_json(&self) -> Result<String, JsValue> {
        to_json(&self.session.game().lines())
    }

    pub fn start_json(&self) -> Result<String, JsValue> {
        to_json(&self.session.game().start_position())
    }

    pub fn goal_json(&self) -> Result<String, JsValue> {
        to_json(&self.session.game().goal_position())
    }

    pub fn attempts(&self) -> u32 {
        self.session.attempts()
    }

    pub fn show_hint(&self) -> bool {
        self.show_hint
    }

    /// Persist the intro hint toggle
    pub fn set_show_hint(&mut self, show: bool) {
        self.show_hint = show;
        let mut settings = self.session.settings().clone();
        settings.show_hint = show;
        settings.save();
    }
}
