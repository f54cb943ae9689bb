//! Phonics Pages core crate.
//!
//! A static children's reading page rendered entirely in the browser: story
//! quizzes, flip-style flashcard answers, a phonics-highlighting pass over
//! the story paragraphs, and a fireworks celebration on a perfect score.
//! The host page supplies the story markup (`.story-paragraph` elements and
//! the quiz / answer / overlay containers); `start_reader()` wires the rest.
//! "Fetch more stories" is served from a client-side mock responder; there
//! is no backend.

use wasm_bindgen::prelude::*;

pub mod fireworks;
pub mod page;
pub mod phonics;
pub mod quiz;
pub mod stories;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// Unified entrypoint
// -----------------------------------------------------------------------------

/// Renders quizzes, answer flashcards and the phonics panel into the host
/// page and attaches all event listeners. Call once after the DOM is ready.
#[wasm_bindgen]
pub fn start_reader() -> Result<(), JsValue> {
    page::start_page()
}

/// Starts the fireworks celebration (normally raised internally by a perfect
/// quiz score; exported so the host page can trigger it directly).
#[wasm_bindgen]
pub fn launch_celebration() -> Result<(), JsValue> {
    fireworks::launch()
}

/// Dismisses the celebration overlay and halts the animation loop.
#[wasm_bindgen]
pub fn dismiss_celebration() -> Result<(), JsValue> {
    fireworks::dismiss()
}

/// Client-side stand-in for the service-worker fetch intercept: returns the
/// mock JSON payload for a handled request, or `None` to pass through.
#[wasm_bindgen]
pub fn intercept_fetch(method: &str, path: &str) -> Option<String> {
    stories::respond(method, path)
}

// Internal helper retained for timing-derived RNG seeds.
pub(crate) fn performance_now() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}
