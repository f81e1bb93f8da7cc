//! Valentine card core crate.
//!
//! A config-driven greeting card: three yes/no questions, floating emoji
//! decorations, a love meter slider, a background music toggle and two
//! escalating pop-up modals. The page injects `window.VALENTINE_CONFIG` and then
//! calls `start_card()`; everything else is wired from Rust.
//!
//! Modules holding pure logic (config validation, meter maths, click
//! escalation, modal state) are host-testable; DOM plumbing lives next to it and
//! is only exercised in the browser.

use wasm_bindgen::prelude::*;

mod card;
pub mod config;
mod dom;
pub mod escalation;
pub mod finale;
pub mod floating;
mod log;
pub mod love_meter;
pub mod modal;
pub mod music;
pub mod page;
mod rng;

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
// Exported entrypoints
// -----------------------------------------------------------------------------

/// Read `window.VALENTINE_CONFIG` and bring the card to life once the document
/// is ready.
#[wasm_bindgen]
pub fn start_card() -> Result<(), JsValue> {
    card::start()
}

/// Jump straight to the celebration screen (with the heart explosion).
#[wasm_bindgen]
pub fn celebrate() -> Result<(), JsValue> {
    card::celebrate()
}

/// Hide every question section and reveal `#question<n>`.
#[wasm_bindgen]
pub fn show_next_question(n: u8) -> Result<(), JsValue> {
    page::show_question(&dom::document()?, n)
}
