//! End of the card: questions go away and the celebration container appears.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlImageElement};

use crate::config::Config;
use crate::{dom, floating, page};

/// Image shown on the final screen reached from the last question.
pub const FINAL_IMAGE_URL: &str = "images/final.png";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Finale {
    /// Explicit celebrate action, with a heart explosion.
    Celebration,
    /// Reached by answering "Yes" on the third question; shows the final image.
    FinalScreen,
}

impl Finale {
    pub fn spawns_explosion(&self) -> bool {
        matches!(self, Finale::Celebration)
    }

    pub fn shows_final_image(&self) -> bool {
        matches!(self, Finale::FinalScreen)
    }
}

pub fn reveal(doc: &Document, config: &Config, finale: Finale) -> Result<(), JsValue> {
    page::hide_questions(doc)?;
    let celebration: Element = dom::by_id(doc, "celebration")?;
    celebration.class_list().remove_1(page::HIDDEN)?;

    dom::set_text(doc, "celebrationTitle", &config.celebration.title)?;
    dom::set_text(doc, "celebrationMessage", &config.celebration.message)?;
    dom::set_text(doc, "celebrationEmojis", &config.celebration.emojis)?;

    if finale.shows_final_image() {
        let image: HtmlImageElement = dom::by_id(doc, "finalImage")?;
        image.set_src(FINAL_IMAGE_URL);
    }
    if finale.spawns_explosion() {
        floating::heart_explosion(doc, &config.floating_emojis.hearts)?;
    }
    Ok(())
}
