//! Floating hearts and bears drifting across the page background.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

use crate::config::FloatingEmojis;
use crate::{dom, rng};

/// Extra hearts released by the celebration.
pub const EXPLOSION_HEARTS: usize = 50;

const CONTAINER_SELECTOR: &str = ".floating-elements";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decoration {
    Heart,
    Bear,
}

impl Decoration {
    pub fn class_name(&self) -> &'static str {
        match self {
            Decoration::Heart => "heart",
            Decoration::Bear => "bear",
        }
    }
}

/// Randomized start position and timing of one floating element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatPlacement {
    /// Horizontal start, in [0, 100) vw.
    pub left_vw: f64,
    /// Animation delay, in [0, 5) s.
    pub delay_s: f64,
    /// Animation duration, in [10, 30) s.
    pub duration_s: f64,
}

impl FloatPlacement {
    /// Scale three uniform [0, 1) samples into a placement.
    pub fn from_samples(left: f64, delay: f64, duration: f64) -> Self {
        Self {
            left_vw: left * 100.0,
            delay_s: delay * 5.0,
            duration_s: 10.0 + duration * 20.0,
        }
    }

    pub fn random() -> Self {
        Self::from_samples(rng::unit(), rng::unit(), rng::unit())
    }

    fn apply(&self, el: &HtmlElement) -> Result<(), JsValue> {
        let style = el.style();
        style.set_property("left", &format!("{}vw", self.left_vw))?;
        style.set_property("animation-delay", &format!("{}s", self.delay_s))?;
        style.set_property("animation-duration", &format!("{}s", self.duration_s))?;
        Ok(())
    }
}

fn container(doc: &Document) -> Result<Element, JsValue> {
    doc.query_selector(CONTAINER_SELECTOR)?
        .ok_or_else(|| JsValue::from_str("missing element .floating-elements"))
}

fn spawn(doc: &Document, parent: &Element, kind: Decoration, glyph: &str) -> Result<(), JsValue> {
    let el: HtmlElement = dom::create(doc, "div")?;
    el.set_class_name(kind.class_name());
    el.set_inner_html(glyph);
    FloatPlacement::random().apply(&el)?;
    parent.append_child(&el)?;
    Ok(())
}

/// One element per configured heart and bear.
pub fn create_floating_elements(doc: &Document, emojis: &FloatingEmojis) -> Result<(), JsValue> {
    let parent = container(doc)?;
    for heart in &emojis.hearts {
        spawn(doc, &parent, Decoration::Heart, heart)?;
    }
    for bear in &emojis.bears {
        spawn(doc, &parent, Decoration::Bear, bear)?;
    }
    Ok(())
}

/// Release [`EXPLOSION_HEARTS`] hearts, each a random pick of the configured
/// heart glyphs. Nothing happens when no hearts are configured.
pub fn heart_explosion(doc: &Document, hearts: &[String]) -> Result<(), JsValue> {
    if hearts.is_empty() {
        return Ok(());
    }
    let parent = container(doc)?;
    for _ in 0..EXPLOSION_HEARTS {
        let glyph = &hearts[rng::index(hearts.len())];
        spawn(doc, &parent, Decoration::Heart, glyph)?;
    }
    Ok(())
}
