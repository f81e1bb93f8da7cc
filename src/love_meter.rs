//! Love meter: a range input whose value past 100 stretches the bar beyond its
//! container and swaps in a tiered message.

use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, HtmlInputElement};

use crate::config::LoveMessages;
use crate::dom;

pub const BASELINE: i64 = 100;
/// Overflow is measured against this span (the slider runs up to 10000).
pub const OVERFLOW_SPAN: f64 = 9900.0;
/// Share of the viewport width the bar may grow by at full overflow.
pub const VIEWPORT_SHARE: f64 = 0.8;
pub const HIGH_ABOVE: i64 = 1000;
pub const EXTREME_FROM: i64 = 5000;

const HIDDEN: &str = "hidden";
const SUPER_LOVE: &str = "super-love";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoveTier {
    Normal,
    High,
    Extreme,
}

impl LoveTier {
    /// 1000 itself still reads as "normal"; 5000 is already "extreme".
    pub fn for_value(value: i64) -> Self {
        if value >= EXTREME_FROM {
            LoveTier::Extreme
        } else if value > HIGH_ABOVE {
            LoveTier::High
        } else {
            LoveTier::Normal
        }
    }

    pub fn message<'a>(&self, messages: &'a LoveMessages) -> &'a str {
        match self {
            LoveTier::Normal => &messages.normal,
            LoveTier::High => &messages.high,
            LoveTier::Extreme => &messages.extreme,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MeterWidth {
    Full,
    Extended { extra_px: f64 },
}

impl MeterWidth {
    pub fn css(&self) -> String {
        match self {
            MeterWidth::Full => "100%".to_owned(),
            MeterWidth::Extended { extra_px } => format!("calc(100% + {extra_px}px)"),
        }
    }
}

/// What the meter should look like for a given slider value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeterView {
    pub width: MeterWidth,
    /// `None` keeps the auxiliary message hidden.
    pub tier: Option<LoveTier>,
}

impl MeterView {
    pub fn for_value(value: i64, viewport_width: f64) -> Self {
        if value <= BASELINE {
            return Self {
                width: MeterWidth::Full,
                tier: None,
            };
        }
        let overflow = (value - BASELINE) as f64 / OVERFLOW_SPAN;
        Self {
            width: MeterWidth::Extended {
                extra_px: overflow * viewport_width * VIEWPORT_SHARE,
            },
            tier: Some(LoveTier::for_value(value)),
        }
    }

    pub fn super_love(&self) -> bool {
        self.tier == Some(LoveTier::Extreme)
    }
}

/// Handles onto the meter's three elements.
#[derive(Clone)]
pub struct LoveMeter {
    input: HtmlInputElement,
    readout: HtmlElement,
    extra: HtmlElement,
}

impl LoveMeter {
    pub fn find(doc: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            input: dom::by_id(doc, "loveMeter")?,
            readout: dom::by_id(doc, "loveValue")?,
            extra: dom::by_id(doc, "extraLove")?,
        })
    }

    pub fn input(&self) -> &HtmlInputElement {
        &self.input
    }

    /// Back to the resting position: value 100, full width.
    pub fn reset(&self) -> Result<(), JsValue> {
        self.input.set_value(&BASELINE.to_string());
        self.readout.set_text_content(Some(&BASELINE.to_string()));
        self.input.style().set_property("width", "100%")
    }

    pub fn update(&self, messages: &LoveMessages, viewport_width: f64) -> Result<(), JsValue> {
        let raw = self.input.value();
        let value = raw.trim().parse::<i64>().ok();
        self.readout
            .set_text_content(Some(&value.map_or(raw, |v| v.to_string())));

        let view = MeterView::for_value(value.unwrap_or(BASELINE), viewport_width);
        let classes = self.extra.class_list();
        let style = self.input.style();
        match view.tier {
            None => {
                classes.add_1(HIDDEN)?;
                classes.remove_1(SUPER_LOVE)?;
                style.set_property("width", &view.width.css())?;
            }
            Some(tier) => {
                classes.remove_1(HIDDEN)?;
                style.set_property("width", &view.width.css())?;
                style.set_property("transition", "width 0.3s")?;
                if view.super_love() {
                    classes.add_1(SUPER_LOVE)?;
                } else {
                    classes.remove_1(SUPER_LOVE)?;
                }
                self.extra.set_text_content(Some(tier.message(messages)));
            }
        }
        Ok(())
    }
}
