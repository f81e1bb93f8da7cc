//! Card runtime: bootstrap, shared state and event wiring.
//!
//! `start()` loads the configuration and waits for the document to be ready.
//! The ready sequence validates the configuration exactly once, fills in the
//! page, builds both modals and wires every listener. Handlers reach the
//! shared [`Card`] through the thread-local `CARD` cell; the browser dispatches
//! events one at a time, so a handler always has the state to itself.

use std::cell::{Cell, RefCell};

use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, HtmlElement};

use crate::config::{CONFIG_GLOBAL, Config};
use crate::escalation::{self, Escalation, NoOutcome, QuestionSlot, YesOutcome};
use crate::finale::{self, Finale};
use crate::love_meter::LoveMeter;
use crate::modal::{Modal, ModalKind};
use crate::{dom, floating, log, music, page, rng};

struct Card {
    config: Config,
    escalation: Escalation,
    no_modal: Modal,
    yes_modal: Modal,
    meter: LoveMeter,
}

thread_local! {
    static CARD: RefCell<Option<Card>> = const { RefCell::new(None) };
    // Set once `start()` gets past the guard, before any deferral to
    // DOMContentLoaded, so a second call can't queue another ready sequence.
    static STARTED: Cell<bool> = const { Cell::new(false) };
}

/// Claim the single start slot; `false` if the card was already started.
fn claim_start() -> bool {
    !STARTED.with(|started| started.replace(true))
}

fn with_card<R>(f: impl FnOnce(&mut Card) -> Result<R, JsValue>) -> Result<R, JsValue> {
    CARD.with(|cell| match cell.borrow_mut().as_mut() {
        Some(card) => f(card),
        None => Err(JsValue::from_str("card not started")),
    })
}

pub fn start() -> Result<(), JsValue> {
    if !claim_start() {
        log::warn("start_card called twice; ignoring");
        return Ok(());
    }

    let win = dom::window()?;
    let raw = js_sys::Reflect::get(&win, &JsValue::from_str(CONFIG_GLOBAL))?;
    let config = match Config::from_js(&raw) {
        Ok(config) => config,
        Err(err) => {
            // Nothing was wired; let a corrected bootstrap try again.
            STARTED.with(|started| started.set(false));
            return Err(err);
        }
    };
    let doc = dom::document()?;
    doc.set_title(&config.page_title);

    let state = js_sys::Reflect::get(&doc, &JsValue::from_str("readyState"))?;
    if state.as_string().as_deref() == Some("loading") {
        let mut pending = Some(config);
        dom::listen(&doc, "DOMContentLoaded", move |_| {
            if let Some(config) = pending.take() {
                log::on_err(on_ready(config));
            }
        })?;
    } else {
        on_ready(config)?;
    }
    Ok(())
}

fn on_ready(mut config: Config) -> Result<(), JsValue> {
    let warnings = config.validate();
    log::config_warnings(&warnings);

    let doc = dom::document()?;
    page::populate(&doc, &config)?;
    floating::create_floating_elements(&doc, &config.floating_emojis)?;
    music::setup(&doc, &config.music)?;

    let meter = LoveMeter::find(&doc)?;
    meter.reset()?;

    let no_modal = Modal::build(&doc, ModalKind::No, config.accent_color())?;
    let yes_modal = Modal::build(&doc, ModalKind::Yes, config.accent_color())?;

    CARD.with(|cell| {
        *cell.borrow_mut() = Some(Card {
            config,
            escalation: Escalation::default(),
            no_modal,
            yes_modal,
            meter,
        });
    });

    wire(&doc)
}

fn wire(doc: &Document) -> Result<(), JsValue> {
    for id in ["noBtn1", "noBtn3"] {
        let button: HtmlElement = dom::by_id(doc, id)?;
        let target = button.clone();
        dom::listen(&target, "click", move |_| log::on_err(on_no_click(&button)))?;
    }

    for (id, slot) in [("yesBtn1", QuestionSlot::First), ("yesBtn3", QuestionSlot::Third)] {
        let button: HtmlElement = dom::by_id(doc, id)?;
        dom::listen(&button, "click", move |_| log::on_err(on_yes_click(slot)))?;
    }

    for (id, next) in [("secretAnswerBtn", 2), ("nextBtn", 3)] {
        let button: HtmlElement = dom::by_id(doc, id)?;
        dom::listen(&button, "click", move |_| {
            log::on_err(dom::document().and_then(|doc| page::show_question(&doc, next)))
        })?;
    }

    let meter_input = with_card(|card| Ok(card.meter.input().clone()))?;
    dom::listen(&meter_input, "input", |_: Event| log::on_err(on_meter_input()))?;

    // Late-loading assets can reflow the slider; put it back at rest.
    let win = dom::window()?;
    dom::listen(&win, "load", |_| {
        log::on_err(with_card(|card| card.meter.reset()))
    })?;
    Ok(())
}

fn relocate(button: &HtmlElement) -> Result<(), JsValue> {
    let viewport = dom::viewport()?;
    let size = (
        f64::from(button.offset_width()),
        f64::from(button.offset_height()),
    );
    let (x, y) = escalation::relocation(viewport, size, (rng::unit(), rng::unit()));
    let style = button.style();
    style.set_property("position", "fixed")?;
    style.set_property("left", &format!("{x}px"))?;
    style.set_property("top", &format!("{y}px"))?;
    Ok(())
}

fn on_no_click(button: &HtmlElement) -> Result<(), JsValue> {
    let outcome = with_card(|card| Ok(card.escalation.on_no()))?;
    relocate(button)?;
    if outcome == NoOutcome::RelocateAndShowModal {
        with_card(|card| card.no_modal.show())?;
    }
    Ok(())
}

fn on_yes_click(slot: QuestionSlot) -> Result<(), JsValue> {
    with_card(|card| match card.escalation.on_yes(slot) {
        YesOutcome::Nothing => Ok(()),
        YesOutcome::ShowModal => card.yes_modal.show(),
        YesOutcome::Finale => finale::reveal(&dom::document()?, &card.config, Finale::FinalScreen),
    })
}

fn on_meter_input() -> Result<(), JsValue> {
    let (width, _) = dom::viewport()?;
    with_card(|card| card.meter.update(&card.config.love_messages, width))
}

pub fn celebrate() -> Result<(), JsValue> {
    let doc = dom::document()?;
    with_card(|card| finale::reveal(&doc, &card.config, Finale::Celebration))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_slot_is_claimed_once() {
        assert!(claim_start());
        assert!(!claim_start());
        assert!(!claim_start());
    }
}
