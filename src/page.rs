//! Static page text and question navigation.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::config::Config;
use crate::dom;

pub const QUESTION_SELECTOR: &str = ".question-section";
pub const HIDDEN: &str = "hidden";

/// Element id → text pairs copied from the configuration on ready.
pub fn text_bindings(config: &Config) -> Vec<(&'static str, String)> {
    let q = &config.questions;
    vec![
        ("valentineTitle", config.title_text()),
        ("question1Text", q.first.text.clone()),
        ("yesBtn1", q.first.yes_btn.clone()),
        ("noBtn1", q.first.no_btn.clone()),
        ("secretAnswerBtn", q.first.secret_answer.clone()),
        ("question2Text", q.second.text.clone()),
        ("startText", q.second.start_text.clone()),
        ("nextBtn", q.second.next_btn.clone()),
        ("question3Text", q.third.text.clone()),
        ("yesBtn3", q.third.yes_btn.clone()),
        ("noBtn3", q.third.no_btn.clone()),
    ]
}

pub fn populate(doc: &Document, config: &Config) -> Result<(), JsValue> {
    for (id, text) in text_bindings(config) {
        dom::set_text(doc, id, &text)?;
    }
    Ok(())
}

pub fn hide_questions(doc: &Document) -> Result<(), JsValue> {
    dom::add_class_all(doc, QUESTION_SELECTOR, HIDDEN)
}

/// Hide all question sections, then reveal `#question<n>`.
pub fn show_question(doc: &Document, n: u8) -> Result<(), JsValue> {
    hide_questions(doc)?;
    let section: Element = dom::by_id(doc, &format!("question{n}"))?;
    section.class_list().remove_1(HIDDEN)
}
