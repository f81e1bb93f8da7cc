// Browser tests: `wasm-pack test --headless --firefox`.
// They build real DOM nodes, so they only compile for wasm32.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use valentine_card::config::{Config, MusicConfig};
use valentine_card::floating::{EXPLOSION_HEARTS, heart_explosion};
use valentine_card::love_meter::LoveMeter;
use valentine_card::modal::{EXIT_ANIMATION_MS, Modal, ModalKind, ModalPhase};
use valentine_card::music;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Append a fresh `<tag id=id>` to the body, replacing any left by an earlier test.
fn fixture<T: JsCast>(doc: &Document, tag: &str, id: &str) -> T {
    if let Some(old) = doc.get_element_by_id(id) {
        old.remove();
    }
    let el = doc.create_element(tag).unwrap();
    el.set_id(id);
    doc.body().unwrap().append_child(&el).unwrap();
    el.dyn_into().unwrap()
}

fn overlay(doc: &Document, modal: &Modal) -> HtmlElement {
    doc.get_element_by_id(&modal.kind().element_id("Overlay"))
        .unwrap()
        .dyn_into()
        .unwrap()
}

fn build_modal(doc: &Document, kind: ModalKind) -> Modal {
    if let Some(old) = doc.get_element_by_id(&kind.element_id("Overlay")) {
        old.remove();
    }
    Modal::build(doc, kind, "#ff6b6b").unwrap()
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

fn display(el: &HtmlElement) -> String {
    el.style().get_property_value("display").unwrap()
}

#[wasm_bindgen_test]
fn modal_is_built_hidden_and_shows_content() {
    let doc = document();
    let modal = build_modal(&doc, ModalKind::No);
    assert_eq!(modal.kind(), ModalKind::No);
    let overlay = overlay(&doc, &modal);
    assert_eq!(display(&overlay), "none");
    assert_eq!(modal.phase(), ModalPhase::Hidden);

    modal.show().unwrap();
    assert_eq!(display(&overlay), "flex");
    assert!(overlay.class_list().contains("modal-in"));
    let msg = doc.get_element_by_id("noModalMsg").unwrap();
    assert_eq!(msg.text_content().unwrap(), ModalKind::No.content().message);
    assert_eq!(modal.phase(), ModalPhase::Visible);
}

#[wasm_bindgen_test]
fn double_hide_does_not_throw() {
    let doc = document();
    let modal = build_modal(&doc, ModalKind::Yes);
    modal.show().unwrap();
    modal.hide().unwrap();
    modal.hide().unwrap();
    assert_eq!(modal.phase(), ModalPhase::Exiting);
    assert!(overlay(&doc, &modal).class_list().contains("modal-out"));
}

#[wasm_bindgen_test]
async fn hidden_modal_is_torn_down_after_exit_animation() {
    let doc = document();
    let modal = build_modal(&doc, ModalKind::No);
    modal.show().unwrap();
    modal.hide().unwrap();

    let overlay = overlay(&doc, &modal);
    assert_eq!(display(&overlay), "flex");

    sleep(EXIT_ANIMATION_MS + 100).await;
    assert_eq!(modal.phase(), ModalPhase::Hidden);
    assert_eq!(display(&overlay), "none");
    let classes = overlay.class_list();
    assert!(!classes.contains("modal-in"));
    assert!(!classes.contains("modal-out"));
    let wrap = doc.get_element_by_id(&modal.kind().element_id("Wrap")).unwrap();
    assert!(!wrap.class_list().contains("modal-content-out"));
}

#[wasm_bindgen_test]
async fn reshow_during_exit_survives_stale_teardown() {
    let doc = document();
    let modal = build_modal(&doc, ModalKind::Yes);
    modal.show().unwrap();
    modal.hide().unwrap();
    modal.show().unwrap();

    sleep(EXIT_ANIMATION_MS + 100).await;
    assert_eq!(modal.phase(), ModalPhase::Visible);
    let overlay = overlay(&doc, &modal);
    assert_eq!(display(&overlay), "flex");
    assert!(overlay.class_list().contains("modal-in"));
}

#[wasm_bindgen_test]
fn disabled_music_hides_controls() {
    let doc = document();
    let controls: HtmlElement = fixture(&doc, "div", "musicControls");
    let music = MusicConfig {
        enabled: false,
        ..MusicConfig::default()
    };
    music::setup(&doc, &music).unwrap();
    assert_eq!(display(&controls), "none");
}

#[wasm_bindgen_test]
fn meter_update_stretches_bar_and_shows_message() {
    let doc = document();
    let input: HtmlInputElement = fixture(&doc, "input", "loveMeter");
    input.set_type("range");
    input.set_max("10000");
    let readout: HtmlElement = fixture(&doc, "span", "loveValue");
    let extra: HtmlElement = fixture(&doc, "div", "extraLove");
    extra.class_list().add_1("hidden").unwrap();

    let config = Config::from_json(
        r#"{"loveMessages":{"normal":"n","high":"h","extreme":"x"}}"#,
    )
    .unwrap();
    let meter = LoveMeter::find(&doc).unwrap();

    input.set_value("10000");
    meter.update(&config.love_messages, 990.0).unwrap();
    assert_eq!(readout.text_content().unwrap(), "10000");
    assert!(!extra.class_list().contains("hidden"));
    assert!(extra.class_list().contains("super-love"));
    assert_eq!(extra.text_content().unwrap(), "x");
    let style = input.style();
    assert!(style.get_property_value("width").unwrap().contains("792px"));
    assert!(style.get_property_value("transition").unwrap().contains("0.3s"));

    input.set_value("50");
    meter.update(&config.love_messages, 990.0).unwrap();
    assert!(extra.class_list().contains("hidden"));
    assert!(!extra.class_list().contains("super-love"));
    assert_eq!(style.get_property_value("width").unwrap(), "100%");

    meter.reset().unwrap();
    assert_eq!(input.value(), "100");
    assert_eq!(readout.text_content().unwrap(), "100");
}

#[wasm_bindgen_test]
fn explosion_spawns_fixed_number_of_hearts() {
    let doc = document();
    while let Some(old) = doc.query_selector(".floating-elements").unwrap() {
        old.remove();
    }
    let container: Element = doc.create_element("div").unwrap();
    container.set_class_name("floating-elements");
    doc.body().unwrap().append_child(&container).unwrap();

    heart_explosion(&doc, &["💖".to_owned(), "💘".to_owned()]).unwrap();
    let hearts = container.query_selector_all(".heart").unwrap();
    assert_eq!(hearts.length() as usize, EXPLOSION_HEARTS);

    heart_explosion(&doc, &[]).unwrap();
    let hearts = container.query_selector_all(".heart").unwrap();
    assert_eq!(hearts.length() as usize, EXPLOSION_HEARTS);
}
