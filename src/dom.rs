// Small DOM helpers shared by the card modules. Lookups fail with a JsValue
// naming the missing element; the markup is expected to provide every id.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

/// Look up `#id` and cast it to the requested element type.
pub fn by_id<T: JsCast>(doc: &Document, id: &str) -> Result<T, JsValue> {
    doc.get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("element #{id} has an unexpected type")))
}

pub fn set_text(doc: &Document, id: &str, text: &str) -> Result<(), JsValue> {
    let el: Element = by_id(doc, id)?;
    el.set_text_content(Some(text));
    Ok(())
}

pub fn create<T: JsCast>(doc: &Document, tag: &str) -> Result<T, JsValue> {
    doc.create_element(tag)?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("<{tag}> has an unexpected type")))
}

pub fn style(el: &Element, css: &str) -> Result<(), JsValue> {
    el.set_attribute("style", css)
}

pub fn set_display(el: &HtmlElement, value: &str) -> Result<(), JsValue> {
    el.style().set_property("display", value)
}

/// Add `class` to every element matching `selector`.
pub fn add_class_all(doc: &Document, selector: &str, class: &str) -> Result<(), JsValue> {
    let nodes = doc.query_selector_all(selector)?;
    for i in 0..nodes.length() {
        if let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            el.class_list().add_1(class)?;
        }
    }
    Ok(())
}

/// Viewport size in CSS pixels.
pub fn viewport() -> Result<(f64, f64), JsValue> {
    let win = window()?;
    let w = win.inner_width()?.as_f64().unwrap_or(0.0);
    let h = win.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((w, h))
}

/// Attach a listener that lives for the rest of the page.
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
