//! Pop-up modals shown when a button is pressed one time too many.
//!
//! Each kind ("No" and "Yes") is built once at startup and reused. Showing it
//! plays an entry animation; the acknowledgement button plays the exit
//! animation and schedules a single teardown after [`EXIT_ANIMATION_MS`].
//! [`ModalState`] tracks the `Hidden → Visible → Exiting → Hidden` cycle so a
//! repeated hide request, or a teardown that outlived a re-show, does nothing.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlButtonElement, HtmlElement, HtmlImageElement};

use crate::{dom, log};

/// Length of the exit animation; the overlay is torn down after it.
pub const EXIT_ANIMATION_MS: i32 = 560;

const OVERLAY_IN: &str = "modal-in";
const OVERLAY_OUT: &str = "modal-out";
const CONTENT_IN: &str = "modal-content-in";
const CONTENT_OUT: &str = "modal-content-out";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKind {
    No,
    Yes,
}

/// Fixed content refreshed into the modal on every show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModalContent {
    pub image_url: &'static str,
    pub image_alt: &'static str,
    pub message: &'static str,
    pub button_label: &'static str,
}

/// Built-in text and image for the "No" modal. Not configurable; the page
/// must serve the image next to `index.html`.
pub const NO_CONTENT: ModalContent = ModalContent {
    image_url: "images/no.png",
    image_alt: "surprise",
    message: "Wrong button! Change your mind right now, or I will keep moving it until you do ...",
    button_label: "Okay, okay 🥺",
};

/// Built-in text and image for the "Yes" modal, same contract as [`NO_CONTENT`].
pub const YES_CONTENT: ModalContent = ModalContent {
    image_url: "images/yes.png",
    image_alt: "yay",
    message: "Better answer this time, but still not quite what I want to hear. Find the right one!",
    button_label: "I will find it 🥰",
};

impl ModalKind {
    pub fn content(&self) -> ModalContent {
        match self {
            ModalKind::No => NO_CONTENT,
            ModalKind::Yes => YES_CONTENT,
        }
    }

    fn id_prefix(&self) -> &'static str {
        match self {
            ModalKind::No => "no",
            ModalKind::Yes => "yes",
        }
    }

    pub fn element_id(&self, part: &str) -> String {
        format!("{}Modal{}", self.id_prefix(), part)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalPhase {
    #[default]
    Hidden,
    Visible,
    Exiting,
}

/// Identifies the hide request a scheduled teardown belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HideTicket(u32);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    phase: ModalPhase,
    epoch: u32,
}

impl ModalState {
    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    pub fn show(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        self.phase = ModalPhase::Visible;
    }

    /// Start the exit animation. Only a visible modal yields a ticket, so at
    /// most one teardown is pending per show.
    pub fn begin_hide(&mut self) -> Option<HideTicket> {
        if self.phase != ModalPhase::Visible {
            return None;
        }
        self.phase = ModalPhase::Exiting;
        Some(HideTicket(self.epoch))
    }

    /// Finish a hide; `false` if the ticket is stale or nothing is exiting.
    pub fn finish_hide(&mut self, ticket: HideTicket) -> bool {
        if self.phase == ModalPhase::Exiting && ticket.0 == self.epoch {
            self.phase = ModalPhase::Hidden;
            true
        } else {
            false
        }
    }
}

/// Handle onto one built modal.
#[derive(Clone)]
pub struct Modal {
    kind: ModalKind,
    overlay: HtmlElement,
    wrap: HtmlElement,
    image: HtmlImageElement,
    message: HtmlElement,
    button: HtmlButtonElement,
    state: Rc<RefCell<ModalState>>,
}

impl Modal {
    /// Create the overlay structure, append it to `<body>` (hidden) and wire
    /// the acknowledgement button.
    pub fn build(doc: &Document, kind: ModalKind, accent: &str) -> Result<Self, JsValue> {
        let body = doc.body().ok_or_else(|| JsValue::from_str("no body"))?;

        let overlay: HtmlElement = dom::create(doc, "div")?;
        overlay.set_id(&kind.element_id("Overlay"));
        dom::style(
            &overlay,
            "display:none; position:fixed; inset:0; background:rgba(0,0,0,0.35); z-index:99999; align-items:center; justify-content:center; padding:16px;",
        )?;

        let wrap: HtmlElement = dom::create(doc, "div")?;
        wrap.set_id(&kind.element_id("Wrap"));
        dom::style(
            &wrap,
            "display:flex; gap:16px; align-items:center; max-width:920px; width:min(920px, 100%);",
        )?;

        let image: HtmlImageElement = dom::create(doc, "img")?;
        image.set_id(&kind.element_id("Img"));
        image.set_alt(kind.content().image_alt);
        dom::style(
            &image,
            "max-width:min(360px, 45vw); max-height:70vh; border-radius:18px; object-fit:contain; box-shadow:0 12px 40px rgba(0,0,0,0.25); background:transparent;",
        )?;

        let card: HtmlElement = dom::create(doc, "div")?;
        card.set_id(&kind.element_id("Card"));
        dom::style(
            &card,
            "flex:1; padding:18px 18px 14px; border-radius:18px; background:rgba(255,255,255,0.92); backdrop-filter:blur(6px); box-shadow:0 12px 40px rgba(0,0,0,0.18); display:flex; flex-direction:column; gap:12px;",
        )?;

        let message: HtmlElement = dom::create(doc, "div")?;
        message.set_id(&kind.element_id("Msg"));
        dom::style(
            &message,
            "font-size:18px; line-height:1.4; color:#222; font-weight:600;",
        )?;

        let button: HtmlButtonElement = dom::create(doc, "button")?;
        button.set_id(&kind.element_id("CloseBtn"));
        button.set_type("button");
        dom::style(
            &button,
            &format!(
                "border:none; padding:12px 14px; border-radius:14px; cursor:pointer; font-size:16px; font-weight:700; align-self:flex-start; box-shadow:0 10px 24px rgba(0,0,0,0.12); background:{accent}; color:#fff;"
            ),
        )?;

        card.append_child(&message)?;
        card.append_child(&button)?;
        wrap.append_child(&image)?;
        wrap.append_child(&card)?;
        overlay.append_child(&wrap)?;
        body.append_child(&overlay)?;

        let modal = Self {
            kind,
            overlay,
            wrap,
            image,
            message,
            button,
            state: Rc::new(RefCell::new(ModalState::default())),
        };

        let on_ack = modal.clone();
        dom::listen(&modal.button, "click", move |_| log::on_err(on_ack.hide()))?;

        Ok(modal)
    }

    pub fn kind(&self) -> ModalKind {
        self.kind
    }

    pub fn phase(&self) -> ModalPhase {
        self.state.borrow().phase()
    }

    pub fn show(&self) -> Result<(), JsValue> {
        let content = self.kind.content();
        self.image.set_src(content.image_url);
        self.message.set_text_content(Some(content.message));
        self.button.set_text_content(Some(content.button_label));

        self.overlay.class_list().remove_1(OVERLAY_OUT)?;
        self.wrap.class_list().remove_1(CONTENT_OUT)?;
        dom::set_display(&self.overlay, "flex")?;
        self.overlay.class_list().add_1(OVERLAY_IN)?;
        self.wrap.class_list().add_1(CONTENT_IN)?;
        self.state.borrow_mut().show();
        Ok(())
    }

    /// Play the exit animation and schedule the teardown. A no-op unless the
    /// modal is currently visible.
    pub fn hide(&self) -> Result<(), JsValue> {
        let Some(ticket) = self.state.borrow_mut().begin_hide() else {
            return Ok(());
        };

        self.overlay.class_list().remove_1(OVERLAY_IN)?;
        self.wrap.class_list().remove_1(CONTENT_IN)?;
        self.overlay.class_list().add_1(OVERLAY_OUT)?;
        self.wrap.class_list().add_1(CONTENT_OUT)?;

        let modal = self.clone();
        let teardown = Closure::once_into_js(move || log::on_err(modal.teardown(ticket)));
        dom::window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
            teardown.unchecked_ref(),
            EXIT_ANIMATION_MS,
        )?;
        Ok(())
    }

    fn teardown(&self, ticket: HideTicket) -> Result<(), JsValue> {
        if !self.state.borrow_mut().finish_hide(ticket) {
            return Ok(());
        }
        dom::set_display(&self.overlay, "none")?;
        self.overlay.class_list().remove_2(OVERLAY_IN, OVERLAY_OUT)?;
        self.wrap.class_list().remove_2(CONTENT_IN, CONTENT_OUT)?;
        Ok(())
    }
}
