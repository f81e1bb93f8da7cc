//! Background music: optional autoplay with a manual play/stop toggle.
//!
//! Autoplay is tried once. Browsers commonly reject it until the user has
//! interacted with the page; the rejection only switches the toggle label to
//! the "start" text.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlElement, HtmlMediaElement, HtmlSourceElement};

use crate::config::MusicConfig;
use crate::{dom, log};

/// What a toggle press does, decided by whether the audio was paused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleAction {
    Play,
    Pause,
}

impl ToggleAction {
    pub fn for_paused(paused: bool) -> Self {
        if paused {
            ToggleAction::Play
        } else {
            ToggleAction::Pause
        }
    }

    /// Label shown after the action: "stop" while playing, "start" while paused.
    pub fn label<'a>(&self, music: &'a MusicConfig) -> &'a str {
        match self {
            ToggleAction::Play => &music.stop_text,
            ToggleAction::Pause => &music.start_text,
        }
    }

    /// Label to write after the press, or `None` when a failed `play()` has
    /// already put the start label back.
    pub fn label_after<'a>(&self, music: &'a MusicConfig, play_started: bool) -> Option<&'a str> {
        match self {
            ToggleAction::Play if !play_started => None,
            _ => Some(self.label(music)),
        }
    }
}

/// Start playback; on rejection, log `notice` and fall back to the start label.
///
/// Returns `false` only when `play()` threw synchronously. A rejected promise
/// is handled later, after the caller has updated the label.
fn play_or_fallback(
    audio: &HtmlMediaElement,
    toggle: &HtmlElement,
    start_text: &str,
    notice: &'static str,
) -> bool {
    match audio.play() {
        Ok(promise) => {
            let toggle = toggle.clone();
            let start_text = start_text.to_owned();
            wasm_bindgen_futures::spawn_local(async move {
                if JsFuture::from(promise).await.is_err() {
                    log::info(notice);
                    toggle.set_text_content(Some(&start_text));
                }
            });
            true
        }
        Err(_) => {
            log::info(notice);
            toggle.set_text_content(Some(start_text));
            false
        }
    }
}

pub fn setup(doc: &Document, music: &MusicConfig) -> Result<(), JsValue> {
    let controls: HtmlElement = dom::by_id(doc, "musicControls")?;
    if !music.enabled {
        return dom::set_display(&controls, "none");
    }

    let toggle: HtmlElement = dom::by_id(doc, "musicToggle")?;
    let audio: HtmlMediaElement = dom::by_id(doc, "bgMusic")?;
    let source: HtmlSourceElement = dom::by_id(doc, "musicSource")?;

    source.set_src(&music.music_url);
    audio.set_volume(music.effective_volume());
    audio.load();

    if music.autoplay {
        play_or_fallback(&audio, &toggle, &music.start_text, "Autoplay prevented by browser");
    }

    let music = music.clone();
    let toggle_target = toggle.clone();
    dom::listen(&toggle_target, "click", move |_| {
        let action = ToggleAction::for_paused(audio.paused());
        let play_started = match action {
            ToggleAction::Play => {
                play_or_fallback(&audio, &toggle, &music.start_text, "Playback prevented by browser")
            }
            ToggleAction::Pause => {
                log::on_err(audio.pause());
                true
            }
        };
        if let Some(label) = action.label_after(&music, play_started) {
            toggle.set_text_content(Some(label));
        }
    })
}
