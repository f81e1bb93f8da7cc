//! Card configuration injected by the page as `window.VALENTINE_CONFIG`.
//!
//! The object is deserialized leniently (every section has defaults, `null`
//! strings become empty) and then repaired in place by [`Config::validate`],
//! which reports what it changed as [`ConfigWarning`]s. Nothing here is fatal
//! except a missing or unserializable global.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use wasm_bindgen::prelude::*;

/// Name of the global the page bootstrap fills in before `start_card()`.
pub const CONFIG_GLOBAL: &str = "VALENTINE_CONFIG";

pub const DEFAULT_NAME: &str = "My Love";
pub const MIN_FLOAT_DURATION: &str = "5s";
pub const MIN_FLOAT_SECONDS: f64 = 5.0;
pub const DEFAULT_EXPLOSION_SIZE: f64 = 1.5;
pub const EXPLOSION_SIZE_RANGE: std::ops::RangeInclusive<f64> = 1.0..=3.0;
pub const DEFAULT_VOLUME: f64 = 0.5;
pub const DEFAULT_ACCENT: &str = "#ff6b6b";

/// Per-slot fallbacks used when a configured color is not a hex color.
pub const DEFAULT_COLORS: &[(&str, &str)] = &[
    ("backgroundStart", "#ffafbd"),
    ("backgroundEnd", "#ffc3a0"),
    ("buttonBackground", "#ff6b6b"),
    ("buttonHover", "#ff8787"),
    ("textColor", "#ff4757"),
];

pub fn default_color(key: &str) -> Option<&'static str> {
    DEFAULT_COLORS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
}

/// `#` followed by exactly 3 or 6 hex digits.
pub fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(digits) => {
            matches!(digits.len(), 3 | 6) && digits.bytes().all(|b| b.is_ascii_hexdigit())
        }
        None => false,
    }
}

/// Numeric prefix of `input` with JavaScript `parseFloat` rules: leading
/// whitespace skipped, optional sign, digits with optional fraction and
/// exponent, trailing junk ignored. `None` when there is no number at all.
pub fn parse_float_prefix(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return Some(if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let mut frac_end = end + 1;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - (end + 1);
        end = frac_end;
    }
    if digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }
    s[..end].parse::<f64>().ok()
}

// --- Lenient field decoding --------------------------------------------------

fn value_to_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// Accept strings, numbers and booleans as text; `null` and anything else
/// become an empty string.
fn lenient_string<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
    Ok(value_to_string(Value::deserialize(de)?))
}

fn lenient_colors<'de, D: Deserializer<'de>>(
    de: D,
) -> Result<BTreeMap<String, String>, D::Error> {
    let raw = Option::<BTreeMap<String, Value>>::deserialize(de)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .map(|(k, v)| (k, value_to_string(v)))
        .collect())
}

/// `null` counts as 0, which the range check then repairs.
fn lenient_number<'de, D: Deserializer<'de>>(de: D) -> Result<f64, D::Error> {
    Ok(match Value::deserialize(de)? {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => parse_float_prefix(&s).unwrap_or(f64::NAN),
        Value::Bool(b) => f64::from(u8::from(b)),
        Value::Null => 0.0,
        _ => f64::NAN,
    })
}

/// JavaScript truthiness.
fn lenient_bool<'de, D: Deserializer<'de>>(de: D) -> Result<bool, D::Error> {
    Ok(match Value::deserialize(de)? {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0 && !v.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

/// Unset, `null` and `false` leave the volume to its default; strings are
/// coerced the way the media element would.
fn lenient_volume<'de, D: Deserializer<'de>>(de: D) -> Result<Option<f64>, D::Error> {
    Ok(match Value::deserialize(de)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_float_prefix(&s),
        Value::Bool(true) => Some(1.0),
        _ => None,
    })
}

// --- Configuration sections --------------------------------------------------

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    #[serde(deserialize_with = "lenient_string")]
    pub valentine_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub page_title: String,
    #[serde(deserialize_with = "lenient_colors")]
    pub colors: BTreeMap<String, String>,
    pub animations: Animations,
    pub questions: Questions,
    pub floating_emojis: FloatingEmojis,
    pub love_messages: LoveMessages,
    pub celebration: Celebration,
    pub music: MusicConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            valentine_name: String::new(),
            page_title: "Will You Be My Valentine? 💝".to_owned(),
            colors: DEFAULT_COLORS
                .iter()
                .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
                .collect(),
            animations: Animations::default(),
            questions: Questions::default(),
            floating_emojis: FloatingEmojis::default(),
            love_messages: LoveMessages::default(),
            celebration: Celebration::default(),
            music: MusicConfig::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Animations {
    #[serde(deserialize_with = "lenient_string")]
    pub float_duration: String,
    #[serde(deserialize_with = "lenient_number")]
    pub heart_explosion_size: f64,
}

impl Default for Animations {
    fn default() -> Self {
        Self {
            float_duration: "15s".to_owned(),
            heart_explosion_size: DEFAULT_EXPLOSION_SIZE,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Questions {
    pub first: FirstQuestion,
    pub second: SecondQuestion,
    pub third: ThirdQuestion,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FirstQuestion {
    #[serde(deserialize_with = "lenient_string")]
    pub text: String,
    #[serde(deserialize_with = "lenient_string")]
    pub yes_btn: String,
    #[serde(deserialize_with = "lenient_string")]
    pub no_btn: String,
    #[serde(deserialize_with = "lenient_string")]
    pub secret_answer: String,
}

/// The love meter question.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SecondQuestion {
    #[serde(deserialize_with = "lenient_string")]
    pub text: String,
    #[serde(deserialize_with = "lenient_string")]
    pub start_text: String,
    #[serde(deserialize_with = "lenient_string")]
    pub next_btn: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThirdQuestion {
    #[serde(deserialize_with = "lenient_string")]
    pub text: String,
    #[serde(deserialize_with = "lenient_string")]
    pub yes_btn: String,
    #[serde(deserialize_with = "lenient_string")]
    pub no_btn: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FloatingEmojis {
    pub hearts: Vec<String>,
    pub bears: Vec<String>,
}

impl Default for FloatingEmojis {
    fn default() -> Self {
        Self {
            hearts: ["❤️", "💖", "💝", "💗", "💓"].map(String::from).to_vec(),
            bears: ["🧸", "🐻"].map(String::from).to_vec(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoveMessages {
    #[serde(deserialize_with = "lenient_string")]
    pub normal: String,
    #[serde(deserialize_with = "lenient_string")]
    pub high: String,
    #[serde(deserialize_with = "lenient_string")]
    pub extreme: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Celebration {
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(deserialize_with = "lenient_string")]
    pub message: String,
    #[serde(deserialize_with = "lenient_string")]
    pub emojis: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MusicConfig {
    #[serde(deserialize_with = "lenient_bool")]
    pub enabled: bool,
    #[serde(deserialize_with = "lenient_string")]
    pub music_url: String,
    #[serde(deserialize_with = "lenient_volume")]
    pub volume: Option<f64>,
    #[serde(deserialize_with = "lenient_bool")]
    pub autoplay: bool,
    #[serde(deserialize_with = "lenient_string")]
    pub start_text: String,
    #[serde(deserialize_with = "lenient_string")]
    pub stop_text: String,
}

impl Default for MusicConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            music_url: String::new(),
            volume: None,
            autoplay: false,
            start_text: "🎵 Play Music".to_owned(),
            stop_text: "🔇 Stop Music".to_owned(),
        }
    }
}

impl MusicConfig {
    /// Volume to hand the media element: unset or zero means 0.5, anything
    /// else is clamped into the element's accepted [0, 1] range.
    pub fn effective_volume(&self) -> f64 {
        match self.volume {
            Some(v) if v != 0.0 && !v.is_nan() => v.clamp(0.0, 1.0),
            _ => DEFAULT_VOLUME,
        }
    }
}

// --- Validation --------------------------------------------------------------

/// A configuration defect that was repaired with a default.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigWarning {
    MissingName,
    InvalidColor { key: String },
    FloatDurationTooShort,
    ExplosionSizeOutOfRange,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::MissingName => write!(f, "Valentine's name is not set! Using default."),
            ConfigWarning::InvalidColor { key } => {
                write!(f, "Invalid color for {key}! Using default.")
            }
            ConfigWarning::FloatDurationTooShort => {
                write!(f, "Float duration too short! Setting to {MIN_FLOAT_DURATION} minimum.")
            }
            ConfigWarning::ExplosionSizeOutOfRange => write!(
                f,
                "Heart explosion size should be between 1 and 3! Using default."
            ),
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Decode the injected JS object by round-tripping it through JSON.
    pub fn from_js(value: &JsValue) -> Result<Self, JsValue> {
        if value.is_undefined() || value.is_null() {
            return Err(JsValue::from_str(&format!(
                "window.{CONFIG_GLOBAL} is not defined"
            )));
        }
        let json = String::from(js_sys::JSON::stringify(value)?);
        Self::from_json(&json)
            .map_err(|e| JsValue::from_str(&format!("invalid {CONFIG_GLOBAL}: {e}")))
    }

    /// Repair invalid values in place. Each rule is independent; the returned
    /// warnings list what was replaced.
    pub fn validate(&mut self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if self.valentine_name.is_empty() {
            warnings.push(ConfigWarning::MissingName);
            self.valentine_name = DEFAULT_NAME.to_owned();
        }

        let invalid: Vec<String> = self
            .colors
            .iter()
            .filter(|(_, v)| !is_hex_color(v))
            .map(|(k, _)| k.clone())
            .collect();
        for key in invalid {
            // Unknown slots have no documented fallback and are dropped.
            match default_color(&key) {
                Some(color) => {
                    self.colors.insert(key.clone(), color.to_owned());
                }
                None => {
                    self.colors.remove(&key);
                }
            }
            warnings.push(ConfigWarning::InvalidColor { key });
        }

        if parse_float_prefix(&self.animations.float_duration)
            .is_some_and(|secs| secs < MIN_FLOAT_SECONDS)
        {
            warnings.push(ConfigWarning::FloatDurationTooShort);
            self.animations.float_duration = MIN_FLOAT_DURATION.to_owned();
        }

        let size = self.animations.heart_explosion_size;
        if size < *EXPLOSION_SIZE_RANGE.start() || size > *EXPLOSION_SIZE_RANGE.end() {
            warnings.push(ConfigWarning::ExplosionSizeOutOfRange);
            self.animations.heart_explosion_size = DEFAULT_EXPLOSION_SIZE;
        }

        warnings
    }

    /// Color used for the modal acknowledgement buttons.
    pub fn accent_color(&self) -> &str {
        self.colors
            .get("buttonBackground")
            .map(String::as_str)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_ACCENT)
    }

    pub fn title_text(&self) -> String {
        format!("{}, my love...", self.valentine_name)
    }
}
