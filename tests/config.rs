// Configuration loading and repair, exercised through the public API.
// Native-friendly: no wasm/browser APIs are touched.

use valentine_card::config::{Config, ConfigWarning, DEFAULT_COLORS, DEFAULT_NAME};

const SAMPLE: &str = r##"{
    "valentineName": "Ada",
    "pageTitle": "Will you be my Valentine?",
    "colors": {
        "backgroundStart": "#ffafbd",
        "backgroundEnd": "#ffc3a0",
        "buttonBackground": "#f00",
        "buttonHover": "#ff8787",
        "textColor": "#ff4757"
    },
    "animations": { "floatDuration": "15s", "heartExplosionSize": 1.5 },
    "questions": {
        "first": { "text": "Do you like me?", "yesBtn": "Yes", "noBtn": "No", "secretAnswer": "I don't like you, I love you! ❤️" },
        "second": { "text": "How much do you love me?", "startText": "This much!", "nextBtn": "Next ❤️" },
        "third": { "text": "Will you be my Valentine?", "yesBtn": "Yes!", "noBtn": "No" }
    },
    "floatingEmojis": { "hearts": ["❤️", "💖"], "bears": ["🧸"] },
    "loveMessages": { "extreme": "WOOOOW!", "high": "To infinity!", "normal": "And beyond!" },
    "celebration": { "title": "Yay!", "message": "Now come get your gift!", "emojis": "🎁💖🤗" },
    "music": {
        "enabled": true,
        "autoplay": true,
        "musicUrl": "music/song.mp3",
        "startText": "🎵 Play Music",
        "stopText": "🔇 Stop Music",
        "volume": 0.5
    }
}"##;

#[test]
fn full_sample_parses_and_needs_no_repair() {
    let mut cfg = Config::from_json(SAMPLE).expect("sample parses");
    assert_eq!(cfg.valentine_name, "Ada");
    assert_eq!(cfg.questions.first.secret_answer, "I don't like you, I love you! ❤️");
    assert_eq!(cfg.questions.second.next_btn, "Next ❤️");
    assert_eq!(cfg.floating_emojis.hearts.len(), 2);
    assert!(cfg.music.enabled && cfg.music.autoplay);
    assert!(cfg.validate().is_empty());
    assert_eq!(cfg.accent_color(), "#f00");
}

#[test]
fn empty_or_missing_name_gets_default() {
    for json in [r#"{}"#, r#"{"valentineName": ""}"#, r#"{"valentineName": null}"#] {
        let mut cfg = Config::from_json(json).unwrap();
        let warnings = cfg.validate();
        assert!(warnings.contains(&ConfigWarning::MissingName), "{json}");
        assert_eq!(cfg.valentine_name, DEFAULT_NAME);
        assert_eq!(cfg.title_text(), "My Love, my love...");
    }
}

#[test]
fn every_invalid_color_falls_back_to_its_slot_default() {
    for (key, default) in DEFAULT_COLORS {
        for bad in ["red", "#12", "#12345", "#1234567", "#xyzxyz", "ff6b6b"] {
            let json = format!(r#"{{"valentineName":"Ada","colors":{{"{key}":"{bad}"}}}}"#);
            let mut cfg = Config::from_json(&json).unwrap();
            let warnings = cfg.validate();
            assert_eq!(warnings, vec![ConfigWarning::InvalidColor { key: (*key).to_owned() }]);
            assert_eq!(cfg.colors[*key], *default, "{key} <- {bad}");
        }
    }
}

#[test]
fn short_float_duration_clamps_to_five_seconds() {
    for short in [r#""4.9s""#, r#""0s""#, r#""-2s""#, "3"] {
        let json = format!(r#"{{"valentineName":"Ada","animations":{{"floatDuration":{short}}}}}"#);
        let mut cfg = Config::from_json(&json).unwrap();
        assert_eq!(cfg.validate(), vec![ConfigWarning::FloatDurationTooShort]);
        assert_eq!(cfg.animations.float_duration, "5s");
    }
}

#[test]
fn explosion_size_outside_range_resets() {
    for size in ["0.5", "3.01", "-1", "100"] {
        let json = format!(r#"{{"valentineName":"Ada","animations":{{"heartExplosionSize":{size}}}}}"#);
        let mut cfg = Config::from_json(&json).unwrap();
        assert_eq!(cfg.validate(), vec![ConfigWarning::ExplosionSizeOutOfRange]);
        assert_eq!(cfg.animations.heart_explosion_size, 1.5);
    }
    for size in ["1", "2.2", "3"] {
        let json = format!(r#"{{"valentineName":"Ada","animations":{{"heartExplosionSize":{size}}}}}"#);
        let mut cfg = Config::from_json(&json).unwrap();
        assert!(cfg.validate().is_empty());
    }
}

#[test]
fn validation_is_idempotent() {
    let mut cfg = Config::from_json(r#"{"colors":{"textColor":"nope"},"animations":{"floatDuration":"1s","heartExplosionSize":9}}"#).unwrap();
    assert_eq!(cfg.validate().len(), 4);
    let repaired = cfg.clone();
    assert!(cfg.validate().is_empty());
    assert_eq!(cfg, repaired);
}

#[test]
fn malformed_json_is_an_error() {
    assert!(Config::from_json("{ not json").is_err());
    assert!(Config::from_json(r#"{"floatingEmojis": {"hearts": "❤️"}}"#).is_err());
}
