// Shared fixtures for host-side tests.

#![allow(dead_code)]

use valentine_web::core::{normalize, Config};

pub const SAMPLE_JSON: &str = r##"{
    "valentineName": "Alex",
    "pageTitle": "For Alex",
    "colors": {
        "backgroundStart": "#ffafbd",
        "backgroundEnd": "#FFC3A0",
        "buttonBackground": "#f66",
        "buttonHover": "#ff8787",
        "textColor": "#ff4757"
    },
    "animations": { "floatDuration": "15s", "heartExplosionSize": 1.5 },
    "questions": {
        "first": { "text": "Do you like me?", "yesBtn": "Yes", "noBtn": "No", "secretAnswer": "I don't like you, I love you!" },
        "second": { "text": "How much do you love me?", "startText": "This much!", "nextBtn": "Next" },
        "third": { "text": "Will you be my Valentine?", "yesBtn": "Yes!", "noBtn": "No" }
    },
    "floatingEmojis": { "hearts": ["❤️", "💖", "💝"], "bears": ["🧸", "🐻"] },
    "loveMessages": { "normal": "And beyond!", "high": "To infinity!", "extreme": "WOOOW!" },
    "celebration": { "title": "Yay!", "message": "Now come get your gift", "emojis": "🎁💖🤗" },
    "music": {
        "enabled": true,
        "autoplay": true,
        "musicUrl": "https://example.com/song.mp3",
        "startText": "🎵 Play Music",
        "stopText": "🔇 Stop Music",
        "volume": 0.4
    }
}"##;

pub fn sample_config() -> Config {
    normalize(Config::from_json(SAMPLE_JSON).expect("sample parses")).config
}
