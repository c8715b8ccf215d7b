//! Page configuration as supplied by `window.VALENTINE_CONFIG`.
//!
//! Every section is optional on the wire and falls back to an empty default,
//! so a partially filled config still deserializes. A field of the wrong type
//! falls back to its own default instead of failing the whole config.
//! Semantic repair (bad colors, short durations) is the normalizer's job.

use fnv::FnvHashMap;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("window.{0} is not defined")]
    Missing(&'static str),
    #[error("config could not be stringified: {0}")]
    Stringify(String),
    #[error("config does not match the expected shape: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    #[serde(deserialize_with = "de::string")]
    pub valentine_name: String,
    #[serde(deserialize_with = "de::opt_string")]
    pub page_title: Option<String>,
    #[serde(deserialize_with = "de::color_map")]
    pub colors: FnvHashMap<String, String>,
    #[serde(deserialize_with = "de::section")]
    pub animations: Animations,
    #[serde(deserialize_with = "de::section")]
    pub questions: Questions,
    #[serde(deserialize_with = "de::section")]
    pub floating_emojis: FloatingEmojis,
    #[serde(deserialize_with = "de::section")]
    pub love_messages: LoveMessages,
    #[serde(deserialize_with = "de::section")]
    pub celebration: Celebration,
    #[serde(deserialize_with = "de::section")]
    pub music: Music,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Animations {
    /// CSS-style duration such as `"15s"`; bare numbers are accepted too.
    #[serde(deserialize_with = "de::string_or_number")]
    pub float_duration: Option<String>,
    #[serde(deserialize_with = "de::number")]
    pub heart_explosion_size: Option<f64>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Questions {
    #[serde(deserialize_with = "de::section")]
    pub first: FirstQuestion,
    #[serde(deserialize_with = "de::section")]
    pub second: SecondQuestion,
    #[serde(deserialize_with = "de::section")]
    pub third: ThirdQuestion,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FirstQuestion {
    #[serde(deserialize_with = "de::string")]
    pub text: String,
    #[serde(deserialize_with = "de::string")]
    pub yes_btn: String,
    #[serde(deserialize_with = "de::string")]
    pub no_btn: String,
    #[serde(deserialize_with = "de::string")]
    pub secret_answer: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SecondQuestion {
    #[serde(deserialize_with = "de::string")]
    pub text: String,
    #[serde(deserialize_with = "de::string")]
    pub start_text: String,
    #[serde(deserialize_with = "de::string")]
    pub next_btn: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThirdQuestion {
    #[serde(deserialize_with = "de::string")]
    pub text: String,
    #[serde(deserialize_with = "de::string")]
    pub yes_btn: String,
    #[serde(deserialize_with = "de::string")]
    pub no_btn: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct FloatingEmojis {
    #[serde(deserialize_with = "de::string_list")]
    pub hearts: Vec<String>,
    #[serde(deserialize_with = "de::string_list")]
    pub bears: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoveMessages {
    #[serde(deserialize_with = "de::string")]
    pub normal: String,
    #[serde(deserialize_with = "de::string")]
    pub high: String,
    #[serde(deserialize_with = "de::string")]
    pub extreme: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Celebration {
    #[serde(deserialize_with = "de::string")]
    pub title: String,
    #[serde(deserialize_with = "de::string")]
    pub message: String,
    #[serde(deserialize_with = "de::string")]
    pub emojis: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Music {
    #[serde(deserialize_with = "de::truthy")]
    pub enabled: bool,
    #[serde(deserialize_with = "de::opt_string")]
    pub music_url: Option<String>,
    #[serde(deserialize_with = "de::number")]
    pub volume: Option<f64>,
    #[serde(deserialize_with = "de::truthy")]
    pub autoplay: bool,
    #[serde(deserialize_with = "de::string")]
    pub start_text: String,
    #[serde(deserialize_with = "de::string")]
    pub stop_text: String,
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Heading shown in the title slot.
    pub fn greeting(&self) -> String {
        format!("{}, my love...", self.valentine_name)
    }
}

// Lenient field readers: `null` reads as absent, scalars of the wrong type are
// coerced the way a browser would, and anything unusable becomes the field's
// default.
mod de {
    use crate::core::normalize::parse_float_prefix;
    use fnv::FnvHashMap;
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    fn value<'de, D: Deserializer<'de>>(d: D) -> Result<Value, D::Error> {
        Ok(Option::<Value>::deserialize(d)?.unwrap_or(Value::Null))
    }

    pub fn string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        Ok(stringify(value(d)?).unwrap_or_default())
    }

    pub fn opt_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(stringify(value(d)?).filter(|s| !s.is_empty()))
    }

    pub fn string_or_number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(stringify(value(d)?))
    }

    /// Numbers pass through; numeric text is read by its leading literal.
    pub fn number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        Ok(match value(d)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => parse_float_prefix(&s),
            _ => None,
        })
    }

    /// Truthiness as a script would judge it: `""`, `0` and `null` are false.
    pub fn truthy<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
        Ok(match value(d)? {
            Value::Null => false,
            Value::Bool(b) => b,
            Value::Number(n) => n.as_f64().map_or(false, |f| f != 0.0),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        })
    }

    /// Non-string items are stringified, `null` items dropped. A non-list
    /// reads as empty.
    pub fn string_list<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
        Ok(match value(d)? {
            Value::Array(items) => items.into_iter().filter_map(stringify).collect(),
            _ => Vec::new(),
        })
    }

    pub fn color_map<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<FnvHashMap<String, String>, D::Error> {
        let Value::Object(raw) = value(d)? else {
            return Ok(FnvHashMap::default());
        };
        Ok(raw
            .into_iter()
            .map(|(slot, v)| {
                let text = match v {
                    Value::String(s) => s,
                    other => other.to_string(),
                };
                (slot, text)
            })
            .collect())
    }

    pub fn section<'de, D, T>(d: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned + Default,
    {
        match value(d)? {
            Value::Null => Ok(T::default()),
            v => Ok(T::deserialize(v).unwrap_or_default()),
        }
    }

    fn stringify(v: Value) -> Option<String> {
        match v {
            Value::Null => None,
            Value::String(s) => Some(s),
            other => Some(other.to_string()),
        }
    }
}
