//! The closed set of orthographies the service converts between.
//!
//! Each script has a stable wire token (`"latin"`, `"thai1"`, ...) used by
//! the HTTP API and the index page. Adding a script means adding a variant
//! here and declaring its primitive edges in [`crate::registry`].

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// A supported orthography.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScriptId {
    /// Pali romanization with diacritics (ā, ṃ, ṭ, ...).
    Latin,
    /// Pali in modern Thai spelling (explicit ะ / ั, no pinthu).
    ThaiColloquial,
    /// Pali in Thai script with pinthu marking vowelless consonants.
    ThaiPintu,
    /// Japanese katakana approximation.
    Kana,
}

impl ScriptId {
    /// Every script, in registry iteration order.
    pub const ALL: [ScriptId; 4] = [
        ScriptId::Latin,
        ScriptId::ThaiColloquial,
        ScriptId::ThaiPintu,
        ScriptId::Kana,
    ];

    /// Wire token used in `inputSelection` / `outputSelection`.
    pub fn token(self) -> &'static str {
        match self {
            Self::Latin => "latin",
            Self::ThaiColloquial => "thai1",
            Self::ThaiPintu => "thai2",
            Self::Kana => "kana",
        }
    }

    /// Human-readable label for selectors in the UI.
    pub fn label(self) -> &'static str {
        match self {
            Self::Latin => "Latin/Roman",
            Self::ThaiColloquial => "Thai (Colloquial) // อักษรไทย",
            Self::ThaiPintu => "Thai (Pintu) // แบบพินทุ",
            Self::Kana => "Japanese Kana // カタカナ",
        }
    }

    /// Parse a wire token. Matching is exact: no trimming, no case folding.
    pub fn from_token(token: &str) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|s| s.token() == token)
            .ok_or_else(|| CoreError::UnknownScript(token.to_string()))
    }
}

impl fmt::Display for ScriptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for ScriptId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s)
    }
}

impl serde::Serialize for ScriptId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.token())
    }
}

impl<'de> serde::Deserialize<'de> for ScriptId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        Self::from_token(&token).map_err(serde::de::Error::custom)
    }
}
