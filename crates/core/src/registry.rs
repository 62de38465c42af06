//! Conversion registry: maps an ordered `(source, destination)` script pair
//! to the conversion that serves it.
//!
//! The registry is built once at startup and never mutated afterwards, so
//! any number of request handlers can read it concurrently without locks.
//!
//! Entries come from four rules, in precedence order:
//!
//! 1. identity for every `(s, s)`,
//! 2. explicit refusals for pairs that cannot be converted faithfully,
//! 3. primitive conversions supplied by [`crate::translit`],
//! 4. compositions `a -> b -> c` of two primitives (depth 2 only).
//!
//! Pairs matched by none of these are absent; callers receive
//! [`Outcome::NotFound`].

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::script::ScriptId;
use crate::translit::{self, Style};

// ---------------------------------------------------------------------------
// Keys and functions
// ---------------------------------------------------------------------------

/// A directional script pair. `(a, b)` and `(b, a)` are different keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConversionKey {
    pub source: ScriptId,
    pub destination: ScriptId,
}

impl ConversionKey {
    pub fn new(source: ScriptId, destination: ScriptId) -> Self {
        Self {
            source,
            destination,
        }
    }
}

impl fmt::Display for ConversionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.destination)
    }
}

/// A pure, total text transformation.
pub type ConversionFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Chain two conversions: `compose(f, g)(text) == g(f(text))`.
pub fn compose(f: ConversionFn, g: ConversionFn) -> ConversionFn {
    Arc::new(move |text: &str| g(&f(text)))
}

// ---------------------------------------------------------------------------
// Entries and outcomes
// ---------------------------------------------------------------------------

/// Why a pair is deliberately not converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refusal {
    /// Colloquial Thai does not record which consonants are vowelless, so
    /// the pintu spelling cannot be recovered from it.
    LossyColloquialThai,
}

impl Refusal {
    /// Explanation returned to the caller in place of converted text.
    pub fn reason(self) -> &'static str {
        match self {
            Self::LossyColloquialThai => {
                "Not available: colloquial thai is a lossy encoding of pali!"
            }
        }
    }
}

/// A registry entry.
#[derive(Clone)]
pub enum Conversion {
    Identity,
    Primitive(ConversionFn),
    Composed { via: ScriptId, function: ConversionFn },
    Refused(Refusal),
}

impl Conversion {
    /// Run the conversion on `text`.
    pub fn apply(&self, text: &str) -> Outcome {
        match self {
            Self::Identity => Outcome::Converted(text.to_string()),
            Self::Primitive(f) | Self::Composed { function: f, .. } => {
                Outcome::Converted(f(text))
            }
            Self::Refused(refusal) => Outcome::Refused(*refusal),
        }
    }

    /// Short tag for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::Primitive(_) => "primitive",
            Self::Composed { .. } => "composed",
            Self::Refused(_) => "refused",
        }
    }
}

impl fmt::Debug for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identity => f.write_str("Identity"),
            Self::Primitive(_) => f.write_str("Primitive(..)"),
            Self::Composed { via, .. } => f.debug_struct("Composed").field("via", via).finish(),
            Self::Refused(r) => f.debug_tuple("Refused").field(r).finish(),
        }
    }
}

/// Result of dispatching a conversion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Converted(String),
    Refused(Refusal),
    NotFound,
}

// ---------------------------------------------------------------------------
// Standard edges
// ---------------------------------------------------------------------------

fn colloquial_thai_to_roman(text: &str) -> String {
    translit::thai_to_roman(text, Style::Colloquial)
}

fn pintu_thai_to_roman(text: &str) -> String {
    translit::thai_to_roman(text, Style::Pintu)
}

/// Primitive capability for a pair, if the transliteration library has one.
fn standard_primitive(source: ScriptId, destination: ScriptId) -> Option<fn(&str) -> String> {
    use crate::script::ScriptId::*;

    match (source, destination) {
        (Latin, ThaiPintu) => Some(translit::roman_to_thai),
        (Latin, Kana) => Some(translit::roman_to_kana),
        (ThaiColloquial, Latin) => Some(colloquial_thai_to_roman),
        (ThaiPintu, Latin) => Some(pintu_thai_to_roman),
        (Latin, Latin | ThaiColloquial)
        | (ThaiColloquial, ThaiColloquial | ThaiPintu | Kana)
        | (ThaiPintu, ThaiColloquial | ThaiPintu | Kana)
        | (Kana, _) => None,
    }
}

fn standard_refusal(source: ScriptId, destination: ScriptId) -> Option<Refusal> {
    match (source, destination) {
        (ScriptId::ThaiColloquial, ScriptId::ThaiPintu) => Some(Refusal::LossyColloquialThai),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Collects primitive edges and refusals, then derives the full registry.
#[derive(Default)]
pub struct RegistryBuilder {
    primitives: HashMap<ConversionKey, ConversionFn>,
    refusals: HashMap<ConversionKey, Refusal>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a primitive conversion. A later declaration for the same
    /// pair replaces the earlier one.
    pub fn primitive<F>(mut self, source: ScriptId, destination: ScriptId, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.primitives
            .insert(ConversionKey::new(source, destination), Arc::new(f));
        self
    }

    /// Declare a pair that must be refused rather than converted.
    pub fn refuse(mut self, source: ScriptId, destination: ScriptId, refusal: Refusal) -> Self {
        self.refusals
            .insert(ConversionKey::new(source, destination), refusal);
        self
    }

    /// Derive every entry and freeze the result.
    pub fn build(self) -> Registry {
        let mut entries: HashMap<ConversionKey, Conversion> = HashMap::new();

        for s in ScriptId::ALL {
            entries.insert(ConversionKey::new(s, s), Conversion::Identity);
        }

        for (key, refusal) in &self.refusals {
            entries
                .entry(*key)
                .or_insert(Conversion::Refused(*refusal));
        }

        for (key, f) in &self.primitives {
            entries
                .entry(*key)
                .or_insert_with(|| Conversion::Primitive(Arc::clone(f)));
        }

        for source in ScriptId::ALL {
            for destination in ScriptId::ALL {
                let key = ConversionKey::new(source, destination);
                if entries.contains_key(&key) {
                    continue;
                }
                if let Some((via, function)) = self.chain(source, destination) {
                    tracing::debug!(%source, %destination, %via, "Derived composed conversion");
                    entries.insert(key, Conversion::Composed { via, function });
                }
            }
        }

        Registry { entries }
    }

    /// First two-step chain `source -> via -> destination` over primitive
    /// edges, trying intermediates in [`ScriptId::ALL`] order.
    fn chain(&self, source: ScriptId, destination: ScriptId) -> Option<(ScriptId, ConversionFn)> {
        ScriptId::ALL
            .into_iter()
            .filter(|&via| via != source && via != destination)
            .find_map(|via| {
                let f = self.primitives.get(&ConversionKey::new(source, via))?;
                let g = self.primitives.get(&ConversionKey::new(via, destination))?;
                Some((via, compose(Arc::clone(f), Arc::clone(g))))
            })
    }
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Immutable mapping from [`ConversionKey`] to [`Conversion`].
#[derive(Debug)]
pub struct Registry {
    entries: HashMap<ConversionKey, Conversion>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// The registry served by the API: every primitive and refusal the
    /// transliteration library defines, plus derived compositions.
    pub fn standard() -> Self {
        let mut builder = RegistryBuilder::new();
        for source in ScriptId::ALL {
            for destination in ScriptId::ALL {
                if let Some(f) = standard_primitive(source, destination) {
                    builder = builder.primitive(source, destination, f);
                }
                if let Some(refusal) = standard_refusal(source, destination) {
                    builder = builder.refuse(source, destination, refusal);
                }
            }
        }
        builder.build()
    }

    pub fn lookup(&self, key: ConversionKey) -> Option<&Conversion> {
        self.entries.get(&key)
    }

    /// Look up `key` and run it on `text`.
    pub fn convert(&self, text: &str, key: ConversionKey) -> Outcome {
        match self.lookup(key) {
            Some(conversion) => conversion.apply(text),
            None => Outcome::NotFound,
        }
    }

    /// Every registered pair, sorted by source then destination.
    pub fn pairs(&self) -> Vec<ConversionKey> {
        let mut keys: Vec<_> = self.entries.keys().copied().collect();
        keys.sort();
        keys
    }

    /// Scripts that some other script actually converts into.
    pub fn destinations(&self) -> Vec<ScriptId> {
        ScriptId::ALL
            .into_iter()
            .filter(|&d| {
                self.entries.iter().any(|(key, conversion)| {
                    key.destination == d
                        && matches!(
                            conversion,
                            Conversion::Primitive(_) | Conversion::Composed { .. }
                        )
                })
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
