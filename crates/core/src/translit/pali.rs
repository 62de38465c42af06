//! Pali phoneme inventory and the romanization tokenizer shared by the
//! Thai and kana converters.

use std::collections::HashMap;
use std::sync::LazyLock;

// ---------------------------------------------------------------------------
// Vowels
// ---------------------------------------------------------------------------

/// The eight Pali vowels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vowel {
    A,
    Aa,
    I,
    Ii,
    U,
    Uu,
    E,
    O,
}

impl Vowel {
    fn from_char(c: char) -> Option<Self> {
        match c {
            'a' => Some(Self::A),
            'ā' => Some(Self::Aa),
            'i' => Some(Self::I),
            'ī' => Some(Self::Ii),
            'u' => Some(Self::U),
            'ū' => Some(Self::Uu),
            'e' => Some(Self::E),
            'o' => Some(Self::O),
            _ => None,
        }
    }

    /// Romanized spelling.
    pub fn roman(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::Aa => "ā",
            Self::I => "i",
            Self::Ii => "ī",
            Self::U => "u",
            Self::Uu => "ū",
            Self::E => "e",
            Self::O => "o",
        }
    }

    /// Whether the vowel is written long in romanization (ā, ī, ū).
    pub fn is_long(self) -> bool {
        matches!(self, Self::Aa | Self::Ii | Self::Uu)
    }
}

// ---------------------------------------------------------------------------
// Consonants
// ---------------------------------------------------------------------------

/// One Pali consonant with its Thai letter.
#[derive(Debug, PartialEq, Eq)]
pub struct Consonant {
    pub roman: &'static str,
    pub thai: char,
}

const fn c(roman: &'static str, thai: char) -> Consonant {
    Consonant { roman, thai }
}

/// All Pali consonants, aspirated digraphs included.
pub static CONSONANTS: [Consonant; 33] = [
    c("k", 'ก'),
    c("kh", 'ข'),
    c("g", 'ค'),
    c("gh", 'ฆ'),
    c("ṅ", 'ง'),
    c("c", 'จ'),
    c("ch", 'ฉ'),
    c("j", 'ช'),
    c("jh", 'ฌ'),
    c("ñ", 'ญ'),
    c("ṭ", 'ฏ'),
    c("ṭh", 'ฐ'),
    c("ḍ", 'ฑ'),
    c("ḍh", 'ฒ'),
    c("ṇ", 'ณ'),
    c("t", 'ต'),
    c("th", 'ถ'),
    c("d", 'ท'),
    c("dh", 'ธ'),
    c("n", 'น'),
    c("p", 'ป'),
    c("ph", 'ผ'),
    c("b", 'พ'),
    c("bh", 'ภ'),
    c("m", 'ม'),
    c("y", 'ย'),
    c("r", 'ร'),
    c("l", 'ล'),
    c("v", 'ว'),
    c("s", 'ส'),
    c("h", 'ห'),
    c("ḷ", 'ฬ'),
    c("ḷh", 'ฬ'),
];

static BY_ROMAN: LazyLock<HashMap<&'static str, &'static Consonant>> =
    LazyLock::new(|| CONSONANTS.iter().map(|c| (c.roman, c)).collect());

// ḷ and ḷh share ฬ; the first entry wins so ฬ reads back as plain ḷ.
static BY_THAI: LazyLock<HashMap<char, &'static Consonant>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for c in &CONSONANTS {
        map.entry(c.thai).or_insert(c);
    }
    map
});

/// Look up the consonant written with a Thai letter.
pub fn consonant_for_thai(thai: char) -> Option<&'static Consonant> {
    BY_THAI.get(&thai).copied()
}

// ---------------------------------------------------------------------------
// Tokenizer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Consonant(&'static Consonant),
    Vowel(Vowel),
    /// ṃ / ṁ
    Niggahita,
    /// Anything that is not Pali (spaces, punctuation, digits, other scripts).
    Other(char),
}

/// Split romanized Pali into phoneme tokens.
///
/// Input is folded to lowercase first. Aspirated digraphs (`kh`, `ṭh`, ...)
/// are matched greedily. Only precomposed diacritics are recognised;
/// combining marks come through as [`Token::Other`].
pub fn tokenize(text: &str) -> Vec<Token> {
    let chars: Vec<char> = text.chars().flat_map(char::to_lowercase).collect();
    let mut tokens = Vec::with_capacity(chars.len());
    let mut buf = [0u8; 8];
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];

        if chars.get(i + 1) == Some(&'h') {
            let mut digraph = String::with_capacity(4);
            digraph.push(ch);
            digraph.push('h');
            if let Some(cons) = BY_ROMAN.get(digraph.as_str()) {
                tokens.push(Token::Consonant(cons));
                i += 2;
                continue;
            }
        }

        if let Some(cons) = BY_ROMAN.get(&*ch.encode_utf8(&mut buf)) {
            tokens.push(Token::Consonant(cons));
        } else if let Some(vowel) = Vowel::from_char(ch) {
            tokens.push(Token::Vowel(vowel));
        } else if ch == 'ṃ' || ch == 'ṁ' {
            tokens.push(Token::Niggahita);
        } else {
            tokens.push(Token::Other(ch));
        }
        i += 1;
    }

    tokens
}
