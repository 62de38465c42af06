//! Pali in Thai script.
//!
//! Two spellings are supported. The *pintu* spelling marks every vowelless
//! consonant with pinthu (ฺ) and is fully reversible. The *colloquial*
//! spelling follows modern Thai orthography: short `a` is written with ะ or
//! ั, vowelless consonants are unmarked. Reading it back is a heuristic.

use super::pali::{consonant_for_thai, tokenize, Token, Vowel};

const PINTHU: char = '\u{0E3A}';
const NIKKHAHIT: char = '\u{0E4D}';
const SARA_A: char = '\u{0E30}';
const MAI_HAN_AKAT: char = '\u{0E31}';
const SARA_E: char = 'เ';
const SARA_O: char = 'โ';
const O_ANG: char = 'อ';
const NGO_NGU: char = 'ง';

/// Which Thai spelling of Pali to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Colloquial,
    Pintu,
}

// ---------------------------------------------------------------------------
// Roman -> Thai (pintu)
// ---------------------------------------------------------------------------

/// Convert romanized Pali to Thai script in the pintu spelling.
///
/// Typographic apostrophes (`’`) are dropped.
pub fn roman_to_thai(text: &str) -> String {
    let cleaned = text.replace('’', "");
    let tokens = tokenize(&cleaned);
    let mut out = String::with_capacity(cleaned.len() * 2);
    let mut i = 0;

    while i < tokens.len() {
        match tokens[i] {
            Token::Consonant(cons) => match tokens.get(i + 1) {
                Some(Token::Vowel(v)) => {
                    push_syllable(&mut out, cons.thai, *v);
                    i += 2;
                    continue;
                }
                _ => {
                    out.push(cons.thai);
                    out.push(PINTHU);
                }
            },
            Token::Vowel(v) => push_syllable(&mut out, O_ANG, v),
            Token::Niggahita => out.push(NIKKHAHIT),
            Token::Other(ch) => out.push(ch),
        }
        i += 1;
    }

    out
}

fn push_syllable(out: &mut String, letter: char, vowel: Vowel) {
    match vowel {
        Vowel::E => {
            out.push(SARA_E);
            out.push(letter);
        }
        Vowel::O => {
            out.push(SARA_O);
            out.push(letter);
        }
        Vowel::A => out.push(letter),
        Vowel::Aa => {
            out.push(letter);
            out.push('า');
        }
        Vowel::I => {
            out.push(letter);
            out.push('ิ');
        }
        Vowel::Ii => {
            out.push(letter);
            out.push('ี');
        }
        Vowel::U => {
            out.push(letter);
            out.push('ุ');
        }
        Vowel::Uu => {
            out.push(letter);
            out.push('ู');
        }
    }
}

// ---------------------------------------------------------------------------
// Thai -> Roman
// ---------------------------------------------------------------------------

fn vowel_sign(ch: char) -> Option<Vowel> {
    match ch {
        'า' => Some(Vowel::Aa),
        'ิ' => Some(Vowel::I),
        'ี' => Some(Vowel::Ii),
        'ุ' => Some(Vowel::U),
        'ู' => Some(Vowel::Uu),
        _ => None,
    }
}

/// Roman value of a letter that can start a syllable; อ carries no sound.
fn letter_roman(ch: char) -> Option<&'static str> {
    if ch == O_ANG {
        Some("")
    } else {
        consonant_for_thai(ch).map(|c| c.roman)
    }
}

fn is_letter(ch: Option<&char>) -> bool {
    ch.is_some_and(|&c| letter_roman(c).is_some())
}

fn starts_syllable(ch: Option<&char>) -> bool {
    matches!(ch, Some(&SARA_E) | Some(&SARA_O)) || is_letter(ch)
}

/// Convert Thai-script Pali back to romanization.
pub fn thai_to_roman(text: &str, style: Style) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];

        // Prefix vowel: written before the letter it follows in speech.
        if ch == SARA_E || ch == SARA_O {
            if let Some(roman) = chars.get(i + 1).and_then(|&c| letter_roman(c)) {
                out.push_str(roman);
                out.push(if ch == SARA_E { 'e' } else { 'o' });
                i += 2;
                continue;
            }
            out.push(ch);
            i += 1;
            continue;
        }

        let Some(roman) = letter_roman(ch) else {
            match ch {
                NIKKHAHIT => out.push('ṃ'),
                PINTHU | SARA_A | MAI_HAN_AKAT => {}
                _ => out.push(ch),
            }
            i += 1;
            continue;
        };

        out.push_str(roman);
        i += 1;

        let next = chars.get(i).copied();
        if let Some(v) = next.and_then(vowel_sign) {
            out.push_str(v.roman());
            i += 1;
            continue;
        }

        match next {
            Some(PINTHU) => i += 1,
            Some(SARA_A) => {
                out.push('a');
                i += 1;
            }
            Some(MAI_HAN_AKAT) => {
                out.push('a');
                i += 1;
                // สังฆัง: a word-final ง closing ั is the niggahita.
                if style == Style::Colloquial
                    && chars.get(i) == Some(&NGO_NGU)
                    && !starts_syllable(chars.get(i + 1))
                    && chars.get(i + 1).and_then(|&c| vowel_sign(c)).is_none()
                {
                    out.push('ṃ');
                    i += 1;
                }
            }
            _ => {
                let vowelless = style == Style::Colloquial
                    && ch != O_ANG
                    && starts_syllable(next.as_ref());
                if !vowelless {
                    out.push('a');
                }
            }
        }
    }

    out
}
