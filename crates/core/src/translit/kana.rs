//! Romanized Pali to katakana.
//!
//! Every consonant is approximated by one katakana row. Aspiration and
//! retroflexion are not distinguished, which makes this direction lossy;
//! there is no way back.

use super::pali::{tokenize, Consonant, Token, Vowel};

const SOKUON: char = 'ッ';
const HATSUON: char = 'ン';
const CHOUON: char = 'ー';

/// Katakana row a consonant is approximated by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KanaRow {
    K,
    G,
    Ch,
    J,
    T,
    D,
    N,
    Ny,
    Ng,
    P,
    B,
    M,
    Y,
    R,
    V,
    S,
    H,
}

fn row(consonant: &Consonant) -> KanaRow {
    match consonant.roman {
        "k" | "kh" => KanaRow::K,
        "g" | "gh" => KanaRow::G,
        "ṅ" => KanaRow::Ng,
        "c" | "ch" => KanaRow::Ch,
        "j" | "jh" => KanaRow::J,
        "ñ" => KanaRow::Ny,
        "ṭ" | "ṭh" | "t" | "th" => KanaRow::T,
        "ḍ" | "ḍh" | "d" | "dh" => KanaRow::D,
        "ṇ" | "n" => KanaRow::N,
        "p" | "ph" => KanaRow::P,
        "b" | "bh" => KanaRow::B,
        "m" => KanaRow::M,
        "y" => KanaRow::Y,
        "v" => KanaRow::V,
        "s" => KanaRow::S,
        "h" => KanaRow::H,
        // r, l, ḷ, ḷh
        _ => KanaRow::R,
    }
}

/// Syllables of a row in a, i, u, e, o order.
fn syllables(row: KanaRow) -> [&'static str; 5] {
    match row {
        KanaRow::K => ["カ", "キ", "ク", "ケ", "コ"],
        KanaRow::G => ["ガ", "ギ", "グ", "ゲ", "ゴ"],
        KanaRow::Ch => ["チャ", "チ", "チュ", "チェ", "チョ"],
        KanaRow::J => ["ジャ", "ジ", "ジュ", "ジェ", "ジョ"],
        KanaRow::T => ["タ", "ティ", "トゥ", "テ", "ト"],
        KanaRow::D => ["ダ", "ディ", "ドゥ", "デ", "ド"],
        KanaRow::N | KanaRow::Ng => ["ナ", "ニ", "ヌ", "ネ", "ノ"],
        KanaRow::Ny => ["ニャ", "ニ", "ニュ", "ニェ", "ニョ"],
        KanaRow::P => ["パ", "ピ", "プ", "ペ", "ポ"],
        KanaRow::B => ["バ", "ビ", "ブ", "ベ", "ボ"],
        KanaRow::M => ["マ", "ミ", "ム", "メ", "モ"],
        KanaRow::Y => ["ヤ", "イ", "ユ", "イェ", "ヨ"],
        KanaRow::R => ["ラ", "リ", "ル", "レ", "ロ"],
        KanaRow::V => ["ヴァ", "ヴィ", "ヴ", "ヴェ", "ヴォ"],
        KanaRow::S => ["サ", "スィ", "ス", "セ", "ソ"],
        KanaRow::H => ["ハ", "ヒ", "フ", "ヘ", "ホ"],
    }
}

const VOWELS: [&str; 5] = ["ア", "イ", "ウ", "エ", "オ"];

fn column(vowel: Vowel) -> usize {
    match vowel {
        Vowel::A | Vowel::Aa => 0,
        Vowel::I | Vowel::Ii => 1,
        Vowel::U | Vowel::Uu => 2,
        Vowel::E => 3,
        Vowel::O => 4,
    }
}

fn is_nasal(row: KanaRow) -> bool {
    matches!(row, KanaRow::N | KanaRow::Ny | KanaRow::Ng | KanaRow::M)
}

/// Form used when the consonant closes a syllable and is not followed by
/// a consonant of the same row.
fn coda(row: KanaRow) -> &'static str {
    match row {
        KanaRow::T => "ト",
        KanaRow::D => "ド",
        KanaRow::Ch => "チ",
        KanaRow::J => "ジ",
        KanaRow::Y => "イ",
        other => syllables(other)[2],
    }
}

/// Convert romanized Pali to katakana.
pub fn roman_to_kana(text: &str) -> String {
    let tokens = tokenize(text);
    let mut out = String::with_capacity(text.len() * 3);
    let mut i = 0;

    while i < tokens.len() {
        match tokens[i] {
            Token::Consonant(cons) => {
                let cons_row = row(cons);
                if let Some(Token::Vowel(v)) = tokens.get(i + 1) {
                    out.push_str(syllables(cons_row)[column(*v)]);
                    if v.is_long() {
                        out.push(CHOUON);
                    }
                    i += 2;
                    continue;
                }
                match tokens.get(i + 1) {
                    _ if is_nasal(cons_row) => out.push(HATSUON),
                    Some(Token::Consonant(next)) if row(next) == cons_row => out.push(SOKUON),
                    _ => out.push_str(coda(cons_row)),
                }
            }
            Token::Vowel(v) => {
                out.push_str(VOWELS[column(v)]);
                if v.is_long() {
                    out.push(CHOUON);
                }
            }
            Token::Niggahita => out.push(HATSUON),
            Token::Other(ch) => out.push(ch),
        }
        i += 1;
    }

    out
}
