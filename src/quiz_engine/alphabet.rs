//! Croatian alphabet and the first-letter word list.
//!
//! The letter set is the 27 single-character letters; the digraphs DŽ, LJ and
//! NJ are not part of it. Entries are still `&str` so case mapping goes through
//! `str::to_uppercase`/`to_lowercase` and choices compare as strings.

use crate::quiz_engine::models::LetterCase;

/// The 27 letters used by the quiz, in alphabet order.
pub const LETTERS: [&str; 27] = [
    "A", "B", "C", "Č", "Ć", "D", "Đ", "E", "F", "G", "H", "I", "J", "K",
    "L", "M", "N", "O", "P", "R", "S", "Š", "T", "U", "V", "Z", "Ž",
];

/// Words paired with their initial letter (uppercase).
pub const WORDS: [(&str, &str); 10] = [
    ("MAČKA", "M"),
    ("ČAJ", "Č"),
    ("ŽABA", "Ž"),
    ("ŠUMA", "Š"),
    ("RIBA", "R"),
    ("ĐAK", "Đ"),
    ("CVIJET", "C"),
    ("KOLAČ", "K"),
    ("VODA", "V"),
    ("TATA", "T"),
];

/// Full Unicode case mapping. ASCII-only folding would leave Č, Ć, Đ, Š and
/// Ž untouched.
pub fn to_upper(letter: &str) -> String {
    letter.to_uppercase()
}

pub fn to_lower(letter: &str) -> String {
    letter.to_lowercase()
}

pub fn with_case(letter: &str, case: LetterCase) -> String {
    match case {
        LetterCase::Upper => to_upper(letter),
        LetterCase::Lower => to_lower(letter),
    }
}
