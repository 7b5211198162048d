use rand::Rng;
use tracing::debug;

use crate::quiz_engine::{
    alphabet::{with_case, LETTERS, WORDS},
    helpers::{coin, index_of, pick, question_id, unique_pool},
    models::{LetterCase, LetterMode, LetterQuestion, CHOICE_COUNT},
};

pub const PREFIX: &str = "LT";

fn random_case<R: Rng>(rng: &mut R) -> LetterCase {
    if coin(rng) { LetterCase::Upper } else { LetterCase::Lower }
}

/// A random letter in a random case.
fn random_glyph<R: Rng>(rng: &mut R) -> String {
    let letter = *pick(rng, &LETTERS);
    let case = random_case(rng);
    with_case(letter, case)
}

/// One letter question; the mode is drawn uniformly from the three variants.
pub fn generate<R: Rng>(rng: &mut R) -> LetterQuestion {
    let mode = match rng.gen_range(0..3) {
        0 => LetterMode::Find,
        1 => LetterMode::Match,
        _ => LetterMode::Start,
    };
    generate_mode(rng, mode)
}

/// One letter question of a fixed mode.
pub fn generate_mode<R: Rng>(rng: &mut R, mode: LetterMode) -> LetterQuestion {
    let question_id = question_id(rng, PREFIX);

    let (prompt, display, answer, choices) = match mode {
        LetterMode::Find => {
            let letter = *pick(rng, &LETTERS);
            let target = with_case(letter, random_case(rng));
            let choices = unique_pool(rng, target.clone(), CHOICE_COUNT, random_glyph);
            (format!("Dodirni slovo {target}"), target.clone(), target, choices)
        }
        LetterMode::Match => {
            let letter = *pick(rng, &LETTERS);
            let shown_case = random_case(rng);
            let shown = with_case(letter, shown_case);
            let target = with_case(letter, shown_case.opposite());
            let choices = unique_pool(rng, target.clone(), CHOICE_COUNT, random_glyph);
            (format!("Pronađi par za: {shown}"), shown, target, choices)
        }
        LetterMode::Start => {
            let (word, initial) = *pick(rng, &WORDS);
            let target = initial.to_string();
            let choices = unique_pool(rng, target.clone(), CHOICE_COUNT, |r| {
                pick(r, &LETTERS).to_string()
            });
            (format!("Koje slovo je prvo u riječi: {word}?"), word.to_string(), target, choices)
        }
    };

    let correct_index = index_of(&choices, &answer);
    debug!(%question_id, ?mode, %answer, ?choices, "letter question");

    LetterQuestion {
        question_id,
        mode,
        prompt,
        display,
        choices,
        correct_index,
        answer,
    }
}
