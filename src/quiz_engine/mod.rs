//! Question generation: models, random helpers, distractors and topics.
//!
//! ## Module overview
//!
//! | Module        | Purpose |
//! |---------------|---------|
//! | `models`      | Tiers, questions, request/response structs |
//! | `helpers`     | Fisher-Yates shuffle, uniform picks, unique choice pools |
//! | `distractors` | Near-miss wrong answers for arithmetic |
//! | `alphabet`    | Croatian letters, word list, Unicode case mapping |
//! | `generator`   | Single entry point `generate_question()` |
//! | `topics`      | Arithmetic and letter generators |

pub mod alphabet;
pub mod distractors;
pub mod generator;
pub mod helpers;
pub mod models;
pub mod topics;

pub use generator::{generate_question, make_rng};
pub use models::{
    ArithmeticQuestion, DifficultyConfig, DifficultyTier, LetterCase, LetterMode,
    LetterQuestion, Operator, Question, QuestionRequest, QuestionView, QuizTopic,
    CHOICE_COUNT,
};
