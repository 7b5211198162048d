use std::fmt;
use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Every question offers exactly this many answer buttons.
pub const CHOICE_COUNT: usize = 4;

// ---------------------------------------------------------------------------
// Difficulty
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DifficultyTier {
    One,
    Two,
    Three,
}

impl DifficultyTier {
    pub const ALL: [DifficultyTier; 3] = [DifficultyTier::One, DifficultyTier::Two, DifficultyTier::Three];

    /// Menu number of the tier (1..=3).
    pub fn level(self) -> u8 {
        match self {
            DifficultyTier::One   => 1,
            DifficultyTier::Two   => 2,
            DifficultyTier::Three => 3,
        }
    }

    pub fn config(self) -> DifficultyConfig {
        match self {
            DifficultyTier::One   => DifficultyConfig { max_operand: 10, lives_total: 10, question_count: 10 },
            DifficultyTier::Two   => DifficultyConfig { max_operand: 20, lives_total: 5,  question_count: 10 },
            DifficultyTier::Three => DifficultyConfig { max_operand: 30, lives_total: 3,  question_count: 10 },
        }
    }
}

impl TryFrom<u8> for DifficultyTier {
    type Error = GameError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(DifficultyTier::One),
            2 => Ok(DifficultyTier::Two),
            3 => Ok(DifficultyTier::Three),
            other => Err(GameError::UnknownTier(other)),
        }
    }
}

impl fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Razina {}", self.level())
    }
}

/// Operand range, lives and run length for one tier.
///
/// `max_operand` below 3 is too narrow for four distinct choices; the
/// arithmetic generator then widens the choice range to `[0, 3]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyConfig {
    pub max_operand: i32,
    pub lives_total: u32,
    pub question_count: u32,
}

// ---------------------------------------------------------------------------
// Arithmetic
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
}

impl Operator {
    pub fn apply(self, a: i32, b: i32) -> i32 {
        match self {
            Operator::Add      => a + b,
            Operator::Subtract => a - b,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Add      => write!(f, "+"),
            // U+2212, reads better than a hyphen on a big button
            Operator::Subtract => write!(f, "\u{2212}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArithmeticQuestion {
    pub question_id: String,
    pub operand_a: i32,
    pub operand_b: i32,
    pub operator: Operator,
    pub correct_value: i32,
    /// Four pairwise-distinct values in `[0, max_operand]`, shuffled.
    pub choices: Vec<i32>,
    pub correct_index: usize,
}

impl ArithmeticQuestion {
    /// The expression shown on screen, e.g. `"7 + 2 = ?"`.
    pub fn expression(&self) -> String {
        format!("{} {} {} = ?", self.operand_a, self.operator, self.operand_b)
    }

    pub fn view(&self) -> QuestionView {
        QuestionView {
            question_id: self.question_id.clone(),
            prompt: "Koliko je?".to_string(),
            display: self.expression(),
            choices: self.choices.iter().map(|c| c.to_string()).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Letters
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LetterMode {
    /// Touch the exact glyph shown.
    Find,
    /// Pick the other case of the glyph shown.
    Match,
    /// Pick the first letter of a word.
    Start,
}

impl fmt::Display for LetterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LetterMode::Find  => "Pronađi slovo",
            LetterMode::Match => "Spoji slova",
            LetterMode::Start => "Prvo slovo",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LetterCase {
    Upper,
    Lower,
}

impl LetterCase {
    pub fn opposite(self) -> Self {
        match self {
            LetterCase::Upper => LetterCase::Lower,
            LetterCase::Lower => LetterCase::Upper,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterQuestion {
    pub question_id: String,
    pub mode: LetterMode,
    pub prompt: String,
    /// Big glyph or word shown above the buttons.
    pub display: String,
    pub choices: Vec<String>,
    pub correct_index: usize,
    pub answer: String,
}

impl LetterQuestion {
    pub fn view(&self) -> QuestionView {
        QuestionView {
            question_id: self.question_id.clone(),
            prompt: self.prompt.clone(),
            display: self.display.clone(),
            choices: self.choices.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizTopic {
    Arithmetic(DifficultyTier),
    Letters,
}

impl fmt::Display for QuizTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizTopic::Arithmetic(tier) => write!(f, "Matematika ({})", tier),
            QuizTopic::Letters          => write!(f, "Slova"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRequest {
    pub topic: QuizTopic,
    pub rng_seed: Option<u64>,
}

impl QuestionRequest {
    /// Request with fresh entropy.
    pub fn new(topic: QuizTopic) -> Self {
        Self { topic, rng_seed: None }
    }

    pub fn seeded(topic: QuizTopic, seed: u64) -> Self {
        Self { topic, rng_seed: Some(seed) }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Question {
    Arithmetic(ArithmeticQuestion),
    Letter(LetterQuestion),
}

impl Question {
    pub fn question_id(&self) -> &str {
        match self {
            Question::Arithmetic(q) => &q.question_id,
            Question::Letter(q)     => &q.question_id,
        }
    }

    pub fn correct_index(&self) -> usize {
        match self {
            Question::Arithmetic(q) => q.correct_index,
            Question::Letter(q)     => q.correct_index,
        }
    }

    pub fn view(&self) -> QuestionView {
        match self {
            Question::Arithmetic(q) => q.view(),
            Question::Letter(q)     => q.view(),
        }
    }
}

/// What the presentation surface needs to draw one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionView {
    pub question_id: String,
    pub prompt: String,
    pub display: String,
    pub choices: Vec<String>,
}
