//! # mica_uci
//!
//! Game core of a small learning game for young children: arithmetic and
//! alphabet quizzes with stars, lives, unlockable tiers and a persisted
//! profile. Rendering, audio and speech live outside the crate and are driven
//! through side-effect intents.
//!
//! ## How it works
//!
//! 1. Build a [`Game`] with a [`ProfileStore`] and [`GameOptions`]. The
//!    profile is loaded once; missing or corrupt data falls back to defaults.
//! 2. Start a run with [`Game::start_math_run`] or
//!    [`Game::start_letters_run`]. Locked tiers are rejected.
//! 3. Feed answer presses to [`Game::submit_answer`]. Each call returns a list
//!    of [`Effect`]s, including [`Effect::ScheduleResume`]: after its delay, call
//!    [`Game::resume`] with the token to show the next question or end the run.
//! 4. Hand effects to [`Game::dispatch`] with your own [`FeedbackSink`]. Sound
//!    and speech are filtered by the player's settings there.
//!
//! Completed runs add their stars to the profile total (a letters run adds a
//! flat bonus), save the profile and report the new [`UnlockTable`].
//!
//! ## Quick start
//!
//! ```rust
//! use mica_uci::{DifficultyTier, Effect, Game, GameOptions, MemoryStore};
//!
//! let mut game = Game::new(MemoryStore::new(), GameOptions::seeded(42));
//! game.save_player_name("Ana").unwrap();
//!
//! game.start_math_run(DifficultyTier::One).unwrap();
//! while game.math_run().map_or(false, |r| r.outcome().is_none()) {
//!     let answer = game.math_run().unwrap().current_question().unwrap().correct_index;
//!     let effects = game.submit_answer(answer);
//!     for effect in &effects {
//!         if let Effect::ScheduleResume(cooldown) = effect {
//!             // a real UI waits `cooldown.delay` first
//!             game.resume(cooldown.token);
//!         }
//!     }
//! }
//! assert_eq!(game.cumulative_stars(), 10);
//! ```
//!
//! One-off questions without a run:
//!
//! ```rust
//! use mica_uci::{generate_question, QuestionRequest, QuizTopic};
//!
//! let q = generate_question(QuestionRequest::seeded(QuizTopic::Letters, 7));
//! assert_eq!(q.view().choices.len(), 4);
//! ```

pub mod config;
pub mod error;
pub mod game;
pub mod progress;
pub mod quiz_engine;
pub mod session;

pub use config::{GameConfig, GameOptions, TIER2_STARS, TIER3_STARS};
pub use error::{GameError, StoreError};
pub use game::{Activity, Game};
pub use progress::{
    JsonFileStore, MemoryStore, PersistentProfile, ProfileStore, Settings, UnlockTable,
};
pub use quiz_engine::{
    generate_question, ArithmeticQuestion, DifficultyConfig, DifficultyTier, LetterMode,
    LetterQuestion, Operator, Question, QuestionRequest, QuestionView, QuizTopic,
};
pub use session::{
    Cooldown, CooldownToken, Effect, FeedbackSink, Hud, Mood, Motion, NullSink, Phrase,
    RunModule, RunOutcome, RunSummary, SoundCue,
};

#[cfg(test)]
mod tests;
