//! Run state machines and the intents they emit.
//!
//! | Module        | Purpose |
//! |---------------|---------|
//! | `cooldown`    | Cool-down tokens, run phases |
//! | `effects`     | `Effect` intents, phrases, sound cues, `FeedbackSink` |
//! | `math_run`    | Arithmetic run with lives and stars |
//! | `letters_run` | Letters run with a flat completion bonus |

pub mod cooldown;
pub mod effects;
pub mod letters_run;
pub mod math_run;

pub use cooldown::{Cooldown, CooldownToken, PendingStep, RunPhase};
pub use effects::{
    Effect, FeedbackSink, Hud, Mood, Motion, NullSink, Phrase, RunModule, RunOutcome, RunSummary,
    SoundCue, SPEECH_LANG,
};
pub use letters_run::LettersRun;
pub use math_run::MathRun;

/// Result of resuming a cool-down.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Step {
    pub effects: Vec<Effect>,
    /// Set when this resume ended the run.
    pub finished: Option<RunOutcome>,
}

impl Step {
    pub fn continued(effects: Vec<Effect>) -> Self {
        Self { effects, finished: None }
    }

    pub fn finished(effects: Vec<Effect>, outcome: RunOutcome) -> Self {
        Self { effects, finished: Some(outcome) }
    }
}
