//! Side-effect intents emitted by the run state machines.
//!
//! A transition first updates the run, then returns a list of [`Effect`]s.
//! Nothing here plays a sound or touches a screen; a [`FeedbackSink`] does
//! that when [`Game::dispatch`](crate::Game::dispatch) hands the list over.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::progress::UnlockTable;
use crate::quiz_engine::models::{DifficultyTier, QuestionView};
use crate::session::cooldown::Cooldown;

/// Language tag for the speech collaborator.
pub const SPEECH_LANG: &str = "hr-HR";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundCue {
    Correct,
    Incorrect,
    RunSuccess,
}

impl SoundCue {
    pub fn key(self) -> &'static str {
        match self {
            SoundCue::Correct    => "correct",
            SoundCue::Incorrect  => "incorrect",
            SoundCue::RunSuccess => "run-success",
        }
    }

    /// Pitch of the short sine "plop" for this cue.
    pub fn frequency_hz(self) -> f32 {
        match self {
            SoundCue::Correct    => 880.0,
            SoundCue::Incorrect  => 220.0,
            SoundCue::RunSuccess => 990.0,
        }
    }
}

/// Mascot pose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mood {
    Idle,
    Happy,
    Wet,
    Cool,
}

impl Mood {
    pub fn asset(self) -> &'static str {
        match self {
            Mood::Idle  => "mica/mica-idle.png",
            Mood::Happy => "mica/mica-happy.png",
            Mood::Wet   => "mica/mica-wet.png",
            Mood::Cool  => "mica/mica-cool.png",
        }
    }
}

/// One-shot mascot animation, restarted on every trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Motion {
    Bounce,
    Shake,
}

impl Motion {
    /// CSS class the web front end toggles.
    pub fn class(self) -> &'static str {
        match self {
            Motion::Bounce => "bounce",
            Motion::Shake  => "shake",
        }
    }
}

/// Fixed feedback sentences. Rendered with the player's name when one is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phrase {
    RunStart,
    LettersStart,
    Correct,
    TryAgain,
    RunSuccess,
    RunFailure,
    CorrectToast,
    IncorrectToast,
    LettersIncorrectToast,
    ConfettiSuccess,
    ConfettiFailure,
}

impl Phrase {
    pub fn render(self, name: Option<&str>) -> String {
        let name = name.filter(|n| !n.is_empty());
        let n = name.map(|name| format!(", {name}")).unwrap_or_default();
        // Banners always address someone.
        let who = name.unwrap_or("učenice");
        match self {
            Phrase::RunStart              => format!("Krenimo{n}!"),
            Phrase::LettersStart          => format!("Idemo na slova{n}!"),
            Phrase::Correct               => format!("Bravo{n}!"),
            Phrase::TryAgain              => format!("Pokušaj ponovno{n}."),
            Phrase::RunSuccess            => format!("Bravo{n}! Završila si rundu!"),
            Phrase::RunFailure            => format!("Nema veze{n}. Probaj ponovno!"),
            Phrase::CorrectToast          => format!("Bravo{n}! ✨"),
            Phrase::IncorrectToast        => format!("Ups{n}! Pokušaj dalje 💦"),
            Phrase::LettersIncorrectToast => format!("Ups{n}! 💦"),
            Phrase::ConfettiSuccess       => format!("🎉 Bravo, {who}!"),
            Phrase::ConfettiFailure       => format!("🙂 Nema veze, {who}!"),
        }
    }
}

/// Heads-up display of the running round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hud {
    /// 1-based, capped at `question_count`.
    pub question_number: u32,
    pub question_count: u32,
    pub stars: Option<u32>,
    pub lives_left: Option<u32>,
    pub lives_total: Option<u32>,
    pub label: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunModule {
    Math(DifficultyTier),
    Letters,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunOutcome {
    Success,
    Failure,
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunOutcome::Success => write!(f, "Bravo!"),
            RunOutcome::Failure => write!(f, "Pokušaj ponovno!"),
        }
    }
}

/// End-of-run result screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub module: RunModule,
    pub outcome: RunOutcome,
    /// `None` for letters runs, which do not keep score.
    pub correct_count: Option<u32>,
    pub question_count: u32,
    pub stars_earned: u32,
    pub cumulative_stars: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Effect {
    ShowQuestion(QuestionView),
    Hud(Hud),
    Highlight { correct_index: usize, chosen_index: usize },
    Mascot(Mood),
    Animate(Motion),
    /// Sparkle burst over the question after a correct answer.
    Sparkle,
    /// Water drops over the mascot after a wrong answer.
    Drops,
    /// End-of-run banner.
    Confetti(Phrase),
    Toast(Phrase),
    Sound(SoundCue),
    Speak(Phrase),
    /// Call `Game::resume(cooldown.token)` once `cooldown.delay` has passed.
    ScheduleResume(Cooldown),
    RunFinished(RunSummary),
    Unlocks(UnlockTable),
}

/// Collaborator that executes effects. Every method is optional.
pub trait FeedbackSink {
    fn show_question(&mut self, _question: &QuestionView) {}
    fn hud(&mut self, _hud: &Hud) {}
    fn highlight(&mut self, _correct_index: usize, _chosen_index: usize) {}
    fn mascot(&mut self, _mood: Mood) {}
    fn animate(&mut self, _motion: Motion) {}
    fn sparkle(&mut self) {}
    fn drops(&mut self) {}
    fn confetti(&mut self, _text: &str) {}
    fn toast(&mut self, _text: &str) {}
    fn play(&mut self, _cue: SoundCue) {}
    fn speak(&mut self, _text: &str, _lang: &str) {}
    fn schedule_resume(&mut self, _cooldown: Cooldown) {}
    fn run_finished(&mut self, _summary: &RunSummary) {}
    fn unlocks(&mut self, _table: &UnlockTable) {}
}

/// Sink that drops everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl FeedbackSink for NullSink {}
