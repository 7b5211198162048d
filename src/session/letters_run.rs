//! Letters run: fixed length, no lives, always completes.
//!
//! Answers are judged only to drive feedback; nothing is tallied. The flat
//! completion bonus is granted by the [`Game`](crate::Game).

use std::time::Duration;

use rand::Rng;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::quiz_engine::{
    models::{LetterQuestion, CHOICE_COUNT},
    topics,
};
use crate::session::{
    cooldown::{take_pending, CooldownClock, CooldownToken, PendingStep, RunPhase},
    effects::{Effect, Hud, Mood, Motion, Phrase, RunModule, RunOutcome, RunSummary, SoundCue},
    Step,
};

#[derive(Debug, Clone)]
pub struct LettersRun {
    question_index: u32,
    question_count: u32,
    bonus: u32,
    current: Option<LetterQuestion>,
    phase: RunPhase,
    clock: CooldownClock,
    answer_cooldown: Duration,
}

impl LettersRun {
    pub fn start<R: Rng>(run_id: u64, game_config: &GameConfig, rng: &mut R) -> (Self, Vec<Effect>) {
        let mut run = Self {
            question_index: 0,
            question_count: game_config.letters_question_count.max(1),
            bonus: game_config.letters_completion_bonus,
            current: None,
            phase: RunPhase::AwaitingAnswer,
            clock: CooldownClock::new(run_id),
            answer_cooldown: game_config.answer_cooldown(),
        };
        info!(run_id, questions = run.question_count, "letters run started");

        let mut effects = run.next_question(rng);
        effects.push(Effect::Speak(Phrase::LettersStart));
        (run, effects)
    }

    pub fn submit(&mut self, choice: usize) -> Vec<Effect> {
        if self.phase.is_input_locked() || choice >= CHOICE_COUNT {
            debug!(choice, phase = ?self.phase, "letters answer ignored");
            return Vec::new();
        }
        let Some(question) = &self.current else {
            return Vec::new();
        };

        let correct_index = question.correct_index;
        let mut effects = vec![Effect::Highlight { correct_index, chosen_index: choice }];
        if choice == correct_index {
            effects.extend([
                Effect::Toast(Phrase::CorrectToast),
                Effect::Mascot(Mood::Cool),
                Effect::Animate(Motion::Bounce),
                Effect::Sound(SoundCue::Correct),
                Effect::Speak(Phrase::Correct),
            ]);
        } else {
            effects.extend([
                Effect::Toast(Phrase::LettersIncorrectToast),
                Effect::Mascot(Mood::Wet),
                Effect::Animate(Motion::Shake),
                Effect::Sound(SoundCue::Incorrect),
                Effect::Speak(Phrase::TryAgain),
            ]);
        }

        self.question_index += 1;
        let next = if self.question_index >= self.question_count {
            PendingStep::Finish(RunOutcome::Success)
        } else {
            PendingStep::NextQuestion
        };
        let cd = self.clock.arm(&mut self.phase, next, self.answer_cooldown);
        effects.push(Effect::ScheduleResume(cd));
        effects
    }

    pub fn resume<R: Rng>(&mut self, token: CooldownToken, rng: &mut R) -> Step {
        let Some(next) = take_pending(&self.phase, token) else {
            debug!(?token, "stale letters cool-down token");
            return Step::default();
        };

        match next {
            PendingStep::NextQuestion => Step::continued(self.next_question(rng)),
            PendingStep::Finish(outcome) => {
                self.phase = RunPhase::Complete(outcome);
                info!(questions = self.question_count, "letters run complete");
                Step::finished(vec![Effect::Mascot(Mood::Idle)], outcome)
            }
        }
    }

    fn next_question<R: Rng>(&mut self, rng: &mut R) -> Vec<Effect> {
        let question = topics::letters::generate(rng);
        let view = question.view();
        self.current = Some(question);
        self.phase = RunPhase::AwaitingAnswer;
        vec![Effect::ShowQuestion(view), Effect::Hud(self.hud()), Effect::Mascot(Mood::Idle)]
    }

    pub fn hud(&self) -> Hud {
        Hud {
            question_number: (self.question_index + 1).min(self.question_count),
            question_count: self.question_count,
            stars: None,
            lives_left: None,
            lives_total: None,
            label: self.current.as_ref().map(|q| q.mode.to_string()),
        }
    }

    pub fn summary(&self, cumulative_stars: u32) -> Option<RunSummary> {
        let outcome = self.phase.outcome()?;
        Some(RunSummary {
            module: RunModule::Letters,
            outcome,
            correct_count: None,
            question_count: self.question_count,
            stars_earned: self.bonus,
            cumulative_stars,
        })
    }

    /// Stars granted when the run completes.
    pub fn completion_bonus(&self) -> u32 { self.bonus }
    pub fn question_index(&self) -> u32 { self.question_index }
    pub fn question_count(&self) -> u32 { self.question_count }
    pub fn current_question(&self) -> Option<&LetterQuestion> { self.current.as_ref() }
    pub fn phase(&self) -> &RunPhase { &self.phase }
    pub fn is_input_locked(&self) -> bool { self.phase.is_input_locked() }
    pub fn outcome(&self) -> Option<RunOutcome> { self.phase.outcome() }
}
