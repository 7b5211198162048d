//! Arithmetic run: fixed question count, lives, one star per correct answer.
//!
//! ```text
//! start ──► AwaitingAnswer ──submit──► CoolingDown ──resume──► AwaitingAnswer
//!                                          │
//!                                          └──resume──► Complete(Success | Failure)
//! ```
//!
//! Losing the last life ends the run without advancing `question_index`, so a
//! failed run always stops short of `question_count`.

use std::time::Duration;

use rand::Rng;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::quiz_engine::{
    models::{ArithmeticQuestion, DifficultyConfig, DifficultyTier, CHOICE_COUNT},
    topics,
};
use crate::session::{
    cooldown::{take_pending, CooldownClock, CooldownToken, PendingStep, RunPhase},
    effects::{Effect, Hud, Mood, Motion, Phrase, RunModule, RunOutcome, RunSummary, SoundCue},
    Step,
};

#[derive(Debug, Clone)]
pub struct MathRun {
    tier: DifficultyTier,
    config: DifficultyConfig,
    question_index: u32,
    lives_left: u32,
    stars_earned: u32,
    correct_count: u32,
    current: Option<ArithmeticQuestion>,
    phase: RunPhase,
    clock: CooldownClock,
    answer_cooldown: Duration,
    failure_cooldown: Duration,
}

impl MathRun {
    /// Fresh run at `tier` with its first question already generated.
    pub fn start<R: Rng>(
        run_id: u64,
        tier: DifficultyTier,
        game_config: &GameConfig,
        rng: &mut R,
    ) -> (Self, Vec<Effect>) {
        let config = tier.config();
        let mut run = Self {
            tier,
            config,
            question_index: 0,
            lives_left: config.lives_total,
            stars_earned: 0,
            correct_count: 0,
            current: None,
            phase: RunPhase::AwaitingAnswer,
            clock: CooldownClock::new(run_id),
            answer_cooldown: game_config.answer_cooldown(),
            failure_cooldown: game_config.failure_cooldown(),
        };
        info!(run_id, %tier, "math run started");

        let mut effects = run.next_question(rng);
        effects.push(Effect::Speak(Phrase::RunStart));
        (run, effects)
    }

    /// Score `choice` against the current question. Ignored while input is
    /// locked or when `choice` is not a button index.
    pub fn submit(&mut self, choice: usize) -> Vec<Effect> {
        if self.phase.is_input_locked() || choice >= CHOICE_COUNT {
            debug!(choice, phase = ?self.phase, "math answer ignored");
            return Vec::new();
        }
        let Some(question) = &self.current else {
            return Vec::new();
        };

        let correct_index = question.correct_index;
        let is_correct = choice == correct_index;
        let mut effects = vec![Effect::Highlight { correct_index, chosen_index: choice }];

        if is_correct {
            self.stars_earned += 1;
            self.correct_count += 1;
            effects.extend([
                Effect::Toast(Phrase::CorrectToast),
                Effect::Mascot(Mood::Happy),
                Effect::Animate(Motion::Bounce),
                Effect::Sparkle,
                Effect::Sound(SoundCue::Correct),
                Effect::Speak(Phrase::Correct),
            ]);
        } else {
            self.lives_left = self.lives_left.saturating_sub(1);
            effects.extend([
                Effect::Toast(Phrase::IncorrectToast),
                Effect::Mascot(Mood::Wet),
                Effect::Animate(Motion::Shake),
                Effect::Drops,
                Effect::Sound(SoundCue::Incorrect),
                Effect::Speak(Phrase::TryAgain),
            ]);

            if self.lives_left == 0 {
                effects.push(Effect::Hud(self.hud()));
                let cd = self.clock.arm(
                    &mut self.phase,
                    PendingStep::Finish(RunOutcome::Failure),
                    self.failure_cooldown,
                );
                effects.push(Effect::ScheduleResume(cd));
                return effects;
            }
        }

        effects.push(Effect::Hud(self.hud()));
        self.question_index += 1;
        let next = if self.question_index >= self.config.question_count {
            PendingStep::Finish(RunOutcome::Success)
        } else {
            PendingStep::NextQuestion
        };
        let cd = self.clock.arm(&mut self.phase, next, self.answer_cooldown);
        effects.push(Effect::ScheduleResume(cd));
        effects
    }

    /// Finish the cool-down identified by `token`. Stale tokens do nothing.
    pub fn resume<R: Rng>(&mut self, token: CooldownToken, rng: &mut R) -> Step {
        let Some(next) = take_pending(&self.phase, token) else {
            debug!(?token, "stale math cool-down token");
            return Step::default();
        };

        match next {
            PendingStep::NextQuestion => Step::continued(self.next_question(rng)),
            PendingStep::Finish(outcome) => {
                self.phase = RunPhase::Complete(outcome);
                info!(
                    tier = %self.tier, ?outcome, stars = self.stars_earned,
                    correct = self.correct_count, lives_left = self.lives_left,
                    "math run complete"
                );
                let effects = match outcome {
                    RunOutcome::Success => vec![
                        Effect::Sound(SoundCue::RunSuccess),
                        Effect::Confetti(Phrase::ConfettiSuccess),
                        Effect::Mascot(Mood::Cool),
                        Effect::Animate(Motion::Bounce),
                        Effect::Speak(Phrase::RunSuccess),
                    ],
                    RunOutcome::Failure => vec![
                        Effect::Confetti(Phrase::ConfettiFailure),
                        Effect::Speak(Phrase::RunFailure),
                    ],
                };
                Step::finished(effects, outcome)
            }
        }
    }

    fn next_question<R: Rng>(&mut self, rng: &mut R) -> Vec<Effect> {
        let question = topics::arithmetic::generate(rng, &self.config);
        let view = question.view();
        self.current = Some(question);
        self.phase = RunPhase::AwaitingAnswer;
        vec![Effect::ShowQuestion(view), Effect::Hud(self.hud()), Effect::Mascot(Mood::Idle)]
    }

    pub fn hud(&self) -> Hud {
        Hud {
            question_number: (self.question_index + 1).min(self.config.question_count),
            question_count: self.config.question_count,
            stars: Some(self.stars_earned),
            lives_left: Some(self.lives_left),
            lives_total: Some(self.config.lives_total),
            label: None,
        }
    }

    pub fn summary(&self, cumulative_stars: u32) -> Option<RunSummary> {
        let outcome = self.phase.outcome()?;
        Some(RunSummary {
            module: RunModule::Math(self.tier),
            outcome,
            correct_count: Some(self.correct_count),
            question_count: self.config.question_count,
            stars_earned: self.stars_earned,
            cumulative_stars,
        })
    }

    pub fn tier(&self) -> DifficultyTier { self.tier }
    pub fn config(&self) -> &DifficultyConfig { &self.config }
    pub fn question_index(&self) -> u32 { self.question_index }
    pub fn question_count(&self) -> u32 { self.config.question_count }
    pub fn lives_left(&self) -> u32 { self.lives_left }
    pub fn stars_earned(&self) -> u32 { self.stars_earned }
    pub fn correct_count(&self) -> u32 { self.correct_count }
    pub fn current_question(&self) -> Option<&ArithmeticQuestion> { self.current.as_ref() }
    pub fn phase(&self) -> &RunPhase { &self.phase }
    pub fn is_input_locked(&self) -> bool { self.phase.is_input_locked() }
    pub fn outcome(&self) -> Option<RunOutcome> { self.phase.outcome() }
}
