//! Cool-down tokens and the run phase they guard.
//!
//! After an answer the run enters [`RunPhase::CoolingDown`] and hands out a
//! [`Cooldown`]. The caller's timer fires `resume(token)`; only the token of
//! the current step (and of the current run) advances the state. A cool-down
//! cannot be cancelled.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::session::effects::RunOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CooldownToken {
    run: u64,
    step: u32,
}

impl CooldownToken {
    pub fn run_id(&self) -> u64 {
        self.run
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cooldown {
    pub token: CooldownToken,
    pub delay: Duration,
}

/// What happens when the pending cool-down is resumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PendingStep {
    NextQuestion,
    Finish(RunOutcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    AwaitingAnswer,
    CoolingDown { token: CooldownToken, next: PendingStep },
    Complete(RunOutcome),
}

impl RunPhase {
    pub fn is_input_locked(&self) -> bool {
        !matches!(self, RunPhase::AwaitingAnswer)
    }

    pub fn is_cooling_down(&self) -> bool {
        matches!(self, RunPhase::CoolingDown { .. })
    }

    pub fn outcome(&self) -> Option<RunOutcome> {
        match self {
            RunPhase::Complete(outcome) => Some(*outcome),
            _ => None,
        }
    }
}

/// Issues one token per answered question of a run.
#[derive(Debug, Clone)]
pub struct CooldownClock {
    run: u64,
    step: u32,
}

impl CooldownClock {
    pub fn new(run_id: u64) -> Self {
        Self { run: run_id, step: 0 }
    }

    /// Lock `phase` until `next` is resumed.
    pub fn arm(&mut self, phase: &mut RunPhase, next: PendingStep, delay: Duration) -> Cooldown {
        self.step += 1;
        let token = CooldownToken { run: self.run, step: self.step };
        *phase = RunPhase::CoolingDown { token, next };
        Cooldown { token, delay }
    }
}

/// The pending step if `token` belongs to the cool-down in progress.
pub fn take_pending(phase: &RunPhase, token: CooldownToken) -> Option<PendingStep> {
    match phase {
        RunPhase::CoolingDown { token: current, next } if *current == token => Some(*next),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn armed_phase_locks_input_until_resumed() {
        let mut phase = RunPhase::AwaitingAnswer;
        let mut clock = CooldownClock::new(1);
        let cd = clock.arm(&mut phase, PendingStep::NextQuestion, Duration::from_millis(450));
        assert!(phase.is_input_locked());
        assert_eq!(cd.delay, Duration::from_millis(450));
        assert_eq!(take_pending(&phase, cd.token), Some(PendingStep::NextQuestion));
    }

    #[test]
    fn stale_and_foreign_tokens_are_rejected() {
        let mut phase = RunPhase::AwaitingAnswer;
        let mut clock = CooldownClock::new(1);
        let first = clock.arm(&mut phase, PendingStep::NextQuestion, Duration::ZERO);
        let second = clock.arm(&mut phase, PendingStep::NextQuestion, Duration::ZERO);
        assert_eq!(take_pending(&phase, first.token), None);
        assert!(take_pending(&phase, second.token).is_some());

        let mut other_phase = RunPhase::AwaitingAnswer;
        let mut other = CooldownClock::new(2);
        let foreign = other.arm(&mut other_phase, PendingStep::NextQuestion, Duration::ZERO);
        assert_eq!(take_pending(&phase, foreign.token), None);
    }
}
