//! Top-level controller.
//!
//! `Game` owns the loaded profile, the store, the RNG and at most one active
//! run. Every input event maps to one method that returns the [`Effect`]s to
//! execute; [`Game::dispatch`] executes them against a [`FeedbackSink`] with
//! the sound and voice settings applied.

use rand::rngs::StdRng;
use tracing::{info, warn};

use crate::config::{GameConfig, GameOptions};
use crate::error::GameError;
use crate::progress::{
    normalize_player_name, unlock::threshold, PersistentProfile, ProfileStore, Settings,
    UnlockTable,
};
use crate::quiz_engine::{make_rng, models::DifficultyTier};
use crate::session::{
    CooldownToken, Effect, FeedbackSink, LettersRun, MathRun, RunSummary, Step, SPEECH_LANG,
};

/// What the player is doing right now.
#[derive(Debug, Clone)]
pub enum Activity {
    Menu,
    Math(MathRun),
    Letters(LettersRun),
}

impl Activity {
    fn is_cooling_down(&self) -> bool {
        match self {
            Activity::Menu       => false,
            Activity::Math(run)  => run.phase().is_cooling_down(),
            Activity::Letters(run) => run.phase().is_cooling_down(),
        }
    }
}

pub struct Game<S: ProfileStore> {
    store: S,
    profile: PersistentProfile,
    config: GameConfig,
    rng: StdRng,
    activity: Activity,
    last_tier: Option<DifficultyTier>,
    next_run_id: u64,
}

impl<S: ProfileStore> Game<S> {
    /// Load the profile from `store` (falling back to defaults) and open the menu.
    pub fn new(store: S, options: GameOptions) -> Self {
        let profile = match store.load() {
            Ok(Some(profile)) => profile,
            Ok(None) => PersistentProfile::default(),
            Err(e) => {
                warn!(error = %e, "discarding unreadable profile, starting fresh");
                PersistentProfile::default()
            }
        };
        info!(stars = profile.cumulative_stars(), "profile loaded");

        Self {
            store,
            profile,
            config: options.config,
            rng: make_rng(options.rng_seed),
            activity: Activity::Menu,
            last_tier: None,
            next_run_id: 1,
        }
    }

    // -- queries ------------------------------------------------------------

    pub fn profile(&self) -> &PersistentProfile { &self.profile }
    pub fn settings(&self) -> &Settings { &self.profile.settings }
    pub fn config(&self) -> &GameConfig { &self.config }
    pub fn activity(&self) -> &Activity { &self.activity }
    pub fn store(&self) -> &S { &self.store }
    pub fn into_store(self) -> S { self.store }

    pub fn cumulative_stars(&self) -> u32 {
        self.profile.cumulative_stars()
    }

    pub fn player_name(&self) -> Option<&str> {
        self.profile.player_name()
    }

    /// The name screen has to be shown before the menu.
    pub fn needs_name(&self) -> bool {
        self.player_name().is_none()
    }

    pub fn unlock_table(&self) -> UnlockTable {
        UnlockTable::from_stars(self.cumulative_stars())
    }

    pub fn math_run(&self) -> Option<&MathRun> {
        match &self.activity {
            Activity::Math(run) => Some(run),
            _ => None,
        }
    }

    pub fn letters_run(&self) -> Option<&LettersRun> {
        match &self.activity {
            Activity::Letters(run) => Some(run),
            _ => None,
        }
    }

    // -- runs ---------------------------------------------------------------

    fn ensure_idle(&self) -> Result<(), GameError> {
        if self.activity.is_cooling_down() {
            warn!("run request rejected while a cool-down is pending");
            return Err(GameError::CooldownPending);
        }
        Ok(())
    }

    fn take_run_id(&mut self) -> u64 {
        let id = self.next_run_id;
        self.next_run_id += 1;
        id
    }

    /// Start an arithmetic run at a menu level (1..=3).
    pub fn start_math_level(&mut self, level: u8) -> Result<Vec<Effect>, GameError> {
        let tier = DifficultyTier::try_from(level)?;
        self.start_math_run(tier)
    }

    pub fn start_math_run(&mut self, tier: DifficultyTier) -> Result<Vec<Effect>, GameError> {
        self.ensure_idle()?;
        if !self.unlock_table().is_unlocked(tier) {
            let have = self.cumulative_stars();
            warn!(%tier, have, "locked tier requested");
            return Err(GameError::TierLocked { tier, needed: threshold(tier), have });
        }

        let run_id = self.take_run_id();
        let (run, effects) = MathRun::start(run_id, tier, &self.config, &mut self.rng);
        self.activity = Activity::Math(run);
        self.last_tier = Some(tier);
        Ok(effects)
    }

    /// Play the last math tier again.
    pub fn replay(&mut self) -> Result<Vec<Effect>, GameError> {
        let tier = self.last_tier.ok_or(GameError::NoRun)?;
        self.start_math_run(tier)
    }

    pub fn start_letters_run(&mut self) -> Result<Vec<Effect>, GameError> {
        self.ensure_idle()?;
        let run_id = self.take_run_id();
        let (run, effects) = LettersRun::start(run_id, &self.config, &mut self.rng);
        self.activity = Activity::Letters(run);
        Ok(effects)
    }

    /// Back to the menu. Not allowed while a cool-down is draining.
    pub fn abandon_run(&mut self) -> Result<(), GameError> {
        self.ensure_idle()?;
        self.activity = Activity::Menu;
        Ok(())
    }

    /// Answer button `choice` (0..=3) was pressed.
    pub fn submit_answer(&mut self, choice: usize) -> Vec<Effect> {
        match &mut self.activity {
            Activity::Math(run)    => run.submit(choice),
            Activity::Letters(run) => run.submit(choice),
            Activity::Menu         => Vec::new(),
        }
    }

    /// The timer of a [`Effect::ScheduleResume`] fired.
    pub fn resume(&mut self, token: CooldownToken) -> Vec<Effect> {
        let (step, earned) = match &mut self.activity {
            Activity::Math(run) => {
                let step = run.resume(token, &mut self.rng);
                (step, run.stars_earned())
            }
            Activity::Letters(run) => {
                let step = run.resume(token, &mut self.rng);
                (step, run.completion_bonus())
            }
            Activity::Menu => (Step::default(), 0),
        };

        let Step { mut effects, finished } = step;
        if finished.is_some() {
            // Stars of a failed run count as well.
            let total = self.profile.add_stars(earned);
            self.persist();
            if let Some(summary) = self.summary(total) {
                effects.push(Effect::RunFinished(summary));
            }
            effects.push(Effect::Unlocks(self.unlock_table()));
        }
        effects
    }

    fn summary(&self, cumulative_stars: u32) -> Option<RunSummary> {
        match &self.activity {
            Activity::Math(run)    => run.summary(cumulative_stars),
            Activity::Letters(run) => run.summary(cumulative_stars),
            Activity::Menu         => None,
        }
    }

    // -- profile ------------------------------------------------------------

    /// Best effort: a failed write is logged and the in-memory state kept.
    fn persist(&mut self) {
        match self.store.save(&self.profile) {
            Ok(()) => info!(stars = self.profile.cumulative_stars(), "profile saved"),
            Err(e) => warn!(error = %e, "profile save failed"),
        }
    }

    pub fn set_sound(&mut self, enabled: bool) {
        self.profile.settings.sound = enabled;
        self.persist();
    }

    pub fn set_voice(&mut self, enabled: bool) {
        self.profile.settings.voice = enabled;
        self.persist();
    }

    /// Trim, cap and store the player's name.
    pub fn save_player_name(&mut self, raw: &str) -> Result<&str, GameError> {
        let name = normalize_player_name(raw, self.config.player_name_max_chars)
            .ok_or(GameError::EmptyName)?;
        self.profile.player_name = name;
        self.persist();
        Ok(&self.profile.player_name)
    }

    // -- dispatch -----------------------------------------------------------

    /// Run `effects` against `sink`. Sounds are dropped when sound is off,
    /// speech when voice is off; phrases are addressed to the player.
    pub fn dispatch<F: FeedbackSink>(&self, effects: &[Effect], sink: &mut F) {
        let name = self.player_name();
        let settings = self.settings();
        for effect in effects {
            match effect {
                Effect::ShowQuestion(view) => sink.show_question(view),
                Effect::Hud(hud) => sink.hud(hud),
                Effect::Highlight { correct_index, chosen_index } => {
                    sink.highlight(*correct_index, *chosen_index)
                }
                Effect::Mascot(mood) => sink.mascot(*mood),
                Effect::Animate(motion) => sink.animate(*motion),
                Effect::Sparkle => sink.sparkle(),
                Effect::Drops => sink.drops(),
                Effect::Confetti(phrase) => sink.confetti(&phrase.render(name)),
                Effect::Toast(phrase) => sink.toast(&phrase.render(name)),
                Effect::Sound(cue) => {
                    if settings.sound {
                        sink.play(*cue);
                    }
                }
                Effect::Speak(phrase) => {
                    if settings.voice {
                        sink.speak(&phrase.render(name), SPEECH_LANG);
                    }
                }
                Effect::ScheduleResume(cooldown) => sink.schedule_resume(*cooldown),
                Effect::RunFinished(summary) => sink.run_finished(summary),
                Effect::Unlocks(table) => sink.unlocks(table),
            }
        }
    }
}
