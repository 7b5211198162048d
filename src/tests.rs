//! Crate-level tests for `mica_uci`.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Determinism | Same seed → identical questions; ids carry topic prefixes |
//! | Math runs | Perfect run, lives exhausted, counters stay in bounds |
//! | Letters runs | Flat bonus regardless of answers |
//! | Gating | Locked and unknown tiers, requests during a cool-down, stale tokens |
//! | Profile | Round trip through the store, corrupt data, failing saves, names |
//! | Dispatch | Sound / voice settings, personalised phrases, animations and banners |

use crate::error::StoreResult;
use crate::progress::{PersistentProfile, ProfileStore};
use crate::{
    generate_question, Activity, CooldownToken, DifficultyTier, Effect, FeedbackSink, Game,
    GameError, GameOptions, MemoryStore, Motion, NullSink, Question, QuestionRequest, QuizTopic,
    RunModule, RunOutcome, SoundCue, StoreError,
};

// ── helpers ──────────────────────────────────────────────────────────────────

const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

fn new_game(seed: u64) -> Game<MemoryStore> {
    Game::new(MemoryStore::new(), GameOptions::seeded(seed))
}

fn game_with_stars(stars: u32, seed: u64) -> Game<MemoryStore> {
    let mut profile = PersistentProfile::default();
    profile.meta.total_stars = stars;
    let mut store = MemoryStore::new();
    store.save(&profile).unwrap();
    Game::new(store, GameOptions::seeded(seed))
}

fn token_of(effects: &[Effect]) -> Option<CooldownToken> {
    effects.iter().find_map(|e| match e {
        Effect::ScheduleResume(cd) => Some(cd.token),
        _ => None,
    })
}

/// Submit `choice`, then run the cool-down to its end. Returns both batches.
fn answer_and_resume<S: ProfileStore>(game: &mut Game<S>, choice: usize) -> Vec<Effect> {
    let mut effects = game.submit_answer(choice);
    if let Some(token) = token_of(&effects) {
        effects.extend(game.resume(token));
    }
    effects
}

fn math_correct_index<S: ProfileStore>(game: &Game<S>) -> usize {
    game.math_run().unwrap().current_question().unwrap().correct_index
}

fn letters_correct_index<S: ProfileStore>(game: &Game<S>) -> usize {
    game.letters_run().unwrap().current_question().unwrap().correct_index
}

fn summary_of(effects: &[Effect]) -> Option<&crate::RunSummary> {
    effects.iter().find_map(|e| match e {
        Effect::RunFinished(s) => Some(s),
        _ => None,
    })
}

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_produces_identical_question() {
    let topics = [
        QuizTopic::Arithmetic(DifficultyTier::One),
        QuizTopic::Arithmetic(DifficultyTier::Three),
        QuizTopic::Letters,
    ];
    for topic in topics {
        let a = generate_question(QuestionRequest::seeded(topic, 12345));
        let b = generate_question(QuestionRequest::seeded(topic, 12345));
        assert_eq!(a, b, "question mismatch for {topic:?}");
    }
}

#[test]
fn question_ids_carry_topic_prefix() {
    for seed in SEEDS {
        let q = generate_question(QuestionRequest::seeded(QuizTopic::Arithmetic(DifficultyTier::Two), seed));
        assert!(q.question_id().starts_with("AR-"), "{}", q.question_id());
        let q = generate_question(QuestionRequest::seeded(QuizTopic::Letters, seed));
        assert!(q.question_id().starts_with("LT-"), "{}", q.question_id());
    }
}

#[test]
fn entropy_request_produces_a_valid_question() {
    let q = generate_question(QuestionRequest::new(QuizTopic::Arithmetic(DifficultyTier::Three)));
    assert!(q.correct_index() < 4);
    assert_eq!(q.view().choices.len(), 4);
    let Question::Arithmetic(q) = q else { panic!("expected arithmetic question") };
    assert_eq!(q.choices[q.correct_index], q.correct_value);
}

#[test]
fn same_seed_replays_the_same_run() {
    let first = |seed| {
        let mut game = new_game(seed);
        game.start_math_run(DifficultyTier::One).unwrap();
        game.math_run().unwrap().current_question().cloned()
    };
    assert_eq!(first(5), first(5));
}

// ── math runs ────────────────────────────────────────────────────────────────

#[test]
fn perfect_tier1_run_succeeds_with_ten_stars() {
    let mut game = new_game(1);
    game.start_math_run(DifficultyTier::One).unwrap();
    let mut last = Vec::new();
    for _ in 0..10 {
        let choice = math_correct_index(&game);
        last = answer_and_resume(&mut game, choice);
    }
    let run = game.math_run().unwrap();
    assert_eq!(run.outcome(), Some(RunOutcome::Success));
    assert_eq!(run.stars_earned(), 10);
    assert_eq!(run.correct_count(), 10);
    assert_eq!(run.lives_left(), 10);
    assert_eq!(run.question_index(), run.question_count());

    let summary = summary_of(&last).expect("no summary after last answer");
    assert_eq!(summary.module, RunModule::Math(DifficultyTier::One));
    assert_eq!(summary.cumulative_stars, 10);
    assert!(last.contains(&Effect::Sound(SoundCue::RunSuccess)));
    assert_eq!(game.cumulative_stars(), 10);
}

#[test]
fn three_misses_on_tier3_end_in_failure() {
    let mut game = game_with_stars(50, 2);
    game.start_math_run(DifficultyTier::Three).unwrap();
    let mut last = Vec::new();
    for _ in 0..3 {
        let wrong = (math_correct_index(&game) + 1) % 4;
        last = answer_and_resume(&mut game, wrong);
    }
    let run = game.math_run().unwrap();
    assert_eq!(run.outcome(), Some(RunOutcome::Failure));
    assert_eq!(run.lives_left(), 0);
    assert!(run.question_index() < 3);
    assert_eq!(summary_of(&last).unwrap().outcome, RunOutcome::Failure);

    // Further presses do nothing.
    assert!(game.submit_answer(0).is_empty());
}

#[test]
fn stars_from_a_failed_run_still_count() {
    let mut game = game_with_stars(50, 3);
    game.start_math_run(DifficultyTier::Three).unwrap();
    for _ in 0..4 {
        let choice = math_correct_index(&game);
        answer_and_resume(&mut game, choice);
    }
    for _ in 0..3 {
        let wrong = (math_correct_index(&game) + 1) % 4;
        answer_and_resume(&mut game, wrong);
    }
    assert_eq!(game.math_run().unwrap().outcome(), Some(RunOutcome::Failure));
    assert_eq!(game.cumulative_stars(), 54);
}

#[test]
fn counters_stay_in_bounds_under_random_play() {
    use rand::{Rng, SeedableRng};
    for seed in SEEDS {
        let mut game = game_with_stars(100, seed);
        let mut picker = rand::rngs::StdRng::seed_from_u64(seed ^ 0x5EED);
        for tier in DifficultyTier::ALL {
            game.start_math_run(tier).unwrap();
            let cfg = tier.config();
            while game.math_run().unwrap().outcome().is_none() {
                answer_and_resume(&mut game, picker.gen_range(0..4));
                let run = game.math_run().unwrap();
                assert!(run.question_index() <= run.question_count());
                assert!(run.lives_left() <= cfg.lives_total);
                match run.outcome() {
                    Some(RunOutcome::Success) => {
                        assert!(run.lives_left() > 0);
                        assert_eq!(run.question_index(), run.question_count());
                    }
                    Some(RunOutcome::Failure) => {
                        assert_eq!(run.lives_left(), 0);
                        assert!(run.question_index() < run.question_count());
                    }
                    None => {}
                }
            }
        }
    }
}

// ── letters runs ─────────────────────────────────────────────────────────────

#[test]
fn letters_run_always_grants_flat_bonus() {
    for (seed, pattern) in [(1u64, [true; 10]), (2, [false; 10]), (3, [true, false, true, false, true, false, true, false, true, false])] {
        let mut game = new_game(seed);
        game.start_letters_run().unwrap();
        let mut last = Vec::new();
        for right in pattern {
            let idx = letters_correct_index(&game);
            let choice = if right { idx } else { (idx + 1) % 4 };
            last = answer_and_resume(&mut game, choice);
        }
        assert_eq!(game.letters_run().unwrap().outcome(), Some(RunOutcome::Success));
        assert_eq!(game.cumulative_stars(), 5, "seed {seed}");
        let summary = summary_of(&last).unwrap();
        assert_eq!(summary.module, RunModule::Letters);
        assert_eq!(summary.stars_earned, 5);
        assert_eq!(summary.correct_count, None);
    }
}

// ── gating ───────────────────────────────────────────────────────────────────

#[test]
fn unlocks_follow_cumulative_stars() {
    let cases = [(19, false, false), (20, true, false), (49, true, false), (50, true, true)];
    for (stars, tier2, tier3) in cases {
        let table = game_with_stars(stars, 1).unlock_table();
        assert!(table.tier1);
        assert_eq!(table.tier2, tier2, "tier2 at {stars}");
        assert_eq!(table.tier3, tier3, "tier3 at {stars}");
    }
}

#[test]
fn locked_tier_is_rejected() {
    let mut game = game_with_stars(19, 1);
    let err = game.start_math_run(DifficultyTier::Two).unwrap_err();
    assert_eq!(err, GameError::TierLocked { tier: DifficultyTier::Two, needed: 20, have: 19 });
    assert!(matches!(game.activity(), Activity::Menu));
}

#[test]
fn unknown_level_is_rejected() {
    let mut game = new_game(1);
    assert_eq!(game.start_math_level(4).unwrap_err(), GameError::UnknownTier(4));
    assert_eq!(game.start_math_level(0).unwrap_err(), GameError::UnknownTier(0));
    assert!(game.start_math_level(1).is_ok());
}

#[test]
fn new_run_is_refused_while_cooling_down() {
    let mut game = new_game(4);
    game.start_math_run(DifficultyTier::One).unwrap();
    let effects = game.submit_answer(0);
    let token = token_of(&effects).unwrap();

    assert_eq!(game.start_math_run(DifficultyTier::One).unwrap_err(), GameError::CooldownPending);
    assert_eq!(game.start_letters_run().unwrap_err(), GameError::CooldownPending);
    assert_eq!(game.abandon_run().unwrap_err(), GameError::CooldownPending);

    game.resume(token);
    assert!(game.start_letters_run().is_ok());
}

#[test]
fn token_from_a_previous_run_is_ignored() {
    let mut game = new_game(5);
    game.start_math_run(DifficultyTier::One).unwrap();
    let old = token_of(&game.submit_answer(0)).unwrap();
    game.resume(old);
    game.abandon_run().unwrap();

    game.start_math_run(DifficultyTier::One).unwrap();
    let fresh = token_of(&game.submit_answer(0)).unwrap();
    assert_ne!(old.run_id(), fresh.run_id());
    assert!(game.resume(old).is_empty());
    assert!(game.math_run().unwrap().is_input_locked());
    assert!(!game.resume(fresh).is_empty());
}

#[test]
fn replay_restarts_last_tier() {
    let mut game = game_with_stars(20, 6);
    assert_eq!(game.replay().unwrap_err(), GameError::NoRun);
    game.start_math_run(DifficultyTier::Two).unwrap();
    game.abandon_run().unwrap();
    game.replay().unwrap();
    assert_eq!(game.math_run().unwrap().tier(), DifficultyTier::Two);
}

#[test]
fn answers_in_the_menu_are_ignored() {
    let mut game = new_game(1);
    assert!(game.submit_answer(0).is_empty());
}

// ── profile ──────────────────────────────────────────────────────────────────

#[test]
fn profile_survives_a_restart() {
    let mut game = new_game(7);
    game.save_player_name("  Marta ").unwrap();
    game.set_voice(false);
    game.start_letters_run().unwrap();
    for _ in 0..10 {
        answer_and_resume(&mut game, 0);
    }

    let raw = game.store().raw().expect("profile was never written");
    assert!(raw.contains("Marta"), "{raw}");

    let reloaded = Game::new(game.into_store(), GameOptions::seeded(8));
    assert_eq!(reloaded.player_name(), Some("Marta"));
    assert!(reloaded.settings().sound);
    assert!(!reloaded.settings().voice);
    assert_eq!(reloaded.cumulative_stars(), 5);
    assert!(!reloaded.needs_name());
}

#[test]
fn corrupt_profile_loads_as_defaults() {
    let game = Game::new(MemoryStore::with_raw("{\"meta\": 12"), GameOptions::seeded(1));
    assert_eq!(game.profile(), &PersistentProfile::default());
    assert!(game.needs_name());
}

struct BrokenStore;

impl ProfileStore for BrokenStore {
    fn load(&self) -> StoreResult<Option<PersistentProfile>> {
        Err(StoreError::Io {
            operation: "read",
            path: "unavailable".into(),
            source: std::io::Error::other("storage disabled"),
        })
    }

    fn save(&mut self, _profile: &PersistentProfile) -> StoreResult<()> {
        Err(StoreError::Io {
            operation: "write",
            path: "unavailable".into(),
            source: std::io::Error::other("storage disabled"),
        })
    }
}

#[test]
fn unavailable_storage_never_reaches_the_caller() {
    let mut game = Game::new(BrokenStore, GameOptions::seeded(9));
    game.set_sound(false);
    game.save_player_name("Ana").unwrap();
    game.start_letters_run().unwrap();
    for _ in 0..10 {
        answer_and_resume(&mut game, 1);
    }
    assert_eq!(game.cumulative_stars(), 5);
    assert!(!game.settings().sound);
}

#[test]
fn blank_name_is_rejected_and_long_name_is_cut() {
    let mut game = new_game(1);
    assert_eq!(game.save_player_name("   ").unwrap_err(), GameError::EmptyName);
    let saved = game.save_player_name("Ana-Marija Kovačević Horvat").unwrap().to_string();
    assert_eq!(saved.chars().count(), 20);
    assert_eq!(game.player_name(), Some(saved.as_str()));
}

// ── dispatch ─────────────────────────────────────────────────────────────────

#[derive(Default)]
struct Recorder {
    sounds: Vec<SoundCue>,
    spoken: Vec<(String, String)>,
    toasts: Vec<String>,
    banners: Vec<String>,
    motions: Vec<Motion>,
    sparkles: usize,
    questions: usize,
}

impl FeedbackSink for Recorder {
    fn show_question(&mut self, question: &crate::QuestionView) {
        assert_eq!(question.choices.len(), 4);
        self.questions += 1;
    }
    fn toast(&mut self, text: &str) {
        self.toasts.push(text.to_string());
    }
    fn play(&mut self, cue: SoundCue) {
        self.sounds.push(cue);
    }
    fn speak(&mut self, text: &str, lang: &str) {
        self.spoken.push((text.to_string(), lang.to_string()));
    }
    fn animate(&mut self, motion: Motion) {
        self.motions.push(motion);
    }
    fn sparkle(&mut self) {
        self.sparkles += 1;
    }
    fn confetti(&mut self, text: &str) {
        self.banners.push(text.to_string());
    }
}

#[test]
fn dispatch_personalises_and_respects_settings() {
    let mut game = new_game(10);
    game.save_player_name("Ana").unwrap();
    let start = game.start_math_run(DifficultyTier::One).unwrap();
    let choice = math_correct_index(&game);
    let answer = game.submit_answer(choice);

    let mut rec = Recorder::default();
    game.dispatch(&start, &mut rec);
    game.dispatch(&answer, &mut rec);
    assert_eq!(rec.questions, 1);
    assert_eq!(rec.sounds, vec![SoundCue::Correct]);
    assert_eq!(rec.spoken[0], ("Krenimo, Ana!".to_string(), "hr-HR".to_string()));
    assert_eq!(rec.spoken[1].0, "Bravo, Ana!");
    assert_eq!(rec.toasts, vec!["Bravo, Ana! ✨".to_string()]);

    game.set_sound(false);
    game.set_voice(false);
    let mut muted = Recorder::default();
    game.dispatch(&answer, &mut muted);
    assert!(muted.sounds.is_empty());
    assert!(muted.spoken.is_empty());
    assert_eq!(muted.toasts.len(), 1);
}

#[test]
fn visual_feedback_passes_through_regardless_of_settings() {
    let mut game = new_game(11);
    game.set_sound(false);
    game.set_voice(false);
    game.start_math_run(DifficultyTier::One).unwrap();

    let mut rec = Recorder::default();
    let mut last = Vec::new();
    for _ in 0..10 {
        let choice = math_correct_index(&game);
        last = answer_and_resume(&mut game, choice);
        game.dispatch(&last, &mut rec);
    }
    assert_eq!(rec.sparkles, 10);
    assert!(rec.motions.iter().all(|m| *m == Motion::Bounce));
    assert_eq!(rec.banners, vec!["🎉 Bravo, učenice!".to_string()]);
    assert!(rec.sounds.is_empty());

    // A sink that implements nothing accepts every effect.
    game.dispatch(&last, &mut NullSink);
}

#[test]
fn failure_banner_addresses_the_player() {
    let mut game = game_with_stars(50, 12);
    game.save_player_name("Ivo").unwrap();
    game.start_math_run(DifficultyTier::Three).unwrap();
    let mut rec = Recorder::default();
    for _ in 0..3 {
        let wrong = (math_correct_index(&game) + 1) % 4;
        let effects = answer_and_resume(&mut game, wrong);
        game.dispatch(&effects, &mut rec);
    }
    assert_eq!(rec.banners, vec!["🙂 Nema veze, Ivo!".to_string()]);
    assert_eq!(rec.motions, vec![Motion::Shake; 3]);
}
