//! Terminal playthrough of both modules.
//!
//! Run with: `cargo run --example play`
//! Logs: `RUST_LOG=mica_uci=debug cargo run --example play`
//!
//! A simulated player answers correctly about four times out of five. The
//! profile is written to `MICA_UCI_PROFILE` (default `mica_uci_state_v1.json`),
//! so stars accumulate across invocations and unlock tiers 2 and 3.

use std::time::Duration;

use mica_uci::{
    Cooldown, DifficultyTier, Effect, FeedbackSink, Game, GameOptions, Hud, JsonFileStore, Mood,
    Motion, QuestionView, RunSummary, SoundCue, UnlockTable,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Default)]
struct Console {
    pending: Option<Cooldown>,
}

impl FeedbackSink for Console {
    fn show_question(&mut self, q: &QuestionView) {
        println!();
        println!("  {}  {}", q.prompt, q.display);
        for (i, c) in q.choices.iter().enumerate() {
            println!("    [{}] {}", i + 1, c);
        }
    }

    fn hud(&mut self, hud: &Hud) {
        let mut line = format!("  {}/{}", hud.question_number, hud.question_count);
        if let Some(stars) = hud.stars {
            line.push_str(&format!("  ⭐ {stars}"));
        }
        if let (Some(left), Some(total)) = (hud.lives_left, hud.lives_total) {
            line.push_str(&format!("  ❤️ {left}/{total}"));
        }
        if let Some(label) = &hud.label {
            line.push_str(&format!("  ({label})"));
        }
        println!("{line}");
    }

    fn mascot(&mut self, mood: Mood) {
        println!("  🐱 {}", mood.asset());
    }

    fn animate(&mut self, motion: Motion) {
        println!("  ~ {}", motion.class());
    }

    fn sparkle(&mut self) {
        println!("  ✨");
    }

    fn drops(&mut self) {
        println!("  💦");
    }

    fn confetti(&mut self, text: &str) {
        println!("  {text}");
    }

    fn toast(&mut self, text: &str) {
        println!("  » {text}");
    }

    fn play(&mut self, cue: SoundCue) {
        println!("  ♪ {} ({} Hz)", cue.key(), cue.frequency_hz());
    }

    fn speak(&mut self, text: &str, lang: &str) {
        println!("  🗣 [{lang}] {text}");
    }

    fn schedule_resume(&mut self, cooldown: Cooldown) {
        self.pending = Some(cooldown);
    }

    fn run_finished(&mut self, s: &RunSummary) {
        println!();
        println!("══ {} ══", s.outcome);
        if let Some(correct) = s.correct_count {
            println!("  Točno: {}/{}", correct, s.question_count);
        }
        println!("  ⭐ Osvojeno: +{} (ukupno: {}⭐)", s.stars_earned, s.cumulative_stars);
    }

    fn unlocks(&mut self, t: &UnlockTable) {
        println!("  Razine: 1 ✓  2 {}  3 {}", mark(t.tier2), mark(t.tier3));
    }
}

fn mark(open: bool) -> &'static str {
    if open { "✓" } else { "🔒" }
}

/// Press answers until the active run ends.
fn play_run(game: &mut Game<JsonFileStore>, console: &mut Console, player: &mut StdRng, effects: Vec<Effect>) {
    game.dispatch(&effects, console);
    loop {
        let correct = match (game.math_run(), game.letters_run()) {
            (Some(run), _) if run.outcome().is_none() => run.current_question().map(|q| q.correct_index),
            (_, Some(run)) if run.outcome().is_none() => run.current_question().map(|q| q.correct_index),
            _ => None,
        };
        let Some(correct) = correct else { break };

        let choice = if player.gen_bool(0.8) { correct } else { (correct + 1) % 4 };
        println!("  → {}", choice + 1);
        let effects = game.submit_answer(choice);
        game.dispatch(&effects, console);

        if let Some(cooldown) = console.pending.take() {
            std::thread::sleep(cooldown.delay.min(Duration::from_millis(50)));
            let effects = game.resume(cooldown.token);
            game.dispatch(&effects, console);
        }
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().without_time())
        .init();

    let mut game = Game::new(JsonFileStore::from_env(), GameOptions::default());
    if game.needs_name() {
        if let Err(e) = game.save_player_name("Mica") {
            eprintln!("{e}");
        }
    }
    let mut console = Console::default();
    let mut player = StdRng::from_entropy();

    println!("Bok, {}! Imaš {}⭐.", game.player_name().unwrap_or("učenice"), game.cumulative_stars());

    // Highest unlocked tier.
    let table = game.unlock_table();
    let tier = DifficultyTier::ALL
        .into_iter()
        .filter(|t| table.is_unlocked(*t))
        .last()
        .unwrap_or(DifficultyTier::One);
    for locked in DifficultyTier::ALL.into_iter().filter(|t| !table.is_unlocked(*t)) {
        if let Some(needed) = table.stars_needed(locked) {
            println!("{locked}: otključaj s {needed}⭐");
        }
    }

    println!();
    println!("━━ Matematika, {tier} ━━");
    match game.start_math_run(tier) {
        Ok(effects) => play_run(&mut game, &mut console, &mut player, effects),
        Err(e) => eprintln!("{e}"),
    }

    println!();
    println!("━━ Slova ━━");
    match game.start_letters_run() {
        Ok(effects) => play_run(&mut game, &mut console, &mut player, effects),
        Err(e) => eprintln!("{e}"),
    }
}
