//! BlitzTap headless demo
//!
//! Plays a game with an autoplay bot, prints every round and persists the
//! high score and coins to the profile store.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use blitz_tap::game::{GameEvent, GameOver, GameSession, TapOutcome};
use blitz_tap::persistence::{FileStore, KeyValueStore, MemoryStore, Profile};
use blitz_tap::pieces::timer_color;
use blitz_tap::{Round, RoundGenerator};

/// Headless BlitzTap: an autoplay bot taps through generated rounds.
#[derive(Debug, Parser)]
#[command(name = "blitz-tap", version, about)]
struct Args {
    /// Seed for round generation and the bot (random if not set)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Profile store file (JSON). Kept in memory if not set.
    #[arg(long, value_name = "FILE")]
    store: Option<PathBuf>,

    /// Chance the bot taps the correct option
    #[arg(short, long, default_value = "0.97", value_name = "P")]
    accuracy: f64,

    /// Stop after this many taps even if the game is still running
    #[arg(long, default_value = "200", value_name = "N")]
    max_taps: u32,

    /// Don't use the one continue after the first game over
    #[arg(long)]
    no_continue: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    anyhow::ensure!(
        (0.0..=1.0).contains(&args.accuracy),
        "--accuracy must be between 0 and 1"
    );

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("BlitzTap starting with seed: {}", seed);

    match &args.store {
        Some(path) => {
            let store = FileStore::open(path)
                .with_context(|| format!("failed to open store {}", path.display()))?;
            log::info!("Using store {}", store.path().display());
            run(&args, seed, store)
        }
        None => run(&args, seed, MemoryStore::new()),
    }
}

fn run<S: KeyValueStore>(args: &Args, seed: u64, store: S) -> Result<()> {
    let mut profile = Profile::new(store);
    let settings = profile.settings();
    log::info!(
        "Loaded profile: high score {}, coins {}, sound {}, haptics {}",
        profile.high_score(),
        profile.total_coins(),
        settings.sound_enabled,
        settings.haptics_enabled
    );

    let mut session = GameSession::new(profile.high_score(), profile.total_coins());
    let mut generator = RoundGenerator::new(seed);
    let mut bot = Pcg32::seed_from_u64(seed.wrapping_add(1));

    session.start_countdown();
    session.start_game(&mut generator);

    let mut taps = 0;
    loop {
        if taps >= args.max_taps {
            log::info!("Tap limit reached at score {}", session.score);
            break;
        }
        taps += 1;

        let Some(over) = bot_turn(&mut session, &mut generator, &mut bot, args.accuracy) else {
            continue;
        };
        report(&over);
        persist(&mut profile, &over).context("failed to save profile")?;

        if !args.no_continue && session.continue_game(&mut generator) {
            println!("-- continue --");
            continue;
        }
        break;
    }

    println!(
        "High score {} | coins {} | games {}",
        session.high_score, session.total_coins, session.games_played
    );
    Ok(())
}

/// Wait a random reaction time, then tap; returns the game over if it happened
fn bot_turn(
    session: &mut GameSession,
    generator: &mut RoundGenerator,
    bot: &mut Pcg32,
    accuracy: f64,
) -> Option<GameOver> {
    let round = session.round.clone()?;
    print_round(&round, session.score);

    let reaction = round.time_per_tap * bot.random_range(0.2f32..1.05);
    let over = session.advance(reaction);
    if over.is_some() {
        return over;
    }
    println!(
        "  tapped after {:.2}s (timer {})",
        reaction,
        timer_color(session.timer_progress())
    );

    let decoys: Vec<_> = round.options.iter().filter(|o| !o.is_correct).collect();
    let choice = if decoys.is_empty() || bot.random_bool(accuracy) {
        round.correct_option()?
    } else {
        decoys[bot.random_range(0..decoys.len())]
    };

    let outcome = session.tap(generator, &choice.id);
    for event in session.drain_events() {
        match event {
            GameEvent::TierUp { tier } => {
                if let Some((text, color)) = tier.banner() {
                    println!("** {} ({}) **", text, color);
                }
            }
            GameEvent::StreakMilestone { streak, label } => {
                println!("** {} streak {} **", label, streak);
            }
        }
    }

    match outcome {
        TapOutcome::Wrong(over) => Some(over),
        TapOutcome::Correct { .. } | TapOutcome::Ignored => None,
    }
}

fn print_round(round: &Round, score: u32) {
    println!(
        "score {} | tier {} | {:.1}s | target: {} {}",
        score,
        round.tier,
        round.time_per_tap,
        round.target.color.as_str(),
        round.target.effective_shape().as_str()
    );
    for row in round.rows() {
        let cells: Vec<String> = row
            .iter()
            .map(|o| format!("[{:>6} {:<8}]", o.color.as_str(), o.shape.as_str()))
            .collect();
        println!("  {}", cells.join(" "));
    }
}

fn report(over: &GameOver) {
    println!(
        "GAME OVER ({:?}): score {}, max streak {}, +{} coins{}",
        over.cause,
        over.score,
        over.max_streak,
        over.round_coins,
        if over.is_new_high_score { " - NEW HIGH SCORE" } else { "" }
    );
}

fn persist<S: KeyValueStore>(profile: &mut Profile<S>, over: &GameOver) -> Result<()> {
    if over.is_new_high_score {
        profile.set_high_score(over.score)?;
    }
    profile.add_coins(over.round_coins)?;
    Ok(())
}
