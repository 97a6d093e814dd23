//! BlitzTap - a tap-matching arcade game engine
//!
//! Core modules:
//! - `difficulty`: Score to tier mapping and tier-shaped parameters
//! - `round`: Round generation (target, decoys, near-miss density)
//! - `scoring`: Streak multiplier and coin rewards
//! - `game`: Session driver (phases, timer, taps, continue)
//! - `persistence`: Key-value store for high score, coins and settings
//! - `pieces`: Colors and shapes

pub mod difficulty;
pub mod game;
pub mod persistence;
pub mod pieces;
pub mod round;
pub mod scoring;
pub mod settings;

pub use difficulty::{Tier, tier_of};
pub use game::{GameEvent, GameOver, GameOverCause, GamePhase, GameSession, TapOutcome};
pub use pieces::{PieceColor, Shape};
pub use round::{IdSource, Round, RoundGenerator, SequentialIds, TapOption, Target, UniqueIds, generate_round};
pub use scoring::{multiplier_of, round_coins};
pub use settings::{Settings, SettingsPatch};

/// Game balance constants
pub mod consts {
    /// Score thresholds at which tiers 2, 3 and 4 begin
    pub const TIER_2_SCORE: u32 = 10;
    pub const TIER_3_SCORE: u32 = 25;
    pub const TIER_4_SCORE: u32 = 50;

    /// Streaks at which the multiplier steps up (2x, 3x, 5x)
    pub const STREAK_2X: u32 = 5;
    pub const STREAK_3X: u32 = 10;
    pub const STREAK_5X: u32 = 20;

    /// Coins for finishing any game
    pub const PARTICIPATION_COINS: u32 = 10;
    /// Bonus for beating the personal best
    pub const HIGH_SCORE_BONUS: u32 = 50;
    /// Bonus for reaching a streak of `STREAK_3X`
    pub const STREAK_BONUS: u32 = 25;
}
