//! Session state
//!
//! Everything the driver tracks between rounds. Tier is not stored: it is
//! recomputed from the score whenever asked for.

use serde::{Deserialize, Serialize};

use crate::difficulty::{Tier, tier_of};
use crate::round::Round;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Menu, nothing running
    #[default]
    Idle,
    /// "3, 2, 1" before the first round
    Countdown,
    /// A round is on screen and its timer is running
    Playing,
    /// Wrong tap or timeout
    GameOver,
}

/// Notable moments for presentation (banners, haptics, sounds)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    /// Score crossed into a higher tier
    TierUp { tier: Tier },
    /// Streak hit 5, 10 or 20
    StreakMilestone { streak: u32, label: &'static str },
}

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverCause {
    WrongTap,
    Timeout,
}

/// Summary handed back when a game ends
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOver {
    pub cause: GameOverCause,
    pub score: u32,
    pub max_streak: u32,
    /// Coins credited for this game
    pub round_coins: u32,
    pub is_new_high_score: bool,
    /// Correct option of the final round, for the reveal
    pub correct_option_id: Option<String>,
}

/// Result of a tap
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TapOutcome {
    /// Not playing, or the id is not in the current round
    Ignored,
    Correct { score: u32, streak: u32, multiplier: u32 },
    Wrong(GameOver),
}

/// A play session: one player, many games
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    pub phase: GamePhase,
    pub score: u32,
    /// Best score known to the session (loaded from the profile)
    pub high_score: u32,
    pub streak: u32,
    pub max_streak: u32,
    pub multiplier: u32,
    /// Seconds left on the current round
    pub time_remaining: f32,
    /// Round on screen (kept through game over for the reveal)
    pub round: Option<Round>,
    pub total_coins: u32,
    /// Coins from the most recent game over
    pub round_coins: u32,
    pub games_played: u32,
    pub is_new_high_score: bool,
    pub has_used_continue: bool,
    #[serde(skip)]
    pub(crate) events: Vec<GameEvent>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl GameSession {
    /// Create an idle session with the persisted high score and coin balance
    pub fn new(high_score: u32, total_coins: u32) -> Self {
        Self {
            phase: GamePhase::Idle,
            score: 0,
            high_score,
            streak: 0,
            max_streak: 0,
            multiplier: 1,
            time_remaining: Tier::One.time_budget(),
            round: None,
            total_coins,
            round_coins: 0,
            games_played: 0,
            is_new_high_score: false,
            has_used_continue: false,
            events: Vec::new(),
        }
    }

    pub fn tier(&self) -> Tier {
        tier_of(self.score)
    }

    /// Remaining fraction of the round's budget (1.0 = full)
    pub fn timer_progress(&self) -> f32 {
        match &self.round {
            Some(round) if round.time_per_tap > 0.0 => {
                (self.time_remaining / round.time_per_tap).clamp(0.0, 1.0)
            }
            _ => 1.0,
        }
    }

    /// Begin the pre-game countdown; clears the previous game's run stats
    pub fn start_countdown(&mut self) -> bool {
        if !matches!(self.phase, GamePhase::Idle | GamePhase::GameOver) {
            return false;
        }
        self.phase = GamePhase::Countdown;
        self.clear_run();
        true
    }

    /// Back to the menu
    pub fn reset(&mut self) {
        self.phase = GamePhase::Idle;
        self.clear_run();
        self.round = None;
        self.time_remaining = Tier::One.time_budget();
        self.events.clear();
    }

    /// Take the events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    fn clear_run(&mut self) {
        self.score = 0;
        self.streak = 0;
        self.max_streak = 0;
        self.multiplier = 1;
        self.round_coins = 0;
        self.is_new_high_score = false;
        self.has_used_continue = false;
    }
}
