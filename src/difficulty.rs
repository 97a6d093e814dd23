//! Difficulty model
//!
//! Pure mapping from cumulative score to the parameters that shape a round.
//! Tier is always derived from score, never stored.

use serde::{Deserialize, Serialize};

use crate::consts::{TIER_2_SCORE, TIER_3_SCORE, TIER_4_SCORE};
use crate::pieces::PieceColor;

/// Colors available at tiers 1-2
pub const BASE_COLORS: [PieceColor; 4] = [
    PieceColor::Red,
    PieceColor::Blue,
    PieceColor::Green,
    PieceColor::Yellow,
];

/// Base colors plus purple
pub const TIER_3_COLORS: [PieceColor; 5] = [
    PieceColor::Red,
    PieceColor::Blue,
    PieceColor::Green,
    PieceColor::Yellow,
    PieceColor::Purple,
];

/// Tier 3 colors plus orange
pub const TIER_4_COLORS: [PieceColor; 6] = PieceColor::ALL;

/// Difficulty tier (1-4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", from = "u8")]
pub enum Tier {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::One, Tier::Two, Tier::Three, Tier::Four];

    /// Tier for a cumulative score
    pub fn from_score(score: u32) -> Self {
        if score >= TIER_4_SCORE {
            Tier::Four
        } else if score >= TIER_3_SCORE {
            Tier::Three
        } else if score >= TIER_2_SCORE {
            Tier::Two
        } else {
            Tier::One
        }
    }

    /// Tier for a numeric level, clamped into 1..=4
    pub fn clamped(level: i64) -> Self {
        match level {
            i64::MIN..=1 => Tier::One,
            2 => Tier::Two,
            3 => Tier::Three,
            _ => Tier::Four,
        }
    }

    pub fn level(self) -> u8 {
        self as u8
    }

    /// Per-tap countdown budget in seconds
    pub fn time_budget(self) -> f32 {
        match self {
            Tier::One => 3.0,
            Tier::Two => 2.2,
            Tier::Three => 1.6,
            Tier::Four => 1.2,
        }
    }

    /// Number of options per round
    pub fn grid_size(self) -> usize {
        match self {
            Tier::One => 4,
            Tier::Two => 6,
            Tier::Three => 9,
            Tier::Four => 12,
        }
    }

    /// Layout hint for presentation
    pub fn grid_columns(self) -> usize {
        match self {
            Tier::One => 2,
            Tier::Two => 3,
            Tier::Three => 3,
            Tier::Four => 4,
        }
    }

    /// Rows needed to lay out `grid_size` options in `grid_columns`
    pub fn grid_rows(self) -> usize {
        self.grid_size().div_ceil(self.grid_columns())
    }

    pub fn palette(self) -> &'static [PieceColor] {
        match self {
            Tier::One | Tier::Two => &BASE_COLORS,
            Tier::Three => &TIER_3_COLORS,
            Tier::Four => &TIER_4_COLORS,
        }
    }

    /// Whether shape is a second attribute the player must match
    pub fn matches_shape(self) -> bool {
        self != Tier::One
    }

    /// Near-miss distractors requested per round (before capping to free slots)
    pub fn near_miss_count(self) -> usize {
        match self {
            Tier::One => 0,
            Tier::Two => 2,
            Tier::Three => 4,
            Tier::Four => 6,
        }
    }

    /// Banner shown when a game climbs into this tier
    pub fn banner(self) -> Option<(&'static str, &'static str)> {
        match self {
            Tier::One => None,
            Tier::Two => Some(("TIER 2", "#4488FF")),
            Tier::Three => Some(("TIER 3", "#AA44FF")),
            Tier::Four => Some(("TIER 4", "#FFD700")),
        }
    }
}

impl From<Tier> for u8 {
    fn from(tier: Tier) -> u8 {
        tier.level()
    }
}

impl From<u8> for Tier {
    fn from(level: u8) -> Self {
        Tier::clamped(level as i64)
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.level())
    }
}

/// Tier for a cumulative score
#[inline]
pub fn tier_of(score: u32) -> Tier {
    Tier::from_score(score)
}
