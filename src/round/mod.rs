//! Round generation
//!
//! A round is a target plus a shuffled grid of options, one of them correct.
//! Rounds are built fresh for every call and never mutated afterwards.

pub mod generate;
pub mod ids;

pub use generate::{RoundGenerator, generate_round};
pub use ids::{IdSource, SequentialIds, UniqueIds};

use serde::{Deserialize, Serialize};

use crate::difficulty::Tier;
use crate::pieces::{PieceColor, Shape};

/// What the player must match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    pub color: PieceColor,
    /// Absent at tier 1, where only color matters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<Shape>,
}

impl Target {
    /// Shape every matching option carries (default shape when unset)
    pub fn effective_shape(&self) -> Shape {
        self.shape.unwrap_or(Shape::DEFAULT)
    }

    pub fn matches(&self, color: PieceColor, shape: Shape) -> bool {
        self.color == color && self.effective_shape() == shape
    }
}

/// A tappable candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TapOption {
    pub id: String,
    pub color: PieceColor,
    pub shape: Shape,
    pub is_correct: bool,
}

/// One playable round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Round {
    pub target: Target,
    /// Options in display order
    pub options: Vec<TapOption>,
    pub grid_columns: usize,
    /// Countdown budget in seconds
    pub time_per_tap: f32,
    pub tier: Tier,
}

impl Round {
    pub fn find(&self, id: &str) -> Option<&TapOption> {
        self.options.iter().find(|o| o.id == id)
    }

    pub fn correct_option(&self) -> Option<&TapOption> {
        self.options.iter().find(|o| o.is_correct)
    }

    /// Index of the correct option in display order
    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|o| o.is_correct)
    }

    /// Options split into display rows
    pub fn rows(&self) -> impl Iterator<Item = &[TapOption]> {
        self.options.chunks(self.grid_columns.max(1))
    }
}
