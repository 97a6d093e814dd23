//! Session driver
//!
//! Owns score, streak, coins and the round timer, and asks the round
//! generator for a fresh round on game start, after every correct tap and on
//! continue. Time only moves when the caller says so (`advance`).

pub mod state;
pub mod tick;

pub use state::{GameEvent, GameOver, GameOverCause, GamePhase, GameSession, TapOutcome};
