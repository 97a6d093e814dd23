//! Session transitions: starting, tapping, the round timer, continue

use rand::Rng;

use super::state::{GameEvent, GameOver, GameOverCause, GamePhase, GameSession, TapOutcome};
use crate::difficulty::tier_of;
use crate::round::{IdSource, Round, RoundGenerator};
use crate::scoring::{multiplier_of, round_coins, streak_milestone};

impl GameSession {
    /// Countdown finished: deal the first round
    pub fn start_game<R: Rng, I: IdSource>(&mut self, generator: &mut RoundGenerator<R, I>) -> bool {
        if self.phase != GamePhase::Countdown {
            return false;
        }
        self.deal(generator.generate(0));
        self.phase = GamePhase::Playing;
        log::info!("Game started (high score {})", self.high_score);
        true
    }

    /// Handle a tap on the option with the given id
    pub fn tap<R: Rng, I: IdSource>(
        &mut self,
        generator: &mut RoundGenerator<R, I>,
        option_id: &str,
    ) -> TapOutcome {
        if self.phase != GamePhase::Playing {
            return TapOutcome::Ignored;
        }
        let is_correct = match self.round.as_ref().and_then(|r| r.find(option_id)) {
            Some(option) => option.is_correct,
            None => return TapOutcome::Ignored,
        };

        if !is_correct {
            return TapOutcome::Wrong(self.end_game(GameOverCause::WrongTap));
        }

        let previous_tier = self.tier();
        self.score = self.score.saturating_add(1);
        self.streak = self.streak.saturating_add(1);
        self.max_streak = self.max_streak.max(self.streak);
        self.multiplier = multiplier_of(self.streak);

        let tier = tier_of(self.score);
        if tier > previous_tier {
            log::info!("Tier up: {} (score {})", tier, self.score);
            self.events.push(GameEvent::TierUp { tier });
        }
        if let Some(label) = streak_milestone(self.streak) {
            self.events.push(GameEvent::StreakMilestone {
                streak: self.streak,
                label,
            });
        }

        self.deal(generator.generate(self.score));

        TapOutcome::Correct {
            score: self.score,
            streak: self.streak,
            multiplier: self.multiplier,
        }
    }

    /// Run the round timer down by `dt` seconds; ends the game on expiry
    pub fn advance(&mut self, dt: f32) -> Option<GameOver> {
        if self.phase != GamePhase::Playing {
            return None;
        }
        self.time_remaining -= dt.max(0.0);
        if self.time_remaining > 0.0 {
            return None;
        }
        self.time_remaining = 0.0;
        Some(self.end_game(GameOverCause::Timeout))
    }

    /// Resume a finished game once, keeping score, streak and multiplier
    pub fn continue_game<R: Rng, I: IdSource>(&mut self, generator: &mut RoundGenerator<R, I>) -> bool {
        if self.phase != GamePhase::GameOver || self.has_used_continue {
            return false;
        }
        self.has_used_continue = true;
        self.deal(generator.generate(self.score));
        self.phase = GamePhase::Playing;
        log::info!("Continued at score {}", self.score);
        true
    }

    fn deal(&mut self, round: Round) {
        self.time_remaining = round.time_per_tap;
        self.round = Some(round);
    }

    fn end_game(&mut self, cause: GameOverCause) -> GameOver {
        let is_new_high_score = self.score > self.high_score;
        let coins = round_coins(self.score, self.max_streak, is_new_high_score);

        if is_new_high_score {
            self.high_score = self.score;
        }
        self.total_coins = self.total_coins.saturating_add(coins);
        self.round_coins = coins;
        self.is_new_high_score = is_new_high_score;
        self.games_played += 1;
        self.phase = GamePhase::GameOver;

        log::info!(
            "Game over ({:?}): score {}, max streak {}, +{} coins{}",
            cause,
            self.score,
            self.max_streak,
            coins,
            if is_new_high_score { ", new high score" } else { "" }
        );

        GameOver {
            cause,
            score: self.score,
            max_streak: self.max_streak,
            round_coins: coins,
            is_new_high_score,
            correct_option_id: self
                .round
                .as_ref()
                .and_then(Round::correct_option)
                .map(|o| o.id.clone()),
        }
    }
}
