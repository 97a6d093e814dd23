//! Scoring rules
//!
//! Every correct tap is worth one point. The streak multiplier is a display
//! value that steps up at fixed streaks; coins are paid once per finished game:
//! - 10 coins for playing
//! - 1 coin per point
//! - 50 bonus for beating the personal best
//! - 25 bonus for a streak of 10+

use crate::consts::*;

/// Streak multiplier: 5x at 20, 3x at 10, 2x at 5, otherwise 1x
pub fn multiplier_of(streak: u32) -> u32 {
    if streak >= STREAK_5X {
        5
    } else if streak >= STREAK_3X {
        3
    } else if streak >= STREAK_2X {
        2
    } else {
        1
    }
}

/// Coins earned for a finished game
pub fn round_coins(score: u32, max_streak: u32, is_new_high_score: bool) -> u32 {
    let mut coins = PARTICIPATION_COINS.saturating_add(score);

    if is_new_high_score {
        coins = coins.saturating_add(HIGH_SCORE_BONUS);
    }

    if max_streak >= STREAK_3X {
        coins = coins.saturating_add(STREAK_BONUS);
    }

    coins
}

/// Callout shown when a streak hits a milestone
pub fn streak_milestone(streak: u32) -> Option<&'static str> {
    match streak {
        STREAK_2X => Some("ON FIRE!"),
        STREAK_3X => Some("UNSTOPPABLE!"),
        STREAK_5X => Some("LEGENDARY!"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplier_steps() {
        assert_eq!(multiplier_of(0), 1);
        assert_eq!(multiplier_of(4), 1);
        assert_eq!(multiplier_of(5), 2);
        assert_eq!(multiplier_of(9), 2);
        assert_eq!(multiplier_of(10), 3);
        assert_eq!(multiplier_of(19), 3);
        assert_eq!(multiplier_of(20), 5);
        assert_eq!(multiplier_of(u32::MAX), 5);
    }

    #[test]
    fn test_multiplier_monotonic() {
        for streak in 0..100 {
            assert!(multiplier_of(streak + 1) >= multiplier_of(streak));
        }
    }

    #[test]
    fn test_round_coins() {
        assert_eq!(round_coins(0, 0, false), 10);
        assert_eq!(round_coins(7, 3, false), 17);
        assert_eq!(round_coins(5, 12, false), 40);
        assert_eq!(round_coins(5, 0, true), 65);
        assert_eq!(round_coins(100, 20, true), 185);
        assert_eq!(round_coins(0, 10, false), 35);
        assert_eq!(round_coins(0, 9, false), 10);
    }

    #[test]
    fn test_round_coins_saturates() {
        assert_eq!(round_coins(u32::MAX, 10, true), u32::MAX);
    }

    #[test]
    fn test_streak_milestones() {
        assert_eq!(streak_milestone(5), Some("ON FIRE!"));
        assert_eq!(streak_milestone(10), Some("UNSTOPPABLE!"));
        assert_eq!(streak_milestone(20), Some("LEGENDARY!"));
        assert_eq!(streak_milestone(6), None);
        assert_eq!(streak_milestone(40), None);
    }
}
