//! Round generator
//!
//! Tier 1 matches on color alone: every option is the default shape and the
//! decoys cycle through the other palette colors. Tiers 2-4 match on color
//! and shape, and seed the grid with near-miss decoys that share exactly one
//! attribute with the target.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::ids::{IdSource, SequentialIds, UniqueIds};
use super::{Round, TapOption, Target};
use crate::difficulty::{Tier, tier_of};
use crate::pieces::{PieceColor, Shape};

/// Builds rounds from a random source and an id source
#[derive(Debug, Clone)]
pub struct RoundGenerator<R = Pcg32, I = UniqueIds> {
    rng: R,
    ids: I,
}

impl RoundGenerator {
    /// Seeded generator with process-unique option ids
    pub fn new(seed: u64) -> Self {
        Self::with_parts(Pcg32::seed_from_u64(seed), UniqueIds::new(seed.rotate_left(32)))
    }

    /// Generator seeded from OS entropy; the seed is logged for replay
    pub fn from_entropy() -> Self {
        let seed: u64 = rand::random();
        log::debug!("Round generator seed: {}", seed);
        Self::new(seed)
    }
}

impl RoundGenerator<Pcg32, SequentialIds> {
    /// Fully reproducible generator: same seed, same rounds, same ids
    pub fn deterministic(seed: u64) -> Self {
        Self::with_parts(Pcg32::seed_from_u64(seed), SequentialIds::new())
    }
}

impl<R: Rng, I: IdSource> RoundGenerator<R, I> {
    pub fn with_parts(rng: R, ids: I) -> Self {
        Self { rng, ids }
    }

    /// Build a round for the given cumulative score
    pub fn generate(&mut self, score: u32) -> Round {
        self.generate_for_tier(tier_of(score))
    }

    pub fn generate_for_tier(&mut self, tier: Tier) -> Round {
        let round = if tier.matches_shape() {
            self.color_and_shape_round(tier)
        } else {
            self.color_round(tier)
        };
        log::debug!(
            "Tier {} round: target {} {}, {} options",
            tier,
            round.target.color.as_str(),
            round.target.effective_shape().as_str(),
            round.options.len()
        );
        round
    }

    fn color_round(&mut self, tier: Tier) -> Round {
        let palette = tier.palette();
        let target_color = self.pick(palette);

        let mut options = Vec::with_capacity(tier.grid_size());
        options.push(self.option(target_color, Shape::DEFAULT, true));

        let mut others = others_of(palette, target_color);
        others.shuffle(&mut self.rng);
        for i in 0..tier.grid_size() - 1 {
            options.push(self.option(others[i % others.len()], Shape::DEFAULT, false));
        }

        self.finish(
            Target {
                color: target_color,
                shape: None,
            },
            options,
            tier,
        )
    }

    fn color_and_shape_round(&mut self, tier: Tier) -> Round {
        let palette = tier.palette();
        let target_color = self.pick(palette);
        let target_shape = self.pick(&Shape::ALL);

        let mut options = Vec::with_capacity(tier.grid_size());
        options.push(self.option(target_color, target_shape, true));

        let other_colors = others_of(palette, target_color);
        let other_shapes = others_of(&Shape::ALL, target_shape);

        let remaining = tier.grid_size() - 1;
        let near_misses = tier.near_miss_count().min(remaining);

        // Same color, different shape gets the odd near-miss
        let same_color = near_misses.div_ceil(2);
        for i in 0..same_color {
            options.push(self.option(target_color, other_shapes[i % other_shapes.len()], false));
        }

        for i in 0..near_misses - same_color {
            options.push(self.option(other_colors[i % other_colors.len()], target_shape, false));
        }

        // Fillers differ on both attributes
        for i in 0..remaining - near_misses {
            options.push(self.option(
                other_colors[i % other_colors.len()],
                other_shapes[i % other_shapes.len()],
                false,
            ));
        }

        self.finish(
            Target {
                color: target_color,
                shape: Some(target_shape),
            },
            options,
            tier,
        )
    }

    fn finish(&mut self, target: Target, mut options: Vec<TapOption>, tier: Tier) -> Round {
        options.shuffle(&mut self.rng);
        Round {
            target,
            options,
            grid_columns: tier.grid_columns(),
            time_per_tap: tier.time_budget(),
            tier,
        }
    }

    fn option(&mut self, color: PieceColor, shape: Shape, is_correct: bool) -> TapOption {
        TapOption {
            id: self.ids.next_id(),
            color,
            shape,
            is_correct,
        }
    }

    fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.rng.random_range(0..items.len())]
    }
}

fn others_of<T: Copy + PartialEq>(items: &[T], excluded: T) -> Vec<T> {
    items.iter().copied().filter(|&item| item != excluded).collect()
}

/// One-off round from an entropy-seeded generator
pub fn generate_round(score: u32) -> Round {
    RoundGenerator::from_entropy().generate(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    fn decoys(round: &Round) -> impl Iterator<Item = &TapOption> {
        round.options.iter().filter(|o| !o.is_correct)
    }

    #[test]
    fn test_tier1_color_only() {
        let mut generator = RoundGenerator::deterministic(42);
        for _ in 0..200 {
            let round = generator.generate(3);
            assert_eq!(round.tier, Tier::One);
            assert_eq!(round.target.shape, None);
            assert_eq!(round.options.len(), 4);
            assert_eq!(round.grid_columns, 2);
            assert!(round.options.iter().all(|o| o.shape == Shape::DEFAULT));
            assert!(decoys(&round).all(|o| o.color != round.target.color));
        }
    }

    #[test]
    fn test_tier1_spreads_every_other_color() {
        // 3 decoy slots and 3 alternative colors: each appears exactly once
        let mut generator = RoundGenerator::deterministic(9);
        for _ in 0..100 {
            let round = generator.generate(0);
            let colors: HashSet<PieceColor> = decoys(&round).map(|o| o.color).collect();
            assert_eq!(colors.len(), 3);
        }
    }

    #[test]
    fn test_near_miss_split_per_tier() {
        let mut generator = RoundGenerator::deterministic(1234);
        // (score, same color, same shape, filler)
        for (score, same_color, same_shape, filler) in [(10, 1, 1, 3), (25, 2, 2, 4), (50, 3, 3, 5)] {
            for _ in 0..100 {
                let round = generator.generate(score);
                let target = round.target;
                let target_shape = target.effective_shape();
                let mut counts: HashMap<&str, usize> = HashMap::new();
                for o in decoys(&round) {
                    let key = match (o.color == target.color, o.shape == target_shape) {
                        (true, false) => "same_color",
                        (false, true) => "same_shape",
                        (false, false) => "filler",
                        (true, true) => panic!("decoy duplicates the target"),
                    };
                    *counts.entry(key).or_default() += 1;
                }
                assert_eq!(counts.get("same_color").copied().unwrap_or(0), same_color);
                assert_eq!(counts.get("same_shape").copied().unwrap_or(0), same_shape);
                assert_eq!(counts.get("filler").copied().unwrap_or(0), filler);
            }
        }
    }

    #[test]
    fn test_tier4_decoys_cycle_alternatives() {
        let mut generator = RoundGenerator::deterministic(4321);
        for _ in 0..200 {
            let round = generator.generate(50);
            let target = round.target;
            let target_shape = target.effective_shape();
            let other_colors = others_of(Tier::Four.palette(), target.color);
            let other_shapes = others_of(&Shape::ALL, target_shape);

            let same_color_shapes: HashSet<Shape> = decoys(&round)
                .filter(|o| o.color == target.color)
                .map(|o| o.shape)
                .collect();
            assert_eq!(same_color_shapes, other_shapes.iter().copied().collect::<HashSet<_>>());

            let same_shape_colors: HashSet<PieceColor> = decoys(&round)
                .filter(|o| o.shape == target_shape)
                .map(|o| o.color)
                .collect();
            assert_eq!(same_shape_colors, other_colors[..3].iter().copied().collect::<HashSet<_>>());

            let fillers: HashSet<(PieceColor, Shape)> = decoys(&round)
                .filter(|o| o.color != target.color && o.shape != target_shape)
                .map(|o| (o.color, o.shape))
                .collect();
            let expected: HashSet<(PieceColor, Shape)> = (0..5)
                .map(|i| (other_colors[i], other_shapes[i % other_shapes.len()]))
                .collect();
            assert_eq!(fillers, expected);
        }
    }

    #[test]
    fn test_round_parameters_follow_tier() {
        let mut generator = RoundGenerator::deterministic(5);
        for tier in Tier::ALL {
            let round = generator.generate_for_tier(tier);
            assert_eq!(round.tier, tier);
            assert_eq!(round.options.len(), tier.grid_size());
            assert_eq!(round.grid_columns, tier.grid_columns());
            assert_eq!(round.time_per_tap, tier.time_budget());
            assert!(round.options.iter().all(|o| tier.palette().contains(&o.color)));
        }
    }

    #[test]
    fn test_exactly_one_correct_matching_target() {
        let mut generator = RoundGenerator::new(77);
        for score in [0, 9, 10, 24, 25, 49, 50, 500] {
            let round = generator.generate(score);
            let correct: Vec<&TapOption> = round.options.iter().filter(|o| o.is_correct).collect();
            assert_eq!(correct.len(), 1);
            assert!(round.target.matches(correct[0].color, correct[0].shape));
            assert_eq!(round.correct_option(), Some(correct[0]));
        }
    }

    #[test]
    fn test_same_seed_same_rounds() {
        let mut a = RoundGenerator::deterministic(2024);
        let mut b = RoundGenerator::deterministic(2024);
        for score in 0..60 {
            let (ra, rb) = (a.generate(score), b.generate(score));
            assert_eq!(ra.target, rb.target);
            assert_eq!(ra.options, rb.options);
        }
    }

    #[test]
    fn test_correct_position_varies() {
        let mut generator = RoundGenerator::deterministic(3);
        let positions: HashSet<usize> = (0..200)
            .filter_map(|_| generator.generate(0).correct_index())
            .collect();
        assert_eq!(positions.len(), 4);
    }

    #[test]
    fn test_borrowed_id_source() {
        let mut ids = SequentialIds::new();
        {
            let mut generator = RoundGenerator::with_parts(Pcg32::seed_from_u64(1), &mut ids);
            let round = generator.generate(0);
            assert_eq!(round.options.len(), 4);
        }
        assert_eq!(ids.next_id(), "opt_5");
    }

    #[test]
    fn test_find_and_rows() {
        let mut generator = RoundGenerator::deterministic(8);
        let round = generator.generate(60);
        let first = &round.options[0];
        assert_eq!(round.find(&first.id), Some(first));
        assert_eq!(round.find("missing"), None);
        let rows: Vec<&[TapOption]> = round.rows().collect();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.len() == 4));
    }
}
