use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Generation strategy that mines every cell independently with a fixed probability. Makes no promise about the total
/// mine count or about the board being winnable.
#[derive(Clone, Debug)]
pub struct RandomBoardGenerator {
    rng: SmallRng,
    mine_probability: f64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self::with_probability(seed, MINE_PROBABILITY)
    }

    pub fn with_probability(seed: u64, mine_probability: f64) -> Self {
        let mine_probability = if mine_probability.is_nan() {
            log::warn!("Mine probability is NaN, fallback to {}", MINE_PROBABILITY);
            MINE_PROBABILITY
        } else {
            mine_probability.clamp(0.0, 1.0)
        };
        Self {
            rng: SmallRng::seed_from_u64(seed),
            mine_probability,
        }
    }

    pub fn mine_probability(&self) -> f64 {
        self.mine_probability
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(&mut self, generation: Generation) -> Board {
        let mut mine_mask = [false; BOARD_CELLS];
        for has_mine in mine_mask.iter_mut() {
            *has_mine = self.rng.random_bool(self.mine_probability);
        }

        let board = Board::from_mine_mask(generation, &mine_mask);
        log::debug!(
            "Generated board {}: {} mines",
            generation.get(),
            board.mine_count()
        );
        board
    }
}
