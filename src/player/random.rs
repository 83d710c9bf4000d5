use crate::engine::{
    board::Board,
    common::MoveError,
    config::BOARD_SLOTS,
};
use rand::{rngs::SmallRng, Rng};

/// Automated move provider drawing slots uniformly from 1..=9.
pub struct RandomMove {
    rng: SmallRng,
}

impl RandomMove {
    pub fn new(rng: SmallRng) -> Self {
        Self { rng }
    }

    /// Resample until a free slot comes up; occupied draws are discarded.
    pub fn next_move(&mut self, board: &Board) -> Result<usize, MoveError> {
        if board.is_full() {
            return Err(MoveError::NoFreeSlot);
        }
        loop {
            let slot = self.rng.random_range(1..=BOARD_SLOTS);
            if !board.is_occupied(slot) {
                return Ok(slot);
            }
        }
    }
}
