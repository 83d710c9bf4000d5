//! Players and move resolution
//!
//! A [`Player`] couples a display name and marker with a [`MoveProvider`]:
//! - InteractiveMove: asks a [`SlotSource`] until it gets a free slot
//! - RandomMove: draws free slots from a seeded RNG

use alloc::string::{String, ToString};

use crate::engine::{
    board::Board,
    common::{Marker, MoveError},
    config::{AI_DISPLAY_NAME, UNNAMED},
};
use rand::rngs::SmallRng;

pub mod interactive;
pub use interactive::{InteractiveMove, ScriptedSource, SlotSource};

pub mod random;
pub use random::RandomMove;

/// Strategy that resolves a player's next slot.
pub enum MoveProvider {
    Interactive(InteractiveMove),
    Random(RandomMove),
}

impl MoveProvider {
    /// Produce a slot that is in range and free on `board`. Never mutates the board.
    pub fn next_move(&mut self, board: &Board) -> Result<usize, MoveError> {
        match self {
            MoveProvider::Interactive(p) => p.next_move(board),
            MoveProvider::Random(p) => p.next_move(board),
        }
    }
}

/// One side of the game.
pub struct Player {
    name: String,
    marker: Marker,
    provider: MoveProvider,
    is_automated: bool,
}

impl Player {
    /// Human player reading slots from `source`. Named [`UNNAMED`] until
    /// identity resolution assigns a display name.
    pub fn human(marker: Marker, source: impl SlotSource + 'static) -> Self {
        Self {
            name: UNNAMED.to_string(),
            marker,
            provider: MoveProvider::Interactive(InteractiveMove::new(source)),
            is_automated: false,
        }
    }

    /// Automated player choosing uniformly random free slots.
    pub fn ai(marker: Marker, rng: SmallRng) -> Self {
        Self {
            name: AI_DISPLAY_NAME.to_string(),
            marker,
            provider: MoveProvider::Random(RandomMove::new(rng)),
            is_automated: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// `true` for players that bypass identity resolution.
    pub fn is_automated(&self) -> bool {
        self.is_automated
    }

    pub(crate) fn next_move(&mut self, board: &Board) -> Result<usize, MoveError> {
        self.provider.next_move(board)
    }
}

impl core::fmt::Debug for Player {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("marker", &self.marker)
            .field("is_automated", &self.is_automated)
            .finish()
    }
}
