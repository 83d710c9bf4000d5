use alloc::string::String;

use crate::{
    engine::{
        board::Board,
        common::{EngineError, Marker},
        config::BOARD_SLOTS,
        render::Renderer,
    },
    player::Player,
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    InProgress,
    /// Index of the winning player.
    Won(usize),
    Draw,
}

impl Outcome {
    /// `true` once the game is Won or Draw.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Index of the winning player, if any.
    pub fn winner(&self) -> Option<usize> {
        match self {
            Outcome::Won(i) => Some(*i),
            _ => None,
        }
    }
}

/// Public identity of a player, without its move provider.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct PlayerInfo {
    pub name: String,
    pub marker: Marker,
    pub is_automated: bool,
}

impl From<&Player> for PlayerInfo {
    fn from(p: &Player) -> Self {
        PlayerInfo {
            name: String::from(p.name()),
            marker: p.marker(),
            is_automated: p.is_automated(),
        }
    }
}

/// Serializable snapshot of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct GameState {
    pub board: Board,
    pub players: [PlayerInfo; 2],
    pub current: usize,
    pub move_count: usize,
    pub outcome: Outcome,
}

/// Turn sequencing over a board and two players.
///
/// Each [`GameEngine::step`] asks the player to move for a slot, places its
/// marker, renders, then evaluates the board. A completed line wins for the
/// marker's owner; nine placements without one is a draw. Won and Draw are
/// absorbing.
pub struct GameEngine {
    board: Board,
    players: [Player; 2],
    current: usize,
    move_count: usize,
    outcome: Outcome,
}

impl GameEngine {
    /// Create an engine with an empty board; `first` moves first.
    pub fn new(first: Player, second: Player) -> Result<Self, EngineError> {
        if first.marker() == second.marker() {
            return Err(EngineError::DuplicateMarker);
        }
        Ok(Self {
            board: Board::new(),
            players: [first, second],
            current: 0,
            move_count: 0,
            outcome: Outcome::InProgress,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Index of the player to move.
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Placements made so far, 0..=9.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Play a single turn and return the resulting outcome.
    pub fn step(&mut self, renderer: &mut dyn Renderer) -> Result<Outcome, EngineError> {
        if self.outcome.is_terminal() {
            return Err(EngineError::GameOver);
        }
        let i = self.current;
        renderer.announce_turn(&self.players[i]);
        log::debug!("turn {}: awaiting move from {}", self.move_count + 1, self.players[i].name());

        let slot = self.players[i].next_move(&self.board)?;
        let marker = self.players[i].marker();
        if let Err(e) = self.board.place(slot, marker) {
            log::error!("provider for {} returned slot {}: {}", self.players[i].name(), slot, e);
            return Err(e.into());
        }
        self.move_count += 1;
        log::debug!("{} placed {} on slot {}", self.players[i].name(), marker, slot);
        renderer.announce_move(&self.players[i], slot);
        renderer.render(&self.board);

        self.outcome = self.evaluate();
        if self.outcome.is_terminal() {
            log::info!("game over after {} moves: {:?}", self.move_count, self.outcome);
            renderer.announce_outcome(&self.outcome, &self.players);
        } else {
            self.current = 1 - i;
        }
        Ok(self.outcome)
    }

    /// Render the empty board, then step until the game is Won or Draw.
    pub fn play(&mut self, renderer: &mut dyn Renderer) -> Result<Outcome, EngineError> {
        if self.move_count == 0 {
            renderer.render(&self.board);
        }
        loop {
            let outcome = self.step(renderer)?;
            if outcome.is_terminal() {
                return Ok(outcome);
            }
        }
    }

    /// Generate a serializable snapshot of the current state.
    pub fn state(&self) -> GameState {
        GameState {
            board: self.board,
            players: [
                PlayerInfo::from(&self.players[0]),
                PlayerInfo::from(&self.players[1]),
            ],
            current: self.current,
            move_count: self.move_count,
            outcome: self.outcome,
        }
    }

    fn evaluate(&self) -> Outcome {
        if let Some(marker) = self.board.evaluate_lines() {
            if let Some(idx) = self.players.iter().position(|p| p.marker() == marker) {
                return Outcome::Won(idx);
            }
        }
        if self.move_count >= BOARD_SLOTS {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }
}
