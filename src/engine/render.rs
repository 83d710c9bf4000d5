use crate::engine::{board::Board, game::Outcome};
use crate::player::Player;

/// View of the game driven by the engine. Only [`Renderer::render`] is required;
/// the announcement hooks default to doing nothing.
pub trait Renderer {
    /// Called once before the first move and after every successful placement.
    fn render(&mut self, board: &Board);

    /// The engine is about to ask `player` for a move.
    fn announce_turn(&mut self, _player: &Player) {}

    /// `player` placed its marker on `slot`.
    fn announce_move(&mut self, _player: &Player, _slot: usize) {}

    /// The game reached a terminal outcome.
    fn announce_outcome(&mut self, _outcome: &Outcome, _players: &[Player; 2]) {}
}

/// [`Renderer`] that draws nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoRender;

impl Renderer for NoRender {
    fn render(&mut self, _board: &Board) {}
}
