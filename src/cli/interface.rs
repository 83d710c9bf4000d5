#![cfg(feature = "std")]

//! Console rendering of the board and game announcements.

use std::fmt::Write as _;
use std::io::{self, Stdout, Write};

use crate::engine::{slot_to_coord, Board, Cell, Outcome, Renderer, BOARD_SLOTS, BOARD_WIDTH};
use crate::player::Player;

const RULE: &str = "-------------";

/// Draw the framed 3×3 grid: slot numbers for empty cells, markers otherwise.
pub fn board_to_string(board: &Board) -> String {
    let mut s = String::new();
    let _ = writeln!(s, "{}", RULE);
    for (slot, cell) in (1..=BOARD_SLOTS).zip(board.cells()) {
        let (_, col) = slot_to_coord(slot);
        if col == 0 {
            s.push('|');
        }
        match cell {
            Cell::Empty => {
                let _ = write!(s, " {} |", slot);
            }
            Cell::Marked(m) => {
                let _ = write!(s, " {} |", m);
            }
        }
        if col == BOARD_WIDTH - 1 {
            s.push('\n');
            let _ = writeln!(s, "{}", RULE);
        }
    }
    s
}

/// [`Renderer`] writing the board and announcements to `W`, stdout by default.
/// Write errors are ignored.
#[derive(Debug)]
pub struct ConsoleRenderer<W: Write = Stdout> {
    out: W,
}

impl ConsoleRenderer<Stdout> {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for ConsoleRenderer<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn render(&mut self, board: &Board) {
        let _ = write!(self.out, "{}", board_to_string(board));
    }

    fn announce_turn(&mut self, player: &Player) {
        if player.is_automated() {
            let _ = writeln!(self.out, "It's {}'s turn.", player.name());
        } else {
            let _ = write!(self.out, "It's {}'s turn. Enter your slot: ", player.name());
            let _ = self.out.flush();
        }
    }

    fn announce_move(&mut self, player: &Player, slot: usize) {
        if player.is_automated() {
            let _ = writeln!(self.out, "AI ({}) chose slot {}", player.marker(), slot);
        }
    }

    fn announce_outcome(&mut self, outcome: &Outcome, players: &[Player; 2]) {
        let _ = match outcome {
            Outcome::Won(i) => writeln!(self.out, "Player {} wins!", players[*i].name()),
            Outcome::Draw => writeln!(self.out, "It's a tie!"),
            Outcome::InProgress => Ok(()),
        };
    }
}
