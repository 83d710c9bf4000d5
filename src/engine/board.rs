//! Game board state: nine cells addressed by 1-based slots in row-major order.

use crate::engine::common::{Cell, Marker, PlacementError};
use crate::engine::config::{BOARD_SLOTS, LINES};
use core::fmt;

/// Main board state. Cells change only through [`Board::place`], so the type
/// serializes for snapshots but is never deserialized.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Board {
    cells: [Cell; BOARD_SLOTS],
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; BOARD_SLOTS],
        }
    }

    /// Read-only view of all cells, slot 1 first.
    pub fn cells(&self) -> &[Cell; BOARD_SLOTS] {
        &self.cells
    }

    /// Cell at `slot`, or `None` when the slot is outside 1..=9.
    pub fn cell(&self, slot: usize) -> Option<Cell> {
        if (1..=BOARD_SLOTS).contains(&slot) {
            Some(self.cells[slot - 1])
        } else {
            None
        }
    }

    /// Returns `true` when `slot` holds a marker.
    ///
    /// Slots outside 1..=9 are never occupied; validate them with
    /// [`Board::check_slot`] first.
    pub fn is_occupied(&self, slot: usize) -> bool {
        matches!(self.cell(slot), Some(Cell::Marked(_)))
    }

    /// Validate a raw slot value: in range first, then free.
    pub fn check_slot(&self, raw: i64) -> Result<usize, PlacementError> {
        let slot = usize::try_from(raw).map_err(|_| PlacementError::OutOfRange)?;
        match self.cell(slot) {
            None => Err(PlacementError::OutOfRange),
            Some(Cell::Marked(_)) => Err(PlacementError::CellOccupied),
            Some(Cell::Empty) => Ok(slot),
        }
    }

    /// Mark `slot` with `marker`.
    pub fn place(&mut self, slot: usize, marker: Marker) -> Result<(), PlacementError> {
        let slot = self.check_slot(slot as i64)?;
        self.cells[slot - 1] = Cell::Marked(marker);
        Ok(())
    }

    /// Marker owning the first fully matched line, checking rows, then
    /// columns, then diagonals.
    pub fn evaluate_lines(&self) -> Option<Marker> {
        LINES.iter().find_map(|&[a, b, c]| {
            let m = self.cells[a - 1].marker()?;
            if self.cells[b - 1] == Cell::Marked(m) && self.cells[c - 1] == Cell::Marked(m) {
                Some(m)
            } else {
                None
            }
        })
    }

    /// Returns `true` when every cell holds a marker.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Number of cells holding `marker`.
    pub fn count(&self, marker: Marker) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Marked(marker))
            .count()
    }

    /// Free slots in ascending order.
    pub fn free_slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Cell::Empty)
            .map(|(i, _)| i + 1)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board [")?;
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 && i % 3 == 0 {
                write!(f, " |")?;
            }
            match cell {
                Cell::Empty => write!(f, " .")?,
                Cell::Marked(m) => write!(f, " {}", m)?,
            }
        }
        write!(f, " ]")
    }
}
