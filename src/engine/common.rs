//! Common types for tic-tac-toe: markers, cells and the error taxonomy.

use core::fmt;

/// Symbol a player places on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Marker {
    X,
    O,
}

impl Marker {
    /// The opposing marker.
    pub fn other(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Marker::X => write!(f, "X"),
            Marker::O => write!(f, "O"),
        }
    }
}

/// Content of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Marked(Marker),
}

impl Cell {
    /// Marker held by this cell, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Cell::Empty => None,
            Cell::Marked(m) => Some(m),
        }
    }
}

/// Errors returned by Board placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Slot is outside 1..=9.
    OutOfRange,
    /// Target cell already holds a marker.
    CellOccupied,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfRange => write!(f, "Slot must be between 1 and 9"),
            PlacementError::CellOccupied => write!(f, "Slot is already taken"),
        }
    }
}

/// Failure reported by an input collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// Input was read but is not a number.
    Unreadable,
    /// Input is exhausted; no further slot will ever arrive.
    Closed,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Unreadable => write!(f, "Input is not a number"),
            InputError::Closed => write!(f, "Input closed"),
        }
    }
}

/// Reason an interactive slot request was rejected and re-prompted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidSlot {
    Unreadable,
    Placement(PlacementError),
}

impl From<PlacementError> for InvalidSlot {
    fn from(err: PlacementError) -> Self {
        InvalidSlot::Placement(err)
    }
}

impl fmt::Display for InvalidSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidSlot::Unreadable => write!(f, "Invalid slot: not a number"),
            InvalidSlot::Placement(e) => write!(f, "Invalid slot: {}", e),
        }
    }
}

/// Errors a move provider cannot recover from on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The interactive input source closed before a valid slot arrived.
    InputClosed,
    /// Asked for a move on a full board.
    NoFreeSlot,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InputClosed => write!(f, "Input closed before a valid slot was entered"),
            MoveError::NoFreeSlot => write!(f, "No free slot left on the board"),
        }
    }
}

/// Errors returned by the game engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Both players were given the same marker.
    DuplicateMarker,
    /// A move was requested after the game reached Won or Draw.
    GameOver,
    /// The active move provider failed.
    Move(MoveError),
    /// A provider returned a slot the board refused; the provider broke its contract.
    Placement(PlacementError),
}

impl From<MoveError> for EngineError {
    fn from(err: MoveError) -> Self {
        EngineError::Move(err)
    }
}

impl From<PlacementError> for EngineError {
    fn from(err: PlacementError) -> Self {
        EngineError::Placement(err)
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::DuplicateMarker => write!(f, "Players must hold distinct markers"),
            EngineError::GameOver => write!(f, "Game is already over"),
            EngineError::Move(e) => write!(f, "Move error: {}", e),
            EngineError::Placement(e) => write!(f, "Provider returned an unplayable slot: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
#[cfg(feature = "std")]
impl std::error::Error for InputError {}
#[cfg(feature = "std")]
impl std::error::Error for InvalidSlot {}
#[cfg(feature = "std")]
impl std::error::Error for MoveError {}
#[cfg(feature = "std")]
impl std::error::Error for EngineError {}
