//! Core tic-tac-toe game engine (no_std compatible)
//!
//! This module contains the pure game logic: board, placement rules, line
//! evaluation and turn sequencing. It needs only `core` and `alloc`.

pub mod board;
pub mod common;
pub mod config;
pub mod game;
pub mod render;

// Re-export commonly used types
pub use board::Board;
pub use common::{Cell, EngineError, InputError, InvalidSlot, Marker, MoveError, PlacementError};
pub use config::*;
pub use game::{GameEngine, GameState, Outcome, PlayerInfo};
pub use render::{NoRender, Renderer};
