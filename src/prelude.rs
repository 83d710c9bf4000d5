//! Commonly used types and utilities for ease of import.

pub use crate::{
    Board, GameEngine, Marker, MoveProvider, NoRender, Outcome, Player, Renderer, ScriptedSource,
    SlotSource,
};

#[cfg(feature = "std")]
pub use crate::{ConsoleRenderer, IdentityStore, StdinSource};
