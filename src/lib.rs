#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod engine;
pub mod player;
pub mod prelude;
#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub mod identity;
#[cfg(feature = "std")]
mod logging;

pub use engine::*;
pub use player::*;
#[cfg(feature = "std")]
pub use cli::{ConsoleRenderer, Opponent, StdinSource};
#[cfg(feature = "std")]
pub use identity::{AuthError, DisplayName, IdentityStore};
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
