//! Single-player ship-hunting game engine.
//!
//! A [`GameSession`] owns one game: a hidden board with a randomly placed
//! fleet, a feedback log, and the game-over flag. Callers fire at textual
//! coordinates such as `"B7"` and read the resulting state through
//! [`GameSession::view`] or the individual accessors.
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod board;
mod common;
mod config;
mod coord;
pub mod feedback;
mod game;
#[cfg(feature = "std")]
mod logging;
mod placement;
pub mod prelude;
mod ship;
mod shot;
mod state;

pub use board::*;
pub use common::*;
pub use config::*;
pub use coord::*;
pub use feedback::{format_template, FeedbackLog, FeedbackMessage, MessageKind};
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use placement::place_randomly;
pub use ship::*;
pub use shot::*;
pub use state::*;
