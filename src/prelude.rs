//! Commonly used types for ease of import.

pub use crate::{
    Coordinate, FeedbackMessage, GameConfig, GameSession, GameView, MessageKind, Shot, ShotError,
    ShotResult,
};
