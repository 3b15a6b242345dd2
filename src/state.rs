//! The game-state object owned by a session, plus the read model handed to
//! a view layer.

use alloc::vec::Vec;

use crate::board::{Board, Cell};
use crate::config::Bounds;
use crate::coord::Coordinate;
use crate::feedback::{FeedbackLog, FeedbackMessage};
use crate::ship::{Fleet, ShipView};

/// Whether the most recent shot hit or missed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum ShotMark {
    Hit,
    Miss,
}

/// Record of the most recent resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct LastShot {
    pub at: Coordinate,
    pub result: ShotMark,
}

/// Board, ship registry, feedback log and game-level flags for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) fleet: Fleet,
    pub(crate) feedback: FeedbackLog,
    pub(crate) game_over: bool,
    pub(crate) last_shot: Option<LastShot>,
}

impl GameState {
    /// Empty board of `bounds`, no ships, empty log.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            board: Board::new(bounds),
            fleet: Fleet::new(),
            feedback: FeedbackLog::new(),
            game_over: false,
            last_shot: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Board and registry together, for laying out ships before play.
    pub fn layout_mut(&mut self) -> (&mut Board, &mut Fleet) {
        (&mut self.board, &mut self.fleet)
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn feedback(&self) -> &FeedbackLog {
        &self.feedback
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn last_shot(&self) -> Option<LastShot> {
        self.last_shot
    }

    pub(crate) fn emit(&mut self, message: FeedbackMessage) {
        self.feedback.push(message);
    }

    /// Spoiler-free snapshot for rendering.
    pub fn view(&self) -> GameView {
        GameView {
            bounds: self.board.bounds(),
            cells: self
                .board
                .rows_iter()
                .map(|row| row.iter().map(CellMark::from).collect())
                .collect(),
            ships: self.fleet.views().collect(),
            feedback: self.feedback.iter().cloned().collect(),
            game_over: self.game_over,
            last_shot: self.last_shot,
        }
    }
}

/// What the player can see of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum CellMark {
    Unknown,
    Miss,
    Hit,
    Sunk,
}

impl From<&Cell> for CellMark {
    fn from(cell: &Cell) -> Self {
        if cell.is_sunk() {
            CellMark::Sunk
        } else if cell.is_hit() {
            CellMark::Hit
        } else if cell.is_miss() {
            CellMark::Miss
        } else {
            CellMark::Unknown
        }
    }
}

/// Read model exposed to a view layer. Ship positions are not included.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct GameView {
    pub bounds: Bounds,
    pub cells: Vec<Vec<CellMark>>,
    pub ships: Vec<ShipView>,
    /// Newest first.
    pub feedback: Vec<FeedbackMessage>,
    pub game_over: bool,
    pub last_shot: Option<LastShot>,
}
