//! Error types shared by the coordinate codec, board and shot resolver.

/// Errors returned when parsing a textual coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordError {
    /// Input is not a column letter followed by an in-range row number.
    InvalidFormat,
}

/// Errors returned by board and placement operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Ship would extend past the board edge.
    ShipOutOfBounds,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Ship definition has zero length.
    InvalidShipSize,
    /// Random placement gave up after the configured number of attempts.
    PlacementExhausted {
        ship: &'static str,
        attempts: usize,
    },
}

/// Rejected shots. Each one has already been reported in the feedback log
/// by the time the caller sees it; none of them changes game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotError {
    /// Malformed or out-of-range coordinate text.
    InvalidFormat,
    /// The target cell was already resolved as a hit or miss.
    AlreadyFired,
    /// Every ship is sunk; the session needs a new game.
    GameAlreadyOver,
}

impl From<CoordError> for ShotError {
    fn from(err: CoordError) -> Self {
        match err {
            CoordError::InvalidFormat => ShotError::InvalidFormat,
        }
    }
}

impl core::fmt::Display for CoordError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CoordError::InvalidFormat => write!(f, "Coordinate is not a valid board position"),
        }
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::InvalidShipSize => write!(f, "Ship size must be greater than zero"),
            BoardError::PlacementExhausted { ship, attempts } => write!(
                f,
                "Unable to place {} after {} attempts",
                ship, attempts
            ),
        }
    }
}

impl core::fmt::Display for ShotError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ShotError::InvalidFormat => write!(f, "Invalid coordinate"),
            ShotError::AlreadyFired => write!(f, "Coordinate was already fired at"),
            ShotError::GameAlreadyOver => write!(f, "Game is already over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoordError {}
#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
#[cfg(feature = "std")]
impl std::error::Error for ShotError {}
