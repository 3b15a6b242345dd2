use crate::ship::ShipDef;

/// Smallest board edge a game may use; smaller settings are clamped up.
pub const MIN_DIMENSION: usize = 8;
/// Columns are addressed by a single letter, so at most `A..=Z`.
pub const MAX_COLUMNS: usize = 26;
/// Largest row count; keeps row labels to two digits.
pub const MAX_ROWS: usize = 99;
/// Upper bound on rejection-sampling attempts for a single ship.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

pub const NUM_SHIPS: usize = 3;
pub const DEFAULT_FLEET: [ShipDef; NUM_SHIPS] = [
    ShipDef::new("Battleship", 5),
    ShipDef::new("Destroyer", 4),
    ShipDef::new("Destroyer", 4),
];

/// Environment variable holding the row count.
pub const ROWS_ENV: &str = "BROADSIDE_ROWS";
/// Environment variable holding the column count.
pub const COLS_ENV: &str = "BROADSIDE_COLS";

/// Board dimensions. Construct through [`Bounds::new`] so the limits are
/// always honoured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Bounds {
    rows: usize,
    cols: usize,
}

impl Bounds {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows: rows.clamp(MIN_DIMENSION, MAX_ROWS),
            cols: cols.clamp(MIN_DIMENSION, MAX_COLUMNS),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(MIN_DIMENSION, MIN_DIMENSION)
    }
}

/// Settings for one game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub bounds: Bounds,
    pub fleet: &'static [ShipDef],
    pub max_placement_attempts: usize,
}

impl GameConfig {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            bounds: Bounds::new(rows, cols),
            ..Self::default()
        }
    }

    /// Replace the fleet placed at every `initialize`.
    pub fn with_fleet(mut self, fleet: &'static [ShipDef]) -> Self {
        self.fleet = fleet;
        self
    }

    pub fn with_max_placement_attempts(mut self, attempts: usize) -> Self {
        self.max_placement_attempts = attempts;
        self
    }

    /// Read the board size from `BROADSIDE_ROWS` / `BROADSIDE_COLS`.
    /// Missing or non-numeric values fall back to the minimum; the rest are
    /// clamped like [`GameConfig::new`].
    #[cfg(feature = "std")]
    pub fn from_env() -> Self {
        Self::new(env_dimension(ROWS_ENV), env_dimension(COLS_ENV))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            bounds: Bounds::default(),
            fleet: &DEFAULT_FLEET,
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }
}

#[cfg(feature = "std")]
fn env_dimension(key: &str) -> usize {
    parse_dimension(std::env::var(key).ok().as_deref())
}

#[cfg(feature = "std")]
fn parse_dimension(value: Option<&str>) -> usize {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(MIN_DIMENSION)
}
