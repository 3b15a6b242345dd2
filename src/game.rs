use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::{
    board::Board,
    common::{BoardError, ShotError},
    config::GameConfig,
    feedback::{FeedbackLog, FeedbackMessage},
    placement::place_randomly,
    ship::{Fleet, ShipView},
    shot::{resolve_shot, Shot},
    state::{GameState, GameView, LastShot},
};

/// Single-player game controller: owns the state for one game at a time and
/// is its only mutator.
pub struct GameSession {
    config: GameConfig,
    rng: SmallRng,
    state: GameState,
}

impl GameSession {
    /// Start a game seeded from the thread RNG.
    #[cfg(feature = "std")]
    pub fn new(config: GameConfig) -> Result<Self, BoardError> {
        let mut seed_rng = rand::rng();
        Self::with_rng(config, SmallRng::from_rng(&mut seed_rng))
    }

    /// Start a game whose placements are reproducible from `seed`.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, BoardError> {
        Self::with_rng(config, SmallRng::seed_from_u64(seed))
    }

    pub fn with_rng(config: GameConfig, rng: SmallRng) -> Result<Self, BoardError> {
        let state = GameState::new(config.bounds);
        let mut session = Self { config, rng, state };
        session.initialize()?;
        Ok(session)
    }

    /// Start a game with ships laid out by `place` instead of at random.
    /// Later calls to [`initialize`](Self::initialize) go back to random
    /// placement.
    pub fn with_layout<F>(config: GameConfig, seed: u64, place: F) -> Result<Self, BoardError>
    where
        F: FnOnce(&mut Board, &mut Fleet) -> Result<(), BoardError>,
    {
        let mut state = GameState::new(config.bounds);
        {
            let (board, fleet) = state.layout_mut();
            place(board, fleet)?;
        }
        let max = state.board.max_coordinate();
        state.emit(FeedbackMessage::game_started(max));
        Ok(Self {
            config,
            rng: SmallRng::seed_from_u64(seed),
            state,
        })
    }

    /// Replace the board, fleet and feedback with a fresh game and place the
    /// configured fleet. On error the previous game is left as it was.
    pub fn initialize(&mut self) -> Result<(), BoardError> {
        let mut state = GameState::new(self.config.bounds);
        {
            let (board, fleet) = state.layout_mut();
            for &def in self.config.fleet {
                place_randomly(
                    &mut self.rng,
                    def,
                    board,
                    fleet,
                    self.config.max_placement_attempts,
                )?;
            }
        }
        let max = state.board.max_coordinate();
        state.emit(FeedbackMessage::game_started(max));
        info!(
            "new game on {}x{} board with {} ships",
            state.board.rows(),
            state.board.cols(),
            state.fleet.len()
        );
        self.state = state;
        Ok(())
    }

    /// Fire at the coordinate named by `input`. Rejections are also reported
    /// in the feedback log.
    pub fn fire(&mut self, input: &str) -> Result<Shot, ShotError> {
        resolve_shot(&mut self.state, input)
    }

    pub fn clear_last_shot(&mut self) {
        self.state.last_shot = None;
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Full game state, ship positions included. Meant for tests and
    /// tooling; a view layer should read [`view`](Self::view) and
    /// [`ships`](Self::ships) instead.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The board with occupancy visible through [`Cell::ship_id`]. Same
    /// caveat as [`state`](Self::state).
    ///
    /// [`Cell::ship_id`]: crate::Cell::ship_id
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Ships without their positions.
    pub fn ships(&self) -> impl Iterator<Item = ShipView> + '_ {
        self.state.fleet().views()
    }

    pub fn feedback(&self) -> &FeedbackLog {
        self.state.feedback()
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    pub fn last_shot(&self) -> Option<LastShot> {
        self.state.last_shot()
    }

    /// Spoiler-free read model for a view layer: only fired cells are
    /// distinguishable.
    pub fn view(&self) -> GameView {
        self.state.view()
    }
}
