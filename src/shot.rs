//! Shot resolution: validate input, update cell and ship state, detect sinks
//! and the win, and report every step through the feedback log.

use log::{info, warn};

use crate::common::ShotError;
use crate::coord::{normalize, Coordinate};
use crate::feedback::FeedbackMessage;
use crate::state::{GameState, LastShot, ShotMark};

/// Result of a shot that changed the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    Miss,
    /// Hit a ship that still has unhit cells.
    Hit,
    /// Hit sank a ship, carrying its name.
    Sink(&'static str),
    /// Hit sank the last ship afloat.
    Win(&'static str),
}

/// A resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shot {
    pub at: Coordinate,
    pub result: ShotResult,
}

/// Resolve one shot at raw `input`.
///
/// Checks run in order and stop at the first that applies: game already
/// over, malformed coordinate, cell already fired at. Rejections leave the
/// state untouched apart from the feedback entry.
pub fn resolve_shot(state: &mut GameState, input: &str) -> Result<Shot, ShotError> {
    if state.game_over {
        state.emit(FeedbackMessage::game_over());
        return Err(ShotError::GameAlreadyOver);
    }

    let at = match Coordinate::parse(input, state.board.bounds()) {
        Ok(at) => at,
        Err(e) => {
            state.emit(FeedbackMessage::out_of_bounds(state.board.max_coordinate()));
            return Err(e.into());
        }
    };
    let label = normalize(input);

    let Some(cell) = state.board.get_mut(at) else {
        state.emit(FeedbackMessage::out_of_bounds(state.board.max_coordinate()));
        return Err(ShotError::InvalidFormat);
    };
    if cell.is_fired() {
        state.emit(FeedbackMessage::already_fired());
        return Err(ShotError::AlreadyFired);
    }

    let Some(ship_id) = cell.ship_id() else {
        cell.mark_miss();
        state.last_shot = Some(LastShot {
            at,
            result: ShotMark::Miss,
        });
        state.emit(FeedbackMessage::ship_miss(&label));
        return Ok(Shot {
            at,
            result: ShotResult::Miss,
        });
    };

    cell.mark_hit();
    state.last_shot = Some(LastShot {
        at,
        result: ShotMark::Hit,
    });
    state.emit(FeedbackMessage::ship_hit(&label));

    let hit = Shot {
        at,
        result: ShotResult::Hit,
    };
    let Some(ship) = state.fleet.get_mut(ship_id) else {
        warn!("cell {} references unknown ship #{}", at, ship_id);
        return Ok(hit);
    };
    let board = &mut state.board;
    let afloat = ship
        .positions()
        .iter()
        .any(|&p| !board.get(p).is_some_and(|c| c.is_hit()));
    if afloat || !ship.mark_sunk() {
        return Ok(hit);
    }

    let name = ship.name();
    for &p in ship.positions() {
        if let Some(c) = board.get_mut(p) {
            c.mark_sunk();
        }
    }
    info!("{} #{} sunk at {}", name, ship_id, at);
    state.emit(FeedbackMessage::ship_sunk(name));

    if !state.fleet.all_sunk() {
        return Ok(Shot {
            at,
            result: ShotResult::Sink(name),
        });
    }
    state.emit(FeedbackMessage::all_ships_sunk());
    state.game_over = true;
    info!("all ships sunk, game over");
    Ok(Shot {
        at,
        result: ShotResult::Win(name),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Bounds;
    use crate::feedback::MessageKind;
    use crate::ship::{Orientation, ShipDef};

    fn state_with_ship() -> GameState {
        let mut state = GameState::new(Bounds::default());
        let (board, fleet) = state.layout_mut();
        board
            .place(fleet, ShipDef::new("Patrol", 2), Coordinate::new(0, 0), Orientation::Horizontal)
            .unwrap();
        state
    }

    #[test]
    fn miss_records_last_shot() {
        let mut state = state_with_ship();
        let shot = resolve_shot(&mut state, "c3").unwrap();
        assert_eq!(shot.result, ShotResult::Miss);
        assert!(state.board().get(Coordinate::new(2, 2)).unwrap().is_miss());
        assert_eq!(
            state.last_shot(),
            Some(LastShot { at: Coordinate::new(2, 2), result: ShotMark::Miss })
        );
        assert_eq!(state.feedback().latest().unwrap().text, "C3 was a miss... Try again!");
    }

    #[test]
    fn sinking_only_ship_wins() {
        let mut state = state_with_ship();
        assert_eq!(resolve_shot(&mut state, "A1").unwrap().result, ShotResult::Hit);
        assert_eq!(resolve_shot(&mut state, "B1").unwrap().result, ShotResult::Win("Patrol"));
        assert!(state.is_game_over());
        let kinds: alloc::vec::Vec<_> = state.feedback().iter().map(|m| m.kind).collect();
        assert_eq!(
            kinds,
            [
                MessageKind::AllShipsSunk,
                MessageKind::ShipSunk,
                MessageKind::ShipHit,
                MessageKind::ShipHit,
            ]
        );
        assert!(state.board().get(Coordinate::new(0, 0)).unwrap().is_sunk());
    }

    #[test]
    fn unknown_ship_still_records_hit() {
        let mut state = GameState::new(Bounds::default());
        state.board.set_ship_id(Coordinate::new(4, 4), Some(99));
        let shot = resolve_shot(&mut state, "E5").unwrap();
        assert_eq!(shot.result, ShotResult::Hit);
        let cell = state.board().get(Coordinate::new(4, 4)).unwrap();
        assert!(cell.is_hit());
        assert!(!cell.is_sunk());
        assert!(!state.is_game_over());
        assert_eq!(state.feedback().len(), 1);
    }

    #[test]
    fn game_over_short_circuits_invalid_input() {
        let mut state = state_with_ship();
        state.game_over = true;
        assert_eq!(resolve_shot(&mut state, "nonsense"), Err(ShotError::GameAlreadyOver));
        assert_eq!(state.feedback().latest().unwrap().kind, MessageKind::GameOver);
    }
}
