//! Random ship placement by rejection sampling.

use alloc::vec::Vec;
use log::{debug, warn};
use rand::Rng;

use crate::board::Board;
use crate::common::BoardError;
use crate::coord::Coordinate;
use crate::ship::{Fleet, Orientation, ShipDef, ShipId};

/// Place one ship of `def` at a random free spot and append it to `fleet`.
///
/// Each attempt picks an orientation, then an anchor drawn only from the
/// range where the ship fits inside the board. Attempts that overlap an
/// existing ship are discarded. Gives up with
/// [`BoardError::PlacementExhausted`] after `max_attempts`.
pub fn place_randomly<R: Rng>(
    rng: &mut R,
    def: ShipDef,
    board: &mut Board,
    fleet: &mut Fleet,
    max_attempts: usize,
) -> Result<ShipId, BoardError> {
    if def.size() == 0 {
        return Err(BoardError::InvalidShipSize);
    }
    if def.size() > board.rows() && def.size() > board.cols() {
        return Err(BoardError::ShipOutOfBounds);
    }

    for attempt in 1..=max_attempts {
        let Some((origin, orient)) = random_anchor(rng, def.size(), board) else {
            continue;
        };
        let positions: Vec<Coordinate> = orient.cells(origin, def.size()).collect();
        if board.is_free(positions.iter().copied()) {
            let id = board.commit(fleet, def, positions);
            debug!(
                "placed {} #{} at {} {:?} after {} attempt(s)",
                def.name(),
                id,
                origin,
                orient,
                attempt
            );
            return Ok(id);
        }
    }

    warn!("gave up placing {} after {} attempts", def.name(), max_attempts);
    Err(BoardError::PlacementExhausted {
        ship: def.name(),
        attempts: max_attempts,
    })
}

/// Sample an orientation and an in-bounds anchor. `None` when the ship is
/// longer than the board edge in the sampled orientation.
fn random_anchor<R: Rng>(
    rng: &mut R,
    size: usize,
    board: &Board,
) -> Option<(Coordinate, Orientation)> {
    let orient = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    let (max_r, max_c) = match orient {
        Orientation::Horizontal => (board.rows() - 1, board.cols().checked_sub(size)?),
        Orientation::Vertical => (board.rows().checked_sub(size)?, board.cols() - 1),
    };
    let r = rng.random_range(0..=max_r);
    let c = rng.random_range(0..=max_c);
    Some((Coordinate::new(r, c), orient))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Bounds, DEFAULT_FLEET, MAX_PLACEMENT_ATTEMPTS};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn places_default_fleet_without_overlap() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut board = Board::new(Bounds::default());
        let mut fleet = Fleet::new();
        for def in DEFAULT_FLEET {
            place_randomly(&mut rng, def, &mut board, &mut fleet, MAX_PLACEMENT_ATTEMPTS).unwrap();
        }
        assert_eq!(fleet.len(), 3);
        let occupied = board.rows_iter().flatten().filter(|c| c.is_occupied()).count();
        assert_eq!(occupied, 5 + 4 + 4, "all ships should be placed without overlap");
        for ship in fleet.iter() {
            for &p in ship.positions() {
                assert_eq!(board.get(p).unwrap().ship_id(), Some(ship.id()));
            }
        }
    }

    #[test]
    fn positions_are_contiguous() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut board = Board::new(Bounds::new(10, 10));
        let mut fleet = Fleet::new();
        place_randomly(&mut rng, ShipDef::new("Carrier", 5), &mut board, &mut fleet, 10).unwrap();
        let ship = fleet.get(1).unwrap();
        let p = ship.positions();
        let horizontal = p.windows(2).all(|w| w[0].row == w[1].row && w[1].col == w[0].col + 1);
        let vertical = p.windows(2).all(|w| w[0].col == w[1].col && w[1].row == w[0].row + 1);
        assert!(horizontal || vertical);
    }

    #[test]
    fn ship_fitting_one_axis_only_uses_that_axis() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut board = Board::new(Bounds::new(12, 8));
        let mut fleet = Fleet::new();
        place_randomly(&mut rng, ShipDef::new("Long", 11), &mut board, &mut fleet, 1000).unwrap();
        let p = fleet.get(1).unwrap().positions();
        assert!(p.iter().all(|c| c.col == p[0].col));
    }

    #[test]
    fn oversized_ship_is_rejected() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut board = Board::new(Bounds::default());
        let mut fleet = Fleet::new();
        let err = place_randomly(&mut rng, ShipDef::new("Huge", 9), &mut board, &mut fleet, 10)
            .unwrap_err();
        assert_eq!(err, BoardError::ShipOutOfBounds);
    }

    #[test]
    fn exhausted_when_board_is_full() {
        let mut rng = SmallRng::seed_from_u64(9);
        let mut board = Board::new(Bounds::default());
        let mut fleet = Fleet::new();
        let row = ShipDef::new("Row", 8);
        for r in 0..8 {
            board
                .place(&mut fleet, row, Coordinate::new(r, 0), Orientation::Horizontal)
                .unwrap();
        }
        let err = place_randomly(&mut rng, ShipDef::new("Extra", 2), &mut board, &mut fleet, 50)
            .unwrap_err();
        assert_eq!(
            err,
            BoardError::PlacementExhausted { ship: "Extra", attempts: 50 }
        );
        assert_eq!(fleet.len(), 8);
    }
}
