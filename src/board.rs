//! Board model: a `rows × cols` grid of cells stored in row-major order.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::common::BoardError;
use crate::config::Bounds;
use crate::coord::Coordinate;
use crate::ship::{Fleet, Orientation, Ship, ShipDef, ShipId};

/// One grid position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    ship_id: Option<ShipId>,
    hit: bool,
    miss: bool,
    sunk: bool,
}

impl Cell {
    pub fn ship_id(&self) -> Option<ShipId> {
        self.ship_id
    }

    pub fn is_occupied(&self) -> bool {
        self.ship_id.is_some()
    }

    pub fn is_hit(&self) -> bool {
        self.hit
    }

    pub fn is_miss(&self) -> bool {
        self.miss
    }

    pub fn is_sunk(&self) -> bool {
        self.sunk
    }

    /// Whether a shot has already resolved this cell.
    pub fn is_fired(&self) -> bool {
        self.hit || self.miss
    }

    pub(crate) fn mark_hit(&mut self) {
        debug_assert!(!self.is_fired());
        self.hit = true;
    }

    pub(crate) fn mark_miss(&mut self) {
        debug_assert!(!self.is_fired());
        self.miss = true;
    }

    pub(crate) fn mark_sunk(&mut self) {
        debug_assert!(self.hit);
        self.sunk = true;
    }
}

/// Grid of cells. Dimensions are fixed once created.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    bounds: Bounds,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board (no ships placed).
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            cells: vec![Cell::default(); bounds.rows() * bounds.cols()],
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn rows(&self) -> usize {
        self.bounds.rows()
    }

    pub fn cols(&self) -> usize {
        self.bounds.cols()
    }

    /// Bottom-right coordinate, used in player-facing messages.
    pub fn max_coordinate(&self) -> Coordinate {
        Coordinate::max_for(self.bounds)
    }

    pub fn get(&self, at: Coordinate) -> Option<&Cell> {
        let i = self.index(at)?;
        Some(&self.cells[i])
    }

    pub(crate) fn get_mut(&mut self, at: Coordinate) -> Option<&mut Cell> {
        let i = self.index(at)?;
        Some(&mut self.cells[i])
    }

    /// Rows of cells, top to bottom.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.bounds.cols())
    }

    /// `true` when every coordinate is on the board and unoccupied.
    pub fn is_free<I>(&self, cells: I) -> bool
    where
        I: IntoIterator<Item = Coordinate>,
    {
        cells
            .into_iter()
            .all(|c| self.get(c).is_some_and(|cell| !cell.is_occupied()))
    }

    /// Place `def` at `origin` with `orientation`, appending it to `fleet`.
    /// Rejects out-of-bounds and overlapping placements.
    pub fn place(
        &mut self,
        fleet: &mut Fleet,
        def: ShipDef,
        origin: Coordinate,
        orientation: Orientation,
    ) -> Result<ShipId, BoardError> {
        if def.size() == 0 {
            return Err(BoardError::InvalidShipSize);
        }
        if !self.fits(origin, orientation, def.size()) {
            return Err(BoardError::ShipOutOfBounds);
        }
        let positions: Vec<Coordinate> = orientation.cells(origin, def.size()).collect();
        if !self.is_free(positions.iter().copied()) {
            return Err(BoardError::ShipOverlaps);
        }
        Ok(self.commit(fleet, def, positions))
    }

    /// Whether a ship of `size` starting at `origin` stays on the board.
    pub fn fits(&self, origin: Coordinate, orientation: Orientation, size: usize) -> bool {
        let Some(last) = size.checked_sub(1) else {
            return false;
        };
        let end = match orientation {
            Orientation::Horizontal => origin.col.checked_add(last).map(|c| Coordinate::new(origin.row, c)),
            Orientation::Vertical => origin.row.checked_add(last).map(|r| Coordinate::new(r, origin.col)),
        };
        self.bounds.contains(origin.row, origin.col)
            && end.is_some_and(|e| self.bounds.contains(e.row, e.col))
    }

    /// Mark pre-validated `positions` as belonging to a new ship.
    pub(crate) fn commit(&mut self, fleet: &mut Fleet, def: ShipDef, positions: Vec<Coordinate>) -> ShipId {
        let id = fleet.next_id();
        for &at in &positions {
            if let Some(cell) = self.get_mut(at) {
                cell.ship_id = Some(id);
            }
        }
        fleet.push(Ship::new(id, def, positions));
        id
    }

    fn index(&self, at: Coordinate) -> Option<usize> {
        self.bounds
            .contains(at.row, at.col)
            .then(|| at.row * self.bounds.cols() + at.col)
    }

    #[cfg(test)]
    pub(crate) fn set_ship_id(&mut self, at: Coordinate, id: Option<ShipId>) {
        if let Some(cell) = self.get_mut(at) {
            cell.ship_id = id;
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {}x{} {{", self.rows(), self.cols())?;
        for row in self.rows_iter() {
            write!(f, "  ")?;
            for cell in row {
                let ch = match (cell.ship_id, cell.hit, cell.miss, cell.sunk) {
                    (_, _, _, true) => '#',
                    (_, true, _, _) => 'X',
                    (_, _, true, _) => 'o',
                    (Some(_), _, _, _) => 'S',
                    _ => '.',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}
