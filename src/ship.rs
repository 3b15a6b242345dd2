//! Ship definitions, placed ships and the ship registry.

use alloc::vec::Vec;

use crate::coord::Coordinate;

/// Identifier of a placed ship. Assigned sequentially from 1.
pub type ShipId = usize;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The `size` contiguous cells starting at `origin`, in placement order.
    pub fn cells(self, origin: Coordinate, size: usize) -> impl Iterator<Item = Coordinate> {
        (0..size).map(move |i| match self {
            Orientation::Horizontal => Coordinate::new(origin.row, origin.col + i),
            Orientation::Vertical => Coordinate::new(origin.row + i, origin.col),
        })
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipDef {
    name: &'static str,
    size: usize,
}

impl ShipDef {
    pub const fn new(name: &'static str, size: usize) -> Self {
        Self { name, size }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

/// A ship placed on the board. Only `sunk` changes after placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    id: ShipId,
    def: ShipDef,
    positions: Vec<Coordinate>,
    sunk: bool,
}

impl Ship {
    pub(crate) fn new(id: ShipId, def: ShipDef, positions: Vec<Coordinate>) -> Self {
        Self {
            id,
            def,
            positions,
            sunk: false,
        }
    }

    pub fn id(&self) -> ShipId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.def.name()
    }

    pub fn size(&self) -> usize {
        self.def.size()
    }

    pub fn positions(&self) -> &[Coordinate] {
        &self.positions
    }

    pub fn is_sunk(&self) -> bool {
        self.sunk
    }

    /// Flip to sunk. Returns `false` if the ship was already sunk.
    pub(crate) fn mark_sunk(&mut self) -> bool {
        !core::mem::replace(&mut self.sunk, true)
    }

    /// Spoiler-free summary for display.
    pub fn view(&self) -> ShipView {
        ShipView {
            id: self.id,
            name: self.name(),
            size: self.size(),
            sunk: self.sunk,
        }
    }
}

/// What a view layer may know about a ship: everything except where it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShipView {
    pub id: ShipId,
    pub name: &'static str,
    pub size: usize,
    pub sunk: bool,
}

/// Ordered registry of the ships placed this game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fleet {
    ships: Vec<Ship>,
}

impl Fleet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Id the next appended ship will receive.
    pub fn next_id(&self) -> ShipId {
        self.ships.len() + 1
    }

    pub(crate) fn push(&mut self, ship: Ship) {
        debug_assert_eq!(ship.id(), self.next_id());
        self.ships.push(ship);
    }

    pub fn get(&self, id: ShipId) -> Option<&Ship> {
        self.ships.iter().find(|s| s.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: ShipId) -> Option<&mut Ship> {
        self.ships.iter_mut().find(|s| s.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter()
    }

    pub fn views(&self) -> impl Iterator<Item = ShipView> + '_ {
        self.ships.iter().map(Ship::view)
    }

    /// Returns `true` when all ships are sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    pub fn remaining(&self) -> usize {
        self.ships.iter().filter(|s| !s.sunk).count()
    }
}
