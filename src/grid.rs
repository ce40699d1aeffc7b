use serde::{Deserialize, Serialize};

use crate::room::{Room, RoomId};
use crate::tile::TileType;

/// The finished generation artifact: a terrain array, a parallel
/// room-ownership array, and the ordered list of rooms.
///
/// Reads are bounds-checked and return `None` outside the grid; writes
/// outside the grid are silently dropped (corridor carving clips at the
/// world edges).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapGrid {
    width: i32,
    height: i32,
    terrain: Vec<TileType>,
    room_owner: Vec<Option<RoomId>>,
    /// All generated rooms; index equals [`Room::id`]
    pub rooms: Vec<Room>,
}

impl MapGrid {
    pub(crate) fn new(width: i32, height: i32) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            terrain: vec![TileType::Empty; len],
            room_owner: vec![None; len],
            rooms: Vec::new(),
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn is_in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.is_in_bounds(x, y) {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Terrain kind at a coordinate, or `None` outside the grid.
    pub fn terrain(&self, x: i32, y: i32) -> Option<TileType> {
        self.index(x, y).map(|idx| self.terrain[idx])
    }

    /// Room ownership at a coordinate: `None` outside the grid,
    /// `Some(None)` for unowned tiles (empty space and corridors).
    pub fn room_owner(&self, x: i32, y: i32) -> Option<Option<RoomId>> {
        self.index(x, y).map(|idx| self.room_owner[idx])
    }

    /// Set a tile to floor, leaving its ownership untouched.
    /// Out-of-bounds writes are dropped.
    pub(crate) fn set_floor(&mut self, x: i32, y: i32) {
        if let Some(idx) = self.index(x, y) {
            self.terrain[idx] = TileType::Floor;
        }
    }

    /// Set a tile to floor owned by a room. Out-of-bounds writes are dropped.
    pub(crate) fn set_room_floor(&mut self, x: i32, y: i32, id: RoomId) {
        if let Some(idx) = self.index(x, y) {
            self.terrain[idx] = TileType::Floor;
            self.room_owner[idx] = Some(id);
        }
    }
}
