use serde::{Deserialize, Serialize};

use crate::rect::Rect;

/// Identifier of a room; also its index in [`MapGrid::rooms`](crate::MapGrid).
pub type RoomId = usize;

/// A placed, walkable rectangular area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Sequential id, assigned in creation order
    pub id: RoomId,
    /// Footprint inside the owning leaf's region
    pub bounds: Rect,
    /// Coordinates belonging to the room, in carve order
    pub tiles: Vec<(i32, i32)>,
}

impl Room {
    pub fn new(id: RoomId, bounds: Rect) -> Self {
        Self {
            id,
            bounds,
            tiles: Vec::new(),
        }
    }

    /// Anchor point used for corridor connection.
    pub fn center(&self) -> (i32, i32) {
        self.bounds.center()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_uses_integer_division() {
        let room = Room::new(0, Rect::new(1, 1, 5, 5));
        assert_eq!(room.center(), (3, 3));

        let room2 = Room::new(1, Rect::new(0, 0, 7, 4));
        assert_eq!(room2.center(), (3, 2));
    }
}
