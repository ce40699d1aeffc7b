use serde::{Deserialize, Serialize};

/// Terrain kind of a single world tile.
///
/// Generation only ever writes `Empty` and `Floor`; `Wall` and `Corridor`
/// exist for callers that post-process the finished grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileType {
    Empty,
    Floor,
    Wall,
    Corridor,
}

impl TileType {
    pub fn is_walkable(&self) -> bool {
        matches!(self, TileType::Floor | TileType::Corridor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walkability() {
        assert!(TileType::Floor.is_walkable());
        assert!(TileType::Corridor.is_walkable());
        assert!(!TileType::Empty.is_walkable());
        assert!(!TileType::Wall.is_walkable());
    }
}
