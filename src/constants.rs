//! Dungeon generation constants.

/// Clearance kept between a room and the edges of its leaf region
pub const ROOM_MARGIN: i32 = 2;
/// Default world width
pub const DEFAULT_WORLD_WIDTH: i32 = 100;
/// Default world height
pub const DEFAULT_WORLD_HEIGHT: i32 = 100;
/// Default minimum room size
pub const DEFAULT_MIN_ROOM_SIZE: i32 = 8;
/// Default maximum BSP split depth
pub const DEFAULT_MAX_SPLIT_DEPTH: u32 = 5;
/// Default corridor width
pub const DEFAULT_CORRIDOR_WIDTH: i32 = 3;
