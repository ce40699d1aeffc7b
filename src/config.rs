use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;

/// Parameters for one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// World width in tiles
    pub width: i32,
    /// World height in tiles
    pub height: i32,
    /// Minimum room size; also the floor kept on each side of a split
    pub min_room_size: i32,
    /// Maximum BSP recursion depth (root is depth 0)
    pub max_split_depth: u32,
    /// Corridor width in tiles (odd widths center on the corridor line)
    pub corridor_width: i32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WORLD_WIDTH,
            height: DEFAULT_WORLD_HEIGHT,
            min_room_size: DEFAULT_MIN_ROOM_SIZE,
            max_split_depth: DEFAULT_MAX_SPLIT_DEPTH,
            corridor_width: DEFAULT_CORRIDOR_WIDTH,
        }
    }
}

/// Rejected configurations, reported before any grid mutation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("world dimensions must be positive, got {width}x{height}")]
    NonPositiveDimensions { width: i32, height: i32 },

    #[error("min_room_size must be at least 1, got {0}")]
    MinRoomSizeTooSmall(i32),

    #[error(
        "a {min_room_size}-tile room with {margin}-tile margins cannot fit a {width}x{height} world"
    )]
    RoomDoesNotFit {
        min_room_size: i32,
        margin: i32,
        width: i32,
        height: i32,
    },

    #[error("corridor_width must be at least 1, got {0}")]
    CorridorWidthTooSmall(i32),

    #[error("corridor_width {corridor_width} must be narrower than the {width}x{height} world")]
    CorridorTooWide {
        corridor_width: i32,
        width: i32,
        height: i32,
    },
}

impl GeneratorConfig {
    /// Check the configuration before generation starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ConfigError::NonPositiveDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.min_room_size < 1 {
            return Err(ConfigError::MinRoomSizeTooSmall(self.min_room_size));
        }
        if self.min_room_size + ROOM_MARGIN * 2 > self.width.min(self.height) {
            return Err(ConfigError::RoomDoesNotFit {
                min_room_size: self.min_room_size,
                margin: ROOM_MARGIN,
                width: self.width,
                height: self.height,
            });
        }
        if self.corridor_width < 1 {
            return Err(ConfigError::CorridorWidthTooSmall(self.corridor_width));
        }
        if self.corridor_width >= self.width.min(self.height) {
            return Err(ConfigError::CorridorTooWide {
                corridor_width: self.corridor_width,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}
