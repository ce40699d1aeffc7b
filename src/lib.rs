//! BSP dungeon-layout generator.
//!
//! Partitions a rectangular world into a binary tree of regions, carves a
//! room inside each leaf, and connects rooms with L-shaped corridors. The
//! output is a [`MapGrid`]: a tile-state array, a parallel room-ownership
//! array, and the ordered list of [`Room`]s. Generation is a pure,
//! single-threaded library call; rendering and gameplay placement are the
//! caller's concern.
//!
//! A fixed seed reproduces the same layout:
//!
//! ```
//! use bsp_dungeon::{DungeonGenerator, GeneratorConfig};
//!
//! let config = GeneratorConfig::default();
//! let grid = DungeonGenerator::generate_seeded(config, 1)?;
//! assert!(!grid.rooms.is_empty());
//! assert_eq!(grid, DungeonGenerator::generate_seeded(config, 1)?);
//! # Ok::<(), bsp_dungeon::ConfigError>(())
//! ```

mod bsp;
mod config;
mod constants;
mod dungeon_gen;
mod grid;
mod rect;
mod rng;
mod room;
mod tile;

pub use config::{ConfigError, GeneratorConfig};
pub use constants::ROOM_MARGIN;
pub use dungeon_gen::DungeonGenerator;
pub use grid::MapGrid;
pub use rect::Rect;
pub use rng::seeded;
pub use room::{Room, RoomId};
pub use tile::TileType;
