//! BSP dungeon generation.
//!
//! Pipeline: split the world into a binary tree of regions, carve one room
//! per leaf, then connect sibling subtrees with L-shaped corridors. The
//! result is a [`MapGrid`] holding terrain, per-tile room ownership, and
//! the ordered room list.

use log::{debug, info};
use rand::Rng;

use crate::bsp::BspNode;
use crate::config::{ConfigError, GeneratorConfig};
use crate::constants::ROOM_MARGIN;
use crate::grid::MapGrid;
use crate::rect::Rect;
use crate::rng::{range_or_min, seeded};
use crate::room::{Room, RoomId};

/// Orchestrates one generation run. All state is per-run; reuse means
/// calling [`DungeonGenerator::generate`] again with a fresh random source.
pub struct DungeonGenerator {
    config: GeneratorConfig,
    grid: MapGrid,
}

impl DungeonGenerator {
    /// Run one full generation pass with the given random source.
    ///
    /// Fails before any grid mutation if the configuration is invalid.
    pub fn generate(config: GeneratorConfig, rng: &mut impl Rng) -> Result<MapGrid, ConfigError> {
        config.validate()?;

        let mut gen = Self {
            config,
            grid: MapGrid::new(config.width, config.height),
        };

        let mut root = BspNode::new(Rect::new(0, 0, config.width, config.height), 0);
        root.split(&config, rng);
        debug!("split produced {} leaves", root.leaf_count());

        gen.carve_rooms(&mut root, rng);
        debug!("carved {} rooms", gen.grid.rooms.len());

        gen.connect(&root, rng);
        info!(
            "generated {}x{} dungeon with {} rooms",
            config.width,
            config.height,
            gen.grid.rooms.len()
        );

        Ok(gen.grid)
    }

    /// Seeded convenience wrapper; the same seed yields the same grid.
    pub fn generate_seeded(config: GeneratorConfig, seed: u64) -> Result<MapGrid, ConfigError> {
        Self::generate(config, &mut seeded(seed))
    }

    /// Walk the tree and place a room inside every leaf.
    fn carve_rooms(&mut self, node: &mut BspNode, rng: &mut impl Rng) {
        if node.is_leaf() {
            node.room = Some(self.carve_leaf_room(node.region, rng));
            return;
        }
        if let Some(left) = node.left_mut() {
            self.carve_rooms(left, rng);
        }
        if let Some(right) = node.right_mut() {
            self.carve_rooms(right, rng);
        }
    }

    /// Carve a room into a leaf region and stamp it into the grid.
    fn carve_leaf_room(&mut self, leaf: Rect, rng: &mut impl Rng) -> RoomId {
        let room_width = (leaf.width - ROOM_MARGIN * 2)
            .max(self.config.min_room_size)
            .min(leaf.width);
        let room_height = (leaf.height - ROOM_MARGIN * 2)
            .max(self.config.min_room_size)
            .min(leaf.height);

        // Slack can fall below 2 * margin on near-minimum leaves; the draw
        // then clamps to the margin, capped so the room stays in the leaf.
        let offset_x = range_or_min(rng, ROOM_MARGIN, leaf.width - room_width - ROOM_MARGIN)
            .min(leaf.width - room_width);
        let offset_y = range_or_min(rng, ROOM_MARGIN, leaf.height - room_height - ROOM_MARGIN)
            .min(leaf.height - room_height);

        let bounds = Rect::new(leaf.x + offset_x, leaf.y + offset_y, room_width, room_height);

        let id = self.grid.rooms.len();
        let mut room = Room::new(id, bounds);
        for y in bounds.y..bounds.bottom() {
            for x in bounds.x..bounds.right() {
                self.grid.set_room_floor(x, y, id);
                room.tiles.push((x, y));
            }
        }
        self.grid.rooms.push(room);
        id
    }

    /// Join one room from each child subtree with a corridor, then recurse,
    /// so every internal node contributes exactly one corridor.
    fn connect(&mut self, node: &BspNode, rng: &mut impl Rng) {
        let (Some(left), Some(right)) = (node.left(), node.right()) else {
            return;
        };

        if let (Some(a), Some(b)) = (left.random_room(rng), right.random_room(rng)) {
            self.connect_rooms(a, b, rng);
        }

        self.connect(left, rng);
        self.connect(right, rng);
    }

    /// Connect two rooms with an L-shaped corridor between their centers.
    fn connect_rooms(&mut self, a: RoomId, b: RoomId, rng: &mut impl Rng) {
        let (ax, ay) = self.grid.rooms[a].center();
        let (bx, by) = self.grid.rooms[b].center();

        // Randomly go horizontal-then-vertical or vertical-then-horizontal
        if rng.gen_bool(0.5) {
            self.carve_h_corridor(ax, bx, ay);
            self.carve_v_corridor(ay, by, bx);
        } else {
            self.carve_v_corridor(ay, by, ax);
            self.carve_h_corridor(ax, bx, by);
        }
    }

    /// Horizontal run widened symmetrically; only terrain is written, so a
    /// corridor crossing a room never disturbs its ownership.
    fn carve_h_corridor(&mut self, x1: i32, x2: i32, y: i32) {
        let half = self.config.corridor_width / 2;
        for x in x1.min(x2)..=x1.max(x2) {
            for w in -half..=half {
                self.grid.set_floor(x, y + w);
            }
        }
    }

    fn carve_v_corridor(&mut self, y1: i32, y2: i32, x: i32) {
        let half = self.config.corridor_width / 2;
        for y in y1.min(y2)..=y1.max(y2) {
            for w in -half..=half {
                self.grid.set_floor(x + w, y);
            }
        }
    }
}
