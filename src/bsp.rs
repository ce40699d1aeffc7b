//! Binary space partitioning of the world rectangle.

use rand::Rng;

use crate::config::GeneratorConfig;
use crate::rect::Rect;
use crate::rng::range_or_min;
use crate::room::RoomId;

/// A node in the BSP tree. Either a leaf (eventually hosts a room) or an
/// internal node with exactly two children whose regions tile this node's
/// region.
pub(crate) struct BspNode {
    /// The region this node covers
    pub region: Rect,
    /// Recursion depth, root = 0
    pub depth: u32,
    /// The room carved in this region (only for leaves)
    pub room: Option<RoomId>,
    /// Left/top child after split
    left: Option<Box<BspNode>>,
    /// Right/bottom child after split
    right: Option<Box<BspNode>>,
}

impl BspNode {
    pub fn new(region: Rect, depth: u32) -> Self {
        Self {
            region,
            depth,
            room: None,
            left: None,
            right: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub fn left(&self) -> Option<&BspNode> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&BspNode> {
        self.right.as_deref()
    }

    pub fn left_mut(&mut self) -> Option<&mut BspNode> {
        self.left.as_deref_mut()
    }

    pub fn right_mut(&mut self) -> Option<&mut BspNode> {
        self.right.as_deref_mut()
    }

    /// Recursively split this node until leaves reach the depth limit or
    /// become too small to split further.
    pub fn split(&mut self, config: &GeneratorConfig, rng: &mut impl Rng) {
        if self.depth >= config.max_split_depth
            || self.region.width < config.min_room_size * 2
            || self.region.height < config.min_room_size * 2
        {
            return;
        }

        // Prefer cutting across the longer axis; near-square regions flip
        // a coin to avoid degenerate elongated trees.
        let mut split_vertical = self.region.width > self.region.height;
        if (self.region.width - self.region.height).abs() < config.min_room_size {
            split_vertical = rng.gen_bool(0.5);
        }

        let (first, second) = if split_vertical {
            // Keep at least min_room_size on both sides of the cut
            let split_x = range_or_min(
                rng,
                self.region.x + config.min_room_size,
                self.region.right() - config.min_room_size,
            );
            (
                Rect::new(
                    self.region.x,
                    self.region.y,
                    split_x - self.region.x,
                    self.region.height,
                ),
                Rect::new(
                    split_x,
                    self.region.y,
                    self.region.right() - split_x,
                    self.region.height,
                ),
            )
        } else {
            let split_y = range_or_min(
                rng,
                self.region.y + config.min_room_size,
                self.region.bottom() - config.min_room_size,
            );
            (
                Rect::new(
                    self.region.x,
                    self.region.y,
                    self.region.width,
                    split_y - self.region.y,
                ),
                Rect::new(
                    self.region.x,
                    split_y,
                    self.region.width,
                    self.region.bottom() - split_y,
                ),
            )
        };

        self.left = Some(Box::new(BspNode::new(first, self.depth + 1)));
        self.right = Some(Box::new(BspNode::new(second, self.depth + 1)));

        if let Some(ref mut left) = self.left {
            left.split(config, rng);
        }
        if let Some(ref mut right) = self.right {
            right.split(config, rng);
        }
    }

    /// Pick the room of a random descendant leaf by walking down the
    /// subtree, choosing a child uniformly at each internal node.
    pub fn random_room(&self, rng: &mut impl Rng) -> Option<RoomId> {
        match (self.left.as_deref(), self.right.as_deref()) {
            (Some(left), Some(right)) => {
                if rng.gen_bool(0.5) {
                    left.random_room(rng)
                } else {
                    right.random_room(rng)
                }
            }
            _ => self.room,
        }
    }

    pub fn leaf_count(&self) -> usize {
        match (self.left.as_deref(), self.right.as_deref()) {
            (Some(left), Some(right)) => left.leaf_count() + right.leaf_count(),
            _ => 1,
        }
    }

    /// Collect all leaves in this subtree.
    #[cfg(test)]
    pub fn leaves<'a>(&'a self, out: &mut Vec<&'a BspNode>) {
        if self.is_leaf() {
            out.push(self);
            return;
        }
        if let Some(ref left) = self.left {
            left.leaves(out);
        }
        if let Some(ref right) = self.right {
            right.leaves(out);
        }
    }
}
