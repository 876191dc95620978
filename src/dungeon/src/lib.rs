//src/dungeon/src/lib.rs
//! Procedural dungeon layout and the static wall geometry built from it.
//!
//! The generator carves rooms and L-shaped corridors into a [`TileGrid`];
//! [`WallSet`] turns the remaining wall cells into one box per tile so that
//! moving bodies can be resolved against them one axis at a time.

pub mod collision;
pub mod generator;
pub mod geometry;
pub mod grid;
pub mod room;
pub mod theme;

pub use crate::collision::{Axis, Collidable, WallSet, move_and_collide, resolve_axis};
pub use crate::generator::{Dungeon, DungeonGenerator};
pub use crate::geometry::Rect;
pub use crate::grid::{Tile, TileGrid};
pub use crate::room::Room;
pub use crate::theme::{THEMES, Theme};

/// Layout constants shared by the generator and the simulation.
pub mod constants {
    /// Edge length of one tile in world pixels.
    pub const TILE_SIZE: f32 = 48.0;
    /// Map width in tiles.
    pub const MAP_WIDTH: usize = 50;
    /// Map height in tiles.
    pub const MAP_HEIGHT: usize = 50;
    pub const ROOM_MIN_SIZE: usize = 6;
    pub const ROOM_MAX_SIZE: usize = 15;
    /// Placement attempts per generation run (not a room count).
    pub const MAX_ROOMS: usize = 20;
}
