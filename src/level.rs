// src/level.rs
use combat::{Enemy, Projectile};
use dungeon::{Collidable, Dungeon, Rect, Room, TileGrid, WallSet};
use glam::Vec2;

use crate::constants::PORTAL_SIZE;

/// Exit marker; touching it moves the run to the next level.
#[derive(Clone, Debug, PartialEq)]
pub struct Portal {
    body: Rect,
}

impl Portal {
    pub fn new(center: Vec2) -> Self {
        Self {
            body: Rect::from_center(center, Vec2::splat(PORTAL_SIZE)),
        }
    }
}

impl Collidable for Portal {
    fn body(&self) -> &Rect {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Rect {
        &mut self.body
    }
}

/// Everything that lives and dies with one level. Replacing the level
/// drops all of it at once.
#[derive(Clone, Debug)]
pub struct Level {
    pub grid: TileGrid,
    pub walls: WallSet,
    /// Acceptance order: `rooms[0]` is the spawn room.
    pub rooms: Vec<Room>,
    pub enemies: Vec<Enemy>,
    pub player_shots: Vec<Projectile>,
    pub enemy_shots: Vec<Projectile>,
    pub portal: Option<Portal>,
    tile_size: f32,
}

impl Level {
    /// Level for a generated dungeon, portal in the last room.
    pub fn from_dungeon(dungeon: Dungeon, tile_size: f32) -> Self {
        let walls = dungeon.build_walls(tile_size);
        let portal = Portal::new(tile_point(dungeon.portal_room().center(), tile_size));
        let (grid, rooms) = dungeon.into_parts();
        Self {
            grid,
            walls,
            rooms,
            enemies: Vec::new(),
            player_shots: Vec::new(),
            enemy_shots: Vec::new(),
            portal: Some(portal),
            tile_size,
        }
    }

    /// Closed box of `width` x `height` tiles with no rooms and no portal.
    pub fn arena(width: usize, height: usize, tile_size: f32) -> Self {
        let grid = TileGrid::walled_box(width, height);
        let walls = WallSet::from_grid(&grid, tile_size);
        Self {
            grid,
            walls,
            rooms: Vec::new(),
            enemies: Vec::new(),
            player_shots: Vec::new(),
            enemy_shots: Vec::new(),
            portal: None,
            tile_size,
        }
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// Size of the grid in pixels; bodies are kept inside it.
    pub fn pixel_size(&self) -> Vec2 {
        Vec2::new(
            self.grid.width() as f32 * self.tile_size,
            self.grid.height() as f32 * self.tile_size,
        )
    }

    /// Player start: the spawn room's centre tile, if the level has rooms.
    pub fn spawn_point(&self) -> Option<Vec2> {
        self.rooms
            .first()
            .map(|room| tile_point(room.center(), self.tile_size))
    }
}

/// World position of a tile coordinate (the tile's top-left corner).
pub fn tile_point((x, y): (usize, usize), tile_size: f32) -> Vec2 {
    Vec2::new(x as f32 * tile_size, y as f32 * tile_size)
}
