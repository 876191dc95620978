// src/dungeon/src/generator.rs
use log::{debug, warn};
use rand::Rng;

use crate::collision::WallSet;
use crate::constants::{MAP_HEIGHT, MAP_WIDTH, MAX_ROOMS, ROOM_MAX_SIZE, ROOM_MIN_SIZE};
use crate::grid::{Tile, TileGrid};
use crate::room::Room;

/// A generated level layout.
///
/// `rooms` is never empty and is kept in acceptance order: the first room is
/// the spawn room and the last one holds the portal.
#[derive(Clone, Debug)]
pub struct Dungeon {
    grid: TileGrid,
    rooms: Vec<Room>,
}

impl Dungeon {
    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn spawn_room(&self) -> &Room {
        &self.rooms[0]
    }

    pub fn portal_room(&self) -> &Room {
        &self.rooms[self.rooms.len() - 1]
    }

    /// One static box per remaining wall cell.
    pub fn build_walls(&self, tile_size: f32) -> WallSet {
        WallSet::from_grid(&self.grid, tile_size)
    }

    pub fn into_parts(self) -> (TileGrid, Vec<Room>) {
        (self.grid, self.rooms)
    }
}

/// Random room placement plus L-shaped corridor carving.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DungeonGenerator {
    pub width: usize,
    pub height: usize,
    pub room_min: usize,
    pub room_max: usize,
    pub max_rooms: usize,
}

impl Default for DungeonGenerator {
    fn default() -> Self {
        Self {
            width: MAP_WIDTH,
            height: MAP_HEIGHT,
            room_min: ROOM_MIN_SIZE,
            room_max: ROOM_MAX_SIZE,
            max_rooms: MAX_ROOMS,
        }
    }
}

impl DungeonGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `max_rooms` placement attempts and carves the accepted rooms.
    pub fn generate(&self, rng: &mut impl Rng) -> Dungeon {
        let mut grid = TileGrid::filled(self.width, self.height, Tile::Wall);
        let mut rooms: Vec<Room> = Vec::with_capacity(self.max_rooms);

        for _ in 0..self.max_rooms {
            let w = rng.random_range(self.room_min..=self.room_max);
            let h = rng.random_range(self.room_min..=self.room_max);
            // A room needs a one-tile border on both sides.
            if w + 2 > self.width || h + 2 > self.height {
                continue;
            }
            let x = rng.random_range(1..=self.width - w - 1);
            let y = rng.random_range(1..=self.height - h - 1);
            let candidate = Room::new(x, y, w, h);

            if rooms.iter().any(|other| candidate.intersects_padded(other)) {
                continue;
            }

            grid.carve_room(&candidate);
            if let Some(prev) = rooms.last() {
                carve_corridor(&mut grid, prev.center(), candidate.center(), rng.random_bool(0.5));
            }
            rooms.push(candidate);
        }

        if rooms.is_empty() {
            let fallback = self.fallback_room();
            warn!("no room accepted in {} attempts, placing {:?}", self.max_rooms, fallback);
            grid.carve_room(&fallback);
            rooms.push(fallback);
        }

        debug!(
            "generated {}x{} dungeon with {} rooms",
            self.width,
            self.height,
            rooms.len()
        );
        Dungeon { grid, rooms }
    }

    /// Minimal room centred in the map, used when every attempt was rejected.
    fn fallback_room(&self) -> Room {
        let w = self.room_min.min(self.width.saturating_sub(2)).max(1);
        let h = self.room_min.min(self.height.saturating_sub(2)).max(1);
        let x = (self.width.saturating_sub(w) / 2).max(1);
        let y = (self.height.saturating_sub(h) / 2).max(1);
        Room::new(x, y, w, h)
    }
}

/// Connects two room centres with an L-shaped, 2-tile-wide corridor.
fn carve_corridor(
    grid: &mut TileGrid,
    (px, py): (usize, usize),
    (nx, ny): (usize, usize),
    horizontal_first: bool,
) {
    if horizontal_first {
        grid.carve_h_tunnel(px, nx, py);
        grid.carve_v_tunnel(py, ny, nx);
    } else {
        grid.carve_v_tunnel(py, ny, px);
        grid.carve_h_tunnel(px, nx, ny);
    }
}
