// src/spawner.rs
use combat::{Enemy, EnemyKind};
use dungeon::Room;
use glam::Vec2;
use log::debug;
use rand::Rng;

use crate::constants::{ENEMY_SPAWN_RATE, HIDDEN_SPAWN_RADIUS, SAFE_SPAWN_RADIUS, SPAWN_RETRIES};
use crate::level::tile_point;

const EARLY_WEIGHTS: &[(EnemyKind, f32)] = &[(EnemyKind::Ranged, 0.2), (EnemyKind::Melee, 0.8)];
const MIDDLE_WEIGHTS: &[(EnemyKind, f32)] = &[
    (EnemyKind::Dasher, 0.2),
    (EnemyKind::Ranged, 0.2),
    (EnemyKind::Melee, 0.6),
];
const LATE_WEIGHTS: &[(EnemyKind, f32)] = &[
    (EnemyKind::Bomber, 0.2),
    (EnemyKind::Dasher, 0.2),
    (EnemyKind::Ranged, 0.2),
    (EnemyKind::Melee, 0.4),
];

/// Enemy type weights for a level. Later tiers only ever add kinds.
pub fn type_weights(level: u32) -> &'static [(EnemyKind, f32)] {
    match level {
        0..=2 => EARLY_WEIGHTS,
        3..=4 => MIDDLE_WEIGHTS,
        _ => LATE_WEIGHTS,
    }
}

/// Weighted draw from [`type_weights`].
pub fn pick_kind(level: u32, rng: &mut impl Rng) -> EnemyKind {
    let roll: f32 = rng.random();
    let mut acc = 0.0;
    for &(kind, weight) in type_weights(level) {
        acc += weight;
        if roll < acc {
            return kind;
        }
    }
    EnemyKind::Melee
}

/// Random spawn point strictly inside a room, in world pixels.
fn room_point(room: &Room, tile_size: f32, rng: &mut impl Rng) -> Vec2 {
    tile_point(room.random_interior_tile(rng), tile_size)
}

/// Places enemies at level start and keeps them coming afterwards.
#[derive(Clone, Debug, Default)]
pub struct EnemySpawner {
    timer: u32,
}

impl EnemySpawner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.timer = 0;
    }

    pub fn timer(&self) -> u32 {
        self.timer
    }

    /// Frames between continuous spawns at `difficulty`.
    pub fn interval(difficulty: f32) -> f32 {
        ENEMY_SPAWN_RATE as f32 / difficulty
    }

    /// Initial population: `1..=2 + level / 2` attempts for every room but
    /// the spawn room. Attempts landing within the safe radius of the player
    /// are skipped, not retried.
    pub fn populate(
        &self,
        rooms: &[Room],
        level: u32,
        difficulty: f32,
        player: Vec2,
        tile_size: f32,
        rng: &mut impl Rng,
    ) -> Vec<Enemy> {
        let mut enemies = Vec::new();
        for room in rooms.iter().skip(1) {
            let attempts = rng.random_range(1..=2 + level / 2);
            for _ in 0..attempts {
                let point = room_point(room, tile_size, rng);
                if point.distance(player) < SAFE_SPAWN_RADIUS {
                    continue;
                }
                enemies.push(Enemy::new(pick_kind(level, rng), point, difficulty));
            }
        }
        debug!("populated level {level} with {} enemies", enemies.len());
        enemies
    }

    /// Advances the spawn timer by one frame.
    ///
    /// When the interval elapses, tries a few random room points far enough
    /// from the player to be out of sight; gives up quietly if none is.
    pub fn tick(
        &mut self,
        rooms: &[Room],
        level: u32,
        difficulty: f32,
        player: Vec2,
        tile_size: f32,
        rng: &mut impl Rng,
    ) -> Option<Enemy> {
        self.timer += 1;
        if (self.timer as f32) < Self::interval(difficulty) {
            return None;
        }
        self.timer = 0;
        if rooms.is_empty() {
            return None;
        }

        for _ in 0..SPAWN_RETRIES {
            let room = &rooms[rng.random_range(0..rooms.len())];
            let point = room_point(room, tile_size, rng);
            if point.distance(player) > HIDDEN_SPAWN_RADIUS {
                let kind = pick_kind(level, rng);
                debug!("spawned {kind} at {point}");
                return Some(Enemy::new(kind, point, difficulty));
            }
        }
        None
    }
}
