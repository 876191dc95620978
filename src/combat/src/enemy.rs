// src/combat/src/enemy.rs

use dungeon::{Collidable, Rect, WallSet};
use glam::Vec2;
use strum::{Display, EnumIter};

use crate::combatant::Combatant;
use crate::constants::{ENEMY_SIZE, RANGED_ATTACK_RANGE, RANGED_BAND, RANGED_COOLDOWN};
use crate::projectile::Projectile;

/// Enemy archetypes; each maps to one behaviour in [`Enemy::update`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum EnemyKind {
    Melee,
    Ranged,
    Dasher,
    Bomber,
}

impl EnemyKind {
    /// `(speed, base health)` before the difficulty multiplier.
    pub fn base_stats(self) -> (f32, f32) {
        match self {
            EnemyKind::Melee => (2.5, 40.0),
            EnemyKind::Ranged => (2.0, 20.0),
            EnemyKind::Dasher => (4.5, 25.0),
            EnemyKind::Bomber => (3.0, 15.0),
        }
    }
}

/// A hostile body chasing (or kiting) the player.
///
/// Enemies keep no handle on the player: the level passes the player's
/// current centre into [`Enemy::update`] and [`Enemy::shoot`] every frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub kind: EnemyKind,
    body: Rect,
    pub health: f32,
    pub max_health: f32,
    pub speed: f32,
    attack_cooldown: u32,
}

impl Enemy {
    /// Spawns an enemy centred on `center` with health scaled by `hp_multiplier`.
    pub fn new(kind: EnemyKind, center: Vec2, hp_multiplier: f32) -> Self {
        let (speed, base_hp) = kind.base_stats();
        let health = base_hp * hp_multiplier;
        let attack_cooldown = match kind {
            EnemyKind::Ranged => RANGED_COOLDOWN,
            _ => 0,
        };
        Self {
            kind,
            body: Rect::from_center(center, Vec2::splat(ENEMY_SIZE)),
            health,
            max_health: health,
            speed,
            attack_cooldown,
        }
    }

    /// Same enemy but rooted in place (tutorial dummy).
    pub fn stationary(mut self) -> Self {
        self.speed = 0.0;
        self
    }

    pub fn attack_cooldown(&self) -> u32 {
        self.attack_cooldown
    }

    /// Preferred distance to the player, for kinds that keep one.
    pub fn attack_range(&self) -> Option<f32> {
        match self.kind {
            EnemyKind::Ranged => Some(RANGED_ATTACK_RANGE),
            _ => None,
        }
    }

    /// Runs one frame of AI against the player's centre `target`.
    pub fn update(&mut self, target: Vec2, walls: &WallSet) {
        let offset = target - self.position();
        let distance = offset.length();
        let angle = offset.y.atan2(offset.x);
        let step = Vec2::new(angle.cos(), angle.sin()) * self.speed;

        match self.kind {
            EnemyKind::Melee | EnemyKind::Dasher | EnemyKind::Bomber => {
                self.move_with_walls(step, walls);
            }
            EnemyKind::Ranged => {
                if distance > RANGED_ATTACK_RANGE {
                    self.move_with_walls(step, walls);
                } else if distance < RANGED_ATTACK_RANGE - RANGED_BAND {
                    self.move_with_walls(-step, walls);
                }
                self.attack_cooldown = self.attack_cooldown.saturating_sub(1);
            }
        }
    }

    /// Fires at `target` if this enemy shoots and its cooldown has run out.
    ///
    /// Aims at where the target is now; there is no leading.
    pub fn shoot(&mut self, target: Vec2) -> Option<Projectile> {
        if self.kind != EnemyKind::Ranged || self.attack_cooldown > 0 {
            return None;
        }
        self.attack_cooldown = RANGED_COOLDOWN;
        let origin = self.position();
        let offset = target - origin;
        Some(Projectile::enemy_shot(origin, offset.y.atan2(offset.x)))
    }
}

impl Collidable for Enemy {
    fn body(&self) -> &Rect {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Rect {
        &mut self.body
    }
}

impl Combatant for Enemy {
    fn health(&self) -> f32 {
        self.health
    }

    fn max_health(&self) -> f32 {
        self.max_health
    }

    fn take_damage(&mut self, amount: f32) {
        self.health -= amount;
    }
}
