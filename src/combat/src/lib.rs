// src/combat/src/lib.rs
//! Weapons, projectiles and the enemy archetypes that use them.

pub mod combatant;
pub mod enemy;
pub mod projectile;
pub mod weapon;

pub use crate::combatant::Combatant;
pub use crate::enemy::{Enemy, EnemyKind};
pub use crate::projectile::{Faction, Projectile};
pub use crate::weapon::{FireMode, Weapon, WeaponKind};

/// Combat tuning (frame-based, pixels per frame).
pub mod constants {
    pub const BULLET_SIZE: f32 = 8.0;
    /// Frames a regular bullet survives.
    pub const BULLET_LIFETIME: u32 = 100;
    /// Max random deviation added to every bullet's angle, in radians.
    pub const BULLET_JITTER: f32 = 0.05;

    pub const SWORD_SLASH_SIZE: f32 = 32.0;
    pub const SWORD_SLASH_REACH: f32 = 20.0;
    pub const SWORD_SLASH_SPEED: f32 = 5.0;
    pub const SWORD_SLASH_LIFETIME: u32 = 5;

    pub const ENEMY_SIZE: f32 = 32.0;
    pub const ENEMY_BULLET_SIZE: f32 = 10.0;
    pub const ENEMY_BULLET_SPEED: f32 = 6.0;
    pub const ENEMY_BULLET_DAMAGE: i32 = 5;
    pub const ENEMY_BULLET_LIFETIME: u32 = 180;

    pub const RANGED_ATTACK_RANGE: f32 = 300.0;
    /// Width of the distance band a ranged enemy holds inside its range.
    pub const RANGED_BAND: f32 = 50.0;
    pub const RANGED_COOLDOWN: u32 = 120;

    pub const BOMBER_EXPLODE_RANGE: f32 = 60.0;
    pub const BOMBER_DAMAGE: i32 = 50;
}
