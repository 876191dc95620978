// src/combat/src/projectile.rs
use dungeon::{Collidable, Rect};
use glam::Vec2;

use crate::constants::{
    ENEMY_BULLET_DAMAGE, ENEMY_BULLET_LIFETIME, ENEMY_BULLET_SIZE, ENEMY_BULLET_SPEED,
};

/// Who fired a projectile; decides which bodies it can hit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Faction {
    Player,
    Enemy,
}

/// A moving damage box with a frame-counted lifetime.
#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    body: Rect,
    pub velocity: Vec2,
    pub damage: i32,
    /// Updates left before the projectile expires.
    pub lifetime: u32,
    pub faction: Faction,
}

impl Projectile {
    /// Square projectile of edge `size` centred on `center`, flying along `angle`.
    pub fn new(
        center: Vec2,
        angle: f32,
        speed: f32,
        damage: i32,
        lifetime: u32,
        size: f32,
        faction: Faction,
    ) -> Self {
        Self {
            body: Rect::from_center(center, Vec2::splat(size)),
            velocity: Vec2::new(angle.cos(), angle.sin()) * speed,
            damage,
            lifetime,
            faction,
        }
    }

    /// Standard enemy bullet aimed along `angle`.
    pub fn enemy_shot(origin: Vec2, angle: f32) -> Self {
        Self::new(
            origin,
            angle,
            ENEMY_BULLET_SPEED,
            ENEMY_BULLET_DAMAGE,
            ENEMY_BULLET_LIFETIME,
            ENEMY_BULLET_SIZE,
            Faction::Enemy,
        )
    }

    /// Advances one frame. Returns `false` once the lifetime is spent, in
    /// which case the projectile did not move and should be dropped.
    pub fn update(&mut self) -> bool {
        if self.lifetime == 0 {
            return false;
        }
        self.lifetime -= 1;
        self.body.translate(self.velocity);
        true
    }

    pub fn is_player_shot(&self) -> bool {
        self.faction == Faction::Player
    }
}

impl Collidable for Projectile {
    fn body(&self) -> &Rect {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Rect {
        &mut self.body
    }
}
