// src/hero/src/player.rs
use combat::{Combatant, Projectile, Weapon};
use dungeon::{Collidable, Rect, WallSet};
use glam::Vec2;
use log::debug;
use rand::Rng;

use crate::constants::{DASH_SPEED, PLAYER_SIZE, PLAYER_SPEED, PLAYER_START_HP};
use crate::dash::Dash;
use crate::input::InputSnapshot;

/// The player: body, health, the weapon belt and the dash skill.
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    body: Rect,
    pub health: f32,
    pub max_health: f32,
    pub speed: f32,
    weapons: Vec<Weapon>,
    active_weapon: usize,
    dash: Dash,
}

impl Player {
    /// Fresh player centred on `center` with full health and all four weapons.
    pub fn new(center: Vec2) -> Self {
        Self {
            body: Rect::from_center(center, Vec2::splat(PLAYER_SIZE)),
            health: PLAYER_START_HP,
            max_health: PLAYER_START_HP,
            speed: PLAYER_SPEED,
            weapons: Weapon::arsenal(),
            active_weapon: 0,
            dash: Dash::default(),
        }
    }

    pub fn weapon(&self) -> &Weapon {
        &self.weapons[self.active_weapon]
    }

    fn weapon_mut(&mut self) -> &mut Weapon {
        &mut self.weapons[self.active_weapon]
    }

    pub fn weapons(&self) -> &[Weapon] {
        &self.weapons
    }

    pub fn active_weapon_index(&self) -> usize {
        self.active_weapon
    }

    /// Cycles to the next weapon, wrapping around.
    pub fn switch_weapon(&mut self) {
        self.active_weapon = (self.active_weapon + 1) % self.weapons.len();
        debug!("switched to {}", self.weapon().name());
    }

    pub fn dash(&self) -> &Dash {
        &self.dash
    }

    /// Frames until the dash can be used again.
    pub fn skill_cooldown(&self) -> u32 {
        self.dash.cooldown()
    }

    /// Tries to start a dash.
    ///
    /// Direction preference: the analog vector, then the held direction
    /// keys, then straight right.
    pub fn use_skill(&mut self, input: &InputSnapshot) -> bool {
        if !self.dash.can_activate() {
            return false;
        }
        let direction = input
            .analog()
            .or_else(|| Some(input.digital_direction()).filter(|d| *d != Vec2::ZERO))
            .map(Vec2::normalize_or_zero)
            .filter(|d| *d != Vec2::ZERO)
            .unwrap_or(Vec2::X);
        self.dash.activate(direction)
    }

    /// Runs one frame of player movement.
    ///
    /// While dashing, movement input is ignored and the body travels along
    /// the locked direction at dash speed. Walls apply in both cases and the
    /// body is kept inside `bounds` (map size in pixels).
    pub fn update(&mut self, input: &InputSnapshot, walls: &WallSet, bounds: Vec2) {
        if input.skill {
            self.use_skill(input);
        }
        self.dash.tick_cooldown();
        self.weapon_mut().tick();

        let delta = match self.dash.step() {
            Some(direction) => direction * DASH_SPEED,
            None => self.walk_velocity(input),
        };
        self.move_with_walls(delta, walls);
        self.body.clamp_within(bounds.x, bounds.y);
    }

    /// Normal movement for this frame; never faster than `speed`.
    fn walk_velocity(&self, input: &InputSnapshot) -> Vec2 {
        match input.analog() {
            Some(stick) => stick.clamp_length_max(1.0) * self.speed,
            None => input.digital_direction().normalize_or_zero() * self.speed,
        }
    }

    /// Fires the active weapon at a world position.
    pub fn shoot_at(&mut self, target: Vec2, rng: &mut impl Rng) -> Vec<Projectile> {
        let origin = self.position();
        let offset = target - origin;
        let angle = offset.y.atan2(offset.x);
        self.weapon_mut().fire(origin, angle, rng)
    }

    /// Fires the active weapon along `direction`; a zero vector fires nothing.
    pub fn shoot_toward(&mut self, direction: Vec2, rng: &mut impl Rng) -> Vec<Projectile> {
        if direction == Vec2::ZERO {
            return Vec::new();
        }
        let origin = self.position();
        self.weapon_mut().fire(origin, direction.y.atan2(direction.x), rng)
    }

    /// Restores health, never above the maximum.
    pub fn heal(&mut self, amount: f32) {
        self.health = (self.health + amount).min(self.max_health);
    }

    /// Moves the body so its centre sits on `center`.
    pub fn place_at(&mut self, center: Vec2) {
        self.body.set_center(center);
    }
}

impl Collidable for Player {
    fn body(&self) -> &Rect {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Rect {
        &mut self.body
    }
}

impl Combatant for Player {
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
