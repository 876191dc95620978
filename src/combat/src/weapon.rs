// src/combat/src/weapon.rs
use glam::Vec2;
use rand::Rng;
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::constants::{
    BULLET_JITTER, BULLET_LIFETIME, BULLET_SIZE, SWORD_SLASH_LIFETIME, SWORD_SLASH_REACH,
    SWORD_SLASH_SIZE, SWORD_SLASH_SPEED,
};
use crate::projectile::{Faction, Projectile};

/// The four player weapons, in switching order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum WeaponKind {
    Sword,
    Pistol,
    Shotgun,
    MachineGun,
}

/// How a weapon turns a trigger pull into projectiles.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FireMode {
    /// Travelling bullets, fanned out over `spread`.
    Bullet,
    /// One short-lived box just ahead of the wielder.
    Slash,
}

/// A weapon and its cooldown timer.
#[derive(Clone, Debug, PartialEq)]
pub struct Weapon {
    pub kind: WeaponKind,
    pub mode: FireMode,
    /// Frames between shots.
    pub cooldown: u32,
    pub damage: i32,
    pub speed: f32,
    /// Total fan angle in radians.
    pub spread: f32,
    pub projectile_count: u32,
    current_cooldown: u32,
}

impl Weapon {
    pub fn new(kind: WeaponKind) -> Self {
        let (mode, cooldown, damage, speed, spread, projectile_count) = match kind {
            WeaponKind::Sword => (FireMode::Slash, 30, 30, SWORD_SLASH_SPEED, 0.0, 1),
            WeaponKind::Pistol => (FireMode::Bullet, 20, 10, 12.0, 0.0, 1),
            WeaponKind::Shotgun => (FireMode::Bullet, 45, 8, 10.0, 0.5, 5),
            WeaponKind::MachineGun => (FireMode::Bullet, 5, 5, 15.0, 0.1, 1),
        };
        Self {
            kind,
            mode,
            cooldown,
            damage,
            speed,
            spread,
            projectile_count,
            current_cooldown: 0,
        }
    }

    /// One of every weapon, in switching order.
    pub fn arsenal() -> Vec<Self> {
        WeaponKind::iter().map(Self::new).collect()
    }

    pub fn name(&self) -> String {
        self.kind.to_string()
    }

    pub fn remaining_cooldown(&self) -> u32 {
        self.current_cooldown
    }

    pub fn is_ready(&self) -> bool {
        self.current_cooldown == 0
    }

    /// Counts the cooldown down by one frame.
    pub fn tick(&mut self) {
        self.current_cooldown = self.current_cooldown.saturating_sub(1);
    }

    /// Fires from `origin` along `angle` (radians).
    ///
    /// Returns no projectiles while cooling down; otherwise restarts the
    /// cooldown. Bullets get a small random jitter on top of their fan angle.
    pub fn fire(&mut self, origin: Vec2, angle: f32, rng: &mut impl Rng) -> Vec<Projectile> {
        if !self.is_ready() {
            return Vec::new();
        }
        self.current_cooldown = self.cooldown;

        match self.mode {
            FireMode::Slash => {
                let center = origin + Vec2::new(angle.cos(), angle.sin()) * SWORD_SLASH_REACH;
                vec![Projectile::new(
                    center,
                    angle,
                    self.speed,
                    self.damage,
                    SWORD_SLASH_LIFETIME,
                    SWORD_SLASH_SIZE,
                    Faction::Player,
                )]
            }
            FireMode::Bullet => {
                let count = self.projectile_count.max(1);
                let start = angle - self.spread / 2.0;
                let step = if count > 1 {
                    self.spread / (count - 1) as f32
                } else {
                    0.0
                };
                (0..count)
                    .map(|i| {
                        let base = if count > 1 { start + step * i as f32 } else { angle };
                        let jittered = base + rng.random_range(-BULLET_JITTER..=BULLET_JITTER);
                        Projectile::new(
                            origin,
                            jittered,
                            self.speed,
                            self.damage,
                            BULLET_LIFETIME,
                            BULLET_SIZE,
                            Faction::Player,
                        )
                    })
                    .collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dungeon::Collidable;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn arsenal_is_ordered() {
        let kinds: Vec<_> = Weapon::arsenal().iter().map(|w| w.kind).collect();
        assert_eq!(
            kinds,
            vec![
                WeaponKind::Sword,
                WeaponKind::Pistol,
                WeaponKind::Shotgun,
                WeaponKind::MachineGun
            ]
        );
        assert_eq!(Weapon::new(WeaponKind::MachineGun).name(), "MachineGun");
    }

    #[test]
    fn cooldown_blocks_second_shot_until_elapsed() {
        let mut rng = Pcg32::seed_from_u64(11);
        let mut pistol = Weapon::new(WeaponKind::Pistol);

        assert_eq!(pistol.fire(Vec2::ZERO, 0.0, &mut rng).len(), 1);
        for _ in 0..19 {
            pistol.tick();
            assert!(pistol.fire(Vec2::ZERO, 0.0, &mut rng).is_empty());
        }
        pistol.tick();
        assert_eq!(pistol.fire(Vec2::ZERO, 0.0, &mut rng).len(), 1);
        assert_eq!(pistol.remaining_cooldown(), 20);
    }

    #[test]
    fn shotgun_fans_pellets_across_spread() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut shotgun = Weapon::new(WeaponKind::Shotgun);
        let pellets = shotgun.fire(Vec2::ZERO, 0.0, &mut rng);
        assert_eq!(pellets.len(), 5);

        let angles: Vec<f32> = pellets.iter().map(|p| p.velocity.y.atan2(p.velocity.x)).collect();
        let expected = [-0.25, -0.125, 0.0, 0.125, 0.25];
        for (got, want) in angles.iter().zip(expected) {
            assert!((got - want).abs() <= BULLET_JITTER + 1e-4, "{got} vs {want}");
        }
        assert!(pellets.iter().all(|p| p.damage == 8 && p.lifetime == BULLET_LIFETIME));
    }

    #[test]
    fn sword_slash_sits_ahead_of_wielder() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut sword = Weapon::new(WeaponKind::Sword);
        let slash = sword.fire(Vec2::new(100.0, 100.0), 0.0, &mut rng);
        assert_eq!(slash.len(), 1);
        let slash = &slash[0];
        assert_eq!(slash.position(), Vec2::new(120.0, 100.0));
        assert_eq!(slash.lifetime, SWORD_SLASH_LIFETIME);
        assert_eq!(slash.body().size(), Vec2::splat(SWORD_SLASH_SIZE));
        assert_eq!(slash.damage, 30);
    }
}
