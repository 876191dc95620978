//! Per-frame systems. Each one reads the frame's input from [`Resources`],
//! mutates the [`World`] and records what happened as [`GameEvent`]s.

use combat::constants::{BOMBER_DAMAGE, BOMBER_EXPLODE_RANGE};
use combat::{Combatant, Enemy, EnemyKind, Projectile};
use dungeon::Collidable;
use glam::Vec2;
use hero::Player;
use log::{debug, info};

use crate::camera::Camera;
use crate::constants::{CONTACT_DAMAGE, DUMMY_OFFSET, KILL_SCORE};
use crate::input::{FireTrigger, FrameInput};
use crate::level::Level;
use crate::rng::GameRng;
use crate::spawner::EnemySpawner;
use crate::tutorial::{Tutorial, TutorialStep};

/// The entities being simulated: the player and the level around it.
#[derive(Clone, Debug)]
pub struct World {
    pub player: Player,
    pub level: Level,
}

/// Run-wide counters that survive level transitions.
#[derive(Clone, Debug, PartialEq)]
pub struct Progress {
    pub level: u32,
    pub score: u32,
    pub difficulty: f32,
    /// Index into [`dungeon::THEMES`].
    pub theme: usize,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            level: 1,
            score: 0,
            difficulty: 1.0,
            theme: 0,
        }
    }
}

/// Something a system wants the rest of the frame to know about.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GameEvent {
    WeaponSwitched,
    Fired { projectiles: usize },
    DashStarted,
    EnemySpawned(EnemyKind),
    EnemyKilled(EnemyKind),
    BomberExploded,
    PlayerHit { damage: f32 },
    PlayerDied,
    PortalReached,
}

/// Shared state the systems work with besides the entities.
#[derive(Debug)]
pub struct Resources {
    pub rng: GameRng,
    pub camera: Camera,
    pub spawner: EnemySpawner,
    pub progress: Progress,
    pub tutorial: Option<Tutorial>,
    /// Input for the frame being simulated.
    pub input: FrameInput,
    /// Events raised so far this frame.
    pub events: Vec<GameEvent>,
}

pub enum SystemResult {
    Continue,
    /// Skip the remaining systems this frame.
    Stop,
}

pub trait System {
    fn name(&self) -> &str;
    fn run(&mut self, world: &mut World, resources: &mut Resources) -> SystemResult;
}

/// Weapon switching, player movement and dash, then firing.
pub struct MovementSystem;

impl System for MovementSystem {
    fn name(&self) -> &str {
        "MovementSystem"
    }

    fn run(&mut self, world: &mut World, resources: &mut Resources) -> SystemResult {
        let input = resources.input;
        let player = &mut world.player;

        if input.switch_weapon {
            player.switch_weapon();
            resources.events.push(GameEvent::WeaponSwitched);
        }

        let was_dashing = player.dash().is_dashing();
        player.update(&input.movement, &world.level.walls, world.level.pixel_size());
        if !was_dashing && player.dash().is_dashing() {
            resources.events.push(GameEvent::DashStarted);
        }

        let shots = match input.fire {
            Some(FireTrigger::At(screen)) => {
                let target = resources.camera.to_world(screen);
                player.shoot_at(target, &mut resources.rng)
            }
            Some(FireTrigger::Toward(direction)) => {
                player.shoot_toward(direction, &mut resources.rng)
            }
            None => Vec::new(),
        };
        if !shots.is_empty() {
            resources.events.push(GameEvent::Fired {
                projectiles: shots.len(),
            });
            world.level.player_shots.extend(shots);
        }
        SystemResult::Continue
    }
}

/// Enemy behaviour against the player's current position, then enemy fire.
pub struct AISystem;

impl System for AISystem {
    fn name(&self) -> &str {
        "AISystem"
    }

    fn run(&mut self, world: &mut World, _resources: &mut Resources) -> SystemResult {
        let target = world.player.position();
        for enemy in &mut world.level.enemies {
            enemy.update(target, &world.level.walls);
            if let Some(shot) = enemy.shoot(target) {
                world.level.enemy_shots.push(shot);
            }
        }
        SystemResult::Continue
    }
}

/// Moves projectiles and drops the ones whose lifetime ran out.
pub struct ProjectileSystem;

impl System for ProjectileSystem {
    fn name(&self) -> &str {
        "ProjectileSystem"
    }

    fn run(&mut self, world: &mut World, _resources: &mut Resources) -> SystemResult {
        world.level.player_shots.retain_mut(Projectile::update);
        world.level.enemy_shots.retain_mut(Projectile::update);
        SystemResult::Continue
    }
}

/// How a combat pass ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    Continue,
    PlayerDied,
    PortalReached,
}

/// Collision and damage between the entity groups, in a fixed order:
///
/// 1. player shots against enemies (kills score)
/// 2. player shots against walls
/// 3. enemy shots against walls
/// 4. bomber blasts and body contact against the player
/// 5. enemy shots against the player
/// 6. player against the portal
///
/// Death is checked right after steps 4 and 5 and ends the pass.
#[derive(Clone, Debug)]
pub struct CombatResolver {
    pub contact_damage: f32,
    pub kill_score: u32,
}

impl Default for CombatResolver {
    fn default() -> Self {
        Self {
            contact_damage: CONTACT_DAMAGE,
            kill_score: KILL_SCORE,
        }
    }
}

impl CombatResolver {
    /// Runs all six steps; returns the score earned and how the pass ended.
    pub fn resolve(
        &self,
        player: &mut Player,
        level: &mut Level,
        events: &mut Vec<GameEvent>,
    ) -> (u32, Resolution) {
        let score = self.hit_enemies(level, events);
        self.clear_walls(level);

        self.body_contact(player, level, events);
        if !player.is_alive() {
            events.push(GameEvent::PlayerDied);
            return (score, Resolution::PlayerDied);
        }

        self.enemy_fire(player, level, events);
        if !player.is_alive() {
            events.push(GameEvent::PlayerDied);
            return (score, Resolution::PlayerDied);
        }

        if reached_portal(player, level) {
            events.push(GameEvent::PortalReached);
            return (score, Resolution::PortalReached);
        }
        (score, Resolution::Continue)
    }

    /// Every player shot touching an enemy is consumed and deals its damage.
    /// Enemies at or below zero health are removed for `kill_score` each.
    pub fn hit_enemies(&self, level: &mut Level, events: &mut Vec<GameEvent>) -> u32 {
        let mut score = 0;
        let shots = &mut level.player_shots;
        level.enemies.retain_mut(|enemy| {
            shots.retain(|shot| {
                if !shot.overlaps(enemy.body()) {
                    return true;
                }
                if enemy.is_alive() {
                    enemy.take_damage(shot.damage as f32);
                }
                false
            });
            if enemy.is_alive() {
                return true;
            }
            debug!("{} killed at {}", enemy.kind, enemy.position());
            events.push(GameEvent::EnemyKilled(enemy.kind));
            score += self.kill_score;
            false
        });
        score
    }

    /// Projectiles of both factions stop at walls.
    pub fn clear_walls(&self, level: &mut Level) {
        let walls = &level.walls;
        level.player_shots.retain(|shot| !walls.overlaps(shot.body()));
        level.enemy_shots.retain(|shot| !walls.overlaps(shot.body()));
    }

    /// Bombers in range detonate, then any remaining enemy touching the
    /// player deals contact damage once for the frame.
    pub fn body_contact(&self, player: &mut Player, level: &mut Level, events: &mut Vec<GameEvent>) {
        let center = player.position();
        let before = level.enemies.len();
        level
            .enemies
            .retain(|enemy| !bomber_in_range(enemy, center));
        let blasts = before - level.enemies.len();
        for _ in 0..blasts {
            events.push(GameEvent::BomberExploded);
        }
        if blasts > 0 {
            let damage = (BOMBER_DAMAGE as usize * blasts) as f32;
            info!("{blasts} bomber(s) exploded for {damage}");
            player.take_damage(damage);
            events.push(GameEvent::PlayerHit { damage });
        }

        if level
            .enemies
            .iter()
            .any(|enemy| player.overlaps(enemy.body()))
        {
            player.take_damage(self.contact_damage);
            events.push(GameEvent::PlayerHit {
                damage: self.contact_damage,
            });
        }
    }

    /// Enemy shots touching the player are consumed; each deals its damage.
    pub fn enemy_fire(&self, player: &mut Player, level: &mut Level, events: &mut Vec<GameEvent>) {
        let mut damage = 0.0;
        level.enemy_shots.retain(|shot| {
            if player.overlaps(shot.body()) {
                damage += shot.damage as f32;
                false
            } else {
                true
            }
        });
        if damage > 0.0 {
            player.take_damage(damage);
            events.push(GameEvent::PlayerHit { damage });
        }
    }
}

fn bomber_in_range(enemy: &Enemy, target: Vec2) -> bool {
    enemy.kind == EnemyKind::Bomber && enemy.position().distance(target) < BOMBER_EXPLODE_RANGE
}

fn reached_portal(player: &Player, level: &Level) -> bool {
    level
        .portal
        .as_ref()
        .is_some_and(|portal| player.overlaps(portal.body()))
}

impl System for CombatResolver {
    fn name(&self) -> &str {
        "CombatResolver"
    }

    fn run(&mut self, world: &mut World, resources: &mut Resources) -> SystemResult {
        let (score, resolution) =
            self.resolve(&mut world.player, &mut world.level, &mut resources.events);
        resources.progress.score += score;
        match resolution {
            Resolution::Continue => SystemResult::Continue,
            Resolution::PlayerDied | Resolution::PortalReached => SystemResult::Stop,
        }
    }
}

/// Continuous enemy spawning on the spawner's timer.
pub struct SpawnSystem;

impl System for SpawnSystem {
    fn name(&self) -> &str {
        "SpawnSystem"
    }

    fn run(&mut self, world: &mut World, resources: &mut Resources) -> SystemResult {
        let progress = &resources.progress;
        let spawned = resources.spawner.tick(
            &world.level.rooms,
            progress.level,
            progress.difficulty,
            world.player.position(),
            world.level.tile_size(),
            &mut resources.rng,
        );
        if let Some(enemy) = spawned {
            resources.events.push(GameEvent::EnemySpawned(enemy.kind));
            world.level.enemies.push(enemy);
        }
        SystemResult::Continue
    }
}

/// Keeps the camera on the player.
pub struct CameraSystem;

impl System for CameraSystem {
    fn name(&self) -> &str {
        "CameraSystem"
    }

    fn run(&mut self, world: &mut World, resources: &mut Resources) -> SystemResult {
        resources.camera.update(world.player.position());
        SystemResult::Continue
    }
}

/// Tutorial progression. Only player shots against walls and the dummy are
/// resolved; there is no contact damage and nothing spawns.
#[derive(Default)]
pub struct TutorialSystem {
    resolver: CombatResolver,
}

impl System for TutorialSystem {
    fn name(&self) -> &str {
        "TutorialSystem"
    }

    fn run(&mut self, world: &mut World, resources: &mut Resources) -> SystemResult {
        let Some(tutorial) = resources.tutorial.as_mut() else {
            return SystemResult::Continue;
        };

        for event in &resources.events {
            match event {
                GameEvent::Fired { .. } => tutorial.on_fired(),
                GameEvent::WeaponSwitched => tutorial.on_switched(),
                GameEvent::DashStarted => tutorial.on_dashed(),
                _ => {}
            }
        }
        tutorial.tick(resources.input.movement.is_moving());

        if tutorial.step() == TutorialStep::DefeatDummy {
            if tutorial.needs_dummy() {
                let at = resources.camera.screen_size() / 2.0 + Vec2::new(DUMMY_OFFSET, 0.0);
                world
                    .level
                    .enemies
                    .push(Enemy::new(EnemyKind::Melee, at, 1.0).stationary());
                tutorial.mark_dummy_spawned();
            }
            self.resolver.clear_walls(&mut world.level);
            let kills = self.resolver.hit_enemies(&mut world.level, &mut resources.events);
            if kills > 0 {
                tutorial.on_dummy_defeated();
            }
        }
        SystemResult::Continue
    }
}
