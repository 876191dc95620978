//! The simulation: global game state machine plus the ordered per-frame
//! system pipeline.
//!
//! A playing frame runs, in order:
//! - MovementSystem: weapon switch, player movement and dash, firing
//! - AISystem: enemy behaviour and enemy fire
//! - ProjectileSystem: projectile motion and lifetime
//! - CombatResolver: collisions, damage, kills, death and the portal
//! - SpawnSystem: timer-driven spawning
//! - CameraSystem: follow the player
//!
//! The tutorial swaps combat and spawning for its own progression system.

use dungeon::constants::TILE_SIZE;
use dungeon::{DungeonGenerator, THEMES};
use glam::Vec2;
use hero::Player;
use log::{debug, info};
use strum::Display;

use crate::camera::Camera;
use crate::config::GameConfig;
use crate::constants::{TUTORIAL_HEIGHT, TUTORIAL_WIDTH};
use crate::hud::HudSnapshot;
use crate::input::{FrameInput, MenuCommand};
use crate::level::Level;
use crate::rng::GameRng;
use crate::scene::Scene;
use crate::spawner::EnemySpawner;
use crate::systems::{
    AISystem, CameraSystem, CombatResolver, GameEvent, MovementSystem, ProjectileSystem, Progress,
    Resources, SpawnSystem, System, SystemResult, TutorialSystem, World,
};
use crate::tutorial::Tutorial;

/// Top-level game state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Display)]
pub enum GameState {
    Menu,
    Playing,
    GameOver,
    Tutorial,
}

pub struct Simulation {
    config: GameConfig,
    state: GameState,
    world: World,
    resources: Resources,
    generator: DungeonGenerator,
    playing_systems: Vec<Box<dyn System>>,
    tutorial_systems: Vec<Box<dyn System>>,
    /// A dungeon run exists that the menu can resume.
    run_active: bool,
    quit_requested: bool,
    frame: u64,
}

impl Simulation {
    /// Creates a simulation sitting in the menu with a fresh run prepared.
    pub fn new(config: GameConfig, rng: GameRng) -> Self {
        let screen = Vec2::new(config.screen_width, config.screen_height);
        let playing_systems: Vec<Box<dyn System>> = vec![
            Box::new(MovementSystem),
            Box::new(AISystem),
            Box::new(ProjectileSystem),
            Box::new(CombatResolver::default()),
            Box::new(SpawnSystem),
            Box::new(CameraSystem),
        ];
        let tutorial_systems: Vec<Box<dyn System>> = vec![
            Box::new(MovementSystem),
            Box::new(AISystem),
            Box::new(ProjectileSystem),
            Box::new(TutorialSystem::default()),
            Box::new(CameraSystem),
        ];

        let mut simulation = Self {
            world: World {
                player: Player::new(screen / 2.0),
                level: Level::arena(TUTORIAL_WIDTH, TUTORIAL_HEIGHT, TILE_SIZE),
            },
            resources: Resources {
                rng,
                camera: Camera::new(screen, screen),
                spawner: EnemySpawner::new(),
                progress: Progress::default(),
                tutorial: None,
                input: FrameInput::default(),
                events: Vec::new(),
            },
            config,
            state: GameState::Menu,
            generator: DungeonGenerator::default(),
            playing_systems,
            tutorial_systems,
            run_active: false,
            quit_requested: false,
            frame: 0,
        };
        simulation.start_run();
        simulation
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn player(&self) -> &Player {
        &self.world.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.world.player
    }

    pub fn level(&self) -> &Level {
        &self.world.level
    }

    pub fn level_mut(&mut self) -> &mut Level {
        &mut self.world.level
    }

    pub fn progress(&self) -> &Progress {
        &self.resources.progress
    }

    pub fn camera(&self) -> &Camera {
        &self.resources.camera
    }

    pub fn tutorial(&self) -> Option<&Tutorial> {
        self.resources.tutorial.as_ref()
    }

    /// Events raised during the last simulated frame.
    pub fn events(&self) -> &[GameEvent] {
        &self.resources.events
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn frames(&self) -> u64 {
        self.frame
    }

    /// Advances one frame. Returns the new state if it changed.
    ///
    /// A command that changes state uses up the frame; otherwise the active
    /// state's pipeline runs.
    pub fn step(&mut self, input: FrameInput) -> Option<GameState> {
        self.frame += 1;
        let before = self.state;
        self.resources.events.clear();

        if let Some(command) = input.command {
            self.handle_command(command);
        }
        if self.state == before && !self.quit_requested {
            match self.state {
                GameState::Playing => self.run_playing(input),
                GameState::Tutorial => self.run_tutorial(input),
                GameState::Menu | GameState::GameOver => {}
            }
        }
        (self.state != before).then_some(self.state)
    }

    fn handle_command(&mut self, command: MenuCommand) {
        match (self.state, command) {
            (_, MenuCommand::Quit) | (GameState::Menu, MenuCommand::Back) => {
                info!("quit requested");
                self.quit_requested = true;
            }
            (GameState::Menu, MenuCommand::Start) => {
                if !self.run_active {
                    self.start_run();
                }
                self.set_state(GameState::Playing);
            }
            (GameState::Menu, MenuCommand::Tutorial) => self.start_tutorial(),
            (GameState::Menu | GameState::GameOver, MenuCommand::Restart) => {
                self.start_run();
                self.set_state(GameState::Playing);
            }
            (GameState::Playing | GameState::Tutorial | GameState::GameOver, MenuCommand::Back) => {
                self.set_state(GameState::Menu);
            }
            _ => {}
        }
    }

    fn set_state(&mut self, state: GameState) {
        if self.state != state {
            info!("state {} -> {}", self.state, state);
            self.state = state;
        }
    }

    fn run_systems(systems: &mut [Box<dyn System>], world: &mut World, resources: &mut Resources) {
        for system in systems.iter_mut() {
            if let SystemResult::Stop = system.run(world, resources) {
                debug!("{} ended the frame early", system.name());
                break;
            }
        }
    }

    fn run_playing(&mut self, input: FrameInput) {
        self.resources.input = input;
        Self::run_systems(&mut self.playing_systems, &mut self.world, &mut self.resources);

        if self.resources.events.contains(&GameEvent::PlayerDied) {
            info!(
                "game over on level {} with score {}",
                self.resources.progress.level, self.resources.progress.score
            );
            self.run_active = false;
            self.set_state(GameState::GameOver);
        } else if self.resources.events.contains(&GameEvent::PortalReached) {
            self.next_level();
        }
    }

    fn run_tutorial(&mut self, input: FrameInput) {
        self.resources.input = input;
        Self::run_systems(&mut self.tutorial_systems, &mut self.world, &mut self.resources);

        if self.resources.tutorial.as_ref().is_some_and(Tutorial::is_finished) {
            info!("tutorial finished");
            self.resources.tutorial = None;
            self.set_state(GameState::Menu);
        }
    }

    /// Resets progress and the player and builds level one.
    pub fn start_run(&mut self) {
        self.resources.progress = Progress::default();
        self.resources.tutorial = None;
        self.world.player = Player::new(Vec2::ZERO);
        self.build_level();
        self.run_active = true;
        info!("new run, seed {}", self.resources.rng.seed());
    }

    /// Next level: harder, new theme, same player moved to the new spawn
    /// and partly healed.
    pub fn next_level(&mut self) {
        let progress = &mut self.resources.progress;
        progress.level += 1;
        progress.difficulty += self.config.difficulty_step;
        progress.theme = self.resources.rng.index(THEMES.len()).unwrap_or(0);
        self.build_level();
        self.world.player.heal(self.config.level_heal);
        info!(
            "entered level {} (difficulty {:.1}, theme {})",
            self.resources.progress.level,
            self.resources.progress.difficulty,
            THEMES[self.resources.progress.theme].name
        );
    }

    fn build_level(&mut self) {
        let dungeon = self.generator.generate(&mut self.resources.rng);
        let mut level = Level::from_dungeon(dungeon, TILE_SIZE);
        let spawn = level.spawn_point().unwrap_or(level.pixel_size() / 2.0);
        self.world.player.place_at(spawn);

        let progress = &self.resources.progress;
        let spawner = &mut self.resources.spawner;
        spawner.reset();
        level.enemies = spawner.populate(
            &level.rooms,
            progress.level,
            progress.difficulty,
            spawn,
            TILE_SIZE,
            &mut self.resources.rng,
        );
        debug!(
            "level {} has {} rooms and {} enemies",
            progress.level,
            level.rooms.len(),
            level.enemies.len()
        );

        self.resources.camera = Camera::new(self.screen_size(), level.pixel_size());
        self.resources.camera.update(spawn);
        self.world.level = level;
    }

    /// Walled training box with a fresh player at screen centre.
    pub fn start_tutorial(&mut self) {
        let center = self.screen_size() / 2.0;
        let level = Level::arena(TUTORIAL_WIDTH, TUTORIAL_HEIGHT, TILE_SIZE);
        self.resources.camera = Camera::new(self.screen_size(), level.pixel_size());
        self.resources.camera.update(center);
        self.world = World {
            player: Player::new(center),
            level,
        };
        self.resources.tutorial = Some(Tutorial::new());
        self.run_active = false;
        self.set_state(GameState::Tutorial);
    }

    fn screen_size(&self) -> Vec2 {
        Vec2::new(self.config.screen_width, self.config.screen_height)
    }

    pub fn theme(&self) -> dungeon::Theme {
        THEMES[self.resources.progress.theme % THEMES.len()]
    }

    /// Camera-space snapshot of everything visible.
    pub fn scene(&self) -> Scene {
        Scene::capture(&self.world, &self.resources.camera, self.theme())
    }

    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot::capture(
            &self.world.player,
            &self.resources.progress,
            self.theme().name,
            self.state,
            self.resources.tutorial.as_ref(),
            self.config.fps,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dungeon::Collidable;

    fn simulation() -> Simulation {
        Simulation::new(GameConfig::default(), GameRng::new(42))
    }

    fn command(command: MenuCommand) -> FrameInput {
        FrameInput {
            command: Some(command),
            ..Default::default()
        }
    }

    #[test]
    fn starts_in_menu_with_a_level_ready() {
        let sim = simulation();
        assert_eq!(sim.state(), GameState::Menu);
        assert!(!sim.level().rooms.is_empty());
        assert_eq!(sim.progress(), &Progress::default());
    }

    #[test]
    fn menu_commands_drive_the_state_machine() {
        let mut sim = simulation();
        assert_eq!(sim.step(command(MenuCommand::Start)), Some(GameState::Playing));
        assert_eq!(sim.step(command(MenuCommand::Back)), Some(GameState::Menu));
        assert_eq!(sim.step(command(MenuCommand::Tutorial)), Some(GameState::Tutorial));
        assert!(sim.tutorial().is_some());
        assert_eq!(sim.step(command(MenuCommand::Back)), Some(GameState::Menu));
        assert_eq!(sim.step(command(MenuCommand::Back)), None);
        assert!(sim.quit_requested());
    }

    #[test]
    fn menu_does_not_simulate() {
        let mut sim = simulation();
        let before = sim.player().position();
        let moving = FrameInput {
            movement: hero::InputSnapshot {
                right: true,
                ..Default::default()
            },
            ..Default::default()
        };
        sim.step(moving);
        assert_eq!(sim.player().position(), before);
    }

    #[test]
    fn resume_keeps_the_run() {
        let mut sim = simulation();
        sim.step(command(MenuCommand::Start));
        sim.player_mut().health = 55.0;
        sim.step(command(MenuCommand::Back));
        sim.step(command(MenuCommand::Start));
        assert_eq!(sim.player().health, 55.0);

        sim.step(command(MenuCommand::Back));
        sim.step(command(MenuCommand::Restart));
        assert_eq!(sim.player().health, 100.0);
    }

    #[test]
    fn next_level_scales_and_heals() {
        let mut sim = simulation();
        sim.step(command(MenuCommand::Start));
        sim.player_mut().health = 90.0;
        sim.next_level();
        assert_eq!(sim.progress().level, 2);
        assert!((sim.progress().difficulty - 1.2).abs() < 1e-6);
        assert_eq!(sim.player().health, 100.0);
        let spawn = sim.level().spawn_point().unwrap();
        assert_eq!(sim.player().position(), spawn);
    }

    #[test]
    fn same_seed_same_first_level() {
        let a = simulation();
        let b = simulation();
        assert_eq!(a.level().rooms, b.level().rooms);
        assert_eq!(a.level().enemies.len(), b.level().enemies.len());
    }
}
