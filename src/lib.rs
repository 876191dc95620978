//! Soul Guardian: a real-time top-down roguelike simulated frame by frame.
//!
//! The dungeon, combat and hero crates hold the entities; this crate wires
//! them into levels, runs the per-frame pipeline and the game state machine,
//! and provides the terminal front-end.

pub mod camera;
pub mod config;
pub mod game_loop;
pub mod hud;
pub mod input;
pub mod level;
pub mod logging;
pub mod renderer;
pub mod rng;
pub mod scene;
pub mod spawner;
pub mod systems;
pub mod tutorial;

pub use crate::camera::Camera;
pub use crate::config::GameConfig;
pub use crate::game_loop::{GameState, Simulation};
pub use crate::hud::HudSnapshot;
pub use crate::input::{FireTrigger, FrameInput, InputSource, MenuCommand, TerminalInput};
pub use crate::level::{Level, Portal};
pub use crate::renderer::{Renderer, TerminalRenderer};
pub use crate::rng::GameRng;
pub use crate::scene::{DrawKind, Drawable, Scene};
pub use crate::spawner::EnemySpawner;
pub use crate::systems::{CombatResolver, GameEvent, Progress, Resolution};
pub use crate::tutorial::{Tutorial, TutorialStep};

/// Simulation tuning that sits above the entity crates.
pub mod constants {
    /// Default viewport size in pixels.
    pub const SCREEN_WIDTH: f32 = 1024.0;
    pub const SCREEN_HEIGHT: f32 = 768.0;
    pub const FPS: u32 = 60;

    pub const PORTAL_SIZE: f32 = 40.0;
    pub const KILL_SCORE: u32 = 10;
    /// Player damage per frame while touching any enemy.
    pub const CONTACT_DAMAGE: f32 = 1.0;

    /// Frames between continuous spawns at difficulty 1.0.
    pub const ENEMY_SPAWN_RATE: u32 = 180;
    /// Initial spawns never land closer than this to the player.
    pub const SAFE_SPAWN_RADIUS: f32 = 300.0;
    /// Continuous spawns must land farther than this from the player.
    pub const HIDDEN_SPAWN_RADIUS: f32 = 400.0;
    pub const SPAWN_RETRIES: usize = 5;

    pub const DIFFICULTY_STEP: f32 = 0.2;
    pub const LEVEL_HEAL: f32 = 20.0;

    /// Tutorial box in tiles.
    pub const TUTORIAL_WIDTH: usize = 20;
    pub const TUTORIAL_HEIGHT: usize = 15;
    /// Training dummy sits this far right of the screen centre.
    pub const DUMMY_OFFSET: f32 = 200.0;
}
