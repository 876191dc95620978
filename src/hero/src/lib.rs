// src/hero/src/lib.rs
//! The player character: movement, the dash skill and the weapon belt.

mod dash;
mod input;
mod player;

pub use self::{
    dash::{Dash, DashPhase},
    input::InputSnapshot,
    player::Player,
};

/// Player tuning, in pixels and frames.
pub mod constants {
    pub const PLAYER_SIZE: f32 = 32.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_START_HP: f32 = 100.0;

    pub const DASH_SPEED: f32 = 15.0;
    pub const DASH_DURATION: u32 = 10;
    pub const DASH_COOLDOWN: u32 = 120;
}
