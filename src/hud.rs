use combat::Combatant;
use hero::Player;

use crate::game_loop::GameState;
use crate::systems::Progress;
use crate::tutorial::{Tutorial, TutorialStep};

/// Read-only values for the HUD; nothing in the simulation reads them back.
#[derive(Clone, Debug, PartialEq)]
pub struct HudSnapshot {
    /// Never below zero, even when the player overshoots into death.
    pub health: f32,
    pub max_health: f32,
    pub score: u32,
    pub level: u32,
    pub weapon: String,
    /// Whole seconds until the dash is ready again.
    pub skill_cooldown_secs: u32,
    pub theme: &'static str,
    pub state: GameState,
    pub tutorial_step: Option<TutorialStep>,
}

impl HudSnapshot {
    pub fn capture(
        player: &Player,
        progress: &Progress,
        theme: &'static str,
        state: GameState,
        tutorial: Option<&Tutorial>,
        fps: u32,
    ) -> Self {
        Self {
            health: player.health().max(0.0),
            max_health: player.max_health(),
            score: progress.score,
            level: progress.level,
            weapon: player.weapon().name(),
            skill_cooldown_secs: player.skill_cooldown() / fps.max(1),
            theme,
            state,
            tutorial_step: tutorial.map(Tutorial::step),
        }
    }

    /// One-line status text.
    pub fn status_line(&self) -> String {
        let skill = match self.skill_cooldown_secs {
            0 => "ready".to_string(),
            secs => format!("{secs}s"),
        };
        format!(
            "HP {:.0}/{:.0} | Score {} | Level {} | {} | Dash {} | {}",
            self.health, self.max_health, self.score, self.level, self.weapon, skill, self.theme
        )
    }
}
