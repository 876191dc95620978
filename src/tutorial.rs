use serde::{Deserialize, Serialize};
use strum::Display;

/// Frames movement must be held in the first step before it counts.
const MOVE_HOLD_FRAMES: u32 = 60;
/// Frames the completion message stays up before returning to the menu.
const FINISH_DELAY_FRAMES: u32 = 180;

/// Tutorial steps in the order they are taught.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum TutorialStep {
    Move,
    Shoot,
    SwitchWeapon,
    Dash,
    DefeatDummy,
    Complete,
}

impl TutorialStep {
    /// 1-based step number.
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    pub fn hint(self) -> &'static str {
        match self {
            TutorialStep::Move => "Move with WASD",
            TutorialStep::Shoot => "Aim and shoot with the arrow keys or a mouse click",
            TutorialStep::SwitchWeapon => "Press Q to switch weapons",
            TutorialStep::Dash => "Press Space to dash",
            TutorialStep::DefeatDummy => "Defeat the training dummy",
            TutorialStep::Complete => "Tutorial complete!",
        }
    }
}

/// Progress through the tutorial. Each step only reacts to its own action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tutorial {
    step: TutorialStep,
    timer: u32,
    dummy_spawned: bool,
}

impl Default for Tutorial {
    fn default() -> Self {
        Self::new()
    }
}

impl Tutorial {
    pub fn new() -> Self {
        Self {
            step: TutorialStep::Move,
            timer: 0,
            dummy_spawned: false,
        }
    }

    pub fn step(&self) -> TutorialStep {
        self.step
    }

    /// Frames spent in the current step.
    pub fn timer(&self) -> u32 {
        self.timer
    }

    fn advance(&mut self, from: TutorialStep, to: TutorialStep) {
        if self.step == from {
            self.step = to;
            self.timer = 0;
        }
    }

    /// Advances the step timer; `moving` is whether movement is held.
    pub fn tick(&mut self, moving: bool) {
        self.timer += 1;
        if self.step == TutorialStep::Move && moving && self.timer > MOVE_HOLD_FRAMES {
            self.advance(TutorialStep::Move, TutorialStep::Shoot);
        }
    }

    pub fn on_fired(&mut self) {
        self.advance(TutorialStep::Shoot, TutorialStep::SwitchWeapon);
    }

    pub fn on_switched(&mut self) {
        self.advance(TutorialStep::SwitchWeapon, TutorialStep::Dash);
    }

    pub fn on_dashed(&mut self) {
        self.advance(TutorialStep::Dash, TutorialStep::DefeatDummy);
    }

    pub fn on_dummy_defeated(&mut self) {
        self.advance(TutorialStep::DefeatDummy, TutorialStep::Complete);
    }

    /// Whether the dummy still has to be placed for the current step.
    pub fn needs_dummy(&self) -> bool {
        self.step == TutorialStep::DefeatDummy && !self.dummy_spawned
    }

    pub fn mark_dummy_spawned(&mut self) {
        self.dummy_spawned = true;
    }

    pub fn is_finished(&self) -> bool {
        self.step == TutorialStep::Complete && self.timer > FINISH_DELAY_FRAMES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_must_be_held_past_a_second() {
        let mut tutorial = Tutorial::new();
        for _ in 0..MOVE_HOLD_FRAMES {
            tutorial.tick(true);
        }
        assert_eq!(tutorial.step(), TutorialStep::Move);
        tutorial.tick(true);
        assert_eq!(tutorial.step(), TutorialStep::Shoot);
        assert_eq!(tutorial.timer(), 0);
    }

    #[test]
    fn out_of_order_actions_are_ignored() {
        let mut tutorial = Tutorial::new();
        tutorial.on_switched();
        tutorial.on_dashed();
        tutorial.on_fired();
        assert_eq!(tutorial.step(), TutorialStep::Move);
    }

    #[test]
    fn full_walkthrough() {
        let mut tutorial = Tutorial::new();
        for _ in 0..=MOVE_HOLD_FRAMES {
            tutorial.tick(true);
        }
        tutorial.on_fired();
        tutorial.on_switched();
        tutorial.on_dashed();
        assert!(tutorial.needs_dummy());
        tutorial.mark_dummy_spawned();
        assert!(!tutorial.needs_dummy());
        tutorial.on_dummy_defeated();
        assert_eq!(tutorial.step().number(), 6);

        for _ in 0..FINISH_DELAY_FRAMES {
            tutorial.tick(false);
        }
        assert!(!tutorial.is_finished());
        tutorial.tick(false);
        assert!(tutorial.is_finished());
    }
}
