use glam::Vec2;

use crate::constants::{DASH_COOLDOWN, DASH_DURATION};

/// Whether the player is under normal control or locked into a dash.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DashPhase {
    Normal,
    Dashing { remaining: u32, direction: Vec2 },
}

/// Dash skill state: the phase plus the cooldown before the next dash.
#[derive(Clone, Debug, PartialEq)]
pub struct Dash {
    cooldown: u32,
    phase: DashPhase,
}

impl Default for Dash {
    fn default() -> Self {
        Self {
            cooldown: 0,
            phase: DashPhase::Normal,
        }
    }
}

impl Dash {
    pub fn phase(&self) -> DashPhase {
        self.phase
    }

    pub fn cooldown(&self) -> u32 {
        self.cooldown
    }

    pub fn is_dashing(&self) -> bool {
        matches!(self.phase, DashPhase::Dashing { .. })
    }

    pub fn can_activate(&self) -> bool {
        self.cooldown == 0 && !self.is_dashing()
    }

    /// Starts a dash along `direction` (expected to be a unit vector).
    ///
    /// Does nothing and returns `false` while cooling down or already dashing.
    pub fn activate(&mut self, direction: Vec2) -> bool {
        if !self.can_activate() {
            return false;
        }
        self.cooldown = DASH_COOLDOWN;
        self.phase = DashPhase::Dashing {
            remaining: DASH_DURATION,
            direction,
        };
        true
    }

    pub fn tick_cooldown(&mut self) {
        self.cooldown = self.cooldown.saturating_sub(1);
    }

    /// Consumes one dash frame, returning the locked direction if dashing.
    pub fn step(&mut self) -> Option<Vec2> {
        let DashPhase::Dashing {
            remaining,
            direction,
        } = self.phase
        else {
            return None;
        };
        let remaining = remaining.saturating_sub(1);
        self.phase = if remaining == 0 {
            DashPhase::Normal
        } else {
            DashPhase::Dashing {
                remaining,
                direction,
            }
        };
        Some(direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_lasts_exactly_its_duration() {
        let mut dash = Dash::default();
        assert!(dash.activate(Vec2::X));
        for _ in 0..DASH_DURATION {
            assert_eq!(dash.step(), Some(Vec2::X));
        }
        assert_eq!(dash.step(), None);
        assert_eq!(dash.phase(), DashPhase::Normal);
    }

    #[test]
    fn cooldown_blocks_reactivation() {
        let mut dash = Dash::default();
        dash.activate(Vec2::Y);
        while dash.step().is_some() {}
        let before = dash.clone();
        assert!(!dash.activate(Vec2::X));
        assert_eq!(dash, before);

        for _ in 0..DASH_COOLDOWN {
            dash.tick_cooldown();
        }
        assert!(dash.activate(Vec2::X));
    }
}
