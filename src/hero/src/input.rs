use glam::Vec2;

/// Per-frame movement input handed to [`crate::Player::update`].
///
/// Either the four held direction flags or an analog `move_vector` drive
/// movement; the analog vector wins when present.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputSnapshot {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Analog stick vector, magnitude up to 1.
    pub move_vector: Option<Vec2>,
    /// Skill (dash) button pressed this frame.
    pub skill: bool,
}

impl InputSnapshot {
    /// Raw `(-1..=1, -1..=1)` direction from the held flags.
    ///
    /// Opposite keys do not cancel: down overrides up and right overrides left.
    pub fn digital_direction(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.up {
            dir.y = -1.0;
        }
        if self.down {
            dir.y = 1.0;
        }
        if self.left {
            dir.x = -1.0;
        }
        if self.right {
            dir.x = 1.0;
        }
        dir
    }

    /// Analog vector if it is non-zero.
    pub fn analog(&self) -> Option<Vec2> {
        self.move_vector.filter(|v| *v != Vec2::ZERO)
    }

    pub fn is_moving(&self) -> bool {
        self.analog().is_some() || self.digital_direction() != Vec2::ZERO
    }
}
