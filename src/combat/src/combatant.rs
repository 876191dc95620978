// src/combat/src/combatant.rs

/// Something with a health pool that projectiles and contact can damage.
pub trait Combatant {
    /// Current health; may go negative on the killing blow.
    fn health(&self) -> f32;

    fn max_health(&self) -> f32;

    /// Subtracts `amount` without clamping.
    fn take_damage(&mut self, amount: f32);

    fn is_alive(&self) -> bool {
        self.health() > 0.0
    }

    /// Health as a fraction of the maximum, clamped to `0.0..=1.0`.
    fn health_fraction(&self) -> f32 {
        if self.max_health() <= 0.0 {
            return 0.0;
        }
        (self.health() / self.max_health()).clamp(0.0, 1.0)
    }
}
