// src/dungeon/src/room.rs
use rand::Rng;

/// Rectangular carved region in tile coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Room {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Room {
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Centre tile of the room.
    pub fn center(&self) -> (usize, usize) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Whether this room overlaps `other` grown by one tile on every side.
    ///
    /// Coordinates are widened to `i64` because the padded rectangle can
    /// reach column/row -1.
    pub fn intersects_padded(&self, other: &Self) -> bool {
        let (ax, ay) = (self.x as i64, self.y as i64);
        let (aw, ah) = (self.width as i64, self.height as i64);
        let (bx, by) = (other.x as i64 - 1, other.y as i64 - 1);
        let (bw, bh) = (other.width as i64 + 2, other.height as i64 + 2);
        ax < bx + bw && ax + aw > bx && ay < by + bh && ay + ah > by
    }

    /// Plain overlap without padding.
    pub fn intersects(&self, other: &Self) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// Random tile strictly inside the room's one-tile rim.
    ///
    /// Rooms narrower than three tiles fall back to their centre.
    pub fn random_interior_tile(&self, rng: &mut impl Rng) -> (usize, usize) {
        if self.width < 3 || self.height < 3 {
            return self.center();
        }
        let x = rng.random_range(self.x + 1..=self.x + self.width - 2);
        let y = rng.random_range(self.y + 1..=self.y + self.height - 2);
        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn center_uses_integer_halves() {
        assert_eq!(Room::new(2, 4, 7, 6).center(), (5, 7));
    }

    #[test]
    fn padding_catches_adjacent_rooms() {
        let a = Room::new(1, 1, 6, 6);
        let touching = Room::new(7, 1, 6, 6);
        let gap = Room::new(8, 1, 6, 6);
        assert!(!a.intersects(&touching));
        assert!(touching.intersects_padded(&a));
        assert!(!gap.intersects_padded(&a));
    }

    #[test]
    fn interior_tiles_stay_off_the_rim() {
        let room = Room::new(10, 20, 6, 8);
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..200 {
            let (x, y) = room.random_interior_tile(&mut rng);
            assert!((11..=14).contains(&x), "x = {x}");
            assert!((21..=26).contains(&y), "y = {y}");
        }
    }
}
