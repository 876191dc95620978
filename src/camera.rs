use dungeon::Rect;
use glam::Vec2;

/// World-to-screen transform that follows a target without leaving the map.
///
/// `offset` is added to world positions; it is always within
/// `[-(map - screen), 0]` on each axis when the map is larger than the screen.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    offset: Vec2,
    screen: Vec2,
    map: Vec2,
}

impl Camera {
    /// `screen` and `map` are pixel sizes.
    pub fn new(screen: Vec2, map: Vec2) -> Self {
        Self {
            offset: Vec2::ZERO,
            screen,
            map,
        }
    }

    /// Centres on `target`, then clamps so the viewport stays on the map.
    pub fn update(&mut self, target: Vec2) {
        let centred = self.screen / 2.0 - target;
        let x = centred.x.min(0.0).max(-(self.map.x - self.screen.x));
        let y = centred.y.min(0.0).max(-(self.map.y - self.screen.y));
        self.offset = Vec2::new(x, y);
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn screen_size(&self) -> Vec2 {
        self.screen
    }

    pub fn to_screen(&self, world: Vec2) -> Vec2 {
        world + self.offset
    }

    pub fn to_world(&self, screen: Vec2) -> Vec2 {
        screen - self.offset
    }

    pub fn rect_to_screen(&self, rect: &Rect) -> Rect {
        rect.offset(self.offset)
    }

    /// Whether any part of a world-space rect falls inside the viewport.
    pub fn sees(&self, rect: &Rect) -> bool {
        let view = Rect::new(-self.offset.x, -self.offset.y, self.screen.x, self.screen.y);
        view.intersects(rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera::new(Vec2::new(1024.0, 768.0), Vec2::new(2400.0, 2400.0))
    }

    #[test]
    fn centres_on_target_mid_map() {
        let mut cam = camera();
        cam.update(Vec2::new(1200.0, 1200.0));
        assert_eq!(cam.offset(), Vec2::new(-688.0, -816.0));
        assert_eq!(cam.to_screen(Vec2::new(1200.0, 1200.0)), Vec2::new(512.0, 384.0));
    }

    #[test]
    fn clamps_at_top_left() {
        let mut cam = camera();
        cam.update(Vec2::new(10.0, 10.0));
        assert_eq!(cam.offset(), Vec2::ZERO);
    }

    #[test]
    fn clamps_at_bottom_right() {
        let mut cam = camera();
        cam.update(Vec2::new(2390.0, 2390.0));
        assert_eq!(cam.offset(), Vec2::new(-1376.0, -1632.0));
    }

    #[test]
    fn screen_and_world_are_inverse() {
        let mut cam = camera();
        cam.update(Vec2::new(900.0, 700.0));
        let p = Vec2::new(37.0, 411.0);
        assert_eq!(cam.to_world(cam.to_screen(p)), p);
    }

    #[test]
    fn culls_offscreen_rects() {
        let mut cam = camera();
        cam.update(Vec2::new(10.0, 10.0));
        assert!(cam.sees(&Rect::new(1000.0, 700.0, 48.0, 48.0)));
        assert!(!cam.sees(&Rect::new(1100.0, 10.0, 48.0, 48.0)));
    }
}
