// src/scene.rs
use combat::{EnemyKind, Faction};
use dungeon::{Collidable, Rect, Theme};
use glam::Vec2;

use crate::camera::Camera;
use crate::systems::World;

/// What a drawable represents; renderers pick glyphs and colours from it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DrawKind {
    Wall,
    Portal,
    Enemy(EnemyKind),
    Projectile(Faction),
    Player,
}

/// One thing to draw, already in screen pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Drawable {
    pub kind: DrawKind,
    pub rect: Rect,
}

/// Screen-space view of the world for one frame, back to front.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub screen: Vec2,
    pub theme: Theme,
    pub drawables: Vec<Drawable>,
}

impl Scene {
    /// Collects everything the camera can see: walls, portal, enemies,
    /// projectiles, then the player on top.
    pub fn capture(world: &World, camera: &Camera, theme: Theme) -> Self {
        let level = &world.level;
        let mut drawables = Vec::new();
        let mut push = |kind: DrawKind, rect: &Rect| {
            if camera.sees(rect) {
                drawables.push(Drawable {
                    kind,
                    rect: camera.rect_to_screen(rect),
                });
            }
        };

        for wall in level.walls.iter() {
            push(DrawKind::Wall, &wall);
        }
        if let Some(portal) = &level.portal {
            push(DrawKind::Portal, portal.body());
        }
        for enemy in &level.enemies {
            push(DrawKind::Enemy(enemy.kind), enemy.body());
        }
        for shot in level.player_shots.iter().chain(&level.enemy_shots) {
            push(DrawKind::Projectile(shot.faction), shot.body());
        }
        push(DrawKind::Player, world.player.body());

        Self {
            screen: camera.screen_size(),
            theme,
            drawables,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;
    use combat::Enemy;
    use dungeon::THEMES;
    use hero::Player;

    #[test]
    fn player_is_drawn_last_in_screen_space() {
        let level = Level::arena(20, 15, 48.0);
        let world = World {
            player: Player::new(Vec2::new(480.0, 360.0)),
            level,
        };
        let camera = Camera::new(Vec2::new(1024.0, 768.0), Vec2::new(960.0, 720.0));
        let scene = Scene::capture(&world, &camera, THEMES[0]);

        let last = scene.drawables.last().unwrap();
        assert_eq!(last.kind, DrawKind::Player);
        assert_eq!(last.rect.center(), Vec2::new(480.0, 360.0));
        let walls = scene
            .drawables
            .iter()
            .filter(|d| d.kind == DrawKind::Wall)
            .count();
        assert_eq!(walls, world.level.walls.len());
    }

    #[test]
    fn offscreen_enemies_are_culled() {
        let mut level = Level::arena(50, 50, 48.0);
        level
            .enemies
            .push(Enemy::new(EnemyKind::Dasher, Vec2::new(2000.0, 2000.0), 1.0));
        level
            .enemies
            .push(Enemy::new(EnemyKind::Bomber, Vec2::new(300.0, 300.0), 1.0));
        let world = World {
            player: Player::new(Vec2::new(200.0, 200.0)),
            level,
        };
        let mut camera = Camera::new(Vec2::new(1024.0, 768.0), Vec2::new(2400.0, 2400.0));
        camera.update(world.player.position());
        let scene = Scene::capture(&world, &camera, THEMES[1]);

        let enemies: Vec<_> = scene
            .drawables
            .iter()
            .filter_map(|d| match d.kind {
                DrawKind::Enemy(kind) => Some(kind),
                _ => None,
            })
            .collect();
        assert_eq!(enemies, vec![EnemyKind::Bomber]);
    }
}
