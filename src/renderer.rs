//! Renderer seam and the ratatui terminal renderer.

use std::time::{Duration, Instant};

use combat::{EnemyKind, Faction};
use dungeon::Rect;
use error::GameResult;
use glam::Vec2;
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect as Area},
    style::{Color as TuiColor, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::game_loop::GameState;
use crate::hud::HudSnapshot;
use crate::scene::{DrawKind, Scene};

/// Draws a scene plus HUD. Implementations only see screen-space data.
pub trait Renderer {
    fn init(&mut self) -> GameResult<()>;

    fn draw(&mut self, scene: &Scene, hud: &HudSnapshot) -> GameResult<()>;

    fn cleanup(&mut self) -> GameResult<()>;
}

/// Time source for the frame loop.
pub trait Clock {
    fn now(&self) -> Instant;

    fn sleep(&self, duration: Duration);

    /// Target duration of one frame.
    fn tick_rate(&self) -> Duration;
}

pub struct GameClock {
    tick_rate: Duration,
}

impl GameClock {
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }
}

impl Clock for GameClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }

    fn tick_rate(&self) -> Duration {
        self.tick_rate
    }
}

fn rgb((r, g, b): (u8, u8, u8)) -> TuiColor {
    TuiColor::Rgb(r, g, b)
}

fn glyph(kind: DrawKind, scene: &Scene) -> (char, TuiColor) {
    match kind {
        DrawKind::Wall => ('#', rgb(scene.theme.wall)),
        DrawKind::Portal => ('O', TuiColor::Magenta),
        DrawKind::Enemy(EnemyKind::Melee) => ('m', TuiColor::Red),
        DrawKind::Enemy(EnemyKind::Ranged) => ('r', TuiColor::LightRed),
        DrawKind::Enemy(EnemyKind::Dasher) => ('d', TuiColor::Yellow),
        DrawKind::Enemy(EnemyKind::Bomber) => ('b', TuiColor::LightMagenta),
        DrawKind::Projectile(Faction::Player) => ('*', TuiColor::LightYellow),
        DrawKind::Projectile(Faction::Enemy) => ('o', TuiColor::LightRed),
        DrawKind::Player => ('@', TuiColor::LightGreen),
    }
}

/// Character-cell canvas the scene is rasterised into before drawing.
struct Canvas {
    width: u16,
    height: u16,
    cells: Vec<(char, TuiColor)>,
}

impl Canvas {
    fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![(' ', TuiColor::Reset); usize::from(width) * usize::from(height)],
        }
    }

    /// Fills every cell the pixel rect touches.
    fn paint(&mut self, rect: &Rect, cell: Vec2, glyph: (char, TuiColor)) {
        let x0 = (rect.left() / cell.x).floor() as i64;
        let y0 = (rect.top() / cell.y).floor() as i64;
        let x1 = ((rect.right() / cell.x).ceil() as i64 - 1).max(x0);
        let y1 = ((rect.bottom() / cell.y).ceil() as i64 - 1).max(y0);
        for y in y0.max(0)..=y1.min(i64::from(self.height) - 1) {
            for x in x0.max(0)..=x1.min(i64::from(self.width) - 1) {
                self.cells[y as usize * usize::from(self.width) + x as usize] = glyph;
            }
        }
    }

    fn into_lines(self, floor: TuiColor) -> Vec<Line<'static>> {
        self.cells
            .chunks(usize::from(self.width.max(1)))
            .map(|row| {
                Line::from(
                    row.iter()
                        .map(|&(ch, fg)| {
                            Span::styled(ch.to_string(), Style::default().fg(fg).bg(floor))
                        })
                        .collect::<Vec<_>>(),
                )
            })
            .collect()
    }
}

/// Renders to any ratatui backend, one terminal cell per `cell` pixels.
pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
    cell: Vec2,
}

impl<B: Backend> TerminalRenderer<B> {
    pub fn new(backend: B, cell: Vec2) -> GameResult<Self> {
        Ok(Self {
            terminal: Terminal::new(backend)?,
            cell,
        })
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    fn render(frame: &mut Frame<'_>, cell: Vec2, scene: &Scene, hud: &HudSnapshot) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(frame.area());

        let map_area = chunks[0];
        let mut canvas = Canvas::new(map_area.width, map_area.height);
        for drawable in &scene.drawables {
            canvas.paint(&drawable.rect, cell, glyph(drawable.kind, scene));
        }
        frame.render_widget(
            Paragraph::new(canvas.into_lines(rgb(scene.theme.floor))),
            map_area,
        );

        let status = match hud.tutorial_step {
            Some(step) if hud.state == GameState::Tutorial => {
                format!("Step {}/6: {} | Esc menu", step.number(), step.hint())
            }
            _ => hud.status_line(),
        };
        frame.render_widget(
            Paragraph::new(status).style(Style::default().fg(TuiColor::White)),
            chunks[1],
        );

        match hud.state {
            GameState::Menu => Self::render_popup(
                frame,
                map_area,
                "Soul Guardian",
                vec![
                    Line::from("Enter  start / resume"),
                    Line::from("T      tutorial"),
                    Line::from("R      new run"),
                    Line::from("Esc    quit"),
                    Line::from(""),
                    Line::from("WASD move, arrows or click shoot"),
                    Line::from("Q switch weapon, Space dash"),
                ],
            ),
            GameState::GameOver => Self::render_popup(
                frame,
                map_area,
                "Game Over",
                vec![
                    Line::from(Span::styled(
                        "GAME OVER",
                        Style::default()
                            .fg(TuiColor::Red)
                            .add_modifier(Modifier::BOLD),
                    )),
                    Line::from(format!("Score {}  Level {}", hud.score, hud.level)),
                    Line::from(""),
                    Line::from("R  restart   Esc  menu"),
                ],
            ),
            GameState::Playing | GameState::Tutorial => {}
        }
    }

    fn render_popup(frame: &mut Frame<'_>, area: Area, title: &str, lines: Vec<Line<'_>>) {
        let width = area.width.min(40);
        let height = area.height.min(lines.len() as u16 + 2);
        let popup = Area::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        );
        frame.render_widget(Clear, popup);
        frame.render_widget(
            Paragraph::new(lines).block(Block::default().title(title).borders(Borders::ALL)),
            popup,
        );
    }
}

impl<B: Backend> Renderer for TerminalRenderer<B> {
    fn init(&mut self) -> GameResult<()> {
        self.terminal.clear()?;
        self.terminal.hide_cursor()?;
        Ok(())
    }

    fn draw(&mut self, scene: &Scene, hud: &HudSnapshot) -> GameResult<()> {
        let cell = self.cell;
        self.terminal
            .draw(|frame| Self::render(frame, cell, scene, hud))?;
        Ok(())
    }

    fn cleanup(&mut self) -> GameResult<()> {
        self.terminal.show_cursor()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paint_covers_touched_cells_only() {
        let mut canvas = Canvas::new(10, 5);
        canvas.paint(&Rect::new(12.0, 24.0, 12.0, 24.0), Vec2::new(12.0, 24.0), ('#', TuiColor::Red));
        let painted: Vec<usize> = canvas
            .cells
            .iter()
            .enumerate()
            .filter(|(_, (ch, _))| *ch == '#')
            .map(|(i, _)| i)
            .collect();
        assert_eq!(painted, vec![11]);
    }

    #[test]
    fn tiny_rects_still_show_and_offscreen_is_clipped() {
        let mut canvas = Canvas::new(4, 4);
        let cell = Vec2::new(12.0, 24.0);
        canvas.paint(&Rect::new(13.0, 25.0, 2.0, 2.0), cell, ('*', TuiColor::Yellow));
        canvas.paint(&Rect::new(-100.0, -100.0, 20.0, 20.0), cell, ('x', TuiColor::Yellow));
        canvas.paint(&Rect::new(500.0, 10.0, 20.0, 20.0), cell, ('x', TuiColor::Yellow));
        assert_eq!(canvas.cells[5].0, '*');
        assert!(canvas.cells.iter().all(|(ch, _)| *ch != 'x'));
    }
}
