//! Frame input: what the simulation consumes each frame, and a crossterm
//! source that produces it from raw terminal events.

use std::collections::HashMap;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use error::GameResult;
use glam::Vec2;
use hero::InputSnapshot;

/// How the player asked to fire this frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FireTrigger {
    /// Aim at a screen position (mouse click).
    At(Vec2),
    /// Aim along a direction (aim keys or an analog stick).
    Toward(Vec2),
}

/// Discrete state-machine commands.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuCommand {
    Start,
    Tutorial,
    Restart,
    /// Leave the current screen; quits from the menu.
    Back,
    /// Quit from anywhere.
    Quit,
}

/// Everything the simulation reads for one frame.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FrameInput {
    pub movement: InputSnapshot,
    pub fire: Option<FireTrigger>,
    pub switch_weapon: bool,
    pub command: Option<MenuCommand>,
}

/// Source of per-frame input.
pub trait InputSource {
    /// Drains pending events without blocking and returns this frame's input.
    fn poll_frame(&mut self) -> GameResult<FrameInput>;
}

/// Keys that count while held.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
enum Control {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    AimUp,
    AimDown,
    AimLeft,
    AimRight,
}

impl Control {
    fn from_key(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Char('w' | 'W') => Some(Control::MoveUp),
            KeyCode::Char('s' | 'S') => Some(Control::MoveDown),
            KeyCode::Char('a' | 'A') => Some(Control::MoveLeft),
            KeyCode::Char('d' | 'D') => Some(Control::MoveRight),
            KeyCode::Up => Some(Control::AimUp),
            KeyCode::Down => Some(Control::AimDown),
            KeyCode::Left => Some(Control::AimLeft),
            KeyCode::Right => Some(Control::AimRight),
            _ => None,
        }
    }
}

/// Turns a stream of terminal events into [`FrameInput`]s.
///
/// Most terminals never send key-up events. A key counts as held while its
/// last press or repeat is at most `hold_window` frames old; terminals that
/// do report releases drop the key immediately.
#[derive(Clone, Debug)]
pub struct KeyboardState {
    held: HashMap<Control, u64>,
    frame: u64,
    hold_window: u64,
    /// World pixels per terminal cell, for mapping clicks.
    cell: Vec2,
    skill: bool,
    switch_weapon: bool,
    command: Option<MenuCommand>,
    click: Option<Vec2>,
}

impl KeyboardState {
    pub fn new(hold_window: u64, cell: Vec2) -> Self {
        Self {
            held: HashMap::new(),
            frame: 0,
            hold_window,
            cell,
            skill: false,
            switch_weapon: false,
            command: None,
            click: None,
        }
    }

    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) {
        match key.kind {
            KeyEventKind::Release => {
                if let Some(control) = Control::from_key(key.code) {
                    self.held.remove(&control);
                }
            }
            KeyEventKind::Repeat => {
                if let Some(control) = Control::from_key(key.code) {
                    self.held.insert(control, self.frame);
                }
            }
            KeyEventKind::Press => {
                if let Some(control) = Control::from_key(key.code) {
                    self.held.insert(control, self.frame);
                    return;
                }
                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        self.command = Some(MenuCommand::Quit);
                    }
                    KeyCode::Char(' ') => self.skill = true,
                    KeyCode::Char('q' | 'Q') => self.switch_weapon = true,
                    KeyCode::Enter => self.command = Some(MenuCommand::Start),
                    KeyCode::Char('t' | 'T') => self.command = Some(MenuCommand::Tutorial),
                    KeyCode::Char('r' | 'R') => self.command = Some(MenuCommand::Restart),
                    KeyCode::Esc => self.command = Some(MenuCommand::Back),
                    _ => {}
                }
            }
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            let cell = Vec2::new(f32::from(mouse.column), f32::from(mouse.row));
            self.click = Some((cell + Vec2::splat(0.5)) * self.cell);
        }
    }

    fn is_held(&self, control: Control) -> bool {
        self.held
            .get(&control)
            .is_some_and(|&last| self.frame.saturating_sub(last) <= self.hold_window)
    }

    /// Builds this frame's input, clears one-shot presses and moves on to
    /// the next frame.
    pub fn end_frame(&mut self) -> FrameInput {
        let movement = InputSnapshot {
            up: self.is_held(Control::MoveUp),
            down: self.is_held(Control::MoveDown),
            left: self.is_held(Control::MoveLeft),
            right: self.is_held(Control::MoveRight),
            move_vector: None,
            skill: self.skill,
        };

        let mut aim = Vec2::ZERO;
        if self.is_held(Control::AimUp) {
            aim.y -= 1.0;
        }
        if self.is_held(Control::AimDown) {
            aim.y += 1.0;
        }
        if self.is_held(Control::AimLeft) {
            aim.x -= 1.0;
        }
        if self.is_held(Control::AimRight) {
            aim.x += 1.0;
        }
        let fire = match self.click.take() {
            Some(position) => Some(FireTrigger::At(position)),
            None if aim != Vec2::ZERO => Some(FireTrigger::Toward(aim)),
            None => None,
        };

        let input = FrameInput {
            movement,
            fire,
            switch_weapon: std::mem::take(&mut self.switch_weapon),
            command: self.command.take(),
        };
        self.skill = false;
        let frame = self.frame;
        self.held
            .retain(|_, last| frame.saturating_sub(*last) <= self.hold_window);
        self.frame += 1;
        input
    }
}

/// Crossterm-backed input; the terminal must already be in raw mode.
pub struct TerminalInput {
    keys: KeyboardState,
}

impl TerminalInput {
    pub fn new(hold_window: u64, cell: Vec2) -> Self {
        Self {
            keys: KeyboardState::new(hold_window, cell),
        }
    }
}

impl InputSource for TerminalInput {
    fn poll_frame(&mut self) -> GameResult<FrameInput> {
        while event::poll(Duration::ZERO)? {
            let event = event::read()?;
            self.keys.handle_event(&event);
        }
        Ok(self.keys.end_frame())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn release(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new_with_kind(
            code,
            KeyModifiers::NONE,
            KeyEventKind::Release,
        ))
    }

    #[test]
    fn pressed_key_stays_held_for_the_window() {
        let mut keys = KeyboardState::new(3, Vec2::new(12.0, 24.0));
        keys.handle_event(&press(KeyCode::Char('w')));
        for _ in 0..=3 {
            assert!(keys.end_frame().movement.up);
        }
        assert!(!keys.end_frame().movement.up);
    }

    #[test]
    fn release_drops_key_at_once() {
        let mut keys = KeyboardState::new(10, Vec2::ONE);
        keys.handle_event(&press(KeyCode::Char('d')));
        assert!(keys.end_frame().movement.right);
        keys.handle_event(&release(KeyCode::Char('d')));
        assert!(!keys.end_frame().movement.right);
    }

    #[test]
    fn one_shot_keys_last_one_frame() {
        let mut keys = KeyboardState::new(10, Vec2::ONE);
        keys.handle_event(&press(KeyCode::Char(' ')));
        keys.handle_event(&press(KeyCode::Char('q')));
        keys.handle_event(&press(KeyCode::Esc));
        let first = keys.end_frame();
        assert!(first.movement.skill && first.switch_weapon);
        assert_eq!(first.command, Some(MenuCommand::Back));

        let second = keys.end_frame();
        assert_eq!(second, FrameInput::default());
    }

    #[test]
    fn aim_keys_fire_toward_their_direction() {
        let mut keys = KeyboardState::new(10, Vec2::ONE);
        keys.handle_event(&press(KeyCode::Up));
        keys.handle_event(&press(KeyCode::Right));
        assert_eq!(
            keys.end_frame().fire,
            Some(FireTrigger::Toward(Vec2::new(1.0, -1.0)))
        );
    }

    #[test]
    fn click_maps_to_cell_centre() {
        let mut keys = KeyboardState::new(10, Vec2::new(12.0, 24.0));
        keys.handle_event(&Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 10,
            row: 2,
            modifiers: KeyModifiers::NONE,
        }));
        assert_eq!(
            keys.end_frame().fire,
            Some(FireTrigger::At(Vec2::new(126.0, 60.0)))
        );
    }
}
