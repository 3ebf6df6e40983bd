// crates/engine_core/src/input/poller.rs

use engine_shared::InputState;
use glam::Vec2;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::input::InputMap;

/// Low-level input collector. Tracks which physical keys and buttons are
/// down plus the edges seen since the last consumed snapshot.
#[derive(Default)]
pub struct InputPoller {
    active_keys: Vec<KeyCode>,
    active_buttons: Vec<MouseButton>,
    pressed_keys: Vec<KeyCode>,
    released_keys: Vec<KeyCode>,
    pressed_buttons: Vec<MouseButton>,
    released_buttons: Vec<MouseButton>,
    cursor: Vec2,
}

impl InputPoller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a single winit WindowEvent and update internal state.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event: key_event, .. } => {
                self.handle_keyboard_input(key_event);
            }
            WindowEvent::MouseInput { state, button, .. } => match state {
                ElementState::Pressed => self.press_button(*button),
                ElementState::Released => self.release_button(*button),
            },
            WindowEvent::CursorMoved { position, .. } => {
                self.move_cursor(Vec2::new(position.x as f32, position.y as f32));
            }
            _ => {}
        }
    }

    fn handle_keyboard_input(&mut self, key_event: &KeyEvent) {
        if let PhysicalKey::Code(keycode) = key_event.physical_key {
            match key_event.state {
                ElementState::Pressed => self.press_key(keycode),
                ElementState::Released => self.release_key(keycode),
            }
        }
    }

    /// OS key repeat arrives as repeated presses; only the first one counts.
    pub fn press_key(&mut self, key: KeyCode) {
        if !self.active_keys.contains(&key) {
            self.active_keys.push(key);
            self.pressed_keys.push(key);
        }
    }

    pub fn release_key(&mut self, key: KeyCode) {
        if self.active_keys.contains(&key) {
            self.active_keys.retain(|&k| k != key);
            self.released_keys.push(key);
        }
    }

    pub fn press_button(&mut self, button: MouseButton) {
        if !self.active_buttons.contains(&button) {
            self.active_buttons.push(button);
            self.pressed_buttons.push(button);
        }
    }

    pub fn release_button(&mut self, button: MouseButton) {
        if self.active_buttons.contains(&button) {
            self.active_buttons.retain(|&b| b != button);
            self.released_buttons.push(button);
        }
    }

    pub fn move_cursor(&mut self, position: Vec2) {
        self.cursor = position;
    }

    pub fn is_key_active(&self, key: KeyCode) -> bool {
        self.active_keys.contains(&key)
    }

    /// Resolve raw device state into actions. Edges stay queued until
    /// `clear_edges`, so a frame that runs no simulation step loses nothing.
    pub fn snapshot(&self, input_map: &InputMap) -> InputState {
        let mut state = InputState { pointer: self.cursor, ..InputState::default() };

        for action in self.active_keys.iter().filter_map(|&k| input_map.action_for_key(k)) {
            state.set_held(action, true);
        }
        for action in self.active_buttons.iter().filter_map(|&b| input_map.action_for_button(b)) {
            state.set_held(action, true);
        }
        for action in self.pressed_keys.iter().filter_map(|&k| input_map.action_for_key(k)) {
            state.mark_pressed(action);
        }
        for action in self.pressed_buttons.iter().filter_map(|&b| input_map.action_for_button(b)) {
            state.mark_pressed(action);
        }
        for action in self.released_keys.iter().filter_map(|&k| input_map.action_for_key(k)) {
            state.mark_released(action);
        }
        for action in self.released_buttons.iter().filter_map(|&b| input_map.action_for_button(b)) {
            state.mark_released(action);
        }

        state
    }

    pub fn clear_edges(&mut self) {
        self.pressed_keys.clear();
        self.released_keys.clear();
        self.pressed_buttons.clear();
        self.released_buttons.clear();
    }
}
