// crates/engine_core/src/input/map.rs
use std::collections::HashMap;
use winit::event::MouseButton;
use winit::keyboard::KeyCode;
use engine_shared::ActionId;

/// Physical keys and mouse buttons -> actions.
#[derive(Default)]
pub struct InputMap {
    key_bindings: HashMap<KeyCode, ActionId>,
    button_bindings: HashMap<MouseButton, ActionId>,
}

impl InputMap {
    pub fn bind_key(&mut self, key: KeyCode, action: ActionId) {
        self.key_bindings.insert(key, action);
    }

    pub fn bind_button(&mut self, button: MouseButton, action: ActionId) {
        self.button_bindings.insert(button, action);
    }

    pub fn action_for_key(&self, key: KeyCode) -> Option<ActionId> {
        self.key_bindings.get(&key).copied()
    }

    pub fn action_for_button(&self, button: MouseButton) -> Option<ActionId> {
        self.button_bindings.get(&button).copied()
    }
}
