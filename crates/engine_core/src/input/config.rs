// crates/engine_core/src/input/config.rs

use crate::input::{ActionRegistry, InputMap};
use engine_shared::input_types::canonical_actions;
use winit::event::MouseButton;
use winit::keyboard::KeyCode;

/// Centralized defaults for input configuration.
pub struct InputDefaults;

impl InputDefaults {
    /// Registers the canonical actions and their default bindings.
    ///
    /// IMPORTANT: registration order defines the numeric ids, which must
    /// match `canonical_actions`.
    pub fn setup(registry: &mut ActionRegistry, input_map: &mut InputMap) {
        let pointer = registry.register("PointerPrimary");
        let shockwave = registry.register("Shockwave");
        let toggle_menu = registry.register("ToggleMenu");
        let play_sound = registry.register("PlaySound");

        // Debug-only to avoid panics in Release.
        debug_assert_eq!(pointer, canonical_actions::POINTER_PRIMARY);
        debug_assert_eq!(shockwave, canonical_actions::SHOCKWAVE);
        debug_assert_eq!(toggle_menu, canonical_actions::TOGGLE_MENU);
        debug_assert_eq!(play_sound, canonical_actions::PLAY_SOUND);

        input_map.bind_button(MouseButton::Left, pointer);
        input_map.bind_key(KeyCode::Space, shockwave);
        input_map.bind_key(KeyCode::Tab, toggle_menu);
        input_map.bind_key(KeyCode::KeyP, play_sound);
    }
}
