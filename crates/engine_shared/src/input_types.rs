// crates/engine_shared/src/input_types.rs
//! Compact input types passed from the host to gameplay code each step.

use glam::Vec2;

/// Stable Integer ID for Actions
pub type ActionId = u32;
pub const ACTION_NOT_FOUND: ActionId = u32::MAX;

/// IDs the host registers first, in this order, so gameplay code can use
/// them without a lookup.
pub mod canonical_actions {
    use super::ActionId;

    pub const POINTER_PRIMARY: ActionId = 0;
    pub const SHOCKWAVE: ActionId = 1;
    pub const TOGGLE_MENU: ActionId = 2;
    pub const PLAY_SOUND: ActionId = 3;
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputState {
    /// Bitmask for up to 64 digital actions currently held.
    pub held_mask: u64,
    /// Actions that went down since the previous frame.
    pub pressed_mask: u64,
    /// Actions that went up since the previous frame.
    pub released_mask: u64,
    /// Pointer position in world units.
    pub pointer: Vec2,
}

fn bit(action_id: ActionId) -> u64 {
    // Out-of-range ids (including ACTION_NOT_FOUND) map to no bit.
    if (action_id as usize) < 64 { 1u64 << action_id } else { 0 }
}

impl InputState {
    pub fn is_active(&self, action_id: ActionId) -> bool {
        self.held_mask & bit(action_id) != 0
    }

    pub fn just_pressed(&self, action_id: ActionId) -> bool {
        self.pressed_mask & bit(action_id) != 0
    }

    pub fn just_released(&self, action_id: ActionId) -> bool {
        self.released_mask & bit(action_id) != 0
    }

    /// Same held state and pointer, edges cleared. Used for every simulation
    /// step after the first one in a frame so an edge is seen exactly once.
    pub fn without_edges(&self) -> Self {
        Self { pressed_mask: 0, released_mask: 0, ..*self }
    }

    pub fn set_held(&mut self, action_id: ActionId, held: bool) {
        if held {
            self.held_mask |= bit(action_id);
        } else {
            self.held_mask &= !bit(action_id);
        }
    }

    pub fn mark_pressed(&mut self, action_id: ActionId) {
        self.pressed_mask |= bit(action_id);
    }

    pub fn mark_released(&mut self, action_id: ActionId) {
        self.released_mask |= bit(action_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_ids_are_never_active() {
        let mut state = InputState::default();
        state.set_held(ACTION_NOT_FOUND, true);
        state.mark_pressed(64);
        assert_eq!(state, InputState::default());
        assert!(!state.is_active(ACTION_NOT_FOUND));
    }

    #[test]
    fn edges_are_dropped_but_hold_survives() {
        let mut state = InputState::default();
        state.set_held(canonical_actions::POINTER_PRIMARY, true);
        state.mark_pressed(canonical_actions::POINTER_PRIMARY);
        state.mark_released(canonical_actions::SHOCKWAVE);

        let next = state.without_edges();
        assert!(next.is_active(canonical_actions::POINTER_PRIMARY));
        assert!(!next.just_pressed(canonical_actions::POINTER_PRIMARY));
        assert!(!next.just_released(canonical_actions::SHOCKWAVE));
    }
}
