// crates/game_plugin/src/systems/menu.rs

use engine_ecs::World;
use engine_shared::input_types::canonical_actions;
use engine_shared::{CMenuToggle, InputState};
use tracing::{debug, warn};

pub fn update_menu_toggles(world: &mut World, input: &InputState) {
    if !input.just_pressed(canonical_actions::TOGGLE_MENU) {
        return;
    }

    let toggles: Vec<_> = world
        .query::<CMenuToggle>()
        .map(|set| set.iter().map(|(e, _)| *e).collect())
        .unwrap_or_default();

    for toggle in toggles {
        if !world.is_active(toggle) {
            continue;
        }
        let Some(menu) = world.get_component::<CMenuToggle>(toggle).copied() else { continue };

        // Reported on every press, not just the first.
        let Some(panel) = menu.panel.filter(|p| world.is_alive(*p)) else {
            warn!(?toggle, "menu toggle has no panel assigned");
            continue;
        };

        let open = !menu.open;
        world.set_active(panel, open);
        if let Some(menu) = world.get_component_mut::<CMenuToggle>(toggle) {
            menu.open = open;
        }
        debug!(?panel, open, "menu toggled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toggle_press() -> InputState {
        let mut input = InputState::default();
        input.mark_pressed(canonical_actions::TOGGLE_MENU);
        input
    }

    #[test]
    fn toggle_flips_panel_visibility() {
        let mut world = World::new();
        world.register_component::<CMenuToggle>();
        let panel = world.spawn();
        world.set_active(panel, false);
        let button = world.spawn();
        world.add_component(button, CMenuToggle { panel: Some(panel), open: false });

        update_menu_toggles(&mut world, &toggle_press());
        assert!(world.is_active(panel));

        update_menu_toggles(&mut world, &InputState::default());
        assert!(world.is_active(panel));

        update_menu_toggles(&mut world, &toggle_press());
        assert!(!world.is_active(panel));
        assert_eq!(world.get_component::<CMenuToggle>(button).map(|m| m.open), Some(false));
    }

    #[test]
    fn missing_panel_changes_nothing() {
        let mut world = World::new();
        world.register_component::<CMenuToggle>();
        let button = world.spawn();
        world.add_component(button, CMenuToggle::default());

        update_menu_toggles(&mut world, &toggle_press());
        update_menu_toggles(&mut world, &toggle_press());
        assert_eq!(world.get_component::<CMenuToggle>(button).map(|m| m.open), Some(false));
    }
}
