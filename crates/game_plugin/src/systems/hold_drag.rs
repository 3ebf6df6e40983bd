// crates/game_plugin/src/systems/hold_drag.rs

use engine_ecs::{Entity, World};
use engine_shared::{ActionId, CDraggable, CTransform, InputState};
use glam::Vec2;
use tracing::debug;

use crate::systems::inventory;
use crate::timers::{DragSignal, GestureTimer, HoldState};

/// Hold-to-drag behaviour for an owner whose first child is the item.
pub struct CHoldToDrag {
    pub timer: GestureTimer,
    /// Pointer action that presses and releases.
    pub button: ActionId,
}

pub fn update_hold_drag(world: &mut World, input: &InputState, dt: f32) {
    bind_targets(world);

    // 1. Which owners does the pointer press land on?
    let mut pressed_owners = Vec::new();
    if let Some(holds) = world.query::<CHoldToDrag>() {
        for (owner, hold) in holds.iter() {
            if input.just_pressed(hold.button)
                && world.is_active(*owner)
                && pointer_hits(world, *owner, hold.timer.target(), input.pointer)
            {
                pressed_owners.push(*owner);
            }
        }
    }

    // 2. Drive the timers
    let mut signals = Vec::new();
    if let Some(holds) = world.query_mut::<CHoldToDrag>() {
        for (owner, hold) in holds.iter_mut() {
            // Both edges in one step: a button still held was released and
            // pressed again, otherwise it was pressed and released.
            let released = input.just_released(hold.button);
            let held = input.is_active(hold.button);

            if released && held {
                release_hold(hold, *owner, &mut signals);
            }
            if pressed_owners.contains(owner) {
                hold.timer.press();
                debug!(?owner, "hold started");
            }
            if released && !held {
                release_hold(hold, *owner, &mut signals);
            }

            signals.extend(hold.timer.tick(dt));
        }
    }

    // 3. Apply to the items
    for signal in signals {
        apply_signal(world, signal, input.pointer);
    }
}

/// Only the owner that took the press hears the release.
fn release_hold(hold: &mut CHoldToDrag, owner: Entity, signals: &mut Vec<DragSignal>) {
    if hold.timer.state() != HoldState::Idle {
        signals.extend(hold.timer.release());
        debug!(?owner, "hold released");
    }
}

/// Offers each unresolved timer its owner's first child.
fn bind_targets(world: &mut World) {
    let mut lookups = Vec::new();
    if let Some(holds) = world.query::<CHoldToDrag>() {
        for (owner, hold) in holds.iter() {
            if !hold.timer.needs_binding() {
                continue;
            }
            let first_child = world.first_child(*owner);
            let draggable = first_child.is_some_and(|c| world.has_component::<CDraggable>(c));
            lookups.push((*owner, first_child, draggable));
        }
    }

    for (owner, first_child, draggable) in lookups {
        if let Some(hold) = world.get_component_mut::<CHoldToDrag>(owner) {
            hold.timer.resolve_with(first_child, |_| draggable);
        }
    }
}

fn pointer_hits(world: &World, owner: Entity, target: Option<Entity>, pointer: Vec2) -> bool {
    // The item moves between slots, so prefer its area over the owner's.
    let area = target
        .and_then(|t| world.get_component::<CTransform>(t))
        .or_else(|| world.get_component::<CTransform>(owner));
    area.is_some_and(|t| t.contains(pointer))
}

fn apply_signal(world: &mut World, signal: DragSignal, pointer: Vec2) {
    match signal {
        DragSignal::Begin(item) => {
            let pos = world
                .get_component::<CTransform>(item)
                .map(|t| t.pos)
                .unwrap_or(pointer);
            if let Some(drag) = world.get_component_mut::<CDraggable>(item) {
                drag.begin_drag(pos, pointer);
                debug!(?item, "drag begin");
            }
        }
        DragSignal::End(item) => {
            let was_dragging = world
                .get_component_mut::<CDraggable>(item)
                .map(|drag| {
                    let was = drag.dragging;
                    drag.end_drag();
                    was
                })
                .unwrap_or(false);
            debug!(?item, was_dragging, "drag end");
            if was_dragging {
                inventory::drop_item(world, item);
            }
        }
    }
}

/// Moves every item being dragged to the pointer, keeping its grab offset.
pub fn follow_pointer(world: &mut World, pointer: Vec2) {
    let mut moves = Vec::new();
    if let Some(drags) = world.query::<CDraggable>() {
        for (item, drag) in drags.iter() {
            if drag.dragging {
                moves.push((*item, pointer + drag.grab_offset));
            }
        }
    }

    for (item, pos) in moves {
        if let Some(transform) = world.get_component_mut::<CTransform>(item) {
            transform.pos = pos;
        }
    }
}
