// crates/game_plugin/src/systems/inventory.rs

use engine_ecs::{Entity, World};
use engine_shared::{CDraggable, CInventorySlot, CTransform};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Slotted(Entity),
    Returned,
}

/// Settles a released item: the first active slot under it with room takes
/// it, otherwise it goes back to where the drag began.
pub fn drop_item(world: &mut World, item: Entity) -> DropOutcome {
    let Some(item_pos) = world.get_component::<CTransform>(item).map(|t| t.pos) else {
        return DropOutcome::Returned;
    };

    let mut accepting = None;
    if let Some(slots) = world.query::<CInventorySlot>() {
        for (slot_entity, slot) in slots.iter() {
            if !world.is_active(*slot_entity) {
                continue;
            }
            let over = world
                .get_component::<CTransform>(*slot_entity)
                .is_some_and(|t| t.contains(item_pos));
            if over && (slot.has_room() || slot.holds(item)) {
                accepting = Some(*slot_entity);
                break;
            }
        }
    }

    match accepting {
        Some(slot_entity) => {
            place_in_slot(world, item, slot_entity);
            debug!(?item, slot = ?slot_entity, "item slotted");
            DropOutcome::Slotted(slot_entity)
        }
        None => {
            let origin = world.get_component::<CDraggable>(item).map(|d| d.origin);
            if let (Some(origin), Some(transform)) =
                (origin, world.get_component_mut::<CTransform>(item))
            {
                transform.pos = origin;
            }
            debug!(?item, "no slot accepted item; returned to origin");
            DropOutcome::Returned
        }
    }
}

fn place_in_slot(world: &mut World, item: Entity, slot_entity: Entity) {
    if let Some(slots) = world.query_mut::<CInventorySlot>() {
        for (owner, slot) in slots.iter_mut() {
            if *owner != slot_entity {
                slot.items.retain(|&i| i != item);
            } else if !slot.holds(item) {
                slot.items.push(item);
            }
        }
    }

    let center = world.get_component::<CTransform>(slot_entity).map(|t| t.pos);
    if let (Some(center), Some(transform)) = (center, world.get_component_mut::<CTransform>(item)) {
        transform.pos = center;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn world() -> World {
        let mut world = World::new();
        world.register_component::<CTransform>();
        world.register_component::<CDraggable>();
        world.register_component::<CInventorySlot>();
        world
    }

    fn slot(world: &mut World, x: f32, capacity: usize) -> Entity {
        let e = world.spawn();
        world.add_component(e, CTransform::at(Vec2::new(x, 0.0), Vec2::splat(20.0)));
        world.add_component(e, CInventorySlot::with_capacity(capacity));
        e
    }

    fn item(world: &mut World, origin: Vec2, at: Vec2) -> Entity {
        let e = world.spawn();
        world.add_component(e, CTransform::at(at, Vec2::splat(10.0)));
        world.add_component(e, CDraggable { origin, ..Default::default() });
        e
    }

    fn items_in(world: &World, slot: Entity) -> Vec<Entity> {
        world
            .get_component::<CInventorySlot>(slot)
            .map(|s| s.items.clone())
            .unwrap_or_default()
    }

    #[test]
    fn item_snaps_into_slot_center() {
        let mut w = world();
        let s = slot(&mut w, 100.0, 1);
        let i = item(&mut w, Vec2::ZERO, Vec2::new(105.0, 3.0));

        assert_eq!(drop_item(&mut w, i), DropOutcome::Slotted(s));
        assert_eq!(items_in(&w, s), vec![i]);
        assert_eq!(w.get_component::<CTransform>(i).map(|t| t.pos), Some(Vec2::new(100.0, 0.0)));
    }

    #[test]
    fn full_slot_sends_item_home() {
        let mut w = world();
        let s = slot(&mut w, 100.0, 1);
        let first = item(&mut w, Vec2::ZERO, Vec2::new(100.0, 0.0));
        drop_item(&mut w, first);

        let second = item(&mut w, Vec2::new(-50.0, 0.0), Vec2::new(100.0, 0.0));
        assert_eq!(drop_item(&mut w, second), DropOutcome::Returned);
        assert_eq!(items_in(&w, s), vec![first]);
        assert_eq!(
            w.get_component::<CTransform>(second).map(|t| t.pos),
            Some(Vec2::new(-50.0, 0.0))
        );
    }

    #[test]
    fn moving_between_slots_keeps_single_membership() {
        let mut w = world();
        let a = slot(&mut w, 0.0, 1);
        let b = slot(&mut w, 100.0, 1);
        let i = item(&mut w, Vec2::ZERO, Vec2::ZERO);
        drop_item(&mut w, i);
        assert_eq!(items_in(&w, a), vec![i]);

        if let Some(t) = w.get_component_mut::<CTransform>(i) {
            t.pos = Vec2::new(95.0, 0.0);
        }
        assert_eq!(drop_item(&mut w, i), DropOutcome::Slotted(b));
        assert!(items_in(&w, a).is_empty());
        assert_eq!(items_in(&w, b), vec![i]);
    }

    #[test]
    fn redropping_into_own_full_slot_is_accepted() {
        let mut w = world();
        let s = slot(&mut w, 0.0, 1);
        let i = item(&mut w, Vec2::ZERO, Vec2::ZERO);
        drop_item(&mut w, i);
        assert_eq!(drop_item(&mut w, i), DropOutcome::Slotted(s));
        assert_eq!(items_in(&w, s).len(), 1);
    }

    #[test]
    fn inactive_slot_is_skipped() {
        let mut w = world();
        let s = slot(&mut w, 0.0, 4);
        w.set_active(s, false);
        let i = item(&mut w, Vec2::new(500.0, 0.0), Vec2::ZERO);
        assert_eq!(drop_item(&mut w, i), DropOutcome::Returned);
    }
}
