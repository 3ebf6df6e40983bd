// crates/engine_shared/src/components.rs
use engine_ecs::Entity;
use glam::Vec2;

use crate::input_types::ActionId;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CTransform {
    pub pos: Vec2,
    /// Half extents of the entity's axis-aligned area, used for pointer hits
    /// and drop-target overlap.
    pub scale: Vec2,
    pub rotation: f32,
}

impl Default for CTransform {
    fn default() -> Self {
        Self { pos: Vec2::ZERO, scale: Vec2::ONE, rotation: 0.0 }
    }
}

impl CTransform {
    pub fn at(pos: Vec2, half_extents: Vec2) -> Self {
        Self { pos, scale: half_extents, rotation: 0.0 }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        let d = (point - self.pos).abs();
        d.x <= self.scale.x && d.y <= self.scale.y
    }
}

/// Capability: an entity that can be picked up and moved with the pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CDraggable {
    pub dragging: bool,
    /// Where the item sat when the current drag began; it returns here when
    /// no slot accepts it.
    pub origin: Vec2,
    /// Pointer-to-item offset captured at drag start so the item doesn't jump.
    pub grab_offset: Vec2,
}

impl CDraggable {
    pub fn begin_drag(&mut self, current_pos: Vec2, pointer: Vec2) {
        self.dragging = true;
        self.origin = current_pos;
        self.grab_offset = current_pos - pointer;
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }
}

/// Drop target with a fixed capacity.
#[derive(Clone, Debug, PartialEq)]
pub struct CInventorySlot {
    pub capacity: usize,
    pub items: Vec<Entity>,
}

impl CInventorySlot {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { capacity, items: Vec::with_capacity(capacity) }
    }

    pub fn has_room(&self) -> bool {
        self.items.len() < self.capacity
    }

    pub fn holds(&self, item: Entity) -> bool {
        self.items.contains(&item)
    }
}

/// Slide-out menu switch. `panel` is the entity shown and hidden.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CMenuToggle {
    pub panel: Option<Entity>,
    pub open: bool,
}

/// Tag: children of this entity start inactive.
#[derive(Clone, Copy, Debug, Default)]
pub struct CDisableChildrenOnLoad;

#[derive(Clone, Debug, PartialEq)]
pub struct CAudioTrigger {
    pub clip: String,
    pub volume: f32,
    pub action: ActionId,
}
