// crates/game_plugin/src/timers/gesture.rs
//! Hold-then-drag recognizer.
//!
//! `Idle -(press)-> Holding -(elapsed >= threshold)-> Dragging -(release)-> Idle`
//! and `Holding -(release)-> Idle` for a tap. The timer never touches the
//! world: it returns `DragSignal`s for the caller to apply to the target.

use engine_ecs::Entity;
use engine_shared::ReleaseNotifier;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldState {
    Idle,
    Holding,
    Dragging,
}

/// Result of looking up the draggable child. The first lookup outcome is
/// cached, including a negative one, until `rebind` is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetBinding {
    Unresolved,
    Bound(Entity),
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragSignal {
    Begin(Entity),
    End(Entity),
}

pub struct GestureTimer {
    hold_threshold: f32,
    elapsed: f32,
    state: HoldState,
    binding: TargetBinding,
    notifier: ReleaseNotifier,
}

impl GestureTimer {
    pub fn new(hold_threshold: f32, notifier: ReleaseNotifier) -> Self {
        Self {
            hold_threshold,
            elapsed: 0.0,
            state: HoldState::Idle,
            binding: TargetBinding::Unresolved,
            notifier,
        }
    }

    pub fn hold_threshold(&self) -> f32 {
        self.hold_threshold
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn state(&self) -> HoldState {
        self.state
    }

    pub fn binding(&self) -> TargetBinding {
        self.binding
    }

    pub fn target(&self) -> Option<Entity> {
        match self.binding {
            TargetBinding::Bound(entity) => Some(entity),
            _ => None,
        }
    }

    pub fn needs_binding(&self) -> bool {
        self.binding == TargetBinding::Unresolved
    }

    /// One-time binding step. With no child yet the timer stays unresolved
    /// and may be offered a child later; once a child has been inspected the
    /// outcome sticks.
    pub fn resolve_with(
        &mut self,
        first_child: Option<Entity>,
        has_capability: impl FnOnce(Entity) -> bool,
    ) {
        if !self.needs_binding() {
            return;
        }
        let Some(child) = first_child else { return };

        self.binding = if has_capability(child) {
            debug!(?child, "hold-to-drag target bound");
            TargetBinding::Bound(child)
        } else {
            debug!(?child, "first child is not draggable; drag disabled for this owner");
            TargetBinding::NotFound
        };
    }

    /// Forget the cached lookup, e.g. after the owner's children changed.
    pub fn rebind(&mut self) {
        self.binding = TargetBinding::Unresolved;
    }

    pub fn press(&mut self) {
        self.state = HoldState::Holding;
        self.elapsed = 0.0;
    }

    /// Advances the hold. Returns `Begin` on the tick the threshold is
    /// crossed and a target is bound; the state moves to `Dragging` either way
    /// so a single hold never begins twice.
    pub fn tick(&mut self, dt: f32) -> Option<DragSignal> {
        if self.state != HoldState::Holding {
            return None;
        }

        self.elapsed += dt.max(0.0);
        if self.elapsed < self.hold_threshold {
            return None;
        }

        self.state = HoldState::Dragging;
        self.elapsed = 0.0;
        self.target().map(DragSignal::Begin)
    }

    /// Ends the gesture from any state. With a bound target this yields
    /// `End` and raises the item-released notification.
    pub fn release(&mut self) -> Option<DragSignal> {
        let signal = self.target().map(|target| {
            self.notifier.item_released();
            DragSignal::End(target)
        });

        self.elapsed = 0.0;
        self.state = HoldState::Idle;
        signal
    }
}
