// crates/game_plugin/src/state.rs

use engine_ecs::{Entity, World};
use engine_shared::input_types::canonical_actions;
use engine_shared::{
    CAudioTrigger, CDisableChildrenOnLoad, CDraggable, CInventorySlot, CMenuToggle, CTransform,
    GameConfig, GameLogic, HostContext, InputState, Material,
};
use glam::Vec2;
use tracing::info;

use crate::systems::{self, CHoldToDrag, CShockwave};
use crate::timers::GestureTimer;

/// Entities created by `setup_scene`, kept so the host and tests can look
/// at them.
#[derive(Debug, Clone, Copy)]
pub struct SceneHandles {
    pub slots: [Entity; 2],
    pub holder: Entity,
    pub item: Entity,
    pub shockwave: Entity,
    pub menu_button: Entity,
    pub menu_panel: Entity,
    pub hud: Entity,
    pub speaker: Entity,
}

pub struct PlaygroundGame {
    config: GameConfig,
    scene: Option<SceneHandles>,
}

impl PlaygroundGame {
    pub fn new(config: GameConfig) -> Self {
        Self { config, scene: None }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn scene(&self) -> Option<&SceneHandles> {
        self.scene.as_ref()
    }
}

impl Default for PlaygroundGame {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

fn ensure_registered<T: 'static>(world: &mut World) {
    if !world.is_registered::<T>() {
        world.register_component::<T>();
    }
}

fn register_components(world: &mut World) {
    ensure_registered::<CTransform>(world);
    ensure_registered::<CDraggable>(world);
    ensure_registered::<CInventorySlot>(world);
    ensure_registered::<CMenuToggle>(world);
    ensure_registered::<CDisableChildrenOnLoad>(world);
    ensure_registered::<CAudioTrigger>(world);
    ensure_registered::<CHoldToDrag>(world);
    ensure_registered::<CShockwave>(world);
}

pub fn setup_scene(world: &mut World, host: &mut HostContext<'_>, config: &GameConfig) -> SceneHandles {
    let slot_size = Vec2::splat(48.0);

    // 1. Inventory slots
    let slots = [Vec2::new(200.0, 300.0), Vec2::new(360.0, 300.0)].map(|pos| {
        let slot = world.spawn();
        world.add_component(slot, CTransform::at(pos, slot_size));
        world.add_component(slot, CInventorySlot::with_capacity(config.inventory_capacity));
        slot
    });

    // 2. Hold-to-drag holder with its item as first child
    let holder = world.spawn();
    world.add_component(holder, CTransform::at(Vec2::new(200.0, 300.0), slot_size));
    world.add_component(holder, CHoldToDrag {
        timer: GestureTimer::new(config.hold_threshold, host.notifier.clone()),
        button: canonical_actions::POINTER_PRIMARY,
    });

    let item = world.spawn();
    world.add_component(item, CTransform::at(Vec2::new(200.0, 300.0), Vec2::splat(32.0)));
    world.add_component(item, CDraggable::default());
    world.set_parent(item, holder);
    if let Some(slot) = world.get_component_mut::<CInventorySlot>(slots[0]) {
        slot.items.push(item);
    }

    // 3. Shockwave effect on a shared material
    if host.materials.find(&config.shockwave.material).is_none() {
        host.materials.insert(Material::new(config.shockwave.material.clone()));
    }
    let shockwave = world.spawn();
    world.add_component(shockwave, CShockwave::from_config(&config.shockwave));

    // 4. Slide-out menu, closed at start
    let menu_panel = world.spawn();
    world.set_active(menu_panel, false);
    let menu_button = world.spawn();
    world.add_component(menu_button, CMenuToggle { panel: Some(menu_panel), open: false });

    // 5. HUD whose hints start hidden
    let hud = world.spawn();
    world.add_component(hud, CDisableChildrenOnLoad);
    for _ in 0..2 {
        let hint = world.spawn();
        world.set_parent(hint, hud);
    }

    // 6. Click sound
    let speaker = world.spawn();
    world.add_component(speaker, CAudioTrigger {
        clip: "click".to_owned(),
        volume: 1.0,
        action: canonical_actions::PLAY_SOUND,
    });

    SceneHandles { slots, holder, item, shockwave, menu_button, menu_panel, hud, speaker }
}

impl GameLogic for PlaygroundGame {
    fn on_load(&mut self, world: &mut World, host: &mut HostContext<'_>) {
        register_components(world);

        if self.scene.is_none() {
            self.scene = Some(setup_scene(world, host, &self.config));
            systems::hierarchy::disable_children_on_load(world);
            info!(hold_threshold = self.config.hold_threshold, "playground scene ready");
        }
    }

    fn update(&mut self, world: &mut World, host: &mut HostContext<'_>, input: &InputState, dt: f32) {
        systems::audio::trigger_audio(world, input, host.audio);
        systems::menu::update_menu_toggles(world, input);
        systems::shockwave::update_shockwaves(world, host.materials, input, dt);
        systems::hold_drag::update_hold_drag(world, input, dt);
        systems::hold_drag::follow_pointer(world, input.pointer);
    }
}
