// crates/engine_core/src/app.rs

use engine_ecs::World;
use engine_shared::{EventHub, GameConfig, GameLogic, HostContext, MaterialLibrary, ReleaseNotifier};
use tracing::info;

use crate::engine_loop::EngineLoop;
use crate::host::LoggingAudio;
use crate::input::{ActionRegistry, InputDefaults, InputMap, InputPoller};
use crate::scene;

/// Everything the host owns, independent of any window. The platform
/// runner feeds it OS events and frame times; tests drive it directly.
pub struct App {
    pub window_title: String,
    registry: ActionRegistry,
    input_map: InputMap,
    poller: InputPoller,
    engine_loop: EngineLoop,
    world: World,
    game: Box<dyn GameLogic>,
    materials: MaterialLibrary,
    audio: LoggingAudio,
    events: EventHub,
    notifier: ReleaseNotifier,
    loaded: bool,
}

impl App {
    pub fn new(config: &GameConfig, game: Box<dyn GameLogic>) -> Self {
        let mut registry = ActionRegistry::default();
        let mut input_map = InputMap::default();
        InputDefaults::setup(&mut registry, &mut input_map);

        let mut world = World::new();
        scene::setup_default_world(&mut world);

        let events = EventHub::new();
        let notifier = events.notifier();

        Self {
            window_title: "Rust Engine: Playground".to_string(),
            registry,
            input_map,
            poller: InputPoller::new(),
            engine_loop: EngineLoop::new(config.sim_dt),
            world,
            game,
            materials: MaterialLibrary::default(),
            audio: LoggingAudio::default(),
            events,
            notifier,
            loaded: false,
        }
    }

    /// Calls the game's `on_load` once. Later calls are ignored.
    pub fn load(&mut self) {
        if self.loaded {
            return;
        }
        let mut host = HostContext {
            materials: &mut self.materials,
            audio: &mut self.audio,
            notifier: &self.notifier,
        };
        self.game.on_load(&mut self.world, &mut host);
        self.loaded = true;
        info!("game loaded");
    }

    pub fn shutdown(&mut self) {
        if self.loaded {
            self.game.on_unload(&mut self.world);
            self.loaded = false;
        }
    }

    /// Measures the wall-clock frame delta (clamped).
    pub fn tick_timer(&mut self) -> f32 {
        self.engine_loop.tick_timer()
    }

    /// Runs as many fixed steps as `frame_dt` allows. Input edges reach the
    /// first step only, and are held back if no step runs. The event hub is
    /// drained after every step.
    pub fn frame(&mut self, frame_dt: f32) -> u32 {
        if !self.loaded {
            self.load();
        }

        let input = self.poller.snapshot(&self.input_map);

        let Self { engine_loop, world, game, materials, audio, events, notifier, .. } = self;
        let steps = engine_loop.update_simulation(frame_dt, |dt, index| {
            let step_input = if index == 0 { input } else { input.without_edges() };
            let mut host = HostContext { materials: &mut *materials, audio: &mut *audio, notifier: &*notifier };
            game.update(world, &mut host, &step_input, dt);
            events.drain();
        });

        if steps > 0 {
            self.poller.clear_edges();
        }
        steps
    }

    pub fn poller_mut(&mut self) -> &mut InputPoller {
        &mut self.poller
    }

    pub fn events_mut(&mut self) -> &mut EventHub {
        &mut self.events
    }

    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn materials(&self) -> &MaterialLibrary {
        &self.materials
    }

    pub fn audio(&self) -> &LoggingAudio {
        &self.audio
    }
}
