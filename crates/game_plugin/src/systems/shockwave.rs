// crates/game_plugin/src/systems/shockwave.rs

use engine_ecs::World;
use engine_shared::input_types::canonical_actions;
use engine_shared::{InputState, MaterialHandle, MaterialLibrary, ShockwaveConfig};
use tracing::{debug, warn};

use crate::timers::InterpolationTimer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialSlot {
    Unresolved,
    Found(MaterialHandle),
    /// Looked up once and absent; the effect stays a no-op.
    Missing,
}

pub struct CShockwave {
    pub timer: InterpolationTimer,
    pub material_name: String,
    pub parameter: String,
    pub material: MaterialSlot,
}

impl CShockwave {
    pub fn from_config(cfg: &ShockwaveConfig) -> Self {
        Self {
            timer: InterpolationTimer::new(cfg.duration, cfg.start_value, cfg.end_value),
            material_name: cfg.material.clone(),
            parameter: cfg.parameter.clone(),
            material: MaterialSlot::Unresolved,
        }
    }

    fn resolve(&mut self, materials: &MaterialLibrary) -> Option<MaterialHandle> {
        if self.material == MaterialSlot::Unresolved {
            self.material = match materials.find(&self.material_name) {
                Some(handle) => MaterialSlot::Found(handle),
                None => {
                    warn!(material = %self.material_name, "shockwave material not found; effect disabled");
                    MaterialSlot::Missing
                }
            };
        }

        match self.material {
            MaterialSlot::Found(handle) => Some(handle),
            _ => None,
        }
    }
}

pub fn update_shockwaves(
    world: &mut World,
    materials: &mut MaterialLibrary,
    input: &InputState,
    dt: f32,
) {
    let triggered = input.just_pressed(canonical_actions::SHOCKWAVE);

    let mut writes = Vec::new();
    if let Some(waves) = world.query_mut::<CShockwave>() {
        for (entity, wave) in waves.iter_mut() {
            let Some(handle) = wave.resolve(materials) else { continue };

            // A fresh run shows its start value for a whole step before advancing.
            let value = if triggered {
                debug!(?entity, restarted = wave.timer.is_active(), "shockwave triggered");
                Some(wave.timer.trigger())
            } else {
                wave.timer.tick(dt)
            };

            if let Some(value) = value {
                writes.push((handle, wave.parameter.clone(), value));
            }
        }
    }

    for (handle, parameter, value) in writes {
        if let Some(material) = materials.get_mut(handle) {
            material.set_float(&parameter, value);
        }
    }
}
