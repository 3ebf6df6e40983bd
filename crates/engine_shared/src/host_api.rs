// crates/engine_shared/src/host_api.rs
//! Services the host lends to gameplay code for the duration of a call.

use std::collections::HashMap;

use crate::events::ReleaseNotifier;

/// Index into a `MaterialLibrary`. Gameplay code caches these; it never owns
/// the material itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialHandle(u32);

/// A shared render resource exposing named scalar parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Material {
    pub name: String,
    params: HashMap<String, f32>,
}

impl Material {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), params: HashMap::new() }
    }

    pub fn set_float(&mut self, param: &str, value: f32) {
        self.params.insert(param.to_owned(), value);
    }

    pub fn get_float(&self, param: &str) -> Option<f32> {
        self.params.get(param).copied()
    }
}

#[derive(Debug, Default)]
pub struct MaterialLibrary {
    materials: Vec<Material>,
}

impl MaterialLibrary {
    pub fn insert(&mut self, material: Material) -> MaterialHandle {
        self.materials.push(material);
        MaterialHandle((self.materials.len() - 1) as u32)
    }

    /// First material with the given name.
    pub fn find(&self, name: &str) -> Option<MaterialHandle> {
        self.materials
            .iter()
            .position(|m| m.name == name)
            .map(|i| MaterialHandle(i as u32))
    }

    pub fn get(&self, handle: MaterialHandle) -> Option<&Material> {
        self.materials.get(handle.0 as usize)
    }

    pub fn get_mut(&mut self, handle: MaterialHandle) -> Option<&mut Material> {
        self.materials.get_mut(handle.0 as usize)
    }
}

pub trait AudioOutput {
    fn play_one_shot(&mut self, clip: &str, volume: f32);
}

/// Borrowed view of the host handed to `GameLogic` calls.
pub struct HostContext<'a> {
    pub materials: &'a mut MaterialLibrary,
    pub audio: &'a mut dyn AudioOutput,
    pub notifier: &'a ReleaseNotifier,
}
