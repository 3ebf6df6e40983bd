// crates/engine_core/src/input/registry.rs
use std::collections::HashMap;
use engine_shared::ActionId;

/// Name <-> id table for input actions. Ids are handed out densely in
/// registration order.
#[derive(Default, Clone)]
pub struct ActionRegistry {
    name_to_id: HashMap<String, ActionId>,
    names: Vec<String>,
}

impl ActionRegistry {
    /// Returns the existing id when `name` is already registered.
    pub fn register(&mut self, name: &str) -> ActionId {
        if let Some(&id) = self.name_to_id.get(name) {
            return id;
        }
        let id = self.names.len() as ActionId;
        self.name_to_id.insert(name.to_string(), id);
        self.names.push(name.to_string());
        id
    }

    pub fn get_id(&self, name: &str) -> Option<ActionId> {
        self.name_to_id.get(name).copied()
    }

    pub fn name_of(&self, id: ActionId) -> Option<&str> {
        self.names.get(id as usize).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_is_idempotent() {
        let mut reg = ActionRegistry::default();
        let a = reg.register("Shockwave");
        let b = reg.register("ToggleMenu");
        assert_eq!(reg.register("Shockwave"), a);
        assert_eq!((a, b), (0, 1));
        assert_eq!(reg.name_of(b), Some("ToggleMenu"));
        assert_eq!(reg.get_id("Missing"), None);
    }
}
