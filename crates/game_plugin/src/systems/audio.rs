// crates/game_plugin/src/systems/audio.rs

use engine_ecs::World;
use engine_shared::{AudioOutput, CAudioTrigger, InputState};

/// Plays each trigger's clip once on the frame its action goes down.
pub fn trigger_audio(world: &World, input: &InputState, audio: &mut dyn AudioOutput) {
    let Some(triggers) = world.query::<CAudioTrigger>() else { return };

    for (entity, trigger) in triggers.iter() {
        if world.is_active(*entity) && input.just_pressed(trigger.action) {
            audio.play_one_shot(&trigger.clip, trigger.volume);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine_shared::input_types::canonical_actions::PLAY_SOUND;

    #[derive(Default)]
    struct Recorder(Vec<(String, f32)>);

    impl AudioOutput for Recorder {
        fn play_one_shot(&mut self, clip: &str, volume: f32) {
            self.0.push((clip.to_owned(), volume));
        }
    }

    #[test]
    fn plays_once_per_press_and_respects_active_flag() {
        let mut world = World::new();
        world.register_component::<CAudioTrigger>();
        let speaker = world.spawn();
        world.add_component(speaker, CAudioTrigger {
            clip: "click".into(),
            volume: 0.8,
            action: PLAY_SOUND,
        });

        let mut pressed = InputState::default();
        pressed.set_held(PLAY_SOUND, true);
        pressed.mark_pressed(PLAY_SOUND);
        let held = pressed.without_edges();

        let mut out = Recorder::default();
        trigger_audio(&world, &pressed, &mut out);
        trigger_audio(&world, &held, &mut out);
        assert_eq!(out.0, vec![("click".to_owned(), 0.8)]);

        world.set_active(speaker, false);
        trigger_audio(&world, &pressed, &mut out);
        assert_eq!(out.0.len(), 1);
    }
}
