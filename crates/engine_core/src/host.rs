// crates/engine_core/src/host.rs
use std::collections::VecDeque;

use engine_shared::AudioOutput;
use tracing::info;

/// How many recent clips `LoggingAudio` remembers.
pub const PLAYED_HISTORY: usize = 16;

/// Default audio backend: no device, every one-shot is logged and the most
/// recent ones are kept.
#[derive(Default)]
pub struct LoggingAudio {
    played: VecDeque<String>,
}

impl LoggingAudio {
    /// Recent clips, oldest first.
    pub fn played(&self) -> impl Iterator<Item = &str> {
        self.played.iter().map(String::as_str)
    }
}

impl AudioOutput for LoggingAudio {
    fn play_one_shot(&mut self, clip: &str, volume: f32) {
        info!(clip, volume, "play one-shot");
        if self.played.len() == PLAYED_HISTORY {
            self.played.pop_front();
        }
        self.played.push_back(clip.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_keeps_only_recent_clips() {
        let mut audio = LoggingAudio::default();
        for i in 0..PLAYED_HISTORY + 4 {
            audio.play_one_shot(&format!("clip{i}"), 1.0);
        }

        let played: Vec<&str> = audio.played().collect();
        assert_eq!(played.len(), PLAYED_HISTORY);
        assert_eq!(played.first().copied(), Some("clip4"));
        assert_eq!(played.last().copied(), Some("clip19"));
    }
}
