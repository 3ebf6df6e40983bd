// crates/game_plugin/src/timers/interpolation.rs

/// Drives one scalar from `start_value` to `end_value` over `duration`
/// seconds. Each call returns the value to write to the output; `None` means
/// there is nothing to write this tick.
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolationTimer {
    duration: f32,
    start_value: f32,
    end_value: f32,
    elapsed: f32,
    active: bool,
    value: f32,
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

impl InterpolationTimer {
    pub fn new(duration: f32, start_value: f32, end_value: f32) -> Self {
        Self {
            duration,
            start_value,
            end_value,
            elapsed: 0.0,
            active: false,
            value: start_value,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Last value produced.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Hard restart: any in-flight run is dropped.
    pub fn trigger(&mut self) -> f32 {
        self.elapsed = 0.0;
        self.active = true;
        self.value = self.start_value;
        self.value
    }

    pub fn tick(&mut self, dt: f32) -> Option<f32> {
        if !self.active {
            return None;
        }

        self.elapsed += dt.max(0.0);
        if self.elapsed >= self.duration {
            self.active = false;
            self.value = self.end_value;
            return Some(self.value);
        }

        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        self.value = lerp(self.start_value, self.end_value, t);
        Some(self.value)
    }
}
