// crates/engine_core/src/engine_loop.rs

use std::time::Instant;

/// Encapsulates fixed-timestep simulation bookkeeping (time, accumulator, limits).
pub struct EngineLoop {
    last_frame_time: Instant,
    sim_accumulator: f32,
    sim_dt: f32,
    max_steps_per_frame: u32,
}

impl EngineLoop {
    pub fn new(sim_dt: f32) -> Self {
        Self {
            last_frame_time: Instant::now(),
            sim_accumulator: 0.0,
            sim_dt,
            max_steps_per_frame: 5,
        }
    }

    pub fn sim_dt(&self) -> f32 {
        self.sim_dt
    }

    /// Update the frame timer and return the clamped frame delta.
    /// Clamps to 0.25s to avoid giant spikes when dragging the window,
    /// hitting breakpoints, etc.
    pub fn tick_timer(&mut self) -> f32 {
        let now = Instant::now();
        let frame_dt = now
            .duration_since(self.last_frame_time)
            .as_secs_f32();
        self.last_frame_time = now;

        frame_dt.min(0.25)
    }

    /// Runs fixed-timestep steps until the accumulator is caught up or we hit
    /// max_steps_per_frame. `step` receives the fixed dt and the step's index
    /// within this frame. If the backlog still remains at the cap, we drop it,
    /// to avoid "chasing" an infinite backlog under heavy load.
    ///
    /// Returns the number of steps run.
    pub fn update_simulation(&mut self, frame_dt: f32, mut step: impl FnMut(f32, u32)) -> u32 {
        self.sim_accumulator += frame_dt;

        let mut steps = 0;
        while self.sim_accumulator >= self.sim_dt && steps < self.max_steps_per_frame {
            step(self.sim_dt, steps);
            self.sim_accumulator -= self.sim_dt;
            steps += 1;
        }

        // Prevent unbounded backlog if we're constantly saturated.
        if steps == self.max_steps_per_frame && self.sim_accumulator >= self.sim_dt {
            tracing::debug!(backlog = self.sim_accumulator, "dropping simulation backlog");
            self.sim_accumulator = 0.0;
        }

        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_partial_frames() {
        let mut lp = EngineLoop::new(0.1);
        assert_eq!(lp.update_simulation(0.06, |_, _| {}), 0);
        assert_eq!(lp.update_simulation(0.06, |_, _| {}), 1);
    }

    #[test]
    fn steps_are_indexed_and_fixed() {
        let mut lp = EngineLoop::new(0.25);
        let mut seen = Vec::new();
        lp.update_simulation(0.5, |dt, i| seen.push((dt, i)));
        assert_eq!(seen, vec![(0.25, 0), (0.25, 1)]);
    }

    #[test]
    fn backlog_is_dropped_at_cap() {
        let mut lp = EngineLoop::new(0.01);
        assert_eq!(lp.update_simulation(1.0, |_, _| {}), 5);
        // The rest of that second was discarded.
        assert_eq!(lp.update_simulation(0.0, |_, _| {}), 0);
    }
}
