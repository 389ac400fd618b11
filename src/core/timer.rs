/// Fixed-timestep accumulator for deterministic simulation
///
/// Accumulates frame deltas and yields whole steps; leftover time carries to
/// the next frame. Step count per frame is capped so a long stall cannot
/// trigger a catch-up spiral.
#[derive(Debug, Clone, PartialEq)]
pub struct Accumulator {
    timestep: f32,
    accumulator: f32,
    max_steps: u8,
}

impl Accumulator {
    /// Create accumulator with fixed timestep
    pub fn new(hz: f32, max_steps: u8) -> Self {
        Self {
            timestep: 1.0 / hz,
            accumulator: 0.0,
            max_steps,
        }
    }

    /// Update with delta, returns iterator of fixed timesteps to execute
    pub fn tick(&mut self, delta: f32) -> impl Iterator<Item = f32> {
        self.accumulator += delta;

        let available = (self.accumulator / self.timestep) as usize;
        let steps = available.min(self.max_steps as usize);

        self.accumulator -= steps as f32 * self.timestep;
        if available > steps {
            // Drop the backlog rather than carry it forever
            self.accumulator = self.accumulator.min(self.timestep);
        }

        std::iter::repeat(self.timestep).take(steps)
    }
}
