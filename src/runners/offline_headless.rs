use std::time::{Duration, Instant};

use crate::{sims, sims::Simulator};
use anyhow::Context;

/// Runs a simulator with no output other than timing.
pub struct OfflineHeadless<T>
where
    T: Simulator,
{
    sim: T,
}

impl<T> OfflineHeadless<T>
where
    T: Simulator,
{
    pub fn new(
        sim_params: sims::SimParams,
        init_fn: fn(&sims::SimParams) -> Vec<sims::Body>,
    ) -> anyhow::Result<Self> {
        let sim = T::new(sim_params, init_fn).context("Failed to initialize simulator")?;
        Ok(Self { sim })
    }

    pub fn from_sim(sim: T) -> Self {
        Self { sim }
    }

    pub fn step(&mut self) {
        self.sim.step();
    }

    /// Runs `steps` steps back to back and returns the wall-clock time spent in them.
    pub fn run(&mut self, steps: usize) -> Duration {
        let start = Instant::now();
        for s in 0..steps {
            let now = Instant::now();
            self.step();
            log::debug!("step {} took {} µs", s, now.elapsed().as_micros());
        }
        let elapsed = start.elapsed();
        log::info!(
            "finished {} steps of {} bodies (dt = {}) in {:?}",
            steps,
            self.sim.bodies().len(),
            self.sim.sim_params().dt,
            elapsed
        );
        elapsed
    }

    pub fn sim(&self) -> &T {
        &self.sim
    }
}
