use super::Body;
use super::SimParams;
use super::Simulator;
use anyhow::Result;
use glam::DVec3;

/// Direct O(N²) summation on a single thread.
pub struct NaiveSim {
    sim_params: SimParams,
    bodies: Vec<Body>,
    forces: Vec<DVec3>,
    step_num: usize,
}

impl Simulator for NaiveSim {
    fn with_bodies(sim_params: SimParams, bodies: Vec<Body>) -> Result<Self> {
        sim_params.validate(&bodies)?;
        log::info!(
            "naive simulator ready: {} bodies, dt = {}",
            bodies.len(),
            sim_params.dt
        );
        let forces = vec![DVec3::ZERO; bodies.len()];
        Ok(Self {
            sim_params,
            bodies,
            forces,
            step_num: 0,
        })
    }

    fn step(&mut self) {
        super::compute_forces(
            &mut self.bodies,
            &mut self.forces,
            self.sim_params.softening,
            self.sim_params.dt,
        );
        super::update_positions(&mut self.bodies, self.sim_params.dt);
        self.step_num += 1;
    }

    fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    fn sim_params(&self) -> SimParams {
        self.sim_params
    }

    fn step_num(&self) -> usize {
        self.step_num
    }
}
