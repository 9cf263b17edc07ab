use super::Body;
use super::SimParams;
use super::Simulator;
use anyhow::Result;
use glam::DVec3;
use rayon::prelude::*;

/// Same kernel as [`super::NaiveSim`], with the force pass split over the rayon pool.
///
/// Every body's accumulator is owned by one task and summed in index order, so the
/// trajectory is bit-identical to the single-threaded run.
pub struct ParallelSim {
    sim_params: SimParams,
    bodies: Vec<Body>,
    forces: Vec<DVec3>,
    step_num: usize,
}

impl Simulator for ParallelSim {
    fn with_bodies(sim_params: SimParams, bodies: Vec<Body>) -> Result<Self> {
        sim_params.validate(&bodies)?;
        log::info!(
            "parallel simulator ready: {} bodies across {} threads",
            bodies.len(),
            rayon::current_num_threads()
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
        let softening = self.sim_params.softening;
        let dt = self.sim_params.dt;
        let bodies = &self.bodies;
        self.forces
            .par_iter_mut()
            .enumerate()
            .for_each(|(i, f)| *f = super::accel_on(bodies, i, softening));
        super::apply_forces(&mut self.bodies, &self.forces, dt);
        super::update_positions(&mut self.bodies, dt);
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
