mod naive;
mod parallel;

pub use naive::NaiveSim;
pub use parallel::ParallelSim;

use anyhow::{ensure, Result};
use glam::DVec3;

pub const DEFAULT_PARTICLE_NUM: usize = 100;
pub const DEFAULT_DT: f64 = 0.01;
pub const DEFAULT_SOFTENING: f64 = 1e-9;
pub const DEFAULT_SEED: u64 = 42;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Body {
    pub position: DVec3,
    pub velocity: DVec3,
    pub mass: f64,
}

impl Body {
    pub fn new(position: DVec3, velocity: DVec3, mass: f64) -> Self {
        Body {
            position,
            velocity,
            mass,
        }
    }
}

/// Gravitational constant is folded into the masses (G = 1).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SimParams {
    pub particle_num: usize,
    pub dt: f64,
    pub softening: f64,
    pub seed: u64,
}

impl Default for SimParams {
    fn default() -> Self {
        SimParams {
            particle_num: DEFAULT_PARTICLE_NUM,
            dt: DEFAULT_DT,
            softening: DEFAULT_SOFTENING,
            seed: DEFAULT_SEED,
        }
    }
}

impl SimParams {
    /// Checks that `bodies` can be simulated under these parameters.
    pub fn validate(&self, bodies: &[Body]) -> Result<()> {
        ensure!(
            bodies.len() == self.particle_num,
            "expected {} bodies, got {}",
            self.particle_num,
            bodies.len()
        );
        ensure!(
            self.softening > 0.0,
            "softening must be strictly positive, got {}",
            self.softening
        );
        ensure!(self.dt.is_finite(), "time step must be finite, got {}", self.dt);
        if let Some((i, b)) = bodies
            .iter()
            .enumerate()
            .find(|(_, b)| !(b.mass > 0.0 && b.mass.is_finite()))
        {
            anyhow::bail!("body {} has non-positive or non-finite mass {}", i, b.mass);
        }
        Ok(())
    }
}

pub trait Simulator {
    fn with_bodies(sim_params: SimParams, bodies: Vec<Body>) -> Result<Self>
    where
        Self: Sized;
    fn new(sim_params: SimParams, init_fn: fn(&SimParams) -> Vec<Body>) -> Result<Self>
    where
        Self: Sized,
    {
        let bodies = init_fn(&sim_params);
        Self::with_bodies(sim_params, bodies)
    }
    /// Advances every body by one `dt`: all forces, then all velocities, then all positions.
    fn step(&mut self);
    fn bodies(&self) -> &[Body];
    fn sim_params(&self) -> SimParams;
    /// Steps taken since construction.
    fn step_num(&self) -> usize;
}

/// Acceleration on a body at `xi` from a body of mass `mj` at `xj`.
#[inline(always)]
pub fn pairwise_accel(xi: DVec3, xj: DVec3, mj: f64, softening: f64) -> DVec3 {
    let delta = xj - xi;
    let dist_sq = delta.length_squared() + softening;
    let dist = dist_sq.sqrt();
    let f = mj / (dist_sq * dist);
    f * delta
}

/// Net acceleration on body `i` from every other body, summed in index order.
#[inline]
pub fn accel_on(bodies: &[Body], i: usize, softening: f64) -> DVec3 {
    let xi = bodies[i].position;
    let mut acc = DVec3::ZERO;
    for (j, bj) in bodies.iter().enumerate() {
        if i == j {
            continue;
        }
        acc += pairwise_accel(xi, bj.position, bj.mass, softening);
    }
    acc
}

/// Fills `forces` from the current positions, then kicks every velocity by `forces[i] * dt`.
///
/// `forces` is zeroed first; it must be the same length as `bodies`.
pub fn compute_forces(bodies: &mut [Body], forces: &mut [DVec3], softening: f64, dt: f64) {
    debug_assert_eq!(bodies.len(), forces.len());
    forces.fill(DVec3::ZERO);
    for (i, f) in forces.iter_mut().enumerate() {
        *f += accel_on(bodies, i, softening);
    }
    apply_forces(bodies, forces, dt);
}

pub(crate) fn apply_forces(bodies: &mut [Body], forces: &[DVec3], dt: f64) {
    for (b, f) in bodies.iter_mut().zip(forces.iter()) {
        b.velocity += *f * dt;
    }
}

pub fn update_positions(bodies: &mut [Body], dt: f64) {
    for b in bodies.iter_mut() {
        b.position += b.velocity * dt;
    }
}
