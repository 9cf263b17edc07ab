use crate::sims::{Body, SimParams};

use glam::DVec3;
use rand::{distributions::Uniform, prelude::Distribution, rngs::StdRng, SeedableRng};

pub const POSITION_RANGE: f64 = 100.0;
pub const VELOCITY_RANGE: f64 = 1.0;
pub const MASS_MIN: f64 = 1.0;
pub const MASS_MAX: f64 = 10.0;

/// Bodies scattered uniformly through a cube, drawn from an RNG seeded with `sim_params.seed`.
///
/// Each body takes seven draws in a fixed order (x, y, z, vx, vy, vz, mass) before the next
/// body starts, so the same seed and body count always produce the same system.
pub fn uniform_init(sim_params: &SimParams) -> Vec<Body> {
    let mut rng = StdRng::seed_from_u64(sim_params.seed);
    let pos_unif = Uniform::new_inclusive(-POSITION_RANGE, POSITION_RANGE);
    let vel_unif = Uniform::new_inclusive(-VELOCITY_RANGE, VELOCITY_RANGE);
    let mass_unif = Uniform::new_inclusive(MASS_MIN, MASS_MAX);
    let mut initial_bodies = Vec::with_capacity(sim_params.particle_num);
    for _ in 0..sim_params.particle_num {
        let position = DVec3::new(
            pos_unif.sample(&mut rng),
            pos_unif.sample(&mut rng),
            pos_unif.sample(&mut rng),
        );
        let velocity = DVec3::new(
            vel_unif.sample(&mut rng),
            vel_unif.sample(&mut rng),
            vel_unif.sample(&mut rng),
        );
        let mass = mass_unif.sample(&mut rng);
        initial_bodies.push(Body {
            position,
            velocity,
            mass,
        });
    }
    initial_bodies
}
