pub mod inits;
pub mod runners;
pub mod sims;
