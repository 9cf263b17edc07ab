use std::io::Write;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use n_body_bench::{
    inits,
    runners::{OfflineHeadless, Report},
    sims::{NaiveSim, ParallelSim, SimParams, Simulator},
};

#[global_allocator]
static ALLOC: jemallocator::Jemalloc = jemallocator::Jemalloc;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
enum SimKind {
    Naive,
    Parallel,
}

/// Brute-force gravitational N-body benchmark
#[derive(Parser, Debug)]
struct Args {
    /// Number of bodies
    #[arg(long, default_value_t = 100)]
    n: usize,

    /// Number of steps; negative values run none
    #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
    steps: i64,

    #[arg(long, value_enum, default_value_t = SimKind::Naive)]
    sim: SimKind,
}

/// Builds the simulator, announces the run on `out`, then times the step loop.
fn run<T: Simulator>(sim_params: SimParams, steps: i64, mut out: impl Write) -> Result<Report> {
    let mut runner = OfflineHeadless::<T>::new(sim_params, inits::uniform_init)?;
    writeln!(out, "{}", Report::header(sim_params.particle_num, steps))?;
    out.flush()?;
    if steps < 0 {
        log::warn!("negative step count {}, running no steps", steps);
    }
    let elapsed = runner.run(steps.max(0) as usize);
    Ok(Report {
        particle_num: sim_params.particle_num,
        steps,
        steps_run: runner.sim().step_num(),
        elapsed,
    })
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let sim_params = SimParams {
        particle_num: args.n,
        ..SimParams::default()
    };
    let mut stdout = std::io::stdout().lock();
    let report = match args.sim {
        SimKind::Naive => run::<NaiveSim>(sim_params, args.steps, &mut stdout)?,
        SimKind::Parallel => run::<ParallelSim>(sim_params, args.steps, &mut stdout)?,
    };
    write!(stdout, "{}", report)?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(n: usize) -> SimParams {
        SimParams {
            particle_num: n,
            ..SimParams::default()
        }
    }

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["headless"]).unwrap();
        assert_eq!(args.n, 100);
        assert_eq!(args.steps, 100);
        assert_eq!(args.sim, SimKind::Naive);
    }

    #[test]
    fn named_flags() {
        let args =
            Args::try_parse_from(["headless", "--n", "7", "--steps", "3", "--sim", "parallel"])
                .unwrap();
        assert_eq!(args.n, 7);
        assert_eq!(args.steps, 3);
        assert_eq!(args.sim, SimKind::Parallel);
    }

    #[test]
    fn negative_steps_parse() {
        let args = Args::try_parse_from(["headless", "--steps", "-3"]).unwrap();
        assert_eq!(args.steps, -3);
    }

    #[test]
    fn malformed_counts_are_usage_errors() {
        for argv in [
            &["headless", "--n", "abc"][..],
            &["headless", "--n", "-5"],
            &["headless", "--steps", "1.5"],
            &["headless", "--steps", "many"],
            &["headless", "--sim", "octree"],
        ] {
            let err = Args::try_parse_from(argv).unwrap_err();
            assert_ne!(err.exit_code(), 0, "{:?} should fail", argv);
        }
    }

    #[test]
    fn negative_steps_run_nothing() {
        let mut out = Vec::new();
        let report = run::<NaiveSim>(params(4), -3, &mut out).unwrap();
        assert_eq!(report.steps, -3);
        assert_eq!(report.steps_run, 0);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Running Rust N-body with N=4, Steps=-3\n"
        );
    }

    #[test]
    fn runs_requested_steps() {
        let mut out = Vec::new();
        let report = run::<ParallelSim>(params(4), 5, &mut out).unwrap();
        assert_eq!(report.steps_run, 5);
        assert_eq!(report.particle_num, 4);
    }

    #[test]
    fn failed_setup_prints_nothing() {
        let bad = SimParams {
            softening: 0.0,
            ..params(4)
        };
        let mut out = Vec::new();
        assert!(run::<NaiveSim>(bad, 10, &mut out).is_err());
        assert!(out.is_empty());
    }
}
