mod offline_headless;

pub use offline_headless::OfflineHeadless;

use std::{fmt, time::Duration};

/// Timing summary for one benchmark run.
///
/// `Display` renders the two closing stdout lines; the last one, `RESULT: <seconds>`, is the
/// figure downstream tooling scrapes. The opening line comes from [`Report::header`], printed
/// once the simulator is built and before the run starts.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Report {
    pub particle_num: usize,
    /// Step count as requested; may be negative.
    pub steps: i64,
    pub steps_run: usize,
    pub elapsed: Duration,
}

impl Report {
    pub fn header(particle_num: usize, steps: i64) -> String {
        format!("Running Rust N-body with N={}, Steps={}", particle_num, steps)
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.elapsed_secs();
        writeln!(f, "Time: {:.4} seconds", secs)?;
        writeln!(f, "RESULT: {:.4}", secs)
    }
}
