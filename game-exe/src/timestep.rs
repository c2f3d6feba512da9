//! Simulation speed control. Limits progression to one tic per `tic_ms` of
//! wall clock when running in realtime.

use std::{fmt, time::Instant};

#[derive(Debug)]
pub struct TimeStep {
    last_time: Instant,
    delta_time: f32,
    ms_per_update: f32,
    report_time: f32,
    run_tics: u32,
    last_tics: u32,
    lag: f32,
}

#[derive(Debug)]
pub struct TicData {
    pub tics: u32,
}

impl fmt::Display for TicData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("TicData (per-second):\n  - tics: {}", self.tics))
    }
}

impl TimeStep {
    pub fn new(tic_ms: u32) -> TimeStep {
        TimeStep {
            last_time: Instant::now(),
            delta_time: 0.0,
            ms_per_update: tic_ms.max(1) as f32,
            report_time: 0.0,
            run_tics: 0,
            last_tics: 0,
            lag: 0.0,
        }
    }

    pub fn delta(&mut self) -> f32 {
        let current_time = Instant::now();
        let delta = current_time.duration_since(self.last_time).as_micros() as f32 * 0.001;
        self.last_time = current_time;
        self.delta_time = delta;
        delta
    }

    /// Increments self time and runs `run_this` once for each whole tic that
    /// has elapsed.
    pub fn run_this(&mut self, mut run_this: impl FnMut()) {
        let dt = self.delta();
        self.lag += dt;
        while self.lag >= self.ms_per_update {
            run_this();
            self.lag -= self.ms_per_update;
            self.run_tics += 1;
        }
    }

    pub fn run_tics(&self) -> u32 {
        self.run_tics
    }

    /// Some once per second of wall clock
    pub fn tic_rate(&mut self) -> Option<TicData> {
        self.report_time += self.delta_time;
        if self.report_time >= 1000.0 {
            let tics = self.run_tics - self.last_tics;
            self.report_time = 0.0;
            self.last_tics = self.run_tics;
            return Some(TicData { tics });
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::TimeStep;
    use std::{thread::sleep, time::Duration};

    #[test]
    fn runs_whole_tics_only() {
        let mut ts = TimeStep::new(5);
        let mut ran = 0;
        sleep(Duration::from_millis(12));
        ts.run_this(|| ran += 1);
        assert!(ran >= 2, "ran {ran}");
        assert_eq!(ts.run_tics(), ran);
    }
}
