//! Millisecond countdown advanced by the elapsed time of each tic.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    looping: bool,
    end_time: u64,
    elapsed: u64,
    running: bool,
    expired: bool,
    /// Set only for the update that crossed `end_time`
    on_first_time: bool,
}

impl Timer {
    /// A running timer. A one-shot timer stays expired once it passes
    /// `end_time_ms` until `reset`; a looping one starts over.
    pub const fn new(looping: bool, end_time_ms: u64) -> Self {
        Self {
            looping,
            end_time: end_time_ms,
            elapsed: 0,
            running: true,
            expired: false,
            on_first_time: false,
        }
    }

    pub fn update(&mut self, dt_ms: u32) {
        self.on_first_time = false;
        if !self.running {
            return;
        }

        self.elapsed += dt_ms as u64;
        if self.elapsed < self.end_time {
            return;
        }

        if self.looping {
            self.elapsed -= self.end_time;
            self.on_first_time = true;
        } else if !self.expired {
            self.expired = true;
            self.on_first_time = true;
        }
    }

    /// Restart from zero and run
    pub fn reset(&mut self) {
        self.elapsed = 0;
        self.expired = false;
        self.on_first_time = false;
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.on_first_time = false;
    }

    /// True only on the update that reached the end time
    pub const fn is_on_first_time(&self) -> bool {
        self.on_first_time
    }

    pub const fn is_expired(&self) -> bool {
        self.expired
    }

    pub const fn is_running(&self) -> bool {
        self.running
    }

    pub const fn elapsed(&self) -> u64 {
        self.elapsed
    }

    pub const fn end_time(&self) -> u64 {
        self.end_time
    }
}
