/// Performance measurement utilities
/// Scoped timers report through `log` at debug level
use std::time::{Duration, Instant};

pub struct PerfTimer {
    name: &'static str,
    start: Instant,
}

impl PerfTimer {
    #[inline]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            start: Instant::now(),
        }
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for PerfTimer {
    fn drop(&mut self) {
        log::debug!(target: "perf", "{}: {}μs", self.name, self.elapsed().as_micros());
    }
}

/// Frame counter that yields a rate once per reporting interval.
pub struct FpsCounter {
    frames: u32,
    window_start: Instant,
    interval: Duration,
}

impl FpsCounter {
    pub fn new(interval: Duration) -> Self {
        Self {
            frames: 0,
            window_start: Instant::now(),
            interval,
        }
    }

    /// Count a frame finished at `now`. Returns frames per second when the
    /// interval has elapsed, then starts a new interval.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        self.frames += 1;
        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed < self.interval {
            return None;
        }
        let fps = self.frames as f32 / elapsed.as_secs_f32();
        self.frames = 0;
        self.window_start = now;
        Some(fps)
    }
}

/// Macro for easy performance measurement
#[macro_export]
macro_rules! perf_scope {
    ($name:expr) => {
        let _timer = $crate::perf::PerfTimer::new($name);
    };
}
