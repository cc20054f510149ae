#[cfg(windows)]
use core::mem;
#[cfg(windows)]
use winapi::um::profileapi::{QueryPerformanceCounter, QueryPerformanceFrequency};
#[cfg(not(windows))]
use std::time::Instant;

#[cfg(windows)]
lazy_static::lazy_static! {
    static ref PERFORMANCE_FREQUENCY: i64 = unsafe {
        let mut pf = mem::zeroed();
        QueryPerformanceFrequency(&mut pf);
        *pf.QuadPart()
    };
}

#[cfg(not(windows))]
lazy_static::lazy_static! {
    static ref PERFORMANCE_FREQUENCY: i64 = 1_000_000_000;
    static ref EPOCH: Instant = Instant::now();
}

/// Frame timer in performance-counter ticks.
pub struct Counter {
    start_ticks: i64,
}

impl Counter {
    pub fn start() -> Self {
        Self { start_ticks: Self::count() }
    }

    pub fn elapsed(&self) -> TicksElapsed {
        TicksElapsed(Self::count() - self.start_ticks)
    }

    pub fn end(self) -> TicksElapsed {
        self.elapsed()
    }

    #[cfg(windows)]
    fn count() -> i64 {
        unsafe {
            let mut performance_count = mem::zeroed();
            QueryPerformanceCounter(&mut performance_count);
            *performance_count.QuadPart()
        }
    }

    #[cfg(not(windows))]
    fn count() -> i64 {
        EPOCH.elapsed().as_nanos() as i64
    }
}

#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct TicksElapsed(i64);

impl TicksElapsed {
    pub fn as_secs(self) -> f64 {
        self.0 as f64 / *PERFORMANCE_FREQUENCY as f64
    }

    pub fn as_ms(self) -> f64 {
        self.as_secs() * 1_000.0
    }

    pub fn as_micros(self) -> f64 {
        self.as_secs() * 1_000_000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{thread, time::Duration};

    #[test]
    fn counter_measures_sleep() {
        let counter = Counter::start();
        thread::sleep(Duration::from_millis(5));
        let elapsed = counter.end();
        assert!(elapsed.as_ms() >= 4.0, "{:?}", elapsed);
        assert!(elapsed.as_micros() >= elapsed.as_ms());
    }

    #[test]
    fn elapsed_is_monotonic() {
        let counter = Counter::start();
        let first = counter.elapsed();
        let second = counter.elapsed();
        assert!(second >= first);
    }
}
