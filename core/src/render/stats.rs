//! Rendering statistics.

use core::fmt::{self, Display, Formatter};
use core::ops::AddAssign;
use core::time::Duration;
#[cfg(feature = "std")]
use std::time::Instant;

/// Collects and accumulates rendering statistics.
#[derive(Clone, Debug, Default)]
pub struct Stats {
    /// Time spent rendering.
    pub time: Duration,
    /// Number of render calls.
    pub calls: usize,
    /// Number of pixels shaded.
    pub covered: usize,
    /// Number of pixels set to the background.
    pub missed: usize,

    #[cfg(feature = "std")]
    start: Option<Instant>,
}

impl Stats {
    /// Creates a new zeroed `Stats` instance.
    pub fn new() -> Self {
        Self::default()
    }
    /// Creates a `Stats` instance for one render call that records the
    /// time of its creation.
    ///
    /// Call [`finish`][Self::finish] to write the elapsed time to
    /// `self.time`. Without the `std` feature no time is recorded.
    pub fn start() -> Self {
        Self {
            calls: 1,
            #[cfg(feature = "std")]
            start: Some(Instant::now()),
            ..Self::default()
        }
    }

    /// Stops the timer and records the elapsed time to `self.time`.
    ///
    /// No-op if the timer was not running, or if the `std` feature is not
    /// enabled.
    #[must_use]
    pub fn finish(self) -> Self {
        Self {
            #[cfg(feature = "std")]
            time: self.start.map(|st| st.elapsed()).unwrap_or(self.time),
            #[cfg(feature = "std")]
            start: None,
            ..self
        }
    }

    /// Returns the total number of pixels visited.
    pub fn pixels(&self) -> usize {
        self.covered + self.missed
    }

    /// Returns the fraction of visited pixels that were covered, or zero
    /// if none were visited.
    pub fn coverage(&self) -> f32 {
        match self.pixels() {
            0 => 0.0,
            n => self.covered as f32 / n as f32,
        }
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Self { time, calls, covered, missed, .. } = self;
        write!(
            f,
            "{covered} covered, {missed} missed ({:.1}%) in {calls} call{} / {}",
            100.0 * self.coverage(),
            if *calls == 1 { "" } else { "s" },
            human_time(*time),
        )
    }
}

impl AddAssign for Stats {
    /// Appends the stats of `other` to `self`.
    fn add_assign(&mut self, other: Self) {
        self.time += other.time;
        self.calls += other.calls;
        self.covered += other.covered;
        self.missed += other.missed;
    }
}

fn human_time(d: Duration) -> impl Display {
    struct Human(Duration);
    impl Display for Human {
        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
            let secs = self.0.as_secs_f32();
            if secs < 1e-3 {
                write!(f, "{:.1}µs", secs * 1e6)
            } else if secs < 1.0 {
                write!(f, "{:.1}ms", secs * 1e3)
            } else {
                write!(f, "{secs:.2}s")
            }
        }
    }
    Human(d)
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn coverage() {
        let mut st = Stats::new();
        assert_eq!(st.coverage(), 0.0);
        st.covered = 3;
        st.missed = 1;
        assert_eq!(st.pixels(), 4);
        assert_eq!(st.coverage(), 0.75);
    }

    #[test]
    fn start_counts_one_call() {
        let st = Stats::start().finish();
        assert_eq!(st.calls, 1);
        assert_eq!(st.pixels(), 0);
    }

    #[test]
    fn add_assign() {
        let mut total = Stats::new();
        for _ in 0..3 {
            let mut st = Stats::start();
            st.covered = 10;
            st.missed = 5;
            total += st.finish();
        }
        assert_eq!(total.calls, 3);
        assert_eq!(total.covered, 30);
        assert_eq!(total.missed, 15);
    }

    #[test]
    fn display() {
        let st = Stats {
            time: Duration::from_millis(12),
            calls: 1,
            covered: 3,
            missed: 1,
            ..Stats::default()
        };
        assert_eq!(st.to_string(), "3 covered, 1 missed (75.0%) in 1 call / 12.0ms");
    }
}
