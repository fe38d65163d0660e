use serde::{Deserialize, Serialize};

/// Monotonic elapsed-time accumulator driven by the frame loop.
///
/// The clock never resets; each [`AnimationClock::tick`] records the time since
/// the previous sample and adds it to the running total. The total is kept in
/// `f64`; an `f32` sum stops advancing once it grows past a few days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimationClock {
    delta: f32,
    elapsed: f64,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new sample. Negative or non-finite deltas count as zero so the
    /// elapsed time never goes backwards.
    pub fn tick(&mut self, delta: f32) -> (f32, f32) {
        self.delta = if delta.is_finite() { delta.max(0.0) } else { 0.0 };
        self.elapsed += f64::from(self.delta);
        (self.delta, self.elapsed())
    }

    /// Seconds between the last two samples.
    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Seconds since the clock was created, narrowed for the updaters.
    pub fn elapsed(&self) -> f32 {
        self.elapsed as f32
    }

    /// Seconds since the clock was created, at full precision.
    pub fn elapsed_f64(&self) -> f64 {
        self.elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_starts_at_zero() {
        let clock = AnimationClock::new();
        assert_eq!(clock.delta(), 0.0);
        assert_eq!(clock.elapsed(), 0.0);
    }

    #[test]
    fn test_clock_accumulates() {
        let mut clock = AnimationClock::new();
        clock.tick(0.5);
        let (delta, elapsed) = clock.tick(0.25);
        assert_eq!(delta, 0.25);
        assert_eq!(elapsed, 0.75);
    }

    #[test]
    fn test_clock_is_monotonic() {
        let mut clock = AnimationClock::new();
        clock.tick(1.0);
        clock.tick(-3.0);
        assert_eq!(clock.elapsed(), 1.0);
        clock.tick(f32::NAN);
        assert_eq!(clock.elapsed(), 1.0);
        assert_eq!(clock.delta(), 0.0);
    }

    #[test]
    fn test_clock_keeps_time_over_hours() {
        let mut clock = AnimationClock::new();
        // Three hours at 60 FPS
        for _ in 0..648_000 {
            clock.tick(1.0 / 60.0);
        }
        assert!(
            (clock.elapsed_f64() - 10_800.0).abs() < 0.01,
            "Elapsed time drifted to {}",
            clock.elapsed_f64()
        );
    }

    #[test]
    fn test_clock_advances_after_days() {
        let mut clock = AnimationClock::new();
        clock.tick(524_288.0);
        let before = clock.elapsed();
        for _ in 0..600 {
            clock.tick(1.0 / 60.0);
        }
        assert!((clock.elapsed_f64() - 524_298.0).abs() < 0.01);
        assert!(clock.elapsed() > before, "Clock stalled at {before}");
    }
}
