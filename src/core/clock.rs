use std::time::Instant;

use crate::config::AnimationConfig;

/// Looping animation clock - maps elapsed time to progress in [0, 1)
#[derive(Debug, Clone, Copy)]
pub struct AnimationClock {
    start: Instant,
    period: f32,
}

impl AnimationClock {
    /// Create clock starting now with the given loop period in seconds.
    /// A non-positive or non-finite period falls back to the default.
    pub fn new(period: f32) -> Self {
        let period = if is_valid_period(period) {
            period
        } else {
            let fallback = AnimationConfig::default().period;
            log::warn!("Invalid animation period {}, using {}", period, fallback);
            fallback
        };

        Self {
            start: Instant::now(),
            period,
        }
    }

    pub fn period(&self) -> f32 {
        self.period
    }

    /// Seconds since the clock started
    pub fn elapsed(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }

    /// Progress at the current instant
    pub fn progress(&self) -> f32 {
        self.progress_at(self.elapsed())
    }

    /// Progress after `elapsed` seconds; always in [0, 1)
    pub fn progress_at(&self, elapsed: f64) -> f32 {
        progress(elapsed, self.period)
    }

    /// Restart the loop from zero
    pub fn reset(&mut self) {
        self.start = Instant::now();
    }
}

fn is_valid_period(period: f32) -> bool {
    period.is_finite() && period > 0.0
}

/// `(elapsed mod period) / period`, folded into [0, 1).
///
/// The modulo runs in `f64` so the loop keeps its resolution after days of
/// uptime. An invalid period or elapsed time yields 0.
pub fn progress(elapsed: f64, period: f32) -> f32 {
    if !is_valid_period(period) || !elapsed.is_finite() {
        return 0.0;
    }

    let period = f64::from(period);
    let p = (elapsed.rem_euclid(period) / period) as f32;
    // Rounding (in rem_euclid or the f32 cast) can land exactly on 1
    if p >= 1.0 {
        0.0
    } else {
        p
    }
}
