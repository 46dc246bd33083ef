//! Frame-rate-independent spawn pacing.
//!
//! Each tick banks `dt * rate` fractional "spawn credits"; one whole credit
//! buys one new animated letter. Because credits accrue from wall time, the
//! perceived spawn cadence stays constant whether the page renders at 30 or
//! 144 fps.

/// Credit accumulator plus the timestamp of the previous tick.
#[derive(Debug, Clone)]
pub struct SpawnClock {
    credit: f64,
    last_tick_ms: f64,
}

impl SpawnClock {
    pub fn new(now_ms: f64) -> Self {
        Self {
            credit: 0.0,
            last_tick_ms: now_ms,
        }
    }

    /// Advances to `now_ms` and banks credit for the elapsed interval.
    ///
    /// The delta is clamped to `[0, max_dt_secs]` so a stalled render loop
    /// (backgrounded tab, long GC pause) cannot bank a burst of spawns to
    /// release all at once on resume.
    pub fn advance(&mut self, now_ms: f64, rate_per_sec: f64, max_dt_secs: f64) {
        let dt = ((now_ms - self.last_tick_ms) / 1000.0).clamp(0.0, max_dt_secs);
        self.last_tick_ms = now_ms;
        self.credit += dt * rate_per_sec;
    }

    /// Takes one whole credit if available.
    pub fn try_consume(&mut self) -> bool {
        if self.credit >= 1.0 {
            self.credit -= 1.0;
            true
        } else {
            false
        }
    }

    /// Drops all banked credit and re-bases the tick timestamp.
    ///
    /// Must be called on visibility/focus changes: the dt clamp only guards
    /// ticks that actually run, not the gap while the loop was suspended.
    pub fn reset(&mut self, now_ms: f64) {
        self.credit = 0.0;
        self.last_tick_ms = now_ms;
    }

    pub fn credit(&self) -> f64 {
        self.credit
    }
}
