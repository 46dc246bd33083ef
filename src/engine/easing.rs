//! Sine ease across a letter's whole lifespan: 0 -> 1 -> 0.

use std::f64::consts::PI;

/// Visibility of a letter at `now_ms`, given its spawn and expiry times.
///
/// Progress through the lifespan is clamped to `[0, 1]` and fed through
/// `sin(t * PI)`, so the letter starts fully transparent, peaks exactly at
/// mid-life and fades back out. A degenerate lifespan (`end <= start`) is
/// invisible.
pub fn fade_alpha(now_ms: f64, start_ms: f64, end_ms: f64) -> f64 {
    let duration = end_ms - start_ms;
    if duration <= 0.0 {
        return 0.0;
    }
    let t = ((now_ms - start_ms) / duration).clamp(0.0, 1.0);
    (t * PI).sin()
}
