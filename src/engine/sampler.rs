//! Uniform sampling without replacement, plus the injectable randomness seam.

use std::collections::HashMap;

/// Source of uniform randomness in `[0, 1)`.
///
/// The browser glue backs this with `Math.random`; tests use [`SeededRng`]
/// so every scenario replays exactly.
pub trait Rng {
    fn next_f64(&mut self) -> f64;

    /// Uniform index in `[0, n)`. `n` must be non-zero.
    fn next_index(&mut self, n: usize) -> usize {
        debug_assert!(n > 0);
        // next_f64 < 1.0, so the product floors into [0, n - 1].
        ((self.next_f64() * n as f64) as usize).min(n - 1)
    }
}

/// Linear congruential generator with the Numerical Recipes constants.
/// Deterministic and cheap; quality is ample for picking grid cells.
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    pub fn new(seed: u32) -> Self {
        // A zero state would lock the low bits; nudge it.
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        self.state
    }
}

impl Rng for SeededRng {
    fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / (u32::MAX as f64 + 1.0)
    }
}

/// Picks `n` distinct elements of `items`, uniformly at random.
///
/// Sparse partial Fisher-Yates: only the `n` slots actually touched are
/// tracked in a displacement map, so the call does O(n) work however large
/// `items` is.
///
/// # Panics
///
/// Panics when `n > items.len()`. The spawn scheduler bounds its requests
/// by the live grid size, so hitting this is a contract breach in the
/// caller, not a runtime condition to recover from.
pub fn sample<'a, T>(items: &'a [T], n: usize, rng: &mut dyn Rng) -> Vec<&'a T> {
    assert!(
        n <= items.len(),
        "sample: requested {} of {} elements",
        n,
        items.len()
    );

    // displaced[i] holds the index that was swapped into slot i.
    let mut displaced: HashMap<usize, usize> = HashMap::with_capacity(n);
    let mut picked = Vec::with_capacity(n);
    let mut remaining = items.len();

    for _ in 0..n {
        let slot = rng.next_index(remaining);
        let index = *displaced.get(&slot).unwrap_or(&slot);
        picked.push(&items[index]);

        // Move the current tail element into the chosen slot and shrink the
        // live range by one, exactly as an in-place Fisher-Yates would.
        remaining -= 1;
        let tail = *displaced.get(&remaining).unwrap_or(&remaining);
        displaced.insert(slot, tail);
    }

    picked
}
