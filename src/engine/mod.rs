//! Pure background-animation engine.
//!
//! Holds the static letter grid plus the set of currently animating letters
//! and advances them one tick at a time. The module is deliberately free of
//! any `web_sys` types: time and randomness come in through arguments, draw
//! output goes out as plain [`GlyphDraw`] records, so the whole state
//! machine runs (and is tested) natively without a canvas.

pub mod easing;
pub mod grid;
pub mod sampler;
pub mod scheduler;
pub mod theme;

use easing::fade_alpha;
use sampler::{sample, Rng};
use scheduler::SpawnClock;
use theme::{Palette, Theme};

/// Tunables for the animation. Defaults mirror the production site.
#[derive(Debug, Clone)]
pub struct Config {
    /// Min/max lifetime of one animated letter, in seconds.
    pub fade_duration_secs: (f64, f64),
    /// Upper bound on concurrently animated letters.
    pub max_active_letters: usize,
    /// Letters spawned per second of wall time.
    pub spawn_rate_per_sec: f64,
    /// Safety cap on spawns within a single tick.
    pub max_spawns_per_tick: u32,
    /// Frame-delta clamp, in seconds, against catch-up bursts.
    pub max_frame_delta_secs: f64,
    /// Cell width in px; one glyph per cell.
    pub cell_width: u32,
    /// Cell height in px.
    pub cell_height: u32,
    /// CSS font for the base layer; the overlay uses its bold variant.
    pub font: String,
    /// Seed text used when the page title yields nothing.
    pub default_seed_text: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fade_duration_secs: (2.0, 7.0),
            max_active_letters: 30,
            spawn_rate_per_sec: 3.0,
            max_spawns_per_tick: 2,
            max_frame_delta_secs: 0.05,
            cell_width: 17,
            cell_height: 35,
            font: r#"28px "Geist Mono Variable""#.to_owned(),
            default_seed_text: "littlebit.dev".to_owned(),
        }
    }
}

/// One position of the static grid. Immutable once generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub x: u32,
    pub y: u32,
    pub glyph: char,
}

/// A grid cell currently mid-animation.
#[derive(Debug, Clone, Copy)]
struct ActiveLetter {
    cell: GridCell,
    spawned_at_ms: f64,
    expires_at_ms: f64,
}

/// One overlay draw emitted by [`Engine::step`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphDraw {
    pub x: u32,
    pub y: u32,
    pub glyph: char,
    pub alpha: f64,
}

pub struct Engine {
    config: Config,
    palette: Palette,
    grid: Vec<GridCell>,
    active: Vec<ActiveLetter>,
    clock: SpawnClock,
}

impl Engine {
    /// Creates an engine with an empty grid; call [`Engine::reinit`] before
    /// the first step.
    pub fn new(config: Config, now_ms: f64) -> Self {
        Self {
            config,
            palette: Theme::Dark.palette(),
            grid: Vec::new(),
            active: Vec::new(),
            clock: SpawnClock::new(now_ms),
        }
    }

    /// Full state replacement for a new viewport, title or theme.
    ///
    /// Rebuilds the grid from scratch and discards every animating letter
    /// with it, so nothing can reference a cell of the previous generation.
    /// Banked spawn credit survives; only the grid contents change.
    pub fn reinit(&mut self, width: f64, height: f64, title: &str, theme: Theme) {
        self.palette = theme.palette();
        let seed = grid::seed_text(title, &self.config.default_seed_text);
        self.grid = grid::build_grid(
            &seed,
            width,
            height,
            self.config.cell_width,
            self.config.cell_height,
        );
        self.active.clear();
    }

    /// Drops banked spawn credit and re-bases timing at `now_ms`.
    ///
    /// Invoked by the host when visibility or focus changes, so the stalled
    /// interval never counts toward the next tick's delta.
    pub fn reset_timing(&mut self, now_ms: f64) {
        self.clock.reset(now_ms);
    }

    /// Advances one tick: banks spawn credit, activates new letters within
    /// the per-tick and concurrency caps, retires expired ones, and returns
    /// the overlay draw list for the survivors.
    pub fn step(&mut self, now_ms: f64, rng: &mut dyn Rng) -> Vec<GlyphDraw> {
        self.clock.advance(
            now_ms,
            self.config.spawn_rate_per_sec,
            self.config.max_frame_delta_secs,
        );

        let mut spawned_this_tick = 0u32;
        while !self.grid.is_empty()
            && self.active.len() < self.config.max_active_letters
            && spawned_this_tick < self.config.max_spawns_per_tick
            && self.clock.try_consume()
        {
            let cell = *sample(&self.grid, 1, rng)[0];
            let (lo, hi) = self.config.fade_duration_secs;
            let lifetime_secs = lo + rng.next_f64() * (hi - lo);
            self.active.push(ActiveLetter {
                cell,
                spawned_at_ms: now_ms,
                expires_at_ms: now_ms + lifetime_secs * 1000.0,
            });
            spawned_this_tick += 1;
        }

        // Expired letters just disappear; replacements come only from the
        // credit accumulator above, so a batch of simultaneous expiries
        // cannot trigger a synchronized respawn pulse.
        self.active.retain(|letter| now_ms < letter.expires_at_ms);

        self.active
            .iter()
            .map(|letter| GlyphDraw {
                x: letter.cell.x,
                y: letter.cell.y,
                glyph: letter.cell.glyph,
                alpha: fade_alpha(now_ms, letter.spawned_at_ms, letter.expires_at_ms),
            })
            .collect()
    }

    pub fn grid(&self) -> &[GridCell] {
        &self.grid
    }

    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    pub fn spawn_credit(&self) -> f64 {
        self.clock.credit()
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
