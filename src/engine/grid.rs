//! Static letter grid derived from the page title and viewport size.

use super::GridCell;

/// Derives the repeating seed text from the page title.
///
/// Lower-cases the title, keeps only the text before the first `" | "`
/// separator, and replaces every whitespace character with an underscore.
/// An empty result falls back to `fallback`. If the text contains an
/// underscore, one more is appended so consecutive repeats keep a visible
/// word break.
pub fn seed_text(title: &str, fallback: &str) -> String {
    let head = title.split(" | ").next().unwrap_or("");
    let mut text: String = head
        .to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect();

    if text.is_empty() {
        text = fallback.to_owned();
    }
    if text.contains('_') {
        text.push('_');
    }
    text
}

/// Builds the full cell grid for a viewport, row-major.
///
/// Column `j` always shows `seed[j % len]`, regardless of row, so every
/// column renders as a vertical repeat of one character. That repeat is the
/// intended look of the background, not an artifact.
///
/// A zero-area viewport or an empty seed yields an empty grid.
pub fn build_grid(seed: &str, width: f64, height: f64, cell_w: u32, cell_h: u32) -> Vec<GridCell> {
    let glyphs: Vec<char> = seed.chars().collect();
    if glyphs.is_empty() || width <= 0.0 || height <= 0.0 {
        return Vec::new();
    }

    let cols = (width / cell_w as f64).ceil() as u32;
    let rows = (height / cell_h as f64).ceil() as u32;

    let mut cells = Vec::with_capacity((cols * rows) as usize);
    for i in 0..rows {
        for j in 0..cols {
            cells.push(GridCell {
                x: j * cell_w,
                y: i * cell_h,
                glyph: glyphs[j as usize % glyphs.len()],
            });
        }
    }
    cells
}
