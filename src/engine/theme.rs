//! Maps the site's binary light/dark flag to the two fill colors used by
//! the background layers.

/// An opaque RGB triple; alpha is supplied at draw time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// CSS color string carrying the given alpha, e.g. `rgba(255, 255, 255, 0.5)`.
    pub fn rgba(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.0, self.1, self.2, alpha)
    }
}

/// Fill colors for the two canvas layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Color of the animated overlay letters (and their glow).
    pub animated: Rgb,
    /// Color of the faint static base grid.
    pub base: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Both layers share one color per mode: white on dark, black on light.
    /// Only the alpha channel differs between base and overlay draws.
    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => Palette {
                animated: Rgb(255, 255, 255),
                base: Rgb(255, 255, 255),
            },
            Theme::Light => Palette {
                animated: Rgb(0, 0, 0),
                base: Rgb(0, 0, 0),
            },
        }
    }

    pub fn from_dark_flag(is_dark: bool) -> Self {
        if is_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
