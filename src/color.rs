/// Color value, formatting and generation.
use std::fmt;
use std::str::FromStr;

use anyhow::{Result, bail};
use rand::RngExt;

/// A color as three 8-bit channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Render the color in the given notation.
    pub fn format(self, mode: ColorMode) -> String {
        match mode {
            ColorMode::Hex => format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b),
            ColorMode::Rgb => format!("rgb({}, {}, {})", self.r, self.g, self.b),
        }
    }

    /// Perceived brightness, used to pick readable text on top of the swatch.
    pub fn is_light(self) -> bool {
        let luma = 299 * u32::from(self.r) + 587 * u32::from(self.g) + 114 * u32::from(self.b);
        luma / 1000 >= 128
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    Hex,
    Rgb,
}

impl ColorMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Hex => "hex",
            ColorMode::Rgb => "rgb",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" => Ok(ColorMode::Hex),
            "rgb" => Ok(ColorMode::Rgb),
            other => bail!("unknown color mode '{other}', expected 'hex' or 'rgb'"),
        }
    }
}

/// Source of fresh colors.
pub trait ColorSource {
    fn generate(&mut self) -> Rgb;
}

/// Draws every channel uniformly from the thread RNG.
#[derive(Debug, Default)]
pub struct RandomSource;

impl ColorSource for RandomSource {
    fn generate(&mut self) -> Rgb {
        let mut rng = rand::rng();
        Rgb::new(rng.random(), rng.random(), rng.random())
    }
}

/// The color on screen and the notation it is shown in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorState {
    pub mode: ColorMode,
    pub value: Rgb,
}

impl ColorState {
    pub fn new(mode: ColorMode, source: &mut dyn ColorSource) -> Self {
        Self {
            mode,
            value: source.generate(),
        }
    }

    pub fn display(&self) -> String {
        self.value.format(self.mode)
    }

    /// Replace the value, keeping the mode.
    pub fn regenerate(&mut self, source: &mut dyn ColorSource) {
        self.value = source.generate();
    }

    /// Switch notation. An effective switch also draws a new color; switching
    /// to the active mode leaves the state untouched. Returns whether the
    /// state changed.
    pub fn switch_mode(&mut self, mode: ColorMode, source: &mut dyn ColorSource) -> bool {
        if self.mode == mode {
            return false;
        }
        self.mode = mode;
        self.value = source.generate();
        true
    }
}
