//! Mapping raw channel samples into displayable pixels.
//!
//! Layers report raw `i32` values that may fall outside a display's
//! 8-bit range (the bar cycle goes negative away from its bar). The
//! narrowing is an explicit [`DisplayPolicy`] rather than an implicit
//! cast.

use stratum_core::{ChannelId, Coord};

use crate::environment::Environment;

/// How a raw sample is narrowed into a `u8` display channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayPolicy {
    /// Saturate into `[0, 255]`: negatives become 0, large values 255.
    #[default]
    Clamp,
    /// Keep the low 8 bits (two's complement), so -50 becomes 206.
    Wrap,
}

impl DisplayPolicy {
    /// Narrow `raw` into a display value.
    pub fn map(self, raw: i32) -> u8 {
        match self {
            Self::Clamp => raw.clamp(0, i32::from(u8::MAX)) as u8,
            Self::Wrap => raw as u8,
        }
    }
}

/// One displayable pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red component.
    pub r: u8,
    /// Green component.
    pub g: u8,
    /// Blue component.
    pub b: u8,
}

impl Environment {
    /// Sample channels 0, 1 and 2 at `at` and narrow them with `policy`.
    ///
    /// Missing channels read as 0.
    pub fn sample_rgb(&self, at: Coord, policy: DisplayPolicy) -> Rgb {
        Rgb {
            r: policy.map(self.sample_at(ChannelId::RED, at)),
            g: policy.map(self.sample_at(ChannelId::GREEN, at)),
            b: policy.map(self.sample_at(ChannelId::BLUE, at)),
        }
    }
}

/// A row-major capture of every cell in an environment's extent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl Frame {
    /// Sample every cell of `env`'s extent for the current tick.
    pub fn capture(env: &Environment, policy: DisplayPolicy) -> Self {
        let extent = env.extent();
        let cells = usize::try_from(extent.cell_count()).unwrap_or(usize::MAX);
        let mut pixels = Vec::with_capacity(cells);
        for y in 0..extent.height {
            for x in 0..extent.width {
                // Validated extents fit in i32.
                let at = Coord::new(x as i32, y as i32);
                pixels.push(env.sample_rgb(at, policy));
            }
        }
        Self {
            width: extent.width,
            height: extent.height,
            pixels,
        }
    }

    /// Frame width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = y as usize * self.width as usize + x as usize;
        self.pixels.get(idx).copied()
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Iterate over rows of pixels, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgb]> {
        self.pixels.chunks(self.width.max(1) as usize)
    }
}
