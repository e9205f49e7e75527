use crate::foundation::core::CardIndex;
use crate::foundation::error::{CardstackError, CardstackResult};

/// Opacity of the color wash behind each card's translucent material.
pub const CARD_FILL_OPACITY: f64 = 0.3;

/// Blur radius applied to the color wash behind each card, in points.
pub const CARD_BACKDROP_BLUR_RADIUS: f64 = 3.0;

/// Straight-alpha 8-bit RGBA color, ready for a renderer brush.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (straight, not premultiplied).
    pub a: u8,
}

/// Color authored in HSB (hue/saturation/brightness) space.
///
/// All three components are normalized to `[0, 1]`; hue wraps.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Hsb {
    /// Hue, as a fraction of a full turn.
    pub hue: f64,
    /// Saturation.
    pub saturation: f64,
    /// Brightness (HSV "value").
    pub brightness: f64,
}

impl Hsb {
    /// Build an HSB color.
    pub fn new(hue: f64, saturation: f64, brightness: f64) -> Self {
        Self {
            hue,
            saturation,
            brightness,
        }
    }

    /// Convert to 8-bit straight-alpha RGBA (sRGB space, standard HSV -> RGB).
    pub fn to_rgba8(self, alpha: f64) -> Rgba8 {
        fn to_u8(x: f64) -> u8 {
            (x.clamp(0.0, 1.0) * 255.0).round() as u8
        }

        let h = (self.hue.rem_euclid(1.0)) * 6.0;
        let s = self.saturation.clamp(0.0, 1.0);
        let v = self.brightness.clamp(0.0, 1.0);

        let sector = h.floor() as u32 % 6;
        let f = h - h.floor();
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let (r, g, b) = match sector {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        Rgba8 {
            r: to_u8(r),
            g: to_u8(g),
            b: to_u8(b),
            a: to_u8(alpha.clamp(0.0, 1.0)),
        }
    }
}

/// Ordered, cyclically-reused color sequence assigned to cards by index.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Palette {
    colors: Vec<Hsb>,
}

impl Palette {
    /// Build a palette from an ordered color list. Must be non-empty.
    pub fn new(colors: Vec<Hsb>) -> CardstackResult<Self> {
        if colors.is_empty() {
            return Err(CardstackError::validation("palette must be non-empty"));
        }
        Ok(Self { colors })
    }

    /// The stock five-step blue ramp: hue fixed at 0.6, saturation rising
    /// 0.6 -> 1.0 while brightness falls 0.9 -> 0.5.
    pub fn blue_ramp() -> Self {
        Self {
            colors: vec![
                Hsb::new(0.6, 0.6, 0.9),
                Hsb::new(0.6, 0.7, 0.8),
                Hsb::new(0.6, 0.8, 0.7),
                Hsb::new(0.6, 0.9, 0.6),
                Hsb::new(0.6, 1.0, 0.5),
            ],
        }
    }

    /// Number of colors in the cycle.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// True when the palette holds no colors. Deserialized palettes can be
    /// empty until [`crate::StackConfig::validate`] runs.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color for a card, cycling through the sequence by index.
    pub fn color_for(&self, index: CardIndex) -> Hsb {
        self.colors[index.as_usize() % self.colors.len()]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::blue_ramp()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/palette.rs"]
mod tests;
