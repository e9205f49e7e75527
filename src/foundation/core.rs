use crate::foundation::error::{CardstackError, CardstackResult};

pub use kurbo::{Point, Rect, Size, Vec2};

/// Zero-based position of a card within the stack.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct CardIndex(pub u32);

impl CardIndex {
    /// Index as `f64`, for interpolation math.
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }

    /// Index as `usize`, for slice access.
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// Visible region the stack is laid out against, in logical points.
///
/// The original screen read the device bounds implicitly; here the renderer
/// passes the size in so layout stays a pure function of its arguments.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in points. Must be finite and > 0.
    pub width: f64,
    /// Height in points. Must be finite and > 0.
    pub height: f64,
}

impl Viewport {
    /// Validating constructor.
    pub fn new(width: f64, height: f64) -> CardstackResult<Self> {
        if !(width.is_finite() && width > 0.0) {
            return Err(CardstackError::validation("Viewport width must be > 0"));
        }
        if !(height.is_finite() && height > 0.0) {
            return Err(CardstackError::validation("Viewport height must be > 0"));
        }
        Ok(Self { width, height })
    }
}
