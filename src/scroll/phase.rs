//! Scroll phase conventions.
//!
//! A card's phase describes where it sits relative to the viewport during a
//! scroll interaction. The renderer owns the scroll container and supplies
//! the phase; this crate only consumes it. The continuous form is a signed
//! progress scalar in `[-1, 1]` (`-1` fully leading, `0` centered, `+1`
//! fully trailing); the enum names the three anchor samples of that scalar.

/// Named anchor states of the scroll transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ScrollPhase {
    /// Card is at the leading edge, most offset (progress `-1`).
    Leading,
    /// Card is centered in the viewport, neutral (progress `0`).
    Identity,
    /// Card is at the trailing edge, minimally offset (progress `+1`).
    Trailing,
}

impl ScrollPhase {
    /// Signed progress scalar this anchor samples.
    pub fn value(self) -> f64 {
        match self {
            Self::Leading => -1.0,
            Self::Identity => 0.0,
            Self::Trailing => 1.0,
        }
    }

    /// True for the centered, neutral state.
    pub fn is_identity(self) -> bool {
        matches!(self, Self::Identity)
    }

    /// Nearest anchor for a continuous progress value. Ties at the midpoints
    /// resolve away from `Identity`.
    pub fn nearest(progress: f64) -> Self {
        if progress <= -0.5 {
            Self::Leading
        } else if progress >= 0.5 {
            Self::Trailing
        } else {
            Self::Identity
        }
    }
}
