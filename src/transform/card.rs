//! Scroll-driven rotation and scale for stacked cards.
//!
//! These functions are the visual contract of the effect. The constants are
//! not derived from anything; they are the tuned values the effect was
//! authored with and must be reproduced exactly for visual parity.

use crate::foundation::core::CardIndex;
use crate::scroll::phase::ScrollPhase;
use crate::transform::linear::{clamp_signed_unit, lerp};

/// Extra rotation spread across the stack, index 0 to last, in degrees.
pub const MAX_ROTATION_SPAN_DEG: f64 = -10.0;

/// Resting rotation of the first card, in degrees.
pub const BASE_ROTATION_DEG: f64 = -45.0;

/// Scale of a card at the leading edge of the viewport.
pub const SCALE_LEADING: f64 = 1.9;

/// Scale of a centered card.
pub const SCALE_IDENTITY: f64 = 1.4;

/// Scale of a card at the trailing edge of the viewport.
pub const SCALE_TRAILING: f64 = 1.0;

/// Perspective divisor for the 3D rotation.
pub const ROTATION_PERSPECTIVE: f64 = 0.5;

/// Axis weights the card rotation is applied around.
pub const ROTATION_AXIS: Axis3 = Axis3 {
    x: 0.5,
    y: 1.8,
    z: 1.2,
};

/// Weighted 3D rotation axis.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Axis3 {
    /// X-axis weight.
    pub x: f64,
    /// Y-axis weight.
    pub y: f64,
    /// Z-axis weight.
    pub z: f64,
}

/// Corner of the card frame a transform is anchored at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TransformAnchor {
    /// Top-trailing corner (rotation pivot).
    TopTrailing,
    /// Bottom-trailing corner (scale pivot).
    BottomTrailing,
}

/// A 3D rotation descriptor for the renderer to apply.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rotation3D {
    /// Rotation angle in degrees.
    pub degrees: f64,
    /// Weighted rotation axis.
    pub axis: Axis3,
    /// Anchor corner the rotation pivots around.
    pub anchor: TransformAnchor,
    /// Perspective divisor.
    pub perspective: f64,
}

/// Complete scroll-driven transform for one card.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CardTransform {
    /// 3D rotation descriptor.
    pub rotation: Rotation3D,
    /// Uniform scale factor.
    pub scale: f64,
    /// Anchor corner the scale pivots around.
    pub scale_anchor: TransformAnchor,
}

/// Rotation a card holds before any scroll amplification, in degrees.
///
/// Interpolates linearly from [`BASE_ROTATION_DEG`] at index 0 to
/// `BASE_ROTATION_DEG + MAX_ROTATION_SPAN_DEG` at the last index.
///
/// Panics when `total_cards < 2` or `index` is out of range; callers going
/// through [`crate::StackConfig::validate`] never hit either.
pub fn resting_angle_deg(index: CardIndex, total_cards: u32) -> f64 {
    assert!(total_cards >= 2, "card stack requires at least 2 cards");
    assert!(index.0 < total_cards, "card index out of range");
    (index.as_f64() / f64::from(total_cards - 1)) * MAX_ROTATION_SPAN_DEG + BASE_ROTATION_DEG
}

/// Scroll-amplified rotation in degrees: `resting * (1 + progress)`.
///
/// `progress` is the signed phase scalar supplied by the renderer; `0.0`
/// leaves the resting angle untouched, `+1.0` doubles it and `-1.0` flattens
/// the card to zero.
pub fn rotation_deg(progress: f64, index: CardIndex, total_cards: u32) -> f64 {
    resting_angle_deg(index, total_cards) * (1.0 + progress)
}

/// Scale for one of the three named phase anchors.
pub fn scale_for(phase: ScrollPhase) -> f64 {
    match phase {
        ScrollPhase::Leading => SCALE_LEADING,
        ScrollPhase::Identity => SCALE_IDENTITY,
        ScrollPhase::Trailing => SCALE_TRAILING,
    }
}

/// Scale for a continuous progress scalar.
///
/// The source effect only pins the three anchors; intermediate values are
/// defined here as piecewise-linear between them, clamped outside `[-1, 1]`.
pub fn scale_for_progress(progress: f64) -> f64 {
    let p = clamp_signed_unit(progress);
    if p < 0.0 {
        lerp(SCALE_IDENTITY, SCALE_LEADING, -p)
    } else {
        lerp(SCALE_IDENTITY, SCALE_TRAILING, p)
    }
}

/// Full transform for one card at a given scroll progress.
pub fn card_transform(progress: f64, index: CardIndex, total_cards: u32) -> CardTransform {
    CardTransform {
        rotation: Rotation3D {
            degrees: rotation_deg(progress, index, total_cards),
            axis: ROTATION_AXIS,
            anchor: TransformAnchor::TopTrailing,
            perspective: ROTATION_PERSPECTIVE,
        },
        scale: scale_for_progress(progress),
        scale_anchor: TransformAnchor::BottomTrailing,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/card.rs"]
mod tests;
