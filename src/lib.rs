//! Cardstack evaluates a horizontally scrollable stack of overlapping cards.
//!
//! The crate is the pure half of a decorative card-stack screen: it maps each
//! card's index and scroll phase to the visual state a renderer applies (3D
//! rotation, scale, placement, z-order and fill color). It owns no scroll
//! container, draws nothing and keeps no state between calls.
//!
//! # Pipeline overview
//!
//! 1. **Describe**: build or deserialize a [`StackConfig`] (card count, card
//!    frame, overlap, palette, reference viewport)
//! 2. **Place**: `StackConfig + Viewport -> StackLayout` (paddings and
//!    per-card origins, no hidden screen queries)
//! 3. **Evaluate**: `StackConfig + Viewport + per-card phases ->
//!    EvaluatedStack` (painter-ordered card states for one frame)
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: evaluation is pure and stable for a given input;
//!   repeated calls yield bit-identical output.
//! - **Renderer-agnostic**: scroll phases come in, transform descriptors go
//!   out; applying them (and animating between frames) is the renderer's job.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod eval;
mod foundation;
mod layout;
mod scroll;
mod stack;
mod style;

/// Shared transform helpers (card rotation/scale math, interpolation).
pub mod transform;

pub use eval::evaluator::{EvaluatedCard, EvaluatedStack, Evaluator};
pub use foundation::core::{CardIndex, Point, Rect, Size, Vec2, Viewport};
pub use foundation::error::{CardstackError, CardstackResult};
pub use layout::solver::{StackLayout, resolve_stack_layout};
pub use scroll::phase::ScrollPhase;
pub use stack::model::StackConfig;
pub use style::palette::{CARD_BACKDROP_BLUR_RADIUS, CARD_FILL_OPACITY, Hsb, Palette, Rgba8};
pub use transform::card::{
    Axis3, BASE_ROTATION_DEG, CardTransform, MAX_ROTATION_SPAN_DEG, ROTATION_AXIS,
    ROTATION_PERSPECTIVE, Rotation3D, SCALE_IDENTITY, SCALE_LEADING, SCALE_TRAILING,
    TransformAnchor, card_transform, resting_angle_deg, rotation_deg, scale_for,
    scale_for_progress,
};
