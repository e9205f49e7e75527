use crate::{
    foundation::core::{CardIndex, Point, Viewport},
    foundation::error::CardstackResult,
    stack::model::StackConfig,
};

/// Resolved placement of the stack inside a viewport.
///
/// Paddings follow the source screen: authored against a reference device
/// and scaled proportionally to the actual viewport, but computed from the
/// explicit [`Viewport`] argument rather than a global screen lookup.
#[derive(Clone, Debug, Default, serde::Serialize)]
pub struct StackLayout {
    /// Leading (left) padding in points; negative shifts the stack off-edge.
    pub leading_padding: f64,
    /// Bottom padding in points; negative extends the centering box down.
    pub bottom_padding: f64,
    /// Trailing (right) padding in points.
    pub trailing_padding: f64,
    origins: Vec<Point>,
}

impl StackLayout {
    /// Top-left origin of a card, before its scroll transform is applied.
    pub fn origin_for(&self, index: CardIndex) -> Point {
        self.origins
            .get(index.as_usize())
            .copied()
            .unwrap_or_else(|| Point::new(0.0, 0.0))
    }

    /// Draw order for a card: later cards sit behind earlier ones.
    pub fn z_for(index: CardIndex) -> i32 {
        -(index.0 as i32)
    }

    /// Number of placed cards.
    pub fn len(&self) -> usize {
        self.origins.len()
    }

    /// True when no cards were placed.
    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
    }
}

/// Place every card of `cfg` inside `viewport`.
///
/// Cards advance left to right by `card width + overlap_spacing` per index
/// and share a vertical center: the midline of the viewport box extended by
/// the (negative) bottom padding, matching the source screen's centered
/// stack nudged below the fold.
pub fn resolve_stack_layout(cfg: &StackConfig, viewport: Viewport) -> CardstackResult<StackLayout> {
    cfg.validate()?;

    let scale_x = viewport.width / cfg.reference_size.width;
    let scale_y = viewport.height / cfg.reference_size.height;

    let leading_padding = cfg.leading_padding_base * scale_x;
    let bottom_padding = cfg.bottom_padding_base * scale_y;
    let trailing_padding = viewport.width - cfg.trailing_inset_base * scale_x;

    let stride = cfg.card_size.width + cfg.overlap_spacing;
    let y = (viewport.height - bottom_padding - cfg.card_size.height) / 2.0;

    let mut origins = Vec::with_capacity(cfg.total_cards as usize);
    for index in 0..cfg.total_cards {
        let x = leading_padding + f64::from(index) * stride;
        origins.push(Point::new(x, y));
    }

    Ok(StackLayout {
        leading_padding,
        bottom_padding,
        trailing_padding,
        origins,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/layout/solver.rs"]
mod tests;
