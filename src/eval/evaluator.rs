use crate::{
    foundation::core::{CardIndex, Point, Size, Viewport},
    foundation::error::{CardstackError, CardstackResult},
    layout::solver::{StackLayout, resolve_stack_layout},
    scroll::phase::ScrollPhase,
    stack::model::StackConfig,
    style::palette::{CARD_FILL_OPACITY, Rgba8},
    transform::card::{CardTransform, card_transform},
};

/// Fully evaluated card stack for one frame.
#[derive(Clone, Debug, serde::Serialize)]
pub struct EvaluatedStack {
    /// Viewport the stack was laid out against.
    pub viewport: Viewport,
    /// Card states in painter's order, back to front.
    pub cards: Vec<EvaluatedCard>,
}

/// Evaluated visual state of one card, ready for a renderer to apply.
#[derive(Clone, Debug, serde::Serialize)]
pub struct EvaluatedCard {
    /// Card position in the stack.
    pub index: CardIndex,
    /// Draw order; later (higher-index) cards sit behind earlier ones.
    pub z: i32,
    /// Resolved fill color, palette entry with the stock wash opacity.
    pub color: Rgba8,
    /// Top-left origin before the scroll transform.
    pub origin: Point,
    /// Card frame in points.
    pub size: Size,
    /// Corner radius in points.
    pub corner_radius: f64,
    /// Scroll-driven rotation and scale.
    pub transform: CardTransform,
}

/// Stateless evaluator from stack description to per-frame card states.
pub struct Evaluator;

impl Evaluator {
    /// Evaluate one frame with a per-card signed progress scalar.
    ///
    /// `phases` must hold exactly `cfg.total_cards` finite values, one per
    /// card in index order, as sampled by the renderer's scroll container.
    #[tracing::instrument(skip(cfg, phases), fields(total_cards = cfg.total_cards))]
    pub fn eval_stack(
        cfg: &StackConfig,
        viewport: Viewport,
        phases: &[f64],
    ) -> CardstackResult<EvaluatedStack> {
        cfg.validate()?;
        if phases.len() != cfg.total_cards as usize {
            return Err(CardstackError::evaluation(format!(
                "expected {} phase values, got {}",
                cfg.total_cards,
                phases.len()
            )));
        }
        if let Some(pos) = phases.iter().position(|p| !p.is_finite()) {
            return Err(CardstackError::evaluation(format!(
                "phase value for card {pos} is not finite"
            )));
        }

        let layout = resolve_stack_layout(cfg, viewport)?;
        let mut cards = Vec::with_capacity(cfg.total_cards as usize);
        for i in 0..cfg.total_cards {
            let index = CardIndex(i);
            let progress = phases[index.as_usize()];
            cards.push(EvaluatedCard {
                index,
                z: StackLayout::z_for(index),
                color: cfg.palette.color_for(index).to_rgba8(CARD_FILL_OPACITY),
                origin: layout.origin_for(index),
                size: cfg.card_size,
                corner_radius: cfg.corner_radius,
                transform: card_transform(progress, index, cfg.total_cards),
            });
        }

        // Painter's order: most negative z first, so the last card paints
        // at the bottom of the pile.
        cards.sort_by_key(|c| c.z);
        tracing::debug!(cards = cards.len(), "evaluated card stack");

        Ok(EvaluatedStack { viewport, cards })
    }

    /// Evaluate one frame with every card at the same named phase anchor.
    pub fn eval_stack_at(
        cfg: &StackConfig,
        viewport: Viewport,
        phase: ScrollPhase,
    ) -> CardstackResult<EvaluatedStack> {
        let phases = vec![phase.value(); cfg.total_cards as usize];
        Self::eval_stack(cfg, viewport, &phases)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
