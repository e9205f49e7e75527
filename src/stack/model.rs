use crate::foundation::core::Size;
use crate::foundation::error::{CardstackError, CardstackResult};
use crate::style::palette::Palette;

/// A complete card stack description.
///
/// The config is a pure data model that can be built programmatically (every
/// field has the stock default) or deserialized via Serde (JSON). Evaluating
/// a config for a frame is performed by [`crate::Evaluator::eval_stack`].
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct StackConfig {
    /// Number of cards in the stack. Must be >= 2: the per-card resting
    /// angle interpolates over `total_cards - 1`.
    #[serde(default = "default_total_cards")]
    pub total_cards: u32,
    /// Card frame in points.
    #[serde(default = "default_card_size")]
    pub card_size: Size,
    /// Card corner radius in points.
    #[serde(default = "default_corner_radius")]
    pub corner_radius: f64,
    /// Horizontal spacing between neighbouring cards. Negative values
    /// overlap them; the stock `-260` leaves a 40pt stride per card.
    #[serde(default = "default_overlap_spacing")]
    pub overlap_spacing: f64,
    /// Color cycle assigned to cards by index.
    #[serde(default)]
    pub palette: Palette,
    /// Viewport the padding bases below were authored against.
    #[serde(default = "default_reference_size")]
    pub reference_size: Size,
    /// Leading padding at the reference viewport, scaled by width.
    #[serde(default = "default_leading_padding_base")]
    pub leading_padding_base: f64,
    /// Bottom padding at the reference viewport, scaled by height.
    #[serde(default = "default_bottom_padding_base")]
    pub bottom_padding_base: f64,
    /// Trailing inset at the reference viewport; the trailing padding is the
    /// viewport width minus this, scaled by width.
    #[serde(default = "default_trailing_inset_base")]
    pub trailing_inset_base: f64,
}

fn default_total_cards() -> u32 {
    30
}

fn default_card_size() -> Size {
    Size::new(300.0, 500.0)
}

fn default_corner_radius() -> f64 {
    5.0
}

fn default_overlap_spacing() -> f64 {
    -260.0
}

fn default_reference_size() -> Size {
    // iPhone 16 Pro logical points, the device the paddings were tuned on.
    Size::new(430.0, 932.0)
}

fn default_leading_padding_base() -> f64 {
    -240.0
}

fn default_bottom_padding_base() -> f64 {
    -360.0
}

fn default_trailing_inset_base() -> f64 {
    180.0
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            total_cards: default_total_cards(),
            card_size: default_card_size(),
            corner_radius: default_corner_radius(),
            overlap_spacing: default_overlap_spacing(),
            palette: Palette::default(),
            reference_size: default_reference_size(),
            leading_padding_base: default_leading_padding_base(),
            bottom_padding_base: default_bottom_padding_base(),
            trailing_inset_base: default_trailing_inset_base(),
        }
    }
}

impl StackConfig {
    /// Validate structural invariants.
    pub fn validate(&self) -> CardstackResult<()> {
        if self.total_cards < 2 {
            return Err(CardstackError::validation(
                "StackConfig total_cards must be >= 2",
            ));
        }
        if !(self.card_size.width.is_finite() && self.card_size.width > 0.0)
            || !(self.card_size.height.is_finite() && self.card_size.height > 0.0)
        {
            return Err(CardstackError::validation(
                "StackConfig card_size must be positive and finite",
            ));
        }
        if !(self.corner_radius.is_finite() && self.corner_radius >= 0.0) {
            return Err(CardstackError::validation(
                "StackConfig corner_radius must be >= 0",
            ));
        }
        if !self.overlap_spacing.is_finite() {
            return Err(CardstackError::validation(
                "StackConfig overlap_spacing must be finite",
            ));
        }
        if self.palette.is_empty() {
            return Err(CardstackError::validation(
                "StackConfig palette must be non-empty",
            ));
        }
        if !(self.reference_size.width.is_finite() && self.reference_size.width > 0.0)
            || !(self.reference_size.height.is_finite() && self.reference_size.height > 0.0)
        {
            return Err(CardstackError::validation(
                "StackConfig reference_size must be positive and finite",
            ));
        }
        for (name, v) in [
            ("leading_padding_base", self.leading_padding_base),
            ("bottom_padding_base", self.bottom_padding_base),
            ("trailing_inset_base", self.trailing_inset_base),
        ] {
            if !v.is_finite() {
                return Err(CardstackError::validation(format!(
                    "StackConfig {name} must be finite"
                )));
            }
        }
        Ok(())
    }

    /// Deserialize from JSON and validate.
    pub fn from_json_str(json: &str) -> CardstackResult<Self> {
        let cfg: Self =
            serde_json::from_str(json).map_err(|e| CardstackError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Serialize to pretty JSON.
    pub fn to_json_string(&self) -> CardstackResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| CardstackError::serde(e.to_string()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stack/model.rs"]
mod tests;
