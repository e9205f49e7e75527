use super::*;

#[test]
fn blue_ramp_has_five_steps_at_fixed_hue() {
    let p = Palette::blue_ramp();
    assert_eq!(p.len(), 5);
    for i in 0..5 {
        assert_eq!(p.color_for(CardIndex(i)).hue, 0.6);
    }
    // Saturation rises while brightness falls across the ramp.
    let first = p.color_for(CardIndex(0));
    let last = p.color_for(CardIndex(4));
    assert!(first.saturation < last.saturation);
    assert!(first.brightness > last.brightness);
}

#[test]
fn palette_cycles_by_index() {
    let p = Palette::blue_ramp();
    assert_eq!(p.color_for(CardIndex(7)), p.color_for(CardIndex(2)));
    assert_eq!(p.color_for(CardIndex(29)), p.color_for(CardIndex(4)));
}

#[test]
fn empty_palette_is_rejected() {
    assert!(Palette::new(vec![]).is_err());
    assert!(Palette::new(vec![Hsb::new(0.6, 1.0, 0.5)]).is_ok());
}

#[test]
fn hsb_conversion_matches_known_anchors() {
    // Deepest ramp blue: hue 0.6, full saturation, half brightness.
    let c = Hsb::new(0.6, 1.0, 0.5).to_rgba8(1.0);
    assert_eq!(c, Rgba8 { r: 0, g: 51, b: 128, a: 255 });

    // Zero saturation collapses to gray regardless of hue.
    let g = Hsb::new(0.25, 0.0, 0.5).to_rgba8(1.0);
    assert_eq!((g.r, g.g, g.b), (128, 128, 128));

    // Hue wraps past a full turn.
    assert_eq!(
        Hsb::new(1.6, 1.0, 0.5).to_rgba8(1.0),
        Hsb::new(0.6, 1.0, 0.5).to_rgba8(1.0)
    );
}

#[test]
fn wash_alpha_is_quantized_from_opacity() {
    let c = Hsb::new(0.6, 0.6, 0.9).to_rgba8(CARD_FILL_OPACITY);
    assert_eq!(c.a, 77); // 0.3 * 255, rounded
}

#[test]
fn palette_serde_round_trips() {
    let p = Palette::blue_ramp();
    let json = serde_json::to_string(&p).unwrap();
    let back: Palette = serde_json::from_str(&json).unwrap();
    assert_eq!(back, p);
}
