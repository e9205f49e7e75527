use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CardstackError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        CardstackError::layout("x")
            .to_string()
            .contains("layout error:")
    );
    assert!(
        CardstackError::evaluation("x")
            .to_string()
            .contains("evaluation error:")
    );
    assert!(
        CardstackError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CardstackError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
