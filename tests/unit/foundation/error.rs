use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        HybridError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        HybridError::asset_load("x")
            .to_string()
            .contains("asset load error:")
    );
    assert!(
        HybridError::topology("x")
            .to_string()
            .contains("unexpected topology:")
    );
    assert!(
        HybridError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = HybridError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
