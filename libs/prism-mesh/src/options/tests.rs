use super::*;

fn code_of(err: MesherError) -> &'static str {
    match err {
        MesherError::InvalidOptions { code, .. } => code,
        other => panic!("expected InvalidOptions, got {other:?}"),
    }
}

#[test]
fn test_default_options_validate() {
    let mut options = MesherOptions::default();
    assert!(options.validate().is_ok());
    assert!(options.is_validated());
}

#[test]
fn test_validation_is_cached_and_resettable() {
    let mut options = MesherOptions::default();
    options.validate().unwrap();
    assert!(options.is_validated());

    options.target_edge_length_xy = -1.0;
    // Stale cache still reports success until invalidated.
    assert!(options.validate().is_ok());

    options.invalidate();
    assert!(options.validate().is_err());
}

#[test]
fn test_negative_edge_length_rejected() {
    let mut options = MesherOptions::default();
    options.target_edge_length_xy = 0.0;
    assert_eq!(code_of(options.validate().unwrap_err()), "edge_length_xy");

    let mut options = MesherOptions::default();
    options.target_edge_length_z = f64::NAN;
    assert_eq!(code_of(options.validate().unwrap_err()), "edge_length_z");
}

#[test]
fn test_oversized_edge_length_rejected() {
    let mut options = MesherOptions::default();
    options.target_edge_length_xy = 1e9;
    assert_eq!(code_of(options.validate().unwrap_err()), "edge_length_xy");
}

#[test]
fn test_quality_out_of_range_rejected() {
    let mut options = MesherOptions::default();
    options.min_cap_quad_quality = 1.5;
    assert_eq!(code_of(options.validate().unwrap_err()), "quality_range");
}

#[test]
fn test_epsilon_must_be_positive() {
    let mut options = MesherOptions::default();
    options.epsilon = 0.0;
    assert_eq!(code_of(options.validate().unwrap_err()), "epsilon");
}

#[test]
fn test_refined_length_exceeding_base_rejected() {
    let mut options = MesherOptions::default();
    options.target_edge_length_xy = 1.0;
    options.hole_refinement = Some(RefinementOptions::new(2.0, 1.0));
    assert_eq!(code_of(options.validate().unwrap_err()), "hole_refinement");
}

#[test]
fn test_band_out_of_range_rejected() {
    let mut options = MesherOptions::default();
    options.segment_refinement = Some(RefinementOptions::new(0.5, -1.0));
    assert_eq!(
        code_of(options.validate().unwrap_err()),
        "segment_refinement"
    );

    let mut options = MesherOptions::default();
    options.segment_refinement = Some(RefinementOptions::new(0.5, 2e4));
    assert_eq!(
        code_of(options.validate().unwrap_err()),
        "segment_refinement"
    );
}

#[test]
fn test_valid_refinement_accepted() {
    let mut options = MesherOptions::default();
    options.hole_refinement = Some(RefinementOptions::new(0.25, 2.0));
    options.segment_refinement = Some(RefinementOptions::new(0.5, 0.0));
    assert!(options.validate().is_ok());
}
