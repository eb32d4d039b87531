//! 두 규범 스펙트럼 비교 데이터 테스트.
use seismic_wind_toolbox::seismic::{compare_spectra, ComparisonInput, SiteClass, SpectrumError};

fn default_input() -> ComparisonInput {
    ComparisonInput {
        damping: 0.05,
        intensity: "7度(0.10g)".into(),
        site_category: "II".into(),
        earthquake_group: "第一组".into(),
        ss: 0.51,
        s1: 0.18,
        site_class: SiteClass::D,
        tl_s: 24.0,
        r: 5.0,
    }
}

#[test]
fn y_axis_covers_larger_peak() {
    let cmp = compare_spectra(&default_input()).unwrap();
    assert_eq!(cmp.alpha_max, 0.08);
    assert_eq!(cmp.tg_s, 0.35);
    let peak = cmp.chinese.peak().max(cmp.us.curve.peak());
    assert!((cmp.y_axis_max - 1.1 * peak).abs() < 1e-12);
    assert_eq!(cmp.x_axis_max, 6.0);
    assert_eq!(cmp.chinese_label, "China GB50011-2010");
    assert_eq!(cmp.us_label, "US ASCE7-16 (R=5)");
}

#[test]
fn both_curves_share_the_period_grid() {
    let cmp = compare_spectra(&default_input()).unwrap();
    assert_eq!(cmp.chinese.periods(), cmp.us.curve.periods());
}

#[test]
fn invalid_us_input_propagates() {
    let mut input = default_input();
    input.tl_s = -1.0;
    assert!(compare_spectra(&input).is_err());
}

#[test]
fn damping_outside_unit_interval_is_rejected() {
    for damping in [-0.05, 0.0, 1.0, f64::NAN] {
        let mut input = default_input();
        input.damping = damping;
        assert!(
            matches!(compare_spectra(&input), Err(SpectrumError::InvalidInput(_))),
            "damping={damping}"
        );
    }
}

#[test]
fn small_positive_damping_gives_finite_curves() {
    let mut input = default_input();
    input.damping = 0.01;
    let cmp = compare_spectra(&input).unwrap();
    assert!(cmp.chinese.accelerations().iter().all(|v| v.is_finite()));
    assert!(cmp.y_axis_max.is_finite());
}
