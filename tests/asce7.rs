//! ASCE 7-16 설계 응답 스펙트럼 회귀 테스트.
use seismic_wind_toolbox::seismic::asce7::{
    damping_adjustment_factor, site_coefficients, us_spectrum, SiteClass, UsSpectrumInput,
};
use seismic_wind_toolbox::seismic::spectrum::{PERIOD_MAX_S, PERIOD_MIN_S, SAMPLE_COUNT};
use seismic_wind_toolbox::seismic::SpectrumError;

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.9} got {actual:.9} (diff {diff:.3e})"
    );
}

fn default_input() -> UsSpectrumInput {
    UsSpectrumInput {
        ss: 0.51,
        s1: 0.18,
        site_class: SiteClass::D,
        tl_s: 24.0,
        r: 5.0,
        damping: 0.05,
    }
}

#[test]
fn site_d_interpolates_between_keys() {
    let c = site_coefficients(0.51, 0.18, SiteClass::D);
    assert!(c.fa >= 1.2 && c.fa <= 1.4, "fa={}", c.fa);
    assert!(c.fv >= 2.2 && c.fv <= 2.4, "fv={}", c.fv);
    assert_close("fa", c.fa, 1.392, 1e-12);
    assert_close("fv", c.fv, 2.24, 1e-12);
    assert!(!c.fa_clamped && !c.fv_clamped);
}

#[test]
fn out_of_table_values_clamp() {
    let c = site_coefficients(2.0, 0.05, SiteClass::C);
    assert_eq!(c.fa, 1.2);
    assert_eq!(c.fv, 1.5);
    assert!(c.fa_clamped && c.fv_clamped);
}

#[test]
fn design_values_are_two_thirds_of_mce() {
    let res = us_spectrum(&default_input()).unwrap();
    assert_close("SDS", res.sds(), 2.0 / 3.0 * res.fa() * 0.51, 1e-12);
    assert_close("SD1", res.sd1(), 2.0 / 3.0 * res.fv() * 0.18, 1e-12);
    assert_close("Ts", res.design.ts_s, res.sd1() / res.sds(), 1e-12);
    assert_close("T0", res.design.t0_s, 0.2 * res.sd1() / res.sds(), 1e-12);
}

#[test]
fn damping_factor_bands() {
    assert_eq!(damping_adjustment_factor(0.01), 0.8);
    assert_eq!(damping_adjustment_factor(0.02), 0.8);
    assert_close("B(0.05)", damping_adjustment_factor(0.05), 1.0, 1e-12);
    assert_close("B(0.075)", damping_adjustment_factor(0.075), 1.1, 1e-12);
    assert_close("B(0.15)", damping_adjustment_factor(0.15), 1.35, 1e-12);
    assert_eq!(damping_adjustment_factor(0.3), 1.5);
}

#[test]
fn curve_branches_divided_by_r_and_b() {
    let input = default_input();
    let res = us_spectrum(&input).unwrap();
    let b = res.damping_factor;
    let sds = res.sds();
    let sd1 = res.sd1();

    let first = res.curve.points()[0];
    assert!(first.period_s < res.design.t0_s);
    let expected = sds * (0.4 + 0.6 * first.period_s / res.design.t0_s) / input.r / b;
    assert_close("ramp", first.acceleration, expected, 1e-12);

    let plateau = res.curve.value_at_or_after(0.3).unwrap();
    assert!(plateau.period_s < res.design.ts_s);
    assert_close("plateau", plateau.acceleration, sds / input.r / b, 1e-12);

    let last = *res.curve.points().last().unwrap();
    assert_close("velocity", last.acceleration, sd1 / PERIOD_MAX_S / input.r / b, 1e-12);
}

#[test]
fn long_period_branch_beyond_tl() {
    let mut input = default_input();
    input.tl_s = 4.0;
    let res = us_spectrum(&input).unwrap();
    let last = *res.curve.points().last().unwrap();
    let expected = res.sd1() * 4.0 / (6.0 * 6.0) / input.r / res.damping_factor;
    assert_close("T>TL", last.acceleration, expected, 1e-12);
}

#[test]
fn zero_sds_sends_every_period_to_velocity_branch() {
    let mut input = default_input();
    input.ss = 0.0;
    let res = us_spectrum(&input).unwrap();
    assert_eq!(res.sds(), 0.0);
    assert_eq!(res.design.t0_s, 0.0);
    assert_eq!(res.design.ts_s, 0.0);
    let first = res.curve.points()[0];
    assert_close(
        "T=0.01",
        first.acceleration,
        res.sd1() / PERIOD_MIN_S / input.r / res.damping_factor,
        1e-12,
    );
}

#[test]
fn grid_and_idempotence() {
    let a = us_spectrum(&default_input()).unwrap();
    let b = us_spectrum(&default_input()).unwrap();
    assert_eq!(a, b);
    let periods = a.curve.periods();
    assert_eq!(periods.len(), SAMPLE_COUNT);
    assert_eq!(periods[0], PERIOD_MIN_S);
    assert_eq!(periods[SAMPLE_COUNT - 1], PERIOD_MAX_S);
    assert!(periods.windows(2).all(|w| w[1] > w[0]));
    assert!(a.curve.accelerations().iter().all(|v| *v >= 0.0));
}

#[test]
fn invalid_r_and_site_class_are_rejected() {
    let mut input = default_input();
    input.r = 0.0;
    assert!(matches!(us_spectrum(&input), Err(SpectrumError::InvalidInput(_))));

    assert_eq!(" c ".parse::<SiteClass>(), Ok(SiteClass::C));
    assert_eq!(
        "E".parse::<SiteClass>(),
        Err(SpectrumError::UnknownSiteClass("E".to_string()))
    );
}

#[test]
fn low_damping_divides_every_branch_by_point_eight() {
    let mut input = default_input();
    input.damping = 0.02;
    let res = us_spectrum(&input).unwrap();
    assert_eq!(res.damping_factor, 0.8);

    let sds = 2.0 / 3.0 * 1.392 * 0.51;
    let sd1 = 2.0 / 3.0 * 2.24 * 0.18;
    let plateau = res.curve.value_at_or_after(0.3).unwrap();
    assert_close("plateau", plateau.acceleration, sds / 5.0 / 0.8, 1e-12);
    let last = *res.curve.points().last().unwrap();
    assert_close("velocity", last.acceleration, sd1 / 6.0 / 5.0 / 0.8, 1e-12);

    let reference = us_spectrum(&default_input()).unwrap();
    for (low, five) in res.curve.points().iter().zip(reference.curve.points()) {
        assert_close("ratio", low.acceleration, five.acceleration / 0.8, 1e-12);
    }
}

#[test]
fn high_damping_reduces_plateau_by_b() {
    let mut input = default_input();
    input.damping = 0.15;
    let res = us_spectrum(&input).unwrap();
    let sds = 2.0 / 3.0 * 1.392 * 0.51;
    let plateau = res.curve.value_at_or_after(0.3).unwrap();
    assert_close("plateau", plateau.acceleration, sds / 5.0 / 1.35, 1e-12);
}

#[test]
fn damping_must_lie_between_zero_and_one() {
    for damping in [0.0, -0.05, 1.0, f64::INFINITY] {
        let mut input = default_input();
        input.damping = damping;
        assert!(
            matches!(us_spectrum(&input), Err(SpectrumError::InvalidInput(_))),
            "damping={damping}"
        );
    }
}
