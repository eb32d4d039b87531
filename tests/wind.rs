//! 풍속 → 기본풍압 환산 회귀 테스트.
use seismic_wind_toolbox::wind::{
    convert_wind, gust_factor, return_period_factor, WindConversionInput, WindError,
};

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.9} got {actual:.9} (diff {diff:.3e})"
    );
}

fn input(speed: f64, unit: &str, height_m: f64, time: &str, rp: &str) -> WindConversionInput {
    WindConversionInput {
        speed,
        unit: unit.into(),
        height_m,
        averaging_time: time.into(),
        return_period: rp.into(),
    }
}

#[test]
fn mph_gust_700y_at_ten_metres() {
    let res = convert_wind(&input(115.0, "mph", 10.0, "3s", "700y")).expect("wind");
    assert_eq!(res.steps.len(), 5);
    assert!(res.steps[0].contains("51.41 m/s"), "{}", res.steps[0]);
    assert!(res.steps[1].contains("1.264"), "{}", res.steps[1]);
    assert!(res.steps[1].contains("40.67 m/s"), "{}", res.steps[1]);
    assert!(res.steps[3].contains("无需转换"), "{}", res.steps[3]);

    let v_mps = 115.0 * 0.44704;
    let v10 = v_mps / 1.264 / 1.52 * 1.06;
    let w0 = 0.5 * 1.25 * v10 * v10 / 1000.0;
    assert_close("v10", res.speed_10m_10min_mps, v10, 1e-12);
    assert_close("w0", res.basic_wind_pressure_kn_m2, w0, 1e-12);
    assert_close("w0 approx", res.basic_wind_pressure_kn_m2, 0.5028, 1e-4);
    assert!(res.steps[4].contains("0.503 kN/m²"), "{}", res.steps[4]);
}

#[test]
fn height_power_law_applies_off_ten_metres() {
    let res = convert_wind(&input(40.0, "m/s", 30.0, "10min", "1700y")).unwrap();
    let expected = 40.0 / 1.352 / 1.06 * 1.06 * (10.0_f64 / 30.0).powf(0.15);
    assert_close("v10", res.speed_10m_10min_mps, expected, 1e-12);
    assert!(res.steps[0].starts_with("风速"), "{}", res.steps[0]);
    assert!(res.steps[3].contains("30m -> 10m"), "{}", res.steps[3]);
}

#[test]
fn unknown_labels_fall_back() {
    assert_eq!(return_period_factor("100y"), 1.26);
    assert_eq!(gust_factor("30min"), 1.52);
    let known = convert_wind(&input(25.0, "m/s", 10.0, "3s", "700y")).unwrap();
    let unknown = convert_wind(&input(25.0, "m/s", 10.0, "5s", "700y")).unwrap();
    assert_eq!(known.speed_10m_10min_mps, unknown.speed_10m_10min_mps);
}

#[test]
fn invalid_height_is_reported() {
    let err = convert_wind(&input(25.0, "m/s", -5.0, "3s", "700y")).unwrap_err();
    assert!(matches!(err, WindError::InvalidInput(_)));
    assert!(convert_wind(&input(f64::NAN, "m/s", 10.0, "3s", "700y")).is_err());
}

#[test]
fn repeated_calls_are_identical() {
    let a = convert_wind(&input(90.0, "mph", 15.0, "60s", "3000y")).unwrap();
    let b = convert_wind(&input(90.0, "mph", 15.0, "60s", "3000y")).unwrap();
    assert_eq!(a, b);
}
