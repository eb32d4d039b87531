//! 실측 풍속을 GB50009 기본풍압 w0로 환산한다.
//!
//! 단위 → 재현기간(50년) → 평균시간(10분) → 높이(10 m) → 풍압 순서로 진행하며,
//! 각 단계의 대입식을 사람이 읽을 수 있는 문자열로 남긴다.

use crate::units::velocity::MPS_PER_MPH;

/// 공기 밀도(kg/m³).
pub const AIR_DENSITY_KG_M3: f64 = 1.25;
/// 지표면 거칠기 지수(멱법칙).
pub const HEIGHT_EXPONENT: f64 = 0.15;
/// 기준 높이(m).
pub const REFERENCE_HEIGHT_M: f64 = 10.0;
/// 표에 없는 재현기간 라벨의 환산계수.
pub const DEFAULT_RETURN_PERIOD_FACTOR: f64 = 1.26;
/// 표에 없는 평균시간 라벨의 돌풍계수.
pub const DEFAULT_GUST_FACTOR: f64 = 1.52;
/// 1시간 평균 → 10분 평균 계수.
pub const TEN_MINUTE_FACTOR: f64 = 1.06;

/// 50년 재현기간 대비 풍속 비.
const RETURN_PERIOD_FACTORS: [(&str, f64); 4] = [
    ("300y", 1.179),
    ("700y", 1.264),
    ("1700y", 1.352),
    ("3000y", 1.409),
];

/// 1시간 평균 풍속 대비 돌풍계수.
const GUST_FACTORS: [(&str, f64); 5] = [
    ("3s", 1.52),
    ("10s", 1.43),
    ("60s", 1.27),
    ("10min", TEN_MINUTE_FACTOR),
    ("1h", 1.00),
];

pub const WIND_UNIT_OPTIONS: [&str; 2] = ["mph", "m/s"];

pub fn return_period_options() -> [&'static str; 4] {
    RETURN_PERIOD_FACTORS.map(|(label, _)| label)
}

pub fn averaging_time_options() -> [&'static str; 5] {
    GUST_FACTORS.map(|(label, _)| label)
}

/// 풍속 환산 중 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum WindError {
    /// 입력값 오류
    InvalidInput(&'static str),
}

impl std::fmt::Display for WindError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindError::InvalidInput(msg) => write!(f, "입력 오류: {msg}"),
        }
    }
}

impl std::error::Error for WindError {}

/// 풍속 환산 입력 값.
#[derive(Debug, Clone, PartialEq)]
pub struct WindConversionInput {
    /// 실측 풍속
    pub speed: f64,
    /// 풍속 단위 라벨. "mph"만 환산하고 나머지는 m/s로 본다.
    pub unit: String,
    /// 측정 높이(m)
    pub height_m: f64,
    /// 평균시간 라벨 (3s, 10s, 60s, 10min, 1h)
    pub averaging_time: String,
    /// 재현기간 라벨 (300y, 700y, 1700y, 3000y)
    pub return_period: String,
}

/// 풍속 환산 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct WindConversionResult {
    pub input: WindConversionInput,
    /// 50년 재현기간, 10 m 높이, 10분 평균 풍속(m/s)
    pub speed_10m_10min_mps: f64,
    /// 기본풍압(kN/m²)
    pub basic_wind_pressure_kn_m2: f64,
    /// 단계별 계산 과정
    pub steps: Vec<String>,
}

/// 재현기간 라벨의 50년 대비 환산계수. 모르는 라벨은 1.26.
pub fn return_period_factor(label: &str) -> f64 {
    RETURN_PERIOD_FACTORS
        .iter()
        .find(|(l, _)| *l == label)
        .map(|(_, f)| *f)
        .unwrap_or(DEFAULT_RETURN_PERIOD_FACTOR)
}

/// 평균시간 라벨의 돌풍계수. 모르는 라벨은 1.52(3초 돌풍).
pub fn gust_factor(label: &str) -> f64 {
    GUST_FACTORS
        .iter()
        .find(|(l, _)| *l == label)
        .map(|(_, f)| *f)
        .unwrap_or(DEFAULT_GUST_FACTOR)
}

/// w0 = ½ρv² / 1000 (kN/m²)
pub fn basic_wind_pressure(speed_mps: f64) -> f64 {
    0.5 * AIR_DENSITY_KG_M3 * speed_mps * speed_mps / 1000.0
}

/// 다섯 단계를 차례로 적용해 기본풍압을 구한다.
pub fn convert_wind(input: &WindConversionInput) -> Result<WindConversionResult, WindError> {
    if !input.speed.is_finite() || input.speed < 0.0 {
        return Err(WindError::InvalidInput(
            "풍속은 0 이상의 유한한 값이어야 합니다.",
        ));
    }
    if !input.height_m.is_finite() || input.height_m <= 0.0 {
        return Err(WindError::InvalidInput("측정 높이는 0보다 커야 합니다."));
    }

    let mut steps = Vec::with_capacity(5);

    // 1. 단위
    let v_mps = if input.unit == "mph" {
        let v = input.speed * MPS_PER_MPH;
        steps.push(format!(
            "单位转换: {:.2} mph = {:.2} m/s",
            input.speed, v
        ));
        v
    } else {
        steps.push(format!("风速: {:.2} m/s", input.speed));
        input.speed
    };

    // 2. 재현기간
    let rp_factor = return_period_factor(&input.return_period);
    let v50 = v_mps / rp_factor;
    steps.push(format!(
        "重现期转换 ({} -> 50y): {:.2} / {:.3} = {:.2} m/s",
        input.return_period, v_mps, rp_factor, v50
    ));

    // 3. 평균시간: 1시간 평균으로 되돌린 뒤 10분 평균으로
    let gust = gust_factor(&input.averaging_time);
    let v1h = v50 / gust;
    let v10min = v1h * TEN_MINUTE_FACTOR;
    steps.push(format!(
        "时距转换 ({} -> 10min): {:.2} / {:.2} * {:.2} = {:.2} m/s",
        input.averaging_time, v50, gust, TEN_MINUTE_FACTOR, v10min
    ));

    // 4. 높이
    let h = input.height_m;
    let v10 = if h != REFERENCE_HEIGHT_M {
        let v = v10min * (REFERENCE_HEIGHT_M / h).powf(HEIGHT_EXPONENT);
        steps.push(format!(
            "高度转换 ({h}m -> 10m): {:.2} * (10/{h})^{:.2} = {:.2} m/s",
            v10min, HEIGHT_EXPONENT, v
        ));
        v
    } else {
        steps.push(format!("高度已是10m，无需转换: {:.2} m/s", v10min));
        v10min
    };

    // 5. 기본풍압
    let w0 = basic_wind_pressure(v10);
    steps.push(format!(
        "基本风压计算: w0 = 0.5 * {} * {:.2}^2 / 1000 = {:.3} kN/m²",
        AIR_DENSITY_KG_M3, v10, w0
    ));

    Ok(WindConversionResult {
        input: input.clone(),
        speed_10m_10min_mps: v10,
        basic_wind_pressure_kn_m2: w0,
        steps,
    })
}
