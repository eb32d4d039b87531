//! GB50011-2010(중국 건축내진설계규범) 설계 응답 스펙트럼.

use super::spectrum::SpectrumCurve;

/// 규범 기준 감쇠비. 이 값에서 γ=0.9, η1=0.02, η2=1.0이 된다.
pub const REFERENCE_DAMPING: f64 = 0.05;
/// 표에 없는 설방열도(설계 진도) 라벨에 적용하는 최대 지진영향계수.
pub const DEFAULT_ALPHA_MAX: f64 = 0.08;
/// 표에 없는 장지 유형/설계 지진 분조 조합에 적용하는 특징주기(s).
pub const DEFAULT_TG_S: f64 = 0.35;

/// 설계 진도 라벨과 다우(多遇) 지진 αmax.
const ALPHA_MAX_TABLE: [(&str, f64); 6] = [
    ("6度(0.05g)", 0.04),
    ("7度(0.10g)", 0.08),
    ("7度(0.15g)", 0.12),
    ("8度(0.20g)", 0.16),
    ("8度(0.30g)", 0.24),
    ("9度(0.40g)", 0.32),
];

pub const SITE_CATEGORY_OPTIONS: [&str; 5] = ["I0", "I1", "II", "III", "IV"];
pub const EARTHQUAKE_GROUP_OPTIONS: [&str; 3] = ["第一组", "第二组", "第三组"];

/// 분조별 특징주기 Tg(s). 열 순서는 `SITE_CATEGORY_OPTIONS`와 같다.
const TG_TABLE: [(&str, [f64; 5]); 3] = [
    ("第一组", [0.20, 0.25, 0.35, 0.45, 0.65]),
    ("第二组", [0.25, 0.30, 0.40, 0.55, 0.75]),
    ("第三组", [0.30, 0.35, 0.45, 0.65, 0.90]),
];

/// 선택 가능한 설계 진도 라벨 목록.
pub fn intensity_options() -> [&'static str; 6] {
    ALPHA_MAX_TABLE.map(|(label, _)| label)
}

/// 감쇠 보정 계수.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DampingShape {
    /// 곡선 하강부 지수 γ
    pub gamma: f64,
    /// 직선 하강부 기울기 조정계수 η1 (하한 0)
    pub eta1: f64,
    /// 감쇠 조정계수 η2 (하한 0.55)
    pub eta2: f64,
}

/// 진도 라벨로 αmax를 찾는다. 보간하지 않으며 모르는 라벨은 0.08.
pub fn peak_acceleration_coefficient(intensity: &str) -> f64 {
    ALPHA_MAX_TABLE
        .iter()
        .find(|(label, _)| *label == intensity)
        .map(|(_, alpha)| *alpha)
        .unwrap_or(DEFAULT_ALPHA_MAX)
}

/// 분조 → 장지 유형 순으로 Tg를 찾는다. 없는 조합은 0.35 s.
pub fn characteristic_period(site_category: &str, earthquake_group: &str) -> f64 {
    let column = SITE_CATEGORY_OPTIONS
        .iter()
        .position(|c| *c == site_category);
    TG_TABLE
        .iter()
        .find(|(group, _)| *group == earthquake_group)
        .zip(column)
        .map(|((_, row), col)| row[col])
        .unwrap_or(DEFAULT_TG_S)
}

pub fn damping_shape(damping: f64) -> DampingShape {
    let delta = REFERENCE_DAMPING - damping;
    let gamma = 0.9 + delta / (0.3 + 6.0 * damping);
    let eta1 = (0.02 + delta / (4.0 + 32.0 * damping)).max(0.0);
    let eta2 = (1.0 + delta / (0.08 + 1.6 * damping)).max(0.55);
    DampingShape { gamma, eta1, eta2 }
}

/// 지진영향계수 곡선 α(T)를 계산한다.
///
/// - T < 0.1 s: 0.45αmax에서 η2·αmax까지 직선 상승
/// - 0.1 s ≤ T < Tg: η2·αmax 수평
/// - Tg ≤ T < 5Tg: η2·αmax·(Tg/T)^γ 곡선 하강
/// - T ≥ 5Tg: (η2·0.2^γ − η1·(T − 5Tg))·αmax 직선 하강
///
/// 직선 하강부는 하한을 두지 않는다. 감쇠비가 0.05에서 크게 벗어나면 장주기에서 음수가 나올 수 있다.
pub fn chinese_spectrum(alpha_max: f64, tg: f64, damping: f64) -> SpectrumCurve {
    let DampingShape { gamma, eta1, eta2 } = damping_shape(damping);
    SpectrumCurve::sample(|t| {
        if t < 0.1 {
            0.45 * alpha_max + (eta2 - 0.45) * alpha_max * (t / 0.1)
        } else if t < tg {
            eta2 * alpha_max
        } else if t < 5.0 * tg {
            eta2 * alpha_max * (tg / t).powf(gamma)
        } else {
            (eta2 * 0.2_f64.powf(gamma) - eta1 * (t - 5.0 * tg)) * alpha_max
        }
    })
}
