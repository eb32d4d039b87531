use super::asce7::{us_spectrum, SiteClass, UsSpectrum, UsSpectrumInput};
use super::gb50011::{characteristic_period, chinese_spectrum, peak_acceleration_coefficient};
use super::spectrum::{SpectrumCurve, PERIOD_MAX_S};
use super::{check_damping, SpectrumError};

/// 중국/미국 스펙트럼을 한 차트에 겹쳐 그리기 위한 입력.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonInput {
    /// 두 규범에 공통으로 적용하는 감쇠비
    pub damping: f64,
    /// 설계 진도 라벨 (예: "7度(0.10g)")
    pub intensity: String,
    /// 장지 유형 (I0, I1, II, III, IV)
    pub site_category: String,
    /// 설계 지진 분조 (第一组 등)
    pub earthquake_group: String,
    pub ss: f64,
    pub s1: f64,
    pub site_class: SiteClass,
    pub tl_s: f64,
    pub r: f64,
}

/// 비교 차트 데이터. 축 범위와 범례 라벨을 포함한다.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumComparison {
    pub alpha_max: f64,
    pub tg_s: f64,
    pub chinese: SpectrumCurve,
    pub us: UsSpectrum,
    pub chinese_label: String,
    pub us_label: String,
    /// x축 상한(s). 하한은 0.
    pub x_axis_max: f64,
    /// y축 상한. 두 곡선 최댓값의 1.1배, 하한은 0.
    pub y_axis_max: f64,
}

pub const CHINESE_SERIES_LABEL: &str = "China GB50011-2010";

/// 라벨 조회 → 두 스펙트럼 계산 → 축 범위 산정을 한 번에 수행한다.
pub fn compare_spectra(input: &ComparisonInput) -> Result<SpectrumComparison, SpectrumError> {
    check_damping(input.damping)?;
    let alpha_max = peak_acceleration_coefficient(&input.intensity);
    let tg_s = characteristic_period(&input.site_category, &input.earthquake_group);
    let chinese = chinese_spectrum(alpha_max, tg_s, input.damping);

    let us = us_spectrum(&UsSpectrumInput {
        ss: input.ss,
        s1: input.s1,
        site_class: input.site_class,
        tl_s: input.tl_s,
        r: input.r,
        damping: input.damping,
    })?;

    let y_axis_max = chinese.peak().max(us.curve.peak()) * 1.1;
    Ok(SpectrumComparison {
        alpha_max,
        tg_s,
        chinese,
        us_label: format!("US ASCE7-16 (R={})", input.r),
        us,
        chinese_label: CHINESE_SERIES_LABEL.to_string(),
        x_axis_max: PERIOD_MAX_S,
        y_axis_max,
    })
}
