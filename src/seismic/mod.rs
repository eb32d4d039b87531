//! 내진 설계 응답 스펙트럼 계산 모듈 모음.
//! GB50011-2010(중국)과 ASCE 7-16(미국) 스펙트럼, 두 곡선의 비교 데이터로 구성한다.

pub mod asce7;
pub mod comparison;
pub mod gb50011;
pub mod spectrum;

pub use asce7::{
    damping_adjustment_factor, site_coefficients, us_spectrum, SiteClass, SiteCoefficients,
    UsSpectrum, UsSpectrumInput,
};
pub use comparison::{compare_spectra, ComparisonInput, SpectrumComparison};
pub use gb50011::{characteristic_period, chinese_spectrum, peak_acceleration_coefficient};
pub use spectrum::{SpectrumCurve, SpectrumPoint};

/// 스펙트럼 계산 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum SpectrumError {
    /// 입력값 오류
    InvalidInput(&'static str),
    /// 알 수 없는 지반 분류 문자열
    UnknownSiteClass(String),
}

impl std::fmt::Display for SpectrumError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpectrumError::InvalidInput(msg) => write!(f, "입력 오류: {msg}"),
            SpectrumError::UnknownSiteClass(s) => {
                write!(f, "알 수 없는 지반 분류: {s} (A, B, C, D 중 선택)")
            }
        }
    }
}

impl std::error::Error for SpectrumError {}

/// 감쇠비는 0과 1 사이(양 끝 제외)여야 한다. 음수이면 감쇠 보정식의 분모가 0이 될 수 있다.
pub fn check_damping(damping: f64) -> Result<(), SpectrumError> {
    if damping > 0.0 && damping < 1.0 {
        Ok(())
    } else {
        Err(SpectrumError::InvalidInput(
            "감쇠비는 0보다 크고 1보다 작아야 합니다.",
        ))
    }
}
