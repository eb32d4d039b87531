//! ASCE 7-16 설계 응답 스펙트럼.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::spectrum::SpectrumCurve;
use super::SpectrumError;
use crate::table::{self, TablePoint, TableValue};

/// 지반 분류. 표는 A~D만 수록한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SiteClass {
    A,
    B,
    C,
    D,
}

impl SiteClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            SiteClass::A => "A",
            SiteClass::B => "B",
            SiteClass::C => "C",
            SiteClass::D => "D",
        }
    }

    fn fa_table(&self) -> &'static [TablePoint; 6] {
        match self {
            SiteClass::A => &FA_A,
            SiteClass::B => &FA_B,
            SiteClass::C => &FA_C,
            SiteClass::D => &FA_D,
        }
    }

    fn fv_table(&self) -> &'static [TablePoint; 6] {
        match self {
            SiteClass::A => &FV_A,
            SiteClass::B => &FV_B,
            SiteClass::C => &FV_C,
            SiteClass::D => &FV_D,
        }
    }
}

impl FromStr for SiteClass {
    type Err = SpectrumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(SiteClass::A),
            "B" => Ok(SiteClass::B),
            "C" => Ok(SiteClass::C),
            "D" => Ok(SiteClass::D),
            _ => Err(SpectrumError::UnknownSiteClass(s.to_string())),
        }
    }
}

impl std::fmt::Display for SiteClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Fa: Ss 기준 (0.25 ~ 1.50)
const FA_A: [TablePoint; 6] = [
    TablePoint::new(0.25, 0.8),
    TablePoint::new(0.50, 0.8),
    TablePoint::new(0.75, 0.8),
    TablePoint::new(1.00, 0.8),
    TablePoint::new(1.25, 0.8),
    TablePoint::new(1.50, 0.8),
];
const FA_B: [TablePoint; 6] = [
    TablePoint::new(0.25, 0.9),
    TablePoint::new(0.50, 0.9),
    TablePoint::new(0.75, 0.9),
    TablePoint::new(1.00, 0.9),
    TablePoint::new(1.25, 0.9),
    TablePoint::new(1.50, 0.9),
];
const FA_C: [TablePoint; 6] = [
    TablePoint::new(0.25, 1.3),
    TablePoint::new(0.50, 1.3),
    TablePoint::new(0.75, 1.2),
    TablePoint::new(1.00, 1.2),
    TablePoint::new(1.25, 1.2),
    TablePoint::new(1.50, 1.2),
];
const FA_D: [TablePoint; 6] = [
    TablePoint::new(0.25, 1.6),
    TablePoint::new(0.50, 1.4),
    TablePoint::new(0.75, 1.2),
    TablePoint::new(1.00, 1.1),
    TablePoint::new(1.25, 1.0),
    TablePoint::new(1.50, 1.0),
];

// Fv: S1 기준 (0.1 ~ 0.6)
const FV_A: [TablePoint; 6] = [
    TablePoint::new(0.1, 0.8),
    TablePoint::new(0.2, 0.8),
    TablePoint::new(0.3, 0.8),
    TablePoint::new(0.4, 0.8),
    TablePoint::new(0.5, 0.8),
    TablePoint::new(0.6, 0.8),
];
const FV_B: [TablePoint; 6] = FV_A;
const FV_C: [TablePoint; 6] = [
    TablePoint::new(0.1, 1.5),
    TablePoint::new(0.2, 1.5),
    TablePoint::new(0.3, 1.5),
    TablePoint::new(0.4, 1.5),
    TablePoint::new(0.5, 1.5),
    TablePoint::new(0.6, 1.4),
];
const FV_D: [TablePoint; 6] = [
    TablePoint::new(0.1, 2.4),
    TablePoint::new(0.2, 2.2),
    TablePoint::new(0.3, 2.0),
    TablePoint::new(0.4, 1.9),
    TablePoint::new(0.5, 1.8),
    TablePoint::new(0.6, 1.7),
];

/// 지반 증폭계수 조회 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteCoefficients {
    pub fa: f64,
    pub fv: f64,
    /// Ss가 표 범위(0.25~1.50) 밖이라 가장자리 값을 사용했는지
    pub fa_clamped: bool,
    /// S1이 표 범위(0.1~0.6) 밖이라 가장자리 값을 사용했는지
    pub fv_clamped: bool,
}

/// MCE 및 설계 스펙트럼 가속도 파라미터.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignParameters {
    pub sms: f64,
    pub sm1: f64,
    pub sds: f64,
    pub sd1: f64,
    /// SDS가 0이면 0
    pub t0_s: f64,
    /// SDS가 0이면 0
    pub ts_s: f64,
}

/// US 스펙트럼 계산 입력.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UsSpectrumInput {
    /// 단주기 MCE 스펙트럼 가속도 Ss (g)
    pub ss: f64,
    /// 1초 주기 MCE 스펙트럼 가속도 S1 (g)
    pub s1: f64,
    pub site_class: SiteClass,
    /// 장주기 천이주기 TL (s)
    pub tl_s: f64,
    /// 반응수정계수 R
    pub r: f64,
    pub damping: f64,
}

/// US 스펙트럼 계산 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct UsSpectrum {
    pub curve: SpectrumCurve,
    pub coefficients: SiteCoefficients,
    pub design: DesignParameters,
    /// 감쇠 보정계수 B
    pub damping_factor: f64,
}

impl UsSpectrum {
    pub fn sds(&self) -> f64 {
        self.design.sds
    }

    pub fn sd1(&self) -> f64 {
        self.design.sd1
    }

    pub fn fa(&self) -> f64 {
        self.coefficients.fa
    }

    pub fn fv(&self) -> f64 {
        self.coefficients.fv
    }
}

/// Fa는 Ss, Fv는 S1 기준으로 지반 분류별 표에서 보간한다.
pub fn site_coefficients(ss: f64, s1: f64, site_class: SiteClass) -> SiteCoefficients {
    let fa = coefficient(site_class.fa_table(), ss);
    let fv = coefficient(site_class.fv_table(), s1);
    SiteCoefficients {
        fa: fa.value,
        fv: fv.value,
        fa_clamped: fa.clamped,
        fv_clamped: fv.clamped,
    }
}

// 계수 표는 모두 6점 고정 길이라 보간은 항상 값을 돌려준다.
fn coefficient(points: &[TablePoint; 6], x: f64) -> TableValue {
    table::interpolate(points, x).unwrap_or(TableValue {
        value: points[0].value,
        clamped: true,
    })
}

/// 감쇠 보정계수 B. 0.02/0.05/0.10/0.20 경계에서 구간별 선형, 양 끝은 0.8/1.5 고정.
pub fn damping_adjustment_factor(damping: f64) -> f64 {
    if damping <= 0.02 {
        0.8
    } else if damping <= 0.05 {
        0.8 + 0.2 * (damping - 0.02) / 0.03
    } else if damping <= 0.10 {
        1.0 + 0.2 * (damping - 0.05) / 0.05
    } else if damping <= 0.20 {
        1.2 + 0.3 * (damping - 0.10) / 0.10
    } else {
        1.5
    }
}

pub fn design_parameters(ss: f64, s1: f64, coefficients: &SiteCoefficients) -> DesignParameters {
    let sms = coefficients.fa * ss;
    let sm1 = coefficients.fv * s1;
    let sds = 2.0 / 3.0 * sms;
    let sd1 = 2.0 / 3.0 * sm1;
    let (t0_s, ts_s) = if sds != 0.0 {
        (0.2 * (sd1 / sds), sd1 / sds)
    } else {
        (0.0, 0.0)
    };
    DesignParameters {
        sms,
        sm1,
        sds,
        sd1,
        t0_s,
        ts_s,
    }
}

/// 설계 응답 스펙트럼 Sa(T)/R/B를 계산한다.
pub fn us_spectrum(input: &UsSpectrumInput) -> Result<UsSpectrum, SpectrumError> {
    validate(input)?;
    let coefficients = site_coefficients(input.ss, input.s1, input.site_class);
    let design = design_parameters(input.ss, input.s1, &coefficients);
    let b = damping_adjustment_factor(input.damping);
    let DesignParameters {
        sds,
        sd1,
        t0_s,
        ts_s,
        ..
    } = design;
    let tl = input.tl_s;
    let r = input.r;

    let curve = SpectrumCurve::sample(|t| {
        let sa = if t < t0_s {
            sds * (0.4 + 0.6 * t / t0_s)
        } else if t < ts_s {
            sds
        } else if t < tl {
            sd1 / t
        } else {
            sd1 * tl / (t * t)
        };
        sa / r / b
    });

    Ok(UsSpectrum {
        curve,
        coefficients,
        design,
        damping_factor: b,
    })
}

fn validate(input: &UsSpectrumInput) -> Result<(), SpectrumError> {
    if !input.ss.is_finite() || !input.s1.is_finite() || input.ss < 0.0 || input.s1 < 0.0 {
        return Err(SpectrumError::InvalidInput(
            "Ss, S1은 0 이상의 유한한 값이어야 합니다.",
        ));
    }
    if !input.tl_s.is_finite() || input.tl_s <= 0.0 {
        return Err(SpectrumError::InvalidInput("TL은 0보다 커야 합니다."));
    }
    if !input.r.is_finite() || input.r <= 0.0 {
        return Err(SpectrumError::InvalidInput("R은 0보다 커야 합니다."));
    }
    super::check_damping(input.damping)
}
