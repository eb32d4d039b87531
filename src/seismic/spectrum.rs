/// 스펙트럼 곡선의 샘플 수.
pub const SAMPLE_COUNT: usize = 600;
/// 첫 샘플 주기(s).
pub const PERIOD_MIN_S: f64 = 0.01;
/// 마지막 샘플 주기(s).
pub const PERIOD_MAX_S: f64 = 6.0;

/// 곡선 위의 한 점. 주기(s)와 스펙트럼 가속도(g 또는 지진영향계수).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectrumPoint {
    pub period_s: f64,
    pub acceleration: f64,
}

/// 주기 오름차순으로 정렬된 응답 스펙트럼 곡선.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumCurve {
    points: Vec<SpectrumPoint>,
}

impl SpectrumCurve {
    /// 공용 주기 격자 위에서 `f(T)`를 평가해 곡선을 만든다.
    pub fn sample<F>(f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        let points = sample_periods()
            .map(|t| SpectrumPoint {
                period_s: t,
                acceleration: f(t),
            })
            .collect();
        Self { points }
    }

    pub fn points(&self) -> &[SpectrumPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn periods(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.period_s).collect()
    }

    pub fn accelerations(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.acceleration).collect()
    }

    /// 곡선의 최대 가속도. 빈 곡선이면 0.
    pub fn peak(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.acceleration)
            .fold(0.0, f64::max)
    }

    /// 주기가 `period_s` 이상인 첫 샘플.
    pub fn value_at_or_after(&self, period_s: f64) -> Option<SpectrumPoint> {
        self.points.iter().copied().find(|p| p.period_s >= period_s)
    }
}

/// 0.01~6.0 s 구간을 균등 분할한 600개 주기. 양 끝값은 정확히 일치시킨다.
pub fn sample_periods() -> impl Iterator<Item = f64> {
    let step = (PERIOD_MAX_S - PERIOD_MIN_S) / (SAMPLE_COUNT - 1) as f64;
    (0..SAMPLE_COUNT).map(move |i| {
        if i == SAMPLE_COUNT - 1 {
            PERIOD_MAX_S
        } else {
            PERIOD_MIN_S + i as f64 * step
        }
    })
}
