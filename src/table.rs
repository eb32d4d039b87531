/// 키-값 표에 대한 구간 선형 보간을 제공한다.
/// 표 범위를 벗어난 입력은 가장자리 값으로 고정(flat extrapolation)한다.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TablePoint {
    pub key: f64,
    pub value: f64,
}

impl TablePoint {
    pub const fn new(key: f64, value: f64) -> Self {
        Self { key, value }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableValue {
    pub value: f64,
    /// true면 표 범위 밖(또는 경계)이라 가장자리 값으로 클램프됨을 의미한다.
    pub clamped: bool,
}

/// 보간 결과 값만 필요할 때 사용한다. 빈 표이면 `None`.
pub fn lookup(points: &[TablePoint], x: f64) -> Option<f64> {
    interpolate(points, x).map(|v| v.value)
}

/// 표를 키 오름차순으로 정렬한 뒤 x를 감싸는 두 점 사이를 선형 보간한다.
pub fn interpolate(points: &[TablePoint], x: f64) -> Option<TableValue> {
    let mut sorted: Vec<TablePoint> = points.to_vec();
    sorted.sort_by(|a, b| a.key.partial_cmp(&b.key).unwrap_or(std::cmp::Ordering::Equal));

    let first = *sorted.first()?;
    let last = *sorted.last()?;
    if x <= first.key {
        return Some(TableValue {
            value: first.value,
            clamped: true,
        });
    }
    if x >= last.key {
        return Some(TableValue {
            value: last.value,
            clamped: true,
        });
    }
    for pair in sorted.windows(2) {
        let a = pair[0];
        let b = pair[1];
        if x >= a.key && x < b.key {
            let ratio = (x - a.key) / (b.key - a.key);
            return Some(TableValue {
                value: a.value + (b.value - a.value) * ratio,
                clamped: false,
            });
        }
    }
    // NaN 입력은 어느 구간에도 속하지 않는다.
    Some(TableValue {
        value: first.value,
        clamped: true,
    })
}
