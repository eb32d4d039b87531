use serde::{Deserialize, Serialize};

/// mph → m/s 환산 계수.
pub const MPS_PER_MPH: f64 = 0.44704;

/// 풍속 단위. 내부 기준은 m/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VelocityUnit {
    MeterPerSecond,
    MilePerHour,
    KilometerPerHour,
    FootPerSecond,
}

impl VelocityUnit {
    /// `m/s`, `mph`, `km/h`, `ft/s` 등의 표기를 해석한다.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "m/s" | "mps" => Some(VelocityUnit::MeterPerSecond),
            "mph" | "mi/h" => Some(VelocityUnit::MilePerHour),
            "km/h" | "kph" => Some(VelocityUnit::KilometerPerHour),
            "ft/s" | "fps" => Some(VelocityUnit::FootPerSecond),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            VelocityUnit::MeterPerSecond => "m/s",
            VelocityUnit::MilePerHour => "mph",
            VelocityUnit::KilometerPerHour => "km/h",
            VelocityUnit::FootPerSecond => "ft/s",
        }
    }
}

fn to_mps(value: f64, unit: VelocityUnit) -> f64 {
    match unit {
        VelocityUnit::MeterPerSecond => value,
        VelocityUnit::MilePerHour => value * MPS_PER_MPH,
        VelocityUnit::KilometerPerHour => value / 3.6,
        VelocityUnit::FootPerSecond => value * 0.3048,
    }
}

fn from_mps(value: f64, unit: VelocityUnit) -> f64 {
    match unit {
        VelocityUnit::MeterPerSecond => value,
        VelocityUnit::MilePerHour => value / MPS_PER_MPH,
        VelocityUnit::KilometerPerHour => value * 3.6,
        VelocityUnit::FootPerSecond => value / 0.3048,
    }
}

/// 속도를 변환한다.
pub fn convert_velocity(value: f64, from: VelocityUnit, to: VelocityUnit) -> f64 {
    let base = to_mps(value, from);
    from_mps(base, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mph_to_mps() {
        let v = convert_velocity(115.0, VelocityUnit::MilePerHour, VelocityUnit::MeterPerSecond);
        assert!((v - 51.4096).abs() < 1e-9);
    }

    #[test]
    fn parse_accepts_common_symbols() {
        assert_eq!(VelocityUnit::parse(" KM/H "), Some(VelocityUnit::KilometerPerHour));
        assert_eq!(VelocityUnit::parse("mph"), Some(VelocityUnit::MilePerHour));
        assert_eq!(VelocityUnit::parse("knot"), None);
    }
}
