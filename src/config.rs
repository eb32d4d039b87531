use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::seismic::SiteClass;

const CONFIG_PATH: &str = "config.toml";

/// 중국 규범 입력 기본값.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChineseDefaults {
    pub intensity: String,
    pub site_category: String,
    pub earthquake_group: String,
}

impl Default for ChineseDefaults {
    fn default() -> Self {
        Self {
            intensity: "7度(0.10g)".into(),
            site_category: "II".into(),
            earthquake_group: "第一组".into(),
        }
    }
}

/// 미국 규범 입력 기본값.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsDefaults {
    pub ss: f64,
    pub s1: f64,
    pub site_class: SiteClass,
    pub tl: f64,
    pub r: f64,
}

impl Default for UsDefaults {
    fn default() -> Self {
        Self {
            ss: 0.51,
            s1: 0.18,
            site_class: SiteClass::D,
            tl: 24.0,
            r: 5.0,
        }
    }
}

/// 풍속 환산 입력 기본값.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindDefaults {
    pub speed: f64,
    pub unit: String,
    pub height_m: f64,
    pub averaging_time: String,
    pub return_period: String,
}

impl Default for WindDefaults {
    fn default() -> Self {
        Self {
            speed: 115.0,
            unit: "mph".into(),
            height_m: 10.0,
            averaging_time: "3s".into(),
            return_period: "700y".into(),
        }
    }
}

/// 애플리케이션 설정. 계산 결과는 저장하지 않고 입력 기본값만 보관한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// 두 스펙트럼에 공통 적용하는 감쇠비
    pub damping: f64,
    #[serde(default)]
    pub chinese: ChineseDefaults,
    #[serde(default)]
    pub us: UsDefaults,
    #[serde(default)]
    pub wind: WindDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: 0.05,
            chinese: ChineseDefaults::default(),
            us: UsDefaults::default(),
            wind: WindDefaults::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// config.toml을 로드한다. 파일이 없으면 기본 설정을 돌려주며 파일은 만들지 않는다.
/// 파일은 대화형 메뉴에서 `Config::save`를 호출할 때만 기록된다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_from(Path::new(CONFIG_PATH))
}

fn load_from(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        parse(&content)
    } else {
        tracing::info!("{} 없음, 기본 설정 사용", path.display());
        Ok(Config::default())
    }
}

/// TOML 문자열을 설정으로 해석한다. 누락된 섹션은 기본값으로 채운다.
pub fn parse(content: &str) -> Result<Config, ConfigError> {
    let cfg: Config = toml::from_str(content)?;
    Ok(cfg)
}

fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(CONFIG_PATH, content)?;
    tracing::debug!("{CONFIG_PATH} 저장");
    Ok(())
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let cfg = parse("damping = 0.03\n").unwrap();
        assert_eq!(cfg.damping, 0.03);
        assert_eq!(cfg.us, UsDefaults::default());
        assert_eq!(cfg.wind.return_period, "700y");
    }

    #[test]
    fn site_class_reads_as_letter() {
        let cfg = parse(
            "damping = 0.05\n[us]\nss = 1.0\ns1 = 0.4\nsite_class = \"C\"\ntl = 8.0\nr = 3.0\n",
        )
        .unwrap();
        assert_eq!(cfg.us.site_class, SiteClass::C);
        assert_eq!(cfg.us.tl, 8.0);
    }

    #[test]
    fn edited_defaults_survive_the_saved_format() {
        let mut cfg = Config::default();
        cfg.chinese.site_category = "III".into();
        cfg.us.site_class = SiteClass::B;
        cfg.us.r = 8.0;
        cfg.wind.unit = "m/s".into();
        cfg.wind.return_period = "1700y".into();
        let text = toml::to_string_pretty(&cfg).unwrap();
        assert_eq!(parse(&text).unwrap(), cfg);
    }

    #[test]
    fn missing_file_gives_defaults_without_creating_it() {
        let path = std::env::temp_dir().join("seismic_wind_toolbox_absent_config.toml");
        let _ = fs::remove_file(&path);
        let cfg = load_from(&path).unwrap();
        assert_eq!(cfg, Config::default());
        assert!(!path.exists());
    }
}
