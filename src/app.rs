use crate::config::Config;
use crate::seismic::{self, ComparisonInput, SpectrumError};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;
use crate::wind::{self, WindConversionInput, WindError};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 스펙트럼 계산 오류
    Spectrum(SpectrumError),
    /// 풍속 환산 오류
    Wind(WindError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Spectrum(e) => write!(f, "스펙트럼 계산 오류: {e}"),
            AppError::Wind(e) => write!(f, "풍속 환산 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<SpectrumError> for AppError {
    fn from(value: SpectrumError) -> Self {
        AppError::Spectrum(value)
    }
}

impl From<WindError> for AppError {
    fn from(value: WindError) -> Self {
        AppError::Wind(value)
    }
}

/// 설정의 기본 입력값으로 비교 입력을 구성한다.
pub fn comparison_input(config: &Config) -> ComparisonInput {
    ComparisonInput {
        damping: config.damping,
        intensity: config.chinese.intensity.clone(),
        site_category: config.chinese.site_category.clone(),
        earthquake_group: config.chinese.earthquake_group.clone(),
        ss: config.us.ss,
        s1: config.us.s1,
        site_class: config.us.site_class,
        tl_s: config.us.tl,
        r: config.us.r,
    }
}

/// 설정의 기본 입력값으로 풍속 환산 입력을 구성한다.
pub fn wind_input(config: &Config) -> WindConversionInput {
    WindConversionInput {
        speed: config.wind.speed,
        unit: config.wind.unit.clone(),
        height_m: config.wind.height_m,
        averaging_time: config.wind.averaging_time.clone(),
        return_period: config.wind.return_period.clone(),
    }
}

/// 두 스펙트럼을 계산해 요약과 샘플 표를 출력한다.
pub fn run_spectrum(input: &ComparisonInput, every: usize) -> Result<(), AppError> {
    ui_cli::warn_unknown_labels(input);
    let cmp = seismic::compare_spectra(input)?;
    ui_cli::print_comparison(&cmp, every);
    Ok(())
}

/// 풍속 환산을 수행해 계산 과정을 출력한다.
pub fn run_wind(input: &WindConversionInput) -> Result<(), AppError> {
    let input = ui_cli::normalize_wind_unit(input);
    ui_cli::warn_unknown_wind_labels(&input);
    let res = wind::convert_wind(&input)?;
    ui_cli::print_wind(&res);
    Ok(())
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config) -> Result<(), AppError> {
    loop {
        let outcome = match ui_cli::main_menu()? {
            MenuChoice::SeismicParameters => ui_cli::handle_seismic_parameters(config),
            MenuChoice::SpectrumComparison => ui_cli::handle_spectrum_comparison(config),
            MenuChoice::WindConversion => ui_cli::handle_wind_conversion(config),
            MenuChoice::Settings => {
                ui_cli::handle_settings(config)?;
                config.save()?;
                Ok(())
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("프로그램을 종료합니다.");
                break;
            }
        };
        // 계산 오류는 보고만 하고 메뉴로 돌아간다. 입출력 오류는 상위로 전달한다.
        match outcome {
            Err(AppError::Spectrum(e)) => println!("스펙트럼 계산 오류: {e}"),
            Err(AppError::Wind(e)) => println!("풍속 환산 오류: {e}"),
            other => other?,
        }
    }
    Ok(())
}
