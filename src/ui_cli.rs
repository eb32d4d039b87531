use std::io::{self, Write};

use crate::app::{self, AppError};
use crate::config::Config;
use crate::seismic::gb50011::{self, EARTHQUAKE_GROUP_OPTIONS, SITE_CATEGORY_OPTIONS};
use crate::seismic::{check_damping, ComparisonInput, SiteClass, SpectrumComparison};
use crate::units::{convert_velocity, VelocityUnit};
use crate::wind::{self, WindConversionInput, WindConversionResult, WIND_UNIT_OPTIONS};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    SeismicParameters,
    SpectrumComparison,
    WindConversion,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== Seismic & Wind Toolbox ===");
    println!("1) 설계 지진 파라미터 조회 (GB50011)");
    println!("2) 응답 스펙트럼 비교 (GB50011 vs ASCE 7-16)");
    println!("3) 풍속 → 기본풍압 환산");
    println!("4) 설정");
    println!("0) 종료");
    loop {
        let sel = read_line("메뉴 선택: ")?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::SeismicParameters),
            "2" => return Ok(MenuChoice::SpectrumComparison),
            "3" => return Ok(MenuChoice::WindConversion),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("잘못된 입력입니다. 다시 선택하세요."),
        }
    }
}

/// αmax와 Tg 조회 메뉴를 처리한다.
pub fn handle_seismic_parameters(cfg: &Config) -> Result<(), AppError> {
    println!("\n-- 설계 지진 파라미터 --");
    let intensity = select_option(
        "설계 진도",
        &gb50011::intensity_options(),
        &cfg.chinese.intensity,
    )?;
    let site = select_option("장지 유형", &SITE_CATEGORY_OPTIONS, &cfg.chinese.site_category)?;
    let group = select_option(
        "설계 지진 분조",
        &EARTHQUAKE_GROUP_OPTIONS,
        &cfg.chinese.earthquake_group,
    )?;
    let alpha_max = gb50011::peak_acceleration_coefficient(&intensity);
    let tg = gb50011::characteristic_period(&site, &group);
    println!("Alpha Max: {alpha_max:.2}");
    println!("Tg: {tg:.2}s");
    Ok(())
}

/// 스펙트럼 비교 메뉴를 처리한다. 엔터 입력 시 설정값을 사용한다.
pub fn handle_spectrum_comparison(cfg: &Config) -> Result<(), AppError> {
    println!("\n-- 응답 스펙트럼 비교 --");
    let mut input = app::comparison_input(cfg);
    input.damping = read_f64_or("감쇠비", input.damping)?;
    input.intensity = select_option("설계 진도", &gb50011::intensity_options(), &input.intensity)?;
    input.site_category = select_option("장지 유형", &SITE_CATEGORY_OPTIONS, &input.site_category)?;
    input.earthquake_group = select_option(
        "설계 지진 분조",
        &EARTHQUAKE_GROUP_OPTIONS,
        &input.earthquake_group,
    )?;
    input.ss = read_f64_or("Ss [g]", input.ss)?;
    input.s1 = read_f64_or("S1 [g]", input.s1)?;
    input.site_class = read_site_class(input.site_class)?;
    input.tl_s = read_f64_or("TL [s]", input.tl_s)?;
    input.r = read_f64_or("R", input.r)?;
    app::run_spectrum(&input, 50)
}

/// 풍속 환산 메뉴를 처리한다.
pub fn handle_wind_conversion(cfg: &Config) -> Result<(), AppError> {
    println!("\n-- 풍속 → 기본풍압 --");
    let mut input = app::wind_input(cfg);
    input.speed = read_f64_or("풍속", input.speed)?;
    input.unit = select_option("풍속 단위", &WIND_UNIT_OPTIONS, &input.unit)?;
    input.height_m = read_f64_or("측정 높이 [m]", input.height_m)?;
    input.averaging_time = select_option(
        "평균시간",
        &wind::averaging_time_options(),
        &input.averaging_time,
    )?;
    input.return_period = select_option(
        "재현기간",
        &wind::return_period_options(),
        &input.return_period,
    )?;
    app::run_wind(&input)
}

/// 설정 메뉴를 처리한다. 변경한 기본값은 메뉴 루프에서 config.toml에 저장된다.
pub fn handle_settings(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- 설정 --");
    println!("현재 감쇠비: {}", cfg.damping);
    println!(
        "중국 규범: {} / {} / {}",
        cfg.chinese.intensity, cfg.chinese.site_category, cfg.chinese.earthquake_group
    );
    println!(
        "미국 규범: Ss={} S1={} 지반={} TL={} R={}",
        cfg.us.ss, cfg.us.s1, cfg.us.site_class, cfg.us.tl, cfg.us.r
    );
    println!(
        "풍속: {} {} @ {} m, {}, {}",
        cfg.wind.speed,
        cfg.wind.unit,
        cfg.wind.height_m,
        cfg.wind.averaging_time,
        cfg.wind.return_period
    );
    println!("1) 감쇠비  2) 중국 규범 기본값  3) 미국 규범 기본값  4) 풍속 기본값  5) 모든 기본값 초기화");
    let sel = read_line("선택(취소하려면 엔터): ")?;
    match sel.trim() {
        "" => {}
        "1" => {
            let d = read_f64("새 감쇠비 (0.01~0.99): ")?;
            if check_damping(d).is_ok() {
                cfg.damping = d;
                println!("감쇠비가 {} 로 설정되었습니다.", cfg.damping);
            } else {
                println!("범위를 벗어나 변경하지 않습니다.");
            }
        }
        "2" => {
            let c = &mut cfg.chinese;
            c.intensity = select_option("설계 진도", &gb50011::intensity_options(), &c.intensity)?;
            c.site_category = select_option("장지 유형", &SITE_CATEGORY_OPTIONS, &c.site_category)?;
            c.earthquake_group =
                select_option("설계 지진 분조", &EARTHQUAKE_GROUP_OPTIONS, &c.earthquake_group)?;
        }
        "3" => {
            let us = &mut cfg.us;
            us.ss = read_f64_or("Ss [g]", us.ss)?;
            us.s1 = read_f64_or("S1 [g]", us.s1)?;
            us.site_class = read_site_class(us.site_class)?;
            us.tl = read_f64_or("TL [s]", us.tl)?;
            us.r = read_f64_or("R", us.r)?;
        }
        "4" => {
            let w = &mut cfg.wind;
            w.speed = read_f64_or("풍속", w.speed)?;
            w.unit = select_option("풍속 단위", &WIND_UNIT_OPTIONS, &w.unit)?;
            w.height_m = read_f64_or("측정 높이 [m]", w.height_m)?;
            w.averaging_time =
                select_option("평균시간", &wind::averaging_time_options(), &w.averaging_time)?;
            w.return_period =
                select_option("재현기간", &wind::return_period_options(), &w.return_period)?;
        }
        "5" => {
            *cfg = Config::default();
            println!("기본값으로 초기화했습니다.");
        }
        _ => println!("잘못된 입력이므로 변경하지 않습니다."),
    }
    Ok(())
}

/// 비교 결과 요약과 `every` 간격의 샘플 표를 출력한다.
pub fn print_comparison(cmp: &SpectrumComparison, every: usize) {
    println!("Alpha Max: {:.2}   Tg: {:.2}s", cmp.alpha_max, cmp.tg_s);
    println!("Fa: {:.2}   Fv: {:.2}", cmp.us.fa(), cmp.us.fv());
    println!("SDS: {:.3}g   SD1: {:.3}g", cmp.us.sds(), cmp.us.sd1());
    println!(
        "축 범위: T 0~{:.1} s, Sa 0~{:.4}",
        cmp.x_axis_max, cmp.y_axis_max
    );
    println!("{:>8} {:>22} {:>22}", "T [s]", cmp.chinese_label, cmp.us_label);
    let step = every.max(1);
    let rows = cmp
        .chinese
        .points()
        .iter()
        .zip(cmp.us.curve.points())
        .enumerate()
        .filter(|(i, _)| i % step == 0 || *i == cmp.chinese.len() - 1);
    for (_, (cn, us)) in rows {
        println!(
            "{:>8.3} {:>22.5} {:>22.5}",
            cn.period_s, cn.acceleration, us.acceleration
        );
    }
}

/// 풍속 환산 과정과 결과를 출력한다.
pub fn print_wind(res: &WindConversionResult) {
    for (i, step) in res.steps.iter().enumerate() {
        println!("{}. {step}", i + 1);
    }
    println!(
        "50年重现期, 10m高度, 10分钟平均风速: {:.2} m/s",
        res.speed_10m_10min_mps
    );
    println!("基本风压: {:.3} kN/m²", res.basic_wind_pressure_kn_m2);
}

/// 옵션 목록에 없는 라벨은 기본값으로 대체되므로 경고를 남긴다.
pub fn warn_unknown_labels(input: &ComparisonInput) {
    if !gb50011::intensity_options().contains(&input.intensity.as_str()) {
        tracing::warn!(
            "알 수 없는 설계 진도 '{}', αmax={} 사용",
            input.intensity,
            gb50011::DEFAULT_ALPHA_MAX
        );
    }
    if !SITE_CATEGORY_OPTIONS.contains(&input.site_category.as_str())
        || !EARTHQUAKE_GROUP_OPTIONS.contains(&input.earthquake_group.as_str())
    {
        tracing::warn!(
            "알 수 없는 장지 유형/분조 '{}'/'{}', Tg={} s 사용",
            input.site_category,
            input.earthquake_group,
            gb50011::DEFAULT_TG_S
        );
    }
    let coeff = crate::seismic::site_coefficients(input.ss, input.s1, input.site_class);
    if coeff.fa_clamped {
        tracing::warn!("Ss={} 가 Fa 표 양 끝(0.25, 1.50)을 벗어나거나 일치, 가장자리 값 사용", input.ss);
    }
    if coeff.fv_clamped {
        tracing::warn!("S1={} 가 Fv 표 양 끝(0.1, 0.6)을 벗어나거나 일치, 가장자리 값 사용", input.s1);
    }
}

pub fn warn_unknown_wind_labels(input: &WindConversionInput) {
    if !wind::averaging_time_options().contains(&input.averaging_time.as_str()) {
        tracing::warn!(
            "알 수 없는 평균시간 '{}', 돌풍계수 {} 사용",
            input.averaging_time,
            wind::DEFAULT_GUST_FACTOR
        );
    }
    if !wind::return_period_options().contains(&input.return_period.as_str()) {
        tracing::warn!(
            "알 수 없는 재현기간 '{}', 환산계수 {} 사용",
            input.return_period,
            wind::DEFAULT_RETURN_PERIOD_FACTOR
        );
    }
}

/// km/h, ft/s 입력은 m/s로 먼저 환산한다. mph와 m/s는 그대로 둔다.
pub fn normalize_wind_unit(input: &WindConversionInput) -> WindConversionInput {
    let mut out = input.clone();
    match VelocityUnit::parse(&input.unit) {
        Some(VelocityUnit::MilePerHour) => out.unit = "mph".into(),
        Some(unit @ (VelocityUnit::KilometerPerHour | VelocityUnit::FootPerSecond)) => {
            out.speed = convert_velocity(input.speed, unit, VelocityUnit::MeterPerSecond);
            out.unit = VelocityUnit::MeterPerSecond.symbol().into();
            tracing::info!(
                "{} {} → {:.3} m/s",
                input.speed,
                unit.symbol(),
                out.speed
            );
        }
        Some(VelocityUnit::MeterPerSecond) => {}
        None => tracing::warn!("알 수 없는 풍속 단위 '{}', m/s로 간주", input.unit),
    }
    out
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("숫자를 입력하세요."),
        }
    }
}

fn read_f64_or(label: &str, current: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(&format!("{label} [{current}]: "))?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(current);
        }
        match s.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("숫자를 입력하세요."),
        }
    }
}

/// 번호 목록에서 하나를 고른다. 엔터 입력 시 현재 값을 유지한다.
fn select_option(label: &str, options: &[&str], current: &str) -> Result<String, AppError> {
    let listing: Vec<String> = options
        .iter()
        .enumerate()
        .map(|(i, o)| format!("{}={o}", i + 1))
        .collect();
    println!("{label}: {}", listing.join(" "));
    loop {
        let sel = read_line(&format!("선택 [{current}]: "))?;
        let sel = sel.trim();
        if sel.is_empty() {
            return Ok(current.to_string());
        }
        if let Some(opt) = sel
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| options.get(i))
        {
            return Ok(opt.to_string());
        }
        println!("지원하지 않는 번호입니다.");
    }
}

fn read_site_class(current: SiteClass) -> Result<SiteClass, AppError> {
    loop {
        let s = read_line(&format!("지반 분류 A/B/C/D [{current}]: "))?;
        if s.trim().is_empty() {
            return Ok(current);
        }
        match s.parse::<SiteClass>() {
            Ok(c) => return Ok(c),
            Err(e) => println!("{e}"),
        }
    }
}
