use clap::{ArgAction, Parser, Subcommand};
use seismic_wind_toolbox::{app, config, seismic::SiteClass};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "GB50011-2010 / ASCE 7-16 응답 스펙트럼 비교 및 기본풍압 환산"
)]
struct Cli {
    /// 디버그 로그 출력
    #[arg(short, long, global = true, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 두 규범의 응답 스펙트럼을 계산해 표로 출력
    Spectrum(SpectrumArgs),
    /// 실측 풍속을 50년/10분/10 m 풍속과 기본풍압으로 환산
    Wind(WindArgs),
    /// 대화형 메뉴 (기본)
    Menu,
}

/// 생략한 값은 config.toml의 기본값을 사용한다.
#[derive(Parser, Debug)]
struct SpectrumArgs {
    /// 감쇠비
    #[arg(long)]
    damping: Option<f64>,
    /// 설계 진도 라벨 (예: "7度(0.10g)")
    #[arg(long)]
    intensity: Option<String>,
    /// 장지 유형 (I0, I1, II, III, IV)
    #[arg(long)]
    site_category: Option<String>,
    /// 설계 지진 분조 (第一组, 第二组, 第三组)
    #[arg(long)]
    group: Option<String>,
    #[arg(long)]
    ss: Option<f64>,
    #[arg(long)]
    s1: Option<f64>,
    /// 지반 분류 (A, B, C, D)
    #[arg(long)]
    site_class: Option<String>,
    #[arg(long)]
    tl: Option<f64>,
    /// 반응수정계수
    #[arg(long)]
    r: Option<f64>,
    /// 출력할 샘플 간격
    #[arg(long, default_value_t = 50)]
    every: usize,
}

#[derive(Parser, Debug)]
struct WindArgs {
    #[arg(long)]
    speed: Option<f64>,
    /// 풍속 단위 (mph, m/s, km/h, ft/s)
    #[arg(long)]
    unit: Option<String>,
    /// 측정 높이 [m]
    #[arg(long)]
    height: Option<f64>,
    /// 평균시간 (3s, 10s, 60s, 10min, 1h)
    #[arg(long)]
    time: Option<String>,
    /// 재현기간 (300y, 700y, 1700y, 3000y)
    #[arg(long)]
    return_period: Option<String>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 하위 명령 또는 대화형 메뉴를 실행한다.
fn main() {
    let cli = Cli::parse();
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    if let Err(err) = try_run(cli.command.unwrap_or(Command::Menu)) {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    let mut cfg = config::load_or_default()?;
    tracing::debug!(?cfg, "설정 로드");
    match command {
        Command::Spectrum(args) => {
            let mut input = app::comparison_input(&cfg);
            if let Some(v) = args.damping {
                input.damping = v;
            }
            if let Some(v) = args.intensity {
                input.intensity = v;
            }
            if let Some(v) = args.site_category {
                input.site_category = v;
            }
            if let Some(v) = args.group {
                input.earthquake_group = v;
            }
            input.ss = args.ss.unwrap_or(input.ss);
            input.s1 = args.s1.unwrap_or(input.s1);
            if let Some(v) = args.site_class {
                input.site_class = v.parse::<SiteClass>()?;
            }
            input.tl_s = args.tl.unwrap_or(input.tl_s);
            input.r = args.r.unwrap_or(input.r);
            app::run_spectrum(&input, args.every)?;
        }
        Command::Wind(args) => {
            let mut input = app::wind_input(&cfg);
            input.speed = args.speed.unwrap_or(input.speed);
            if let Some(v) = args.unit {
                input.unit = v;
            }
            input.height_m = args.height.unwrap_or(input.height_m);
            if let Some(v) = args.time {
                input.averaging_time = v;
            }
            if let Some(v) = args.return_period {
                input.return_period = v;
            }
            app::run_wind(&input)?;
        }
        Command::Menu => app::run(&mut cfg)?,
    }
    Ok(())
}
