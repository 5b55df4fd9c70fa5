use std::path::PathBuf;
use std::process::ExitCode;

use bmi_calculator::app::{self, AppError, OutputFormat};
use bmi_calculator::{bmi, config, logging};
use clap::Parser;

#[derive(Parser)]
#[command(name = "bmi_calculator_cli", about = "Body Mass Index calculator")]
struct Args {
    /// 체중 [kg]. 키와 함께 주면 한 번 계산하고 종료한다.
    #[arg(short, long)]
    weight: Option<String>,
    /// 키 [cm]
    #[arg(short = 'H', long)]
    height: Option<String>,
    /// 단발 실행 출력 형식
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// 설정 파일 경로
    #[arg(short, long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// 설정 파일의 로그 레벨을 덮어쓴다
    #[arg(long)]
    log_level: Option<String>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 단발 계산 또는 대화형 메뉴를 실행한다.
fn main() -> ExitCode {
    match try_run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run() -> Result<ExitCode, AppError> {
    let args = Args::parse();
    let cfg = config::load_or_create(&args.config)?;
    let level = args.log_level.as_deref().unwrap_or(&cfg.log_level);
    if let Err(e) = logging::init_terminal(logging::parse_level(level)) {
        eprintln!("Logging disabled: {e}");
    }

    if args.weight.is_none() && args.height.is_none() {
        app::run()?;
        return Ok(ExitCode::SUCCESS);
    }

    let weight = args.weight.unwrap_or_default();
    let height = args.height.unwrap_or_default();
    match bmi::calculate(&weight, &height) {
        Ok(res) => {
            log::debug!("one-shot result: {res:?}");
            println!("{}", app::render_result(&res, args.format)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            log::info!("{e}");
            eprintln!("Error: {}", e.user_message());
            Ok(ExitCode::from(2))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_flags_cover_weight_and_height() {
        let args = Args::try_parse_from(["bmi_calculator_cli", "-w", "70", "-H", "175"])
            .expect("parse");
        assert_eq!(args.weight.as_deref(), Some("70"));
        assert_eq!(args.height.as_deref(), Some("175"));
        assert_eq!(args.format, OutputFormat::Text);
    }

    #[test]
    fn long_flags_and_toml_format() {
        let args = Args::try_parse_from([
            "bmi_calculator_cli",
            "--weight",
            "90",
            "--height",
            "170",
            "--format",
            "toml",
        ])
        .expect("parse");
        assert_eq!(args.height.as_deref(), Some("170"));
        assert_eq!(args.format, OutputFormat::Toml);
        assert_eq!(args.config, PathBuf::from(config::DEFAULT_CONFIG_PATH));
    }
}
