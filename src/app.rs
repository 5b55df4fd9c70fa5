use thiserror::Error;

use crate::bmi::BmiResult;
use crate::config::ConfigError;
use crate::session::CalculatorState;
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일/콘솔 입출력 오류
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    /// 결과 직렬화 오류
    #[error("output error: {0}")]
    Output(#[from] toml::ser::Error),
}

/// 단발 실행 결과 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Toml,
}

/// 결과를 지정한 형식의 문자열로 만든다.
pub fn render_result(result: &BmiResult, format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Text => Ok(ui_cli::format_result(result)),
        OutputFormat::Toml => Ok(toml::to_string_pretty(result)?),
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run() -> Result<(), AppError> {
    let mut state = CalculatorState::new();
    loop {
        match ui_cli::main_menu()? {
            MenuChoice::Calculate => ui_cli::handle_calculate(&mut state)?,
            MenuChoice::Reset => {
                state.reset();
                println!("Calculator reset.");
            }
            MenuChoice::Legend => ui_cli::print_legend(),
            MenuChoice::Exit => {
                println!("Goodbye.");
                break;
            }
        }
    }
    Ok(())
}
