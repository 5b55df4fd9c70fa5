//! simplelog 기반 로거 초기화.

use log::SetLoggerError;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode, WriteLogger};
use std::fs::File;
use thiserror::Error;

/// 로그 레벨 문자열을 해석한다. 알 수 없는 값은 Info로 처리한다.
pub fn parse_level(level: &str) -> LevelFilter {
    match level.trim().to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" | "warning" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

fn log_config() -> simplelog::Config {
    ConfigBuilder::new().set_time_format_rfc3339().build()
}

/// 로거 초기화 오류.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// 로그 파일 생성 실패
    #[error("cannot create log file {path}: {source}")]
    File {
        path: String,
        source: std::io::Error,
    },
    /// 전역 로거가 이미 설정됨
    #[error("logger already initialized: {0}")]
    SetLogger(#[from] SetLoggerError),
}

/// CLI용: 표준 에러로 출력한다.
pub fn init_terminal(level: LevelFilter) -> Result<(), LoggingError> {
    TermLogger::init(level, log_config(), TerminalMode::Stderr, ColorChoice::Auto)?;
    Ok(())
}

/// GUI용: 파일로 기록한다.
pub fn init_file(level: LevelFilter, path: &str) -> Result<(), LoggingError> {
    let log_file = File::create(path).map_err(|source| LoggingError::File {
        path: path.to_string(),
        source,
    })?;
    WriteLogger::init(level, log_config(), log_file)?;
    Ok(())
}
