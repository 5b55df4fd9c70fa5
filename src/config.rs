use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 분류 이미지가 있는 디렉터리
    pub image_dir: String,
    /// GUI 창 투명도(0.3~1.0)
    pub window_alpha: f32,
    /// 로그 레벨 (error/warn/info/debug/trace/off)
    pub log_level: String,
    /// GUI 로그 파일 경로
    pub log_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            image_dir: "images".into(),
            window_alpha: 1.0,
            log_level: "warn".into(),
            log_file: Some("bmi_calculator.log".into()),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("failed to parse config: {0}")]
    Serde(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_or_create(Path::new(DEFAULT_CONFIG_PATH))
}

/// 지정한 경로의 설정을 로드한다. 파일이 없으면 기본값을 기록한 뒤 반환한다.
pub fn load_or_create(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        log::debug!("config loaded from {}", path.display());
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(Path::new(DEFAULT_CONFIG_PATH))
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
