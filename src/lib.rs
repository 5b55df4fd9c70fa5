//! BMI 계산/분류 로직을 라이브러리로 분리하여 CLI와 GUI가 같은 엔진을 쓰게 한다.

pub mod app;
pub mod assets;
pub mod bmi;
pub mod config;
pub mod logging;
pub mod session;
pub mod ui_cli;
