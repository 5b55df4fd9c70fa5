//! BMI 계산/분류 모듈 모음. 입출력이 없는 순수 함수만 둔다.

pub mod category;
pub mod engine;

pub use category::*;
pub use engine::*;
