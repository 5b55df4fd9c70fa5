use serde::Serialize;
use thiserror::Error;

use super::category::{BmiCategory, BmiColor, ImageKey};

/// 사용자 안내용 메시지: 입력 누락.
pub const MSG_MISSING_INPUT: &str = "Please enter your weight and height";
/// 사용자 안내용 메시지: 숫자가 아니거나 0 이하.
pub const MSG_INVALID_VALUES: &str = "Please enter valid values";

/// 검증 오류가 발생한 입력 필드.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Weight,
    Height,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Weight => f.write_str("weight"),
            Field::Height => f.write_str("height"),
        }
    }
}

/// 입력 검증 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// 입력이 비어 있음
    #[error("{0} is missing")]
    MissingInput(Field),
    /// 숫자로 해석할 수 없음
    #[error("{field} is not a valid number: {input:?}")]
    InvalidNumber { field: Field, input: String },
    /// 0 이하의 값
    #[error("{field} must be greater than zero (got {value})")]
    NonPositiveValue { field: Field, value: f64 },
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::MissingInput(field) => *field,
            ValidationError::InvalidNumber { field, .. } => *field,
            ValidationError::NonPositiveValue { field, .. } => *field,
        }
    }

    /// 알림창에 띄울 문구. 숫자 오류와 0 이하 오류는 같은 문구를 쓴다.
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::MissingInput(_) => MSG_MISSING_INPUT,
            ValidationError::InvalidNumber { .. } | ValidationError::NonPositiveValue { .. } => {
                MSG_INVALID_VALUES
            }
        }
    }
}

/// 사용자가 입력한 원본 문자열 한 쌍. 체중은 kg, 키는 cm.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Measurement {
    pub weight: String,
    pub height: String,
}

impl Measurement {
    pub fn new(weight: impl Into<String>, height: impl Into<String>) -> Self {
        Self {
            weight: weight.into(),
            height: height.into(),
        }
    }

    pub fn calculate(&self) -> Result<BmiResult, ValidationError> {
        calculate(&self.weight, &self.height)
    }
}

/// BMI 계산 결과. 분류/색상/이미지 키는 모두 반올림된 `value`에서 결정된다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BmiResult {
    /// 소수 첫째 자리로 반올림된 BMI
    pub value: f64,
    pub category: BmiCategory,
    pub color: BmiColor,
    pub image_key: ImageKey,
}

impl BmiResult {
    /// 반올림된 값에서 결과를 구성한다.
    pub fn from_rounded(value: f64) -> Self {
        let category = BmiCategory::classify(value);
        Self {
            value,
            category,
            color: category.color(),
            image_key: category.image_key(),
        }
    }

    /// 소수 한 자리로 포맷한 값.
    pub fn formatted(&self) -> String {
        format!("{:.1}", self.value)
    }
}

/// 체중(kg)과 키(cm) 문자열로 BMI를 계산하고 분류한다.
///
/// 검증 순서는 누락 → 숫자 해석 → 양수 확인이다. 어느 한쪽이라도 비어 있으면
/// 숫자 해석을 시도하기 전에 [`ValidationError::MissingInput`]을 돌려준다.
pub fn calculate(weight_text: &str, height_text: &str) -> Result<BmiResult, ValidationError> {
    let weight_text = weight_text.trim();
    let height_text = height_text.trim();
    if weight_text.is_empty() {
        return Err(ValidationError::MissingInput(Field::Weight));
    }
    if height_text.is_empty() {
        return Err(ValidationError::MissingInput(Field::Height));
    }

    let weight = parse_number(weight_text, Field::Weight)?;
    let height_cm = parse_number(height_text, Field::Height)?;
    let height_m = height_cm / 100.0;

    if weight <= 0.0 {
        return Err(ValidationError::NonPositiveValue {
            field: Field::Weight,
            value: weight,
        });
    }
    if height_m <= 0.0 {
        return Err(ValidationError::NonPositiveValue {
            field: Field::Height,
            value: height_cm,
        });
    }

    let divisor = height_m * height_m;
    if divisor == 0.0 {
        return Err(ValidationError::InvalidNumber {
            field: Field::Height,
            input: height_text.to_string(),
        });
    }
    // `* 10.0` 단계에서도 넘칠 수 있어 반올림한 값을 검사한다.
    let rounded = round_one_decimal(weight / divisor);
    if !rounded.is_finite() {
        return Err(ValidationError::InvalidNumber {
            field: Field::Weight,
            input: weight_text.to_string(),
        });
    }

    Ok(BmiResult::from_rounded(rounded))
}

/// 소수 첫째 자리로 반올림한다(0.5는 0에서 먼 쪽으로).
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn parse_number(text: &str, field: Field) -> Result<f64, ValidationError> {
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ValidationError::InvalidNumber {
            field,
            input: text.to_string(),
        }),
    }
}
