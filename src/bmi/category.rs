use serde::Serialize;

/// BMI 분류 구간. 경계값은 하한 포함, 상한 미포함이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

/// 분류별 표시 색상.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiColor {
    Blue,
    Green,
    Orange,
    Red,
}

/// 결과가 없을 때 쓰는 중립 색상.
pub const NEUTRAL_HEX: &str = "#333333";

/// 분류 이미지를 고르기 위한 불투명 식별자. 실제 파일 해석은 표시 계층이 맡는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ImageKey(&'static str);

impl ImageKey {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for ImageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

impl BmiCategory {
    /// 구간 순서대로 나열한 전체 분류.
    pub const ALL: [BmiCategory; 4] = [
        BmiCategory::Underweight,
        BmiCategory::Normal,
        BmiCategory::Overweight,
        BmiCategory::Obese,
    ];

    /// 반올림된 BMI 값을 분류한다. 음수는 들어오지 않지만 Underweight로 흡수된다.
    pub fn classify(value: f64) -> Self {
        if value < 18.5 {
            BmiCategory::Underweight
        } else if value < 25.0 {
            BmiCategory::Normal
        } else if value < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn lower_bound(&self) -> f64 {
        match self {
            BmiCategory::Underweight => 0.0,
            BmiCategory::Normal => 18.5,
            BmiCategory::Overweight => 25.0,
            BmiCategory::Obese => 30.0,
        }
    }

    /// 상한(미포함). Obese는 상한이 없다.
    pub fn upper_bound(&self) -> Option<f64> {
        match self {
            BmiCategory::Underweight => Some(18.5),
            BmiCategory::Normal => Some(25.0),
            BmiCategory::Overweight => Some(30.0),
            BmiCategory::Obese => None,
        }
    }

    pub fn color(&self) -> BmiColor {
        match self {
            BmiCategory::Underweight => BmiColor::Blue,
            BmiCategory::Normal => BmiColor::Green,
            BmiCategory::Overweight => BmiColor::Orange,
            BmiCategory::Obese => BmiColor::Red,
        }
    }

    pub fn image_key(&self) -> ImageKey {
        match self {
            BmiCategory::Underweight => ImageKey("bmi_underweight"),
            BmiCategory::Normal => ImageKey("bmi_normal"),
            BmiCategory::Overweight => ImageKey("bmi_overweight"),
            BmiCategory::Obese => ImageKey("bmi_obese"),
        }
    }

    /// 화면에 표시할 고정 라벨.
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    /// 해석 범례에 쓰는 구간 문자열.
    pub fn range_label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Below 18.5",
            BmiCategory::Normal => "18.5 - 24.9",
            BmiCategory::Overweight => "25 - 29.9",
            BmiCategory::Obese => "30 and above",
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl BmiColor {
    pub fn hex(&self) -> &'static str {
        match self {
            BmiColor::Blue => "#3498db",
            BmiColor::Green => "#2ecc71",
            BmiColor::Orange => "#f39c12",
            BmiColor::Red => "#e74c3c",
        }
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            BmiColor::Blue => (0x34, 0x98, 0xdb),
            BmiColor::Green => (0x2e, 0xcc, 0x71),
            BmiColor::Orange => (0xf3, 0x9c, 0x12),
            BmiColor::Red => (0xe7, 0x4c, 0x3c),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BmiColor::Blue => "blue",
            BmiColor::Green => "green",
            BmiColor::Orange => "orange",
            BmiColor::Red => "red",
        }
    }
}

impl std::fmt::Display for BmiColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
