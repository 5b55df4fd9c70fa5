use crate::bmi::{self, BmiResult, Measurement, ValidationError};

/// 화면 한 장이 들고 있는 입력값과 마지막 결과.
///
/// 엔진은 상태가 없으므로 초기화(reset)는 여기서만 의미가 있다.
#[derive(Debug, Clone, Default)]
pub struct CalculatorState {
    pub weight_input: String,
    pub height_input: String,
    result: Option<BmiResult>,
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn result(&self) -> Option<&BmiResult> {
        self.result.as_ref()
    }

    pub fn measurement(&self) -> Measurement {
        Measurement::new(self.weight_input.as_str(), self.height_input.as_str())
    }

    /// 현재 입력으로 계산한다. 실패하면 이전 결과를 지운다.
    pub fn calculate(&mut self) -> Result<BmiResult, ValidationError> {
        match bmi::calculate(&self.weight_input, &self.height_input) {
            Ok(res) => {
                log::debug!(
                    "BMI {} ({:?}) from weight={:?} height={:?}",
                    res.formatted(),
                    res.category,
                    self.weight_input,
                    self.height_input
                );
                self.result = Some(res);
                Ok(res)
            }
            Err(e) => {
                log::info!("validation failed: {e}");
                self.result = None;
                Err(e)
            }
        }
    }

    pub fn reset(&mut self) {
        self.weight_input.clear();
        self.height_input.clear();
        self.result = None;
    }
}
