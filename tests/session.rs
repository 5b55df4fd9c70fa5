//! 화면 상태(입력/결과/초기화) 테스트.
use bmi_calculator::bmi::{BmiCategory, ValidationError};
use bmi_calculator::session::CalculatorState;

#[test]
fn calculate_stores_latest_result() {
    let mut state = CalculatorState::new();
    state.weight_input = "50".into();
    state.height_input = "170".into();
    state.calculate().expect("valid");
    assert_eq!(state.result().map(|r| r.category), Some(BmiCategory::Underweight));

    state.weight_input = "90".into();
    state.calculate().expect("valid");
    assert_eq!(state.result().map(|r| r.formatted()), Some("31.1".to_string()));
}

#[test]
fn failed_calculation_clears_stale_result() {
    let mut state = CalculatorState::new();
    state.weight_input = "70".into();
    state.height_input = "175".into();
    state.calculate().expect("valid");
    assert!(state.result().is_some());

    state.height_input = "0".into();
    let err = state.calculate().unwrap_err();
    assert!(matches!(err, ValidationError::NonPositiveValue { .. }));
    assert!(state.result().is_none());
    assert_eq!(state.height_input, "0");
}

#[test]
fn reset_clears_inputs_and_result() {
    let mut state = CalculatorState::new();
    state.weight_input = "70".into();
    state.height_input = "175".into();
    state.calculate().expect("valid");

    state.reset();
    assert!(state.weight_input.is_empty());
    assert!(state.height_input.is_empty());
    assert!(state.result().is_none());
    assert_eq!(
        state.calculate().unwrap_err(),
        ValidationError::MissingInput(bmi_calculator::bmi::Field::Weight)
    );
}

#[test]
fn measurement_mirrors_inputs() {
    let mut state = CalculatorState::new();
    state.weight_input = "80".into();
    state.height_input = "180".into();
    let m = state.measurement();
    assert_eq!(m.weight, "80");
    assert_eq!(m.calculate().map(|r| r.formatted()), Ok("24.7".to_string()));
}
