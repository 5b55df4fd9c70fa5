//! 계산 결과 회귀 테스트. 원 화면 예시 입력을 그대로 사용한다.
use bmi_calculator::bmi::{
    calculate, BmiCategory, BmiColor, Field, Measurement, ValidationError, MSG_INVALID_VALUES,
    MSG_MISSING_INPUT,
};

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.4} got {actual:.4} (diff {diff:.6}, tol {tol})"
    );
}

#[test]
fn normal_example() {
    let res = calculate("70", "175").expect("valid input");
    assert_close("bmi", res.value, 22.9, 1e-9);
    assert_eq!(res.formatted(), "22.9");
    assert_eq!(res.category, BmiCategory::Normal);
    assert_eq!(res.color, BmiColor::Green);
    assert_eq!(res.image_key.as_str(), "bmi_normal");
}

#[test]
fn underweight_example() {
    let res = calculate("50", "170").expect("valid input");
    assert_eq!(res.formatted(), "17.3");
    assert_eq!(res.category, BmiCategory::Underweight);
    assert_eq!(res.color, BmiColor::Blue);
    assert_eq!(res.color.hex(), "#3498db");
}

#[test]
fn obese_example() {
    let res = calculate("90", "170").expect("valid input");
    assert_eq!(res.formatted(), "31.1");
    assert_eq!(res.category, BmiCategory::Obese);
    assert_eq!(res.color, BmiColor::Red);
    assert_eq!(res.image_key, BmiCategory::Obese.image_key());
}

#[test]
fn decimal_inputs_use_a_dot() {
    let res = calculate("72.5", "180.5").expect("valid input");
    // 72.5 / 1.805^2 = 22.252...
    assert_eq!(res.formatted(), "22.3");
    let err = calculate("72,5", "180").unwrap_err();
    assert!(matches!(err, ValidationError::InvalidNumber { field: Field::Weight, .. }));
}

#[test]
fn value_matches_formula_for_a_range_of_inputs() {
    for (w, h) in [(45.0, 150.0), (60.0, 160.0), (82.3, 177.0), (120.0, 190.0), (3.2, 50.0)] {
        let res = calculate(&w.to_string(), &h.to_string()).expect("valid input");
        let hm: f64 = h / 100.0;
        let expected = (w / (hm * hm) * 10.0).round() / 10.0;
        assert_close("bmi", res.value, expected, 1e-9);
        assert_eq!(res.category, BmiCategory::classify(res.value));
    }
}

#[test]
fn empty_weight_is_missing_input() {
    assert_eq!(
        calculate("", "170").unwrap_err(),
        ValidationError::MissingInput(Field::Weight)
    );
}

#[test]
fn missing_is_reported_before_parsing() {
    // 키가 비어 있으면 체중이 숫자가 아니어도 누락 오류가 먼저다.
    assert_eq!(
        calculate("abc", "").unwrap_err(),
        ValidationError::MissingInput(Field::Height)
    );
    assert_eq!(
        calculate("   ", "170").unwrap_err(),
        ValidationError::MissingInput(Field::Weight)
    );
}

#[test]
fn non_numeric_is_invalid_number() {
    let err = calculate("abc", "170").unwrap_err();
    assert_eq!(
        err,
        ValidationError::InvalidNumber {
            field: Field::Weight,
            input: "abc".into()
        }
    );
    let err = calculate("70", "1m75").unwrap_err();
    assert_eq!(err.field(), Field::Height);
}

#[test]
fn zero_and_negative_are_non_positive() {
    assert_eq!(
        calculate("70", "0").unwrap_err(),
        ValidationError::NonPositiveValue {
            field: Field::Height,
            value: 0.0
        }
    );
    assert_eq!(
        calculate("0", "170").unwrap_err(),
        ValidationError::NonPositiveValue {
            field: Field::Weight,
            value: 0.0
        }
    );
    assert_eq!(
        calculate("70", "-170").unwrap_err(),
        ValidationError::NonPositiveValue {
            field: Field::Height,
            value: -170.0
        }
    );
    assert!(matches!(
        calculate("-1", "170").unwrap_err(),
        ValidationError::NonPositiveValue { field: Field::Weight, .. }
    ));
}

#[test]
fn user_messages_are_coarse() {
    assert_eq!(calculate("", "").unwrap_err().user_message(), MSG_MISSING_INPUT);
    assert_eq!(calculate("abc", "170").unwrap_err().user_message(), MSG_INVALID_VALUES);
    assert_eq!(calculate("70", "0").unwrap_err().user_message(), MSG_INVALID_VALUES);
}

#[test]
fn detailed_display_names_the_field() {
    let err = calculate("70", "0").unwrap_err();
    assert_eq!(err.to_string(), "height must be greater than zero (got 0)");
    let err = calculate("", "170").unwrap_err();
    assert_eq!(err.to_string(), "weight is missing");
}

#[test]
fn repeated_calls_are_identical() {
    let first = calculate("68.4", "171").expect("valid input");
    let second = calculate("68.4", "171").expect("valid input");
    assert_eq!(first, second);
    assert_eq!(Measurement::new("68.4", "171").calculate(), Ok(first));
}

#[test]
fn result_serializes_to_toml() {
    let res = calculate("70", "175").expect("valid input");
    let text = toml::to_string(&res).expect("serialize");
    assert!(text.contains("value = 22.9"), "{text}");
    assert!(text.contains("category = \"normal\""), "{text}");
    assert!(text.contains("color = \"green\""), "{text}");
    assert!(text.contains("image_key = \"bmi_normal\""), "{text}");
}

#[test]
fn overflow_while_rounding_is_invalid_number() {
    // 1e308 / 1.0^2 는 유한하지만 소수 첫째 자리 반올림 중 무한대가 된다.
    let err = calculate("1e308", "100").unwrap_err();
    assert_eq!(
        err,
        ValidationError::InvalidNumber {
            field: Field::Weight,
            input: "1e308".into()
        }
    );
    assert_eq!(err.user_message(), MSG_INVALID_VALUES);
}

#[test]
fn largest_representable_results_stay_finite() {
    let res = calculate("1e306", "100").expect("finite after rounding");
    assert!(res.value.is_finite());
    assert_eq!(res.category, BmiCategory::Obese);
}
