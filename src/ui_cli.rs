use std::io::{self, Write};

use crate::app::AppError;
use crate::bmi::{BmiCategory, BmiResult};
use crate::session::CalculatorState;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Calculate,
    Reset,
    Legend,
    Exit,
}

/// 메뉴 입력 문자열을 선택지로 바꾼다.
pub fn parse_menu_choice(input: &str) -> Option<MenuChoice> {
    match input.trim() {
        "1" => Some(MenuChoice::Calculate),
        "2" => Some(MenuChoice::Reset),
        "3" => Some(MenuChoice::Legend),
        "0" => Some(MenuChoice::Exit),
        _ => None,
    }
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== BMI Calculator ===");
    println!("Body Mass Index");
    println!("1) Calculate BMI");
    println!("2) Reset");
    println!("3) BMI categories");
    println!("0) Exit");
    loop {
        let sel = read_line("Select menu: ")?;
        match parse_menu_choice(&sel) {
            Some(choice) => return Ok(choice),
            None => println!("Invalid input. Please try again."),
        }
    }
}

/// 체중/키를 입력받아 계산한다. 빈 입력은 이전 값을 유지한다.
pub fn handle_calculate(state: &mut CalculatorState) -> Result<(), AppError> {
    println!("\n-- Calculate BMI --");
    let weight = read_line(&prompt_with_current("Weight (kg) [Ex: 70]", &state.weight_input))?;
    if !weight.trim().is_empty() {
        state.weight_input = weight.trim().to_string();
    }
    let height = read_line(&prompt_with_current("Height (cm) [Ex: 175]", &state.height_input))?;
    if !height.trim().is_empty() {
        state.height_input = height.trim().to_string();
    }
    match state.calculate() {
        Ok(res) => println!("{}", format_result(&res)),
        Err(e) => println!("Error: {}", e.user_message()),
    }
    Ok(())
}

fn prompt_with_current(label: &str, current: &str) -> String {
    if current.is_empty() {
        format!("{label}: ")
    } else {
        format!("{label} (current {current}): ")
    }
}

/// 결과를 여러 줄 텍스트로 만든다.
pub fn format_result(result: &BmiResult) -> String {
    format!(
        "Your BMI: {}\nCategory: {}\nColor: {} ({})\nImage: {}",
        result.formatted(),
        result.category,
        result.color,
        result.color.hex(),
        result.image_key
    )
}

/// 분류 구간 범례를 출력한다.
pub fn print_legend() {
    println!("\nInterpretation:");
    for category in BmiCategory::ALL {
        println!("  • {}: {}", category.range_label(), category.label());
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf)
}
