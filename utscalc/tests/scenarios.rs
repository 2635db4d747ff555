//! End-to-end keypad sessions driven through the public API.

use utscalc::keypad::action_for_char;
use utscalc::{Action, Calculator, Operator, Phase};

/// Type a session the way a user would on a keyboard.
fn type_keys(keys: &str) -> Calculator {
    let mut calc = Calculator::new();
    for action in keys.chars().filter_map(action_for_char) {
        calc.apply(action);
    }
    calc
}

#[test]
fn addition_shows_full_expression() {
    let calc = type_keys("12+7=");
    assert_eq!(calc.expression(), "12 + 7");
    assert_eq!(calc.display(), "19");
}

#[test]
fn division_by_zero_is_error() {
    let calc = type_keys("5/0=");
    assert_eq!(calc.display(), "Error");
}

#[test]
fn percent_of_single_digit() {
    assert_eq!(type_keys("5%").display(), "0.05");
}

#[test]
fn equals_without_operator_changes_nothing() {
    let calc = type_keys("9=");
    assert_eq!(calc.display(), "9");
    assert_eq!(calc.expression(), "");
    assert_eq!(calc.phase(), Phase::Idle);
}

#[test]
fn chained_operators_evaluate_left_to_right() {
    let calc = type_keys("2+3*");
    assert_eq!(calc.expression(), "5 ×");
    let calc = type_keys("2+3*4=");
    assert_eq!(calc.display(), "20");
}

#[test]
fn operator_then_equals_repeats_first_operand() {
    assert_eq!(type_keys("7-=").display(), "0");
    assert_eq!(type_keys("3*=").display(), "9");
}

#[test]
fn long_session_with_recovery() {
    let mut calc = type_keys("1.5*4=");
    assert_eq!(calc.display(), "6");

    for action in [
        Action::Operation(Operator::Divide),
        Action::Digit(0),
        Action::Calculate,
    ] {
        calc.apply(action);
    }
    assert_eq!(calc.display(), "Error");
    assert_eq!(calc.expression(), "6 ÷ 0");

    calc.apply(Action::Clear);
    assert_eq!(calc.display(), "0");
    assert_eq!(calc.expression(), "");

    for action in "8n+2=".chars().filter_map(action_for_char) {
        calc.apply(action);
    }
    assert_eq!(calc.expression(), "-8 + 2");
    assert_eq!(calc.display(), "-6");
}
