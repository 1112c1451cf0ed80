//! End-to-end calculator scenarios: configuration pre-fill flowing into the
//! form, and the reference measurements through the evaluator.

use bmi_config::{Config, FormDefaults};
use bmi_core::{Category, EvalError, Field, InvalidReason, Message, compute};
use bmi_tui::App;

#[test]
fn reference_measurements() {
    let cases = [
        (180.0, 75.0, 23.15, Category::Normal),
        (160.0, 45.0, 17.58, Category::Underweight),
        (170.0, 80.0, 27.68, Category::Overweight),
        (150.0, 90.0, 40.0, Category::Obese),
        (165.0, 50.37, 18.5, Category::Normal),
    ];

    for (height, weight, value, category) in cases {
        let result = compute(Some(height), Some(weight)).unwrap();
        assert_eq!(result.value(), value, "{height} cm, {weight} kg");
        assert_eq!(result.category(), category, "{height} cm, {weight} kg");
    }
}

#[test]
fn obese_value_displays_two_decimals() {
    let result = compute(Some(150.0), Some(90.0)).unwrap();
    assert_eq!(result.to_string(), "40.00");
}

#[test]
fn missing_and_invalid_inputs_yield_no_result() {
    assert_eq!(
        compute(None, Some(70.0)),
        Err(EvalError::MissingInput {
            field: Field::Height
        })
    );
    assert_eq!(
        compute(Some(170.0), Some(-1.0)),
        Err(EvalError::InvalidInput {
            field: Field::Weight,
            reason: InvalidReason::NotPositive(-1.0),
        })
    );
}

#[test]
fn result_serializes_for_consumers() {
    let result = compute(Some(180.0), Some(75.0)).unwrap();
    let json = serde_json::to_value(result).unwrap();

    assert_eq!(json["value"], 23.15);
    assert_eq!(json["category"], "normal");
}

#[test]
fn configured_prefill_is_calculated_on_submit() {
    let config = Config {
        form: FormDefaults::new(Some(160.0), Some(45.0)),
        ..Default::default()
    };
    let mut app = App::with_config(config);

    app.update(Message::Submit);

    let result = app.state().result().expect("prefilled form computes");
    assert_eq!(result.value(), 17.58);
    assert_eq!(result.category(), Category::Underweight);
}

#[test]
fn precise_prefill_is_not_shortened() {
    let config = Config {
        form: FormDefaults::new(Some(172.123456), Some(65.4321987)),
        ..Default::default()
    };
    config.validate().unwrap();
    let mut app = App::with_config(config);

    assert_eq!(app.state().height.text(), "172.123456");
    assert_eq!(app.state().weight.text(), "65.4321987");

    app.update(Message::Submit);
    let expected = compute(Some(172.123456), Some(65.4321987)).unwrap();
    assert_eq!(app.state().result(), Some(&expected));
}

#[test]
fn typing_a_measurement_from_scratch() {
    let mut app = App::new();

    for ch in "170".chars() {
        app.update(Message::Input { ch });
    }
    app.update(Message::FocusNext);
    for ch in "80".chars() {
        app.update(Message::Input { ch });
    }
    app.update(Message::Submit);

    let result = app.state().result().expect("result");
    assert_eq!(result.value(), 27.68);

    app.update(Message::Escape);
    assert!(app.state().result().is_none());
    assert!(app.state().height.is_empty());
}
