//! Application state management.
//!
//! This module defines the form state: the two input fields, which element
//! has focus, and the outcome of the latest calculation.

use bmi_core::{BmiResult, EvalError, Field, MeasurementInput};

/// Maximum number of characters an input field accepts.
pub const MAX_INPUT_LEN: usize = 8;

/// The element that currently receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The height field.
    #[default]
    Height,
    /// The weight field.
    Weight,
    /// The "Calculate BMI" button.
    Submit,
    /// The settings panel.
    Settings,
}

impl Focus {
    /// Returns the next form element (wrapping around).
    ///
    /// `Settings` is not part of the form cycle and maps to `Height`.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Height => Self::Weight,
            Self::Weight => Self::Submit,
            Self::Submit | Self::Settings => Self::Height,
        }
    }

    /// Returns the previous form element (wrapping around).
    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Self::Height => Self::Submit,
            Self::Weight => Self::Height,
            Self::Submit => Self::Weight,
            Self::Settings => Self::Height,
        }
    }

    /// Returns the measurement field this focus edits, if any.
    #[must_use]
    pub fn field(self) -> Option<Field> {
        match self {
            Self::Height => Some(Field::Height),
            Self::Weight => Some(Field::Weight),
            Self::Submit | Self::Settings => None,
        }
    }
}

/// The text content of a single numeric input field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputField {
    text: String,
}

impl InputField {
    /// Creates a field showing `value`, or an empty field for `None`.
    ///
    /// The text is never shortened to [`MAX_INPUT_LEN`]; that limit only
    /// applies to typing.
    ///
    /// # Examples
    ///
    /// ```
    /// use bmi_tui::state::InputField;
    ///
    /// assert_eq!(InputField::from_value(Some(180.0)).text(), "180");
    /// assert_eq!(InputField::from_value(Some(50.37)).text(), "50.37");
    /// assert!(InputField::from_value(None).is_empty());
    /// ```
    #[must_use]
    pub fn from_value(value: Option<f64>) -> Self {
        Self {
            text: value.map(|v| v.to_string()).unwrap_or_default(),
        }
    }

    /// Returns the current text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns `true` if the field holds no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Appends a character, returning `false` if the field is full.
    pub fn push(&mut self, ch: char) -> bool {
        if self.text.chars().count() >= MAX_INPUT_LEN {
            return false;
        }
        self.text.push(ch);
        true
    }

    /// Removes the last character.
    pub fn pop(&mut self) {
        self.text.pop();
    }

    /// Clears the field.
    pub fn clear(&mut self) {
        self.text.clear();
    }
}

/// The result of the most recent calculation request.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Outcome {
    /// Nothing has been submitted since the form was opened or reset.
    #[default]
    Pending,
    /// The last submission produced a result.
    Computed(BmiResult),
    /// The last submission was rejected.
    Rejected(EvalError),
}

/// The application state.
///
/// Holds the form fields, focus, the latest outcome, and overlay
/// visibility. Only the latest outcome is kept; there is no history.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The height field (centimeters).
    pub height: InputField,
    /// The weight field (kilograms).
    pub weight: InputField,
    /// Current focus.
    pub focus: Focus,
    /// Outcome of the latest submission.
    pub outcome: Outcome,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
}

impl AppState {
    /// Creates an empty form with focus on the height field.
    ///
    /// # Examples
    ///
    /// ```
    /// use bmi_tui::{AppState, Focus};
    ///
    /// let state = AppState::new();
    /// assert_eq!(state.focus, Focus::Height);
    /// assert!(state.result().is_none());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a form with the given fields pre-filled.
    #[must_use]
    pub fn with_prefill(height_cm: Option<f64>, weight_kg: Option<f64>) -> Self {
        Self {
            height: InputField::from_value(height_cm),
            weight: InputField::from_value(weight_kg),
            ..Self::default()
        }
    }

    /// Returns the latest result, if the last submission succeeded.
    #[must_use]
    pub fn result(&self) -> Option<&BmiResult> {
        match &self.outcome {
            Outcome::Computed(result) => Some(result),
            _ => None,
        }
    }

    /// Returns the latest error, if the last submission was rejected.
    #[must_use]
    pub fn error(&self) -> Option<&EvalError> {
        match &self.outcome {
            Outcome::Rejected(err) => Some(err),
            _ => None,
        }
    }

    /// Toggles the help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Dismisses the help overlay if it is visible.
    ///
    /// Returns `true` if help was visible and has been dismissed.
    #[must_use]
    pub fn dismiss_help(&mut self) -> bool {
        std::mem::replace(&mut self.help_visible, false)
    }

    /// Moves focus to the next form element.
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Moves focus to the previous form element.
    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Returns the field that has focus, if a field has focus.
    fn focused_field_mut(&mut self) -> Option<&mut InputField> {
        match self.focus.field()? {
            Field::Height => Some(&mut self.height),
            Field::Weight => Some(&mut self.weight),
        }
    }

    /// Types a character into the focused field.
    ///
    /// Ignored when the button has focus or the field is full.
    pub fn input_char(&mut self, ch: char) {
        if let Some(field) = self.focused_field_mut() {
            field.push(ch);
        }
    }

    /// Deletes the last character of the focused field.
    pub fn backspace(&mut self) {
        if let Some(field) = self.focused_field_mut() {
            field.pop();
        }
    }

    /// Clears both fields and the outcome, and focuses the height field.
    pub fn reset(&mut self) {
        self.height.clear();
        self.weight.clear();
        self.outcome = Outcome::Pending;
        self.focus = Focus::Height;
    }

    /// Calculates the BMI from the current field text.
    ///
    /// The previous outcome is always replaced, so a rejected submission
    /// never leaves a stale result on screen.
    pub fn submit(&mut self) -> bmi_core::Result<BmiResult> {
        let evaluated = MeasurementInput::parse(self.height.text(), self.weight.text())
            .and_then(|input| input.validate())
            .and_then(|measurement| measurement.evaluate());

        self.outcome = match &evaluated {
            Ok(result) => Outcome::Computed(*result),
            Err(err) => Outcome::Rejected(err.clone()),
        };
        evaluated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmi_core::{Category, InvalidReason};

    fn type_text(state: &mut AppState, text: &str) {
        for ch in text.chars() {
            state.input_char(ch);
        }
    }

    #[test]
    fn focus_cycles_through_form() {
        let mut state = AppState::new();
        state.focus_next();
        assert_eq!(state.focus, Focus::Weight);
        state.focus_next();
        assert_eq!(state.focus, Focus::Submit);
        state.focus_next();
        assert_eq!(state.focus, Focus::Height);

        state.focus_prev();
        assert_eq!(state.focus, Focus::Submit);
    }

    #[test]
    fn typing_goes_to_focused_field() {
        let mut state = AppState::new();
        type_text(&mut state, "180");
        state.focus_next();
        type_text(&mut state, "75");

        assert_eq!(state.height.text(), "180");
        assert_eq!(state.weight.text(), "75");
    }

    #[test]
    fn typing_on_button_is_ignored() {
        let mut state = AppState::new();
        state.focus = Focus::Submit;
        type_text(&mut state, "12");
        state.backspace();

        assert!(state.height.is_empty());
        assert!(state.weight.is_empty());
    }

    #[test]
    fn field_length_is_capped() {
        let mut field = InputField::default();
        for _ in 0..MAX_INPUT_LEN {
            assert!(field.push('9'));
        }
        assert!(!field.push('9'));
        assert_eq!(field.text().len(), MAX_INPUT_LEN);
    }

    #[test]
    fn long_prefill_keeps_full_value() {
        let mut state = AppState::with_prefill(Some(172.123456), Some(0.0000001));
        assert_eq!(state.height.text(), "172.123456");
        assert_eq!(state.weight.text(), "0.0000001");

        let result = state.submit().expect("tiny weight still computes");
        assert!(result.value().is_finite());

        // Typing stays capped, deleting works
        state.input_char('9');
        assert_eq!(state.height.text(), "172.123456");
        state.backspace();
        assert_eq!(state.height.text(), "172.12345");
    }

    #[test]
    fn backspace_removes_last_character() {
        let mut state = AppState::new();
        type_text(&mut state, "181");
        state.backspace();
        assert_eq!(state.height.text(), "18");
    }

    #[test]
    fn submit_computes_result() {
        let mut state = AppState::with_prefill(Some(170.0), Some(80.0));
        assert!(state.submit().is_ok());

        let result = state.result().expect("result");
        assert_eq!(result.value(), 27.68);
        assert_eq!(result.category(), Category::Overweight);
        assert!(state.error().is_none());
    }

    #[test]
    fn submit_with_missing_input_clears_previous_result() {
        let mut state = AppState::with_prefill(Some(180.0), Some(75.0));
        assert!(state.submit().is_ok());
        assert!(state.result().is_some());

        state.focus = Focus::Weight;
        state.weight.clear();
        assert!(state.submit().is_err());

        assert!(state.result().is_none());
        assert_eq!(
            state.error(),
            Some(&EvalError::MissingInput {
                field: Field::Weight
            })
        );
    }

    #[test]
    fn submit_rejects_zero_height() {
        let mut state = AppState::with_prefill(None, Some(60.0));
        type_text(&mut state, "0");
        assert!(state.submit().is_err());

        assert_eq!(
            state.error(),
            Some(&EvalError::InvalidInput {
                field: Field::Height,
                reason: InvalidReason::NotPositive(0.0),
            })
        );
    }

    #[test]
    fn submit_rejects_lone_separator() {
        let mut state = AppState::with_prefill(None, Some(60.0));
        type_text(&mut state, ".");
        assert!(state.submit().is_err());

        assert!(matches!(
            state.error(),
            Some(EvalError::InvalidInput {
                field: Field::Height,
                reason: InvalidReason::NotANumber(_),
            })
        ));
    }

    #[test]
    fn reset_clears_everything() {
        let mut state = AppState::with_prefill(Some(180.0), Some(75.0));
        state.focus = Focus::Submit;
        assert!(state.submit().is_ok());

        state.reset();
        assert!(state.height.is_empty());
        assert!(state.weight.is_empty());
        assert_eq!(state.outcome, Outcome::Pending);
        assert_eq!(state.focus, Focus::Height);
    }

    #[test]
    fn dismiss_help_reports_visibility() {
        let mut state = AppState::new();
        assert!(!state.dismiss_help());
        state.toggle_help();
        assert!(state.dismiss_help());
        assert!(!state.help_visible);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        fn key() -> impl Strategy<Value = char> {
            prop::sample::select(vec!['0', '1', '5', '9', '.', ',', '\u{8}', '\t'])
        }

        proptest! {
            #[test]
            fn fields_never_exceed_max_len(keys in prop::collection::vec(key(), 0..64)) {
                let mut state = AppState::new();
                for ch in keys {
                    match ch {
                        '\u{8}' => state.backspace(),
                        '\t' => state.focus_next(),
                        _ => state.input_char(ch),
                    }
                    prop_assert!(state.height.text().chars().count() <= MAX_INPUT_LEN);
                    prop_assert!(state.weight.text().chars().count() <= MAX_INPUT_LEN);
                }
            }

            #[test]
            fn submit_never_shows_non_finite_value(keys in prop::collection::vec(key(), 0..32)) {
                let mut state = AppState::new();
                for ch in keys {
                    match ch {
                        '\u{8}' => state.backspace(),
                        '\t' => state.focus_next(),
                        _ => state.input_char(ch),
                    }
                }
                let submitted = state.submit().ok();
                prop_assert_eq!(submitted.as_ref(), state.result());
                if let Some(result) = state.result() {
                    prop_assert!(result.value().is_finite());
                }
            }
        }
    }
}
