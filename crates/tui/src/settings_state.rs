//! Settings panel state management.
//!
//! This module provides state management for the settings UI: item
//! selection, boolean toggles, and text editing of the form pre-fill values.

use bmi_config::{Config, form::is_valid_prefill};
use bmi_core::{Field, parse_field};

/// Items in the settings panel, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsItem {
    /// Toggle for the category icon.
    ShowIcon,
    /// Toggle for the category scale.
    ShowScale,
    /// Pre-filled height.
    DefaultHeight,
    /// Pre-filled weight.
    DefaultWeight,
}

impl SettingsItem {
    /// Returns all items in order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[
            Self::ShowIcon,
            Self::ShowScale,
            Self::DefaultHeight,
            Self::DefaultWeight,
        ]
    }

    /// Returns the display label for this item.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::ShowIcon => "Show category icon",
            Self::ShowScale => "Show BMI scale",
            Self::DefaultHeight => "Default height (cm)",
            Self::DefaultWeight => "Default weight (kg)",
        }
    }

    /// Returns the measurement field a text item edits.
    #[must_use]
    pub fn field(self) -> Option<Field> {
        match self {
            Self::DefaultHeight => Some(Field::Height),
            Self::DefaultWeight => Some(Field::Weight),
            Self::ShowIcon | Self::ShowScale => None,
        }
    }
}

/// Edit mode for settings fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditMode {
    /// Not currently editing.
    #[default]
    None,
    /// Editing a text field.
    Text {
        /// The current value being edited.
        value: String,
        /// The cursor position within the value.
        cursor: usize,
    },
}

impl EditMode {
    /// Starts a text edit with the cursor at the end of `value`.
    #[must_use]
    pub fn text(value: String) -> Self {
        let cursor = value.len();
        Self::Text { value, cursor }
    }

    /// Returns `true` if currently in edit mode.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Returns the current edit value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Text { value, .. } => Some(value),
        }
    }

    /// Returns the cursor position, if in edit mode.
    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        match self {
            Self::None => None,
            Self::Text { cursor, .. } => Some(*cursor),
        }
    }

    /// Inserts a character at the cursor position.
    pub fn insert_char(&mut self, ch: char) {
        if let Self::Text { value, cursor } = self {
            value.insert(*cursor, ch);
            *cursor += ch.len_utf8();
        }
    }

    /// Deletes the character before the cursor (backspace).
    pub fn backspace(&mut self) {
        if let Self::Text { value, cursor } = self
            && let Some((prev_boundary, _)) = value[..*cursor].char_indices().last()
        {
            value.remove(prev_boundary);
            *cursor = prev_boundary;
        }
    }
}

/// State for the settings panel.
#[derive(Debug, Clone)]
pub struct SettingsState {
    /// The configuration being edited.
    config: Config,
    /// Whether the config has unsaved changes.
    dirty: bool,
    /// The selected item index.
    selected_item: usize,
    /// The current edit mode.
    edit_mode: EditMode,
    /// Feedback from the last confirm or save, shown in the panel footer.
    notice: Option<String>,
}

impl SettingsState {
    /// Creates a new settings state from a configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use bmi_config::Config;
    /// use bmi_tui::settings_state::SettingsState;
    ///
    /// let state = SettingsState::new(Config::default());
    /// assert!(!state.is_dirty());
    /// assert_eq!(state.selected_item(), 0);
    /// ```
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            dirty: false,
            selected_item: 0,
            edit_mode: EditMode::None,
            notice: None,
        }
    }

    /// Returns a reference to the configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns whether the configuration has unsaved changes.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Marks the configuration as saved (no longer dirty).
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    /// Returns the footer notice, if any.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Sets the footer notice.
    pub fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
    }

    /// Returns the selected item index.
    #[must_use]
    pub fn selected_item(&self) -> usize {
        self.selected_item
    }

    /// Returns the selected item.
    #[must_use]
    pub fn selected(&self) -> SettingsItem {
        SettingsItem::all()[self.selected_item]
    }

    /// Returns a reference to the current edit mode.
    #[must_use]
    pub fn edit_mode(&self) -> &EditMode {
        &self.edit_mode
    }

    /// Returns `true` if currently in edit mode.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.edit_mode.is_editing()
    }

    /// Returns the number of items in the panel.
    #[must_use]
    pub fn item_count(&self) -> usize {
        SettingsItem::all().len()
    }

    /// Moves the selection by `delta` items, wrapping around.
    pub fn navigate(&mut self, delta: i32) {
        let count = self.item_count() as i64;
        let next = (self.selected_item as i64 + i64::from(delta)).rem_euclid(count);
        self.selected_item = next as usize;
    }

    /// Returns the displayed value of an item.
    #[must_use]
    pub fn item_value(&self, item: SettingsItem) -> String {
        let checkbox = |on: bool| if on { "[x]" } else { "[ ]" }.to_string();
        let number = |value: Option<f64>| value.map_or_else(|| "(none)".to_string(), |v| v.to_string());
        match item {
            SettingsItem::ShowIcon => checkbox(self.config.display.show_icon),
            SettingsItem::ShowScale => checkbox(self.config.display.show_scale),
            SettingsItem::DefaultHeight => number(self.config.form.height_cm),
            SettingsItem::DefaultWeight => number(self.config.form.weight_kg),
        }
    }

    /// Toggles the selected item, or starts editing it if it holds text.
    pub fn activate_selected(&mut self) {
        match self.selected() {
            SettingsItem::ShowIcon | SettingsItem::ShowScale => self.toggle_selected(),
            SettingsItem::DefaultHeight => {
                self.edit_mode = EditMode::text(prefill_text(self.config.form.height_cm));
            }
            SettingsItem::DefaultWeight => {
                self.edit_mode = EditMode::text(prefill_text(self.config.form.weight_kg));
            }
        }
    }

    /// Toggles boolean settings.
    pub fn toggle_selected(&mut self) {
        let item = self.selected();
        let display = &mut self.config.display;
        match item {
            SettingsItem::ShowIcon => display.show_icon = !display.show_icon,
            SettingsItem::ShowScale => display.show_scale = !display.show_scale,
            SettingsItem::DefaultHeight | SettingsItem::DefaultWeight => return,
        }
        self.dirty = true;
    }

    /// Confirms the current edit.
    ///
    /// Blank text clears the pre-fill value. Text that is not a valid
    /// pre-fill value is rejected with a notice and leaves the config
    /// unchanged.
    pub fn confirm_edit(&mut self) {
        let EditMode::Text { value, .. } = std::mem::take(&mut self.edit_mode) else {
            return;
        };
        let Some(field) = self.selected().field() else {
            return;
        };

        match parse_field(field, &value) {
            Ok(parsed) if parsed.is_none_or(is_valid_prefill) => {
                let slot = match field {
                    Field::Height => &mut self.config.form.height_cm,
                    Field::Weight => &mut self.config.form.weight_kg,
                };
                *slot = parsed;
                self.dirty = true;
                self.notice = None;
            }
            Ok(_) => self.set_notice(format!("default {field} must be between 0 and 1000")),
            Err(err) => self.set_notice(err.to_string()),
        }
    }

    /// Cancels the current edit.
    pub fn cancel_edit(&mut self) {
        self.edit_mode = EditMode::None;
    }

    /// Handles character input while in edit mode.
    pub fn input_char(&mut self, ch: char) {
        self.edit_mode.insert_char(ch);
    }

    /// Handles backspace while in edit mode.
    pub fn backspace(&mut self) {
        self.edit_mode.backspace();
    }

    /// Takes the configuration out of this state, consuming it.
    #[must_use]
    pub fn into_config(self) -> Config {
        self.config
    }
}

/// Returns the initial edit text for a pre-fill value.
fn prefill_text(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmi_config::FormDefaults;

    fn select(state: &mut SettingsState, item: SettingsItem) {
        while state.selected() != item {
            state.navigate(1);
        }
    }

    fn retype(state: &mut SettingsState, text: &str) {
        while state.edit_mode().value().is_some_and(|v| !v.is_empty()) {
            state.backspace();
        }
        for ch in text.chars() {
            state.input_char(ch);
        }
    }

    #[test]
    fn settings_state_new() {
        let state = SettingsState::new(Config::default());
        assert!(!state.is_dirty());
        assert_eq!(state.selected(), SettingsItem::ShowIcon);
        assert!(!state.is_editing());
        assert!(state.notice().is_none());
    }

    #[test]
    fn navigate_wraps_both_ways() {
        let mut state = SettingsState::new(Config::default());

        state.navigate(1);
        assert_eq!(state.selected(), SettingsItem::ShowScale);

        state.navigate(-2);
        assert_eq!(state.selected(), SettingsItem::DefaultWeight);

        state.navigate(1);
        assert_eq!(state.selected(), SettingsItem::ShowIcon);
    }

    #[test]
    fn toggle_show_icon() {
        let mut state = SettingsState::new(Config::default());
        state.activate_selected();

        assert!(!state.config().display.show_icon);
        assert!(state.is_dirty());
        assert_eq!(state.item_value(SettingsItem::ShowIcon), "[ ]");
    }

    #[test]
    fn toggle_show_scale_leaves_icon_alone() {
        let mut state = SettingsState::new(Config::default());
        select(&mut state, SettingsItem::ShowScale);

        state.toggle_selected();
        assert!(!state.config().display.show_scale);
        assert!(state.config().display.show_icon);

        state.toggle_selected();
        assert!(state.config().display.show_scale);
        assert!(state.is_dirty());
    }

    #[test]
    fn toggle_does_nothing_on_text_items() {
        let mut state = SettingsState::new(Config::default());
        select(&mut state, SettingsItem::DefaultHeight);
        state.toggle_selected();
        assert!(!state.is_dirty());
    }

    #[test]
    fn edit_default_height() {
        let mut state = SettingsState::new(Config::default());
        select(&mut state, SettingsItem::DefaultHeight);

        state.activate_selected();
        assert!(state.is_editing());
        retype(&mut state, "172,5");
        state.confirm_edit();

        assert!(!state.is_editing());
        assert_eq!(state.config().form.height_cm, Some(172.5));
        assert_eq!(state.item_value(SettingsItem::DefaultHeight), "172.5");
        assert!(state.is_dirty());
    }

    #[test]
    fn blank_edit_clears_default() {
        let config = Config {
            form: FormDefaults::new(None, Some(70.0)),
            ..Default::default()
        };
        let mut state = SettingsState::new(config);
        select(&mut state, SettingsItem::DefaultWeight);

        state.activate_selected();
        assert_eq!(state.edit_mode().value(), Some("70"));
        retype(&mut state, "");
        state.confirm_edit();

        assert_eq!(state.config().form.weight_kg, None);
        assert_eq!(state.item_value(SettingsItem::DefaultWeight), "(none)");
    }

    #[test]
    fn out_of_range_edit_is_rejected() {
        let mut state = SettingsState::new(Config::default());
        select(&mut state, SettingsItem::DefaultWeight);

        state.activate_selected();
        retype(&mut state, "0");
        state.confirm_edit();

        assert_eq!(state.config().form.weight_kg, None);
        assert!(!state.is_dirty());
        assert_eq!(
            state.notice(),
            Some("default weight must be between 0 and 1000")
        );
    }

    #[test]
    fn unparseable_edit_is_rejected() {
        let mut state = SettingsState::new(Config::default());
        select(&mut state, SettingsItem::DefaultHeight);

        state.activate_selected();
        retype(&mut state, "1.8.0");
        state.confirm_edit();

        assert_eq!(state.config().form.height_cm, None);
        assert_eq!(state.notice(), Some("invalid height: '1.8.0' is not a number"));
    }

    #[test]
    fn cancel_edit_keeps_config() {
        let mut state = SettingsState::new(Config::default());
        select(&mut state, SettingsItem::DefaultHeight);

        state.activate_selected();
        state.input_char('9');
        state.cancel_edit();

        assert!(!state.is_editing());
        assert!(!state.is_dirty());
        assert_eq!(state.config().form.height_cm, None);
    }

    #[test]
    fn edit_mode_text_input() {
        let mut edit = EditMode::text(String::new());

        edit.insert_char('6');
        edit.insert_char('5');
        assert_eq!(edit.value(), Some("65"));
        assert_eq!(edit.cursor(), Some(2));

        edit.backspace();
        assert_eq!(edit.value(), Some("6"));
        assert_eq!(edit.cursor(), Some(1));

        edit.backspace();
        edit.backspace();
        assert_eq!(edit.value(), Some(""));
    }
}
