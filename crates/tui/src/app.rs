//! Main application struct and run loop.
//!
//! This module provides the `App` struct which orchestrates the TUI
//! application lifecycle including event handling, state updates, and rendering.

use bmi_config::Config;
use bmi_core::Message;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use tracing::{debug, info, warn};

use crate::{
    AppState, Focus,
    event::{event_to_message, key_to_settings_message, poll_event},
    layout::{
        HEADER_HEIGHT, MIN_HEIGHT, MIN_HEIGHT_WITH_HEADER, MIN_WIDTH, STATUS_BAR_HEIGHT,
        form_layout,
    },
    settings_state::SettingsState,
    terminal::AppTerminal,
    widgets::{
        render_form, render_help_overlay, render_message, render_result_card,
        render_settings_panel, render_status_bar,
    },
};

/// The main application struct.
///
/// Manages the application state and provides the main event loop.
#[derive(Debug)]
pub struct App {
    state: AppState,
    should_quit: bool,
    /// Last known terminal area, used for click hit-testing.
    last_area: Rect,
    /// Whether the header was shown in the last render (affects click hit-testing).
    header_visible: bool,
    /// Settings panel state, if open.
    settings_state: Option<SettingsState>,
    /// The application configuration.
    config: Config,
}

impl App {
    /// Creates a new application with an empty form and default configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use bmi_tui::App;
    ///
    /// let app = App::new();
    /// assert!(app.state().result().is_none());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates a new application with the given configuration.
    ///
    /// The form is pre-filled from `config.form`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bmi_config::{Config, FormDefaults};
    /// use bmi_tui::App;
    ///
    /// let config = Config {
    ///     form: FormDefaults::new(Some(180.0), None),
    ///     ..Default::default()
    /// };
    /// let app = App::with_config(config);
    /// assert_eq!(app.state().height.text(), "180");
    /// ```
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self {
            state: AppState::with_prefill(config.form.height_cm, config.form.weight_kg),
            should_quit: false,
            last_area: Rect::default(),
            header_visible: true,
            settings_state: None,
            config,
        }
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns a reference to the application configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns whether the settings panel is open.
    #[must_use]
    pub fn is_settings_open(&self) -> bool {
        self.settings_state.is_some()
    }

    /// Returns whether the application has been asked to quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Updates the application state based on a message.
    ///
    /// `Quit` always applies. Otherwise, when the settings panel is open it
    /// receives every message, and when the help overlay is visible any
    /// message dismisses it instead of performing its normal action.
    ///
    /// # Arguments
    ///
    /// * `msg` - The message to process.
    pub fn update(&mut self, msg: Message) {
        if msg.is_terminating() {
            info!("quit requested");
            self.should_quit = true;
            return;
        }

        if self.settings_state.is_some() {
            self.update_settings(msg);
            return;
        }

        // Any key dismisses help
        if self.state.dismiss_help() {
            return;
        }

        match msg {
            Message::OpenSettings => {
                self.settings_state = Some(SettingsState::new(self.config.clone()));
                self.state.focus = Focus::Settings;
            }
            Message::Escape => {
                debug!("form cleared");
                self.state.reset();
            }
            Message::FocusNext => self.state.focus_next(),
            Message::FocusPrev => self.state.focus_prev(),
            Message::Input { ch } => self.state.input_char(ch),
            Message::Backspace => self.state.backspace(),
            Message::Submit => self.submit(),
            Message::ToggleHelp => self.state.toggle_help(),
            Message::ClickAt { column, row } => self.handle_click(column, row),
            // Settings messages are handled above when settings is open
            _ => {}
        }
    }

    /// Handles a message while the settings panel is open.
    fn update_settings(&mut self, msg: Message) {
        let Some(settings) = self.settings_state.as_mut() else {
            return;
        };

        match msg {
            Message::CloseSettings | Message::Escape if !settings.is_editing() => {
                self.close_settings();
            }
            Message::SettingsNavigate { delta } if !settings.is_editing() => {
                settings.navigate(delta);
            }
            Message::SettingsEdit if !settings.is_editing() => {
                settings.activate_selected();
            }
            Message::SettingsConfirm => {
                settings.confirm_edit();
            }
            Message::SettingsCancel | Message::Escape => {
                settings.cancel_edit();
            }
            Message::SettingsSave if !settings.is_editing() => {
                save_settings(settings);
            }
            Message::SettingsInput { ch } => {
                settings.input_char(ch);
            }
            Message::SettingsBackspace => {
                settings.backspace();
            }
            _ => {}
        }
    }

    /// Closes the settings panel and applies its configuration.
    ///
    /// The form is only re-filled when it has not been touched, so typed
    /// values are never overwritten.
    fn close_settings(&mut self) {
        let Some(settings) = self.settings_state.take() else {
            return;
        };
        let config = settings.into_config();

        if self.state.height.is_empty() && self.state.weight.is_empty() {
            let outcome = std::mem::take(&mut self.state.outcome);
            self.state = AppState::with_prefill(config.form.height_cm, config.form.weight_kg);
            self.state.outcome = outcome;
        }

        debug!(display = ?config.display, form = ?config.form, "settings applied");
        self.config = config;
        self.state.focus = Focus::Height;
    }

    /// Calculates the BMI from the form and logs the outcome.
    fn submit(&mut self) {
        match self.state.submit() {
            Ok(result) => {
                info!(
                    value = result.value(),
                    category = %result.category(),
                    "BMI calculated"
                );
            }
            Err(err) => {
                debug!(error = %err, "submission rejected");
            }
        }
    }

    /// Returns the area below the header and above the status bar, as of
    /// the last render.
    fn content_area(&self) -> Rect {
        let header_offset = if self.header_visible {
            HEADER_HEIGHT
        } else {
            0
        };
        Rect {
            x: self.last_area.x,
            y: self.last_area.y + header_offset,
            width: self.last_area.width,
            height: self
                .last_area
                .height
                .saturating_sub(header_offset + STATUS_BAR_HEIGHT),
        }
    }

    /// Handles a mouse click at the given coordinates.
    ///
    /// Clicking an input focuses it; clicking the button focuses it and
    /// calculates.
    fn handle_click(&mut self, column: u16, row: u16) {
        let layout = form_layout(self.content_area());
        let position = (column, row).into();

        if layout.height_field.contains(position) {
            self.state.focus = Focus::Height;
        } else if layout.weight_field.contains(position) {
            self.state.focus = Focus::Weight;
        } else if layout.button.contains(position) {
            self.state.focus = Focus::Submit;
            self.submit();
        }
    }

    /// Renders the application UI to the given frame.
    ///
    /// Implements graceful degradation for small terminal sizes:
    /// - If terminal is below minimum dimensions, shows a "terminal too small" message.
    /// - If terminal is tight (below `MIN_HEIGHT_WITH_HEADER`), hides the header to reclaim space.
    /// - Otherwise, renders normally with header.
    ///
    /// # Arguments
    ///
    /// * `frame` - The frame to render into.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.last_area = area;

        if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
            self.header_visible = false;
            self.render_terminal_too_small(frame, area);
            return;
        }

        let show_header = area.height >= MIN_HEIGHT_WITH_HEADER;
        self.header_visible = show_header;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(if show_header { HEADER_HEIGHT } else { 0 }),
                Constraint::Min(0),
                Constraint::Length(STATUS_BAR_HEIGHT),
            ])
            .split(area);

        if show_header {
            self.render_header(frame, chunks[0]);
        }

        let layout = form_layout(chunks[1]);
        let display = self.config.display;
        let buf = frame.buffer_mut();
        render_form(&self.state, &layout, buf);
        render_message(self.state.error(), layout.message, buf);
        if let Some(result) = self.state.result() {
            render_result_card(result, &display, layout.result, buf);
        }
        render_status_bar(chunks[2], buf);

        if self.state.help_visible {
            render_help_overlay(area, buf);
        }

        if let Some(ref settings) = self.settings_state {
            render_settings_panel(settings, area, buf);
        }
    }

    /// Renders a message indicating the terminal is too small.
    fn render_terminal_too_small(&self, frame: &mut Frame, area: Rect) {
        let message = format!(
            "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );

        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .wrap(ratatui::widgets::Wrap { trim: false });

        // Center the message vertically
        let vertical_offset = area.height.saturating_sub(2) / 2;
        let centered_area = Rect {
            x: area.x,
            y: area.y + vertical_offset,
            width: area.width,
            height: area.height.saturating_sub(vertical_offset),
        };

        frame.render_widget(paragraph, centered_area);
    }

    /// Runs the main application loop.
    ///
    /// This function blocks until the user quits the application.
    /// It polls for events, updates state, and renders the UI.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use bmi_tui::{App, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let mut app = App::new();
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        use crossterm::event::Event;

        loop {
            terminal.draw(|frame| self.view(frame))?;

            if let Some(event) = poll_event()? {
                // Key events are mapped differently while settings is open
                let msg = match (&self.settings_state, &event) {
                    (Some(settings), Event::Key(key)) => {
                        key_to_settings_message(*key, settings.is_editing())
                    }
                    _ => event_to_message(&event),
                };

                if let Some(msg) = msg {
                    self.update(msg);
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Renders the header bar with title and help cue.
    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [title_area, help_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(17), // "Press ? for help" = 16 chars + padding
        ])
        .areas(inner);

        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                "bmi",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - "),
            Span::styled("BMI Calculator", Style::default().fg(Color::White)),
        ]));
        frame.render_widget(title, title_area);

        let help_cue = Paragraph::new(Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" for help", Style::default().fg(Color::DarkGray)),
        ]))
        .alignment(Alignment::Right);
        frame.render_widget(help_cue, help_area);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Saves the settings to the user config file, reporting failures in the
/// panel.
fn save_settings(settings: &mut SettingsState) {
    let saved = bmi_config::persistence::default_user_config_path()
        .and_then(|path| settings.config().save_to(&path).map(|()| path));

    match saved {
        Ok(path) => {
            info!(path = %path.display(), "settings saved");
            settings.mark_saved();
            settings.set_notice(format!("Saved to {}", path.display()));
        }
        Err(err) => {
            warn!(error = %err, "failed to save settings");
            settings.set_notice(format!("Save failed: {err}"));
        }
    }
}
