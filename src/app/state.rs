use std::collections::VecDeque;

use crossterm::event::KeyCode;

use crate::clipboard::{COPY_NOTICE, ClipboardWriter, CopyOutcome};
use crate::color::{ColorMode, ColorSource, ColorState};

use super::{AppEvent, CONTROLS, Control};

/// The top-level application state.
pub struct App {
    pub running: bool,
    pub color: ColorState,
    pub selected_control_index: usize,
    pub show_help: bool,
    /// Alert-style notices, oldest first. Only the front one is drawn, and
    /// each swallows one key press.
    pub notices: VecDeque<String>,
    source: Box<dyn ColorSource>,
    clipboard: ClipboardWriter,
}

impl App {
    pub fn new(mode: ColorMode, mut source: Box<dyn ColorSource>, clipboard: ClipboardWriter) -> Self {
        let color = ColorState::new(mode, source.as_mut());
        tracing::debug!(color = %color.display(), "initial color");
        Self {
            running: true,
            color,
            selected_control_index: 0,
            show_help: false,
            notices: VecDeque::new(),
            source,
            clipboard,
        }
    }

    /// Central update function - process an event and mutate state.
    pub fn update(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => {}
            AppEvent::KeyPress(key) => self.handle_key(key),
        }

        for outcome in self.clipboard.poll() {
            self.settle_copy(outcome);
        }
    }

    pub fn display(&self) -> String {
        self.color.display()
    }

    /// The notice currently on screen.
    pub fn notification(&self) -> Option<&str> {
        self.notices.front().map(String::as_str)
    }

    pub fn selected_control(&self) -> Control {
        CONTROLS[self.selected_control_index]
    }

    fn handle_key(&mut self, key: KeyCode) {
        if self.notices.pop_front().is_some() {
            return;
        }
        if self.show_help {
            if matches!(key, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
                self.show_help = false;
            }
            return;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Left | KeyCode::BackTab => self.select_prev_control(),
            KeyCode::Right | KeyCode::Tab => self.select_next_control(),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(self.selected_control()),
            KeyCode::Char(c) => {
                if let Some(control) = Control::from_hotkey(c) {
                    self.activate(control);
                }
            }
            _ => {}
        }
    }

    /// Run the action behind a control.
    pub fn activate(&mut self, control: Control) {
        match control {
            Control::Hex => self.switch_mode(ColorMode::Hex),
            Control::Rgb => self.switch_mode(ColorMode::Rgb),
            Control::Generate => self.generate(),
            Control::Copy => self.copy(),
        }
    }

    fn switch_mode(&mut self, mode: ColorMode) {
        if self.color.switch_mode(mode, self.source.as_mut()) {
            tracing::debug!(%mode, color = %self.display(), "switched mode");
        }
    }

    fn generate(&mut self) {
        self.color.regenerate(self.source.as_mut());
        tracing::debug!(color = %self.display(), "generated color");
    }

    fn copy(&mut self) {
        let text = self.display();
        tracing::debug!(%text, "copy requested");
        if let Some(outcome) = self.clipboard.copy(text) {
            self.settle_copy(outcome);
        }
    }

    // Success and failure notify identically.
    fn settle_copy(&mut self, outcome: CopyOutcome) {
        match outcome.result {
            Ok(()) => tracing::info!(text = %outcome.text, "copied to clipboard"),
            Err(err) => tracing::warn!(text = %outcome.text, "clipboard write failed: {err:#}"),
        }
        self.notices.push_back(COPY_NOTICE.to_string());
    }

    fn select_prev_control(&mut self) {
        if self.selected_control_index == 0 {
            self.selected_control_index = CONTROLS.len() - 1;
        } else {
            self.selected_control_index -= 1;
        }
    }

    fn select_next_control(&mut self) {
        self.selected_control_index = (self.selected_control_index + 1) % CONTROLS.len();
    }
}
