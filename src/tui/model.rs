//! State of the cleaner screen plus the messages and commands that drive it.

use std::path::PathBuf;

use crossterm::event::KeyEvent;

use crate::cleaner::{DeletionReport, Selection};
use crate::common::settings::Settings;

/// First line of the log panel
pub const WELCOME: &str = "Welcome to XIV Translation Cleaner";

/// Lines moved per PageUp/PageDown
pub const SCROLL_STEP: usize = 5;

/// Which widget receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Folder,
    Entry(usize),
    DeleteButton,
}

/// Button highlighted in the confirmation dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmChoice {
    Delete,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialog {
    pub target: PathBuf,
    pub items: Vec<String>,
    pub choice: ConfirmChoice,
}

/// Input to [`super::update::update`]
#[derive(Debug)]
pub enum Msg {
    Key(KeyEvent),
    /// Result of the target-folder check requested by `Cmd::CheckTarget`
    TargetChecked {
        target: PathBuf,
        result: Result<(), String>,
    },
    /// Result of the run requested by `Cmd::RunDeletion`
    DeletionFinished(DeletionReport),
}

/// Side effect for the runtime to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    None,
    Quit,
    CheckTarget(PathBuf),
    RunDeletion { target: PathBuf, items: Vec<String> },
}

/// Text field with a char-indexed cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    cursor: usize,
}

impl TextInput {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
    }

    pub fn delete(&mut self) {
        if self.cursor < self.value.chars().count() {
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    pub fn left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.value.chars().count());
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.value.chars().count();
    }
}

#[derive(Debug, Clone)]
pub struct AppModel {
    pub folder: TextInput,
    pub selection: Selection,
    pub focus: Focus,
    pub confirm: Option<ConfirmDialog>,
    pub log: Vec<String>,
    /// Lines scrolled up from the bottom; 0 follows new output
    pub log_scroll: usize,
    pub should_quit: bool,
}

impl AppModel {
    /// Build the initial screen from loaded settings and their load log
    pub fn new(settings: &Settings, load_log: &[String]) -> Self {
        let mut log = vec![WELCOME.to_string(), String::new()];
        log.extend(load_log.iter().cloned());

        Self {
            folder: TextInput::new(settings.target_folder.clone()),
            selection: Selection::new(settings.files_to_delete.clone()),
            focus: Focus::Folder,
            confirm: None,
            log,
            log_scroll: 0,
            should_quit: false,
        }
    }

    /// Append lines and jump back to the bottom of the log
    pub fn push_log<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.log.extend(lines.into_iter().map(Into::into));
        self.log_scroll = 0;
    }

    /// Focus order: folder, each entry, delete button
    pub fn focus_order(&self) -> Vec<Focus> {
        let mut order = vec![Focus::Folder];
        order.extend((0..self.selection.len()).map(Focus::Entry));
        order.push(Focus::DeleteButton);
        order
    }

    pub fn focus_next(&mut self) {
        let order = self.focus_order();
        let pos = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(pos + 1) % order.len()];
    }

    pub fn focus_prev(&mut self) {
        let order = self.focus_order();
        let pos = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(pos + order.len() - 1) % order.len()];
    }
}
