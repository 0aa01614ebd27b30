//! Pure update function for the cleaner screen.
//!
//! `update()` takes the current model and a message, mutates the model, and
//! returns a [`Cmd`] describing any side effect the runtime should execute.
//! This module performs no I/O.

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::model::{AppModel, Cmd, ConfirmChoice, ConfirmDialog, Focus, Msg, SCROLL_STEP};

/// Apply a message to the model and return the next command for the runtime.
pub fn update(model: &mut AppModel, msg: Msg) -> Cmd {
    match msg {
        Msg::Key(key) => handle_key(model, key),

        Msg::TargetChecked { target, result } => match result {
            Err(message) => {
                model.push_log([message]);
                Cmd::None
            }
            Ok(()) => {
                model.confirm = Some(ConfirmDialog {
                    target,
                    items: model.selection.selected(),
                    choice: ConfirmChoice::Cancel,
                });
                Cmd::None
            }
        },

        Msg::DeletionFinished(report) => {
            model.push_log(report.log_lines());
            Cmd::None
        }
    }
}

fn handle_key(model: &mut AppModel, key: KeyEvent) -> Cmd {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return Cmd::None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        model.should_quit = true;
        return Cmd::Quit;
    }

    if model.confirm.is_some() {
        return handle_confirm_key(model, key);
    }

    match key.code {
        KeyCode::Esc if model.focus != Focus::Folder => {
            model.should_quit = true;
            return Cmd::Quit;
        }
        KeyCode::Tab => {
            model.focus_next();
            return Cmd::None;
        }
        KeyCode::BackTab => {
            model.focus_prev();
            return Cmd::None;
        }
        KeyCode::PageUp => {
            model.log_scroll = (model.log_scroll + SCROLL_STEP).min(model.log.len());
            return Cmd::None;
        }
        KeyCode::PageDown => {
            model.log_scroll = model.log_scroll.saturating_sub(SCROLL_STEP);
            return Cmd::None;
        }
        _ => {}
    }

    match model.focus {
        Focus::Folder => handle_folder_key(model, key),
        Focus::Entry(index) => handle_entry_key(model, index, key),
        Focus::DeleteButton => handle_button_key(model, key),
    }
}

fn handle_folder_key(model: &mut AppModel, key: KeyEvent) -> Cmd {
    match key.code {
        KeyCode::Char(c) => model.folder.insert(c),
        KeyCode::Backspace => model.folder.backspace(),
        KeyCode::Delete => model.folder.delete(),
        KeyCode::Left => model.folder.left(),
        KeyCode::Right => model.folder.right(),
        KeyCode::Home => model.folder.home(),
        KeyCode::End => model.folder.end(),
        // Esc leaves the field instead of quitting mid-edit
        KeyCode::Enter | KeyCode::Down | KeyCode::Esc => model.focus_next(),
        _ => {}
    }
    Cmd::None
}

fn handle_entry_key(model: &mut AppModel, index: usize, key: KeyEvent) -> Cmd {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => model.selection.toggle(index),
        KeyCode::Char('a') => model.selection.toggle_all(),
        KeyCode::Char('q') => {
            model.should_quit = true;
            return Cmd::Quit;
        }
        KeyCode::Up => model.focus_prev(),
        KeyCode::Down => model.focus_next(),
        _ => {}
    }
    Cmd::None
}

fn handle_button_key(model: &mut AppModel, key: KeyEvent) -> Cmd {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => request_delete(model),
        KeyCode::Char('a') => {
            model.selection.toggle_all();
            Cmd::None
        }
        KeyCode::Char('q') => {
            model.should_quit = true;
            Cmd::Quit
        }
        KeyCode::Up => {
            model.focus_prev();
            Cmd::None
        }
        _ => Cmd::None,
    }
}

/// The folder is checked before the dialog opens, so a typo is reported
/// without asking for confirmation first.
fn request_delete(model: &mut AppModel) -> Cmd {
    if model.selection.checked_count() == 0 {
        model.push_log(["⚠ No translation selected, nothing to delete"]);
        return Cmd::None;
    }
    Cmd::CheckTarget(PathBuf::from(model.folder.value()))
}

fn handle_confirm_key(model: &mut AppModel, key: KeyEvent) -> Cmd {
    let Some(dialog) = model.confirm.as_mut() else {
        return Cmd::None;
    };
    let choice = dialog.choice;

    match key.code {
        KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
            dialog.choice = match dialog.choice {
                ConfirmChoice::Delete => ConfirmChoice::Cancel,
                ConfirmChoice::Cancel => ConfirmChoice::Delete,
            };
            Cmd::None
        }
        KeyCode::Char('y') | KeyCode::Char('Y') => accept(model),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            model.confirm = None;
            Cmd::None
        }
        KeyCode::Enter => match choice {
            ConfirmChoice::Delete => accept(model),
            ConfirmChoice::Cancel => {
                model.confirm = None;
                Cmd::None
            }
        },
        _ => Cmd::None,
    }
}

fn accept(model: &mut AppModel) -> Cmd {
    match model.confirm.take() {
        Some(dialog) => Cmd::RunDeletion {
            target: dialog.target,
            items: dialog.items,
        },
        None => Cmd::None,
    }
}
