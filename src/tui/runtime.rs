//! Event loop: draws the model, feeds key events to `update`, and executes
//! the commands it returns.

use anyhow::{Context, Result};
use crossterm::event::{self, Event};

use super::model::{AppModel, Cmd, Msg};
use super::render;
use super::terminal_guard::TerminalGuard;
use super::update::update;
use crate::cleaner;
use crate::common::settings::LoadedSettings;

/// Run the interactive screen until the user quits.
///
/// `folder_override` replaces the settings' suggested folder in the path field.
pub fn run_tui(loaded: &LoadedSettings, folder_override: Option<String>) -> Result<()> {
    let mut model = AppModel::new(&loaded.settings, &loaded.log);
    if let Some(folder) = folder_override {
        model.folder = super::model::TextInput::new(folder);
    }

    let mut guard = TerminalGuard::new().context("Failed to set up the terminal")?;
    tracing::debug!("terminal ui started");

    while !model.should_quit {
        guard
            .terminal
            .draw(|frame| render::render(&model, frame))
            .context("Failed to draw the screen")?;

        if let Event::Key(key) = event::read().context("Failed to read terminal input")? {
            let cmd = update(&mut model, Msg::Key(key));
            execute(&mut model, cmd);
        }
    }

    tracing::debug!("terminal ui closed");
    Ok(())
}

/// Perform a command and feed its result back through `update`, until no
/// further work is requested
pub fn execute(model: &mut AppModel, mut cmd: Cmd) {
    loop {
        cmd = match cmd {
            Cmd::None => return,
            Cmd::Quit => {
                model.should_quit = true;
                return;
            }
            Cmd::CheckTarget(target) => {
                let result = cleaner::runner::check_target(&target).map_err(|e| e.to_string());
                update(model, Msg::TargetChecked { target, result })
            }
            Cmd::RunDeletion { target, items } => {
                // Runs on the UI thread; the screen waits until every entry is done.
                let report = cleaner::run(&target, &items);
                update(model, Msg::DeletionFinished(report))
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::settings::Settings;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn model_for(dir: &std::path::Path, entries: &[&str]) -> AppModel {
        let settings = Settings {
            target_folder: dir.display().to_string(),
            files_to_delete: entries.iter().map(|s| s.to_string()).collect(),
        };
        AppModel::new(&settings, &[])
    }

    #[test]
    fn test_check_target_opens_dialog_for_existing_folder() {
        let dir = TempDir::new().unwrap();
        let mut model = model_for(dir.path(), &["a.bin"]);
        execute(&mut model, Cmd::CheckTarget(dir.path().to_path_buf()));
        assert!(model.confirm.is_some());
    }

    #[test]
    fn test_check_target_logs_missing_folder() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");
        let mut model = model_for(&missing, &["a.bin"]);
        execute(&mut model, Cmd::CheckTarget(missing.clone()));
        assert!(model.confirm.is_none());
        assert_eq!(
            model.log.last().unwrap(),
            &format!("Target folder does not exist: {}", missing.display())
        );
    }

    #[test]
    fn test_run_deletion_removes_files_and_logs() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("exd")).unwrap();
        std::fs::write(dir.path().join("exd/a.bin"), b"data").unwrap();

        let mut model = model_for(dir.path(), &["a.bin"]);
        execute(
            &mut model,
            Cmd::RunDeletion {
                target: PathBuf::from(dir.path()),
                items: vec!["a.bin".into()],
            },
        );

        assert!(!dir.path().join("exd/a.bin").exists());
        assert!(model.log.iter().any(|l| l.starts_with("✅ Deleted: a.bin")));
        assert!(model.log.contains(&cleaner::COMPLETION_MARKER.to_string()));
    }

    #[test]
    fn test_quit_sets_flag() {
        let dir = TempDir::new().unwrap();
        let mut model = model_for(dir.path(), &[]);
        execute(&mut model, Cmd::Quit);
        assert!(model.should_quit);
    }
}
