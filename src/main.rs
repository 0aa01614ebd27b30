use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::path::PathBuf;
use std::process;

use xiv_translation_cleaner::cleaner::{self, runner, Selection};
use xiv_translation_cleaner::cli::args::{Cli, Commands, CompletionShell, OutputFormat};
use xiv_translation_cleaner::cli::output;
use xiv_translation_cleaner::common::config::{self, LogTarget};
use xiv_translation_cleaner::common::format;
use xiv_translation_cleaner::common::safety;
use xiv_translation_cleaner::common::settings::{self, LoadedSettings, SettingsSource};
use xiv_translation_cleaner::tui;

/// Exit code when a headless run recorded at least one failed entry
const EXIT_PARTIAL: i32 = 2;

fn main() {
    let code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            1
        }
    };
    process::exit(code);
}

fn run() -> Result<i32> {
    let mut cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let command = cli.command.take().unwrap_or(Commands::Tui { folder: None });

    let log_target = match &command {
        Commands::Tui { .. } => LogTarget::File,
        _ => LogTarget::Stderr,
    };
    // Held until exit so buffered log lines reach the file.
    let _log_guard = match config::init_logging(cli.verbose, log_target) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("{} {:#}", "warning:".yellow().bold(), e);
            None
        }
    };

    let loaded = settings::load_or_default(&SettingsSource::from_override(cli.settings.clone()));

    match command {
        Commands::Tui { folder } => {
            tui::run_tui(&loaded, folder)?;
            Ok(0)
        }

        Commands::Clean {
            folder,
            only,
            yes,
            dry_run,
        } => cmd_clean(&cli, &loaded, folder, only, yes, dry_run),

        Commands::Settings => cmd_settings(&cli, &loaded),

        Commands::Completions { shell } => {
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            let shell = match shell {
                CompletionShell::Bash => clap_complete::Shell::Bash,
                CompletionShell::Zsh => clap_complete::Shell::Zsh,
                CompletionShell::Fish => clap_complete::Shell::Fish,
            };
            clap_complete::generate(shell, &mut cmd, "xtc", &mut std::io::stdout());
            Ok(0)
        }
    }
}

// ─── Settings ─────────────────────────────────────────────────────────────────

fn cmd_settings(cli: &Cli, loaded: &LoadedSettings) -> Result<i32> {
    match cli.format {
        OutputFormat::Human => {
            output::print_load_log(loaded);
            output::print_settings(&loaded.settings);
        }
        OutputFormat::Json => output::print_settings_json(&loaded.settings),
        OutputFormat::Quiet => {
            for entry in &loaded.settings.files_to_delete {
                println!("{}", entry);
            }
        }
    }
    Ok(if loaded.ok { 0 } else { 1 })
}

// ─── Clean ────────────────────────────────────────────────────────────────────

fn cmd_clean(
    cli: &Cli,
    loaded: &LoadedSettings,
    folder: Option<PathBuf>,
    only: Option<Vec<String>>,
    yes: bool,
    dry_run: bool,
) -> Result<i32> {
    let human = matches!(cli.format, OutputFormat::Human);
    if human {
        output::print_load_log(loaded);
    }

    let target = folder.unwrap_or_else(|| PathBuf::from(&loaded.settings.target_folder));
    let entries = loaded.settings.files_to_delete.clone();
    let selection = match only {
        Some(names) => Selection::only(entries, &names).map_err(|unknown| {
            anyhow::anyhow!(
                "Unknown entries: {}. Run 'xtc settings' to list the configured ones.",
                unknown.join(", ")
            )
        })?,
        None => Selection::new(entries),
    };

    let items = selection.selected();
    if items.is_empty() {
        if human {
            println!("  {} Nothing to delete", "✨");
        }
        return Ok(0);
    }

    if dry_run {
        let plan = cleaner::plan(&target, &items);
        match cli.format {
            OutputFormat::Json => output::print_plan_json(&plan),
            _ => output::print_plan(&plan),
        }
        // Same exit code the real run would produce
        return Ok(if plan.all_deletable() { 0 } else { EXIT_PARTIAL });
    }

    // A missing folder is reported by the run itself, without a prompt.
    if !yes && runner::check_target(&target).is_ok() && !confirm(&target, items.len())? {
        if human {
            println!("  {} Cancelled", "✗".red());
        } else {
            eprintln!("Cancelled");
        }
        return Ok(0);
    }

    let pb = if human && items.len() > 1 {
        let style = ProgressStyle::default_bar()
            .template("{spinner:.red} [{bar:40.red/blue}] {pos}/{len} Deleting... {msg}")
            .map(|s| s.progress_chars("━━░"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        let pb = ProgressBar::new(items.len() as u64);
        pb.set_style(style);
        Some(pb)
    } else {
        None
    };

    let report = cleaner::run_with_progress(&target, &items, |entry| {
        if let Some(ref pb) = pb {
            pb.set_message(format::truncate_left(&entry.item_name, 30));
            pb.inc(1);
        }
    });

    if let Some(ref pb) = pb {
        pb.finish_and_clear();
    }

    match cli.format {
        OutputFormat::Human => output::print_report(&report),
        OutputFormat::Json => output::print_report_json(&report),
        OutputFormat::Quiet => output::print_report_quiet(&report),
    }

    Ok(if report.failures() > 0 { EXIT_PARTIAL } else { 0 })
}

/// The prompt goes to stderr so stdout stays parseable in json/quiet modes
fn confirm(target: &std::path::Path, count: usize) -> Result<bool> {
    eprint!(
        "\n  {} Do you want to delete {} under {}? [y/N] ",
        "❓",
        format::format_entries(count),
        format::format_path(&safety::data_root(target))
    );
    std::io::stderr().flush()?;

    let mut input = String::new();
    std::io::stdin()
        .read_line(&mut input)
        .context("Failed to read confirmation")?;
    Ok(input.trim().eq_ignore_ascii_case("y"))
}
