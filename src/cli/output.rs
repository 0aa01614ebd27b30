use colored::*;

use crate::cleaner::{DeletionPlan, DeletionReport, PlannedKind};
use crate::common::format::{self, colorize_log_line, format_path, format_size};
use crate::common::safety;
use crate::common::settings::{LoadedSettings, Settings};

/// Print the lines produced while loading settings
pub fn print_load_log(loaded: &LoadedSettings) {
    for line in &loaded.log {
        println!("  {}", colorize_log_line(line));
    }
}

/// Print settings in human-readable format
pub fn print_settings(settings: &Settings) {
    format::print_header("Settings");
    format::print_kv("Target folder", &settings.target_folder);
    format::print_kv(
        "Entries",
        &format::format_entries(settings.files_to_delete.len()),
    );
    println!();
    for entry in &settings.files_to_delete {
        println!("    {} {}", "•".dimmed(), entry);
    }
    println!();
}

pub fn print_settings_json(settings: &Settings) {
    match serde_json::to_string_pretty(settings) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize settings: {}", e),
    }
}

/// Print what a run would delete
pub fn print_plan(plan: &DeletionPlan) {
    println!();
    println!("{}  Dry run", "🔍");
    println!("{}", "─".repeat(60).dimmed());

    if !plan.target_exists {
        println!(
            "  {} Target folder does not exist: {}",
            "✗".red(),
            format_path(&plan.target_folder)
        );
        return;
    }

    println!(
        "  Under {}",
        format_path(&safety::data_root(&plan.target_folder)).cyan()
    );
    println!();

    for item in &plan.items {
        let (marker, detail) = match item.kind {
            PlannedKind::File => ("●".green(), format_size(item.size_bytes)),
            PlannedKind::Directory => ("●".green(), format!("dir, {}", format_size(item.size_bytes))),
            PlannedKind::Missing => ("○".dimmed(), "not found".to_string()),
            PlannedKind::Rejected => ("✗".red(), "outside exd, skipped".to_string()),
        };
        println!("  {} {:<40} {}", marker, item.name, detail.dimmed());
    }

    println!("{}", "─".repeat(60).dimmed());
    println!(
        "  Would delete {} ({}). No files modified.",
        format::format_entries(plan.deletable().count()),
        format_size(plan.total_bytes())
    );
    println!();
}

pub fn print_plan_json(plan: &DeletionPlan) {
    match serde_json::to_string_pretty(plan) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize plan: {}", e),
    }
}

/// Print a deletion report in human-readable format
pub fn print_report(report: &DeletionReport) {
    println!();
    for line in report.log_lines() {
        println!("  {}", colorize_log_line(&line));
    }

    if report.completed {
        println!(
            "  {} deleted, {} failed, {} freed",
            report.successes().to_string().green(),
            if report.failures() > 0 {
                report.failures().to_string().red()
            } else {
                report.failures().to_string().normal()
            },
            format_size(report.bytes_freed()).cyan()
        );
        println!();
    }
}

pub fn print_report_json(report: &DeletionReport) {
    let json = serde_json::json!({
        "target_folder": report.target_folder,
        "completed": report.completed,
        "deleted": report.successes(),
        "failed": report.failures(),
        "bytes_freed": report.bytes_freed(),
        "entries": report.entries,
    });
    println!("{}", serde_json::to_string_pretty(&json).unwrap_or_default());
}

/// One line per entry: status and name, tab separated
pub fn print_report_quiet(report: &DeletionReport) {
    for entry in &report.entries {
        let status = match entry.outcome {
            crate::cleaner::Outcome::Success { .. } => "deleted",
            crate::cleaner::Outcome::NotFound { .. } => "not_found",
            crate::cleaner::Outcome::Rejected { .. } => "rejected",
            crate::cleaner::Outcome::OtherError { .. } => "error",
            crate::cleaner::Outcome::TargetMissing { .. } => "target_missing",
        };
        println!("{}\t{}", status, entry.item_name);
    }
}
