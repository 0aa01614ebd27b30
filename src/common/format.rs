use colored::*;

/// Format bytes into human-readable size string
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Entry count with the right plural
pub fn format_entries(count: usize) -> String {
    if count == 1 {
        "1 entry".to_string()
    } else {
        format!("{} entries", count)
    }
}

/// Format a path for display, replacing home directory with ~
pub fn format_path(path: &std::path::Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}

/// Truncate to at most `max_chars` characters, keeping the tail.
/// Paths are more recognizable by their end than their start.
pub fn truncate_left(s: &str, max_chars: usize) -> String {
    let count = s.chars().count();
    if count <= max_chars {
        return s.to_string();
    }
    if max_chars <= 3 {
        return ".".repeat(max_chars);
    }
    let tail: String = s.chars().skip(count - (max_chars - 3)).collect();
    format!("...{}", tail)
}

/// Colorize a log line for the terminal by its leading status symbol
pub fn colorize_log_line(line: &str) -> ColoredString {
    if line.starts_with('✅') {
        line.green()
    } else if line.starts_with('❌') {
        line.red()
    } else if line.starts_with('⚠') {
        line.yellow()
    } else if line.starts_with("----") {
        line.bold()
    } else {
        line.normal()
    }
}

/// Print a section header
pub fn print_header(title: &str) {
    println!();
    println!("{}", title.bold().underline());
    println!();
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {}: {}", key.dimmed(), value);
}
