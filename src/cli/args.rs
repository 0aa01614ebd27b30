use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// XIV Translation Cleaner: delete translation data files from a game install
#[derive(Parser, Debug)]
#[command(
    name = "xtc",
    version,
    about = "Selectively delete translation data files from a game installation",
    long_about = "XIV Translation Cleaner removes the translation files listed in its settings\n\
                   from <folder>/exd/. Run without a subcommand for the interactive screen.",
    after_help = "EXAMPLES:\n  \
        xtc                                      Interactive screen\n  \
        xtc tui --folder ~/games/xiv/game        Interactive screen with another folder\n  \
        xtc clean --dry-run                      Show what would be deleted\n  \
        xtc clean --only warp,emote --yes        Delete two entries without asking\n  \
        xtc settings --format json               Show the loaded settings\n  \
        xtc --settings my.toml clean             Use a settings file from disk"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Settings file to use instead of the bundled one (.json or .toml)
    #[arg(long, global = true, value_name = "PATH", env = "XTC_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive screen (default)
    Tui {
        /// Folder to pre-fill instead of the one from settings
        #[arg(long, value_name = "PATH")]
        folder: Option<String>,
    },

    /// Delete the configured entries without the interactive screen
    Clean {
        /// Game folder containing exd/ (defaults to the settings' folder)
        #[arg(long, value_name = "PATH")]
        folder: Option<PathBuf>,

        /// Only delete these entries
        #[arg(long, value_delimiter = ',', value_name = "ENTRY")]
        only: Option<Vec<String>>,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,

        /// Show what would be deleted without deleting
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the loaded settings
    Settings,

    /// Generate shell completions
    Completions {
        /// Shell type
        shell: CompletionShell,
    },
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON output for scripting
    Json,
    /// Minimal output
    Quiet,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}
