mod app;
mod commands;
mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "kotoba-cli", about = "Kotoba vocabulary trainer CLI", version)]
struct Cli {
    /// Use a specific data directory (default: platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum KindArg {
    Vocabulary,
    Kanji,
    Grammar,
}

impl From<KindArg> for kotoba_lib::vocab::WordKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Vocabulary => Self::Vocabulary,
            KindArg::Kanji => Self::Kanji,
            KindArg::Grammar => Self::Grammar,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Add a word to the collection
    Add {
        /// Written form (kanji or kana)
        term: String,
        /// Kana reading
        reading: String,
        /// Meaning
        meaning: String,
        /// Item kind
        #[arg(long, value_enum, default_value = "vocabulary")]
        kind: KindArg,
        /// Comma-separated tags
        #[arg(long)]
        tags: Option<String>,
    },

    /// List words in the collection
    List {
        /// Filter by item kind
        #[arg(long, value_enum)]
        kind: Option<KindArg>,
        /// Filter by tag
        #[arg(long)]
        tag: Option<String>,
        /// Only words that are due now
        #[arg(long)]
        due: bool,
    },

    /// Show one word with furigana and schedule details
    Show {
        /// Term (case-insensitive prefix match, reading also searched)
        term: String,
    },

    /// Run an interactive study session
    Study {
        /// Maximum scheduled reviews (default from config)
        #[arg(long)]
        limit: Option<usize>,
        /// Maximum new words (default from config)
        #[arg(long)]
        new_limit: Option<usize>,
        /// Keep store order instead of shuffling
        #[arg(long)]
        no_shuffle: bool,
    },

    /// Show collection statistics
    Stats,

    /// List achievements and their unlock state
    Achievements,

    /// Remove a word from the collection
    Remove {
        /// Term (case-insensitive prefix match)
        term: String,
    },

    /// Backup and restore the data directory
    #[command(subcommand)]
    Backup(BackupCommand),
}

#[derive(Subcommand)]
enum BackupCommand {
    /// Export the data directory to a zip archive
    Export {
        /// Output path (default: kotoba_<timestamp>.zip)
        output: Option<PathBuf>,
    },

    /// Restore a zip archive into the data directory
    Import {
        /// Archive created by `backup export`
        archive: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && atty_check();
    let app = app::App::new(cli.data_dir.as_deref())?;

    match cli.command {
        Command::Add {
            term,
            reading,
            meaning,
            kind,
            tags,
        } => commands::add::run(
            &app,
            term,
            reading,
            meaning,
            kind.into(),
            tags.as_deref(),
            &cli.format,
            use_color,
        ),
        Command::List { kind, tag, due } => commands::list::run(
            &app,
            kind.map(Into::into),
            tag.as_deref(),
            due,
            &cli.format,
            use_color,
        ),
        Command::Show { term } => commands::show::run(&app, &term, &cli.format, use_color),
        Command::Study {
            limit,
            new_limit,
            no_shuffle,
        } => commands::study::run(&app, limit, new_limit, no_shuffle, use_color),
        Command::Stats => commands::stats::run(&app, &cli.format, use_color),
        Command::Achievements => commands::achievements::run(&app, &cli.format, use_color),
        Command::Remove { term } => commands::remove::run(&app, &term, use_color),
        Command::Backup(subcmd) => match subcmd {
            BackupCommand::Export { output } => {
                commands::backup::run_export(&app, output.as_deref())
            }
            BackupCommand::Import { archive } => commands::backup::run_import(&app, &archive),
        },
    }
}

/// Check if stdout is a terminal (for color support)
fn atty_check() -> bool {
    unsafe { libc_isatty(1) != 0 }
}

extern "C" {
    #[link_name = "isatty"]
    fn libc_isatty(fd: i32) -> i32;
}
