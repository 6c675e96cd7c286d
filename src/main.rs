//! CLI entry point for jls

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use jls::tree::CURRENT_DIR;
use jls::{
    FilterKind, ListingConfig, ListingFormatter, OutputConfig, Result, list_entries, load_tree,
    navigate,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // https://no-color.org/
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "jls")]
#[command(about = "List the contents of a directory tree described by a JSON document")]
#[command(version)]
struct Args {
    /// Node to list, or the JSON file when it is the only operand
    #[arg(value_name = "PATH")]
    first: String,

    /// JSON file containing the directory tree
    #[arg(value_name = "JSON_FILE")]
    second: Option<String>,

    /// Do not ignore entries starting with .
    #[arg(short = 'A')]
    almost_all: bool,

    /// Use a long listing format
    #[arg(short = 'l')]
    long: bool,

    /// Reverse order while sorting
    #[arg(short = 'r')]
    reverse: bool,

    /// Sort by modification time, oldest first
    #[arg(short = 't')]
    sort_by_time: bool,

    /// Show only entries of one kind: file or dir
    #[arg(long = "filter", value_name = "KIND")]
    filter: Option<String>,

    /// With -l, print sizes in human-readable format (e.g., 1.0K 234.0M 2.0G)
    #[arg(short = 'H', long = "human-readable")]
    human_readable: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

impl Args {
    /// Split the operands into the navigation path and the document path.
    fn operands(&self) -> (&str, PathBuf) {
        match &self.second {
            Some(json_file) => (self.first.as_str(), PathBuf::from(json_file)),
            None => (CURRENT_DIR, PathBuf::from(&self.first)),
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let filter = match &args.filter {
        Some(value) => value.parse::<FilterKind>()?,
        None => FilterKind::None,
    };

    let (path, json_file) = args.operands();
    let root = load_tree(&json_file)?;
    let node = navigate(&root, path)?;

    let listing_config = ListingConfig {
        show_hidden: args.almost_all,
        filter,
        sort_by_time: args.sort_by_time,
        reverse: args.reverse,
    };
    let entries = list_entries(node, &listing_config);

    let output_config = OutputConfig {
        long_format: args.long,
        human_readable: args.human_readable,
        use_color: should_use_color(args.color),
    };
    ListingFormatter::new(output_config).print(&entries)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::try_parse().unwrap_or_else(|e| {
        if !e.use_stderr() {
            // --help and --version
            e.exit();
        }
        eprintln!("jls: argument parsing error: {}", e);
        process::exit(1);
    });

    if let Err(e) = run(&args) {
        eprintln!("jls: {}", e);
        process::exit(1);
    }
}
