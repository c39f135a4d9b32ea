//! CLI entry point for sprout

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use sprout::{DEFAULT_OUTPUT_NAME, IgnoreRules, StatusPrinter, WalkerConfig, write_structure};

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
            // Respect NO_COLOR environment variable (https://no-color.org/)
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
#[command(name = "sprout")]
#[command(about = "Write a filtered tree of a project directory to a text file")]
#[command(version)]
struct Args {
    /// Directory to walk (default: the directory containing this executable)
    path: Option<PathBuf>,

    /// Output file; relative names are placed inside the walked directory
    #[arg(short, long, default_value = DEFAULT_OUTPUT_NAME)]
    output: PathBuf,

    /// Ignore entries matching NAME or *.EXT (can be used multiple times)
    #[arg(short = 'I', long = "ignore", value_name = "PATTERN")]
    ignore: Vec<String>,

    /// Show hidden entries (names starting with '.')
    #[arg(short, long)]
    all: bool,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// Do not descend into symlinked directories
    #[arg(long = "no-follow")]
    no_follow: bool,

    /// Control color of console messages: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

/// The walked directory: the given path, or wherever the executable lives.
fn resolve_root(path: Option<&Path>) -> Result<PathBuf> {
    let root = match path {
        Some(p) if p.is_absolute() => p.to_path_buf(),
        Some(p) => std::env::current_dir()
            .context("cannot determine the current directory")?
            .join(p),
        None => {
            let exe = std::env::current_exe().context("cannot locate the sprout executable")?;
            exe.parent()
                .map(Path::to_path_buf)
                .with_context(|| format!("'{}' has no parent directory", exe.display()))?
        }
    };
    // Resolves `.` and `..` so the root line carries a real name
    Ok(root.canonicalize().unwrap_or(root))
}

/// Where the tree is written. The parent is resolved so the walker can
/// recognise the file by path and leave it out.
fn resolve_output(root: &Path, output: &Path) -> PathBuf {
    let path = root.join(output);
    match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) => parent
            .canonicalize()
            .map(|p| p.join(name))
            .unwrap_or(path),
        _ => path,
    }
}

fn build_config(args: &Args) -> WalkerConfig {
    let mut rules = args
        .ignore
        .iter()
        .fold(IgnoreRules::default(), |rules, p| rules.with_pattern(p));

    if args.all {
        rules = rules.with_hidden_marker(None);
    }

    WalkerConfig {
        rules,
        max_depth: args.level,
        follow_symlinks: !args.no_follow,
        ..Default::default()
    }
}

fn run<O, E>(args: &Args, status: &mut StatusPrinter<O, E>) -> Result<()>
where
    O: termcolor::WriteColor,
    E: termcolor::WriteColor,
{
    let root = resolve_root(args.path.as_deref())?;
    if !root.is_dir() {
        bail!("cannot access '{}': not a directory", root.display());
    }
    let output_path = resolve_output(&root, &args.output);
    let config = build_config(args);
    log::debug!(
        "walking '{}' into '{}'",
        root.display(),
        output_path.display()
    );

    let summary = write_structure(&root, &output_path, config, |error| {
        if let Err(e) = status.listing_error(error) {
            log::warn!("{} ({})", error, e);
        }
    })
    .with_context(|| format!("cannot write '{}'", output_path.display()))?;

    // The file is complete at this point; a closed stdout does not undo that
    if let Err(e) = status.success(&output_path, &summary) {
        log::debug!("confirmation not printed: {}", e);
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let mut status = StatusPrinter::console(should_use_color(args.color));

    if let Err(e) = run(&args, &mut status) {
        if status.error(format!("{:#}", e)).is_err() {
            eprintln!("sprout: error: {:#}", e);
        }
        process::exit(1);
    }
}
