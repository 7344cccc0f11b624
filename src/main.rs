use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use smart_line_diff::parse::parse_thresholds;
use smart_line_diff::{
    Classification, FastPathThresholds, RenderMode, RenderedLine, SmartDiff, SmartDiffError,
};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "smart-line-diff")]
#[command(about = "Line-aligned text diff with char-level highlights")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    /// Show both sides, deleted text marked [-like this-]
    Full,
    /// Show the result only, deleted text hidden
    Inline,
}

impl From<Mode> for RenderMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Full => RenderMode::Full,
            Mode::Inline => RenderMode::Inline,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two files
    Compare {
        /// Baseline file
        original: PathBuf,
        /// Edited file
        modified: PathBuf,
        #[arg(long, value_enum, default_value_t = Mode::Full)]
        mode: Mode,
        /// Print one row per line of the modified file
        #[arg(long)]
        editor: bool,
        /// Fast path thresholds (e.g. "lines=80,chars=10000,avg=200")
        #[arg(long, value_parser = parse_thresholds)]
        fast_path: Option<FastPathThresholds>,
    },
    /// Replay successive snapshots of an edited file and print the final diff
    Replay {
        /// Baseline file
        original: PathBuf,
        /// Snapshots of the edited file, oldest first
        #[arg(required = true)]
        snapshots: Vec<PathBuf>,
        #[arg(long, value_enum, default_value_t = Mode::Full)]
        mode: Mode,
        /// Fast path thresholds (e.g. "lines=80,chars=10000,avg=200")
        #[arg(long, value_parser = parse_thresholds)]
        fast_path: Option<FastPathThresholds>,
    },
    /// Generate shell completions
    Completions { shell: Shell },
    /// Generate a man page
    Man,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut stdout = io::stdout().lock();

    match cli.command {
        Commands::Compare {
            original,
            modified,
            mode,
            editor,
            fast_path,
        } => {
            let diff = SmartDiff::new().thresholds(fast_path.unwrap_or_default());
            let original = read_text(&original)?;
            let modified = read_text(&modified)?;

            let rows = if editor {
                diff.compare_for_editor(&original, &modified, mode.into())
            } else {
                diff.compare(&original, &modified, mode.into())
            };
            write_rows(&mut stdout, &rows)?;
        }
        Commands::Replay {
            original,
            snapshots,
            mode,
            fast_path,
        } => {
            let diff = SmartDiff::new().thresholds(fast_path.unwrap_or_default());
            let original = read_text(&original)?;
            let snapshots = snapshots
                .iter()
                .map(|path| read_text(path))
                .collect::<Result<Vec<_>, _>>()?;

            let rows = diff.replay(&original, &snapshots, mode.into())?;
            write_rows(&mut stdout, &rows)?;
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "smart-line-diff", &mut stdout);
        }
        Commands::Man => {
            clap_mangen::Man::new(Cli::command()).render(&mut stdout)?;
        }
    }

    Ok(())
}

fn read_text(path: &Path) -> Result<String, SmartDiffError> {
    std::fs::read_to_string(path).map_err(|e| SmartDiffError::ReadFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Print rows with plain markers: `{+added+}` and `[-removed-]`
fn write_rows(out: &mut impl Write, rows: &[RenderedLine]) -> io::Result<()> {
    for row in rows {
        for segment in &row.segments {
            match segment.class {
                Classification::Unchanged => write!(out, "{}", segment.text)?,
                Classification::Added => write!(out, "{{+{}+}}", segment.text)?,
                Classification::Removed => write!(out, "[-{}-]", segment.text)?,
            }
        }
        writeln!(out)?;
    }
    Ok(())
}
