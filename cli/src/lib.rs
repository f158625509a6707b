mod editor;

use std::ffi::OsString;
use std::io;

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use tracing::debug;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use v_finder::FinderConfig;
use v_finder::Selector;

pub use editor::DEFAULT_EDITOR;
pub use editor::Editor;

/// Exit status for every terminal failure: bad usage, missing editor, no
/// match, interruption.
pub const SYS_ERROR: i32 = 42;

#[derive(Debug, Parser)]
#[command(
    name = "v",
    version,
    about = "Open the file under the current directory that best matches a partial name."
)]
pub struct Cli {
    /// Partial, possibly fuzzy, file name.
    #[arg(value_name = "PARTIAL_NAME")]
    pub query: String,

    /// Print scoring diagnostics to stderr.
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the chosen path instead of opening it.
    #[arg(short, long)]
    pub print: bool,

    /// Editor command (defaults to $VISUAL, $EDITOR, then vim).
    #[arg(short, long, value_name = "CMD")]
    pub editor: Option<String>,

    /// Also skip files whose name ends with SUFFIX (repeatable).
    #[arg(short = 'x', long = "exclude-suffix", value_name = "SUFFIX")]
    pub exclude_suffixes: Vec<String>,

    /// Directory levels to descend below the current directory.
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,
}

impl Cli {
    pub fn finder_config(&self) -> FinderConfig {
        FinderConfig {
            max_depth: self.max_depth,
            ..FinderConfig::default()
        }
        .with_extra_suffixes(self.exclude_suffixes.iter().cloned())
    }
}

pub fn main() -> ! {
    let exit_code = run_main(std::env::args_os());
    std::process::exit(exit_code);
}

pub fn run_main<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => SYS_ERROR,
            };
        }
    };

    init_logging(cli.verbose);
    install_interrupt_handler();

    match run(cli) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("v: {err:#}");
            SYS_ERROR
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.finder_config();
    // Resolve first so a missing editor fails before any prompt.
    let editor = if cli.print {
        None
    } else {
        Some(Editor::resolve(cli.editor.as_deref())?)
    };

    let root = std::env::current_dir().context("failed to read the current directory")?;
    let mut selector = Selector::new(v_finder::stdin_lines(), io::stderr());
    let path = v_finder::find(&config, &root, &cli.query, &mut selector)?;

    match editor {
        None => {
            println!("{}", path.display());
            Ok(())
        }
        Some(editor) => {
            debug!("opening {} with {}", path.display(), editor.program().display());
            editor.open(&path)
        }
    }
}

fn init_logging(verbose: bool) {
    let default_directive = if verbose {
        "v_finder=debug,v_cli=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

fn install_interrupt_handler() {
    let installed = ctrlc::set_handler(|| {
        eprintln!("\nInterrupted");
        std::process::exit(SYS_ERROR);
    });
    if let Err(err) = installed {
        warn!("failed to install interrupt handler: {err}");
    }
}
