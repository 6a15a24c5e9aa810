use clap::{Args, Parser, Subcommand, ValueEnum};
use ff_case::{
    CaseDirectory, CaseError, DictionaryEditor, EditSummary, ForceConfig, resolve_floor_count,
};
use ff_core::RunLog;
use ff_dict::InsertStrategy;
use ff_dict::force::DEFAULT_PATCHES;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ff-cli")]
#[command(about = "foamforce - add building force post-processing to an OpenFOAM case", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a force function object with per-floor bins to system/controlDict
    Add(AddArgs),
    /// Check that a directory is a complete OpenFOAM case
    Check {
        /// OpenFOAM case directory
        #[arg(short, long, default_value = ".")]
        case: PathBuf,
    },
    /// Print the number of floors stored in a building information file
    Floors {
        /// Path to the building information (BIM) JSON file
        bim: PathBuf,
    },
}

#[derive(Args)]
struct AddArgs {
    /// Number of floors
    #[arg(short, long)]
    floors: Option<NonZeroU32>,
    /// Path to the building information (BIM) JSON file, used when --floors is absent
    #[arg(short, long)]
    bim: Option<PathBuf>,
    /// Patches used for extracting forces on the building
    #[arg(short, long, default_value = DEFAULT_PATCHES, value_parser = parse_patches)]
    patches: String,
    /// OpenFOAM case directory
    #[arg(short, long, default_value = ".")]
    case: PathBuf,
    /// YAML file overriding the function object settings
    #[arg(long)]
    config: Option<PathBuf>,
    /// How the insertion point is located
    #[arg(long, value_enum, default_value_t = Strategy::Structural)]
    strategy: Strategy,
    /// Edit system/controlDict even if the case layout is incomplete
    #[arg(long)]
    skip_case_check: bool,
    /// Also append log messages to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Print the edited control dictionary instead of writing it
    #[arg(long)]
    dry_run: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Strategy {
    Legacy,
    Structural,
}

impl From<Strategy> for InsertStrategy {
    fn from(s: Strategy) -> Self {
        match s {
            Strategy::Legacy => InsertStrategy::Legacy,
            Strategy::Structural => InsertStrategy::Structural,
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("either --floors or --bim must be given")]
    MissingFloors,

    #[error("{path} is not a complete OpenFOAM case")]
    InvalidCase { path: PathBuf },

    #[error(transparent)]
    Case(#[from] CaseError),
}

type CliResult<T> = Result<T, CliError>;

fn parse_patches(s: &str) -> Result<String, String> {
    let patches = s.trim();
    if patches.is_empty() {
        return Err("patch list must not be empty".to_string());
    }
    Ok(patches.to_string())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Add(args) => cmd_add(&args),
        Commands::Check { case } => cmd_check(&case),
        Commands::Floors { bim } => cmd_floors(&bim),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn resolve_floors(args: &AddArgs) -> CliResult<NonZeroU32> {
    match (args.floors, &args.bim) {
        (Some(floors), _) => Ok(floors),
        (None, Some(bim)) => Ok(resolve_floor_count(bim)?),
        (None, None) => Err(CliError::MissingFloors),
    }
}

fn cmd_add(args: &AddArgs) -> CliResult<()> {
    let floors = resolve_floors(args)?;
    let config = match &args.config {
        Some(path) => ForceConfig::load_yaml(path)?,
        None => ForceConfig::default(),
    };
    let force = config.build(floors, &args.patches)?;
    tracing::debug!(floors = floors.get(), patches = %args.patches, "built force function object");

    let mut log = RunLog::new();
    if let Some(path) = &args.log_file {
        log = log.with_log_file(path);
    }

    let editor = DictionaryEditor::new(&args.case)
        .with_strategy(args.strategy.into())
        .with_case_check(!args.skip_case_check);

    if args.dry_run {
        let (dict, summary) = editor.preview(&force, &mut log)?;
        print!("{}", dict);
        print_summary(&summary, false);
    } else {
        let summary = editor.apply(&force, &mut log)?;
        print_summary(&summary, true);
    }
    Ok(())
}

fn print_summary(summary: &EditSummary, written: bool) {
    let verb = if written { "Updated" } else { "Would update" };
    eprintln!(
        "✓ {} {} ({} strategy, {} lines added at line {})",
        verb,
        summary.control_dict.display(),
        summary.strategy,
        summary.insertion.inserted_lines,
        summary.insertion.index + 1
    );
    if summary.insertion.synthesized_functions {
        eprintln!("  created a functions block");
    }
    if summary.existing_stanzas > 0 {
        eprintln!(
            "  note: {} earlier stanza(s) with the same name are still present",
            summary.existing_stanzas
        );
    }
}

fn cmd_check(case: &Path) -> CliResult<()> {
    let report = CaseDirectory::inspect(case);
    if report.is_valid() {
        println!("✓ {} is a valid OpenFOAM case", case.display());
        return Ok(());
    }

    println!("Case directory {}:", case.display());
    for item in &report.missing {
        println!("  missing {}", item);
    }
    Err(CliError::InvalidCase {
        path: case.to_path_buf(),
    })
}

fn cmd_floors(bim: &Path) -> CliResult<()> {
    let floors = resolve_floor_count(bim)?;
    println!("{}", floors);
    Ok(())
}
