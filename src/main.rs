use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use passforge::config::ScoringParams;
use passforge::scorer::Scorer;
use std::process;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with scoring parameters; explicit flags still win.
    #[arg(global = true, long)]
    params: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a single pass.
    Score(cmd::score::ScoreArgs),
    /// Score every pass in a CSV file.
    Batch(cmd::batch::BatchArgs),
    /// Tabulate a multiplier curve.
    Curves(cmd::curves::CurvesArgs),
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_params(
    cli_params: &ScoringParams,
    params_path: Option<&str>,
    sub_matches: &ArgMatches,
) -> passforge::SfResult<ScoringParams> {
    match params_path {
        Some(path) => {
            let mut file_params = ScoringParams::load_from_file(path)?;
            file_params.merge_from_cli(cli_params, sub_matches);
            Ok(file_params)
        }
        None => {
            if *cli_params != ScoringParams::default() {
                warn!("⚠️  Running with non-ranked scoring parameters.");
            }
            Ok(cli_params.clone())
        }
    }
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    init_logging(cli.debug);

    let (name, cli_params) = match &cli.command {
        Commands::Score(args) => ("score", &args.params),
        Commands::Batch(args) => ("batch", &args.params),
        Commands::Curves(args) => ("curves", &args.params),
    };
    let sub_matches = match matches.subcommand_matches(name) {
        Some(m) => m,
        None => {
            error!("Subcommand '{}' was not matched", name);
            process::exit(2);
        }
    };

    let scorer = match resolve_params(cli_params, cli.params.as_deref(), sub_matches)
        .and_then(Scorer::new)
    {
        Ok(s) => s,
        Err(e) => {
            error!("❌ FATAL ERROR INITIALIZING SCORER: {}", e);
            process::exit(1);
        }
    };
    info!("🚀 PassForge scorer ready");

    let result = match cli.command {
        Commands::Score(args) => cmd::score::run(args, &scorer),
        Commands::Batch(args) => cmd::batch::run(args, &scorer),
        Commands::Curves(args) => cmd::curves::run(args, &scorer),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
