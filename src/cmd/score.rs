use crate::reports;
use clap::Args;
use passforge::config::ScoringParams;
use passforge::scorer::{DifficultyParameters, PassAttempt, Scorer};
use passforge::{JudgementTally, SfResult};

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub params: ScoringParams,

    /// Seven comma-separated counts: early double, early single, e-perfect,
    /// perfect, l-perfect, late single, late double.
    #[arg(short, long)]
    pub judgements: String,

    /// Playback rate; omit for unmodified playback.
    #[arg(short, long)]
    pub speed: Option<f64>,

    #[arg(short, long)]
    pub base_score: f64,

    #[arg(long, default_value_t = 0)]
    pub diff_code: i64,

    #[arg(long, default_value_t = false)]
    pub no_hold_tap: bool,

    /// Print the breakdown as JSON instead of a table.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: ScoreArgs, scorer: &Scorer) -> SfResult<()> {
    let fields: Vec<&str> = args.judgements.split(',').collect();
    let tally = JudgementTally::parse_fields(fields.as_slice())?;
    let attempt = PassAttempt::new(tally, args.speed, args.no_hold_tap)?;
    let diff = DifficultyParameters::new(args.base_score, args.diff_code)?;

    let details = scorer.try_score_details(&attempt, &diff)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&details)?);
    } else {
        reports::print_score_breakdown(&attempt, &details);
    }
    Ok(())
}
