use crate::reports;
use clap::Args;
use passforge::api::{score_batch, ScoreRequest, ScoreResponse};
use passforge::config::ScoringParams;
use passforge::scorer::{DifficultyParameters, PassAttempt, Scorer};
use passforge::{JudgementTally, PassForgeError, SfResult};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    #[command(flatten)]
    pub params: ScoringParams,

    /// CSV with a header row; see `BatchRow` for the columns.
    #[arg(short, long)]
    pub input: PathBuf,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

/// One CSV line. `speed` may be left empty for unmodified playback.
#[derive(Debug, Deserialize)]
pub struct BatchRow {
    pub level_id: String,
    pub base_score: f64,
    pub diff_code: i64,
    pub speed: Option<f64>,
    pub early_double: u32,
    pub early_single: u32,
    pub e_perfect: u32,
    pub perfect: u32,
    pub l_perfect: u32,
    pub late_single: u32,
    pub late_double: u32,
    #[serde(default)]
    pub no_hold_tap: bool,
}

impl BatchRow {
    fn into_request(self) -> ScoreRequest {
        let tally = JudgementTally::from_array([
            self.early_double,
            self.early_single,
            self.e_perfect,
            self.perfect,
            self.l_perfect,
            self.late_single,
            self.late_double,
        ]);
        ScoreRequest {
            pass: PassAttempt {
                judgements: tally,
                speed: self.speed,
                is_no_hold_tap: self.no_hold_tap,
            },
            level: DifficultyParameters {
                base_score: self.base_score,
                legacy_diff_code: self.diff_code,
            },
        }
    }
}

/// Reads every CSV line into its own result so one unreadable row does not
/// sink the rest of the file.
fn read_rows(path: &Path) -> SfResult<(Vec<String>, Vec<SfResult<ScoreRequest>>)> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();

    let mut ids = Vec::new();
    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let line = i + 2;
        let (id, parsed) = match record {
            Ok(rec) => (
                rec.get(0)
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("line {}", line)),
                rec.deserialize::<BatchRow>(Some(&headers))
                    .map(BatchRow::into_request)
                    .map_err(PassForgeError::from),
            ),
            Err(e) => (format!("line {}", line), Err(e.into())),
        };
        if let Err(e) = &parsed {
            warn!("Line {} could not be read: {}", line, e);
        }
        ids.push(id);
        rows.push(parsed);
    }
    Ok((ids, rows))
}

pub fn run(args: BatchArgs, scorer: &Scorer) -> SfResult<()> {
    info!("📂 Loading passes from {}", args.input.display());
    let (ids, rows) = read_rows(&args.input)?;

    let requests: Vec<ScoreRequest> = rows
        .iter()
        .filter_map(|r| r.as_ref().ok())
        .cloned()
        .collect();
    let mut scored = score_batch(scorer, &requests).into_iter();
    let results: Vec<SfResult<ScoreResponse>> = rows
        .into_iter()
        .map(|row| {
            row.and_then(|_| scored.next().unwrap_or_else(|| Err(missing_result())))
        })
        .collect();

    if args.json {
        let lines: Vec<serde_json::Value> = ids
            .iter()
            .zip(&results)
            .map(|(id, res)| match res {
                Ok(r) => serde_json::json!({ "levelId": id, "scoreV2": r.score_v2 }),
                Err(e) => serde_json::json!({ "levelId": id, "error": e.to_string() }),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&lines)?);
    } else {
        reports::print_batch_report(&ids, &results);
    }
    Ok(())
}

fn missing_result() -> PassForgeError {
    PassForgeError::IncompleteInput("batch produced fewer results than rows".to_string())
}
