use crate::scorer::{DifficultyParameters, PassAttempt, ScoreDetails, Scorer};
use crate::SfResult;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

/// One submission to be scored authoritatively.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    pub pass: PassAttempt,
    pub level: DifficultyParameters,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponse {
    pub score_v2: f64,
    pub details: ScoreDetails,
}

/// Service: score a single submission, rejecting malformed input.
pub fn score_submission(scorer: &Scorer, request: &ScoreRequest) -> SfResult<ScoreResponse> {
    let details = scorer.try_score_details(&request.pass, &request.level)?;
    Ok(ScoreResponse {
        score_v2: details.score_v2,
        details,
    })
}

/// Service: JSON in, JSON out.
pub fn score_json(scorer: &Scorer, body: &str) -> SfResult<String> {
    let request: ScoreRequest = serde_json::from_str(body)?;
    let response = score_submission(scorer, &request)?;
    Ok(serde_json::to_string(&response)?)
}

/// Service: score independent submissions in parallel. Results keep the
/// order of `requests`.
pub fn score_batch(scorer: &Scorer, requests: &[ScoreRequest]) -> Vec<SfResult<ScoreResponse>> {
    info!("Scoring batch of {} submissions", requests.len());
    requests
        .par_iter()
        .map(|req| score_submission(scorer, req))
        .collect()
}
