use crate::reports;
use clap::{Args, ValueEnum};
use passforge::config::ScoringParams;
use passforge::scorer::accuracy::accuracy_multiplier;
use passforge::scorer::miss::excess_multiplier;
use passforge::scorer::speed::{speed_multiplier, SpeedRegime};
use passforge::scorer::Scorer;
use passforge::{PassForgeError, SfResult};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CurveKind {
    Speed,
    Accuracy,
    Miss,
}

#[derive(Args, Debug, Clone)]
pub struct CurvesArgs {
    #[command(flatten)]
    pub params: ScoringParams,

    #[arg(value_enum)]
    pub curve: CurveKind,

    /// Number of intervals between the range ends.
    #[arg(long, default_value_t = 20)]
    pub steps: usize,

    /// Evaluate the speed curve in Desert-Bus mode.
    #[arg(long, default_value_t = false)]
    pub desert_bus: bool,
}

pub struct CurveRow {
    pub input: f64,
    pub label: String,
    pub multiplier: f64,
}

fn sample(from: f64, to: f64, steps: usize) -> impl Iterator<Item = f64> {
    (0..=steps).map(move |i| from + (to - from) * i as f64 / steps as f64)
}

pub fn run(args: CurvesArgs, scorer: &Scorer) -> SfResult<()> {
    if args.steps == 0 {
        return Err(PassForgeError::Config("--steps must be at least 1".to_string()));
    }

    let rows: Vec<CurveRow> = match args.curve {
        CurveKind::Speed => sample(1.0, 2.1, args.steps)
            .map(|s| CurveRow {
                input: s,
                label: SpeedRegime::classify(Some(s), args.desert_bus).to_string(),
                multiplier: speed_multiplier(Some(s), args.desert_bus),
            })
            .collect(),
        CurveKind::Accuracy => sample(0.94, 1.0, args.steps)
            .map(|a| CurveRow {
                input: a * 100.0,
                label: "percent".to_string(),
                multiplier: accuracy_multiplier(a),
            })
            .collect(),
        CurveKind::Miss => {
            let curve = &scorer.params.miss;
            sample(0.0, curve.regime_end + 5.0, args.steps)
                .map(|e| CurveRow {
                    input: e,
                    label: "excess misses".to_string(),
                    multiplier: excess_multiplier(e, curve),
                })
                .collect()
        }
    };

    reports::print_curve_table(&format!("{:?}", args.curve), &rows);
    Ok(())
}
