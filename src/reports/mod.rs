use crate::cmd::curves::CurveRow;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use passforge::api::ScoreResponse;
use passforge::scorer::{PassAttempt, ScoreDetails};
use passforge::{SfResult, Tier};
use strum::IntoEnumIterator;

pub fn print_score_breakdown(attempt: &PassAttempt, details: &ScoreDetails) {
    let mut judgements = Table::new();
    judgements.load_preset(ASCII_FULL);
    judgements.set_header(
        Tier::iter()
            .map(|t| Cell::new(t.to_string()).add_attribute(Attribute::Bold))
            .collect::<Vec<_>>(),
    );
    judgements.add_row(
        Tier::iter()
            .map(|t| {
                Cell::new(attempt.judgements.get(t)).set_alignment(CellAlignment::Right)
            })
            .collect::<Vec<_>>(),
    );
    println!("{}", judgements);

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Component").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);

    let speed = attempt
        .speed
        .map(|s| format!("{}x", s))
        .unwrap_or_else(|| "1.0x".to_string());

    table.add_row(vec![
        Cell::new("Accuracy"),
        Cell::new(format!("{:.4}%", details.accuracy * 100.0)),
    ]);
    table.add_row(vec![
        Cell::new("xAcc Mtp"),
        Cell::new(format!("{:.4}", details.accuracy_multiplier)),
    ]);
    table.add_row(vec![
        Cell::new("Speed"),
        Cell::new(format!("{} ({})", speed, details.speed_regime)),
    ]);
    table.add_row(vec![
        Cell::new("Speed Mtp"),
        Cell::new(format!("{:.4}", details.speed_multiplier)),
    ]);
    table.add_row(vec![
        Cell::new("Excess Misses"),
        Cell::new(details.excess_misses),
    ]);
    table.add_row(vec![
        Cell::new("Miss Mtp").fg(Color::Red),
        Cell::new(format!("{:.4}", details.miss_multiplier)),
    ]);
    if details.is_desert_bus {
        let floor = if details.floor_applied { "floor applied" } else { "-" };
        table.add_row(vec![Cell::new("Desert Bus"), Cell::new(floor)]);
    }
    table.add_row(vec![
        Cell::new("Raw Score"),
        Cell::new(format!("{:.2}", details.raw_score)),
    ]);
    table.add_row(vec![
        Cell::new("ScoreV2").fg(Color::Cyan).add_attribute(Attribute::Bold),
        Cell::new(format!("{:.2}", details.score_v2)).fg(Color::Cyan),
    ]);

    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }
    println!("{}", table);
}

pub fn print_batch_report(ids: &[String], results: &[SfResult<ScoreResponse>]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("#"),
        Cell::new("Level").add_attribute(Attribute::Bold),
        Cell::new("xAcc"),
        Cell::new("Speed"),
        Cell::new("Miss").fg(Color::Red),
        Cell::new("ScoreV2").fg(Color::Cyan),
    ]);

    let mut failed = 0;
    for (i, (id, res)) in ids.iter().zip(results).enumerate() {
        match res {
            Ok(r) => {
                table.add_row(vec![
                    Cell::new(i + 1),
                    Cell::new(id),
                    Cell::new(format!("{:.4}", r.details.accuracy_multiplier)),
                    Cell::new(format!("{:.4}", r.details.speed_multiplier)),
                    Cell::new(format!("{:.4}", r.details.miss_multiplier)),
                    Cell::new(format!("{:.2}", r.score_v2)),
                ]);
            }
            Err(e) => {
                failed += 1;
                table.add_row(vec![
                    Cell::new(i + 1),
                    Cell::new(id),
                    Cell::new(e.to_string()).fg(Color::Red),
                    Cell::new(""),
                    Cell::new(""),
                    Cell::new(""),
                ]);
            }
        }
    }

    for i in 2..=5 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
    println!("{}", table);
    println!("Scored {} passes ({} rejected)", results.len() - failed, failed);
}

pub fn print_curve_table(name: &str, rows: &[CurveRow]) {
    println!("\nCurve: {}", name);
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec![
        Cell::new("Input").add_attribute(Attribute::Bold),
        Cell::new("Regime"),
        Cell::new("Multiplier").fg(Color::Cyan),
    ]);
    for row in rows {
        table.add_row(vec![
            Cell::new(format!("{:.4}", row.input)).set_alignment(CellAlignment::Right),
            Cell::new(&row.label),
            Cell::new(format!("{:.6}", row.multiplier)).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{}", table);
}
