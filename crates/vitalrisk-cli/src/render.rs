//! Plain-text rendering of predictions, insights and the decision map.

use std::fmt::Write;

use vitalrisk_core::models::boundary::BoundaryPoint;
use vitalrisk_core::models::insight::Insight;
use vitalrisk_core::models::prediction::PredictionResult;
use vitalrisk_core::models::vitals::VitalsInput;
use vitalrisk_model::boundary::BoundaryGrid;
use vitalrisk_model::scorer::FeatureContribution;

const BAR_WIDTH: usize = 40;

/// Status label, probability, a gauge with the 50% threshold marked, and
/// the advisory sentence.
pub fn render_summary(prediction: &PredictionResult) -> String {
    let status = prediction.status();
    let mut out = String::new();

    let _ = writeln!(out, "Status:           {}", status.label());
    let _ = writeln!(out, "Risk probability: {}", prediction.percentage());
    let _ = writeln!(out, "Logit:            {:.3}", prediction.score);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", gauge(prediction.probability));
    let _ = writeln!(out, "{:<20}{:>20}", "safe", "critical");
    let _ = writeln!(out);
    out.push_str(status.message());
    out.push('\n');
    out
}

/// `[####....|.........]`, filled in proportion to `probability`, with `|`
/// at the threshold. NaN renders as an empty bar.
pub fn gauge(probability: f64) -> String {
    let filled = if probability.is_nan() {
        0
    } else {
        (probability.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize
    };

    let mut bar = String::with_capacity(BAR_WIDTH + 2);
    bar.push('[');
    for i in 0..BAR_WIDTH {
        let c = if i == BAR_WIDTH / 2 {
            '|'
        } else if i < filled {
            '#'
        } else {
            '.'
        };
        bar.push(c);
    }
    bar.push(']');
    bar
}

pub fn render_contributions(terms: &[FeatureContribution]) -> String {
    let mut out = String::new();
    for term in terms {
        let _ = writeln!(
            out,
            "  {:<13} {:>8} x {:<6} = {:>7.3}",
            term.feature.label(),
            term.value,
            term.weight,
            term.contribution
        );
    }
    out
}

pub fn render_insight(insight: &Insight) -> String {
    let mut out = String::from("Clinical insight\n\n");
    out.push_str(insight.summary.trim());
    out.push('\n');

    let sections = [
        ("Risk factors", &insight.risk_factors),
        ("Recommendations", &insight.recommendations),
    ];
    for (title, items) in sections {
        if items.is_empty() {
            continue;
        }
        let _ = writeln!(out, "\n{title}:");
        for item in items {
            let _ = writeln!(out, "  - {}", item.trim());
        }
    }
    out
}

/// One row per grid point.
pub fn render_grid_table(points: impl IntoIterator<Item = BoundaryPoint>) -> String {
    let mut out = format!("{:>10} {:>8} {:>5} {:>11}\n", "systolic", "glucose", "risk", "probability");
    for p in points {
        let _ = writeln!(
            out,
            "{:>10} {:>8} {:>5} {:>11.4}",
            p.systolic_bp, p.glucose, p.risk, p.probability
        );
    }
    out
}

/// Text decision map: glucose rows (high at the top) against systolic
/// columns. `#` marks at-risk cells, `.` safe cells and `+` the grid cell
/// closest to the current patient.
pub fn render_plot(grid: BoundaryGrid, current: &VitalsInput) -> String {
    let systolic: Vec<f64> = BoundaryGrid::systolic_values().collect();
    let glucose: Vec<f64> = BoundaryGrid::glucose_values().collect();
    let points: Vec<BoundaryPoint> = grid.collect();

    let marker_col = nearest(&systolic, current.systolic_bp);
    let marker_row = nearest(&glucose, current.glucose);

    let mut out = String::from("glucose\n");
    for (row, g) in glucose.iter().enumerate().rev() {
        let _ = write!(out, "{g:>5} ");
        for col in 0..systolic.len() {
            let cell = if Some((row, col)) == marker_row.zip(marker_col) {
                '+'
            } else {
                // Grid order is systolic-major.
                match points.get(col * glucose.len() + row) {
                    Some(p) if p.risk == 1 => '#',
                    Some(_) => '.',
                    None => ' ',
                }
            };
            let _ = write!(out, "{cell}   ");
        }
        out.push('\n');
    }

    out.push_str("      ");
    for s in &systolic {
        let _ = write!(out, "{s:<4}");
    }
    out.push_str("\n      systolic BP (age 50, diastolic = 0.67 x systolic)\n");
    out.push_str("      # at risk   . safe   + current patient\n");
    out
}

fn nearest(axis: &[f64], value: f64) -> Option<usize> {
    if !value.is_finite() {
        return None;
    }
    axis.iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| (*a - value).abs().total_cmp(&(*b - value).abs()))
        .map(|(i, _)| i)
}
