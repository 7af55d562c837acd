//! Plain-text rendering of a model report.

use takerate_core::config::{CurveKind, SweepConfig};
use takerate_core::money::format_dollars;
use takerate_core::types::{ModelReport, Optimum, Series};

/// Chart-style annotation for the optimum, e.g. `Max Revenue @ $5.74`.
pub fn optimum_annotation(optimum: &Optimum) -> String {
    format!("Max Revenue @ {}", format_dollars(optimum.take_rate))
}

/// Header, optimum, and a table of `rows` evenly spaced sweep points.
pub fn render(report: &ModelReport, kind: CurveKind, sweep: &SweepConfig, rows: usize) -> String {
    let mut lines = vec![
        format!(
            "Match curve: {kind} (take {:.2}..{:.2}, {} samples)",
            sweep.lower, sweep.upper, sweep.samples
        ),
        format!(
            "{} ({} net revenue / month)",
            optimum_annotation(&report.optimum),
            format_dollars(report.optimum.revenue)
        ),
    ];

    let indices = sample_indices(report.len(), rows);
    if !indices.is_empty() {
        lines.push(String::new());
        lines.push(format!(
            "{:>8} {:>7} {:>11} {:>11} {:>11} {:>11} {:>11}",
            "take", "match", "rider cost", "driver cost", "profit", "cost", "revenue"
        ));
        for i in indices {
            let value = |s: &Series| s.get(i).unwrap_or(f64::NAN);
            lines.push(format!(
                "{:>8.2} {:>7.3} {:>11.2} {:>11.2} {:>11.2} {:>11.2} {:>11.2}",
                value(&report.take_rates),
                value(&report.match_rates),
                value(&report.rider_cost),
                value(&report.driver_cost),
                value(&report.profit),
                value(&report.total_cost),
                value(&report.revenue),
            ));
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// `rows` indices spread evenly over `0..len`, first and last included.
fn sample_indices(len: usize, rows: usize) -> Vec<usize> {
    if len == 0 || rows == 0 {
        return Vec::new();
    }
    if rows >= len {
        return (0..len).collect();
    }
    if rows == 1 {
        return vec![0];
    }
    let mut indices: Vec<usize> = (0..rows).map(|i| i * (len - 1) / (rows - 1)).collect();
    indices.dedup();
    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use takerate_core::config::{ModelConfig, Preset};

    #[test]
    fn annotation_rounds_to_cent() {
        let opt = Optimum {
            index: 3,
            take_rate: 5.737_158,
            revenue: 1_234.0,
        };
        assert_eq!(optimum_annotation(&opt), "Max Revenue @ $5.74");
    }

    #[test]
    fn sample_indices_cover_ends() {
        assert_eq!(sample_indices(1500, 4), vec![0, 499, 999, 1499]);
    }

    #[test]
    fn sample_indices_small_sweeps() {
        assert_eq!(sample_indices(3, 10), vec![0, 1, 2]);
        assert_eq!(sample_indices(10, 1), vec![0]);
        assert!(sample_indices(10, 0).is_empty());
        assert!(sample_indices(0, 5).is_empty());
    }

    #[test]
    fn render_contains_annotation_and_rows() {
        let cfg = ModelConfig::from_preset(Preset::Linear);
        let report = takerate_model::evaluate(&cfg).unwrap();
        let text = render(&report, cfg.curve.kind, &cfg.sweep, 5);
        assert!(text.starts_with("Match curve: linear"));
        assert!(text.contains(&optimum_annotation(&report.optimum)));
        // header + optimum + blank + column header + 5 rows
        assert_eq!(text.lines().count(), 9);
    }

    #[test]
    fn render_without_rows() {
        let cfg = ModelConfig::from_preset(Preset::InverseAffine);
        let report = takerate_model::evaluate(&cfg).unwrap();
        let text = render(&report, cfg.curve.kind, &cfg.sweep, 0);
        assert_eq!(text.lines().count(), 2);
    }
}
