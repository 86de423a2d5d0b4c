use serde::Serialize;
use std::fmt;

use crate::error::{InvalidInputError, Result};

/// Side of an over/under line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Totals strictly greater than the line
    Over,
    /// Totals strictly less than the line
    Under,
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineKind::Over => write!(f, "over"),
            LineKind::Under => write!(f, "under"),
        }
    }
}

/// How often the simulated totals crossed one line.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ThresholdLine {
    pub kind: LineKind,
    pub line: i64,
    pub count: usize,
    /// Share of totals crossing the line, in [0, 100]
    pub percentage: f64,
}

impl ThresholdLine {
    /// Label such as "over 150".
    pub fn label(&self) -> String {
        format!("{} {}", self.kind, self.line)
    }
}

/// Over/under outcomes keyed by label, in the order the lines were given.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ThresholdReport {
    lines: Vec<ThresholdLine>,
}

impl ThresholdReport {
    pub fn lines(&self) -> &[ThresholdLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Look up a line by its label, e.g. `report.get("under 15")`.
    pub fn get(&self, label: &str) -> Option<&ThresholdLine> {
        self.lines.iter().find(|l| l.label() == label)
    }

    /// Insert a line, replacing any earlier line with the same label in place.
    fn insert(&mut self, line: ThresholdLine) {
        match self
            .lines
            .iter_mut()
            .find(|l| l.kind == line.kind && l.line == line.line)
        {
            Some(existing) => *existing = line,
            None => self.lines.push(line),
        }
    }
}

fn crossing(totals: &[i64], kind: LineKind, line: i64) -> ThresholdLine {
    let count = match kind {
        LineKind::Over => totals.iter().filter(|&&t| t > line).count(),
        LineKind::Under => totals.iter().filter(|&&t| t < line).count(),
    };
    ThresholdLine {
        kind,
        line,
        count,
        percentage: count as f64 / totals.len() as f64 * 100.0,
    }
}

/// Count the totals strictly above each over line and strictly below each
/// under line.
///
/// Empty line lists yield an empty report. Lines are not filtered here; see
/// [`crate::input::positive_thresholds`] for the caller-side policy.
pub fn analyze(totals: &[i64], overs: &[i64], unders: &[i64]) -> Result<ThresholdReport> {
    if totals.is_empty() {
        return Err(InvalidInputError::NoTotals);
    }

    let mut report = ThresholdReport::default();
    for &over in overs {
        report.insert(crossing(totals, LineKind::Over, over));
    }
    for &under in unders {
        report.insert(crossing(totals, LineKind::Under, under));
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_analyze_over_and_under() {
        let report = analyze(&[10, 20, 30, 40], &[25], &[15]).unwrap();
        assert_eq!(report.len(), 2);

        let over = report.get("over 25").unwrap();
        assert_eq!(over.count, 2);
        assert_relative_eq!(over.percentage, 50.0);

        let under = report.get("under 15").unwrap();
        assert_eq!(under.count, 1);
        assert_relative_eq!(under.percentage, 25.0);
    }

    #[test]
    fn test_lines_are_strict() {
        let report = analyze(&[10, 20, 30], &[20], &[20]).unwrap();
        assert_eq!(report.get("over 20").unwrap().count, 1);
        assert_eq!(report.get("under 20").unwrap().count, 1);
    }

    #[test]
    fn test_empty_lines_give_empty_report() {
        let report = analyze(&[10, 20], &[], &[]).unwrap();
        assert!(report.is_empty());
    }

    #[test]
    fn test_report_keeps_input_order() {
        let report = analyze(&[1, 2, 3], &[2, 1], &[3]).unwrap();
        let labels: Vec<String> = report.lines().iter().map(ThresholdLine::label).collect();
        assert_eq!(labels, vec!["over 2", "over 1", "under 3"]);
    }

    #[test]
    fn test_repeated_line_replaces_in_place() {
        let report = analyze(&[1, 2, 3], &[2, 2], &[]).unwrap();
        assert_eq!(report.len(), 1);
        assert_eq!(report.get("over 2").unwrap().count, 1);
    }

    #[test]
    fn test_non_positive_lines_accepted() {
        let report = analyze(&[-5, 0, 5], &[0], &[-1]).unwrap();
        assert_eq!(report.get("over 0").unwrap().count, 1);
        assert_eq!(report.get("under -1").unwrap().count, 1);
    }

    #[test]
    fn test_analyze_rejects_empty_totals() {
        assert_eq!(analyze(&[], &[1], &[]).unwrap_err(), InvalidInputError::NoTotals);
    }

    proptest! {
        #[test]
        fn prop_percentage_matches_count(
            totals in prop::collection::vec(0i64..300, 1..200),
            line in 0i64..300,
        ) {
            let report = analyze(&totals, &[line], &[line]).unwrap();
            for l in report.lines() {
                prop_assert!(l.count <= totals.len());
                prop_assert!((0.0..=100.0).contains(&l.percentage));
                let expected = l.count as f64 / totals.len() as f64 * 100.0;
                prop_assert!((l.percentage - expected).abs() < 1e-9);
            }
            let again = analyze(&totals, &[line], &[line]).unwrap();
            prop_assert_eq!(report, again);
        }
    }
}
