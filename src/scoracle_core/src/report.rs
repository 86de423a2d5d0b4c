//! Plain-text rendering of results.

use crate::over_under::ThresholdReport;
use crate::parlay::ParlayPair;
use crate::simulation::SimulationResult;

/// Lines summarizing a simulation, optionally headed by the matchup.
pub fn simulation_lines(
    result: &SimulationResult,
    teams: Option<(&str, &str)>,
) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some((team_one, team_two)) = teams {
        lines.push(format!(
            "{} vs {} ({} simulations)",
            team_one,
            team_two,
            result.totals.len()
        ));
    }
    lines.push(format!("Average Total Score: {:.2}", result.average));
    lines.push(format!("Highest Score: {}", result.maximum));
    lines.push(format!("Lowest Score: {}", result.minimum));
    lines.push(format!(
        "Most Likely Total Score: {} occurring {} times",
        result.modal_total.value, result.modal_total.frequency
    ));
    lines.push(format!(
        "Median: {:.2} | Std Dev: {:.2}",
        result.median, result.std_dev
    ));
    lines
}

pub fn threshold_lines(report: &ThresholdReport) -> Vec<String> {
    report
        .lines()
        .iter()
        .map(|l| {
            format!(
                "- Final score went {} {} times ({:.2}% of the time).",
                l.label(),
                l.count,
                l.percentage
            )
        })
        .collect()
}

/// Numbered parlay listing, starting at 1.
pub fn parlay_lines(pairs: &[ParlayPair]) -> Vec<String> {
    let mut lines = Vec::with_capacity(pairs.len() + 1);
    lines.push(format!(
        "Generated {} evenly distributed 2-bet parlays:",
        pairs.len()
    ));
    lines.extend(
        pairs
            .iter()
            .enumerate()
            .map(|(i, pair)| format!("{}. {}", i + 1, pair)),
    );
    lines
}
