//! Python bindings, enabled with the `python` feature.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::constants::{DEFAULT_SIMULATIONS, MAX_EVENTS};
use crate::error::InvalidInputError;
use crate::over_under::analyze;
use crate::parlay::generate_balanced_pairs;
use crate::simulation::{draw_count, summarize, ScoreSample, ScoreSimulator, SimulationResult};

impl From<InvalidInputError> for PyErr {
    fn from(err: InvalidInputError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// Summary statistics of a simulation, as seen from Python.
#[pyclass(name = "SimulationResult")]
#[derive(Clone, Debug)]
pub struct PySimulationResult {
    #[pyo3(get)]
    pub totals: Vec<i64>,

    #[pyo3(get)]
    pub average: f64,

    #[pyo3(get)]
    pub maximum: i64,

    #[pyo3(get)]
    pub minimum: i64,

    /// (total, occurrences)
    #[pyo3(get)]
    pub most_common: (i64, usize),

    #[pyo3(get)]
    pub median: f64,

    #[pyo3(get)]
    pub std_dev: f64,
}

#[pymethods]
impl PySimulationResult {
    fn __repr__(&self) -> String {
        format!(
            "SimulationResult({} draws, average={:.2}, most_common={:?})",
            self.totals.len(),
            self.average,
            self.most_common
        )
    }
}

impl From<SimulationResult> for PySimulationResult {
    fn from(result: SimulationResult) -> Self {
        PySimulationResult {
            average: result.average,
            maximum: result.maximum,
            minimum: result.minimum,
            most_common: (result.modal_total.value, result.modal_total.frequency),
            median: result.median,
            std_dev: result.std_dev,
            totals: result.totals,
        }
    }
}

/// Draw (team1, team2) score pairs with replacement.
#[pyfunction]
#[pyo3(signature = (team1_scores, team2_scores, simulations = DEFAULT_SIMULATIONS as i64, seed = None))]
fn simulate_scores(
    team1_scores: Vec<i64>,
    team2_scores: Vec<i64>,
    simulations: i64,
    seed: Option<u64>,
) -> PyResult<Vec<(i64, i64)>> {
    let simulator = ScoreSimulator::new(draw_count(simulations)?, seed);
    let samples = simulator.draw(&team1_scores, &team2_scores)?;
    Ok(samples.iter().map(|s| (s.team_one, s.team_two)).collect())
}

#[pyfunction]
fn calculate_statistics(simulated_scores: Vec<(i64, i64)>) -> PyResult<PySimulationResult> {
    let samples: Vec<ScoreSample> = simulated_scores
        .into_iter()
        .map(|(team_one, team_two)| ScoreSample { team_one, team_two })
        .collect();
    Ok(summarize(&samples)?.into())
}

/// Returns (label, count, percentage) tuples in input order.
#[pyfunction]
fn analyze_over_under(
    total_scores: Vec<i64>,
    overs: Vec<i64>,
    unders: Vec<i64>,
) -> PyResult<Vec<(String, usize, f64)>> {
    let report = analyze(&total_scores, &overs, &unders)?;
    Ok(report
        .lines()
        .iter()
        .map(|l| (l.label(), l.count, l.percentage))
        .collect())
}

#[pyfunction]
fn generate_evenly_distributed_parlays(events: Vec<String>) -> PyResult<Vec<(String, String)>> {
    let pairs = generate_balanced_pairs(&events)?;
    Ok(pairs.into_iter().map(|p| (p.first, p.second)).collect())
}

/// Python module definition
#[pymodule]
fn scoracle_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Classes
    m.add_class::<PySimulationResult>()?;

    // Functions
    m.add_function(wrap_pyfunction!(simulate_scores, m)?)?;
    m.add_function(wrap_pyfunction!(calculate_statistics, m)?)?;
    m.add_function(wrap_pyfunction!(analyze_over_under, m)?)?;
    m.add_function(wrap_pyfunction!(generate_evenly_distributed_parlays, m)?)?;

    // Constants
    m.add("DEFAULT_SIMULATIONS", DEFAULT_SIMULATIONS)?;
    m.add("MAX_EVENTS", MAX_EVENTS)?;

    Ok(())
}
