use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use statrs::statistics::{Data, Median, Statistics};
use std::collections::BTreeMap;
use tracing::debug;

use crate::constants::DEFAULT_SIMULATIONS;
use crate::error::{InvalidInputError, Result};

/// One simulated draw: a score picked for each team.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ScoreSample {
    pub team_one: i64,
    pub team_two: i64,
}

impl ScoreSample {
    /// Combined score, or an error if it does not fit in an `i64`.
    pub fn total(&self) -> Result<i64> {
        self.team_one
            .checked_add(self.team_two)
            .ok_or(InvalidInputError::TotalOverflow {
                team_one: self.team_one,
                team_two: self.team_two,
            })
    }
}

/// Most frequent total and how many draws produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ModalTotal {
    pub value: i64,
    pub frequency: usize,
}

/// Distribution of combined totals over a set of draws.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SimulationResult {
    /// One total per draw, in draw order
    pub totals: Vec<i64>,
    pub average: f64,
    pub maximum: i64,
    pub minimum: i64,
    pub modal_total: ModalTotal,
    pub median: f64,
    /// Sample standard deviation (0.0 for a single draw)
    pub std_dev: f64,
}

/// Draw `draws` independent score pairs, sampling each team's history
/// uniformly with replacement.
///
/// # Arguments
/// * `team_one` - Historical scores for the first team
/// * `team_two` - Historical scores for the second team
/// * `draws` - Number of draws to make
/// * `rng` - Random source; pass a seeded generator for reproducible draws
pub fn simulate<R: Rng + ?Sized>(
    team_one: &[i64],
    team_two: &[i64],
    draws: usize,
    rng: &mut R,
) -> Result<Vec<ScoreSample>> {
    if team_one.is_empty() {
        return Err(InvalidInputError::EmptyScores {
            team: "team 1".to_string(),
        });
    }
    if team_two.is_empty() {
        return Err(InvalidInputError::EmptyScores {
            team: "team 2".to_string(),
        });
    }
    if draws == 0 {
        return Err(InvalidInputError::NonPositiveDrawCount(0));
    }

    let samples: Vec<ScoreSample> = (0..draws)
        .map(|_| ScoreSample {
            team_one: team_one[rng.gen_range(0..team_one.len())],
            team_two: team_two[rng.gen_range(0..team_two.len())],
        })
        .collect();

    debug!(
        draws,
        team_one_scores = team_one.len(),
        team_two_scores = team_two.len(),
        "simulated score draws"
    );
    Ok(samples)
}

/// Convert a signed draw count from an untyped caller into a usable one.
pub fn draw_count(draws: i64) -> Result<usize> {
    if draws <= 0 {
        return Err(InvalidInputError::NonPositiveDrawCount(draws));
    }
    usize::try_from(draws).map_err(|_| InvalidInputError::NonPositiveDrawCount(draws))
}

/// Summarize the totals of a set of draws.
///
/// The modal total breaks frequency ties in favour of the lowest total.
pub fn summarize(samples: &[ScoreSample]) -> Result<SimulationResult> {
    if samples.is_empty() {
        return Err(InvalidInputError::NoSamples);
    }

    let totals = samples
        .iter()
        .map(ScoreSample::total)
        .collect::<Result<Vec<i64>>>()?;

    let mut maximum = totals[0];
    let mut minimum = totals[0];
    let mut sum: i128 = 0;
    let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
    for &total in &totals {
        maximum = maximum.max(total);
        minimum = minimum.min(total);
        sum += total as i128;
        *counts.entry(total).or_insert(0) += 1;
    }

    // Ascending iteration plus a strict comparison keeps the lowest value on ties
    let mut modal_total = ModalTotal {
        value: minimum,
        frequency: 0,
    };
    for (&value, &frequency) in &counts {
        if frequency > modal_total.frequency {
            modal_total = ModalTotal { value, frequency };
        }
    }

    let values: Vec<f64> = totals.iter().map(|&t| t as f64).collect();
    let std_dev = if values.len() > 1 {
        values.iter().std_dev()
    } else {
        0.0
    };
    let median = Data::new(values).median();

    Ok(SimulationResult {
        average: sum as f64 / totals.len() as f64,
        maximum,
        minimum,
        modal_total,
        median,
        std_dev,
        totals,
    })
}

/// Seedable driver that runs a full simulation and summary.
#[derive(Clone, Debug)]
pub struct ScoreSimulator {
    /// Number of draws per run
    pub draws: usize,

    /// Fixed seed for reproducible runs; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for ScoreSimulator {
    fn default() -> Self {
        ScoreSimulator {
            draws: DEFAULT_SIMULATIONS,
            seed: None,
        }
    }
}

impl ScoreSimulator {
    pub fn new(draws: usize, seed: Option<u64>) -> Self {
        ScoreSimulator { draws, seed }
    }

    /// Draw samples with this simulator's random source.
    pub fn draw(&self, team_one: &[i64], team_two: &[i64]) -> Result<Vec<ScoreSample>> {
        let mut rng = self.rng();
        simulate(team_one, team_two, self.draws, &mut rng)
    }

    /// Draw samples and summarize their totals.
    pub fn run(&self, team_one: &[i64], team_two: &[i64]) -> Result<SimulationResult> {
        let samples = self.draw(team_one, team_two)?;
        summarize(&samples)
    }

    fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}
