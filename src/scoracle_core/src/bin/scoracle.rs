use anyhow::Result;
use clap::builder::BoolishValueParser;
use clap::{ArgAction, Args, Parser, Subcommand};
use serde::Serialize;
use tracing::{info, warn};

use scoracle_core::input::{filter_events, parse_scores, positive_thresholds};
use scoracle_core::report::{parlay_lines, simulation_lines, threshold_lines};
use scoracle_core::{
    analyze, generate_balanced_pairs, ParlayPair, ScoreSimulator, SimulationResult,
    ThresholdReport, DEFAULT_SIMULATIONS, PARLAY_LEGS, THRESHOLD_SLOTS,
};

/// Sports score simulation and 2-bet parlay generator
#[derive(Parser, Debug)]
#[command(name = "scoracle", version, about)]
struct Cli {
    /// Print results as JSON instead of text
    #[arg(
        long,
        global = true,
        env = "SCORACLE_JSON",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Simulate combined totals from each team's past scores
    Simulate(SimulateArgs),
    /// Generate every 2-event parlay in an evenly distributed order
    Parlays(ParlayArgs),
}

#[derive(Args, Debug)]
struct SimulateArgs {
    /// First team name
    #[arg(long, default_value = "Team 1")]
    team1: String,

    /// Second team name
    #[arg(long, default_value = "Team 2")]
    team2: String,

    /// Scores for the first team, separated by spaces or commas
    #[arg(long)]
    team1_scores: String,

    /// Scores for the second team, separated by spaces or commas
    #[arg(long)]
    team2_scores: String,

    /// "Over" line to evaluate (repeatable, up to 2; non-positive values are ignored)
    #[arg(long = "over")]
    overs: Vec<i64>,

    /// "Under" line to evaluate (repeatable, up to 2; non-positive values are ignored)
    #[arg(long = "under")]
    unders: Vec<i64>,

    /// Number of simulated draws
    #[arg(long, env = "SCORACLE_SIMULATIONS", default_value_t = DEFAULT_SIMULATIONS)]
    simulations: usize,

    /// Seed for reproducible draws
    #[arg(long, env = "SCORACLE_SEED")]
    seed: Option<u64>,
}

#[derive(Args, Debug)]
struct ParlayArgs {
    /// Game events (blank entries are skipped, at most 10 are used)
    events: Vec<String>,
}

impl SimulateArgs {
    fn validate(&self) -> Result<()> {
        if self.overs.len() > THRESHOLD_SLOTS {
            anyhow::bail!("at most {} --over lines may be given", THRESHOLD_SLOTS);
        }
        if self.unders.len() > THRESHOLD_SLOTS {
            anyhow::bail!("at most {} --under lines may be given", THRESHOLD_SLOTS);
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct SimulationOutput<'a> {
    team1: &'a str,
    team2: &'a str,
    result: &'a SimulationResult,
    thresholds: &'a ThresholdReport,
}

#[derive(Serialize)]
struct ParlayOutput<'a> {
    events: &'a [String],
    parlays: &'a [ParlayPair],
}

fn run_simulate(args: &SimulateArgs, json: bool) -> Result<()> {
    args.validate()?;

    let team1_scores = parse_scores(&args.team1, &args.team1_scores)?;
    let team2_scores = parse_scores(&args.team2, &args.team2_scores)?;

    let simulator = ScoreSimulator::new(args.simulations, args.seed);
    let result = simulator.run(&team1_scores, &team2_scores)?;
    info!(
        draws = result.totals.len(),
        average = result.average,
        "simulation complete"
    );

    let overs = positive_thresholds(&args.overs);
    let unders = positive_thresholds(&args.unders);
    let thresholds = analyze(&result.totals, &overs, &unders)?;

    if json {
        let output = SimulationOutput {
            team1: &args.team1,
            team2: &args.team2,
            result: &result,
            thresholds: &thresholds,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for line in simulation_lines(&result, Some((args.team1.as_str(), args.team2.as_str()))) {
            println!("{}", line);
        }
        for line in threshold_lines(&thresholds) {
            println!("{}", line);
        }
    }
    Ok(())
}

const TOO_FEW_EVENTS: &str = "Please enter at least 2 game events to generate parlays.";

/// Non-blank events to pair, or `None` when there are too few to form a parlay.
fn parlay_events(args: &ParlayArgs) -> Option<Vec<String>> {
    let events = filter_events(&args.events);
    (events.len() >= PARLAY_LEGS).then_some(events)
}

fn run_parlays(args: &ParlayArgs, json: bool) -> Result<()> {
    let Some(events) = parlay_events(args) else {
        warn!("not enough events for parlays");
        println!("{}", TOO_FEW_EVENTS);
        return Ok(());
    };

    let pairs = generate_balanced_pairs(&events)?;
    info!(events = events.len(), parlays = pairs.len(), "parlays generated");

    if json {
        let output = ParlayOutput {
            events: &events,
            parlays: &pairs,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for line in parlay_lines(&pairs) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays clean for results
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Command::Simulate(args) => run_simulate(args, cli.json),
        Command::Parlays(args) => run_parlays(args, cli.json),
    }
}
