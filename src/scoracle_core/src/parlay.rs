use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

use crate::constants::PARLAY_LEGS;
use crate::error::{InvalidInputError, Result};

/// A 2-bet parlay: two distinct events, in the order they were paired.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ParlayPair {
    pub first: String,
    pub second: String,
}

impl ParlayPair {
    /// True if both pairs hold the same two events, in either orientation.
    pub fn same_events(&self, other: &ParlayPair) -> bool {
        (self.first == other.first && self.second == other.second)
            || (self.first == other.second && self.second == other.first)
    }
}

impl fmt::Display for ParlayPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.first, self.second)
    }
}

/// Number of unordered pairs among `n` events, C(n, 2).
pub fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Generate every unordered pair of events exactly once, in a balanced order.
///
/// Walks the event list cyclically. Each visit to a base event scans offsets
/// 1..n for the first partner it has not yet been paired with, emits that
/// pair, and moves on to the next base. Consecutive pairs therefore rotate
/// through the events instead of listing all of one event's pairs together.
/// For A, B, C, D the order is A/B, B/C, C/D, D/A, A/C, B/D.
///
/// Pairs are tracked by position, so repeated names still produce C(n, 2)
/// pairs.
pub fn generate_balanced_pairs<S: AsRef<str>>(events: &[S]) -> Result<Vec<ParlayPair>> {
    let n = events.len();
    if n < PARLAY_LEGS {
        return Err(InvalidInputError::TooFewEvents(n));
    }

    let total = pair_count(n);
    let mut used: HashSet<(usize, usize)> = HashSet::with_capacity(total);
    let mut pairs = Vec::with_capacity(total);

    // Every remaining pair is reachable from either of its bases, so each full
    // cycle emits at least one pair until all are used.
    for base in (0..n).cycle() {
        if pairs.len() == total {
            break;
        }
        for offset in 1..n {
            let partner = (base + offset) % n;
            let key = (base.min(partner), base.max(partner));
            if used.insert(key) {
                pairs.push(ParlayPair {
                    first: events[base].as_ref().to_string(),
                    second: events[partner].as_ref().to_string(),
                });
                break;
            }
        }
    }

    debug!(events = n, pairs = pairs.len(), "generated balanced parlays");
    Ok(pairs)
}
