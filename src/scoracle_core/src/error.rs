//! Input validation errors.

/// Errors raised when an operation's input invariants do not hold.
///
/// Every operation validates up front and returns one of these before doing
/// any work; nothing is partially computed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInputError {
    #[error("no scores supplied for {team}")]
    EmptyScores { team: String },

    #[error("draw count must be positive, got {0}")]
    NonPositiveDrawCount(i64),

    #[error("cannot summarize an empty set of samples")]
    NoSamples,

    #[error("cannot analyze an empty set of totals")]
    NoTotals,

    #[error("at least 2 events are required to build parlays, got {0}")]
    TooFewEvents(usize),

    #[error("total of {team_one} and {team_two} does not fit in a 64-bit integer")]
    TotalOverflow { team_one: i64, team_two: i64 },

    #[error("invalid score {token:?} for {team}")]
    InvalidScore { team: String, token: String },
}

pub type Result<T> = std::result::Result<T, InvalidInputError>;
