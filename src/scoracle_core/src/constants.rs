/// Number of draws per simulation when the caller does not choose one
pub const DEFAULT_SIMULATIONS: usize = 10_000;

/// Maximum number of event slots offered for parlay generation
pub const MAX_EVENTS: usize = 10;

/// Number of optional "over" (and "under") threshold slots
pub const THRESHOLD_SLOTS: usize = 2;

/// Minimum number of events needed to form a 2-bet parlay
pub const PARLAY_LEGS: usize = 2;
