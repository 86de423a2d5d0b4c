//! Caller-side input preparation.
//!
//! The computations take already-typed values. These helpers turn raw form or
//! command-line text into those values the way the score form does: delimited
//! score lists, positive-only over/under lines, and non-blank event slots.

use crate::constants::MAX_EVENTS;
use crate::error::{InvalidInputError, Result};

/// Parse a list of scores separated by whitespace and/or commas.
///
/// An empty list is rejected, as is any token that is not an integer.
pub fn parse_scores(team: &str, text: &str) -> Result<Vec<i64>> {
    let scores = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<i64>().map_err(|_| InvalidInputError::InvalidScore {
                team: team.to_string(),
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<i64>>>()?;

    if scores.is_empty() {
        return Err(InvalidInputError::EmptyScores {
            team: team.to_string(),
        });
    }
    Ok(scores)
}

/// Keep only positive over/under lines; zero marks an unused slot.
pub fn positive_thresholds(lines: &[i64]) -> Vec<i64> {
    lines.iter().copied().filter(|&line| line > 0).collect()
}

/// Drop blank event slots and keep at most [`MAX_EVENTS`] events.
pub fn filter_events<I, S>(slots: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    slots
        .into_iter()
        .filter_map(|slot| {
            let event = slot.as_ref().trim();
            (!event.is_empty()).then(|| event.to_string())
        })
        .take(MAX_EVENTS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_space_separated() {
        assert_eq!(parse_scores("Celtics", "102 98  111").unwrap(), vec![102, 98, 111]);
    }

    #[test]
    fn test_parse_comma_separated() {
        assert_eq!(parse_scores("Celtics", "102,98, 111,").unwrap(), vec![102, 98, 111]);
    }

    #[test]
    fn test_parse_negative_scores() {
        assert_eq!(parse_scores("A", "-3 4").unwrap(), vec![-3, 4]);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_scores("Knicks", "100 abc").unwrap_err();
        assert_eq!(
            err,
            InvalidInputError::InvalidScore {
                team: "Knicks".to_string(),
                token: "abc".to_string()
            }
        );
    }

    #[test]
    fn test_parse_rejects_blank() {
        let err = parse_scores("Knicks", "  , ").unwrap_err();
        assert_eq!(err, InvalidInputError::EmptyScores { team: "Knicks".to_string() });
    }

    #[test]
    fn test_positive_thresholds() {
        assert_eq!(positive_thresholds(&[0, 215, -4, 220]), vec![215, 220]);
        assert!(positive_thresholds(&[0, 0]).is_empty());
    }

    #[test]
    fn test_filter_events_drops_blanks() {
        let slots = ["Chiefs -3", "", "  ", "Bills ML"];
        assert_eq!(filter_events(slots), vec!["Chiefs -3", "Bills ML"]);
    }

    #[test]
    fn test_filter_events_caps_slots() {
        let slots: Vec<String> = (0..15).map(|i| format!("E{}", i)).collect();
        let events = filter_events(&slots);
        assert_eq!(events.len(), MAX_EVENTS);
        assert_eq!(events[9], "E9");
    }
}
