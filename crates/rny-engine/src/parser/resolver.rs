//! Exit resolution: turning what the player typed into one exit.

use crate::location::{Location, LocationId};

/// Outcome of resolving a direction against a location's exits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExitMatch {
    /// Exactly one exit matched.
    Found {
        /// The matching exit keyword.
        keyword: String,
        /// Where it leads.
        to: LocationId,
    },
    /// Nothing matched; lists every exit.
    NoMatch {
        /// All exit keywords of the location.
        valid: Vec<String>,
    },
    /// Several exits matched and none could be singled out.
    Ambiguous {
        /// The candidates.
        candidates: Vec<String>,
    },
}

/// Resolve a direction against the exits of a location.
///
/// 1. An exact (case-insensitive) keyword wins.
/// 2. Otherwise every keyword containing the direction is a candidate. One
///    candidate wins; several are narrowed to those containing every word of
///    the direction, and a single survivor wins.
/// 3. Anything else is a miss or an ambiguity.
pub fn resolve_exit(location: &Location, direction: &str) -> ExitMatch {
    let direction = direction.trim().to_lowercase();

    if let Some(exit) = location
        .exits
        .iter()
        .find(|e| e.keyword.to_lowercase() == direction)
    {
        return ExitMatch::Found {
            keyword: exit.keyword.clone(),
            to: exit.to,
        };
    }

    let candidates: Vec<_> = location
        .exits
        .iter()
        .filter(|e| !direction.is_empty() && e.keyword.to_lowercase().contains(&direction))
        .collect();
    log::debug!("exits matching '{direction}': {}", candidates.len());

    match candidates.as_slice() {
        [] => ExitMatch::NoMatch {
            valid: location.exits.iter().map(|e| e.keyword.clone()).collect(),
        },
        [exit] => ExitMatch::Found {
            keyword: exit.keyword.clone(),
            to: exit.to,
        },
        _ => {
            let words: Vec<&str> = direction.split_whitespace().collect();
            let full: Vec<_> = candidates
                .iter()
                .filter(|e| {
                    let keyword = e.keyword.to_lowercase();
                    words.iter().all(|w| keyword.contains(w))
                })
                .collect();
            match full.as_slice() {
                [exit] => ExitMatch::Found {
                    keyword: exit.keyword.clone(),
                    to: exit.to,
                },
                _ => ExitMatch::Ambiguous {
                    candidates: candidates.iter().map(|e| e.keyword.clone()).collect(),
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn junction() -> Location {
        Location::new(LocationId::DarkTunnel, "A junction.")
            .with_exit("enter store", LocationId::Store)
            .with_exit("enter bunker", LocationId::Bunker)
            .with_exit("north", LocationId::TunnelEntrance)
            .with_exit("out", LocationId::Ruins)
    }

    fn found(keyword: &str, to: LocationId) -> ExitMatch {
        ExitMatch::Found {
            keyword: keyword.to_string(),
            to,
        }
    }

    #[test]
    fn exact_match() {
        assert_eq!(
            resolve_exit(&junction(), "north"),
            found("north", LocationId::TunnelEntrance)
        );
        assert_eq!(
            resolve_exit(&junction(), "ENTER STORE"),
            found("enter store", LocationId::Store)
        );
    }

    #[test]
    fn single_substring_match() {
        assert_eq!(
            resolve_exit(&junction(), "store"),
            found("enter store", LocationId::Store)
        );
        assert_eq!(
            resolve_exit(&junction(), "nor"),
            found("north", LocationId::TunnelEntrance)
        );
    }

    #[test]
    fn ambiguous_substring() {
        assert_eq!(
            resolve_exit(&junction(), "enter"),
            ExitMatch::Ambiguous {
                candidates: vec!["enter store".to_string(), "enter bunker".to_string()]
            }
        );
    }

    #[test]
    fn no_match_lists_exits() {
        match resolve_exit(&junction(), "west") {
            ExitMatch::NoMatch { valid } => {
                assert_eq!(valid, vec!["enter store", "enter bunker", "north", "out"]);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn empty_direction_matches_nothing() {
        assert!(matches!(
            resolve_exit(&junction(), ""),
            ExitMatch::NoMatch { .. }
        ));
    }

    #[test]
    fn longer_direction_singles_out_exit() {
        let loc = Location::new(LocationId::Market, "Stalls.")
            .with_exit("enter scrapyard", LocationId::Scrapyard)
            .with_exit("enter scrapyard gate", LocationId::Bunker);

        assert_eq!(
            resolve_exit(&loc, "scrapyard gate"),
            found("enter scrapyard gate", LocationId::Bunker)
        );
        assert_eq!(
            resolve_exit(&loc, "scrapyard"),
            ExitMatch::Ambiguous {
                candidates: vec![
                    "enter scrapyard".to_string(),
                    "enter scrapyard gate".to_string()
                ]
            }
        );
    }
}
