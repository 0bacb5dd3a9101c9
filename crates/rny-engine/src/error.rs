//! Error types for the adventure engine.
//!
//! Gameplay never fails: bad commands and unmet preconditions come back as
//! ordinary responses. These errors only cover a map or a restored save that
//! breaks the engine's structural invariants.

use thiserror::Error;

use crate::generator::GeneratorPart;
use crate::item::ItemId;
use crate::location::LocationId;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Structural errors in a map or a restored session.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// An exit points at a location the map does not contain.
    #[error("exit '{keyword}' in {from} leads to unknown location {to}")]
    UnknownDestination {
        /// Location owning the exit.
        from: LocationId,
        /// The exit keyword.
        keyword: String,
        /// The missing destination.
        to: LocationId,
    },

    /// The player's location is not part of the map.
    #[error("location not in map: {0}")]
    LocationNotFound(LocationId),

    /// An item is present in more than one place.
    #[error("item {item} is in more than one place")]
    DuplicateItem {
        /// The duplicated item.
        item: ItemId,
    },

    /// The generator is marked built while parts are missing.
    #[error("generator is built but missing {}", join(missing))]
    IncompleteGenerator {
        /// Parts not attached.
        missing: Vec<GeneratorPart>,
    },
}

fn join(parts: &[GeneratorPart]) -> String {
    parts
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
