use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal engine failures. None of these are recoverable: a missing map file
/// aborts startup, and the others signal a broken invariant (the player and
/// the dragon must exist for as long as the encounter runs) or a catalog
/// mismatch.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to read map file {path}")]
    MapLoad {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no entity with symbol '{symbol}' on the map")]
    NotFound { symbol: char },

    #[error("no mobile entity on the map other than '{symbol}'")]
    NoOtherMobile { symbol: char },

    #[error("{kind} tier {tier} is outside the catalog ({len} entries)")]
    Configuration {
        kind: &'static str,
        tier: usize,
        len: usize,
    },
}

pub type Result<T, E = EngineError> = std::result::Result<T, E>;
