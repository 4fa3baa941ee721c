use std::fmt;

use font_kit::error::{FontLoadingError, SelectionError};
use thiserror::Error;

use crate::source::FontSource;

/// Failure reported by a text backend while constructing a font or asset.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("font loading failed: {0}")]
    FontLoading(#[from] FontLoadingError),

    #[error("font selection failed: {0}")]
    Selection(#[from] SelectionError),

    #[error("text backend error: {0}")]
    Backend(String),
}

/// Why a candidate produced no font. None of these are faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissReason {
    FileNotFound,
    NotConstructible,
    NoAsset,
    MissingGlyph(char),
}

impl fmt::Display for MissReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissReason::FileNotFound => f.write_str("file not found"),
            MissReason::NotConstructible => f.write_str("no font could be constructed"),
            MissReason::NoAsset => f.write_str("font asset creation returned nothing"),
            MissReason::MissingGlyph(c) => write!(f, "no glyph for {:?}", c),
        }
    }
}

/// Per-candidate outcome inside the resolver. Never escapes
/// `FontResolver::resolve_first_available`.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("skipped {candidate}: {reason}")]
    SourceMiss {
        candidate: FontSource,
        reason: MissReason,
    },

    #[error("failed to load {candidate}: {error}")]
    UnexpectedFailure {
        candidate: FontSource,
        #[source]
        error: LoadError,
    },
}

impl ResolveError {
    pub fn is_miss(&self) -> bool {
        matches!(self, ResolveError::SourceMiss { .. })
    }
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("fallback font list is unavailable")]
    FallbackListUnavailable,

    #[error("default font slot is not writable")]
    DefaultNotWritable,
}
