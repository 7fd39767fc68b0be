//! Error types for the tween core.

use serde::{Deserialize, Serialize};

use crate::ids::CycleId;
use crate::value::ValueKind;

/// Typed error surface for cycle configuration and per-tick stepping.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum TweenError {
    /// Segment duration must be finite and strictly positive
    #[error("Invalid segment duration: {duration}")]
    InvalidDuration { duration: f32 },

    /// A cycle needs at least one target value
    #[error("Value list is empty")]
    EmptySequence,

    /// Delta time must be finite and non-negative
    #[error("Invalid delta time: {delta}")]
    InvalidDelta { delta: f32 },

    /// Every value in a cycle must share one kind
    #[error("Mixed value kinds: expected {expected:?}, found {found:?}")]
    MixedKinds {
        expected: ValueKind,
        found: ValueKind,
    },

    /// Stored-cycle JSON could not be parsed
    #[error("Parse error: {reason}")]
    Parse { reason: String },

    /// Engine call with an id that is not registered
    #[error("Cycle not found: {id:?}")]
    CycleNotFound { id: CycleId },
}

impl TweenError {
    /// Coarse category for log lines and counters.
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            TweenError::InvalidDuration { .. } | TweenError::EmptySequence => "config",
            TweenError::InvalidDelta { .. } => "input",
            TweenError::MixedKinds { .. } | TweenError::Parse { .. } => "data",
            TweenError::CycleNotFound { .. } => "engine",
        }
    }

    /// True for errors that can only come from a bad configuration,
    /// never from runtime input.
    #[inline]
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            TweenError::InvalidDuration { .. } | TweenError::EmptySequence
        )
    }
}

impl From<serde_json::Error> for TweenError {
    fn from(err: serde_json::Error) -> Self {
        TweenError::Parse {
            reason: err.to_string(),
        }
    }
}
