//! Errors returned by engine operations.
//!
//! These are the expected, recoverable failures of normal input flow.
//! Callers branch on them; nothing in the engine panics on bad input.

use thiserror::Error;

use crate::core::RoundId;
use crate::rules::InvalidScore;

/// Why a round could not be committed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CommitError {
    #[error(transparent)]
    Invalid(#[from] InvalidScore),

    #[error("target and suit must be set before adding a round")]
    TargetNotSet,

    #[error("no round ids left in this game")]
    RoundIdsExhausted,
}

/// Why a committed round could not be amended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum AmendError {
    #[error("no round with id {0}")]
    UnknownRound(RoundId),

    #[error(transparent)]
    Invalid(#[from] InvalidScore),
}
