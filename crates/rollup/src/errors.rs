//! Errors.
//!
//! This module contains error types that can be emitted by the crate.

use alloy_primitives::B256;
use thiserror::Error;

/// Structurally invalid input handed to the verifier or the ledger.
///
/// This is always a caller bug and is never the result of checking a proof.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum MalformedInput {
    #[error("Calldata decoding failed: {reason}")]
    CalldataDecodingFailed { reason: String },

    #[error("Calldata is not the canonical encoding (canonical length {expected}, given {actual})")]
    NonCanonicalCalldata { expected: usize, actual: usize },

    #[error("Invalid {field} length: expected 32 bytes, got {length}")]
    InvalidFieldLength { field: &'static str, length: usize },

    #[error("Invalid hex for {field}: {reason}")]
    InvalidHex { field: &'static str, reason: String },
}

/// The error that can be emitted during [`crate::ledger::Rollup::batch`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum RollupError {
    #[error("Malformed input: {0}")]
    MalformedInput(#[from] MalformedInput),

    #[error("Stale root: committed={committed}, submitted={submitted}")]
    StaleRoot { committed: B256, submitted: B256 },

    #[error("Invalid proof")]
    InvalidProof,
}

impl RollupError {
    /// Whether the batch may succeed if rebuilt against a fresh root.
    ///
    /// Only [`RollupError::StaleRoot`] is retryable. A rejected proof fails again on every
    /// resubmission and malformed input is never fixed by retrying.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, RollupError::StaleRoot { .. })
    }
}
