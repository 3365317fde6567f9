//! Calldata.
//!
//! Encoding and strict decoding of the `(statement, proof)` pair accepted by `verify`.

use alloy_primitives::Bytes;
use alloy_sol_types::SolValue;

use crate::{
    errors::MalformedInput,
    sol::{Statement, VerifyCalldata},
};

/// ABI-encodes a statement and its proof into `verify` calldata.
#[must_use]
pub fn encode_calldata(statement: &Statement, proof: &[u8]) -> Vec<u8> {
    VerifyCalldata { statement: *statement, proof: Bytes::copy_from_slice(proof) }.abi_encode()
}

/// Decodes `verify` calldata into its statement and proof.
///
/// Only the canonical encoding is accepted: the decoded value must re-encode to exactly the
/// given bytes, so trailing data and dirty padding are rejected.
pub fn decode_calldata(calldata: &[u8]) -> Result<(Statement, Bytes), MalformedInput> {
    let decoded = VerifyCalldata::abi_decode(calldata)
        .map_err(|e| MalformedInput::CalldataDecodingFailed { reason: e.to_string() })?;

    let canonical = decoded.abi_encode();
    if canonical.as_slice() != calldata {
        return Err(MalformedInput::NonCanonicalCalldata {
            expected: canonical.len(),
            actual: calldata.len(),
        });
    }

    Ok((decoded.statement, decoded.proof))
}

/// Parses a hex string with an optional `0x` prefix, ignoring surrounding whitespace.
pub fn parse_hex(field: &'static str, input: &str) -> Result<Vec<u8>, MalformedInput> {
    let trimmed = input.trim();
    let stripped = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    hex::decode(stripped).map_err(|e| MalformedInput::InvalidHex { field, reason: e.to_string() })
}
