//! Solidity types.
//!
//! This module contains the types shared with the settlement contract and the proving toolchain.

use alloy_primitives::{keccak256, B256};
use alloy_sol_types::{sol, Eip712Domain, SolStruct, SolValue};
use serde::{Deserialize, Serialize};

use crate::errors::MalformedInput;

sol! {
    /// @notice The statement a batch proof attests to.
    #[derive(Debug, Default, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    struct Statement {
        /// @notice The root the transition starts from.
        bytes32 currentRoot;
        /// @notice The root the transition ends at.
        bytes32 newRoot;
        /// @notice The commitment to the ordered transactions of the batch.
        bytes32 txCommitment;
    }

    /// @notice The calldata accepted by `verify`.
    #[derive(Debug, PartialEq, Eq)]
    struct VerifyCalldata {
        /// @notice The statement being proven.
        Statement statement;
        /// @notice The opaque proof bytes.
        bytes proof;
    }
}

impl Statement {
    /// Creates a new [`Statement`] for the transition `current_root -> new_root`.
    #[must_use]
    pub fn new(current_root: B256, new_root: B256, tx_commitment: B256) -> Self {
        Self { currentRoot: current_root, newRoot: new_root, txCommitment: tx_commitment }
    }

    /// Creates a [`Statement`] from raw byte slices, checking that every field is 32 bytes wide.
    pub fn from_slices(
        current_root: &[u8],
        new_root: &[u8],
        tx_commitment: &[u8],
    ) -> Result<Self, MalformedInput> {
        Ok(Self::new(
            word("currentRoot", current_root)?,
            word("newRoot", new_root)?,
            word("txCommitment", tx_commitment)?,
        ))
    }

    /// Returns the root the transition starts from.
    #[must_use]
    pub fn current_root(&self) -> B256 {
        self.currentRoot
    }

    /// Returns the root the transition ends at.
    #[must_use]
    pub fn new_root(&self) -> B256 {
        self.newRoot
    }

    /// Returns the transaction commitment.
    #[must_use]
    pub fn tx_commitment(&self) -> B256 {
        self.txCommitment
    }

    /// The keccak256 hash of the ABI-encoded statement.
    #[must_use]
    pub fn digest(&self) -> B256 {
        keccak256(self.abi_encode())
    }

    /// The EIP-712 signing hash of the statement under `domain`.
    #[must_use]
    pub fn signing_hash(&self, domain: &Eip712Domain) -> B256 {
        self.eip712_signing_hash(domain)
    }
}

fn word(field: &'static str, bytes: &[u8]) -> Result<B256, MalformedInput> {
    B256::try_from(bytes)
        .map_err(|_| MalformedInput::InvalidFieldLength { field, length: bytes.len() })
}
