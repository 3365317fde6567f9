//! Ledger.
//!
//! This module contains the rollup ledger: a single committed state root that only advances
//! through batches whose proofs are accepted by the verifier.

use std::{
    fmt,
    sync::{Arc, PoisonError, RwLock},
};

use alloy_primitives::B256;
use tracing::{debug, info, warn};

use crate::{
    calldata::decode_calldata,
    errors::{MalformedInput, RollupError},
    sol::Statement,
    verifier::RollupVerifier,
};

/// The rollup ledger.
///
/// Holds exactly one committed state root. The root equals the `newRoot` of the last accepted
/// batch, or the genesis root if no batch has been accepted yet.
///
/// The verifier is bound at construction and cannot be replaced for the lifetime of the ledger.
pub struct Rollup<V: RollupVerifier + ?Sized> {
    /// The committed state root.
    ///
    /// Only [`Rollup::batch`] writes to it, while holding the write lock.
    committed_root: RwLock<B256>,
    /// The verifier every batch proof is checked against.
    verifier: Arc<V>,
}

impl<V: RollupVerifier + ?Sized> Rollup<V> {
    /// Creates a new [`Rollup`] whose genesis root is the zero digest.
    #[must_use]
    pub fn new(verifier: Arc<V>) -> Self {
        Self::with_genesis(verifier, B256::ZERO)
    }

    /// Creates a new [`Rollup`] starting from `genesis`.
    #[must_use]
    pub fn with_genesis(verifier: Arc<V>, genesis: B256) -> Self {
        debug!("genesis root: {genesis}");
        Self { committed_root: RwLock::new(genesis), verifier }
    }

    /// Returns the verifier bound to this ledger.
    #[must_use]
    pub fn verifier(&self) -> &Arc<V> {
        &self.verifier
    }

    /// Returns the committed state root.
    #[must_use]
    pub fn state_root(&self) -> B256 {
        *self.committed_root.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Advances the committed root from `current_root` to `new_root`.
    ///
    /// Fails with [`RollupError::StaleRoot`] if `current_root` is not the committed root and with
    /// [`RollupError::InvalidProof`] if the verifier rejects `proof` for the statement
    /// `(current_root, new_root, tx_commitment)`. The committed root is unchanged on failure.
    pub fn batch(
        &self,
        current_root: B256,
        new_root: B256,
        tx_commitment: B256,
        proof: &[u8],
    ) -> Result<(), RollupError> {
        self.batch_statement(&Statement::new(current_root, new_root, tx_commitment), proof)
    }

    /// Advances the committed root according to an already built [`Statement`].
    ///
    /// The proof is checked outside the lock so that verifications run in parallel. The
    /// precondition is checked again under the write lock, so of several batches built against
    /// the same root at most one commits and the others fail with [`RollupError::StaleRoot`].
    pub fn batch_statement(&self, statement: &Statement, proof: &[u8]) -> Result<(), RollupError> {
        let current_root = statement.current_root();
        let new_root = statement.new_root();
        info!("BATCH({current_root} -> {new_root})");

        debug!("check current root is not stale");
        ensure_current(self.state_root(), current_root)?;

        debug!("verify proof");
        if !self.verifier.check(statement, proof) {
            warn!("├── proof rejected for tx commitment {}", statement.tx_commitment());
            return Err(RollupError::InvalidProof);
        }

        debug!("commit new root");
        let mut committed = self.committed_root.write().unwrap_or_else(PoisonError::into_inner);
        ensure_current(*committed, current_root)?;
        *committed = new_root;
        info!("├── committed root: {new_root}");

        Ok(())
    }

    /// Decodes `verify` calldata and submits it as a batch.
    pub fn batch_calldata(&self, calldata: &[u8]) -> Result<(), RollupError> {
        let (statement, proof) = decode_calldata(calldata)?;
        self.batch_statement(&statement, &proof)
    }

    /// Checks calldata against the bound verifier without touching the ledger.
    pub fn verify(&self, calldata: &[u8]) -> Result<bool, MalformedInput> {
        self.verifier.verify(calldata)
    }
}

impl<V: RollupVerifier + ?Sized> fmt::Debug for Rollup<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rollup").field("committed_root", &self.state_root()).finish_non_exhaustive()
    }
}

fn ensure_current(committed: B256, submitted: B256) -> Result<(), RollupError> {
    if committed != submitted {
        warn!("├── stale root: committed={committed}, submitted={submitted}");
        return Err(RollupError::StaleRoot { committed, submitted });
    }
    Ok(())
}
