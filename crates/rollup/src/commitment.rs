//! Transaction Commitments.
//!
//! This module contains the reference commitment operators use to summarize the ordered
//! transactions of a batch into a `txCommitment`. The ledger itself treats the commitment as
//! opaque bytes.
//!
//! Leaves are `keccak256(0x00 || tx)` and inner nodes are `keccak256(0x01 || left || right)`, so a
//! leaf can never be confused with a node. A node without a sibling is paired with the zero
//! digest.

use alloy_primitives::{Keccak256, B256};
use serde::{Deserialize, Serialize};

/// The commitment to an empty transaction set.
pub const EMPTY_TX_COMMITMENT: B256 = B256::ZERO;

const LEAF_PREFIX: u8 = 0x00;
const NODE_PREFIX: u8 = 0x01;

/// Computes the commitment to an ordered list of transactions.
pub fn commit_transactions<T: AsRef<[u8]>>(txs: &[T]) -> B256 {
    TransactionTree::new(txs).root()
}

/// A merkle tree over the ordered transactions of a batch.
#[derive(Debug, Clone)]
pub struct TransactionTree {
    /// Every layer of the tree, leaves first. The last layer holds the root.
    layers: Vec<Vec<B256>>,
}

/// A proof that a transaction sits at a given position of a [`TransactionTree`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InclusionProof {
    /// The position of the transaction in the batch.
    pub index: usize,
    /// The sibling hashes from the leaf layer up to the root.
    pub siblings: Vec<B256>,
}

impl TransactionTree {
    /// Builds the tree for `txs`.
    pub fn new<T: AsRef<[u8]>>(txs: &[T]) -> Self {
        let leaves: Vec<B256> = txs.iter().map(|tx| hash_leaf(tx.as_ref())).collect();

        let mut layers = vec![leaves];
        loop {
            let layer = &layers[layers.len() - 1];
            if layer.len() <= 1 {
                break;
            }

            let next = layer
                .chunks(2)
                .map(|pair| hash_node(&pair[0], pair.get(1).unwrap_or(&B256::ZERO)))
                .collect();
            layers.push(next);
        }

        Self { layers }
    }

    /// Returns the number of transactions in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.first().map_or(0, Vec::len)
    }

    /// Returns true if the tree commits to no transactions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the commitment, [`EMPTY_TX_COMMITMENT`] for an empty tree.
    #[must_use]
    pub fn root(&self) -> B256 {
        self.layers.last().and_then(|layer| layer.first()).copied().unwrap_or(EMPTY_TX_COMMITMENT)
    }

    /// Builds the inclusion proof for the transaction at `index`.
    #[must_use]
    pub fn proof(&self, index: usize) -> Option<InclusionProof> {
        if index >= self.len() {
            return None;
        }

        let mut siblings = Vec::with_capacity(self.layers.len() - 1);
        let mut position = index;
        for layer in &self.layers[..self.layers.len() - 1] {
            siblings.push(layer.get(position ^ 1).copied().unwrap_or(B256::ZERO));
            position >>= 1;
        }

        Some(InclusionProof { index, siblings })
    }
}

impl InclusionProof {
    /// Checks that `tx` sits at [`InclusionProof::index`] of the tree committed to by `root`.
    #[must_use]
    pub fn verify(&self, root: B256, tx: &[u8]) -> bool {
        if self.siblings.len() < usize::BITS as usize && self.index >> self.siblings.len() != 0 {
            return false;
        }

        let mut node = hash_leaf(tx);
        let mut position = self.index;
        for sibling in &self.siblings {
            node = if position & 1 == 0 {
                hash_node(&node, sibling)
            } else {
                hash_node(sibling, &node)
            };
            position >>= 1;
        }

        node == root
    }
}

fn hash_leaf(tx: &[u8]) -> B256 {
    let mut hasher = Keccak256::new();
    hasher.update([LEAF_PREFIX]);
    hasher.update(tx);
    hasher.finalize()
}

fn hash_node(left: &B256, right: &B256) -> B256 {
    let mut hasher = Keccak256::new();
    hasher.update([NODE_PREFIX]);
    hasher.update(left);
    hasher.update(right);
    hasher.finalize()
}
