//! zkrollup Settlement Core Library.
//!
//! The rollup keeps a single committed state root on the settlement layer. The root only advances
//! through a batch `(currentRoot, newRoot, txCommitment, proof)` whose proof is accepted by a
//! [`verifier::RollupVerifier`]. The proving system itself lives outside this crate and is only
//! seen through that trait.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![warn(missing_docs)]

pub mod calldata;
pub mod commitment;
pub mod errors;
pub mod ledger;
pub mod sol;
pub mod verifier;
