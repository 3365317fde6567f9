#![allow(dead_code)]

use std::sync::Arc;

use alloy_primitives::{b256, keccak256, B256};
use alloy_signer_local::PrivateKeySigner;
use alloy_sol_types::{eip712_domain, Eip712Domain};
use zkr_rollup_core::{
    commitment::EMPTY_TX_COMMITMENT,
    errors::RollupError,
    ledger::Rollup,
    sol::Statement,
    verifier::MockVerifier,
};

/// The root produced by the first batch of the reference deployment.
pub const FIRST_ROOT: B256 =
    b256!("2bae4558bd55acffed88900450df52615f0f101574fcbac3d106bb407a196065");

/// The transaction commitment of the first batch of the reference deployment.
pub const FIRST_TX_COMMITMENT: B256 =
    b256!("1b5b9ccb3e8d006a5230de9bda23ff91edc794d4f56410560830b418528e446c");

/// Creates a signer from a string key.
///
/// The key is hashed using keccak256 to generate the private key.
#[must_use]
pub fn signer(key: &str) -> PrivateKeySigner {
    PrivateKeySigner::from_bytes(&keccak256(key)).unwrap()
}

/// The EIP-712 domain used by attestation tests.
#[must_use]
pub fn domain() -> Eip712Domain {
    eip712_domain! {
        name: "zkrollup",
        version: "1",
        chain_id: 31337,
    }
}

/// Creates a ledger with the mock verifier starting from `genesis`.
#[must_use]
pub fn mock_rollup(genesis: B256) -> Rollup<MockVerifier> {
    Rollup::with_genesis(Arc::new(MockVerifier), genesis)
}

/// Flips every bit of the byte at `index`.
#[must_use]
pub fn corrupt(proof: &[u8], index: usize) -> Vec<u8> {
    let mut corrupted = proof.to_vec();
    corrupted[index] ^= 0xff;
    corrupted
}

/// A single scenario: a ledger starting at `genesis` receives one batch.
#[derive(Debug, Clone)]
pub struct Fixture {
    /// The scenario name, reported on failure.
    pub name: &'static str,
    /// The genesis root of the ledger.
    pub genesis: B256,
    /// The submitted statement.
    pub statement: Statement,
    /// The submitted proof.
    pub proof: Vec<u8>,
    /// The expected outcome of the batch.
    pub expected: Result<(), RollupError>,
}

impl Fixture {
    /// The root the ledger must hold after the batch.
    #[must_use]
    pub fn expected_root(&self) -> B256 {
        match self.expected {
            Ok(()) => self.statement.newRoot,
            Err(_) => self.genesis,
        }
    }
}

/// The scenario table driving the ledger tests.
#[must_use]
pub fn fixtures() -> Vec<Fixture> {
    let first = Statement::new(B256::ZERO, FIRST_ROOT, FIRST_TX_COMMITMENT);
    let first_proof = MockVerifier::prove(&first);

    let second = Statement::new(FIRST_ROOT, B256::repeat_byte(0x33), EMPTY_TX_COMMITMENT);
    let identity = Statement::new(FIRST_ROOT, FIRST_ROOT, FIRST_TX_COMMITMENT);

    vec![
        Fixture {
            name: "first batch from zero genesis",
            genesis: B256::ZERO,
            statement: first,
            proof: first_proof.clone(),
            expected: Ok(()),
        },
        Fixture {
            name: "first batch with a flipped proof byte",
            genesis: B256::ZERO,
            statement: first,
            proof: corrupt(&first_proof, 0),
            expected: Err(RollupError::InvalidProof),
        },
        Fixture {
            name: "first batch with a flipped last proof byte",
            genesis: B256::ZERO,
            statement: first,
            proof: corrupt(&first_proof, 31),
            expected: Err(RollupError::InvalidProof),
        },
        Fixture {
            name: "first batch with an empty proof",
            genesis: B256::ZERO,
            statement: first,
            proof: Vec::new(),
            expected: Err(RollupError::InvalidProof),
        },
        Fixture {
            name: "valid proof against a ledger that already moved",
            genesis: FIRST_ROOT,
            statement: first,
            proof: first_proof.clone(),
            expected: Err(RollupError::StaleRoot { committed: FIRST_ROOT, submitted: B256::ZERO }),
        },
        Fixture {
            name: "empty transaction set",
            genesis: FIRST_ROOT,
            statement: second,
            proof: MockVerifier::prove(&second),
            expected: Ok(()),
        },
        Fixture {
            name: "identity transition",
            genesis: FIRST_ROOT,
            statement: identity,
            proof: MockVerifier::prove(&identity),
            expected: Ok(()),
        },
        Fixture {
            name: "proof for another statement",
            genesis: FIRST_ROOT,
            statement: identity,
            proof: MockVerifier::prove(&second),
            expected: Err(RollupError::InvalidProof),
        },
    ]
}
