//! Verifiers.
//!
//! The rollup delegates proof checking to a [`RollupVerifier`]. Production deployments plug in a
//! real proof-system backend; tests plug in [`MockVerifier`].

use std::sync::Arc;

use alloy_primitives::{Address, Signature, B256};
use alloy_sol_types::Eip712Domain;
use tracing::debug;

use crate::{calldata::decode_calldata, errors::MalformedInput, sol::Statement};

/// A stateless proof checker.
///
/// Implementations must be deterministic: for a fixed `(statement, proof)` the result never
/// changes, and checking has no side effects.
pub trait RollupVerifier: Send + Sync {
    /// Returns whether `proof` attests to exactly `statement`.
    ///
    /// A proof that is well-formed calldata but fails to parse as the backend's proof format is a
    /// reject, not an error.
    fn check(&self, statement: &Statement, proof: &[u8]) -> bool;

    /// Decodes `calldata` into a statement and proof and checks them.
    fn verify(&self, calldata: &[u8]) -> Result<bool, MalformedInput> {
        let (statement, proof) = decode_calldata(calldata)?;
        Ok(self.check(&statement, &proof))
    }
}

impl<V: RollupVerifier + ?Sized> RollupVerifier for Arc<V> {
    fn check(&self, statement: &Statement, proof: &[u8]) -> bool {
        (**self).check(statement, proof)
    }
}

impl<V: RollupVerifier + ?Sized> RollupVerifier for &V {
    fn check(&self, statement: &Statement, proof: &[u8]) -> bool {
        (**self).check(statement, proof)
    }
}

/// A verifier that accepts a proof iff it is the statement digest.
///
/// Has no cryptographic soundness; a proof for any statement is trivially computable.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockVerifier;

impl MockVerifier {
    /// Returns the proof this verifier accepts for `statement`.
    #[must_use]
    pub fn prove(statement: &Statement) -> Vec<u8> {
        statement.digest().to_vec()
    }
}

impl RollupVerifier for MockVerifier {
    fn check(&self, statement: &Statement, proof: &[u8]) -> bool {
        proof == statement.digest().as_slice()
    }
}

/// A verifier that accepts attestations from a single trusted prover.
///
/// The proof is a 65-byte secp256k1 signature over the EIP-712 signing hash of the statement.
#[derive(Debug, Clone)]
pub struct SignatureVerifier {
    /// The address whose signatures are accepted.
    signer: Address,
    /// The domain the statement is signed under.
    domain: Eip712Domain,
}

impl SignatureVerifier {
    /// Creates a new [`SignatureVerifier`] trusting `signer` under `domain`.
    #[must_use]
    pub fn new(signer: Address, domain: Eip712Domain) -> Self {
        Self { signer, domain }
    }

    /// Returns the trusted signer.
    #[must_use]
    pub fn signer(&self) -> Address {
        self.signer
    }

    /// Returns the hash a prover must sign to attest to `statement`.
    #[must_use]
    pub fn signing_hash(&self, statement: &Statement) -> B256 {
        statement.signing_hash(&self.domain)
    }
}

impl RollupVerifier for SignatureVerifier {
    fn check(&self, statement: &Statement, proof: &[u8]) -> bool {
        let hash = self.signing_hash(statement);
        match prehash_recover(&hash, proof) {
            Ok(recovered) => recovered == self.signer,
            Err(e) => {
                debug!("attestation rejected: {e}");
                false
            }
        }
    }
}

/// Recovers the signer of a raw 65-byte signature over a prehashed message.
fn prehash_recover(
    hash: &B256,
    signature: &[u8],
) -> Result<Address, alloy_primitives::SignatureError> {
    let signature = Signature::from_raw(signature)?;
    signature.recover_address_from_prehash(hash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calldata::encode_calldata;
    use alloy_signer_local::PrivateKeySigner;
    use alloy_signer::SignerSync;
    use alloy_sol_types::eip712_domain;

    fn statement() -> Statement {
        Statement::new(B256::ZERO, B256::repeat_byte(0x11), B256::repeat_byte(0x22))
    }

    fn domain() -> Eip712Domain {
        eip712_domain! {
            name: "zkrollup",
            version: "1",
            chain_id: 31337,
        }
    }

    #[test]
    fn test_mock_verifier_accepts_digest() {
        let proof = MockVerifier::prove(&statement());
        assert!(MockVerifier.check(&statement(), &proof));
        assert!(MockVerifier.check(&statement(), &proof));
    }

    #[test]
    fn test_mock_verifier_rejects_other_statement() {
        let proof = MockVerifier::prove(&statement());
        let other = Statement::new(B256::ZERO, B256::repeat_byte(0x12), B256::repeat_byte(0x22));
        assert!(!MockVerifier.check(&other, &proof));
        assert!(!MockVerifier.check(&statement(), &proof[..31]));
        assert!(!MockVerifier.check(&statement(), &[]));
    }

    #[test]
    fn test_verify_decodes_calldata() {
        let proof = MockVerifier::prove(&statement());
        let calldata = encode_calldata(&statement(), &proof);
        assert_eq!(MockVerifier.verify(&calldata), Ok(true));

        let calldata = encode_calldata(&statement(), b"garbage");
        assert_eq!(MockVerifier.verify(&calldata), Ok(false));

        assert!(MockVerifier.verify(b"garbage").is_err());
    }

    #[test]
    fn test_shared_handle_is_a_verifier() {
        let verifier = Arc::new(MockVerifier);
        let proof = MockVerifier::prove(&statement());
        assert!(verifier.check(&statement(), &proof));

        let dynamic: Arc<dyn RollupVerifier> = verifier;
        assert!(dynamic.check(&statement(), &proof));
    }

    #[test]
    fn test_signature_verifier_accepts_trusted_signer() {
        let prover = PrivateKeySigner::random();
        let verifier = SignatureVerifier::new(prover.address(), domain());

        let signature = prover.sign_hash_sync(&verifier.signing_hash(&statement())).unwrap();
        assert!(verifier.check(&statement(), &signature.as_bytes()));
    }

    #[test]
    fn test_signature_verifier_rejects_untrusted_signer() {
        let prover = PrivateKeySigner::random();
        let impostor = PrivateKeySigner::random();
        let verifier = SignatureVerifier::new(prover.address(), domain());

        let signature = impostor.sign_hash_sync(&verifier.signing_hash(&statement())).unwrap();
        assert!(!verifier.check(&statement(), &signature.as_bytes()));
    }

    #[test]
    fn test_signature_verifier_rejects_other_domain() {
        let prover = PrivateKeySigner::random();
        let verifier = SignatureVerifier::new(prover.address(), domain());
        let foreign = eip712_domain! {
            name: "zkrollup",
            version: "1",
            chain_id: 1,
        };

        let signature = prover.sign_hash_sync(&statement().signing_hash(&foreign)).unwrap();
        assert!(!verifier.check(&statement(), &signature.as_bytes()));
    }

    #[test]
    fn test_signature_verifier_rejects_unparseable_proof() {
        let verifier = SignatureVerifier::new(Address::ZERO, domain());
        assert!(!verifier.check(&statement(), &[0u8; 64]));
        assert!(!verifier.check(&statement(), &[]));
    }
}
