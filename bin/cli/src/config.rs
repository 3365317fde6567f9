use alloy_primitives::{Address, B256};
use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use zkr_utils::LogFormat;

/// The verifier backend the ledger is bound to.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum VerifierKind {
    /// Accepts the keccak256 digest of the statement as its proof.
    Mock,
    /// Accepts EIP-712 attestations signed by `trusted_signer`.
    Signature,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub log_format: LogFormat,
    pub verifier: VerifierKind,
    pub trusted_signer: Option<Address>,
    pub domain: String,
    pub genesis_root: B256,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("log_format", "Minimal")?
            .set_default("verifier", "Mock")?
            .set_default("domain", "ZKR_DEVNET_V1_DOMAIN")?
            .set_default("genesis_root", B256::ZERO.to_string())?
            .add_source(Environment::with_prefix("ZKR"))
            .build()?;

        config.try_deserialize()
    }
}
