use std::sync::LazyLock;

use alloy_sol_types::{eip712_domain, Eip712Domain};
use anyhow::Result;

/// Returns the attestation domain for the given domain name.
pub fn get_domain(name: &str) -> Result<Eip712Domain> {
    match name {
        "ZKR_MAINNET_V1_DOMAIN" => Ok(ZKR_MAINNET_V1_DOMAIN.clone()),
        "ZKR_DEVNET_V1_DOMAIN" => Ok(ZKR_DEVNET_V1_DOMAIN.clone()),
        _ => Err(anyhow::anyhow!("Invalid domain name: {}", name)),
    }
}

/// The [`Eip712Domain`] batch attestations are signed under on mainnet.
pub static ZKR_MAINNET_V1_DOMAIN: LazyLock<Eip712Domain> = LazyLock::new(|| {
    eip712_domain! {
        name: "zkrollup",
        version: "1.0.0",
        chain_id: 1,
    }
});

/// The [`Eip712Domain`] batch attestations are signed under on a local devnet.
pub static ZKR_DEVNET_V1_DOMAIN: LazyLock<Eip712Domain> = LazyLock::new(|| {
    eip712_domain! {
        name: "zkrollup",
        version: "1.0.0",
        chain_id: 31337,
    }
});
