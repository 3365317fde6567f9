#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::items_after_statements)]

mod config;

use std::{fs, path::PathBuf, str::FromStr, sync::Arc};

use alloy_primitives::{Bytes, B256};
use alloy_signer::SignerSync;
use alloy_signer_local::PrivateKeySigner;
use anyhow::{anyhow, Context, Result};
use clap::Parser;
use dotenv::dotenv;
use serde::Deserialize;
use tabled::{settings::Style, Table, Tabled};
use tracing::info;

use zkr_rollup_core::{
    calldata::{encode_calldata, parse_hex},
    commitment::commit_transactions,
    ledger::Rollup,
    sol::Statement,
    verifier::{MockVerifier, RollupVerifier, SignatureVerifier},
};

use crate::config::{Settings, VerifierKind};

/// The CLI application that defines all available commands.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
enum Args {
    /// Check hex-encoded `verify` calldata against the configured verifier.
    Verify(VerifyArgs),
    /// Replay a JSON file of batches against a fresh ledger.
    Replay(ReplayArgs),
    /// Print the commitment to the given hex-encoded transactions.
    Commit(CommitArgs),
    /// Produce a proof accepted by the configured verifier.
    Prove(ProveArgs),
}

/// The arguments for the `verify` command.
#[derive(Debug, Clone, Parser)]
struct VerifyArgs {
    /// The file holding the hex-encoded calldata.
    #[arg(long)]
    calldata: PathBuf,
}

/// The arguments for the `replay` command.
#[derive(Debug, Clone, Parser)]
struct ReplayArgs {
    /// The JSON file holding the list of batches.
    #[arg(long)]
    batches: PathBuf,
}

/// The arguments for the `commit` command.
#[derive(Debug, Clone, Parser)]
struct CommitArgs {
    /// The hex-encoded transactions, in batch order.
    txs: Vec<String>,
}

/// The arguments for the `prove` command.
#[derive(Debug, Clone, Parser)]
struct ProveArgs {
    /// The root the transition starts from.
    #[arg(long)]
    current_root: B256,
    /// The root the transition ends at.
    #[arg(long)]
    new_root: B256,
    /// The commitment to the transactions of the batch.
    #[arg(long)]
    tx_commitment: B256,
    /// The private key of the trusted prover, required by the signature verifier.
    #[arg(long)]
    private_key: Option<String>,
    /// Print the full `verify` calldata instead of the bare proof.
    #[arg(long)]
    calldata: bool,
}

/// A batch as stored in a replay file.
#[derive(Debug, Deserialize)]
struct BatchRecord {
    #[serde(flatten)]
    statement: Statement,
    proof: Bytes,
}

/// The main entry point for the CLI.
fn main() -> Result<()> {
    // Load environment variables.
    dotenv().ok();

    // Load configuration.
    let settings = Settings::new()?;
    zkr_utils::init_logger(settings.log_format);

    // Parse the arguments.
    let cli = Args::parse();

    // Run the command.
    match cli {
        Args::Verify(args) => {
            let verifier = verifier(&settings)?;
            let input = fs::read_to_string(&args.calldata)
                .with_context(|| format!("failed to read {}", args.calldata.display()))?;
            let calldata = parse_hex("calldata", &input)?;

            let accepted = verifier.verify(&calldata)?;
            println!("{accepted}");
        }
        Args::Replay(args) => {
            let input = fs::read_to_string(&args.batches)
                .with_context(|| format!("failed to read {}", args.batches.display()))?;
            let batches: Vec<BatchRecord> = serde_json::from_str(&input)?;

            let rollup = Rollup::with_genesis(verifier(&settings)?, settings.genesis_root);
            info!("replaying {} batches from {}", batches.len(), rollup.state_root());

            // Create a table for the outcomes.
            #[derive(Tabled)]
            struct BatchOutcome {
                #[tabled(rename = "#")]
                index: usize,
                #[tabled(rename = "New Root")]
                new_root: B256,
                #[tabled(rename = "Outcome")]
                outcome: String,
            }

            let data: Vec<BatchOutcome> = batches
                .iter()
                .enumerate()
                .map(|(index, batch)| BatchOutcome {
                    index,
                    new_root: batch.statement.new_root(),
                    outcome: match rollup.batch_statement(&batch.statement, &batch.proof) {
                        Ok(()) => "committed".to_string(),
                        Err(e) => e.to_string(),
                    },
                })
                .collect();

            // Create and style the table.
            let mut table = Table::new(data);
            table.with(Style::modern());

            println!("\nReplay Results:");
            println!("{table}\n");
            println!("State root: {}", rollup.state_root());
        }
        Args::Commit(args) => {
            let txs = args
                .txs
                .iter()
                .map(|tx| parse_hex("tx", tx))
                .collect::<Result<Vec<_>, _>>()?;
            println!("{}", commit_transactions(&txs));
        }
        Args::Prove(args) => {
            let statement = Statement::new(args.current_root, args.new_root, args.tx_commitment);
            let proof = match settings.verifier {
                VerifierKind::Mock => MockVerifier::prove(&statement),
                VerifierKind::Signature => {
                    let key = args
                        .private_key
                        .as_deref()
                        .ok_or_else(|| anyhow!("--private-key is required to attest"))?;
                    let signer = PrivateKeySigner::from_str(key)?;
                    let domain = zkr_utils::get_domain(&settings.domain)?;
                    let hash = statement.signing_hash(&domain);
                    signer.sign_hash_sync(&hash)?.as_bytes().to_vec()
                }
            };

            let output = if args.calldata { encode_calldata(&statement, &proof) } else { proof };
            println!("0x{}", hex::encode(output));
        }
    }

    Ok(())
}

/// Builds the verifier selected by the settings.
fn verifier(settings: &Settings) -> Result<Arc<dyn RollupVerifier>> {
    match settings.verifier {
        VerifierKind::Mock => Ok(Arc::new(MockVerifier)),
        VerifierKind::Signature => {
            let signer = settings
                .trusted_signer
                .ok_or_else(|| anyhow!("ZKR_TRUSTED_SIGNER is required for attestations"))?;
            let domain = zkr_utils::get_domain(&settings.domain)?;
            let verifier = SignatureVerifier::new(signer, domain);
            info!("verifying attestations from {}", verifier.signer());
            Ok(Arc::new(verifier))
        }
    }
}
