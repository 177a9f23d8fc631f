mod config;
mod ethers_client;

use anyhow::{anyhow, Context};
use certifiable_nft_deploy::{
    artifact::ContractArtifact,
    config::DeployConfig,
    deployer::ContractDeployer,
    types::ConstructorArgs,
    verifier::{ExplorerVerifier, VerificationRequest},
};
use ethers::signers::Signer;

use crate::ethers_client::get_deployer_ethers_client;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let deploy_config = DeployConfig::load().map_err(|e| anyhow!(e.to_string()))?;
    println!(
        "Using network {} ({})",
        deploy_config.network.name, deploy_config.network.rpc_url
    );

    let signer =
        get_deployer_ethers_client(&deploy_config.network).map_err(|e| anyhow!(e.to_string()))?;
    println!(
        "Deploying CertifiableNFT contract with the account: {:?}",
        signer.signer().address()
    );

    let args = ConstructorArgs {
        name: config::COLLECTION_NAME.to_owned(),
        symbol: config::COLLECTION_SYMBOL.to_owned(),
        base_uri: config::COLLECTION_BASE_URI.to_owned(),
    };

    let artifact =
        ContractArtifact::load(config::artifact_path()).map_err(|e| anyhow!(e.to_string()))?;

    let deployer = ContractDeployer::new(signer, &deploy_config.network);
    let record = deployer
        .deploy(&artifact, &args)
        .await
        .map_err(|e| anyhow!(e.to_string()))?;
    println!(
        "CertifiableNFT contract deployed at address: {:?}",
        record.address
    );
    println!(
        "  tx {:?} mined in block {} at {}",
        record.transaction_hash,
        record.block_number.unwrap_or_default(),
        record.deployed_at.to_rfc3339()
    );

    let Some(explorer) = deploy_config.explorer else {
        println!(
            "No explorer configured for network {}, skipping source verification",
            deploy_config.network.name
        );
        return Ok(());
    };

    let source_path = config::contract_source_path();
    let source_code = std::fs::read_to_string(&source_path)
        .with_context(|| format!("could not read contract source {source_path}"))?;

    println!("Submitting source verification to {}", explorer.api_url);
    let verifier = ExplorerVerifier::new(explorer);
    let request = VerificationRequest {
        contract_address: record.address,
        contract_name: artifact.fully_qualified_name(),
        source_code,
        compiler: deploy_config.compiler.clone(),
        constructor_args: args,
    };
    let verdict = verifier
        .verify(&request)
        .await
        .map_err(|e| anyhow!(e.to_string()))?;
    println!("Verification result: {verdict}");

    Ok(())
}
