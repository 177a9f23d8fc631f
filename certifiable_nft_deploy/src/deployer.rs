use std::{error::Error, sync::Arc};

use anyhow::anyhow;
use chrono::Utc;
use ethers::contract::ContractFactory;
use ethers::providers::Middleware;
use ethers::types::U256;

use crate::{
    artifact::ContractArtifact,
    config::NetworkProfile,
    types::{ConstructorArgs, DeploymentRecord},
};

pub struct ContractDeployer<S> {
    signer: Arc<S>,
    gas_price: Option<U256>,
}

impl<S> ContractDeployer<S>
where
    S: Middleware + 'static,
{
    pub fn new(signer: Arc<S>, profile: &NetworkProfile) -> Self {
        Self {
            signer,
            gas_price: profile.gas_price.map(U256::from),
        }
    }

    /// send the deployment transaction and block until it is mined
    pub async fn deploy(
        &self,
        artifact: &ContractArtifact,
        args: &ConstructorArgs,
    ) -> Result<DeploymentRecord, Box<dyn Error>> {
        let factory = ContractFactory::new(
            artifact.abi.clone(),
            artifact.bytecode.clone(),
            self.signer.clone(),
        );

        let mut deployment = factory
            .deploy((
                args.name.clone(),
                args.symbol.clone(),
                args.base_uri.clone(),
            ))
            .map_err(|e| anyhow!(e.to_string()))?;

        if let Some(gas_price) = self.gas_price {
            deployment.tx.set_gas_price(gas_price);
        }

        let (contract, receipt) = deployment
            .send_with_receipt()
            .await
            .map_err(|e| anyhow!(e.to_string()))?;

        Ok(DeploymentRecord {
            contract_name: artifact.contract_name.clone(),
            args: args.clone(),
            address: contract.address(),
            transaction_hash: receipt.transaction_hash,
            block_number: receipt.block_number,
            deployed_at: Utc::now(),
        })
    }
}
