use std::{error::Error, sync::Arc};

use certifiable_nft_deploy::config::NetworkProfile;
use ethers::{
    core::k256::ecdsa::SigningKey,
    middleware::SignerMiddleware,
    providers::{Http, Provider},
    signers::{LocalWallet, Signer, Wallet},
};

pub type EtherSigner = SignerMiddleware<Provider<Http>, Wallet<SigningKey>>;

/// signing client over the profile's first account key
pub fn get_deployer_ethers_client(
    profile: &NetworkProfile,
) -> Result<Arc<EtherSigner>, Box<dyn Error>> {
    let key = profile
        .accounts
        .first()
        .ok_or("no signing keys configured, set PRIVATE_KEY")?;

    let wallet: LocalWallet = key.parse()?;
    let wallet = wallet.with_chain_id(profile.chain_id);

    let provider = Provider::<Http>::try_from(&profile.rpc_url)?;
    Ok(Arc::new(SignerMiddleware::new(provider, wallet)))
}
