/// fixed constructor arguments of the certificate collection
pub const COLLECTION_NAME: &str = "Graduation Diploma Course 20";
pub const COLLECTION_SYMBOL: &str = "GDC20";
pub const COLLECTION_BASE_URI: &str = "https://amber-parallel-falcon-815.mypinata.cloud/ipfs";

const ARTIFACT_PATH_ENV_VAR: &str = "ARTIFACT_PATH";
const SOURCE_PATH_ENV_VAR: &str = "CONTRACT_SOURCE_PATH";

const DEFAULT_ARTIFACT_PATH: &str =
    "artifacts/contracts/CertifiableNFT.sol/CertifiableNFT.json";
const DEFAULT_SOURCE_PATH: &str = "contracts/CertifiableNFT.sol";

pub fn artifact_path() -> String {
    std::env::var(ARTIFACT_PATH_ENV_VAR).unwrap_or_else(|_| DEFAULT_ARTIFACT_PATH.to_owned())
}

/// flattened source handed to the explorer for verification
pub fn contract_source_path() -> String {
    std::env::var(SOURCE_PATH_ENV_VAR).unwrap_or_else(|_| DEFAULT_SOURCE_PATH.to_owned())
}
