use std::{error::Error, fs, path::Path};

use ethers::abi::Abi;
use ethers::types::Bytes;
use serde::Deserialize;

/// compiled contract artifact as emitted by the solidity toolchain
/// ({contractName, sourceName, abi, bytecode})
#[derive(Clone, Debug, Deserialize)]
pub struct ContractArtifact {
    #[serde(rename = "contractName")]
    pub contract_name: String,
    #[serde(rename = "sourceName")]
    pub source_name: String,
    pub abi: Abi,
    pub bytecode: Bytes,
}

impl ContractArtifact {
    pub fn from_json(json: &str) -> Result<Self, Box<dyn Error>> {
        let artifact: Self = serde_json::from_str(json)?;
        if artifact.bytecode.is_empty() {
            // interfaces and abstract contracts compile to empty bytecode
            return Err(format!(
                "artifact for {} has no creation bytecode, it cannot be deployed",
                artifact.contract_name
            )
            .into());
        }
        Ok(artifact)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| format!("could not read artifact {}: {e}", path.display()))?;
        Self::from_json(&json)
    }

    /// `sourceName:contractName`, the fully qualified form verification
    /// endpoints use to pick the contract out of the source
    pub fn fully_qualified_name(&self) -> String {
        format!("{}:{}", self.source_name, self.contract_name)
    }
}
