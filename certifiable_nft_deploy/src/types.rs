use chrono::{DateTime, Utc};
use ethers::abi::Token;
use ethers::types::{Address, H256, U64};

/// constructor arguments of the CertifiableNFT contract
#[derive(Clone, Debug, PartialEq)]
pub struct ConstructorArgs {
    pub name: String,
    pub symbol: String,
    pub base_uri: String,
}

impl ConstructorArgs {
    pub fn tokens(&self) -> Vec<Token> {
        vec![
            Token::String(self.name.clone()),
            Token::String(self.symbol.clone()),
            Token::String(self.base_uri.clone()),
        ]
    }

    /// ABI encoding as hex without a 0x prefix, the form the explorer's
    /// verify endpoint expects
    pub fn abi_encoded(&self) -> String {
        hex::encode(ethers::abi::encode(&self.tokens()))
    }
}

/// outcome of one deployment run, printed and then discarded
#[derive(Clone, Debug)]
pub struct DeploymentRecord {
    pub contract_name: String,
    pub args: ConstructorArgs,
    pub address: Address,
    pub transaction_hash: H256,
    pub block_number: Option<U64>,
    pub deployed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::ConstructorArgs;

    fn args() -> ConstructorArgs {
        ConstructorArgs {
            name: "Graduation Diploma Course 20".to_owned(),
            symbol: "GDC20".to_owned(),
            base_uri: "https://example.com/ipfs".to_owned(),
        }
    }

    #[test]
    fn encoding_is_word_aligned_hex() {
        let encoded = args().abi_encoded();
        assert!(!encoded.starts_with("0x"));
        // 32-byte words, 64 hex chars each
        assert_eq!(encoded.len() % 64, 0);
    }

    #[test]
    fn encoding_starts_with_the_head_offset() {
        // three dynamic strings: first head word points past the
        // 3-word head section, i.e. offset 0x60
        let encoded = args().abi_encoded();
        let first_word = &encoded[..64];
        assert_eq!(first_word, format!("{:0>64}", "60"));
    }

    #[test]
    fn encoding_contains_the_symbol_bytes() {
        let encoded = args().abi_encoded();
        assert!(encoded.contains(&hex::encode("GDC20".as_bytes())));
    }
}
