use std::error::Error;
use std::time::Duration;

use ethers::types::Address;
use serde::Deserialize;

use crate::config::{CompilerSettings, ExplorerProfile};
use crate::types::ConstructorArgs;

const VERIFY_MODULE: &str = "contract";
const VERIFY_ACTION: &str = "verifysourcecode";
const CHECK_ACTION: &str = "checkverifystatus";
const CODE_FORMAT_SINGLE_FILE: &str = "solidity-single-file";

const STATUS_OK: &str = "1";
const PENDING_RESULT: &str = "Pending in queue";
const ALREADY_VERIFIED_RESULT: &str = "already verified";

const POLL_ATTEMPTS: u32 = 10;
const POLL_DELAY: Duration = Duration::from_secs(5);

/// everything `verifysourcecode` needs to reproduce and match the build
#[derive(Clone, Debug)]
pub struct VerificationRequest {
    pub contract_address: Address,
    /// fully qualified `source:Contract` name
    pub contract_name: String,
    /// flattened solidity source
    pub source_code: String,
    pub compiler: CompilerSettings,
    pub constructor_args: ConstructorArgs,
}

impl VerificationRequest {
    fn form_params(&self, api_key: &str) -> Vec<(&'static str, String)> {
        let optimization_used = if self.compiler.optimizer_enabled {
            "1"
        } else {
            "0"
        };
        vec![
            ("apikey", api_key.to_owned()),
            ("module", VERIFY_MODULE.to_owned()),
            ("action", VERIFY_ACTION.to_owned()),
            // debug fmt of an address is the full '0x..' hex encoding
            ("contractaddress", format!("{:?}", self.contract_address)),
            ("sourceCode", self.source_code.clone()),
            ("codeformat", CODE_FORMAT_SINGLE_FILE.to_owned()),
            ("contractname", self.contract_name.clone()),
            ("compilerversion", self.compiler.solc_version.clone()),
            ("optimizationUsed", optimization_used.to_owned()),
            ("runs", self.compiler.optimizer_runs.to_string()),
            // the API really does spell the field this way
            ("constructorArguements", self.constructor_args.abi_encoded()),
        ]
    }
}

/// `{status, message, result}` envelope every explorer answer comes in
#[derive(Debug, Deserialize)]
pub struct ExplorerResponse {
    pub status: String,
    pub message: String,
    pub result: String,
}

impl ExplorerResponse {
    fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }

    fn is_pending(&self) -> bool {
        self.result.contains(PENDING_RESULT)
    }

    fn is_already_verified(&self) -> bool {
        self.result.to_lowercase().contains(ALREADY_VERIFIED_RESULT)
    }
}

pub struct ExplorerVerifier {
    profile: ExplorerProfile,
    http: reqwest::Client,
}

impl ExplorerVerifier {
    pub fn new(profile: ExplorerProfile) -> Self {
        Self {
            profile,
            http: reqwest::Client::default(),
        }
    }

    /// submit the source and wait for the explorer's verdict
    pub async fn verify(&self, request: &VerificationRequest) -> Result<String, Box<dyn Error>> {
        let submission = self.submit(request).await?;
        if submission.is_already_verified() {
            return Ok(submission.result);
        }
        if !submission.is_ok() {
            return Err(format!("verification rejected: {}", submission.result).into());
        }
        // on acceptance `result` is the guid of the queued job
        self.wait_for_verdict(&submission.result).await
    }

    async fn submit(&self, request: &VerificationRequest) -> Result<ExplorerResponse, Box<dyn Error>> {
        let res = self
            .http
            .post(&self.profile.api_url)
            .form(&request.form_params(&self.profile.api_key))
            .send()
            .await?
            .json::<ExplorerResponse>()
            .await?;
        Ok(res)
    }

    async fn check_status(&self, guid: &str) -> Result<ExplorerResponse, Box<dyn Error>> {
        let res = self
            .http
            .get(&self.profile.api_url)
            .query(&[
                ("apikey", self.profile.api_key.as_str()),
                ("module", VERIFY_MODULE),
                ("action", CHECK_ACTION),
                ("guid", guid),
            ])
            .send()
            .await?
            .json::<ExplorerResponse>()
            .await?;
        Ok(res)
    }

    async fn wait_for_verdict(&self, guid: &str) -> Result<String, Box<dyn Error>> {
        for _ in 0..POLL_ATTEMPTS {
            tokio::time::sleep(POLL_DELAY).await;

            let status = self.check_status(guid).await?;
            if status.is_pending() {
                continue;
            }
            if status.is_ok() || status.is_already_verified() {
                return Ok(status.result);
            }
            return Err(format!("verification failed: {}", status.result).into());
        }
        Err(format!("verification still pending after {POLL_ATTEMPTS} status checks").into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> VerificationRequest {
        VerificationRequest {
            contract_address: "0x5FbDB2315678afecb367f032d93F642f64180aa3"
                .parse()
                .unwrap(),
            contract_name: "contracts/CertifiableNFT.sol:CertifiableNFT".to_owned(),
            source_code: "pragma solidity ^0.8.20;".to_owned(),
            compiler: CompilerSettings::default(),
            constructor_args: ConstructorArgs {
                name: "Graduation Diploma Course 20".to_owned(),
                symbol: "GDC20".to_owned(),
                base_uri: "https://example.com/ipfs".to_owned(),
            },
        }
    }

    #[test]
    fn form_carries_the_verify_fields() {
        let params = request().form_params("some-api-key");
        let get = |key: &str| {
            params
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.clone())
                .unwrap()
        };

        assert_eq!(get("module"), "contract");
        assert_eq!(get("action"), "verifysourcecode");
        assert_eq!(get("codeformat"), "solidity-single-file");
        assert_eq!(
            get("contractaddress"),
            "0x5fbdb2315678afecb367f032d93f642f64180aa3"
        );
        assert_eq!(get("compilerversion"), "v0.8.20+commit.a1b79de6");
        assert_eq!(get("optimizationUsed"), "1");
        assert_eq!(get("runs"), "999999");
        // misspelled on purpose, that is the API's field name
        assert!(!get("constructorArguements").is_empty());
    }

    #[test]
    fn encoded_constructor_args_have_no_hex_prefix() {
        let params = request().form_params("k");
        let (_, encoded) = params
            .iter()
            .find(|(k, _)| *k == "constructorArguements")
            .unwrap();
        assert!(!encoded.starts_with("0x"));
    }

    #[test]
    fn parses_the_response_envelope() {
        let res: ExplorerResponse = serde_json::from_str(
            r#"{"status":"1","message":"OK","result":"mwgu3vnmaucpu7xmwnzwfaxedif6"}"#,
        )
        .unwrap();
        assert!(res.is_ok());
        assert!(!res.is_pending());
        assert_eq!(res.result, "mwgu3vnmaucpu7xmwnzwfaxedif6");
    }

    #[test]
    fn pending_status_keeps_polling() {
        let res: ExplorerResponse = serde_json::from_str(
            r#"{"status":"0","message":"NOTOK","result":"Pending in queue"}"#,
        )
        .unwrap();
        assert!(!res.is_ok());
        assert!(res.is_pending());
    }

    #[test]
    fn already_verified_counts_as_success() {
        let res: ExplorerResponse = serde_json::from_str(
            r#"{"status":"0","message":"NOTOK","result":"Contract source code already verified"}"#,
        )
        .unwrap();
        assert!(res.is_already_verified());
    }
}
