use serde::{Deserialize, Serialize};

use crate::models::ExpressionScores;

// -- Session --

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub session_id: String,
}

// -- Wallet --

#[derive(Debug, Serialize)]
pub struct WalletResponse {
    pub address: String,
}

// -- Proof --

/// The claim tuple as submitted by the UI. Raw values on purpose: range and
/// format checks happen in the validator, not at the serde boundary.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProofRequest {
    pub score: f64,
    pub timestamp: i64,
    pub address: String,
    pub session_id: String,
}

#[derive(Debug, Serialize)]
pub struct ProofResponse {
    pub proof_hash: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VerifyRequest {
    pub proof_hash: String,
    pub score: f64,
    pub timestamp: i64,
    pub address: String,
    pub session_id: String,
}

#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub valid: bool,
}

// -- Claim validation --

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidateClaimRequest {
    pub score: f64,
    pub timestamp: i64,
    pub proof_hash: String,
    pub address: String,
    pub session_id: String,
}

#[derive(Debug, Serialize)]
pub struct ValidateClaimResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// -- Reward --

#[derive(Debug, Deserialize)]
pub struct RewardQuery {
    pub score: f64,
}

#[derive(Debug, Serialize)]
pub struct RewardResponse {
    pub score: f64,
    pub amount: u64,
}

// -- Scoring --

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScoreRequest {
    pub expressions: ExpressionScores,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub score: f64,
    pub label: String,
}

// -- Contract parameters --

/// Hex-encoded fixed-width constructor arguments for the contract layer.
#[derive(Debug, Serialize)]
pub struct ClaimParamsResponse {
    pub score: i64,
    pub timestamp: i64,
    pub proof_hash: String,
    pub recipient: String,
    pub session_id: String,
    pub amount: u64,
    pub amount_le: String,
}
