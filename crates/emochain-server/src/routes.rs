use axum::{
    Json, Router,
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use emochain_contract::{ClaimParams, encode_amount_le};
use emochain_detector::score_expressions;
use emochain_proof::{estimate_reward, generate_commitment, validate_claim, verify_commitment};
use emochain_types::api::{
    ClaimParamsResponse, ProofRequest, ProofResponse, RewardQuery, RewardResponse, ScoreRequest,
    ScoreResponse, SessionResponse, ValidateClaimRequest, ValidateClaimResponse, VerifyRequest,
    VerifyResponse, WalletResponse,
};
use emochain_types::models::new_session_id;
use emochain_types::{EmotionLabel, EmotionScore};
use emochain_wallet::{EnvWallet, WalletError, WalletProvider, connect_first};

pub fn router() -> Router {
    Router::new()
        .route("/api/session", post(create_session))
        .route("/api/wallet", get(connect_wallet))
        .route("/api/score", post(score))
        .route("/api/proof", post(generate_proof))
        .route("/api/proof/verify", post(verify_proof))
        .route("/api/claim/validate", post(validate))
        .route("/api/claim/params", post(claim_params))
        .route("/api/reward", get(reward))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

// ── Handlers ────────────────────────────────────────────────────────────

/// POST /api/session — mint a session id for a new scan.
async fn create_session() -> Json<SessionResponse> {
    Json(SessionResponse {
        session_id: new_session_id(),
    })
}

/// GET /api/wallet — connect through the provider discovery list.
async fn connect_wallet() -> Result<Json<WalletResponse>, StatusCode> {
    let providers: Vec<Box<dyn WalletProvider>> = vec![Box::new(EnvWallet::new())];

    match connect_first(&providers) {
        Ok(address) => Ok(Json(WalletResponse { address })),
        Err(WalletError::NotDetected) => Err(StatusCode::NOT_FOUND),
        Err(err) => {
            warn!("wallet connection failed: {}", err);
            Err(StatusCode::BAD_GATEWAY)
        }
    }
}

/// POST /api/score — expression probabilities to a 1..=5 score.
async fn score(Json(req): Json<ScoreRequest>) -> Json<ScoreResponse> {
    let score = score_expressions(&req.expressions);
    Json(ScoreResponse {
        score: score.value(),
        label: EmotionLabel::from_score(score).to_string(),
    })
}

/// POST /api/proof — commit a claim tuple.
async fn generate_proof(Json(req): Json<ProofRequest>) -> Result<Json<ProofResponse>, StatusCode> {
    let score = EmotionScore::from_f64(req.score).map_err(|_| StatusCode::BAD_REQUEST)?;

    let proof_hash = generate_commitment(score, req.timestamp, &req.address, &req.session_id);
    Ok(Json(ProofResponse { proof_hash }))
}

/// POST /api/proof/verify — does the digest bind to this tuple?
async fn verify_proof(Json(req): Json<VerifyRequest>) -> Json<VerifyResponse> {
    // A score outside the committable range cannot verify.
    let valid = EmotionScore::from_f64(req.score)
        .map(|score| verify_commitment(&req.proof_hash, score, req.timestamp, &req.address, &req.session_id))
        .unwrap_or(false);
    Json(VerifyResponse { valid })
}

/// POST /api/claim/validate — format/policy checks on the tuple.
async fn validate(Json(req): Json<ValidateClaimRequest>) -> Json<ValidateClaimResponse> {
    let result = validate_claim(
        req.score,
        req.timestamp,
        &req.proof_hash,
        &req.address,
        &req.session_id,
    );
    Json(match result {
        Ok(()) => ValidateClaimResponse {
            valid: true,
            error: None,
        },
        Err(err) => ValidateClaimResponse {
            valid: false,
            error: Some(err.to_string()),
        },
    })
}

/// POST /api/claim/params — validate, then encode the contract constructor
/// arguments.
async fn claim_params(Json(req): Json<ValidateClaimRequest>) -> Response {
    if let Err(err) = validate_claim(
        req.score,
        req.timestamp,
        &req.proof_hash,
        &req.address,
        &req.session_id,
    ) {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ValidateClaimResponse {
                valid: false,
                error: Some(err.to_string()),
            }),
        )
            .into_response();
    }

    // Range was just validated, so the conversion cannot fail.
    let Ok(score) = EmotionScore::from_f64(req.score) else {
        return StatusCode::BAD_REQUEST.into_response();
    };

    match ClaimParams::build(score, req.timestamp, &req.proof_hash, &req.address, &req.session_id) {
        Ok(params) => {
            let amount = estimate_reward(score);
            Json(ClaimParamsResponse {
                score: params.score,
                timestamp: params.timestamp,
                proof_hash: hex::encode(params.proof_hash),
                recipient: hex::encode(params.recipient),
                session_id: hex::encode(params.session_id),
                amount,
                amount_le: hex::encode(encode_amount_le(amount)),
            })
            .into_response()
        }
        Err(err) => {
            warn!("claim parameter encoding failed: {}", err);
            StatusCode::BAD_REQUEST.into_response()
        }
    }
}

/// GET /api/reward?score= — reward estimate for display.
async fn reward(Query(query): Query<RewardQuery>) -> Result<Json<RewardResponse>, StatusCode> {
    let score = EmotionScore::from_f64(query.score).map_err(|_| StatusCode::BAD_REQUEST)?;
    Ok(Json(RewardResponse {
        score: score.value(),
        amount: estimate_reward(score),
    }))
}
