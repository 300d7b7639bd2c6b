//! Proof core: commitment generation/verification, claim parameter
//! validation, and reward estimation.
//!
//! A commitment binds (score, timestamp, wallet address, session id) into a
//! single SHA-256 digest. The validator enforces format and policy on the
//! tuple; the cryptographic binding check is the separate
//! [`verify_commitment`] call.

pub mod commitment;
pub mod reward;
pub mod validate;

pub use commitment::{generate_commitment, verify_commitment};
pub use reward::{BASE_REWARD, estimate_reward};
pub use validate::{ClaimError, FRESHNESS_WINDOW_SECS, validate_claim, validate_claim_at};
