//! Claim parameter encoding for the reward contract.
//!
//! The contract layer consumes a fixed-width constructor layout; this crate
//! owns the conversions from the validated claim tuple into that layout.
//! Field widths (32-byte digest/session, 20-byte recipient, 8-byte LE
//! amount) are contract policy, not cryptographic guarantees.

pub mod cashaddr;
pub mod params;

pub use cashaddr::{CashAddrError, decode_hash160, fallback_hash160, hash160_or_fallback};
pub use params::{ClaimParams, EncodeError, bytes32_from_hex, encode_amount_le};

/// Deployment target network.
pub const NETWORK: &str = "chipnet";

/// Electrum endpoint for the deployment network.
pub const ELECTRUM_URL: &str = "https://chipnet.imaginary.cash";
