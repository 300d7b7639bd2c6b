use emochain_types::EmotionScore;

use crate::cashaddr::hash160_or_fallback;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("invalid hex at byte {0}")]
    InvalidHex(usize),
}

/// Constructor arguments for the reward contract, in its fixed-width layout.
///
/// ```text
/// score       int      rounded emotion score
/// timestamp   int      seconds since epoch
/// proof_hash  bytes32  commitment digest
/// recipient   bytes20  hash160 of the wallet address
/// session_id  bytes32  de-hyphenated session UUID, zero-padded
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaimParams {
    pub score: i64,
    pub timestamp: i64,
    pub proof_hash: [u8; 32],
    pub recipient: [u8; 20],
    pub session_id: [u8; 32],
}

impl ClaimParams {
    /// Encode a validated claim tuple. Assumes the tuple already passed the
    /// parameter validator; only hex syntax can fail here.
    pub fn build(
        score: EmotionScore,
        timestamp: i64,
        proof_hash: &str,
        address: &str,
        session_id: &str,
    ) -> Result<Self, EncodeError> {
        Ok(Self {
            // The contract's score parameter is an int. Rounding the tenths
            // value is policy, recorded as such.
            score: score.value().round() as i64,
            timestamp,
            proof_hash: bytes32_from_hex(proof_hash)?,
            recipient: hash160_or_fallback(address),
            session_id: bytes32_from_hex(&session_id.replace('-', ""))?,
        })
    }
}

/// Parse a hex string into a 32-byte field: `0x` prefix stripped, input
/// truncated at 32 bytes, short input zero-padded on the right. Truncation
/// and padding are contract policy; the result is not assumed
/// collision-resistant.
pub fn bytes32_from_hex(hex_str: &str) -> Result<[u8; 32], EncodeError> {
    let clean = hex_str.strip_prefix("0x").unwrap_or(hex_str);

    let mut out = [0u8; 32];
    for (i, chunk) in clean.as_bytes().chunks(2).take(32).enumerate() {
        let pair = std::str::from_utf8(chunk).map_err(|_| EncodeError::InvalidHex(i))?;
        out[i] = u8::from_str_radix(pair, 16).map_err(|_| EncodeError::InvalidHex(i))?;
    }
    Ok(out)
}

/// Amount in satoshis as the contract's little-endian bytes8 parameter.
pub fn encode_amount_le(amount: u64) -> [u8; 8] {
    amount.to_le_bytes()
}
