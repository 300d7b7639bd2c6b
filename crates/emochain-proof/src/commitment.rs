use emochain_types::EmotionScore;
use sha2::{Digest, Sha256};

/// Generate the SHA-256 commitment for a claim tuple.
///
/// The canonical preimage is the colon-joined tuple
/// `{score}:{timestamp}:{address}:{session_id}` with the score in its
/// canonical one-decimal rendering. Same tuple, same digest, always.
pub fn generate_commitment(
    score: EmotionScore,
    timestamp: i64,
    address: &str,
    session_id: &str,
) -> String {
    let preimage = format!("{}:{}:{}:{}", score, timestamp, address, session_id);

    let mut hasher = Sha256::new();
    hasher.update(preimage.as_bytes());
    hex::encode(hasher.finalize())
}

/// Regenerate the commitment from the tuple and compare with `digest`.
///
/// Plain equality: the digest is public, nothing here is secret.
pub fn verify_commitment(
    digest: &str,
    score: EmotionScore,
    timestamp: i64,
    address: &str,
    session_id: &str,
) -> bool {
    generate_commitment(score, timestamp, address, session_id) == digest
}
