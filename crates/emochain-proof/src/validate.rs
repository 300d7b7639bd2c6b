use chrono::Utc;

/// Seconds a claim timestamp may lag behind the validation clock.
pub const FRESHNESS_WINDOW_SECS: i64 = 300;

/// Minimum wallet address length accepted by the format check. Anything
/// shorter than a legacy base58 address cannot be a real address; full
/// decoding happens in the contract layer.
const MIN_ADDRESS_LEN: usize = 26;

/// Minimum session identifier length (session ids are UUID-shaped).
const MIN_SESSION_LEN: usize = 10;

/// Why a claim tuple was rejected. Exactly one kind per call: checks run in
/// a fixed order and the first violated rule wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ClaimError {
    #[error("emotion score must be between 1 and 5")]
    OutOfRange,
    #[error("timestamp must be within the last {FRESHNESS_WINDOW_SECS} seconds")]
    StaleOrFuture,
    #[error("proof hash must be 64 hex characters")]
    MalformedDigest,
    #[error("invalid wallet address")]
    InvalidAddress,
    #[error("invalid session id")]
    InvalidSession,
}

/// Validate a claim tuple against the current clock.
pub fn validate_claim(
    score: f64,
    timestamp: i64,
    digest: &str,
    address: &str,
    session_id: &str,
) -> Result<(), ClaimError> {
    validate_claim_at(score, timestamp, digest, address, session_id, Utc::now().timestamp())
}

/// Validate a claim tuple against an explicit `now` (seconds since epoch).
///
/// Format and policy checks only. Whether the digest actually matches the
/// tuple is a separate concern, see [`crate::verify_commitment`].
pub fn validate_claim_at(
    score: f64,
    timestamp: i64,
    digest: &str,
    address: &str,
    session_id: &str,
    now: i64,
) -> Result<(), ClaimError> {
    // NaN fails both comparisons and lands here too.
    if !(score >= 1.0 && score <= 5.0) {
        return Err(ClaimError::OutOfRange);
    }

    if timestamp < now - FRESHNESS_WINDOW_SECS || timestamp > now {
        return Err(ClaimError::StaleOrFuture);
    }

    let hex_part = digest.strip_prefix("0x").unwrap_or(digest);
    if hex_part.len() != 64 || !hex_part.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ClaimError::MalformedDigest);
    }

    if address.len() < MIN_ADDRESS_LEN {
        return Err(ClaimError::InvalidAddress);
    }

    if session_id.len() < MIN_SESSION_LEN {
        return Err(ClaimError::InvalidSession);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000;
    const DIGEST: &str = "0cc89f68be0dfc338b4352707f2b5b347d4496cc8995a907057875606126ad50";
    const ADDRESS: &str = "bitcoincash:qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6a";
    const SESSION: &str = "123e4567-e89b-12d3-a456-426614174000";

    fn check(score: f64, ts: i64, digest: &str, addr: &str, session: &str) -> Result<(), ClaimError> {
        validate_claim_at(score, ts, digest, addr, session, NOW)
    }

    #[test]
    fn accepts_a_well_formed_tuple() {
        assert_eq!(check(4.2, NOW, DIGEST, ADDRESS, SESSION), Ok(()));
    }

    #[test]
    fn score_range_edges() {
        assert_eq!(check(0.9, NOW, DIGEST, ADDRESS, SESSION), Err(ClaimError::OutOfRange));
        assert_eq!(check(5.1, NOW, DIGEST, ADDRESS, SESSION), Err(ClaimError::OutOfRange));
        assert_eq!(check(f64::NAN, NOW, DIGEST, ADDRESS, SESSION), Err(ClaimError::OutOfRange));
        assert_eq!(check(1.0, NOW, DIGEST, ADDRESS, SESSION), Ok(()));
        assert_eq!(check(5.0, NOW, DIGEST, ADDRESS, SESSION), Ok(()));
    }

    #[test]
    fn freshness_window_edges() {
        assert_eq!(check(4.2, NOW - 301, DIGEST, ADDRESS, SESSION), Err(ClaimError::StaleOrFuture));
        assert_eq!(check(4.2, NOW - 300, DIGEST, ADDRESS, SESSION), Ok(()));
        assert_eq!(check(4.2, NOW, DIGEST, ADDRESS, SESSION), Ok(()));
        assert_eq!(check(4.2, NOW + 1, DIGEST, ADDRESS, SESSION), Err(ClaimError::StaleOrFuture));
    }

    #[test]
    fn digest_shape() {
        let prefixed = format!("0x{}", "a".repeat(64));
        assert_eq!(check(4.2, NOW, &prefixed, ADDRESS, SESSION), Ok(()));

        // Uppercase hex is acceptable; the shape check is case-insensitive.
        let upper = "A".repeat(64);
        assert_eq!(check(4.2, NOW, &upper, ADDRESS, SESSION), Ok(()));

        let bad = format!("zz{}", "a".repeat(62));
        assert_eq!(check(4.2, NOW, &bad, ADDRESS, SESSION), Err(ClaimError::MalformedDigest));

        let short = "a".repeat(63);
        assert_eq!(check(4.2, NOW, &short, ADDRESS, SESSION), Err(ClaimError::MalformedDigest));

        assert_eq!(check(4.2, NOW, "", ADDRESS, SESSION), Err(ClaimError::MalformedDigest));
    }

    #[test]
    fn address_and_session_shape() {
        assert_eq!(check(4.2, NOW, DIGEST, "", SESSION), Err(ClaimError::InvalidAddress));
        assert_eq!(check(4.2, NOW, DIGEST, "tooshort", SESSION), Err(ClaimError::InvalidAddress));
        assert_eq!(check(4.2, NOW, DIGEST, ADDRESS, ""), Err(ClaimError::InvalidSession));
        assert_eq!(check(4.2, NOW, DIGEST, ADDRESS, "short"), Err(ClaimError::InvalidSession));
    }

    #[test]
    fn first_violated_rule_wins() {
        // Everything is wrong; score is reported.
        assert_eq!(check(9.0, NOW + 500, "zz", "", ""), Err(ClaimError::OutOfRange));
        // Score fine; timestamp is reported before the digest.
        assert_eq!(check(3.0, NOW + 500, "zz", "", ""), Err(ClaimError::StaleOrFuture));
    }
}
