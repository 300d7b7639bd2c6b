/// The cashaddr base32 alphabet.
pub const CASHADDR_CHARSET: &str = "qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Network prefixes an address may carry.
pub const KNOWN_PREFIXES: [&str; 3] = ["bitcoincash:", "bchtest:", "bchreg:"];

/// P2PKH/P2SH cashaddr payload length in base32 symbols.
const PAYLOAD_LEN: usize = 42;

/// Shape check for a Bitcoin Cash address: optional known network prefix,
/// then exactly 42 symbols from the cashaddr alphabet. Checksum verification
/// belongs to the contract layer's decoder, not here.
pub fn is_valid_cash_address(address: &str) -> bool {
    let lower = address.to_ascii_lowercase();
    let payload = KNOWN_PREFIXES
        .iter()
        .find_map(|p| lower.strip_prefix(p))
        .unwrap_or(lower.as_str());

    payload.len() == PAYLOAD_LEN && payload.chars().all(|c| CASHADDR_CHARSET.contains(c))
}
