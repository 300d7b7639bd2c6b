use sha2::{Digest, Sha256};

/// The cashaddr base32 alphabet, index = symbol value.
const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Prefix assumed when the address carries none.
const DEFAULT_PREFIX: &str = "bitcoincash";

/// Checksum length in base32 symbols (40-bit BCH checksum).
const CHECKSUM_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CashAddrError {
    #[error("character {0:?} is not in the cashaddr alphabet")]
    InvalidChar(char),
    #[error("payload too short")]
    TooShort,
    #[error("checksum mismatch")]
    BadChecksum,
    #[error("non-zero padding bits")]
    BadPadding,
    #[error("payload is {0} bytes, expected a 20-byte hash")]
    NotHash160(usize),
}

/// Decode a cashaddr P2PKH/P2SH address to its 20-byte hash160.
///
/// Full base32 decode with checksum verification. The leading version byte
/// is dropped; only the hash matters to the contract layer.
pub fn decode_hash160(address: &str) -> Result<[u8; 20], CashAddrError> {
    let lower = address.to_ascii_lowercase();
    let (prefix, payload) = match lower.split_once(':') {
        Some((prefix, payload)) => (prefix, payload),
        None => (DEFAULT_PREFIX, lower.as_str()),
    };

    let mut data = Vec::with_capacity(payload.len());
    for ch in payload.chars() {
        let value = CHARSET
            .iter()
            .position(|&c| c == ch as u8)
            .ok_or(CashAddrError::InvalidChar(ch))?;
        data.push(value as u8);
    }
    if data.len() <= CHECKSUM_LEN {
        return Err(CashAddrError::TooShort);
    }

    // Checksum input: prefix chars masked to 5 bits, a zero separator, then
    // the payload symbols.
    let mut values: Vec<u8> = prefix.bytes().map(|b| b & 0x1f).collect();
    values.push(0);
    values.extend_from_slice(&data);
    if polymod(&values) != 0 {
        return Err(CashAddrError::BadChecksum);
    }

    let bytes = five_to_eight(&data[..data.len() - CHECKSUM_LEN])?;
    if bytes.len() != 21 {
        return Err(CashAddrError::NotHash160(bytes.len().saturating_sub(1)));
    }

    let mut hash = [0u8; 20];
    hash.copy_from_slice(&bytes[1..]);
    Ok(hash)
}

/// Degraded path when the address does not decode: first 20 bytes of the
/// SHA-256 of the de-prefixed address string. Stable and fixed-width, but
/// NOT a real hash160; downstream treats it as an opaque recipient id.
pub fn fallback_hash160(address: &str) -> [u8; 20] {
    let clean = address.split_once(':').map_or(address, |(_, rest)| rest);

    let mut hasher = Sha256::new();
    hasher.update(clean.as_bytes());
    let digest = hasher.finalize();

    let mut hash = [0u8; 20];
    hash.copy_from_slice(&digest[..20]);
    hash
}

/// Proper decode when possible, hashed fallback otherwise.
pub fn hash160_or_fallback(address: &str) -> [u8; 20] {
    decode_hash160(address).unwrap_or_else(|_| fallback_hash160(address))
}

/// The cashaddr BCH checksum. Returns zero for valid input.
fn polymod(values: &[u8]) -> u64 {
    let mut c: u64 = 1;
    for &d in values {
        let c0 = (c >> 35) as u8;
        c = ((c & 0x0007_ffff_ffff) << 5) ^ u64::from(d);
        if c0 & 0x01 != 0 {
            c ^= 0x98_f2bc_8e61;
        }
        if c0 & 0x02 != 0 {
            c ^= 0x79_b76d_99e2;
        }
        if c0 & 0x04 != 0 {
            c ^= 0xf3_3e5f_b3c4;
        }
        if c0 & 0x08 != 0 {
            c ^= 0xae_2eab_e2a8;
        }
        if c0 & 0x10 != 0 {
            c ^= 0x1e_4f43_e470;
        }
    }
    c ^ 1
}

/// Regroup 5-bit symbols into bytes; the trailing padding bits must be zero.
fn five_to_eight(data: &[u8]) -> Result<Vec<u8>, CashAddrError> {
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let mut out = Vec::with_capacity(data.len() * 5 / 8);

    for &value in data {
        acc = (acc << 5) | u32::from(value);
        bits += 5;
        while bits >= 8 {
            bits -= 8;
            out.push((acc >> bits) as u8);
        }
    }
    if bits >= 5 || (acc & ((1 << bits) - 1)) != 0 {
        return Err(CashAddrError::BadPadding);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS: &str = "bitcoincash:qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6a";
    const HASH160: &str = "76a04053bda0a88bda5177b86a15c3b29f559873";

    #[test]
    fn decodes_a_known_p2pkh_address() {
        let hash = decode_hash160(ADDRESS).unwrap();
        assert_eq!(hex::encode(hash), HASH160);
    }

    #[test]
    fn bare_payload_assumes_the_mainnet_prefix() {
        let bare = ADDRESS.split_once(':').unwrap().1;
        assert_eq!(decode_hash160(bare).unwrap(), decode_hash160(ADDRESS).unwrap());
    }

    #[test]
    fn decode_is_case_insensitive() {
        let upper = ADDRESS.to_uppercase();
        assert_eq!(hex::encode(decode_hash160(&upper).unwrap()), HASH160);
    }

    #[test]
    fn corrupted_checksum_is_rejected() {
        // Flip the final symbol.
        let mut corrupted = ADDRESS.to_string();
        corrupted.pop();
        corrupted.push('q');
        assert_eq!(decode_hash160(&corrupted), Err(CashAddrError::BadChecksum));
    }

    #[test]
    fn charset_violations_are_rejected() {
        assert_eq!(
            decode_hash160("bitcoincash:b123"),
            Err(CashAddrError::InvalidChar('b'))
        );
    }

    #[test]
    fn fallback_is_the_truncated_sha256_of_the_payload() {
        assert_eq!(
            hex::encode(fallback_hash160(ADDRESS)),
            "237864a36a4a08bda777dbc496e8e69db72c9206"
        );
        assert_eq!(
            hex::encode(fallback_hash160("bchtest:qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqq")),
            "6ead494e075df994260f32d0985f0ecb4140e30e"
        );
    }

    #[test]
    fn or_fallback_prefers_the_real_decode() {
        assert_eq!(hex::encode(hash160_or_fallback(ADDRESS)), HASH160);
        // Undecodable input still yields a stable 20-byte id.
        let degraded = hash160_or_fallback("bchtest:not!a!real!address!!!");
        assert_eq!(degraded.len(), 20);
        assert_eq!(degraded, hash160_or_fallback("bchtest:not!a!real!address!!!"));
    }
}
