use hmac::{digest::InvalidLength, Hmac, Mac};
use sha3::Sha3_512;

type HmacSha3_512 = Hmac<Sha3_512>;

/// Length of a hex-encoded signature: 64 digest bytes, two characters each.
pub const SIGNATURE_HEX_LEN: usize = 128;

/// HMAC over `message` keyed with `key`, using SHA3-512, hex-encoded in
/// lowercase without separators.
pub fn hmac_sha3_512_hex(key: &[u8], message: &[u8]) -> Result<String, InvalidLength> {
    let mut mac = HmacSha3_512::new_from_slice(key)?;
    mac.update(message);

    Ok(hex::encode(mac.finalize().into_bytes()))
}
