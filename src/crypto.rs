//! Request signature codec: HMAC-SHA256 over canonical strings, hex-encoded.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Computes the HMAC-SHA256 signature of `data` keyed by `secret_key`,
/// rendered as lowercase hex.
pub fn sign(data: &str, secret_key: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(secret_key.as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(data.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Verifies a candidate hex signature against the expected one. The
/// comparison runs in constant time on the decoded bytes. Malformed hex is a
/// mismatch, never an error.
pub fn verify(data: &str, signature: &str, secret_key: &str) -> bool {
    let Ok(candidate) = hex::decode(signature) else {
        return false;
    };
    let mut mac = HmacSha256::new_from_slice(secret_key.as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(data.as_bytes());
    mac.verify_slice(&candidate).is_ok()
}

/// Canonical string for QR generation: fields verbatim as submitted, joined
/// with `|`.
pub fn qr_signature_string(merchant_id: &str, amount: &str, partner_reference_no: &str) -> String {
    [merchant_id, amount, partner_reference_no].join("|")
}

/// Canonical string for payment confirmation.
pub fn payment_signature_string(reference_no: &str, amount: &str, status_desc: &str) -> String {
    [reference_no, amount, status_desc].join("|")
}
