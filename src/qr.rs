//! Reference-number generation and QR payload encoding.

use bigdecimal::BigDecimal;
use uuid::Uuid;

/// Generates an 11-character reference number: `"A"` followed by the first
/// ten characters of a hyphenated UUIDv4. Uniqueness is backstopped by the
/// store's unique index, not by the generator; a collision surfaces as a
/// creation failure.
pub fn new_reference_number() -> String {
    let uuid = Uuid::new_v4().to_string();
    format!("A{}", &uuid[..10])
}

/// Formats an amount with exactly two fractional digits, the form embedded
/// in the QR payload and returned to callers.
pub fn format_amount(amount: &BigDecimal) -> String {
    amount.with_scale(2).to_string()
}

/// Renders the QR payload. The template is a fixed positional string with
/// four substitution points: merchant id, the two-digit zero-padded length
/// of the formatted amount, the formatted amount, and the reference number.
/// The format's nominal trailing CRC field is not computed.
pub fn build_qr_content(merchant_id: &str, reference_number: &str, amount: &BigDecimal) -> String {
    let amount_str = format_amount(amount);
    format!(
        "00020101021226620015ID.CO.MANJO.WWW01189360085801751859910210{}0303UMI51530014ID.CO.QRIS.WWW0215ID102106515192304121.0.21.09.255204481653033605502015802ID5904OLDI6013JAKARTA BARAT61051147062454{:02}{}62460525{}07031110806ASPI663040FAD",
        merchant_id,
        amount_str.len(),
        amount_str,
        reference_number,
    )
}
