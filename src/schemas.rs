//! Wire DTOs for the gateway endpoints. Field names follow the external
//! API's camelCase contract.

use bigdecimal::{BigDecimal, ParseBigDecimalError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::Transaction;

#[derive(Debug, Clone, Deserialize)]
pub struct AmountPayload {
    pub value: String,
    pub currency: String,
}

impl AmountPayload {
    /// Parses the submitted amount string. The verbatim `value` string is
    /// what signatures are computed over; the parsed decimal is what the
    /// business logic uses.
    pub fn parsed_value(&self) -> Result<BigDecimal, ParseBigDecimalError> {
        BigDecimal::from_str(self.value.trim())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQrRequest {
    pub merchant_id: String,
    pub partner_reference_no: String,
    pub amount: AmountPayload,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQrResponse {
    pub response_code: &'static str,
    pub response_message: &'static str,
    pub reference_no: String,
    pub partner_reference_no: String,
    pub qr_content: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentNotificationRequest {
    pub original_reference_no: String,
    pub original_partner_reference_no: String,
    pub transaction_status_desc: String,
    pub paid_time: String,
    pub amount: AmountPayload,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentNotificationResponse {
    pub response_code: &'static str,
    pub response_message: &'static str,
    pub transaction_status_desc: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionListResponse {
    pub response_code: &'static str,
    pub response_message: &'static str,
    pub data: Vec<Transaction>,
}

/// Query parameters for the transaction listing. Empty strings are treated
/// as absent filters.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionQuery {
    #[serde(default)]
    pub merchant_id: Option<String>,
    #[serde(default)]
    pub partner_reference_no: Option<String>,
    #[serde(default)]
    pub reference_no: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}
