//! Transaction domain entity.
//! Framework-agnostic representation of a merchant QR transaction.

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_CURRENCY: &str = "IDR";

/// Lifecycle state of a transaction. Stored and serialized in uppercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionStatus {
    Pending,
    Success,
    Failed,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "PENDING",
            TransactionStatus::Success => "SUCCESS",
            TransactionStatus::Failed => "FAILED",
        }
    }

    /// SUCCESS and FAILED are terminal; a payment confirmation may only
    /// carry a terminal status.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TransactionStatus::Pending)
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(TransactionStatus::Pending),
            "SUCCESS" => Ok(TransactionStatus::Success),
            "FAILED" => Ok(TransactionStatus::Failed),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown transaction status: {0}")]
pub struct UnknownStatus(pub String);

/// Domain entity representing a transaction. `id` is assigned by the store;
/// a freshly constructed entity carries `0` until `create` returns the
/// persisted row.
#[derive(Debug, Clone, Serialize)]
pub struct Transaction {
    pub id: i64,
    pub merchant_id: String,
    pub amount: BigDecimal,
    pub currency: String,
    pub trx_id: Option<String>,
    pub partner_reference_number: String,
    pub reference_number: String,
    pub status: TransactionStatus,
    pub transaction_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_date: Option<DateTime<Utc>>,
    pub qr_content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Transaction {
    pub fn new(
        merchant_id: String,
        amount: BigDecimal,
        currency: String,
        partner_reference_number: String,
        reference_number: String,
        qr_content: String,
    ) -> Self {
        let now = Utc::now();
        let currency = if currency.is_empty() {
            DEFAULT_CURRENCY.to_string()
        } else {
            currency
        };
        Self {
            id: 0,
            merchant_id,
            amount,
            currency,
            trx_id: None,
            partner_reference_number,
            reference_number,
            status: TransactionStatus::Pending,
            transaction_date: now,
            paid_date: None,
            qr_content,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }
}
