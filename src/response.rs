//! Gateway response envelope constants and error body.

use serde::Serialize;

pub const CODE_QR_SUCCESS: &str = "2004700";
pub const CODE_PAYMENT_SUCCESS: &str = "2005100";
pub const CODE_LIST_SUCCESS: &str = "2000000";
pub const CODE_BAD_REQUEST: &str = "4000000";
pub const CODE_UNAUTHORIZED: &str = "4010000";
pub const CODE_NOT_FOUND: &str = "4040000";
pub const CODE_INTERNAL_ERROR: &str = "5000000";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub response_code: &'static str,
    pub response_message: &'static str,
    pub error: String,
}
