use axum::{extract::State, Extension, Json};
use bigdecimal::BigDecimal;

use crate::error::AppError;
use crate::response::CODE_QR_SUCCESS;
use crate::schemas::{GenerateQrRequest, GenerateQrResponse};
use crate::use_cases::generate_qr::GenerateQrInput;
use crate::AppState;

pub async fn generate_qr(
    State(state): State<AppState>,
    Extension(payload): Extension<GenerateQrRequest>,
) -> Result<Json<GenerateQrResponse>, AppError> {
    let amount: BigDecimal = payload
        .amount
        .parsed_value()
        .map_err(|_| AppError::BadRequest("Invalid amount format".to_string()))?;

    if amount <= BigDecimal::from(0) {
        return Err(AppError::BadRequest(
            "Amount must be greater than 0".to_string(),
        ));
    }

    let transaction = state
        .qr_generator
        .execute(GenerateQrInput {
            merchant_id: payload.merchant_id,
            amount,
            currency: payload.amount.currency,
            partner_reference_no: payload.partner_reference_no,
        })
        .await?;

    Ok(Json(GenerateQrResponse {
        response_code: CODE_QR_SUCCESS,
        response_message: "Successful",
        reference_no: transaction.reference_number,
        partner_reference_no: transaction.partner_reference_number,
        qr_content: transaction.qr_content,
    }))
}
