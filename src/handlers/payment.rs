use axum::{
    extract::{Query, State},
    Extension, Json,
};
use bigdecimal::BigDecimal;

use crate::error::AppError;
use crate::ports::TransactionFilter;
use crate::response::{CODE_LIST_SUCCESS, CODE_PAYMENT_SUCCESS};
use crate::schemas::{
    PaymentNotificationRequest, PaymentNotificationResponse, TransactionListResponse,
    TransactionQuery,
};
use crate::use_cases::process_payment::ProcessPaymentInput;
use crate::AppState;

pub async fn process_payment(
    State(state): State<AppState>,
    Extension(payload): Extension<PaymentNotificationRequest>,
) -> Result<Json<PaymentNotificationResponse>, AppError> {
    let amount: BigDecimal = payload
        .amount
        .parsed_value()
        .map_err(|_| AppError::BadRequest("Invalid amount format".to_string()))?;

    let transaction = state
        .payments
        .execute(ProcessPaymentInput {
            reference_no: payload.original_reference_no,
            amount,
            status_desc: payload.transaction_status_desc,
            paid_time: payload.paid_time,
        })
        .await?;

    Ok(Json(PaymentNotificationResponse {
        response_code: CODE_PAYMENT_SUCCESS,
        response_message: "Successful",
        transaction_status_desc: transaction.status.to_string(),
    }))
}

pub async fn get_transactions(
    State(state): State<AppState>,
    Query(query): Query<TransactionQuery>,
) -> Result<Json<TransactionListResponse>, AppError> {
    let filter = TransactionFilter {
        merchant_id: non_empty(query.merchant_id),
        partner_reference_no: non_empty(query.partner_reference_no),
        reference_no: non_empty(query.reference_no),
        status: non_empty(query.status),
    };

    let transactions = state.transactions.execute(filter).await?;

    Ok(Json(TransactionListResponse {
        response_code: CODE_LIST_SUCCESS,
        response_message: "Successful",
        data: transactions,
    }))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
