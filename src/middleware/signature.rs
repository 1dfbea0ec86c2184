//! X-Signature enforcement for the QR endpoints.
//!
//! Each middleware buffers the request body, verifies the HMAC signature
//! over the endpoint's canonical string, and threads the already-parsed,
//! strongly-typed payload to the handler through request extensions. The
//! handler never re-reads the body.

use axum::{
    body::{to_bytes, Body},
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use serde::de::DeserializeOwned;

use crate::crypto;
use crate::error::AppError;
use crate::schemas::{GenerateQrRequest, PaymentNotificationRequest};
use crate::AppState;

pub const SIGNATURE_HEADER: &str = "x-signature";

const MAX_BODY_SIZE: usize = 256 * 1024;

pub async fn verify_qr_signature(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    verify_into_extension::<GenerateQrRequest>(state, req, next, |payload| {
        crypto::qr_signature_string(
            &payload.merchant_id,
            &payload.amount.value,
            &payload.partner_reference_no,
        )
    })
    .await
}

pub async fn verify_payment_signature(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    verify_into_extension::<PaymentNotificationRequest>(state, req, next, |payload| {
        crypto::payment_signature_string(
            &payload.original_reference_no,
            &payload.amount.value,
            &payload.transaction_status_desc,
        )
    })
    .await
}

async fn verify_into_extension<T>(
    state: AppState,
    req: Request,
    next: Next,
    canonical: impl Fn(&T) -> String,
) -> Result<Response, AppError>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    let (mut parts, body) = req.into_parts();

    let signature = parts
        .headers
        .get(SIGNATURE_HEADER)
        .and_then(|header| header.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
        .ok_or_else(|| AppError::Unauthorized("Missing signature".to_string()))?;

    let bytes = to_bytes(body, MAX_BODY_SIZE)
        .await
        .map_err(|err| AppError::BadRequest(err.to_string()))?;

    let payload: T = serde_json::from_slice(&bytes)
        .map_err(|err| AppError::BadRequest(err.to_string()))?;

    if !crypto::verify(&canonical(&payload), &signature, &state.secret_key) {
        return Err(AppError::Unauthorized("Invalid signature".to_string()));
    }

    parts.extensions.insert(payload);
    Ok(next.run(Request::from_parts(parts, Body::empty())).await)
}
