// Signing handlers

use axum::{
    body::Bytes, extract::rejection::BytesRejection, http::StatusCode, response::IntoResponse,
    Json,
};
use tracing::info;

use crate::{
    error::{ApiError, ApiResult},
    handlers::parse_json,
    models::sign::{SignRequest, SignResponse},
    signing::hmac_sha3_512_hex,
};

/// Sign text with HMAC-SHA3-512
/// POST /sign/hmacsha512
pub async fn sign_hmac_sha512(
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<impl IntoResponse> {
    let request: SignRequest = parse_json(&body?)?;
    request.validate().map_err(ApiError::Validation)?;

    info!("Signing {} bytes of text", request.text.len());

    let signature = hmac_sha3_512_hex(request.key.as_bytes(), request.text.as_bytes())
        .map_err(|e| ApiError::validation(format!("Invalid key: {}", e)))?;

    Ok((StatusCode::OK, Json(SignResponse { signature })))
}
