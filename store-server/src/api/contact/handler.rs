//! Contact Relay Handler
//!
//! Thin fire-and-forget boundary to the external mailing service: validate,
//! forward, surface the outcome. Nothing is persisted here.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::ServerState;
use shared::error::{ApiResponse, AppError, AppResult, ErrorCode};

/// Inbound contact form payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    #[validate(length(min = 1, message = "inquiryType is required"))]
    pub inquiry_type: String,
    pub department: Option<String>,
    #[validate(length(min = 1, message = "message is required"))]
    pub message: String,
}

/// POST /api/contact - validate and relay to the configured webhook
pub async fn submit(
    State(state): State<ServerState>,
    Json(payload): Json<ContactRequest>,
) -> AppResult<Json<ApiResponse<()>>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let Some(webhook_url) = state.config.contact_webhook_url.clone() else {
        return Err(AppError::with_message(
            ErrorCode::ConfigError,
            "contact webhook is not configured",
        ));
    };

    let client = reqwest::Client::new();
    let response = client
        .post(&webhook_url)
        .json(&payload)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Contact relay request failed");
            AppError::with_message(ErrorCode::RelayFailed, "failed to deliver contact request")
        })?;

    if !response.status().is_success() {
        tracing::error!(status = %response.status(), "Contact relay rejected the request");
        return Err(AppError::with_message(
            ErrorCode::RelayFailed,
            "failed to deliver contact request",
        ));
    }

    tracing::info!(inquiry_type = %payload.inquiry_type, "Contact request relayed");
    Ok(Json(ApiResponse::ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ContactRequest {
        ContactRequest {
            name: "Dana".into(),
            email: "dana@example.com".into(),
            phone: None,
            company: Some("Acme Sleep Labs".into()),
            inquiry_type: "wholesale".into(),
            department: None,
            message: "Looking for a bulk quote.".into(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_bad_email_rejected() {
        let mut r = request();
        r.email = "not-an-email".into();
        assert!(r.validate().is_err());
    }

    #[test]
    fn test_empty_message_rejected() {
        let mut r = request();
        r.message = String::new();
        assert!(r.validate().is_err());
    }
}
