use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, web};

use crate::domain::WaitlistEmail;
use crate::email_client::EmailClient;
use crate::routes::helpers::cross_origin;

use super::errors::ConfirmationError;
use super::helpers::{WELCOME_SUBJECT, get_welcome_html};
use super::types::{ConfirmationRequest, ConfirmationResponse};

pub async fn preflight() -> HttpResponse {
    cross_origin(HttpResponse::Ok()).finish()
}

#[tracing::instrument(
    name = "Sending a waitlist confirmation email.",
    skip(request, body, email_client)
)]
pub async fn send_confirmation(
    request: HttpRequest,
    body: web::Bytes,
    email_client: web::Data<EmailClient>,
) -> Result<HttpResponse, ConfirmationError> {
    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");
    if !content_type.contains("application/json") {
        return Err(ConfirmationError::InvalidContentType);
    }

    if body.is_empty() {
        return Err(ConfirmationError::EmptyBody);
    }

    let payload: ConfirmationRequest =
        serde_json::from_slice(&body).map_err(ConfirmationError::MalformedBody)?;

    let email =
        WaitlistEmail::parse(payload.email).map_err(|_| ConfirmationError::InvalidEmail)?;

    let html = get_welcome_html(email.as_ref())?;

    email_client
        .send_email(&email, WELCOME_SUBJECT, &html)
        .await?;

    tracing::info!(recipient = %email, "Confirmation email sent");

    Ok(cross_origin(HttpResponse::Ok()).json(ConfirmationResponse { success: true }))
}
