use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use super::super::helpers::{cross_origin, error_chain_fmt};

#[derive(thiserror::Error)]
pub enum ConfirmationError {
    #[error("Invalid content type")]
    InvalidContentType,
    #[error("Empty request body")]
    EmptyBody,
    #[error("Malformed JSON body")]
    MalformedBody(#[source] serde_json::Error),
    #[error("Invalid email format")]
    InvalidEmail,
    #[error(transparent)]
    SendError(#[from] reqwest::Error),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for ConfirmationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

#[derive(serde::Serialize)]
struct ErrorBody {
    error: String,
}

impl ResponseError for ConfirmationError {
    fn status_code(&self) -> StatusCode {
        match self {
            ConfirmationError::InvalidContentType
            | ConfirmationError::EmptyBody
            | ConfirmationError::MalformedBody(_)
            | ConfirmationError::InvalidEmail => StatusCode::BAD_REQUEST,
            ConfirmationError::SendError(_) | ConfirmationError::UnexpectedError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        cross_origin(HttpResponse::build(self.status_code())).json(ErrorBody {
            error: self.to_string(),
        })
    }
}
