use actix_web::{HttpResponse, web};

use crate::routes::helpers::cross_origin;
use crate::waitlist::WaitlistClient;

#[derive(serde::Deserialize)]
pub struct WaitlistForm {
    #[serde(default)]
    email: String,
}

/// Thin HTTP wrapper over the client adapter. Whatever the caller sends,
/// the answer is a 200 with one of the three result shapes to render: a
/// missing field or an unparseable body degrades to an empty email, which
/// the adapter reports as a generic failure.
#[tracing::instrument(name = "Adding an email to the waitlist.", skip_all)]
pub async fn join_waitlist(
    body: web::Bytes,
    waitlist_client: web::Data<WaitlistClient>,
) -> HttpResponse {
    let email = serde_json::from_slice::<WaitlistForm>(&body)
        .map(|form| form.email)
        .unwrap_or_default();

    let result = waitlist_client.join(&email).await;
    cross_origin(HttpResponse::Ok()).json(result)
}
