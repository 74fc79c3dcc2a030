#[derive(serde::Deserialize)]
pub struct ConfirmationRequest {
    // A present-but-missing email falls through to the format check.
    #[serde(default)]
    pub email: String,
}

#[derive(serde::Serialize)]
pub struct ConfirmationResponse {
    pub success: bool,
}
