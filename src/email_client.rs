use std::time::Duration;

use reqwest::{Client, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::domain::WaitlistEmail;

#[derive(Clone)]
pub struct EmailClient {
    http_client: Client,
    base_url: Url,
    sender: String,
    auth_token: SecretString,
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

impl EmailClient {
    pub fn new(
        base_url: String,
        sender: WaitlistEmail,
        sender_name: String,
        auth_token: SecretString,
        timeout: Duration,
    ) -> Self {
        Self {
            http_client: Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed building the mail provider http client."),
            base_url: Url::parse(&base_url).expect("Failed parsing base email api url."),
            sender: format!("{} <{}>", sender_name, sender.as_ref()),
            auth_token,
        }
    }

    pub async fn send_email(
        &self,
        recipient: &WaitlistEmail,
        subject: &str,
        html_content: &str,
    ) -> Result<(), reqwest::Error> {
        let url = self
            .base_url
            .join("emails")
            .expect("Failed joining route to email api url.");

        let body = SendEmailRequest {
            from: &self.sender,
            to: [recipient.as_ref()],
            subject,
            html: html_content,
        };

        self.http_client
            .post(url)
            .header(
                "Authorization",
                "Bearer ".to_owned() + self.auth_token.expose_secret(),
            )
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
