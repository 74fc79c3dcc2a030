use super::super::helpers::prepare_html_template;

pub const WELCOME_SUBJECT: &str = "Welcome to the Viro AI Waitlist!";

pub fn get_welcome_html(email: &str) -> Result<String, anyhow::Error> {
    prepare_html_template(&[("email", email)], "waitlist_welcome_letter.html")
}
