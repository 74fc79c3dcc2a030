mod errors;
mod helpers;
mod send_confirmation_handler;
mod types;

pub use errors::ConfirmationError;
pub use send_confirmation_handler::{preflight, send_confirmation};
