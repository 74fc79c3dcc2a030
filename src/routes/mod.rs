mod health_check;
pub mod helpers;
mod send_confirmation;
mod waitlist;

pub use health_check::health_check;
pub use helpers::error_chain_fmt;
pub use send_confirmation::{ConfirmationError, preflight, send_confirmation};
pub use waitlist::join_waitlist;
