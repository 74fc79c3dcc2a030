mod client;
mod store;

pub use client::{JoinError, NotificationError, SubmissionResult, WaitlistClient};
pub use store::{PersistenceError, PgWaitlistStore, WaitlistStore};
