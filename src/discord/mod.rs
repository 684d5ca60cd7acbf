//! Discord webhook support: poll payloads, webhook execution and snowflake
//! ids.

mod poll;
mod snowflake;
mod webhook;

pub use poll::MAX_DURATION_HOURS;
pub use webhook::{PostOutcome, post_dates};
