pub mod rate_limit;

pub use rate_limit::{RateLimitError, apply_rate_limit, replenish_interval};
