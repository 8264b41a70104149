pub mod rate_limit;

// Re-export middleware functions
pub use rate_limit::{RateLimitError, apply_rate_limit};
