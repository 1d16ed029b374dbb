pub mod error;
pub mod health;
pub mod items;
pub mod users;

pub use error::{AppError, ValidationError};

/// Hard cap on the `limit` query parameter. Requests above it are rejected
/// at the boundary.
pub const MAX_PAGE_SIZE: i64 = 100;

use serde::Deserialize;

/// Query parameters for list endpoints.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Records to skip (default 0).
    #[serde(default)]
    pub offset: i64,
    /// Maximum records to return (default 100, must not exceed 100).
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    MAX_PAGE_SIZE
}

impl ListQuery {
    /// Validates the window before it reaches a service. A `limit` above the
    /// cap is rejected; negative values are treated as zero.
    pub fn validated(&self) -> Result<(i64, i64), ValidationError> {
        if self.limit > MAX_PAGE_SIZE {
            return Err(ValidationError(format!(
                "limit must be less than or equal to {MAX_PAGE_SIZE}"
            )));
        }
        Ok((self.offset.max(0), self.limit.max(0)))
    }
}
