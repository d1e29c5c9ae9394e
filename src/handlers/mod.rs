//! HTTP handlers for the movie and human resources.

pub mod humans;
pub mod movies;
pub use humans::*;
pub use movies::*;

use crate::error::AppError;

/// Path ids are integers. A segment that is not one names no resource, so it is a 404.
pub(crate) fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse::<i64>()
        .map_err(|_| AppError::NotFound(format!("no resource at id '{}'", id_str)))
}
