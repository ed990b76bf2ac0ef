use super::ApiError;
use crate::models::series::WatchStatus;

pub fn validate_title(title: &str) -> Result<&str, ApiError> {
    if title.is_empty() {
        return Err(ApiError::validation("Title is required"));
    }
    Ok(title)
}

pub fn validate_status(status: &str) -> Result<WatchStatus, ApiError> {
    status
        .parse()
        .map_err(|_| ApiError::validation("Invalid status"))
}
