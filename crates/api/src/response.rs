use serde::Serialize;

/// Standard paginated list envelope: the page of rows plus the total row
/// count matching the query, so clients can render page controls.
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub total: i64,
}

/// Plain acknowledgement body, used for deletes and registration.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of the `/total` aggregate endpoints.
#[derive(Debug, Serialize)]
pub struct TotalResponse {
    pub total: i64,
}
