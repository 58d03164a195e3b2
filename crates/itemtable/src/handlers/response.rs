use axum::{
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use itemtable_core::items::HandlerResponse;

/// Adapts a handler envelope to an axum response.
///
/// Status, headers, and body are copied as-is.
#[derive(Debug)]
pub struct ApiResponse(pub HandlerResponse);

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        let HandlerResponse {
            status_code,
            headers,
            body,
        } = self.0;

        let status = StatusCode::from_u16(status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = (status, body).into_response();

        for (name, value) in headers {
            match (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(&value),
            ) {
                (Ok(name), Ok(value)) => {
                    response.headers_mut().insert(name, value);
                }
                _ => tracing::warn!(header = %name, "Skipping invalid response header"),
            }
        }

        response
    }
}
