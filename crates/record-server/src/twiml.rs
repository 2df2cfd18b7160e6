//! TwiML reply envelope.

use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use quick_xml::escape::escape;

/// A single-message TwiML reply, served as `application/xml` with status 200.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse(pub String);

impl MessageResponse {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn to_xml(&self) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?><Response><Message>{}</Message></Response>"#,
            escape(&self.0)
        )
    }
}

impl IntoResponse for MessageResponse {
    fn into_response(self) -> Response {
        ([(CONTENT_TYPE, "application/xml")], self.to_xml()).into_response()
    }
}
