use crate::errors::ServerError;
use crate::templates::error_page;
use astra::{Body, Response, ResponseBuilder};

/// Convert a ServerError into an HTML error page.
pub fn error_to_response(err: &ServerError) -> Response {
    let status = err.status();
    let message = match err {
        ServerError::MethodNotAllowed(method) => format!("{method} is not supported here"),
        other => other.to_string(),
    };

    let mut builder = ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref());
    if let ServerError::MethodNotAllowed(_) = err {
        builder = builder.header("Allow", "GET, HEAD");
    }

    builder
        .body(Body::from(error_page(status, &message).into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
