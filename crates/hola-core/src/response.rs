//! The fixed greeting response
//!
//! Every request receives this response, regardless of method, path,
//! headers, or body. The body bytes are static; each call only assembles
//! the hyper envelope around them.

use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::StatusCode;
use http_body_util::Full;

/// Body sent for every request, trailing newline included
pub const GREETING_BODY: &str = "Hola DevSecOps 01, ¡funcionando!\n";

/// Content type of the fixed response
pub const GREETING_CONTENT_TYPE: &str = "text/plain";

/// Build the fixed `200 OK` greeting response
pub fn greeting_response() -> hyper::Response<Full<Bytes>> {
    hyper::Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, GREETING_CONTENT_TYPE)
        .body(Full::new(Bytes::from_static(GREETING_BODY.as_bytes())))
        .unwrap()
}
