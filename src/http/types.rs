use std::collections::HashMap;
use actix_web::HttpResponse;

/// Percent-decoded query parameters, every value kept as raw bytes.
pub type HttpQueryMap = HashMap<String, Vec<Vec<u8>>>;

/// A ready bencoded failure response.
pub type HttpFailureResponse = HttpResponse;
