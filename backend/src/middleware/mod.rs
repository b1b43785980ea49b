mod gateway_headers;

pub use gateway_headers::{apply_gateway_headers, ALLOW_HEADERS, ALLOW_METHODS, ALLOW_ORIGIN};
