// URL handling utilities
pub mod url_encoding;

pub use url_encoding::{decode_component, parse_urlencoded};
