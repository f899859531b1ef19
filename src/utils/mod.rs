// Form body utilities
pub mod url_encoding;

pub use url_encoding::parse_urlencoded_pairs;
