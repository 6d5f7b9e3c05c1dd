pub mod constants;
pub mod url_utils;

pub use constants::*;
pub use url_utils::to_https_url;
