//! URL helpers for links scraped out of listing markup.

use url::Url;

/// Turn a scraped image `src` into an absolute `https` URL.
///
/// The listing serves thumbnails protocol-relative (`//host/path`), which is
/// rewritten to `https://host/path`. A value that already parses as an
/// absolute URL (`https:`, `data:`, ...) is returned unchanged; anything else
/// is treated as a bare `host/path`.
#[must_use]
pub fn to_https_url(src: &str) -> String {
    if let Some(rest) = src.strip_prefix("//") {
        format!("https://{rest}")
    } else if Url::parse(src).is_ok() {
        src.to_string()
    } else {
        format!("https://{src}")
    }
}
