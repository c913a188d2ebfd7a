//! Artist preview links

use url::form_urlencoded;

/// Search page the preview link points at
pub const DEFAULT_PREVIEW_BASE_URL: &str = "https://www.wn01.uk/search/";

/// Build `<base>?q=<artist>` with the name percent-encoded.
///
/// Spaces are written as `%20` rather than the form-encoding `+`.
pub fn build_preview_url_with(base: &str, artist_name: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(artist_name.as_bytes())
        .collect::<String>()
        .replace('+', "%20");
    format!("{}?q={}", base, encoded)
}

/// Hand the URL to the system browser
pub fn open_preview(url: &str) -> std::io::Result<()> {
    tracing::info!(url, "opening preview");
    open::that(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_preview_url(artist_name: &str) -> String {
        build_preview_url_with(DEFAULT_PREVIEW_BASE_URL, artist_name)
    }

    #[test]
    fn test_plain_name() {
        assert_eq!(
            build_preview_url("artist"),
            "https://www.wn01.uk/search/?q=artist"
        );
    }

    #[test]
    fn test_reserved_characters_are_encoded() {
        assert_eq!(
            build_preview_url("A & B+C/D"),
            "https://www.wn01.uk/search/?q=A%20%26%20B%2BC%2FD"
        );
    }

    #[test]
    fn test_non_ascii_name() {
        assert_eq!(
            build_preview_url("画师"),
            "https://www.wn01.uk/search/?q=%E7%94%BB%E5%B8%88"
        );
    }

    #[test]
    fn test_custom_base() {
        assert_eq!(
            build_preview_url_with("http://localhost:8080/find", "x y"),
            "http://localhost:8080/find?q=x%20y"
        );
    }
}
