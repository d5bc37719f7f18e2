use regex::Regex;
use snip_core::ShortenerError;
use std::sync::LazyLock;

/// Optional http(s) scheme, dot-separated host labels ending in an
/// alphabetic TLD of two or more letters, optional port, optional suffix.
static URL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?([a-zA-Z0-9-]+\.)+[a-zA-Z]{2,}(:\d+)?(/.*)?$")
        .expect("url shape pattern is valid")
});

/// Checks that `url` looks like an absolute web address.
///
/// This is a shape check only; the url is stored exactly as given.
pub fn validate_url(url: &str) -> Result<(), ShortenerError> {
    if url.is_empty() {
        return Err(ShortenerError::InvalidUrl("URL cannot be empty".to_string()));
    }

    if !URL_SHAPE.is_match(url) {
        return Err(ShortenerError::InvalidUrl(format!(
            "URL does not look like a web address: {}",
            url
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_web_addresses() {
        for url in [
            "http://example.com",
            "https://example.com",
            "example.com/path",
            "https://sub.example.co.uk:8080/x?y=1",
            "my-site.io",
            "http://localhost.dev:3000/",
        ] {
            assert!(validate_url(url).is_ok(), "{url} should be valid");
        }
    }

    #[test]
    fn rejects_everything_else() {
        for url in [
            "",
            "not a url",
            "ftp:/bad",
            "ftp://example.com",
            "invalid_url",
            "http://localhost",
            "http://example.c0m",
            "http://example.com:port",
            "example.com?query=1",
        ] {
            let err = validate_url(url).unwrap_err();
            assert!(
                matches!(err, ShortenerError::InvalidUrl(_)),
                "{url} should be invalid"
            );
        }
    }
}
