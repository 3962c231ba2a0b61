//! HTTP adapter error types.

/// Reasons an [`HttpConfig`](crate::HttpConfig) cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HttpConfigError {
    #[error("controller base URL is empty")]
    EmptyBaseUrl,

    #[error("controller base URL {0:?} must start with http:// or https://")]
    UnsupportedScheme(String),

    #[error("request timeout must be non-zero")]
    ZeroTimeout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_scheme_error() {
        let err = HttpConfigError::UnsupportedScheme("ftp://light".to_string());
        assert_eq!(
            err.to_string(),
            "controller base URL \"ftp://light\" must start with http:// or https://"
        );
    }
}
