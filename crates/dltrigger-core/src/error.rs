use thiserror::Error;

/// Everything that sends a download down the fallback path.
///
/// A cross-origin rejection is reported by the browser as a plain network failure,
/// so it ends up as [`DownloadError::Network`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DownloadError {
    #[error("Network request failed: {0}")]
    Network(String),
    #[error("Server did not respond with success, got HTTP status {0}")]
    Status(u16),
    #[error("Failed reading response body: {0}")]
    Body(String),
    #[error("Failed saving file: {0}")]
    Save(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_str_eq;

    #[test]
    fn test_status_error_message() {
        assert_str_eq!(
            DownloadError::Status(404).to_string(),
            "Server did not respond with success, got HTTP status 404"
        );
    }

    #[test]
    fn test_network_error_message() {
        let err = DownloadError::Network("TypeError: Failed to fetch".to_owned());
        assert_str_eq!(
            err.to_string(),
            "Network request failed: TypeError: Failed to fetch"
        );
    }
}
