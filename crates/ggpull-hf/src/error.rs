//! Mapping from `hf-hub` errors to core port errors.

use ggpull_core::HubError;
use hf_hub::api::sync::ApiError;

/// Convert an `hf-hub` error to a core `HubError`.
///
/// `what` names the repository or file the request was about.
pub(crate) fn map_api_error(err: ApiError, what: &str) -> HubError {
    match err {
        ApiError::IoError(e) => HubError::Cache {
            message: e.to_string(),
        },
        other => {
            let message = other.to_string();
            if looks_like_not_found(&message) {
                HubError::NotFound {
                    what: what.to_string(),
                }
            } else {
                HubError::Request { message }
            }
        }
    }
}

/// Convert a failed blocking task into a core `HubError`.
pub(crate) fn map_join_error(err: &tokio::task::JoinError) -> HubError {
    HubError::Request {
        message: format!("hub task failed: {err}"),
    }
}

fn looks_like_not_found(message: &str) -> bool {
    message.contains("status code 404") || message.contains(": 404")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_maps_to_cache() {
        let err = ApiError::IoError(std::io::Error::other("disk full"));
        match map_api_error(err, "org/model") {
            HubError::Cache { message } => assert!(message.contains("disk full")),
            other => panic!("Expected Cache, got {other:?}"),
        }
    }

    #[test]
    fn test_not_found_detection() {
        assert!(looks_like_not_found(
            "request error: https://huggingface.co/api/models/x/y/revision/main: status code 404"
        ));
        assert!(!looks_like_not_found("request error: connection reset"));
    }
}
