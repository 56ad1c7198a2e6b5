//! Error type shared by the RPC and upload clients.

use std::path::PathBuf;

use crate::rpc::types::{self, JsonRpcError};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to encode request: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("Failed to decode response: {0}")]
    Deserialization(#[source] serde_json::Error),

    #[error("Remote error: {0}")]
    Remote(#[from] JsonRpcError),

    #[error("Cannot read '{}': {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("The result of {method} is not of type \"{expected}\": {source}")]
    ShapeMismatch {
        method: &'static str,
        expected: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// JSON-RPC error code reported by the server, if any.
    pub fn code(&self) -> Option<i64> {
        match self {
            ClientError::Remote(err) => Some(err.code),
            _ => None,
        }
    }

    pub fn is_method_not_found(&self) -> bool {
        self.code() == Some(types::METHOD_NOT_FOUND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_code_and_message() {
        let err = ClientError::from(JsonRpcError {
            code: -32000,
            message: "invalid passphrase".into(),
            data: None,
        });
        assert_eq!(err.code(), Some(-32000));
        assert!(!err.is_method_not_found());
        assert_eq!(err.to_string(), "Remote error: Error -32000 (invalid passphrase)");
    }

    #[test]
    fn test_method_not_found() {
        let err = ClientError::from(JsonRpcError {
            code: types::METHOD_NOT_FOUND,
            message: "method not found".into(),
            data: None,
        });
        assert!(err.is_method_not_found());
    }

    #[test]
    fn test_local_errors_have_no_code() {
        let err = ClientError::File {
            path: PathBuf::from("/missing/image.tar"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(err.code(), None);
        assert!(err.to_string().starts_with("Cannot read '/missing/image.tar'"));
    }
}
