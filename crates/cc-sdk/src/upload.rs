//! Authenticated multipart file upload.

use std::fs::File;
use std::io;
use std::path::Path;

use reqwest::blocking::multipart::{Form, Part};

use crate::auth::BearerToken;
use crate::error::ClientError;
use crate::rpc::client::{default_http_client, ClientConfig};

/// Name of the multipart field carrying the file.
pub const FILE_FIELD: &str = "file";

/// Posts files to an upload endpoint as `multipart/form-data`.
#[derive(Debug, Clone)]
pub struct UploadClient {
    config: ClientConfig,
    http: reqwest::blocking::Client,
}

impl UploadClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_config(ClientConfig::new(url))
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self::with_http_client(config, default_http_client())
    }

    pub fn with_http_client(config: ClientConfig, http: reqwest::blocking::Client) -> Self {
        Self { config, http }
    }

    pub fn url(&self) -> &str {
        &self.config.url
    }

    /// Upload the file at `path` and return the response body verbatim.
    ///
    /// The file is opened before any request is made, so a missing file or a
    /// path that is not a regular file is always reported as
    /// [`ClientError::File`]. The handle moves into the
    /// request body and is closed when the request finishes or fails.
    pub fn upload_file(
        &self,
        path: impl AsRef<Path>,
        token: &BearerToken,
    ) -> Result<String, ClientError> {
        let path = path.as_ref();
        let file_error = |source| ClientError::File {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(file_error)?;
        let metadata = file.metadata().map_err(file_error)?;
        if !metadata.is_file() {
            return Err(file_error(io::Error::new(
                io::ErrorKind::InvalidInput,
                "not a regular file",
            )));
        }
        let length = metadata.len();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());

        let part = Part::reader_with_length(file, length)
            .file_name(file_name.clone())
            .mime_str("application/octet-stream")?;
        let form = Form::new().part(FILE_FIELD, part);

        tracing::debug!(
            "[UploadClient] Uploading '{}' ({} bytes) to {}",
            file_name,
            length,
            self.config.url
        );

        let response = self
            .http
            .post(&self.config.url)
            .bearer_auth(token.as_str())
            .multipart(form)
            .send()?;
        let status = response.status();
        let body = response.text()?;

        if self.config.debug {
            tracing::info!(
                "[UploadClient] {} ({})\nResponse: {}",
                file_name,
                status,
                body
            );
        }

        Ok(body)
    }
}
