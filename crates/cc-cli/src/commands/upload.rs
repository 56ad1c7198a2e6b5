//! `cc upload` — Authenticated file upload.

use cc_sdk::{BearerToken, ClientConfig, UploadClient};

pub fn run(config: ClientConfig, file: &str, token: &str) -> Result<(), String> {
    let client = UploadClient::with_config(config);
    let body = client
        .upload_file(file, &BearerToken::from(token))
        .map_err(|e| e.to_string())?;
    println!("{}", body);
    Ok(())
}
