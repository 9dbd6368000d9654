//! Shared HTTP plumbing for the upstream clients

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{Result, VocabError};

/// Credential header expected by the upstream APIs.
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Builds the process-wide upstream client.
///
/// `insecure_skip_verify` turns off certificate verification for every
/// request made with the client.
pub fn build_http_client(
    timeout: Duration,
    insecure_skip_verify: bool,
) -> std::result::Result<Client, reqwest::Error> {
    if insecure_skip_verify {
        warn!("TLS certificate verification is disabled for upstream APIs");
    }

    Client::builder()
        .timeout(timeout)
        .danger_accept_invalid_certs(insecure_skip_verify)
        .build()
}

/// Sends `request` and decodes a JSON body of type `T`.
///
/// Maps failures to `UpstreamTransport`, `UpstreamStatus` or `Parse`.
pub(crate) async fn send_json<T: DeserializeOwned>(
    request: RequestBuilder,
    service: &str,
) -> Result<T> {
    let response = request.send().await.map_err(|e| transport_error(service, e))?;

    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(VocabError::UpstreamStatus {
            service: service.to_string(),
            status: status.as_u16(),
            body,
        });
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| transport_error(service, e))?;
    debug!("{} responded with {} bytes", service, bytes.len());

    serde_json::from_slice(&bytes).map_err(|e| VocabError::Parse {
        service: service.to_string(),
        message: e.to_string(),
    })
}

fn transport_error(service: &str, err: reqwest::Error) -> VocabError {
    VocabError::UpstreamTransport {
        service: service.to_string(),
        message: err.to_string(),
    }
}
