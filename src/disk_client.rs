use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::{Credentials, DiskConfig};
use crate::error::DiskError;
use crate::models::{ListingResult, ResourceResponse};

const RESOURCES_PATH: &str = "v1/disk/resources";

/// Thin client for the `/v1/disk/resources` endpoint. One request per call,
/// no retries.
#[derive(Debug, Clone)]
pub struct DiskClient {
    http: reqwest::Client,
    endpoint: String,
    credentials: Credentials,
}

pub fn create_client(config: &DiskConfig) -> Result<DiskClient, DiskError> {
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    let endpoint = format!(
        "{}/{}",
        config.api_url.as_str().trim_end_matches('/'),
        RESOURCES_PATH
    );
    debug!(%endpoint, timeout_secs = config.timeout_secs, "created disk client");

    Ok(DiskClient {
        http,
        endpoint,
        credentials: config.credentials.clone(),
    })
}

impl DiskClient {
    fn auth_header(&self) -> String {
        format!("OAuth {}", self.credentials.token())
    }

    pub async fn list_children(&self, path: &str, limit: u32) -> Result<ListingResult, DiskError> {
        if path.trim().is_empty() {
            return Err(DiskError::InvalidPath);
        }
        debug!(path, limit, "GET resources");

        let limit = limit.to_string();
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("path", path), ("limit", limit.as_str())])
            .header(AUTHORIZATION, self.auth_header())
            .send()
            .await?;

        let status = response.status();
        debug!(path, status = status.as_u16(), "listing response");

        if status != StatusCode::OK {
            return Err(DiskError::ListingFailed {
                status: status.as_u16(),
                body: error_body(response).await,
            });
        }
        let body = response.text().await?;

        let parsed: ResourceResponse = serde_json::from_str(&body)?;
        let listing = ListingResult::from(parsed);
        if listing.is_truncated() {
            warn!(
                path,
                returned = listing.returned,
                total = listing.total,
                "listing truncated, raise --limit to see every entry"
            );
        }
        Ok(listing)
    }

    /// Deletes `path` bypassing the trash. 202 (async operation accepted) and
    /// 204 both count as success.
    pub async fn delete_permanently(&self, path: &str) -> Result<(), DiskError> {
        if path.trim().is_empty() {
            return Err(DiskError::InvalidPath);
        }
        debug!(path, "DELETE resources");

        let response = self
            .http
            .delete(&self.endpoint)
            .query(&[("path", path), ("permanently", "true")])
            .header(AUTHORIZATION, self.auth_header())
            .send()
            .await?;

        let status = response.status();
        debug!(path, status = status.as_u16(), "delete response");
        match status {
            StatusCode::NO_CONTENT | StatusCode::ACCEPTED => Ok(()),
            _ => Err(DiskError::DeletionFailed {
                status: status.as_u16(),
                body: error_body(response).await,
            }),
        }
    }
}

/// Body of an error response. A failed read is reported in place of the body
/// so the status code still reaches the caller.
async fn error_body(response: reqwest::Response) -> String {
    match response.text().await {
        Ok(body) => body,
        Err(e) => format!("<failed to read response body: {}>", e),
    }
}
