//! Helpers for mounting disk resources endpoints on a `wiremock` server.

use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use crate::config::{Credentials, DiskConfig};

pub const RESOURCES: &str = "/v1/disk/resources";

pub fn test_config(url: &str, timeout_secs: u64) -> DiskConfig {
    DiskConfig {
        credentials: Credentials::load(Some("test-token".to_string())).unwrap(),
        api_url: Url::parse(url).unwrap(),
        timeout_secs,
        limit: 1000,
    }
}

pub async fn mount_listing(server: &MockServer, disk_path: &str, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(RESOURCES))
        .and(query_param("path", disk_path))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

pub async fn mount_deletion(server: &MockServer, disk_path: &str, status: u16, body: &str) {
    Mock::given(method("DELETE"))
        .and(path(RESOURCES))
        .and(query_param("path", disk_path))
        .and(query_param("permanently", "true"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

/// Any DELETE not matched by a more specific mock answers 204.
pub async fn mount_deletion_fallback(server: &MockServer) {
    Mock::given(method("DELETE"))
        .and(path(RESOURCES))
        .respond_with(ResponseTemplate::new(204))
        .with_priority(10)
        .mount(server)
        .await;
}

pub async fn received(server: &MockServer) -> Vec<Request> {
    server.received_requests().await.unwrap_or_default()
}

/// `path` query values of every DELETE, in arrival order.
pub async fn deleted_paths(server: &MockServer) -> Vec<String> {
    received(server)
        .await
        .iter()
        .filter(|r| r.method.as_str() == "DELETE")
        .filter_map(|r| {
            r.url
                .query_pairs()
                .find(|(k, _)| k == "path")
                .map(|(_, v)| v.into_owned())
        })
        .collect()
}
