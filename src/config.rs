use anyhow::{bail, Context, Result};
use std::fmt;
use url::Url;

use crate::error::DiskError;

pub const TOKEN_VAR: &str = "YANDEX_DISK_TOKEN";
pub const API_URL_VAR: &str = "YANDEX_DISK_API_URL";
pub const DEFAULT_API_URL: &str = "https://cloud-api.yandex.net";

#[derive(Clone)]
pub struct Credentials {
    token: String,
}

impl Credentials {
    pub fn load(explicit: Option<String>) -> Result<Self, DiskError> {
        match explicit.map(|t| t.trim().to_string()) {
            Some(token) if !token.is_empty() => Ok(Credentials { token }),
            _ => Err(DiskError::MissingCredential),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct DiskConfig {
    pub credentials: Credentials,
    pub api_url: Url,
    pub timeout_secs: u64,
    pub limit: u32,
}

impl DiskConfig {
    /// Resolves settings from CLI flags first, then `lookup` (the process
    /// environment in `main`), then defaults.
    pub fn load_from_cli<F>(cli: &crate::cli::Cli, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = cli
            .token
            .clone()
            .filter(|t| !t.trim().is_empty())
            .or_else(|| lookup(TOKEN_VAR));
        let credentials = Credentials::load(token)?;

        let raw_url = cli
            .api_url
            .clone()
            .or_else(|| lookup(API_URL_VAR))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_url = Url::parse(raw_url.trim_end_matches('/'))
            .with_context(|| format!("invalid API URL: {}", raw_url))?;
        if !matches!(api_url.scheme(), "http" | "https") {
            bail!("API URL must use http or https: {}", raw_url);
        }

        if cli.limit == 0 {
            bail!("--limit must be at least 1");
        }
        if cli.timeout == 0 {
            bail!("--timeout must be at least 1 second");
        }

        Ok(DiskConfig {
            credentials,
            api_url,
            timeout_secs: cli.timeout,
            limit: cli.limit,
        })
    }
}
