//! Package manifests published as GitHub gists.
//!
//! A manifest is a JSON array of [`PackageRequest`] objects served from
//! `<gist url>/raw`.

use anyhow::{anyhow, Context};
use std::time::Duration;
use tracing::{debug, info};

use super::pip::PackageRequest;
use crate::error::{Python2GoError, Result};

/// Where manifests come from.
pub trait ManifestSource {
    /// Download and decode the manifest published at `gist_url`.
    fn fetch(&self, gist_url: &str) -> Result<Vec<PackageRequest>>;
}

/// The raw-content URL of a gist.
///
/// # Example
///
/// ```
/// use python2go::python::raw_url;
///
/// assert_eq!(raw_url("https://gist.github.com/u/abc/"), "https://gist.github.com/u/abc/raw");
/// ```
pub fn raw_url(gist_url: &str) -> String {
    format!("{}/raw", gist_url.trim().trim_end_matches('/'))
}

/// Fetches manifests over HTTP.
pub struct HttpManifestSource {
    client: reqwest::blocking::Client,
}

impl HttpManifestSource {
    /// Create a source with the default 30-second timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(30))
    }

    /// Create a source with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("python2go/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client })
    }

    fn fetch_raw(&self, url: &str) -> anyhow::Result<Vec<PackageRequest>> {
        let response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("Failed to fetch {}", url))?;

        if !response.status().is_success() {
            return Err(anyhow!("HTTP {} fetching {}", response.status(), url));
        }

        let body = response
            .text()
            .with_context(|| format!("Failed to read response from {}", url))?;
        serde_json::from_str(&body).context("Manifest is not a JSON list of packages")
    }
}

impl ManifestSource for HttpManifestSource {
    fn fetch(&self, gist_url: &str) -> Result<Vec<PackageRequest>> {
        let url = raw_url(gist_url);
        info!("Downloading pip packages from {}", url);
        self.fetch_raw(&url)
            .map_err(|e| Python2GoError::ManifestUnavailable {
                url: gist_url.to_string(),
                message: format!("{:#}", e),
            })
    }
}

/// Caller-owned cache of one gist's manifest.
///
/// The manifest is downloaded on first use and kept until
/// [`invalidate`](Self::invalidate) is called.
#[derive(Debug, Clone, Default)]
pub struct ManifestCache {
    gist_url: Option<String>,
    packages: Option<Vec<PackageRequest>>,
}

impl ManifestCache {
    /// A cache for the manifest at `gist_url`; `None` or blank means no manifest.
    pub fn new(gist_url: Option<String>) -> Self {
        Self {
            gist_url: gist_url.filter(|u| !u.trim().is_empty()),
            packages: None,
        }
    }

    /// The configured gist URL.
    pub fn gist_url(&self) -> Option<&str> {
        self.gist_url.as_deref()
    }

    /// Whether the manifest has been downloaded.
    pub fn is_cached(&self) -> bool {
        self.packages.is_some()
    }

    /// The manifest, downloading it through `source` if not cached.
    ///
    /// Without a gist URL the manifest is empty and nothing is fetched.
    /// Failed downloads are not cached.
    pub fn get_or_fetch(&mut self, source: &dyn ManifestSource) -> Result<&[PackageRequest]> {
        let Some(url) = self.gist_url.as_deref() else {
            return Ok(&[]);
        };
        if self.packages.is_none() {
            let packages = source.fetch(url)?;
            debug!("Manifest lists {} packages", packages.len());
            self.packages = Some(packages);
        }
        Ok(self.packages.as_deref().unwrap_or_default())
    }

    /// Drop the cached manifest so the next call downloads it again.
    pub fn invalidate(&mut self) {
        self.packages = None;
    }
}
