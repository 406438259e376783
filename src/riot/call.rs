//! Upstream call descriptors.
//!
//! An [`UpstreamCall`] names the routing domain, platform and path of one GET;
//! the fully-qualified URL it resolves to doubles as the cache key.

use std::time::Duration;

use reqwest::Url;

use crate::error::{ApiError, Result};
use crate::riot::region::Platform;

/// Placeholder replaced by the routing host in [`HostTemplate`].
pub const HOST_PLACEHOLDER: &str = "{host}";

/// Production base URL for every routing value.
pub const DEFAULT_HOST_TEMPLATE: &str = "https://{host}.api.riotgames.com";

// == Routing Domain ==
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutingDomain {
    /// Platform hosts: summoner, league
    Regional,
    /// Continental hosts: account, match
    Continental,
}

// == Cache TTL Class ==
/// Freshness class of an endpoint, picked from its path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheTtlClass {
    League,
    Summoner,
    Account,
    Match,
    Other,
}

impl CacheTtlClass {
    /// Classifies by path substring; earlier rules win.
    pub fn for_path(path: &str) -> Self {
        if path.contains("/league/") || path.contains("/league-exp/") {
            CacheTtlClass::League
        } else if path.contains("/summoner/") {
            CacheTtlClass::Summoner
        } else if path.contains("/account/") {
            CacheTtlClass::Account
        } else if path.contains("/match/") {
            CacheTtlClass::Match
        } else {
            CacheTtlClass::Other
        }
    }

    pub fn ttl(self) -> Duration {
        match self {
            CacheTtlClass::League => Duration::from_secs(5 * 60),
            CacheTtlClass::Summoner => Duration::from_secs(10 * 60),
            CacheTtlClass::Account => Duration::from_secs(30 * 60),
            // Finished matches never change
            CacheTtlClass::Match => Duration::from_secs(60 * 60),
            CacheTtlClass::Other => Duration::from_secs(15 * 60),
        }
    }
}

// == Host Template ==
/// Base URL pattern with a `{host}` slot for the routing value.
#[derive(Debug, Clone)]
pub struct HostTemplate(String);

impl HostTemplate {
    /// Checks that the template yields a valid base URL.
    pub fn new(template: impl Into<String>) -> Result<Self> {
        let template = HostTemplate(template.into());
        template.base_url(Platform::Jp1.host())?;
        Ok(template)
    }

    fn base_url(&self, host: &str) -> Result<Url> {
        let raw = self.0.replace(HOST_PLACEHOLDER, host);
        Url::parse(&raw).map_err(|e| {
            ApiError::InvalidRequest(format!("invalid upstream base url '{}': {}", raw, e))
        })
    }
}

impl Default for HostTemplate {
    fn default() -> Self {
        HostTemplate(DEFAULT_HOST_TEMPLATE.to_string())
    }
}

// == Upstream Call ==
/// One upstream GET, built per call.
#[derive(Debug, Clone)]
pub struct UpstreamCall {
    pub domain: RoutingDomain,
    pub platform: Platform,
    segments: Vec<String>,
    query: Vec<(&'static str, String)>,
}

impl UpstreamCall {
    pub fn regional<S: AsRef<str>>(platform: Platform, segments: &[S]) -> Self {
        Self::new(RoutingDomain::Regional, platform, segments)
    }

    pub fn continental<S: AsRef<str>>(platform: Platform, segments: &[S]) -> Self {
        Self::new(RoutingDomain::Continental, platform, segments)
    }

    fn new<S: AsRef<str>>(domain: RoutingDomain, platform: Platform, segments: &[S]) -> Self {
        Self {
            domain,
            platform,
            segments: segments.iter().map(|s| s.as_ref().to_string()).collect(),
            query: Vec::new(),
        }
    }

    pub fn query(mut self, name: &'static str, value: impl ToString) -> Self {
        self.query.push((name, value.to_string()));
        self
    }

    /// Unencoded path, used for TTL classification and logging.
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }

    pub fn ttl_class(&self) -> CacheTtlClass {
        CacheTtlClass::for_path(&self.path())
    }

    fn routing_host(&self) -> &'static str {
        match self.domain {
            RoutingDomain::Regional => self.platform.host(),
            RoutingDomain::Continental => self.platform.continent().host(),
        }
    }

    /// Resolves the fully-qualified URL, percent-encoding each path segment.
    pub fn url(&self, hosts: &HostTemplate) -> Result<Url> {
        let mut url = hosts.base_url(self.routing_host())?;
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidRequest("upstream base url cannot carry a path".into()))?
            .pop_if_empty()
            .extend(&self.segments);
        if !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in &self.query {
                pairs.append_pair(name, value);
            }
        }
        Ok(url)
    }
}
