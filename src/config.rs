//! Configuration Module
//!
//! Handles loading and managing gateway configuration from environment variables.

use std::env;
use std::time::Duration;

use anyhow::{bail, Context};

use crate::cache::DEFAULT_SWEEP_INTERVAL_SECS;
use crate::riot::DEFAULT_HOST_TEMPLATE;

/// Origins allowed when `ALLOWED_ORIGINS` is unset (local frontend dev servers)
const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://localhost:3000"];

/// Gateway configuration parameters.
#[derive(Debug, Clone)]
pub struct Config {
    /// Upstream API credential
    pub api_key: String,
    /// HTTP server port
    pub server_port: u16,
    /// Origins allowed by CORS
    pub allowed_origins: Vec<String>,
    /// Seconds between cache sweeps
    pub cache_sweep_interval: u64,
    /// Upstream base URL pattern containing `{host}`
    pub upstream_host_template: String,
    /// Per-request upstream timeout in seconds
    pub request_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `RIOT_API_KEY` - Upstream credential (required)
    /// - `PORT` - HTTP server port (default: 8080)
    /// - `ALLOWED_ORIGINS` - Comma-separated CORS origins (default: local dev servers)
    /// - `CACHE_SWEEP_INTERVAL` - Sweep frequency in seconds (default: 300)
    /// - `UPSTREAM_HOST_TEMPLATE` - Base URL with `{host}` (default: Riot production hosts)
    /// - `REQUEST_TIMEOUT` - Upstream request timeout in seconds (default: 30)
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();

        let api_key = env::var("RIOT_API_KEY").context("RIOT_API_KEY environment variable is not set")?;
        if api_key.trim().is_empty() {
            bail!("RIOT_API_KEY environment variable is empty");
        }

        Ok(Self {
            api_key,
            server_port: parse_var("PORT").unwrap_or(defaults.server_port),
            allowed_origins: env::var("ALLOWED_ORIGINS")
                .ok()
                .map(|v| parse_origins(&v))
                .filter(|origins| !origins.is_empty())
                .unwrap_or(defaults.allowed_origins),
            cache_sweep_interval: parse_var("CACHE_SWEEP_INTERVAL")
                .filter(|secs| *secs > 0)
                .unwrap_or(defaults.cache_sweep_interval),
            upstream_host_template: env::var("UPSTREAM_HOST_TEMPLATE")
                .unwrap_or(defaults.upstream_host_template),
            request_timeout: parse_var("REQUEST_TIMEOUT").unwrap_or(defaults.request_timeout),
        })
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.cache_sweep_interval)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    /// Key prefix safe to print in logs.
    pub fn masked_api_key(&self) -> String {
        let prefix: String = self.api_key.chars().take(10).collect();
        format!("{}***", prefix)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            server_port: 8080,
            allowed_origins: DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect(),
            cache_sweep_interval: DEFAULT_SWEEP_INTERVAL_SECS,
            upstream_host_template: DEFAULT_HOST_TEMPLATE.to_string(),
            request_timeout: 30,
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}
