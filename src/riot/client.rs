//! Request pipeline for the Riot API.
//!
//! Every upstream GET goes through [`RiotClient::fetch`]: cache lookup, then
//! rate-limited dispatch with bounded retries, response classification, and
//! cache population on success.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderValue, ACCEPT, RETRY_AFTER};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::cache::ResponseCache;
use crate::error::{ApiError, Result};
use crate::limiter::RateLimiter;
use crate::riot::call::{HostTemplate, UpstreamCall};
use crate::riot::dto::ErrorEnvelope;
use crate::riot::retry::{parse_retry_after, AttemptOutcome, RetryExhausted, RetryPolicy};

/// Header carrying the static API credential.
pub const TOKEN_HEADER: &str = "X-Riot-Token";

// == Riot Client ==
/// Service object owning the shared cache and rate limiter for one credential.
///
/// Construct once and share behind an `Arc`; every clone of that `Arc` draws
/// from the same request budget.
#[derive(Debug)]
pub struct RiotClient {
    http: reqwest::Client,
    api_key: String,
    hosts: HostTemplate,
    cache: Arc<ResponseCache<Value>>,
    limiter: Arc<RateLimiter>,
    retry: RetryPolicy,
}

impl RiotClient {
    // == Constructor ==
    /// Creates a client with a fresh cache, default windows and retry policy.
    pub fn new(
        api_key: impl Into<String>,
        hosts: HostTemplate,
        timeout: Duration,
    ) -> std::result::Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            api_key: api_key.into(),
            hosts,
            cache: Arc::new(ResponseCache::new()),
            limiter: Arc::new(RateLimiter::default()),
            retry: RetryPolicy::default(),
        })
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_rate_limiter(mut self, limiter: Arc<RateLimiter>) -> Self {
        self.limiter = limiter;
        self
    }

    pub fn with_cache(mut self, cache: Arc<ResponseCache<Value>>) -> Self {
        self.cache = cache;
        self
    }

    pub fn cache(&self) -> &Arc<ResponseCache<Value>> {
        &self.cache
    }

    pub fn limiter(&self) -> &Arc<RateLimiter> {
        &self.limiter
    }

    // == Fetch ==
    /// Fetches `call` and decodes it into `T`.
    ///
    /// Cache hits skip the rate limiter entirely. Misses wait for an admission
    /// slot, then make up to `max_attempts` network attempts. Only decoded
    /// successes are cached, for the TTL of the call's path class.
    pub async fn fetch<T: DeserializeOwned>(&self, call: &UpstreamCall) -> Result<T> {
        let url = call.url(&self.hosts)?;
        let key = url.to_string();
        let ttl = call.ttl_class().ttl();

        let mut fresh: Option<T> = None;
        let slot = &mut fresh;
        let url = &url;
        let value = self
            .cache
            .get_or_fetch(&key, ttl, || async move {
                let value = self.fetch_uncached(url).await?;
                *slot = Some(T::deserialize(&value)?);
                Ok::<_, ApiError>(value)
            })
            .await?;

        match fresh {
            Some(decoded) => Ok(decoded),
            None => {
                debug!(url = %key, "Cache hit");
                Ok(T::deserialize(&value)?)
            }
        }
    }

    async fn fetch_uncached(&self, url: &Url) -> Result<Value> {
        debug!(%url, "Cache miss, waiting for rate limiter");
        self.limiter.wait().await;

        let (response, attempts) = self.send_with_retry(url).await?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.to_string(),
                attempts,
                source,
            })?;

        if status.is_success() {
            return Ok(serde_json::from_slice(&body)?);
        }

        Err(classify_error(status, &body))
    }

    /// Sends the GET until it gets a non-429 answer or the attempt budget is spent.
    ///
    /// Returns the response together with the number of attempts made.
    async fn send_with_retry(&self, url: &Url) -> Result<(reqwest::Response, u32)> {
        let outcome = self
            .retry
            .run(|attempt| async move {
                let result = self
                    .http
                    .get(url.clone())
                    .header(TOKEN_HEADER, &self.api_key)
                    .header(ACCEPT, HeaderValue::from_static("application/json"))
                    .send()
                    .await;

                match result {
                    Ok(response) if response.status() == StatusCode::TOO_MANY_REQUESTS => {
                        let retry_after = parse_retry_after(
                            response
                                .headers()
                                .get(RETRY_AFTER)
                                .and_then(|v| v.to_str().ok()),
                        );
                        warn!(%url, attempt, ?retry_after, "Rate limited by upstream");
                        AttemptOutcome::RateLimited(retry_after)
                    }
                    Ok(response) => AttemptOutcome::Done(response),
                    Err(source) => {
                        warn!(%url, attempt, error = %source, "Request failed");
                        AttemptOutcome::Failed(source)
                    }
                }
            })
            .await;

        outcome.map_err(|exhausted| match exhausted {
            RetryExhausted::RateLimited {
                attempts,
                retry_after,
            } => ApiError::RateLimited {
                attempts,
                retry_after_secs: retry_after.map(|d| d.as_secs()),
            },
            RetryExhausted::Failed { attempts, error } => ApiError::Transport {
                url: url.to_string(),
                attempts,
                source: error,
            },
        })
    }
}

/// Turns a non-success response into a structured or raw upstream error.
fn classify_error(status: StatusCode, body: &[u8]) -> ApiError {
    match serde_json::from_slice::<ErrorEnvelope>(body) {
        Ok(envelope) => ApiError::Upstream {
            status_code: envelope.status.status_code.unwrap_or(status.as_u16()),
            message: envelope.status.message,
        },
        Err(_) => ApiError::UpstreamRaw {
            status: status.as_u16(),
            body: String::from_utf8_lossy(body).into_owned(),
        },
    }
}
