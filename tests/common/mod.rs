//! Shared fixtures for integration tests.
//!
//! [`FakeUpstream`] is a local axum server standing in for the Riot API. The
//! client under test reaches it through a `http://127.0.0.1:PORT/{host}`
//! template, so every routing value shows up as the first path segment.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, StatusCode, Uri},
    response::Response,
    Router,
};
use rank_gateway::limiter::{RateLimiter, WindowConfig};
use rank_gateway::riot::{HostTemplate, RetryPolicy, RiotClient};
use serde_json::{json, Value};

pub const API_KEY: &str = "RGAPI-integration";

// == Canned Responses ==
#[derive(Debug, Clone)]
pub struct Canned {
    status: u16,
    retry_after: Option<&'static str>,
    body: String,
}

impl Canned {
    pub fn json(value: Value) -> Self {
        Self {
            status: 200,
            retry_after: None,
            body: value.to_string(),
        }
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            retry_after: None,
            body: body.into(),
        }
    }

    /// Error body in the upstream's `{"status": {...}}` shape.
    pub fn envelope(status: u16, message: &str) -> Self {
        Self::status(
            status,
            json!({ "status": { "message": message, "status_code": status } }).to_string(),
        )
    }

    pub fn too_many(retry_after: Option<&'static str>) -> Self {
        Self {
            status: 429,
            retry_after,
            body: String::new(),
        }
    }
}

#[derive(Default)]
struct Shared {
    routes: Mutex<HashMap<String, VecDeque<Canned>>>,
    hits: Mutex<Vec<String>>,
    tokens: Mutex<Vec<String>>,
}

// == Fake Upstream ==
pub struct FakeUpstream {
    addr: SocketAddr,
    shared: Arc<Shared>,
}

impl FakeUpstream {
    pub async fn start() -> Self {
        let shared = Arc::new(Shared::default());
        let app = Router::new().fallback(respond).with_state(shared.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Self { addr, shared }
    }

    /// Serves `responses` in order for `path`; the last one repeats.
    pub fn route(&self, path: &str, responses: Vec<Canned>) {
        self.shared
            .routes
            .lock()
            .unwrap()
            .insert(path.to_string(), responses.into());
    }

    pub fn json(&self, path: &str, value: Value) {
        self.route(path, vec![Canned::json(value)]);
    }

    /// Requests received for `path`, ignoring the query string.
    pub fn hits(&self, path: &str) -> usize {
        self.shared
            .hits
            .lock()
            .unwrap()
            .iter()
            .filter(|hit| hit.split('?').next() == Some(path))
            .count()
    }

    pub fn total_hits(&self) -> usize {
        self.shared.hits.lock().unwrap().len()
    }

    /// Full path and query of every request, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.shared.hits.lock().unwrap().clone()
    }

    pub fn tokens(&self) -> Vec<String> {
        self.shared.tokens.lock().unwrap().clone()
    }

    pub fn template(&self) -> String {
        format!("http://{}/{{host}}", self.addr)
    }

    /// Client with short retry waits and a budget large enough never to block.
    pub fn client(&self) -> RiotClient {
        client_for(&self.template())
    }
}

pub fn client_for(template: &str) -> RiotClient {
    let hosts = HostTemplate::new(template).unwrap();
    RiotClient::new(API_KEY, hosts, Duration::from_secs(5))
        .unwrap()
        .with_retry_policy(fast_retry())
        .with_rate_limiter(Arc::new(roomy_limiter()))
}

pub fn fast_retry() -> RetryPolicy {
    RetryPolicy {
        max_attempts: 3,
        rate_limit_wait: Duration::from_millis(20),
        transport_backoff: Duration::from_millis(10),
    }
}

pub fn roomy_limiter() -> RateLimiter {
    RateLimiter::new(
        WindowConfig {
            limit: 1_000,
            window: Duration::from_secs(1),
        },
        WindowConfig {
            limit: 1_000,
            window: Duration::from_secs(120),
        },
    )
}

async fn respond(State(shared): State<Arc<Shared>>, uri: Uri, headers: HeaderMap) -> Response {
    let path = uri.path().to_string();
    let full = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| path.clone());
    shared.hits.lock().unwrap().push(full);
    if let Some(token) = headers.get("x-riot-token").and_then(|v| v.to_str().ok()) {
        shared.tokens.lock().unwrap().push(token.to_string());
    }

    let canned = {
        let mut routes = shared.routes.lock().unwrap();
        match routes.get_mut(&path) {
            Some(queue) if queue.len() > 1 => queue.pop_front(),
            Some(queue) => queue.front().cloned(),
            None => None,
        }
    }
    .unwrap_or_else(|| Canned::envelope(404, "Data not found"));

    let mut builder = Response::builder()
        .status(StatusCode::from_u16(canned.status).unwrap())
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(secs) = canned.retry_after {
        builder = builder.header(header::RETRY_AFTER, secs);
    }
    builder.body(Body::from(canned.body)).unwrap()
}

// == Payload Builders ==
pub fn summoner(puuid: &str, icon: i64) -> Value {
    json!({ "puuid": puuid, "profileIconId": icon, "summonerLevel": 300 })
}

pub fn account(puuid: &str, game_name: &str, tag_line: &str) -> Value {
    json!({ "puuid": puuid, "gameName": game_name, "tagLine": tag_line })
}

pub fn solo_entry(tier: &str, rank: &str, lp: i32) -> Value {
    json!({
        "queueType": "RANKED_SOLO_5x5",
        "tier": tier,
        "rank": rank,
        "leaguePoints": lp,
        "wins": 40,
        "losses": 35
    })
}

/// One match where `puuid` played `position` with the given line.
pub fn game(
    match_id: &str,
    puuid: &str,
    position: &str,
    win: bool,
    (kills, deaths, assists): (i64, i64, i64),
    creep_score: i64,
    duration_seconds: i64,
) -> Value {
    json!({
        "metadata": { "matchId": match_id, "participants": [puuid, "someone-else"] },
        "info": {
            "gameDuration": duration_seconds,
            "participants": [
                {
                    "puuid": "someone-else",
                    "teamPosition": position,
                    "win": !win,
                    "kills": 0,
                    "deaths": 9,
                    "assists": 0,
                    "totalMinionsKilled": 10,
                    "neutralMinionsKilled": 0
                },
                {
                    "puuid": puuid,
                    "teamPosition": position,
                    "win": win,
                    "kills": kills,
                    "deaths": deaths,
                    "assists": assists,
                    "totalMinionsKilled": creep_score - 40,
                    "neutralMinionsKilled": 40
                }
            ]
        }
    })
}
