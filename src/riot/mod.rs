//! Riot API Module
//!
//! Routing, call descriptors, upstream DTOs and the cached, rate-limited
//! request pipeline every upstream call goes through.

pub mod call;
pub mod client;
pub mod dto;
mod endpoints;
pub mod region;
pub mod retry;

pub use call::{CacheTtlClass, HostTemplate, RoutingDomain, UpstreamCall, DEFAULT_HOST_TEMPLATE};
pub use client::RiotClient;
pub use region::{Continent, Platform};
pub use retry::RetryPolicy;
