//! JSON API plumbing: endpoint registry, request executor and envelope types

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::BiliClient;
pub use endpoints::{Endpoint, Endpoints};
