//! Extraction of the `window.__INITIAL_STATE__` blob from server-rendered pages

use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::header::{COOKIE, USER_AGENT};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::{
    api::BiliClient,
    credential::Credential,
    errors::{BiliError, Result},
};

// Non-greedy: the first `};` after the assignment ends the object.
static INITIAL_STATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"window\.__INITIAL_STATE__=(\{.*?\});").expect("initial state pattern compiles")
});

/// Pulls the initial state object out of an HTML document.
pub fn extract_initial_state(html: &str) -> Result<Value> {
    let captures = INITIAL_STATE
        .captures(html)
        .ok_or(BiliError::StateNotFound)?;

    let json_str = captures
        .get(1)
        .ok_or(BiliError::StateNotFound)?
        .as_str();

    serde_json::from_str(json_str).map_err(|e| BiliError::StateParse(e.to_string()))
}

/// Fetches `url` like a browser would and returns its initial state.
#[instrument(skip(client, credential))]
pub async fn pick_initial_state(
    client: &BiliClient,
    url: &str,
    credential: Option<&Credential>,
) -> Result<Value> {
    let mut request = client
        .http()
        .get(url)
        .header(USER_AGENT, &client.config().user_agent);

    if let Some(cookie) = credential.and_then(Credential::cookie_header) {
        request = request.header(COOKIE, cookie);
    }

    let html = request
        .send()
        .await
        .map_err(|e| BiliError::Response(e.to_string()))?
        .text()
        .await
        .map_err(|e| BiliError::Response(e.to_string()))?;

    debug!(length = html.len(), "Fetched page");

    extract_initial_state(&html)
}
