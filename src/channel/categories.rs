//! Channel categories (游戏, 鬼畜, ...) and the channels filed under them

use reqwest::Method;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::Channel;
use crate::{
    api::{
        endpoints::{CATEGORIES_LIST, CATEGORIES_SUB_CHANNELS},
        BiliClient,
    },
    credential::Credential,
    errors::{BiliError, Result},
    models::CategoryDetail,
};

pub const DEFAULT_CATEGORY_OFFSET: &str = "0";

/// All channel categories.
#[instrument(skip(client))]
pub async fn list_categories(client: &BiliClient) -> Result<Value> {
    let api = client.endpoints().get(CATEGORIES_LIST)?;
    debug!(endpoint = api.comment, "Listing channel categories");
    client.request(Method::GET, &api.url, &[], &[], None).await
}

/// One page of channels in a category.
///
/// `offset` is the id of the first channel on the page, as reported by the
/// previous page. Start with [`DEFAULT_CATEGORY_OFFSET`].
#[instrument(skip(client, credential))]
pub async fn get_category_detail(
    client: &BiliClient,
    category_id: i64,
    offset: &str,
    credential: Option<&Credential>,
) -> Result<Value> {
    let api = client.endpoints().get(CATEGORIES_SUB_CHANNELS)?;
    debug!(endpoint = api.comment, "Fetching category page");
    let params = [
        ("id", category_id.to_string()),
        ("offset", offset.to_string()),
    ];
    client
        .request(Method::GET, &api.url, &params, &[], credential)
        .await
}

/// Every channel in a category, following the offset cursor page by page.
///
/// Stops when a page reports `has_more: false`, or after
/// `ClientConfig::max_category_pages` pages when that is set.
#[instrument(skip(client))]
pub async fn list_channels_in_category(client: &BiliClient, category_id: i64) -> Result<Vec<Channel>> {
    let max_pages = client.config().max_category_pages;
    let mut channels = Vec::new();
    let mut offset = DEFAULT_CATEGORY_OFFSET.to_string();
    let mut pages = 0usize;

    loop {
        let raw = get_category_detail(client, category_id, &offset, None).await?;
        let detail: CategoryDetail =
            serde_json::from_value(raw).map_err(|e| BiliError::MissingField(e.to_string()))?;
        pages += 1;

        debug!(
            page = pages,
            count = detail.archive_channels.len(),
            has_more = detail.has_more,
            "Fetched category page"
        );

        channels.extend(detail.archive_channels.iter().map(|c| Channel::new(c.id)));

        if !detail.has_more {
            break;
        }
        if max_pages.is_some_and(|max| pages >= max) {
            warn!(pages, "Category page limit reached, stopping early");
            break;
        }
        offset = detail
            .offset
            .ok_or_else(|| BiliError::MissingField("offset".to_string()))?;
    }

    Ok(channels)
}
