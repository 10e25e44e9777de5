//! Endpoint registry keyed by logical operation names

use std::collections::HashMap;

use reqwest::Method;
use url::Url;

use crate::errors::{BiliError, Result};

pub const CATEGORIES_LIST: &str = "categories.list";
pub const CATEGORIES_SUB_CHANNELS: &str = "categories.sub_channels";
pub const CHANNEL_LIST_FILTER: &str = "channel.list_filter";
pub const CHANNEL_LIST_MULTIPLE: &str = "channel.list_multiple";
pub const CHANNEL_SUBSCRIBE: &str = "channel.subscribe";
pub const SELF_SUBSCRIBES_LIST: &str = "self_subscribes.list";

const ROUTES: &[(&str, &str, &str, &str)] = &[
    (CATEGORIES_LIST, "GET", "/x/web-interface/web/channel/category/list", "所有频道分类"),
    (
        CATEGORIES_SUB_CHANNELS,
        "GET",
        "/x/web-interface/web/channel/category/channel_arc/list",
        "频道分类下的频道",
    ),
    (CHANNEL_LIST_FILTER, "GET", "/x/web-interface/web/channel/featured/list", "按年份筛选的频道视频"),
    (CHANNEL_LIST_MULTIPLE, "GET", "/x/web-interface/web/channel/multiple/list", "排序后的频道视频"),
    (CHANNEL_SUBSCRIBE, "POST", "/x/web-interface/web/channel/subscribe", "订阅频道"),
    (SELF_SUBSCRIBES_LIST, "GET", "/x/web-interface/web/channel/subscribe/list", "自己订阅的频道"),
];

/// One URL template. Handed out by value so callers may extend the URL freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub url: String,
    pub method: Method,
    pub comment: &'static str,
}

#[derive(Debug, Clone)]
pub struct Endpoints {
    routes: HashMap<&'static str, Endpoint>,
}

impl Endpoints {
    pub fn new(api_base: &Url) -> Result<Self> {
        let mut routes = HashMap::with_capacity(ROUTES.len());
        for &(key, method, path, comment) in ROUTES {
            let url = api_base.join(path)?;
            let method = Method::from_bytes(method.as_bytes())
                .map_err(|_| BiliError::UnknownEndpoint(key.to_string()))?;
            routes.insert(
                key,
                Endpoint {
                    url: url.to_string(),
                    method,
                    comment,
                },
            );
        }
        Ok(Self { routes })
    }

    /// Returns a fresh copy of the endpoint registered under `key`.
    pub fn get(&self, key: &str) -> Result<Endpoint> {
        self.routes
            .get(key)
            .cloned()
            .ok_or_else(|| BiliError::UnknownEndpoint(key.to_string()))
    }
}
