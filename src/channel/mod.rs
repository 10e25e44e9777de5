//! 频道: bilibili channels, which are separate from the video zones

pub mod categories;
pub mod order;
pub mod subscriptions;

use reqwest::Method;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::{
    api::{
        endpoints::{CHANNEL_LIST_FILTER, CHANNEL_LIST_MULTIPLE},
        BiliClient, Endpoints,
    },
    errors::{BiliError, Result},
    web::{pick_initial_state, resolve_real_url},
};

pub use order::{ChannelVideosFilter, ChannelVideosOrder, VideoListOption};

pub const DEFAULT_PAGE_SIZE: u32 = 30;
pub const DEFAULT_VIDEO_OFFSET: &str = "";

const TAG_CHANNELS_POINTER: &str = "/channelDetailBanner/data/tag_channels";

/// A channel, known only by its id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Channel {
    channel_id: i64,
}

impl Channel {
    pub fn new(channel_id: i64) -> Self {
        Self { channel_id }
    }

    pub fn channel_id(&self) -> i64 {
        self.channel_id
    }

    /// The channel page's `window.__INITIAL_STATE__`.
    #[instrument(skip(self, client), fields(channel_id = self.channel_id))]
    pub async fn get_info(&self, client: &BiliClient) -> Result<Value> {
        let page_url = client
            .config()
            .web_base
            .join(&format!("v/channel/{}", self.channel_id))?;
        let real_url = resolve_real_url(client, page_url.as_str()).await;
        pick_initial_state(client, &real_url, None).await
    }

    /// Channels bilibili lists as related, from the page banner.
    #[instrument(skip(self, client), fields(channel_id = self.channel_id))]
    pub async fn get_related_channels(&self, client: &BiliClient) -> Result<Vec<Value>> {
        let info = self.get_info(client).await?;
        related_channels(&info)
    }

    /// One page of this channel's videos.
    ///
    /// `offset` is the cursor from the previous page (empty for the first).
    #[instrument(skip(self, client), fields(channel_id = self.channel_id))]
    pub async fn get_list(
        &self,
        client: &BiliClient,
        option: Option<VideoListOption>,
        offset: &str,
        page_size: u32,
    ) -> Result<Value> {
        let url = video_list_url(client.endpoints(), option)?;
        let params = [
            ("channel_id", self.channel_id.to_string()),
            ("offset", offset.to_string()),
            ("page_size", page_size.to_string()),
        ];
        debug!(url = %url, "Listing channel videos");
        client.request(Method::GET, &url, &params, &[], None).await
    }
}

impl From<i64> for Channel {
    fn from(channel_id: i64) -> Self {
        Channel::new(channel_id)
    }
}

/// URL of the video list for `option`. Orders use the multi-order endpoint;
/// filters and `None` use the featured one.
pub fn video_list_url(endpoints: &Endpoints, option: Option<VideoListOption>) -> Result<String> {
    let key = match option {
        Some(VideoListOption::Order(_)) => CHANNEL_LIST_MULTIPLE,
        Some(VideoListOption::Filter(_)) | None => CHANNEL_LIST_FILTER,
    };
    let mut endpoint = endpoints.get(key)?;
    if let Some(option) = option {
        endpoint.url.push_str(option.query_fragment());
    }
    Ok(endpoint.url)
}

fn related_channels(info: &Value) -> Result<Vec<Value>> {
    info.pointer(TAG_CHANNELS_POINTER)
        .and_then(Value::as_array)
        .cloned()
        .ok_or_else(|| BiliError::MissingField("channelDetailBanner.data.tag_channels".to_string()))
}
