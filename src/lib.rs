//! Client for bilibili's channel (频道) feature.
//!
//! Channels group videos by topic and are independent of the site's video
//! zones. Everything here is a thin layer over bilibili's web API: requests go
//! out through a [`BiliClient`] and the decoded JSON comes back mostly as is.
//!
//! ```rust,ignore
//! use bilibili_channel::{BiliClient, Channel, ChannelVideosOrder, ClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> bilibili_channel::Result<()> {
//!     let client = BiliClient::new(ClientConfig::default())?;
//!
//!     for channel in bilibili_channel::list_channels_in_category(&client, 1).await? {
//!         let page = channel
//!             .get_list(&client, Some(ChannelVideosOrder::Hot.into()), "", 30)
//!             .await?;
//!         println!("{}: {}", channel.channel_id(), page["offset"]);
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod channel;
pub mod config;
pub mod credential;
pub mod errors;
pub mod models;
pub mod web;

pub use api::BiliClient;
pub use channel::{
    categories::{get_category_detail, list_categories, list_channels_in_category},
    subscriptions::{get_self_subscribed_channels, subscribe_channel},
    Channel, ChannelVideosFilter, ChannelVideosOrder, VideoListOption,
};
pub use config::ClientConfig;
pub use credential::Credential;
pub use errors::{BiliError, ErrorKind, Result};
