use serde_json::Value;
use tracing::{debug, instrument};

use super::Channel;
use crate::{
    api::{
        endpoints::{CHANNEL_SUBSCRIBE, SELF_SUBSCRIBES_LIST},
        BiliClient,
    },
    credential::Credential,
    errors::Result,
};

/// Channels the logged-in user subscribes to.
#[instrument(skip(client, credential))]
pub async fn get_self_subscribed_channels(client: &BiliClient, credential: &Credential) -> Result<Value> {
    credential.raise_for_no_sessdata()?;

    let api = client.endpoints().get(SELF_SUBSCRIBES_LIST)?;
    debug!(endpoint = api.comment, "Listing subscribed channels");
    client
        .request(api.method, &api.url, &[], &[], Some(credential))
        .await
}

/// Subscribes the logged-in user to `channel`. Not idempotent on our side;
/// every call is forwarded.
#[instrument(skip(client, credential))]
pub async fn subscribe_channel(client: &BiliClient, channel: &Channel, credential: &Credential) -> Result<Value> {
    credential.raise_for_no_sessdata()?;
    credential.raise_for_no_bili_jct()?;

    let api = client.endpoints().get(CHANNEL_SUBSCRIBE)?;
    debug!(endpoint = api.comment, channel_id = channel.channel_id(), "Subscribing to channel");
    let data = [("id", channel.channel_id().to_string())];
    client
        .request(api.method, &api.url, &[], &data, Some(credential))
        .await
}
