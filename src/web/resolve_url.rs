use reqwest::header::USER_AGENT;
use tracing::{debug, instrument, warn};

use crate::api::BiliClient;

/// Follows redirects with a HEAD request and returns where `url` finally lands.
///
/// Short links and canonical channel pages both redirect; when the lookup
/// itself fails the input URL is returned unchanged.
#[instrument(skip(client))]
pub async fn resolve_real_url(client: &BiliClient, url: &str) -> String {
    let resp = client
        .http()
        .head(url)
        .header(USER_AGENT, &client.config().user_agent)
        .send()
        .await;

    match resp {
        Ok(resp) => {
            let real_url = resp.url().to_string();
            debug!(real_url = %real_url, "Resolved url");
            real_url
        }
        Err(e) => {
            warn!(error = %e, "Failed to resolve url, using it as is");
            url.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_resolve_follows_redirect() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .and(path("/v/channel/9222"))
            .respond_with(
                ResponseTemplate::new(302)
                    .insert_header("location", format!("{}/channel/9222.html", server.uri()).as_str()),
            )
            .mount(&server)
            .await;
        Mock::given(method("HEAD"))
            .and(path("/channel/9222.html"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = BiliClient::new(ClientConfig::with_base(&server.uri()).unwrap()).unwrap();
        let real_url = resolve_real_url(&client, &format!("{}/v/channel/9222", server.uri())).await;

        assert_eq!(real_url, format!("{}/channel/9222.html", server.uri()));
    }

    #[tokio::test]
    async fn test_resolve_without_redirect_keeps_url() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = BiliClient::new(ClientConfig::with_base(&server.uri()).unwrap()).unwrap();
        let url = format!("{}/v/channel/1", server.uri());

        assert_eq!(resolve_real_url(&client, &url).await, url);
    }

    #[tokio::test]
    async fn test_resolve_failure_returns_input() {
        let client = BiliClient::new(ClientConfig::default()).unwrap();
        let url = "http://127.0.0.1:9/v/channel/1";

        assert_eq!(resolve_real_url(&client, url).await, url);
    }
}
