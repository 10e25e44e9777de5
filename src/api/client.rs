//! Request executor for bilibili's JSON API

use reqwest::{
    header::{COOKIE, REFERER, USER_AGENT},
    Client, Method, Response,
};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::{endpoints::Endpoints, types::ApiEnvelope};
use crate::{
    config::ClientConfig,
    credential::Credential,
    errors::{BiliError, Result},
};

/// Shared HTTP session plus the endpoint registry. Cheap to borrow from many
/// concurrent tasks; nothing inside is mutated after construction.
#[derive(Debug, Clone)]
pub struct BiliClient {
    http: Client,
    config: ClientConfig,
    endpoints: Endpoints,
}

impl BiliClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = Client::builder().timeout(config.timeout).build()?;
        let endpoints = Endpoints::new(&config.api_base)?;

        Ok(Self {
            http,
            config,
            endpoints,
        })
    }

    pub fn http(&self) -> &Client {
        &self.http
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Sends one request and unwraps the `{code, message, data}` envelope.
    ///
    /// Without a credential the request is anonymous. Anything other than GET
    /// needs `bili_jct`, which is also sent as the `csrf` form fields.
    #[instrument(skip(self, params, data, credential))]
    pub async fn request(
        &self,
        method: Method,
        url: &str,
        params: &[(&str, String)],
        data: &[(&str, String)],
        credential: Option<&Credential>,
    ) -> Result<Value> {
        let anonymous;
        let credential = match credential {
            Some(credential) => credential,
            None => {
                anonymous = Credential::default();
                &anonymous
            }
        };

        let is_get = method == Method::GET;
        if !is_get {
            credential.raise_for_no_bili_jct()?;
        }

        let mut request = self
            .http
            .request(method, url)
            .header(USER_AGENT, &self.config.user_agent)
            .header(REFERER, self.config.web_base.as_str())
            .query(params);

        if let Some(cookie) = credential.cookie_header() {
            request = request.header(COOKIE, cookie);
        }

        if !is_get {
            let mut form = data.to_vec();
            if let Some(bili_jct) = &credential.bili_jct {
                form.push(("csrf", bili_jct.clone()));
                form.push(("csrf_token", bili_jct.clone()));
            }
            request = request.form(&form);
        }

        debug!(url, params = params.len(), "Sending request");

        let resp = request
            .send()
            .await
            .map_err(|e| BiliError::Response(e.to_string()))?;

        let resp = check_status(resp).await?;

        let envelope: ApiEnvelope = resp
            .json()
            .await
            .map_err(|e| BiliError::ParseError(e.to_string()))?;

        if envelope.code != 0 {
            return Err(BiliError::Api {
                code: envelope.code,
                message: envelope.message,
            });
        }

        Ok(envelope.into_payload())
    }
}

async fn check_status(resp: Response) -> Result<Response> {
    match resp.status() {
        reqwest::StatusCode::TOO_MANY_REQUESTS => Err(BiliError::Ratelimited),
        reqwest::StatusCode::FORBIDDEN => Err(BiliError::Forbidden),
        reqwest::StatusCode::NOT_FOUND => Err(BiliError::NotFound),
        reqwest::StatusCode::UNAUTHORIZED => Err(BiliError::Unauthorized),
        reqwest::StatusCode::INTERNAL_SERVER_ERROR | reqwest::StatusCode::SERVICE_UNAVAILABLE => {
            Err(BiliError::InternalServerError)
        }
        status if status.is_success() => Ok(resp),
        status => {
            let body = resp
                .text()
                .await
                .map_err(|e| BiliError::ParseError(e.to_string()))?;
            warn!(status = status.as_u16(), body = %body, "Unknown status code");
            Err(BiliError::UnknownStatusCode(status))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, header, header_exists, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> BiliClient {
        BiliClient::new(ClientConfig::with_base(&server.uri()).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_get_returns_data() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/x/echo"))
            .and(query_param("id", "7"))
            .and(header_exists("user-agent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "code": 0,
                "message": "0",
                "data": {"echo": 7}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let url = format!("{}/x/echo", server.uri());
        let result = client
            .request(Method::GET, &url, &[("id", "7".to_string())], &[], None)
            .await
            .unwrap();

        assert_eq!(result, json!({"echo": 7}));
    }

    #[tokio::test]
    async fn test_cookies_attached() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header("cookie", "SESSDATA=sess; bili_jct=jct"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 0, "data": []})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let credential = Credential::new("sess", "jct");
        let result = client
            .request(Method::GET, &server.uri(), &[], &[], Some(&credential))
            .await
            .unwrap();

        assert_eq!(result, json!([]));
    }

    #[tokio::test]
    async fn test_nonzero_code_is_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "code": -101,
                "message": "账号未登录",
                "ttl": 1
            })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let result = client.request(Method::GET, &server.uri(), &[], &[], None).await;

        match result {
            Err(BiliError::Api { code, message }) => {
                assert_eq!(code, -101);
                assert_eq!(message, "账号未登录");
            }
            other => panic!("Expected API error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_status_codes() {
        let server = MockServer::start().await;
        Mock::given(path("/limited"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;
        Mock::given(path("/teapot"))
            .respond_with(ResponseTemplate::new(418).set_body_string("short and stout"))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let limited = client
            .request(Method::GET, &format!("{}/limited", server.uri()), &[], &[], None)
            .await;
        assert!(matches!(limited, Err(BiliError::Ratelimited)));

        let teapot = client
            .request(Method::GET, &format!("{}/teapot", server.uri()), &[], &[], None)
            .await;
        assert!(matches!(
            teapot,
            Err(BiliError::UnknownStatusCode(status)) if status.as_u16() == 418
        ));
    }

    #[tokio::test]
    async fn test_invalid_body_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let result = client.request(Method::GET, &server.uri(), &[], &[], None).await;
        assert!(matches!(result, Err(BiliError::ParseError(_))));
    }

    #[tokio::test]
    async fn test_transport_failure_is_response_error() {
        let client = BiliClient::new(ClientConfig::default()).unwrap();
        // Nothing listens on port 9 of the loopback interface.
        let result = client
            .request(Method::GET, "http://127.0.0.1:9/", &[], &[], None)
            .await;

        let err = result.unwrap_err();
        assert!(matches!(err, BiliError::Response(_)));
        assert_eq!(err.kind(), crate::errors::ErrorKind::Transport);
    }

    #[tokio::test]
    async fn test_post_adds_csrf() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_string_contains("id=5"))
            .and(body_string_contains("csrf=jct"))
            .and(body_string_contains("csrf_token=jct"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 0, "data": null})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let credential = Credential::new("sess", "jct");
        let result = client
            .request(
                Method::POST,
                &server.uri(),
                &[],
                &[("id", "5".to_string())],
                Some(&credential),
            )
            .await
            .unwrap();

        assert_eq!(result, Value::Null);
    }

    #[tokio::test]
    async fn test_post_without_bili_jct_never_sends() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let result = client
            .request(Method::POST, &server.uri(), &[], &[("id", "5".to_string())], None)
            .await;

        assert!(matches!(result, Err(BiliError::CredentialNoBiliJct)));
    }
}
