use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::blocks::{HomeView, MessageTemplate, ModalView};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("platform request failed: {0}")]
    Transport(String),
    #[error("platform rejected `{method}`: {reason}")]
    Platform { method: String, reason: String },
}

/// Outbound surface of the messaging platform. Handlers only ever talk to
/// this trait; the wire client lives behind it.
#[async_trait]
pub trait SlackApi: Send + Sync {
    async fn publish_home_view(&self, user_id: &str, view: HomeView) -> Result<(), ApiError>;
    async fn open_modal(&self, trigger_id: &str, view: ModalView) -> Result<(), ApiError>;
    async fn post_message(&self, channel: &str, message: MessageTemplate) -> Result<(), ApiError>;
    async fn respond_ephemeral(
        &self,
        response_url: &str,
        message: MessageTemplate,
    ) -> Result<(), ApiError>;
}

/// Accepts every call without side effects. Stands in wherever no real
/// platform connection is configured.
#[derive(Default)]
pub struct NoopSlackApi;

#[async_trait]
impl SlackApi for NoopSlackApi {
    async fn publish_home_view(&self, _user_id: &str, _view: HomeView) -> Result<(), ApiError> {
        Ok(())
    }

    async fn open_modal(&self, _trigger_id: &str, _view: ModalView) -> Result<(), ApiError> {
        Ok(())
    }

    async fn post_message(
        &self,
        _channel: &str,
        _message: MessageTemplate,
    ) -> Result<(), ApiError> {
        Ok(())
    }

    async fn respond_ephemeral(
        &self,
        _response_url: &str,
        _message: MessageTemplate,
    ) -> Result<(), ApiError> {
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct ApiResponseEnvelope {
    ok: bool,
    error: Option<String>,
}

/// Bearer-authenticated Web API client. The platform wraps every response
/// in an `ok` envelope; `ok: false` is an error even on HTTP 200.
pub struct HttpSlackApi {
    client: reqwest::Client,
    bot_token: SecretString,
    base_url: String,
}

impl HttpSlackApi {
    pub fn new(bot_token: SecretString) -> Self {
        Self::with_base_url(bot_token, "https://slack.com/api")
    }

    pub fn with_base_url(bot_token: SecretString, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            bot_token,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        }
    }

    async fn call(&self, method: &str, payload: serde_json::Value) -> Result<(), ApiError> {
        let response = self
            .client
            .post(format!("{}/{method}", self.base_url))
            .bearer_auth(self.bot_token.expose_secret())
            .json(&payload)
            .send()
            .await
            .map_err(|error| ApiError::Transport(error.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Platform {
                method: method.to_owned(),
                reason: format!("http status {status}"),
            });
        }

        let envelope: ApiResponseEnvelope =
            response.json().await.map_err(|error| ApiError::Transport(error.to_string()))?;
        if !envelope.ok {
            return Err(ApiError::Platform {
                method: method.to_owned(),
                reason: envelope.error.unwrap_or_else(|| "unknown error".to_owned()),
            });
        }

        Ok(())
    }
}

#[async_trait]
impl SlackApi for HttpSlackApi {
    async fn publish_home_view(&self, user_id: &str, view: HomeView) -> Result<(), ApiError> {
        self.call("views.publish", json!({ "user_id": user_id, "view": view })).await
    }

    async fn open_modal(&self, trigger_id: &str, view: ModalView) -> Result<(), ApiError> {
        self.call("views.open", json!({ "trigger_id": trigger_id, "view": view })).await
    }

    async fn post_message(&self, channel: &str, message: MessageTemplate) -> Result<(), ApiError> {
        self.call(
            "chat.postMessage",
            json!({
                "channel": channel,
                "text": message.fallback_text,
                "blocks": message.blocks,
            }),
        )
        .await
    }

    async fn respond_ephemeral(
        &self,
        response_url: &str,
        message: MessageTemplate,
    ) -> Result<(), ApiError> {
        // Command responses go to the pre-authorized response URL, not the
        // Web API, so no bearer token is attached.
        let response = self
            .client
            .post(response_url)
            .json(&json!({
                "response_type": "ephemeral",
                "text": message.fallback_text,
                "blocks": message.blocks,
            }))
            .send()
            .await
            .map_err(|error| ApiError::Transport(error.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Platform {
                method: "response_url".to_owned(),
                reason: format!("http status {status}"),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::HttpSlackApi;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let api = HttpSlackApi::with_base_url(
            String::from("xoxb-test").into(),
            "https://slack.test/api/",
        );
        assert_eq!(api.base_url, "https://slack.test/api");
    }
}
