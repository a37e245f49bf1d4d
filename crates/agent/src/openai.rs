use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use counsel_core::config::LlmConfig;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::llm::{ChatPrompt, LlmClient};

/// Chat-completions client. Model and temperature are fixed at
/// construction; the request timeout lives on the HTTP client, not on
/// individual calls.
pub struct OpenAiClient {
    client: Client,
    api_key: SecretString,
    base_url: String,
    model: String,
    temperature: f32,
}

impl OpenAiClient {
    pub fn from_config(config: &LlmConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("failed to build completion HTTP client")?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            model: config.model.clone(),
            temperature: config.temperature,
        })
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn complete(&self, prompt: &ChatPrompt) -> Result<String> {
        let request = ChatCompletionRequest {
            model: &self.model,
            temperature: self.temperature,
            messages: [
                ChatMessage { role: "system", content: &prompt.system },
                ChatMessage { role: "user", content: &prompt.user },
            ],
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(self.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .context("completion request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("completion API returned {status}: {body}"));
        }

        let completion: ChatCompletionResponse =
            response.json().await.context("completion response was not valid JSON")?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| anyhow!("completion response contained no message content"))
    }
}
