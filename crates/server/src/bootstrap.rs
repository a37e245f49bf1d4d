use std::sync::Arc;

use async_trait::async_trait;
use counsel_agent::{AdvisorRuntime, OpenAiClient};
use counsel_core::config::{AppConfig, ConfigError, LoadOptions};
use counsel_core::domain::{Category, Industry};
use counsel_core::session::InMemorySessionStore;
use counsel_slack::api::{HttpSlackApi, SlackApi};
use counsel_slack::events::{build_dispatcher, AnswerService};
use counsel_slack::socket::SocketModeRunner;
use thiserror::Error;
use tracing::info;

pub struct Application {
    pub config: AppConfig,
    pub slack_runner: SocketModeRunner,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("completion client construction failed: {0}")]
    CompletionClient(String),
}

/// Adapts the advisor runtime to the event-handler seam.
struct RuntimeAnswerService {
    runtime: AdvisorRuntime,
}

#[async_trait]
impl AnswerService for RuntimeAnswerService {
    async fn answer(&self, query: &str, industry: Industry, category: Category) -> String {
        self.runtime.answer(query, industry, category).await
    }
}

pub async fn bootstrap(options: LoadOptions) -> Result<Application, BootstrapError> {
    let config = AppConfig::load(options)?;
    bootstrap_with_config(config).await
}

pub async fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(
        event_name = "system.bootstrap.start",
        correlation_id = "bootstrap",
        "starting application bootstrap"
    );

    let llm_client = OpenAiClient::from_config(&config.llm)
        .map_err(|error| BootstrapError::CompletionClient(error.to_string()))?;
    let advisor: Arc<dyn AnswerService> =
        Arc::new(RuntimeAnswerService { runtime: AdvisorRuntime::new(Arc::new(llm_client)) });

    let sessions = Arc::new(InMemorySessionStore::new());
    let api: Arc<dyn SlackApi> = Arc::new(HttpSlackApi::new(config.slack.bot_token.clone()));
    let dispatcher = build_dispatcher(sessions, api, advisor);

    // The wire transport stays pluggable; without one configured the
    // runner idles on a noop transport.
    let slack_runner = SocketModeRunner::noop(dispatcher);

    info!(
        event_name = "system.bootstrap.ready",
        correlation_id = "bootstrap",
        "application wiring complete"
    );

    Ok(Application { config, slack_runner })
}

#[cfg(test)]
mod tests {
    use counsel_core::config::{ConfigError, ConfigOverrides, LoadOptions};

    use crate::bootstrap::{bootstrap, BootstrapError};

    fn overrides() -> ConfigOverrides {
        ConfigOverrides {
            slack_bot_token: Some("xoxb-test".to_string()),
            slack_app_token: Some("xapp-test".to_string()),
            slack_signing_secret: Some("signing-test".to_string()),
            llm_api_key: Some("sk-test".to_string()),
            ..ConfigOverrides::default()
        }
    }

    #[tokio::test]
    async fn bootstrap_fails_fast_listing_missing_credentials() {
        let mut incomplete = overrides();
        incomplete.slack_app_token = None;
        incomplete.llm_api_key = None;

        let result =
            bootstrap(LoadOptions { overrides: incomplete, ..LoadOptions::default() }).await;

        let error = result.err().expect("bootstrap should refuse to start");
        match error {
            BootstrapError::Config(ConfigError::MissingRequired(missing)) => {
                assert_eq!(
                    missing,
                    vec!["slack.app_token".to_string(), "llm.api_key".to_string()]
                );
            }
            other => panic!("expected MissingRequired, got: {other}"),
        }
    }

    #[tokio::test]
    async fn bootstrap_wires_the_runner_with_valid_credentials() {
        let app = bootstrap(LoadOptions { overrides: overrides(), ..LoadOptions::default() })
            .await
            .expect("bootstrap should succeed with valid overrides");

        assert_eq!(app.slack_runner.transport_mode(), "noop");
        assert_eq!(app.config.server.health_check_port, 8080);
    }
}
