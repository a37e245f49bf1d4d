use std::{sync::Arc, time::Duration};

use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::events::{EventContext, EventDispatcher, SlackEnvelope};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("transport failed to connect: {0}")]
    Connect(String),
    #[error("transport read failed: {0}")]
    Receive(String),
    #[error("transport ack failed: {0}")]
    Acknowledge(String),
    #[error("transport disconnect failed: {0}")]
    Disconnect(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReconnectPolicy {
    pub max_retries: u32,
    pub base_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl Default for ReconnectPolicy {
    fn default() -> Self {
        Self { max_retries: 5, base_delay_ms: 250, max_delay_ms: 5_000 }
    }
}

impl ReconnectPolicy {
    fn backoff(&self, attempt: u32) -> Duration {
        let exponent = attempt.min(16);
        let multiplier = 1_u64 << exponent;
        let delay_ms = self.base_delay_ms.saturating_mul(multiplier).min(self.max_delay_ms);
        Duration::from_millis(delay_ms)
    }
}

/// Event-delivery transport. The wire protocol (WebSocket handshake,
/// envelope framing) lives behind this trait.
#[async_trait]
pub trait SocketTransport: Send + Sync {
    async fn connect(&self) -> Result<(), TransportError>;
    async fn next_envelope(&self) -> Result<Option<SlackEnvelope>, TransportError>;
    async fn acknowledge(&self, envelope_id: &str) -> Result<(), TransportError>;
    async fn disconnect(&self) -> Result<(), TransportError>;
}

#[derive(Default)]
pub struct NoopSocketTransport;

#[async_trait]
impl SocketTransport for NoopSocketTransport {
    async fn connect(&self) -> Result<(), TransportError> {
        Ok(())
    }

    async fn next_envelope(&self) -> Result<Option<SlackEnvelope>, TransportError> {
        Ok(None)
    }

    async fn acknowledge(&self, _envelope_id: &str) -> Result<(), TransportError> {
        Ok(())
    }

    async fn disconnect(&self) -> Result<(), TransportError> {
        Ok(())
    }
}

pub struct SocketModeRunner {
    transport: Arc<dyn SocketTransport>,
    dispatcher: EventDispatcher,
    reconnect_policy: ReconnectPolicy,
    noop_transport: bool,
}

impl SocketModeRunner {
    pub fn new(
        transport: Arc<dyn SocketTransport>,
        dispatcher: EventDispatcher,
        reconnect_policy: ReconnectPolicy,
    ) -> Self {
        Self { transport, dispatcher, reconnect_policy, noop_transport: false }
    }

    /// Runner without a wire connection: events never arrive, outbound
    /// behavior is unchanged.
    pub fn noop(dispatcher: EventDispatcher) -> Self {
        Self {
            transport: Arc::new(NoopSocketTransport),
            dispatcher,
            reconnect_policy: ReconnectPolicy::default(),
            noop_transport: true,
        }
    }

    pub fn transport_mode(&self) -> &'static str {
        if self.noop_transport {
            "noop"
        } else {
            "socket"
        }
    }

    pub async fn start(&self) -> Result<()> {
        for attempt in 0..=self.reconnect_policy.max_retries {
            match self.connect_and_pump(attempt).await {
                Ok(()) => return Ok(()),
                Err(transport_error) => {
                    warn!(
                        attempt,
                        max_retries = self.reconnect_policy.max_retries,
                        error = %transport_error,
                        "socket mode transport failed"
                    );

                    if attempt >= self.reconnect_policy.max_retries {
                        warn!(
                            max_retries = self.reconnect_policy.max_retries,
                            "socket mode retries exhausted; continuing process without crash"
                        );
                        return Ok(());
                    }

                    let delay = self.reconnect_policy.backoff(attempt);
                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }
                }
            }
        }

        Ok(())
    }

    async fn connect_and_pump(&self, attempt: u32) -> Result<(), TransportError> {
        info!(attempt, "opening socket mode transport connection");
        self.transport.connect().await?;
        info!(attempt, "socket mode transport connected");

        loop {
            let Some(envelope) = self.transport.next_envelope().await? else {
                info!(attempt, "socket mode transport stream closed");
                self.transport.disconnect().await?;
                return Ok(());
            };
            let user_id = envelope.event.user_id().unwrap_or("unknown").to_owned();

            info!(
                event_name = "ingress.slack.envelope_received",
                envelope_id = %envelope.envelope_id,
                event_type = ?envelope.event.event_type(),
                correlation_id = %envelope.envelope_id,
                user_id = %user_id,
                "received slack envelope"
            );

            // Acknowledge before any handler work: receipt and processing
            // are separate steps in the platform's delivery contract.
            if let Err(error) = self.transport.acknowledge(&envelope.envelope_id).await {
                warn!(
                    event_name = "ingress.slack.ack_sent",
                    envelope_id = %envelope.envelope_id,
                    correlation_id = %envelope.envelope_id,
                    user_id = %user_id,
                    error = %error,
                    "failed to acknowledge slack envelope"
                );
            } else {
                debug!(
                    event_name = "ingress.slack.ack_sent",
                    envelope_id = %envelope.envelope_id,
                    correlation_id = %envelope.envelope_id,
                    user_id = %user_id,
                    "acknowledged slack envelope"
                );
            }

            let context = EventContext { correlation_id: envelope.envelope_id.clone() };
            if let Err(error) = self.dispatcher.dispatch(&envelope, &context).await {
                warn!(
                    envelope_id = %envelope.envelope_id,
                    correlation_id = %envelope.envelope_id,
                    user_id = %user_id,
                    error = %error,
                    "event dispatch failed; continuing socket loop"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Arc;

    use async_trait::async_trait;
    use tokio::sync::Mutex;

    use super::{ReconnectPolicy, SocketModeRunner, SocketTransport, TransportError};
    use crate::api::ApiError;
    use crate::events::{
        EventContext, EventDispatcher, EventHandler, EventHandlerError, HandlerResult,
        SlackEnvelope, SlackEvent, SlackEventType,
    };

    #[derive(Default)]
    struct ScriptedTransport {
        state: Mutex<ScriptedState>,
    }

    #[derive(Default)]
    struct ScriptedState {
        connect_results: VecDeque<Result<(), TransportError>>,
        envelopes: VecDeque<Result<Option<SlackEnvelope>, TransportError>>,
        disconnect_results: VecDeque<Result<(), TransportError>>,
        connect_attempts: usize,
        acknowledgements: Vec<String>,
        disconnect_calls: usize,
    }

    impl ScriptedTransport {
        fn with_script(
            connect_results: Vec<Result<(), TransportError>>,
            envelopes: Vec<Result<Option<SlackEnvelope>, TransportError>>,
            disconnect_results: Vec<Result<(), TransportError>>,
        ) -> Self {
            Self {
                state: Mutex::new(ScriptedState {
                    connect_results: connect_results.into(),
                    envelopes: envelopes.into(),
                    disconnect_results: disconnect_results.into(),
                    connect_attempts: 0,
                    acknowledgements: Vec::new(),
                    disconnect_calls: 0,
                }),
            }
        }

        async fn connect_attempts(&self) -> usize {
            self.state.lock().await.connect_attempts
        }

        async fn acknowledgements(&self) -> Vec<String> {
            self.state.lock().await.acknowledgements.clone()
        }
    }

    #[async_trait]
    impl SocketTransport for ScriptedTransport {
        async fn connect(&self) -> Result<(), TransportError> {
            let mut state = self.state.lock().await;
            state.connect_attempts += 1;
            state.connect_results.pop_front().unwrap_or(Ok(()))
        }

        async fn next_envelope(&self) -> Result<Option<SlackEnvelope>, TransportError> {
            let mut state = self.state.lock().await;
            state.envelopes.pop_front().unwrap_or(Ok(None))
        }

        async fn acknowledge(&self, envelope_id: &str) -> Result<(), TransportError> {
            let mut state = self.state.lock().await;
            state.acknowledgements.push(envelope_id.to_owned());
            Ok(())
        }

        async fn disconnect(&self) -> Result<(), TransportError> {
            let mut state = self.state.lock().await;
            state.disconnect_calls += 1;
            state.disconnect_results.pop_front().unwrap_or(Ok(()))
        }
    }

    fn unsupported_envelope(id: &str) -> SlackEnvelope {
        SlackEnvelope {
            envelope_id: id.to_owned(),
            event: SlackEvent::Unsupported { event_type: "test".to_owned() },
        }
    }

    #[tokio::test]
    async fn reconnects_after_initial_connect_failure() {
        let transport = Arc::new(ScriptedTransport::with_script(
            vec![Err(TransportError::Connect("network down".to_owned())), Ok(())],
            vec![Ok(Some(unsupported_envelope("env-1"))), Ok(None)],
            vec![Ok(())],
        ));

        let runner = SocketModeRunner::new(
            transport.clone(),
            EventDispatcher::default(),
            ReconnectPolicy { max_retries: 2, base_delay_ms: 0, max_delay_ms: 0 },
        );

        runner.start().await.expect("runner should not fail");

        assert_eq!(transport.connect_attempts().await, 2);
        assert_eq!(transport.acknowledgements().await, vec!["env-1"]);
    }

    #[tokio::test]
    async fn exhausts_retries_without_crashing() {
        let transport = Arc::new(ScriptedTransport::with_script(
            vec![
                Err(TransportError::Connect("fail-1".to_owned())),
                Err(TransportError::Connect("fail-2".to_owned())),
                Err(TransportError::Connect("fail-3".to_owned())),
            ],
            vec![],
            vec![],
        ));

        let runner = SocketModeRunner::new(
            transport.clone(),
            EventDispatcher::default(),
            ReconnectPolicy { max_retries: 2, base_delay_ms: 0, max_delay_ms: 0 },
        );

        runner.start().await.expect("runner should degrade gracefully");
        assert_eq!(transport.connect_attempts().await, 3);
    }

    struct FailingHandler;

    #[async_trait]
    impl EventHandler for FailingHandler {
        fn event_type(&self) -> SlackEventType {
            SlackEventType::Unsupported
        }

        async fn handle(
            &self,
            _envelope: &SlackEnvelope,
            _ctx: &EventContext,
        ) -> Result<HandlerResult, EventHandlerError> {
            Err(EventHandlerError::Api(ApiError::Transport("boom".to_owned())))
        }
    }

    #[tokio::test]
    async fn envelopes_are_acknowledged_even_when_dispatch_fails() {
        let transport = Arc::new(ScriptedTransport::with_script(
            vec![Ok(())],
            vec![
                Ok(Some(unsupported_envelope("env-1"))),
                Ok(Some(unsupported_envelope("env-2"))),
                Ok(None),
            ],
            vec![Ok(())],
        ));

        let mut dispatcher = EventDispatcher::new();
        dispatcher.register(FailingHandler);

        let runner = SocketModeRunner::new(
            transport.clone(),
            dispatcher,
            ReconnectPolicy { max_retries: 0, base_delay_ms: 0, max_delay_ms: 0 },
        );

        runner.start().await.expect("handler failures must not stop the loop");

        // Both envelopes acked and the loop survived the first failure.
        assert_eq!(transport.acknowledgements().await, vec!["env-1", "env-2"]);
    }

    #[tokio::test]
    async fn noop_runner_terminates_cleanly() {
        let runner = SocketModeRunner::noop(EventDispatcher::default());
        assert_eq!(runner.transport_mode(), "noop");
        runner.start().await.expect("noop runner should terminate");
    }
}
