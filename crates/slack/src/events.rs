use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use counsel_core::domain::{Category, Industry};
use counsel_core::session::SessionStore;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    api::{ApiError, SlackApi},
    commands::SlashCommandPayload,
    views::{
        answer_message, home_view, industry_picker_message, query_modal, ModalMetadata,
        ACTION_INDUSTRY_SELECT, QUERY_MODAL_CALLBACK_ID,
    },
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlackEnvelope {
    pub envelope_id: String,
    pub event: SlackEvent,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SlackEvent {
    BlockAction(BlockActionEvent),
    ViewSubmission(ViewSubmissionEvent),
    SlashCommand(SlashCommandPayload),
    HomeOpened(HomeOpenedEvent),
    Unsupported { event_type: String },
}

impl SlackEvent {
    pub fn event_type(&self) -> SlackEventType {
        match self {
            Self::BlockAction(_) => SlackEventType::BlockAction,
            Self::ViewSubmission(_) => SlackEventType::ViewSubmission,
            Self::SlashCommand(_) => SlackEventType::SlashCommand,
            Self::HomeOpened(_) => SlackEventType::HomeOpened,
            Self::Unsupported { .. } => SlackEventType::Unsupported,
        }
    }

    pub fn user_id(&self) -> Option<&str> {
        match self {
            Self::BlockAction(event) => Some(&event.user_id),
            Self::ViewSubmission(event) => Some(&event.user_id),
            Self::SlashCommand(payload) => Some(&payload.user_id),
            Self::HomeOpened(event) => Some(&event.user_id),
            Self::Unsupported { .. } => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SlackEventType {
    BlockAction,
    ViewSubmission,
    SlashCommand,
    HomeOpened,
    Unsupported,
}

/// An interactive element was activated: the industry select or one of the
/// per-category buttons.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockActionEvent {
    pub user_id: String,
    pub action_id: String,
    pub value: Option<String>,
    pub trigger_id: Option<String>,
    pub channel_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewSubmissionEvent {
    pub user_id: String,
    pub callback_id: String,
    pub private_metadata: String,
    pub query_text: String,
    pub channel_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HomeOpenedEvent {
    pub user_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventContext {
    pub correlation_id: String,
}

impl Default for EventContext {
    fn default() -> Self {
        Self { correlation_id: "unknown-correlation-id".to_owned() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HandlerResult {
    Processed,
    Ignored,
}

#[derive(Debug, Error)]
pub enum EventHandlerError {
    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Handler(#[from] EventHandlerError),
}

#[async_trait]
pub trait EventHandler: Send + Sync {
    fn event_type(&self) -> SlackEventType;
    async fn handle(
        &self,
        envelope: &SlackEnvelope,
        ctx: &EventContext,
    ) -> Result<HandlerResult, EventHandlerError>;
}

#[derive(Default)]
pub struct EventDispatcher {
    handlers: HashMap<SlackEventType, Arc<dyn EventHandler>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<H>(&mut self, handler: H)
    where
        H: EventHandler + 'static,
    {
        self.handlers.insert(handler.event_type(), Arc::new(handler));
    }

    pub async fn dispatch(
        &self,
        envelope: &SlackEnvelope,
        ctx: &EventContext,
    ) -> Result<HandlerResult, DispatchError> {
        let Some(handler) = self.handlers.get(&envelope.event.event_type()) else {
            return Ok(HandlerResult::Ignored);
        };

        handler.handle(envelope, ctx).await.map_err(DispatchError::from)
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }
}

/// Produces the answer for a submitted query. Implemented by the advisor
/// runtime; infallible by contract (failures become the fallback string
/// before they reach this seam).
#[async_trait]
pub trait AnswerService: Send + Sync {
    async fn answer(&self, query: &str, industry: Industry, category: Category) -> String;
}

/// Wires the four production handlers into a dispatcher.
pub fn build_dispatcher(
    sessions: Arc<dyn SessionStore>,
    api: Arc<dyn SlackApi>,
    advisor: Arc<dyn AnswerService>,
) -> EventDispatcher {
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(BlockActionHandler::new(sessions.clone(), api.clone()));
    dispatcher.register(ViewSubmissionHandler::new(advisor, api.clone()));
    dispatcher.register(SlashCommandHandler::new(api.clone()));
    dispatcher.register(HomeOpenedHandler::new(sessions, api));
    dispatcher
}

pub struct BlockActionHandler {
    sessions: Arc<dyn SessionStore>,
    api: Arc<dyn SlackApi>,
}

impl BlockActionHandler {
    pub fn new(sessions: Arc<dyn SessionStore>, api: Arc<dyn SlackApi>) -> Self {
        Self { sessions, api }
    }
}

#[async_trait]
impl EventHandler for BlockActionHandler {
    fn event_type(&self) -> SlackEventType {
        SlackEventType::BlockAction
    }

    async fn handle(
        &self,
        envelope: &SlackEnvelope,
        ctx: &EventContext,
    ) -> Result<HandlerResult, EventHandlerError> {
        let SlackEvent::BlockAction(event) = &envelope.event else {
            return Ok(HandlerResult::Ignored);
        };

        if event.action_id == ACTION_INDUSTRY_SELECT {
            let Some(industry) = event.value.as_deref().and_then(Industry::parse) else {
                debug!(
                    event_name = "interaction.industry_value_unknown",
                    user_id = %event.user_id,
                    correlation_id = %ctx.correlation_id,
                    value = event.value.as_deref().unwrap_or("none"),
                    "industry action carried an unknown value; ignoring"
                );
                return Ok(HandlerResult::Ignored);
            };

            // The merge runs under the store lock: no suspension between
            // read and write.
            let session = self.sessions.update(&event.user_id, &mut |session| {
                session.industry = Some(industry);
            });
            info!(
                event_name = "interaction.industry_selected",
                user_id = %event.user_id,
                correlation_id = %ctx.correlation_id,
                industry = industry.value(),
                "industry selected; republishing home view"
            );

            self.api.publish_home_view(&event.user_id, home_view(&session)).await?;
            return Ok(HandlerResult::Processed);
        }

        if let Some(category) = Category::from_action_id(&event.action_id) {
            let session = self.sessions.update(&event.user_id, &mut |session| {
                if session.industry.is_some() {
                    session.category = Some(category);
                }
            });

            let Some(industry) = session.industry else {
                // The home view never offers categories before an industry,
                // so this event is stale or forged; drop it silently.
                debug!(
                    event_name = "interaction.category_without_industry",
                    user_id = %event.user_id,
                    correlation_id = %ctx.correlation_id,
                    category = category.value(),
                    "category action before industry selection; dropping"
                );
                return Ok(HandlerResult::Ignored);
            };

            let Some(trigger_id) = event.trigger_id.as_deref() else {
                warn!(
                    event_name = "interaction.trigger_missing",
                    user_id = %event.user_id,
                    correlation_id = %ctx.correlation_id,
                    "category action without trigger id; cannot open modal"
                );
                return Ok(HandlerResult::Processed);
            };

            info!(
                event_name = "interaction.category_selected",
                user_id = %event.user_id,
                correlation_id = %ctx.correlation_id,
                industry = industry.value(),
                category = category.value(),
                "category selected; opening query modal"
            );
            self.api.open_modal(trigger_id, query_modal(industry, category)).await?;
            return Ok(HandlerResult::Processed);
        }

        Ok(HandlerResult::Ignored)
    }
}

pub struct ViewSubmissionHandler {
    advisor: Arc<dyn AnswerService>,
    api: Arc<dyn SlackApi>,
}

impl ViewSubmissionHandler {
    pub fn new(advisor: Arc<dyn AnswerService>, api: Arc<dyn SlackApi>) -> Self {
        Self { advisor, api }
    }
}

#[async_trait]
impl EventHandler for ViewSubmissionHandler {
    fn event_type(&self) -> SlackEventType {
        SlackEventType::ViewSubmission
    }

    async fn handle(
        &self,
        envelope: &SlackEnvelope,
        ctx: &EventContext,
    ) -> Result<HandlerResult, EventHandlerError> {
        let SlackEvent::ViewSubmission(event) = &envelope.event else {
            return Ok(HandlerResult::Ignored);
        };

        if event.callback_id != QUERY_MODAL_CALLBACK_ID {
            return Ok(HandlerResult::Ignored);
        }

        let metadata = match ModalMetadata::decode(&event.private_metadata) {
            Ok(metadata) => metadata,
            Err(error) => {
                // Fatal to this interaction only: the submission is dropped
                // without a visible response.
                warn!(
                    event_name = "interaction.metadata_invalid",
                    user_id = %event.user_id,
                    correlation_id = %ctx.correlation_id,
                    error = %error,
                    "modal metadata failed to parse; dropping submission"
                );
                return Ok(HandlerResult::Processed);
            }
        };

        let answer =
            self.advisor.answer(&event.query_text, metadata.industry, metadata.category).await;

        let target = event.channel_id.as_deref().unwrap_or(&event.user_id);
        self.api
            .post_message(target, answer_message(metadata.industry, metadata.category, &answer))
            .await?;
        Ok(HandlerResult::Processed)
    }
}

pub struct SlashCommandHandler {
    api: Arc<dyn SlackApi>,
}

impl SlashCommandHandler {
    pub fn new(api: Arc<dyn SlackApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl EventHandler for SlashCommandHandler {
    fn event_type(&self) -> SlackEventType {
        SlackEventType::SlashCommand
    }

    async fn handle(
        &self,
        envelope: &SlackEnvelope,
        ctx: &EventContext,
    ) -> Result<HandlerResult, EventHandlerError> {
        let SlackEvent::SlashCommand(payload) = &envelope.event else {
            return Ok(HandlerResult::Ignored);
        };

        // The picker is stateless: no session is read or written here.
        info!(
            event_name = "interaction.slash_command",
            user_id = %payload.user_id,
            correlation_id = %ctx.correlation_id,
            command = %payload.command,
            "answering slash command with the industry picker"
        );
        self.api.respond_ephemeral(&payload.response_url, industry_picker_message()).await?;
        Ok(HandlerResult::Processed)
    }
}

pub struct HomeOpenedHandler {
    sessions: Arc<dyn SessionStore>,
    api: Arc<dyn SlackApi>,
}

impl HomeOpenedHandler {
    pub fn new(sessions: Arc<dyn SessionStore>, api: Arc<dyn SlackApi>) -> Self {
        Self { sessions, api }
    }
}

#[async_trait]
impl EventHandler for HomeOpenedHandler {
    fn event_type(&self) -> SlackEventType {
        SlackEventType::HomeOpened
    }

    async fn handle(
        &self,
        envelope: &SlackEnvelope,
        _ctx: &EventContext,
    ) -> Result<HandlerResult, EventHandlerError> {
        let SlackEvent::HomeOpened(event) = &envelope.event else {
            return Ok(HandlerResult::Ignored);
        };

        let session = self.sessions.get(&event.user_id);
        self.api.publish_home_view(&event.user_id, home_view(&session)).await?;
        Ok(HandlerResult::Processed)
    }
}
