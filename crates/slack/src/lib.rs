//! Slack Integration - Socket Mode bot interface
//!
//! This crate provides the Slack interface for counsel:
//! - **Socket Mode** (`socket`) - event pump with ack-before-dispatch
//! - **Events** (`events`) - dispatcher + the four interaction handlers
//! - **Views** (`views`) - home tab, query modal, answer message
//! - **Block Kit** (`blocks`) - structured UI builders
//! - **Web API** (`api`) - outbound calls (views.publish, views.open,
//!   chat.postMessage, response URLs)
//!
//! # Interaction flow
//!
//! ```text
//! Slack Events → SocketModeRunner → EventDispatcher → Handlers
//!                                        ↓                ↓
//!                                  Session Store     Advisor Runtime
//!                                        ↓                ↓
//!                                  home view        answer message
//! ```
//!
//! Per user the flow is: pick an industry on the home tab, pick a category,
//! ask a question in the modal, get the completion posted back. Category
//! actions that arrive before an industry is chosen are dropped silently;
//! the home view never offers them in that state.

pub mod api;
pub mod blocks;
pub mod commands;
pub mod events;
pub mod socket;
pub mod views;
