//! Domain layer for kb-console
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Chat state machine
//!
//! [`ChatState`] holds the session list, the current session, and the message
//! history as plain data. Every mutation is a pure transition function, so the
//! whole `idle → streaming → idle` cycle is testable without a view layer or
//! a network.
//!
//! ## Answer streaming
//!
//! [`StreamEvent`] bridges the backend's server-sent-event answer stream to
//! the application layer: sources arrive first, then content deltas, then a
//! done marker.

pub mod chat;
pub mod core;
pub mod dashboard;
pub mod graph;
pub mod session;

// Re-export commonly used types
pub use chat::state::ChatState;
pub use core::{error::DomainError, question::Question, theme::Theme};
pub use dashboard::{DashboardStats, TimelinePoint};
pub use graph::entities::{EntityType, GraphData, GraphEdge, GraphNode, NodeKind};
pub use session::{
    entities::{ChatMessage, ChatSession, Feedback, Role, Source, DEFAULT_SESSION_TITLE},
    response::Answer,
    stream::StreamEvent,
    title::derive_title,
};
