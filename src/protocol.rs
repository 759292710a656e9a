//! Task-status notification envelope for persistent connections.
//!
//! The surrounding system owns the transport and delivery order; this module
//! only defines the envelope and its consistency invariant: exactly one of
//! {task, error} is meaningfully populated per message, matching the tag.

use serde::{Deserialize, Serialize};

use crate::types::TaskStatusResponse;

/// Discriminator for a notification message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// Sent once when the stream is established
    Connection,
    /// Sent on every state transition the engine reports
    Update,
    /// Sent when the engine or transport fails
    Error,
}

impl std::fmt::Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageKind::Connection => write!(f, "connection"),
            MessageKind::Update => write!(f, "update"),
            MessageKind::Error => write!(f, "error"),
        }
    }
}

/// One notification delivered over a task-status stream.
///
/// Messages are emitted, never mutated; each state transition produces a
/// fresh envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebsocketMessage {
    pub message: MessageKind,

    /// Status snapshot for connection/update messages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<TaskStatusResponse>,

    /// Human-readable failure for error messages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl WebsocketMessage {
    /// Stream-establishment message, with the current snapshot if one exists.
    pub fn connection(task: Option<TaskStatusResponse>) -> Self {
        Self {
            message: MessageKind::Connection,
            task,
            error: None,
        }
    }

    /// State-transition message; always carries the new snapshot.
    pub fn update(task: TaskStatusResponse) -> Self {
        Self {
            message: MessageKind::Update,
            task: Some(task),
            error: None,
        }
    }

    /// Failure message; carries no snapshot.
    pub fn error(error: impl Into<String>) -> Self {
        Self {
            message: MessageKind::Error,
            task: None,
            error: Some(error.into()),
        }
    }

    /// Check the envelope invariant for messages built field-by-field.
    pub fn is_consistent(&self) -> bool {
        match self.message {
            MessageKind::Connection => self.error.is_none(),
            MessageKind::Update => self.task.is_some() && self.error.is_none(),
            MessageKind::Error => self.error.is_some() && self.task.is_none(),
        }
    }
}
