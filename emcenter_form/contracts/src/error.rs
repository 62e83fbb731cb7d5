use std::time::Duration;

use thiserror::Error;

use crate::FormMessages;

/// Input defects detected before anything is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required.")]
    NameRequired,
    #[error("A valid email address is required.")]
    EmailInvalid,
    #[error("Message exceeds {max} characters.")]
    MessageTooLong { max: usize },
}

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Server rejected the submission with status {status}.")]
    Application {
        status: u16,
        detail: Option<String>,
        message: Option<String>,
    },
    #[error("Failed to reach the contact endpoint: {0}")]
    Transport(#[source] anyhow::Error),
    #[error("Contact endpoint did not respond within {0:?}.")]
    Timeout(Duration),
}

impl ValidationError {
    pub fn user_message(&self, messages: &FormMessages) -> String {
        match self {
            Self::NameRequired => messages.name_required.clone(),
            Self::EmailInvalid => messages.email_invalid.clone(),
            Self::MessageTooLong { .. } => messages.message_too_long.clone(),
        }
    }
}

impl SubmissionError {
    /// Returns the text to show in the error region. Server supplied details
    /// take precedence over server supplied messages, which in turn take
    /// precedence over the fixed fallback.
    pub fn user_message(&self, messages: &FormMessages) -> String {
        match self {
            Self::Validation(err) => err.user_message(messages),
            Self::Application {
                detail, message, ..
            } => detail
                .as_ref()
                .or(message.as_ref())
                .cloned()
                .unwrap_or_else(|| messages.error.clone()),
            Self::Transport(_) | Self::Timeout(_) => messages.error.clone(),
        }
    }
}
