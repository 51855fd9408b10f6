use crate::report::ReportPayload;

/// Message received from the chat collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    pub content: String,
    /// Set by the platform for automated senders; such messages are ignored
    /// unconditionally so two bots cannot feed each other.
    pub author_is_bot: bool,
}

impl IncomingMessage {
    pub fn from_user(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            author_is_bot: false,
        }
    }

    pub fn from_bot(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            author_is_bot: true,
        }
    }
}

/// Reply handed back to the chat collaborator.
///
/// The collaborator owns presentation: plain text is sent verbatim, a report
/// payload is rendered in whatever rich form the platform offers.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Text(String),
    Report(ReportPayload),
}
