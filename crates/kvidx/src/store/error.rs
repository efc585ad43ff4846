use thiserror::Error as ThisError;

///
/// StoreError
///
/// Store-level failures surface unchanged to the caller of the maintenance
/// operation; no retry or compensation happens at this layer.
///

#[derive(Debug, ThisError)]
pub enum StoreError {
    #[error("store unavailable: {message}")]
    Unavailable { message: String },

    #[error("unexpected reply to {command}: {reply}")]
    UnexpectedReply { command: &'static str, reply: String },
}

impl StoreError {
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}
