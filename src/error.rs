use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Couldn't serialize the envelope: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Transport failed to publish the message: {0}")]
    Transport(Arc<str>),
}

impl Error {
    /// Wrap a failure reported by an external transport client.
    pub fn transport<M>(message: M) -> Self
    where
        M: Into<Arc<str>>,
    {
        Error::Transport(message.into())
    }
}
