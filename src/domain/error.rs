use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("No text selected")]
    EmptySelection,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Envelope parse error: {0}")]
    EnvelopeParse(String),
}

impl DomainError {
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn envelope(msg: impl Into<String>) -> Self {
        Self::EnvelopeParse(msg.into())
    }

    pub fn is_empty_selection(&self) -> bool {
        matches!(self, Self::EmptySelection)
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
