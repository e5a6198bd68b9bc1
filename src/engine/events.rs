use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogKind {
    Info,
    Flip,
    Combo,
}

/// One observable event emitted while resolving a placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub message: String,
    pub kind: LogKind,
}

impl LogEntry {
    #[inline]
    pub fn info(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: LogKind::Info }
    }

    #[inline]
    pub fn flip(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: LogKind::Flip }
    }

    #[inline]
    pub fn combo(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: LogKind::Combo }
    }
}
