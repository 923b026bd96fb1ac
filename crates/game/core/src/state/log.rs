//! Bounded message log.

/// Category a log entry is rendered under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum LogCategory {
    System,
    Combat,
    Dialogue,
    Error,
}

/// One entry in the message log.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogMessage {
    /// Monotonic id assigned by the reducer, never reused.
    pub id: u64,
    pub text: String,
    pub category: LogCategory,
}

impl LogMessage {
    pub fn new(id: u64, text: String, category: LogCategory) -> Self {
        Self { id, text, category }
    }
}

/// Fixed-capacity log retaining only the most recent entries, oldest dropped
/// first. Capacity is supplied per push so the reducer can take it from
/// [`crate::config::GameConfig`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageLog {
    entries: Vec<LogMessage>,
}

impl MessageLog {
    pub fn push(&mut self, message: LogMessage, capacity: usize) {
        self.entries.push(message);
        if self.entries.len() > capacity {
            let excess = self.entries.len() - capacity;
            self.entries.drain(..excess);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogMessage> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&LogMessage> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
