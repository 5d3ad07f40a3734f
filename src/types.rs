// src/types.rs
//
// Value types passed between the helper, the customizations and the call sites.

use std::fmt;
use serde::{Deserialize, Serialize};

/// The value under construction.
///
/// Created fresh for each helper call and owned by whoever receives it.
/// There is no interior mutability; transforming a message consumes it and
/// produces a new one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Message(String);

impl Message {
    pub fn new(text: impl Into<String>) -> Self {
        Message(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Length in characters, not bytes.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    /// Returns a new message with `prefix` placed in front of this one.
    pub fn prepend(self, prefix: &str) -> Self {
        let mut text = String::with_capacity(prefix.len() + self.0.len());
        text.push_str(prefix);
        text.push_str(&self.0);
        Message(text)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Message {
    fn from(s: &str) -> Self {
        Message(s.to_string())
    }
}

impl From<String> for Message {
    fn from(s: String) -> Self {
        Message(s)
    }
}

impl From<Message> for String {
    fn from(m: Message) -> Self {
        m.0
    }
}

impl PartialEq<str> for Message {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Message {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Result of running one registered call site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallSiteReport {
    pub name: String,
    pub input: String,
    pub output: Message,
    /// Lines the call site's customization wrote to its output buffer.
    pub logged: Vec<String>,
}
