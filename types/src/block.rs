//! Opaque block token reported by sync peers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A block as reported by a peer, identified only by its token.
///
/// The processor never inspects block contents. It compares blocks for
/// equality and keeps the first one that reaches quorum at a height.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Block(String);

impl Block {
    /// Create a block token from a raw string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Return the raw token string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Block({})", self.0)
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Block {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Block {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
