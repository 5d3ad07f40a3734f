// src/error.rs
//
// Error type shared by the fallible customizations and the call-site registry.
// The helper itself never produces one of these; it only passes along whatever
// the supplied callable returns.

use std::fmt;

pub type Result<T> = std::result::Result<T, FnArgError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FnArgError {
    /// A length-bounded customization saw a message longer than allowed.
    MessageTooLong { len: usize, max: usize },
    UnknownCallSite(String),
    Custom(String),
}

impl FnArgError {
    pub fn too_long(len: usize, max: usize) -> Self {
        FnArgError::MessageTooLong { len, max }
    }
}

impl fmt::Display for FnArgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FnArgError::MessageTooLong { len, max } => {
                write!(f, "Message too long: {} characters, limit is {}", len, max)
            },
            FnArgError::UnknownCallSite(name) => write!(f, "Unknown call site: {}", name),
            FnArgError::Custom(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FnArgError {}

impl From<String> for FnArgError {
    fn from(s: String) -> Self {
        FnArgError::Custom(s)
    }
}

impl From<&str> for FnArgError {
    fn from(s: &str) -> Self {
        FnArgError::Custom(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            FnArgError::too_long(12, 10).to_string(),
            "Message too long: 12 characters, limit is 10"
        );
        assert_eq!(
            FnArgError::UnknownCallSite("nope".to_string()).to_string(),
            "Unknown call site: nope"
        );
        assert_eq!(FnArgError::from("boom").to_string(), "boom");
    }
}
