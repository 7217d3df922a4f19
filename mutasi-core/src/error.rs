use thiserror::Error;

/// A configuration or command-line name did not match any known value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{name}' (expected one of: {expected})")]
pub struct UnknownNameError {
    pub kind: &'static str,
    pub name: String,
    pub expected: String,
}

impl UnknownNameError {
    pub fn new(kind: &'static str, name: &str, expected: &[&str]) -> Self {
        Self {
            kind,
            name: name.to_string(),
            expected: expected.join(", "),
        }
    }
}
