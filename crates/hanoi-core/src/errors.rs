//! Structured error types shared across the Hanoi walk crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`HanoiError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (disk counts, state ids, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the Hanoi walk engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum HanoiError {
    /// Rejected run parameters or configuration files.
    #[error("config error: {0}")]
    Config(ErrorInfo),
    /// State identifier encoding or decoding faults.
    #[error("codec error: {0}")]
    Codec(ErrorInfo),
    /// Transition graph lookups that referenced unknown vertices.
    #[error("graph error: {0}")]
    Graph(ErrorInfo),
    /// Diffusion engine guards and bookkeeping faults.
    #[error("engine error: {0}")]
    Engine(ErrorInfo),
    /// Serialization, schema and filesystem errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl HanoiError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            HanoiError::Config(info)
            | HanoiError::Codec(info)
            | HanoiError::Graph(info)
            | HanoiError::Engine(info)
            | HanoiError::Serde(info) => info,
        }
    }

    /// Returns the stable code of the underlying payload.
    pub fn code(&self) -> &str {
        &self.info().code
    }

    /// Wraps an I/O or parse failure tied to a filesystem path.
    pub fn serde_at(code: &str, err: impl ToString, path: &std::path::Path) -> Self {
        HanoiError::Serde(
            ErrorInfo::new(code, err.to_string()).with_context("path", path.display()),
        )
    }
}
