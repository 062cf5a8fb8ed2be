use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cleanup_events::JoinError;
use crate::ledger::ValidationError;
use crate::progression::Achievement;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ActionResult {
    Success,
    /// The action was accepted but did nothing the caller may expect
    /// (e.g. a blank rename).
    SuccessWithWarning(String),
    /// Accepted and fed to the progression engine.
    Progressed {
        points_awarded: u32,
        unlocked: Vec<Achievement>,
    },
    Error(ActionError),
}

impl ActionResult {
    /// Returns `true` for every variant except `Error`.
    pub fn is_success(&self) -> bool {
        !matches!(self, ActionResult::Error(_))
    }

    /// Extract the warning string if present.
    pub fn warning(&self) -> Option<&str> {
        match self {
            ActionResult::SuccessWithWarning(w) => Some(w.as_str()),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ActionError> {
        match self {
            ActionResult::Error(e) => Some(e),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ActionError {
    Validation(ValidationError),
    Join(JoinError),
    InvalidParameter(String),
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionError::Validation(e) => write!(f, "rejected submission: {e}"),
            ActionError::Join(e) => write!(f, "could not join: {e}"),
            ActionError::InvalidParameter(msg) => write!(f, "invalid parameter: {msg}"),
        }
    }
}

impl std::error::Error for ActionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ActionError::Validation(e) => Some(e),
            ActionError::Join(e) => Some(e),
            ActionError::InvalidParameter(_) => None,
        }
    }
}

impl From<ValidationError> for ActionError {
    fn from(e: ValidationError) -> Self {
        ActionError::Validation(e)
    }
}

impl From<JoinError> for ActionError {
    fn from(e: JoinError) -> Self {
        ActionError::Join(e)
    }
}
