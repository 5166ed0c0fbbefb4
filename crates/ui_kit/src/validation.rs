//! Field validation state shared by every form control.

use serde::{Deserialize, Serialize};

/// Resolved validation state of a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationState {
    /// No feedback.
    #[default]
    Default,
    /// Field failed validation.
    Error,
    /// Field passed validation.
    Success,
    /// Field is valid but needs attention.
    Warning,
}

impl ValidationState {
    /// Token for `data-ui-state`.
    pub fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Error => "error",
            Self::Success => "success",
            Self::Warning => "warning",
        }
    }

    /// Whether `aria-invalid` should be set.
    pub fn is_invalid(self) -> bool {
        matches!(self, Self::Error)
    }

    /// ARIA role for the message element. Errors are announced immediately.
    pub fn message_role(self) -> Option<&'static str> {
        match self {
            Self::Error => Some("alert"),
            Self::Warning | Self::Success => Some("status"),
            Self::Default => None,
        }
    }
}

/// Raw feedback props of a field.
///
/// A slot holding an empty string flags the state without showing a message.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FieldFeedback {
    /// Error feedback.
    pub error: Option<String>,
    /// Success feedback.
    pub success: Option<String>,
    /// Warning feedback.
    pub warning: Option<String>,
}

impl FieldFeedback {
    /// Feedback carrying only an error.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }

    /// Feedback carrying only a success note.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: Some(message.into()),
            ..Self::default()
        }
    }

    /// Feedback carrying only a warning.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            warning: Some(message.into()),
            ..Self::default()
        }
    }
}

/// Validation state plus the message to show for it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldValidation {
    /// Winning state.
    pub state: ValidationState,
    /// Message of the winning state, if it has one.
    pub message: Option<String>,
}

/// Picks the state a field shows: error, then success, then warning, else default.
pub fn resolve_validation(feedback: &FieldFeedback) -> FieldValidation {
    let candidates = [
        (ValidationState::Error, &feedback.error),
        (ValidationState::Success, &feedback.success),
        (ValidationState::Warning, &feedback.warning),
    ];
    candidates
        .into_iter()
        .find_map(|(state, slot)| {
            slot.as_ref().map(|message| FieldValidation {
                state,
                message: Some(message.trim())
                    .filter(|message| !message.is_empty())
                    .map(str::to_string),
            })
        })
        .unwrap_or_default()
}
