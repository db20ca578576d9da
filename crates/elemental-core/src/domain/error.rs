use thiserror::Error;

/// Root domain error type.
///
/// Every variant is an input-validation failure detected before any derived
/// artifact exists, and carries the offending raw value so the caller can
/// build a user-facing message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid element name '{raw}': name requires a hyphen and all lowercase")]
    InvalidIdentifier { raw: String },

    #[error("invalid property name '{raw}': property name must be a single word")]
    InvalidPropertyName { raw: String },

    #[error("duplicate property name '{name}'")]
    DuplicatePropertyName { name: String },

    #[error("unknown {field}: {value}")]
    UnknownChoice { field: &'static str, value: String },

    #[error("path must stay inside the element directory: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("duplicate destination in render plan: {path}")]
    DuplicatePath { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidIdentifier { raw } => vec![
                format!("'{raw}' is not a valid custom element name"),
                "Custom element names need at least one hyphen".into(),
                "Use lowercase letters, e.g. my-widget or rh-card".into(),
            ],
            Self::InvalidPropertyName { raw } => vec![
                format!("'{raw}' cannot be used as a property name"),
                "Use a single word such as title, firstName or dataUrl".into(),
            ],
            Self::DuplicatePropertyName { name } => vec![
                format!("The property '{name}' is declared more than once"),
                "Remove or rename one of the entries".into(),
            ],
            Self::UnknownChoice { field, .. } => vec![
                format!("Check the value given for {field}"),
                "Run: elemental variants to see the supported base classes".into(),
            ],
            Self::AbsolutePathNotAllowed { path } => vec![
                format!("'{path}' must be relative to the element directory"),
            ],
            Self::DuplicatePath { path } => vec![
                format!("Two planned files both write '{path}'"),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidIdentifier { .. }
            | Self::InvalidPropertyName { .. }
            | Self::UnknownChoice { .. }
            | Self::AbsolutePathNotAllowed { .. } => ErrorCategory::Validation,
            Self::DuplicatePropertyName { .. } | Self::DuplicatePath { .. } => {
                ErrorCategory::Conflict
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
}
