//! Recoverable errors for internal commands and the site editor.
//!
//! Nothing here is fatal: callers log the error and keep the previous state.

use thiserror::Error;

/// Rejection of a site editor submission. The form stays open and nothing is written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("site name is empty")]
    BlankDomain,
    #[error("site name `{0}` may only contain letters, digits, `-`, `_` and inner dots")]
    InvalidDomain(String),
}

/// Error returned while parsing or running a `navi://` command path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Path is not part of the internal namespace.
    #[error("unknown internal page navi://{0}")]
    UnknownCommand(String),
    /// Path is known but an argument is missing or unusable.
    #[error("invalid argument for {command}: {reason}")]
    InvalidArgument {
        command: &'static str,
        reason: String,
    },
    #[error("site editor: {0}")]
    Form(#[from] FormError),
}

impl CommandError {
    pub(crate) fn invalid(command: &'static str, reason: impl Into<String>) -> Self {
        CommandError::InvalidArgument {
            command,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_command_display_includes_scheme() {
        let err = CommandError::UnknownCommand("nope".to_string());
        assert_eq!(err.to_string(), "unknown internal page navi://nope");
    }

    #[test]
    fn form_error_converts_into_command_error() {
        let err: CommandError = FormError::BlankDomain.into();
        assert_eq!(err, CommandError::Form(FormError::BlankDomain));
        assert_eq!(err.to_string(), "site editor: site name is empty");
    }
}
