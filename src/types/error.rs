use std::fmt;

use thiserror::Error;

use crate::parse::ParseError;

/// A property could not be read from the bound subject.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AccessError {
    #[error("unknown identifier '{identifier}' for this subject")]
    UnknownIdentifier { identifier: String },

    #[error("unsupported value for '{identifier}': {value}")]
    UnsupportedValue { identifier: String, value: String },

    #[error("no subject bound")]
    Unbound,
}

/// An action was rejected or could not be carried out.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActionError {
    #[error("unsupported action '{name}'")]
    UnsupportedAction { name: String },

    #[error("unsupported property '{property}' for set")]
    UnsupportedProperty { property: String },

    #[error("'{action}' expects {expected} argument(s), got {found}")]
    Arity {
        action: String,
        expected: usize,
        found: usize,
    },

    #[error("'{action}' argument {position} must be {expected}, got {found}")]
    ArgumentType {
        action: String,
        position: usize,
        expected: &'static str,
        found: &'static str,
    },

    #[error("invalid snap location '{location}'")]
    InvalidSnapLocation { location: String },

    #[error("subject does not support '{action}'")]
    StateUnsupported { action: String },

    #[error("subject has no container for '{action}'")]
    NoContainer { action: String },

    #[error("no subject bound")]
    Unbound,
}

/// A condition could not be evaluated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluationError {
    #[error(transparent)]
    Access(#[from] AccessError),

    #[error("cannot compare {left} {op} {right} for '{identifier}'")]
    Incomparable {
        identifier: String,
        op: String,
        left: &'static str,
        right: &'static str,
    },
}

/// One failed action inside a rule's action list.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionFailure {
    /// Position of the action in the rule's action list.
    pub index: usize,
    pub name: String,
    pub error: ActionError,
}

impl fmt::Display for ActionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "action #{} '{}': {}", self.index, self.name, self.error)
    }
}

/// Why [`Rule::apply`](crate::Rule::apply) reported an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApplyError {
    #[error("condition evaluation failed: {0}")]
    Condition(#[from] EvaluationError),

    #[error("{} action(s) failed: {}", .0.len(), join(.0))]
    Actions(Vec<ActionFailure>),
}

fn join(failures: &[ActionFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A lambda rule registration was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistrationError {
    #[error("a lambda rule is already registered under '{key}'")]
    DuplicateKey { key: String },

    #[error("registration '{key}' has no if-callback")]
    MissingIfCallback { key: String },

    #[error("registration '{key}' failed to parse: {source}")]
    Parse {
        key: String,
        #[source]
        source: ParseError,
    },
}
