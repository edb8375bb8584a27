mod action;
mod error;
mod expr;
mod rule;
mod trigger;
mod value;

pub use action::ActionInvocation;
pub use error::{
    AccessError, ActionError, ActionFailure, ApplyError, EvaluationError, RegistrationError,
};
pub use expr::{property, CompareOp, Condition, PropertyExpr};
pub use rule::Rule;
pub use trigger::{TriggerSet, DEFAULT_TRIGGERS};
pub use value::Value;
