//! A rule engine with a small text DSL for acting on live views when
//! lifecycle events fire.
//!
//! ```text
//! on created if app_id contains "term" and not title == "scratch" set(alpha, 0.85) snap(right)
//! ```
//!
//! Rules are parsed once with [`parse::parse`] (or loaded in bulk into a
//! [`RuleBook`]) and applied per event through two capabilities supplied by
//! the host: [`PropertyAccess`] for reads and [`ActionExecutor`] for actions.
//! The [`view`] module binds both to a window-manager [`View`](view::View).
//!
//! [`LambdaRule`]s share the condition grammar but run host callbacks
//! instead of actions; they are kept in a [`LambdaRuleRegistry`].

mod access;
mod config;
mod error;
mod evaluate;
mod executor;
mod lambda;
pub mod lex;
pub mod parse;
pub mod registry;
mod rulebook;
mod types;
pub mod view;

pub use access::{Properties, PropertyAccess};
pub use config::EngineConfig;
pub use error::ViewRuleError;
pub use executor::ActionExecutor;
pub use lambda::{LambdaOutcome, LambdaRule, LambdaRuleRegistration, Predicate, SharedAccess};
pub use parse::{parse, ParseError};
pub use registry::{LambdaReport, LambdaRuleRegistry, Registrations};
pub use rulebook::{ApplyReport, DroppedRule, LoadReport, RuleBook, RuleFailure};
pub use types::{
    property, AccessError, ActionError, ActionFailure, ActionInvocation, ApplyError, CompareOp,
    Condition, EvaluationError, PropertyExpr, RegistrationError, Rule, TriggerSet, Value,
    DEFAULT_TRIGGERS,
};
