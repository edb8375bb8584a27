use std::fmt;

use super::action::ActionInvocation;
use super::error::ApplyError;
use super::expr::Condition;
use crate::access::PropertyAccess;
use crate::executor::ActionExecutor;

/// A parsed rule: the trigger it fires on, an optional condition, and the
/// actions to run when the condition holds.
///
/// Rules are created by [`parse`](crate::parse::parse) or assembled directly,
/// and never change afterwards. A rule without a condition always matches.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub trigger: String,
    pub condition: Option<Condition>,
    pub actions: Vec<ActionInvocation>,
}

impl Rule {
    /// Apply this rule for `signal`.
    ///
    /// A signal other than the rule's trigger is a no-op. Otherwise the
    /// condition is evaluated against `access` and, when true, every action
    /// runs in order against `executor`. A failing action does not stop the
    /// ones after it.
    ///
    /// `Ok(())` covers both "condition false" and "all actions succeeded".
    ///
    /// # Errors
    ///
    /// Returns [`ApplyError::Condition`] if the condition could not be
    /// evaluated, or [`ApplyError::Actions`] listing every failed action.
    pub fn apply(
        &self,
        signal: &str,
        access: &dyn PropertyAccess,
        executor: &mut dyn ActionExecutor,
    ) -> Result<(), ApplyError> {
        crate::evaluate::apply_rule(self, signal, access, executor)
    }

    /// Whether this rule fires on `signal`.
    #[must_use]
    pub fn fires_on(&self, signal: &str) -> bool {
        self.trigger == signal
    }
}

/// Formats the rule back into DSL text.
impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "on {}", self.trigger)?;
        if let Some(condition) = &self.condition {
            write!(f, " if {condition}")?;
        }
        for action in &self.actions {
            write!(f, " {action}")?;
        }
        Ok(())
    }
}
