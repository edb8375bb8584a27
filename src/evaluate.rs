use crate::{
    ActionExecutor, ActionFailure, ApplyError, Condition, EvaluationError, PropertyAccess, Rule,
};

/// Evaluate `condition` against `access`, short-circuiting `and`/`or`.
///
/// The right operand is never read once the left one decides the result.
pub(crate) fn eval_condition(
    condition: &Condition,
    access: &dyn PropertyAccess,
) -> Result<bool, EvaluationError> {
    match condition {
        Condition::Compare {
            identifier,
            op,
            value,
        } => {
            let actual = access.get(identifier)?;
            actual
                .compare(*op, value)
                .ok_or_else(|| EvaluationError::Incomparable {
                    identifier: identifier.clone(),
                    op: op.to_string(),
                    left: actual.type_name(),
                    right: value.type_name(),
                })
        }
        Condition::And(a, b) => Ok(eval_condition(a, access)? && eval_condition(b, access)?),
        Condition::Or(a, b) => Ok(eval_condition(a, access)? || eval_condition(b, access)?),
        Condition::Not(inner) => Ok(!eval_condition(inner, access)?),
    }
}

/// A missing condition always holds.
pub(crate) fn eval_optional(
    condition: Option<&Condition>,
    access: &dyn PropertyAccess,
) -> Result<bool, EvaluationError> {
    condition.map_or(Ok(true), |c| eval_condition(c, access))
}

pub(crate) fn apply_rule(
    rule: &Rule,
    signal: &str,
    access: &dyn PropertyAccess,
    executor: &mut dyn ActionExecutor,
) -> Result<(), ApplyError> {
    if !rule.fires_on(signal) {
        return Ok(());
    }

    let matched = eval_optional(rule.condition.as_ref(), access).map_err(|e| {
        tracing::warn!(trigger = %rule.trigger, error = %e, "rule condition could not be evaluated");
        e
    })?;
    if !matched {
        return Ok(());
    }

    let mut failures = Vec::new();
    for (index, action) in rule.actions.iter().enumerate() {
        if let Err(error) = executor.execute(&action.name, &action.arguments) {
            tracing::warn!(
                trigger = %rule.trigger,
                action = %action.name,
                index,
                error = %error,
                "rule action failed"
            );
            failures.push(ActionFailure {
                index,
                name: action.name.clone(),
                error,
            });
        }
    }

    if failures.is_empty() {
        Ok(())
    } else {
        Err(ApplyError::Actions(failures))
    }
}
