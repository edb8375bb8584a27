use std::fmt;
use std::sync::Arc;

use crate::evaluate::eval_optional;
use crate::parse::{parse_lambda, ParseError, RuleHeader};
use crate::{Condition, EvaluationError, PropertyAccess, RegistrationError};

/// A host-supplied zero-argument callback. Its result is advisory.
pub type Predicate = Arc<dyn Fn() -> bool + Send + Sync>;

/// A [`PropertyAccess`] that can be stored in the process-wide registry.
pub type SharedAccess = Arc<dyn PropertyAccess + Send + Sync>;

/// What happened when a [`LambdaRule`] was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LambdaOutcome {
    /// The signal was not the rule's trigger.
    Skipped,
    /// The condition held; carries the match callback's result.
    Matched(bool),
    /// The condition did not hold; carries the mismatch callback's result,
    /// if one was supplied.
    Unmatched(Option<bool>),
}

/// A rule whose action tail is a pair of host callbacks instead of DSL
/// actions.
///
/// ```
/// use viewrule::{LambdaOutcome, LambdaRule, Properties};
/// use std::sync::Arc;
///
/// let rule = LambdaRule::parse(r#"on created if app_id == "xterm""#, Arc::new(|| true), None)?;
/// let props = Properties::new().set("app_id", "xterm");
/// assert_eq!(rule.apply("created", &props)?, LambdaOutcome::Matched(true));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone)]
pub struct LambdaRule {
    header: RuleHeader,
    on_match: Predicate,
    on_mismatch: Option<Predicate>,
}

impl LambdaRule {
    #[must_use]
    pub fn new(header: RuleHeader, on_match: Predicate, on_mismatch: Option<Predicate>) -> Self {
        Self {
            header,
            on_match,
            on_mismatch,
        }
    }

    /// Parse `on <trigger> [if <condition>]` and attach the callbacks.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the text is not a valid lambda rule.
    pub fn parse(
        text: &str,
        on_match: Predicate,
        on_mismatch: Option<Predicate>,
    ) -> Result<Self, ParseError> {
        Ok(Self::new(parse_lambda(text)?, on_match, on_mismatch))
    }

    #[must_use]
    pub fn trigger(&self) -> &str {
        &self.header.trigger
    }

    #[must_use]
    pub fn condition(&self) -> Option<&Condition> {
        self.header.condition.as_ref()
    }

    #[must_use]
    pub fn fires_on(&self, signal: &str) -> bool {
        self.header.trigger == signal
    }

    /// Evaluate the condition for `signal` and run the matching callback.
    ///
    /// The mismatch callback runs once for every subject the condition
    /// rejects, so it must tolerate being called many times per event.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluationError`] if the condition could not be evaluated;
    /// neither callback runs in that case.
    pub fn apply(
        &self,
        signal: &str,
        access: &dyn PropertyAccess,
    ) -> Result<LambdaOutcome, EvaluationError> {
        if !self.fires_on(signal) {
            return Ok(LambdaOutcome::Skipped);
        }

        let outcome = if eval_optional(self.condition(), access)? {
            LambdaOutcome::Matched((self.on_match)())
        } else {
            LambdaOutcome::Unmatched(self.on_mismatch.as_ref().map(|f| f()))
        };
        tracing::debug!(trigger = %self.header.trigger, ?outcome, "lambda rule callback returned");
        Ok(outcome)
    }
}

impl fmt::Debug for LambdaRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LambdaRule")
            .field("header", &self.header)
            .field("on_mismatch", &self.on_mismatch.is_some())
            .finish_non_exhaustive()
    }
}

/// Rule text plus callbacks, handed to
/// [`LambdaRuleRegistry::register`](crate::LambdaRuleRegistry::register).
///
/// The text is parsed once at registration and the result cached; see
/// [`rule`](Self::rule).
#[derive(Clone, Default)]
pub struct LambdaRuleRegistration {
    text: String,
    on_match: Option<Predicate>,
    on_mismatch: Option<Predicate>,
    access: Option<SharedAccess>,
    rule: Option<LambdaRule>,
}

impl LambdaRuleRegistration {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Callback run when the condition holds. Required.
    #[must_use]
    pub fn on_match(mut self, f: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        self.on_match = Some(Arc::new(f));
        self
    }

    /// Callback run when the condition does not hold.
    #[must_use]
    pub fn on_mismatch(mut self, f: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        self.on_mismatch = Some(Arc::new(f));
        self
    }

    /// Evaluate against `access` instead of the access passed to
    /// [`apply_all`](crate::LambdaRuleRegistry::apply_all).
    #[must_use]
    pub fn with_access(mut self, access: SharedAccess) -> Self {
        self.access = Some(access);
        self
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn access(&self) -> Option<&SharedAccess> {
        self.access.as_ref()
    }

    /// The parsed rule, present once the registration has been accepted.
    #[must_use]
    pub fn rule(&self) -> Option<&LambdaRule> {
        self.rule.as_ref()
    }

    pub(crate) fn compile(&mut self, key: &str) -> Result<(), RegistrationError> {
        let on_match = self
            .on_match
            .clone()
            .ok_or_else(|| RegistrationError::MissingIfCallback {
                key: key.to_owned(),
            })?;
        let rule = LambdaRule::parse(&self.text, on_match, self.on_mismatch.clone()).map_err(
            |source| RegistrationError::Parse {
                key: key.to_owned(),
                source,
            },
        )?;
        self.rule = Some(rule);
        Ok(())
    }
}

impl fmt::Debug for LambdaRuleRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LambdaRuleRegistration")
            .field("text", &self.text)
            .field("on_match", &self.on_match.is_some())
            .field("on_mismatch", &self.on_mismatch.is_some())
            .field("access", &self.access.is_some())
            .field("rule", &self.rule)
            .finish()
    }
}
