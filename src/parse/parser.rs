use crate::Condition;

/// The trigger and optional condition of a rule, without an action list.
///
/// This is what lambda rules parse to: their action tail is supplied by the
/// host as callbacks.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleHeader {
    pub trigger: String,
    pub condition: Option<Condition>,
}
