use std::fmt;

use super::Value;

/// A named action with its literal arguments, in source order.
///
/// Arguments are not checked against the action name here; arity and types
/// are validated by the [`ActionExecutor`](crate::ActionExecutor) that runs it.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionInvocation {
    pub name: String,
    pub arguments: Vec<Value>,
}

impl ActionInvocation {
    #[must_use]
    pub fn new(name: &str, arguments: Vec<Value>) -> Self {
        Self {
            name: name.to_owned(),
            arguments,
        }
    }
}

impl fmt::Display for ActionInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, arg) in self.arguments.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{arg}")?;
        }
        f.write_str(")")
    }
}
