use crate::{ActionError, Value};

/// Performs named actions against the current subject.
///
/// The executor owns the action vocabulary: it checks argument count and
/// types for each action name before mutating the bound subject.
pub trait ActionExecutor {
    /// Run action `name` with `arguments`.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError`] if the action is unsupported, the arguments
    /// do not validate, or the subject cannot carry out the request.
    fn execute(&mut self, name: &str, arguments: &[Value]) -> Result<(), ActionError>;
}

impl<F> ActionExecutor for F
where
    F: FnMut(&str, &[Value]) -> Result<(), ActionError>,
{
    fn execute(&mut self, name: &str, arguments: &[Value]) -> Result<(), ActionError> {
        self(name, arguments)
    }
}
