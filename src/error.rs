use thiserror::Error;

use crate::parse::ParseError;
use crate::RegistrationError;

/// Unified error type covering parsing, registration, and I/O.
///
/// Returned by convenience constructors like
/// [`RuleBook::from_file()`](crate::RuleBook::from_file).
#[derive(Debug, Error)]
pub enum ViewRuleError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Registration(#[from] RegistrationError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
