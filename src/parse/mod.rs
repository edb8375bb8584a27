mod error;
mod grammar;
mod parser;

pub use error::ParseError;
pub use parser::RuleHeader;

use crate::lex::Lexer;
use crate::Rule;

/// Parse one rule from its DSL text.
///
/// # Errors
///
/// Returns [`ParseError`] at the first malformed token or grammar violation.
pub fn parse(source: &str) -> Result<Rule, ParseError> {
    let mut lexer = Lexer::new(source);
    parse_tokens(&mut lexer)
}

/// Parse one rule from a lexer positioned at the start of the rule.
///
/// # Errors
///
/// Returns [`ParseError`] at the first malformed token or grammar violation.
pub fn parse_tokens(lexer: &mut Lexer<'_>) -> Result<Rule, ParseError> {
    grammar::Parser::new(lexer).rule()
}

/// Parse a lambda rule: `on <trigger> [if <condition>]`, with no actions.
///
/// # Errors
///
/// Returns [`ParseError`] at the first malformed token or grammar violation.
pub fn parse_lambda(source: &str) -> Result<RuleHeader, ParseError> {
    let mut lexer = Lexer::new(source);
    grammar::Parser::new(&mut lexer).lambda_rule()
}
