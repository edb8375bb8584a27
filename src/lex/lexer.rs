use winnow::ascii::till_line_ending;
use winnow::combinator::{alt, opt, repeat};
use winnow::error::{ErrMode, ModalResult};
use winnow::prelude::*;
use winnow::token::{any, take_while};

use crate::CompareOp;

use super::token::{Keyword, LexErrorKind, Position, Token, TokenKind};

// -- Whitespace & comments --------------------------------------------------

fn ws(input: &mut &str) -> ModalResult<()> {
    let _: () = repeat(
        0..,
        alt((
            take_while(1.., |c: char| c.is_ascii_whitespace()).void(),
            ('#', till_line_ending).void(),
        )),
    )
    .parse_next(input)?;
    Ok(())
}

// -- Literals ---------------------------------------------------------------

/// A double-quoted string closed on the same line.
fn string_literal(input: &mut &str) -> ModalResult<String> {
    '"'.parse_next(input)?;
    let mut s = String::new();
    loop {
        let ch = any.parse_next(input)?;
        match ch {
            '"' => return Ok(s),
            '\n' => return Err(ErrMode::from_input(input).cut()),
            '\\' => {
                let esc = any.parse_next(input)?;
                match esc {
                    '"' => s.push('"'),
                    '\\' => s.push('\\'),
                    'n' => s.push('\n'),
                    't' => s.push('\t'),
                    '\n' => return Err(ErrMode::from_input(input).cut()),
                    other => {
                        s.push('\\');
                        s.push(other);
                    }
                }
            }
            c => s.push(c),
        }
    }
}

/// Digits with an optional sign and fraction. A fraction makes the literal a
/// double, or a float when followed by `f`.
fn number_literal(input: &mut &str) -> ModalResult<TokenKind> {
    let text = (
        opt('-'),
        take_while(1.., |c: char| c.is_ascii_digit()),
        opt(('.', take_while(0.., |c: char| c.is_ascii_digit()))),
    )
        .take()
        .parse_next(input)?;

    if !text.contains('.') {
        return Ok(text
            .parse::<i64>()
            .map_or(TokenKind::Error(LexErrorKind::InvalidNumber), TokenKind::Int));
    }

    if opt('f').parse_next(input)?.is_some() {
        Ok(text
            .parse::<f32>()
            .map_or(TokenKind::Error(LexErrorKind::InvalidNumber), TokenKind::Float))
    } else {
        Ok(text
            .parse::<f64>()
            .map_or(TokenKind::Error(LexErrorKind::InvalidNumber), TokenKind::Double))
    }
}

// -- Operators & punctuation ------------------------------------------------

fn operator(input: &mut &str) -> ModalResult<TokenKind> {
    alt((
        ">=".value(CompareOp::Gte),
        ">".value(CompareOp::Gt),
        "<=".value(CompareOp::Lte),
        "<".value(CompareOp::Lt),
        "==".value(CompareOp::Eq),
        "!=".value(CompareOp::Neq),
    ))
    .map(TokenKind::Operator)
    .parse_next(input)
}

fn punctuation(input: &mut &str) -> ModalResult<TokenKind> {
    alt((
        '('.value(TokenKind::LeftParen),
        ')'.value(TokenKind::RightParen),
        ','.value(TokenKind::Comma),
    ))
    .parse_next(input)
}

// -- Identifiers & keywords -------------------------------------------------

fn word(input: &mut &str) -> ModalResult<TokenKind> {
    let text = (
        take_while(1.., |c: char| c.is_ascii_alphabetic() || c == '_'),
        take_while(0.., |c: char| {
            c.is_ascii_alphanumeric() || c == '_' || c == '.'
        }),
    )
        .take()
        .parse_next(input)?;

    Ok(match text {
        "on" => TokenKind::Keyword(Keyword::On),
        "if" => TokenKind::Keyword(Keyword::If),
        "and" | "AND" => TokenKind::Keyword(Keyword::And),
        "or" | "OR" => TokenKind::Keyword(Keyword::Or),
        "not" | "NOT" => TokenKind::Keyword(Keyword::Not),
        "contains" => TokenKind::Operator(CompareOp::Contains),
        "true" => TokenKind::Bool(true),
        "false" => TokenKind::Bool(false),
        name => TokenKind::Identifier(name.to_owned()),
    })
}

fn token(input: &mut &str) -> ModalResult<TokenKind> {
    alt((number_literal, operator, punctuation, word)).parse_next(input)
}

// -- Lexer ------------------------------------------------------------------

/// Turns rule text into [`Token`]s, one at a time.
///
/// The lexer never fails: malformed input yields a [`TokenKind::Error`]
/// token that the parser must reject. Once the source is exhausted every
/// call returns [`TokenKind::Eof`].
///
/// The logical operators `and`, `or` and `not` are also recognized in upper
/// case. Every other keyword (`on`, `if`, `contains`, `true`, `false`) is
/// lower case only, so `ON` or `Contains` lex as identifiers.
#[derive(Debug, Clone)]
pub struct Lexer<'s> {
    rest: &'s str,
    position: Position,
}

impl<'s> Lexer<'s> {
    #[must_use]
    pub fn new(source: &'s str) -> Self {
        Self {
            rest: source,
            position: Position::start(),
        }
    }

    /// Restart lexing at the beginning of `source`.
    pub fn reset(&mut self, source: &'s str) {
        self.rest = source;
        self.position = Position::start();
    }

    /// Produce the next token, or an end-of-input token.
    pub fn next_token(&mut self) -> Token<'s> {
        let mut input = self.rest;
        // zero or more repetitions, never fails
        let _ = ws.parse_next(&mut input);
        self.advance_to(input);

        let start = self.position;
        if self.rest.is_empty() {
            return Token {
                kind: TokenKind::Eof,
                lexeme: "",
                position: start,
            };
        }

        let mut input = self.rest;
        let kind = if self.rest.starts_with('"') {
            match string_literal.parse_next(&mut input) {
                Ok(s) => TokenKind::String(s),
                Err(_) => {
                    let end = self.rest.find('\n').unwrap_or(self.rest.len());
                    input = &self.rest[end..];
                    TokenKind::Error(LexErrorKind::UnterminatedString)
                }
            }
        } else {
            match token.parse_next(&mut input) {
                Ok(kind) => kind,
                Err(_) => {
                    let width = self.rest.chars().next().map_or(0, char::len_utf8);
                    input = &self.rest[width..];
                    TokenKind::Error(LexErrorKind::UnrecognizedCharacter)
                }
            }
        };

        let consumed = self.rest.len() - input.len();
        let lexeme = &self.rest[..consumed];
        self.advance_to(input);

        Token {
            kind,
            lexeme,
            position: start,
        }
    }

    fn advance_to(&mut self, rest: &'s str) {
        let consumed = &self.rest[..self.rest.len() - rest.len()];
        for c in consumed.chars() {
            if c == '\n' {
                self.position.line += 1;
                self.position.column = 1;
            } else {
                self.position.column += 1;
            }
        }
        self.position.offset += consumed.len();
        self.rest = rest;
    }
}

/// Yields tokens up to, but not including, end of input.
impl<'s> Iterator for Lexer<'s> {
    type Item = Token<'s>;

    fn next(&mut self) -> Option<Token<'s>> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source).map(|t| t.kind).collect()
    }

    #[test]
    fn lex_full_rule() {
        let tokens = kinds(r#"on created if app_id contains "term" set(alpha, 0.5)"#);
        assert_eq!(
            tokens,
            vec![
                TokenKind::Keyword(Keyword::On),
                TokenKind::Identifier("created".into()),
                TokenKind::Keyword(Keyword::If),
                TokenKind::Identifier("app_id".into()),
                TokenKind::Operator(CompareOp::Contains),
                TokenKind::String("term".into()),
                TokenKind::Identifier("set".into()),
                TokenKind::LeftParen,
                TokenKind::Identifier("alpha".into()),
                TokenKind::Comma,
                TokenKind::Double(0.5),
                TokenKind::RightParen,
            ]
        );
    }

    #[test]
    fn lex_all_operators() {
        assert_eq!(
            kinds("== != > >= < <= contains"),
            vec![
                TokenKind::Operator(CompareOp::Eq),
                TokenKind::Operator(CompareOp::Neq),
                TokenKind::Operator(CompareOp::Gt),
                TokenKind::Operator(CompareOp::Gte),
                TokenKind::Operator(CompareOp::Lt),
                TokenKind::Operator(CompareOp::Lte),
                TokenKind::Operator(CompareOp::Contains),
            ]
        );
    }

    #[test]
    fn lex_numbers() {
        assert_eq!(
            kinds("42 -10 0.5 1.5f -0.25"),
            vec![
                TokenKind::Int(42),
                TokenKind::Int(-10),
                TokenKind::Double(0.5),
                TokenKind::Float(1.5),
                TokenKind::Double(-0.25),
            ]
        );
    }

    #[test]
    fn lex_integer_overflow_is_error() {
        assert_eq!(
            kinds("99999999999999999999"),
            vec![TokenKind::Error(LexErrorKind::InvalidNumber)]
        );
    }

    #[test]
    fn lex_keywords_both_cases() {
        assert_eq!(
            kinds("and AND or OR not NOT true false"),
            vec![
                TokenKind::Keyword(Keyword::And),
                TokenKind::Keyword(Keyword::And),
                TokenKind::Keyword(Keyword::Or),
                TokenKind::Keyword(Keyword::Or),
                TokenKind::Keyword(Keyword::Not),
                TokenKind::Keyword(Keyword::Not),
                TokenKind::Bool(true),
                TokenKind::Bool(false),
            ]
        );
    }

    #[test]
    fn upper_case_only_for_logical_operators() {
        assert_eq!(
            kinds("ON IF CONTAINS TRUE"),
            vec![
                TokenKind::Identifier("ON".into()),
                TokenKind::Identifier("IF".into()),
                TokenKind::Identifier("CONTAINS".into()),
                TokenKind::Identifier("TRUE".into()),
            ]
        );
    }

    #[test]
    fn lex_string_escapes() {
        assert_eq!(
            kinds(r#""a\"b\\c\td""#),
            vec![TokenKind::String("a\"b\\c\td".into())]
        );
    }

    #[test]
    fn unterminated_string_points_at_quote() {
        let mut lexer = Lexer::new("title == \"abc\nmaximize()");
        lexer.next_token();
        lexer.next_token();
        let bad = lexer.next_token();
        assert_eq!(bad.kind, TokenKind::Error(LexErrorKind::UnterminatedString));
        assert_eq!(bad.position.column, 10);
        assert_eq!(bad.position.offset, 9);
        assert_eq!(bad.lexeme, "\"abc");

        let next = lexer.next_token();
        assert_eq!(next.kind, TokenKind::Identifier("maximize".into()));
        assert_eq!(next.position.line, 2);
        assert_eq!(next.position.column, 1);
    }

    #[test]
    fn unterminated_string_at_end_of_input() {
        assert_eq!(
            kinds("\"abc"),
            vec![TokenKind::Error(LexErrorKind::UnterminatedString)]
        );
    }

    #[test]
    fn unrecognized_character_is_error_token() {
        let tokens: Vec<_> = Lexer::new("a = b").collect();
        assert_eq!(tokens[1].kind, TokenKind::Error(LexErrorKind::UnrecognizedCharacter));
        assert_eq!(tokens[1].lexeme, "=");
        assert_eq!(tokens[2].kind, TokenKind::Identifier("b".into()));
    }

    #[test]
    fn comments_and_whitespace_skipped() {
        assert_eq!(
            kinds("# header\n  on\t# trailing\n created  "),
            vec![
                TokenKind::Keyword(Keyword::On),
                TokenKind::Identifier("created".into()),
            ]
        );
    }

    #[test]
    fn eof_repeats_and_reset_restarts() {
        let mut lexer = Lexer::new("on");
        assert_eq!(lexer.next_token().kind, TokenKind::Keyword(Keyword::On));
        assert!(lexer.next_token().is_eof());
        assert!(lexer.next_token().is_eof());

        lexer.reset("maximize");
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Identifier("maximize".into()));
        assert_eq!(token.position, Position::start());
    }
}
