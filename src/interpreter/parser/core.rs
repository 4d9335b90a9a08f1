use std::iter::Peekable;

use tracing::trace;

use crate::{
    ast::{CountNode, DivisionNode, ListNode},
    error::Error,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::list::{parse_elements, parse_list},
    },
};

pub type ParseResult<T> = Result<T, Error>;

/// Parses a complete token sequence into a program.
///
/// The sequence must end with a [`TokenKind::EndOfInput`] token, as the one
/// returned by [`tokenize`](crate::interpreter::lexer::tokenize) does.
///
/// # Errors
/// Returns [`Error::Syntax`] at the first token that does not fit the grammar,
/// including any token left over after a complete program.
///
/// # Examples
/// ```
/// use countavg::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let tokens = tokenize("[1, [2]] / count(1, 2)").unwrap();
/// let program = parse(&tokens).unwrap();
/// assert_eq!(program.left.elements.len(), 2);
/// assert_eq!(program.right.list.elements.len(), 2);
///
/// let tokens = tokenize("[1]/count(1)]").unwrap();
/// assert!(parse(&tokens).is_err());
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<DivisionNode> {
    match tokens.last() {
        Some(Token { kind: TokenKind::EndOfInput,
                     .. }) => {},
        last => {
            let offset = last.map_or(0, |token| token.offset + token.text.chars().count());
            return Err(Error::syntax(TokenKind::EndOfInput.describe(),
                                     "unterminated token stream",
                                     offset));
        },
    }

    parse_program(&mut tokens.iter().peekable())
}

/// Parses a program and requires every token to be consumed.
///
/// Grammar: `program := division EOF`
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<DivisionNode>
    where I: Iterator<Item = &'a Token>
{
    let program = parse_division(tokens)?;
    expect(tokens, TokenKind::EndOfInput)?;

    Ok(program)
}

/// Parses the division of a list by the count of a list.
///
/// The elements between the parentheses of `count` are collected into a list
/// positioned at the `(`, so `count(1, 2)` and `count([1, 2])` both describe
/// the numbers 1 and 2.
///
/// Grammar: `division := list "/" "count" "(" elements? ")"`
pub fn parse_division<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<DivisionNode>
    where I: Iterator<Item = &'a Token>
{
    let left = parse_list(tokens)?;
    let slash = expect(tokens, TokenKind::Slash)?;
    let keyword = expect(tokens, TokenKind::CountKeyword)?;
    let open = expect(tokens, TokenKind::LParen)?;
    let elements = parse_elements(tokens, TokenKind::RParen)?;

    let right = CountNode { list:   ListNode { elements,
                                               offset: open.offset },
                            offset: keyword.offset, };

    Ok(DivisionNode { left,
                      right,
                      offset: slash.offset })
}

/// Consumes the next token if it has the given kind.
///
/// # Errors
/// Returns [`Error::Syntax`] naming `kind` as expected and the actual token as
/// found, positioned at the actual token.
pub fn expect<'a, I>(tokens: &mut Peekable<I>, kind: TokenKind) -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    let token = peek_token(tokens)?;

    trace!("check syntax: expect {kind}, got {} '{}' at {}",
           token.kind,
           token.text,
           token.offset);

    if token.kind != kind {
        return Err(Error::syntax(kind.describe(), token.describe(), token.offset));
    }

    tokens.next();
    Ok(token)
}

/// Returns the next token without consuming it.
pub(in crate::interpreter::parser) fn peek_token<'a, I>(tokens: &mut Peekable<I>)
                                                        -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    tokens.peek()
          .copied()
          .ok_or_else(|| Error::syntax("a token", "unterminated token stream", 0))
}
