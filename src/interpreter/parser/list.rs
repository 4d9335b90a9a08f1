use std::iter::Peekable;

use crate::{
    ast::{Element, ListNode, NumberNode},
    error::Error,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, expect, peek_token},
    },
};

/// Parses a bracketed list such as `[]`, `[1, 2]` or `[[1, 2], 3]`.
///
/// Grammar: `list := "[" elements? "]"`
///
/// # Errors
/// Returns [`Error::Syntax`] if the opening or closing bracket is missing or
/// an element fails to parse.
pub fn parse_list<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<ListNode>
    where I: Iterator<Item = &'a Token>
{
    let open = expect(tokens, TokenKind::LBracket)?;
    let elements = parse_elements(tokens, TokenKind::RBracket)?;

    Ok(ListNode { elements,
                  offset: open.offset })
}

/// Parses a single list element: an integer or a nested list.
///
/// Grammar: `element := NUMBER | list`
pub fn parse_element<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Element>
    where I: Iterator<Item = &'a Token>
{
    let token = peek_token(tokens)?;

    match token.kind {
        TokenKind::Number => {
            let token = expect(tokens, TokenKind::Number)?;
            let value = token.text
                             .parse()
                             .map_err(|_| {
                                 Error::syntax("integer within the 64-bit range",
                                               token.describe(),
                                               token.offset)
                             })?;

            Ok(Element::Number(NumberNode { value,
                                            offset: token.offset }))
        },
        TokenKind::LBracket => parse_list(tokens).map(Element::List),
        _ => Err(Error::syntax("integer or '['", token.describe(), token.offset)),
    }
}

/// Parses comma-separated elements up to and including `closing`.
///
/// An immediately encountered `closing` token yields no elements.
///
/// Grammar: `elements := element ("," element)*`
pub(in crate::interpreter::parser) fn parse_elements<'a, I>(tokens: &mut Peekable<I>,
                                                            closing: TokenKind)
                                                            -> ParseResult<Vec<Element>>
    where I: Iterator<Item = &'a Token>
{
    let mut elements = Vec::new();

    if peek_token(tokens)?.kind != closing {
        elements.push(parse_element(tokens)?);

        while peek_token(tokens)?.kind == TokenKind::Comma {
            expect(tokens, TokenKind::Comma)?;
            elements.push(parse_element(tokens)?);
        }
    }

    expect(tokens, closing)?;
    Ok(elements)
}
