use std::fmt;

use logos::Logos;
use tracing::{debug, trace};

use crate::error::Error;

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, Error>;

/// Keywords recognised by the language, matched after lowercasing.
const KEYWORDS: &[(&str, TokenKind)] = &[("count", TokenKind::CountKeyword)];

/// The classification of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A run of ASCII digits, such as `42`.
    Number,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `,`
    Comma,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `/`
    Slash,
    /// `count`, in any letter case.
    CountKeyword,
    /// Marks the end of the source. Always the last token.
    EndOfInput,
}

impl TokenKind {
    /// Returns how the kind is named in syntax error messages.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Number => "integer",
            Self::LBracket => "'['",
            Self::RBracket => "']'",
            Self::Comma => "','",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::Slash => "'/'",
            Self::CountKeyword => "'count'",
            Self::EndOfInput => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::Number => "NUMBER",
                        Self::LBracket => "LBRACK",
                        Self::RBracket => "RBRACK",
                        Self::Comma => "COMMA",
                        Self::LParen => "LPAREN",
                        Self::RParen => "RPAREN",
                        Self::Slash => "SLASH",
                        Self::CountKeyword => "COUNT",
                        Self::EndOfInput => "EOF",
                    })
    }
}

/// A classified, positioned piece of the source.
///
/// Tokens are produced by [`tokenize`] and never modified afterwards. `text`
/// is the exact lexeme (empty for [`TokenKind::EndOfInput`]) and `offset` is
/// the character index of its first character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:   TokenKind,
    /// The lexeme exactly as written in the source.
    pub text:   String,
    /// Character offset of the lexeme's first character.
    pub offset: usize,
}

impl Token {
    /// Describes the token the way syntax errors report what was found.
    #[must_use]
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::EndOfInput => TokenKind::EndOfInput.describe().to_string(),
            _ => format!("'{}'", self.text),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({}, '{}', pos={})", self.kind, self.text, self.offset)
    }
}

/// Raw lexemes recognised by the scanner before classification.
///
/// Letter runs and the decimal point are scanned as lexemes of their own so
/// that [`tokenize`] can reject them with a precise message.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\r\n]+")]
enum Lexeme {
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `/`
    #[token("/")]
    Slash,
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+")]
    Digits,
    /// Keyword candidates, such as `count` or `avg`.
    #[regex(r"[a-zA-Z]+")]
    Word,
    /// `.`
    #[token(".")]
    Dot,
}

/// Splits `source` into tokens.
///
/// Whitespace (space, tab, newline, carriage return) separates tokens and is
/// otherwise dropped. The returned sequence always ends with exactly one
/// [`TokenKind::EndOfInput`] token positioned at the end of the source.
///
/// # Errors
/// Returns [`Error::Lexical`] at the first offending character for:
/// - a letter run other than `count`,
/// - a decimal point,
/// - a digit run too large for a 64-bit integer,
/// - any other character outside the language.
///
/// # Examples
/// ```
/// use countavg::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("[7] / COUNT(7)").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::LBracket,
///             TokenKind::Number,
///             TokenKind::RBracket,
///             TokenKind::Slash,
///             TokenKind::CountKeyword,
///             TokenKind::LParen,
///             TokenKind::Number,
///             TokenKind::RParen,
///             TokenKind::EndOfInput]);
/// assert_eq!(tokens[4].text, "COUNT");
/// assert_eq!(tokens[4].offset, 6);
/// ```
pub fn tokenize(source: &str) -> LexResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer(source);
    let mut position = CharPosition::default();

    while let Some(lexeme) = lexer.next() {
        let start = lexer.span().start;
        let offset = position.advance_to(source, start);

        let Ok(lexeme) = lexeme else {
            let found = source[start..].chars().next().unwrap_or_default();
            return Err(Error::lexical(format!("unexpected character '{found}'"), offset));
        };

        let text = lexer.slice();
        let kind = classify(lexeme, text, offset)?;

        let token = Token { kind,
                            text: text.to_string(),
                            offset };
        trace!("{token}");
        tokens.push(token);
    }

    tokens.push(Token { kind:   TokenKind::EndOfInput,
                        text:   String::new(),
                        offset: position.advance_to(source, source.len()), });

    log_lexical_trace(&tokens);

    Ok(tokens)
}

/// Maps a raw lexeme onto its token kind, rejecting lexemes that are scanned
/// but not part of the language.
fn classify(lexeme: Lexeme, text: &str, offset: usize) -> LexResult<TokenKind> {
    match lexeme {
        Lexeme::LBracket => Ok(TokenKind::LBracket),
        Lexeme::RBracket => Ok(TokenKind::RBracket),
        Lexeme::Comma => Ok(TokenKind::Comma),
        Lexeme::LParen => Ok(TokenKind::LParen),
        Lexeme::RParen => Ok(TokenKind::RParen),
        Lexeme::Slash => Ok(TokenKind::Slash),
        Lexeme::Digits => {
            if text.parse::<i64>().is_err() {
                return Err(Error::lexical("integer literal too large", offset));
            }
            Ok(TokenKind::Number)
        },
        Lexeme::Word => lookup_keyword(text).ok_or_else(|| {
                                                Error::lexical(format!("unknown keyword '{text}'"),
                                                               offset)
                                            }),
        Lexeme::Dot => Err(Error::lexical("float not allowed (integer only)", offset)),
    }
}

fn lookup_keyword(word: &str) -> Option<TokenKind> {
    let word = word.to_ascii_lowercase();
    KEYWORDS.iter()
            .find(|(keyword, _)| *keyword == word)
            .map(|(_, kind)| *kind)
}

/// Converts increasing byte indices into character indices.
///
/// Only the characters between the previous and the requested index are
/// counted, so a whole scan stays linear in the source length.
#[derive(Default)]
struct CharPosition {
    byte:      usize,
    character: usize,
}

impl CharPosition {
    /// `byte_index` must lie on a character boundary at or after the previous
    /// call's index.
    fn advance_to(&mut self, source: &str, byte_index: usize) -> usize {
        self.character += source[self.byte..byte_index].chars().count();
        self.byte = byte_index;
        self.character
    }
}

/// Emits the lexeme breakdown of a successful scan at debug level.
///
/// `Lexical` lists the characters of every lexeme, `Group` the lexemes and
/// `Token` the kinds, e.g. for `[12]`:
/// ```text
/// Lexical -> [ | 1 2 | ]
/// Group   -> [ | 12 | ]
/// Token   -> LBRACK NUMBER RBRACK
/// ```
fn log_lexical_trace(tokens: &[Token]) {
    if !tracing::enabled!(tracing::Level::DEBUG) {
        return;
    }

    let lexemes = tokens.iter()
                        .filter(|token| token.kind != TokenKind::EndOfInput);

    let characters = lexemes.clone()
                            .map(|token| {
                                token.text
                                     .chars()
                                     .map(String::from)
                                     .collect::<Vec<_>>()
                                     .join(" ")
                            })
                            .collect::<Vec<_>>()
                            .join(" | ");
    let groups = lexemes.clone()
                        .map(|token| token.text.as_str())
                        .collect::<Vec<_>>()
                        .join(" | ");
    let kinds = lexemes.map(|token| token.kind.to_string())
                       .collect::<Vec<_>>()
                       .join(" ");

    debug!("Lexical -> {characters}");
    debug!("Group   -> {groups}");
    debug!("Token   -> {kinds}");
}
