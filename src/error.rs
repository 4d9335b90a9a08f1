use std::fmt;

/// The four phases a program can fail in.
///
/// Each variant's [`Display`](fmt::Display) output is the name shown to the
/// user in front of the message, e.g. `SyntaxError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The character stream could not be split into tokens.
    Lexical,
    /// The token stream does not follow the grammar.
    Syntax,
    /// The program is well formed but its `count()` list is wrong.
    Semantic,
    /// The program is valid but there is nothing to average.
    EmptyInput,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::Lexical => "LexicalError",
                        Self::Syntax => "SyntaxError",
                        Self::Semantic => "SemanticError",
                        Self::EmptyInput => "EmptyInputError",
                    })
    }
}

/// Represents every error that can occur while running a program.
///
/// The set is closed: lexing, parsing and evaluation all report through this
/// type, and each phase stops at the first error it finds. The `Display`
/// implementation is the user-facing rendering:
/// `"<ErrorKind>: <message> (pos <offset>)"`, or `"<ErrorKind>: <message>"`
/// when no offset is known.
///
/// # Examples
/// ```
/// use countavg::{error::Error, run};
///
/// let err = run("[1.5]/count(1.5)").unwrap_err();
/// assert!(matches!(err, Error::Lexical { offset: 2, .. }));
/// assert_eq!(err.to_string(),
///            "LexicalError: float not allowed (integer only) (pos 2)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An invalid character sequence: unknown keyword, decimal point,
    /// unrecognised character or an integer literal out of range.
    #[error("LexicalError: {message} (pos {offset})")]
    Lexical {
        /// What went wrong.
        message: String,
        /// Character offset of the first offending character.
        offset:  usize,
    },
    /// A token of the wrong kind, including trailing input after a complete
    /// program.
    #[error("SyntaxError: expected {expected}, found {found} (pos {offset})")]
    Syntax {
        /// Description of what the grammar required at this point.
        expected: String,
        /// Description of the token actually present.
        found:    String,
        /// Character offset of the offending token.
        offset:   usize,
    },
    /// The `count()` list does not restate the dividend list.
    #[error("SemanticError: {message}{}", render_offset(.offset))]
    Semantic {
        /// What went wrong.
        message: String,
        /// Character offset of the first differing element, if known.
        offset:  Option<usize>,
    },
    /// The dividend list is empty, so no average is defined.
    #[error("EmptyInputError: {message}")]
    EmptyInput {
        /// What went wrong.
        message: String,
    },
}

fn render_offset(offset: &Option<usize>) -> String {
    offset.map_or_else(String::new, |pos| format!(" (pos {pos})"))
}

impl Error {
    pub(crate) fn lexical(message: impl Into<String>, offset: usize) -> Self {
        Self::Lexical { message: message.into(),
                        offset }
    }

    pub(crate) fn syntax(expected: impl Into<String>, found: impl Into<String>, offset: usize)
                         -> Self {
        Self::Syntax { expected: expected.into(),
                       found: found.into(),
                       offset }
    }

    /// Returns which phase produced the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Lexical { .. } => ErrorKind::Lexical,
            Self::Syntax { .. } => ErrorKind::Syntax,
            Self::Semantic { .. } => ErrorKind::Semantic,
            Self::EmptyInput { .. } => ErrorKind::EmptyInput,
        }
    }

    /// Returns the message without the kind prefix or position suffix.
    ///
    /// Syntax errors combine their expected and found descriptions.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Lexical { message, .. }
            | Self::Semantic { message, .. }
            | Self::EmptyInput { message } => message.clone(),
            Self::Syntax { expected, found, .. } => format!("expected {expected}, found {found}"),
        }
    }

    /// Returns the character offset the error points at, when there is one.
    #[must_use]
    pub const fn offset(&self) -> Option<usize> {
        match self {
            Self::Lexical { offset, .. } | Self::Syntax { offset, .. } => Some(*offset),
            Self::Semantic { offset, .. } => *offset,
            Self::EmptyInput { .. } => None,
        }
    }
}
