/// The evaluator module computes results from a parsed program.
///
/// The evaluator flattens both operands of the division, verifies that the
/// `count()` operand restates the dividend, and averages the dividend.
///
/// # Responsibilities
/// - Flattens nested lists into ordered integer sequences.
/// - Reports semantic errors when the operands disagree.
/// - Reports an empty-input error when there is nothing to average.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a sequence of tokens:
/// integers, brackets, parentheses, commas, the division slash and the `count`
/// keyword. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, text and
///   source offset.
/// - Reports lexical errors for decimal points, unknown words and stray
///   characters.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive-descent parser with one token of lookahead and one
/// function per grammar rule.
///
/// # Responsibilities
/// - Converts tokens into a [`DivisionNode`](crate::ast::DivisionNode).
/// - Validates the grammar, reporting the expected and found token.
/// - Rejects input left over after a complete program.
pub mod parser;
/// The value module defines what a successful evaluation produces.
pub mod value;
