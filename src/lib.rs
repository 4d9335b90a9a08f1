//! # countavg
//!
//! countavg is an interpreter for a tiny language that averages a list of
//! integers by dividing it by an explicit count of itself:
//!
//! ```text
//! [2, 4, 6] / count(2, 4, 6)
//! ```
//!
//! Source text goes through three phases: the lexer turns it into tokens, the
//! parser builds a syntax tree, and the evaluator checks that the `count()`
//! operand restates the dividend before computing the mean.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::DivisionNode,
    error::Error,
    interpreter::{
        evaluator::core::{evaluate, summarize_program},
        lexer::tokenize,
        parser::core::parse,
        value::Summary,
    },
};

/// Defines the structure of parsed programs.
///
/// This module declares the node types of the syntax tree: integer literals,
/// lists, the `count()` operand and the division at the root. Every node keeps
/// the source offset it was parsed from.
///
/// # Responsibilities
/// - Makes malformed trees unrepresentable through typed node structs.
/// - Offers a borrowed `Node` view for walking and printing the whole tree.
pub mod ast;
/// Provides the error type for lexing, parsing, and evaluation.
///
/// This module defines the closed set of failures a program can produce, each
/// with a message and, where one exists, the source offset it refers to. The
/// `Display` implementation is the rendering shown to users.
pub mod error;
/// Orchestrates the entire process of program execution.
///
/// This module ties together lexing, parsing and evaluation.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Tokenizes and parses `source` into a program without evaluating it.
///
/// # Errors
/// Returns the first lexical or syntax error in `source`.
///
/// # Examples
/// ```
/// use countavg::parse_source;
///
/// let program = parse_source("[1, 2] / count(1, 2)").unwrap();
/// assert_eq!(program.left.elements.len(), 2);
/// ```
pub fn parse_source(source: &str) -> Result<DivisionNode, Error> {
    let tokens = tokenize(source)?;
    parse(&tokens)
}

/// Runs a program and returns the average it computes.
///
/// This is the single entry point for callers that only need the result.
///
/// # Errors
/// Returns the first error of any phase: lexical, syntax, semantic or empty
/// input. Its `Display` output is ready to show to the user.
///
/// # Examples
/// ```
/// use countavg::{error::ErrorKind, run};
///
/// assert_eq!(run("[2, 4, 6] / count(2, 4, 6)"), Ok(4.0));
/// assert_eq!(run("[1, 2, 3, 4] / count(1, 2, 3, 4)"), Ok(2.5));
///
/// let err = run("[1, 2] / count(1, 3)").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Semantic);
/// ```
pub fn run(source: &str) -> Result<f64, Error> {
    evaluate(&parse_source(source)?)
}

/// Runs a program and returns its size, sum and average.
///
/// # Errors
/// Same as [`run`].
///
/// # Examples
/// ```
/// use countavg::summarize;
///
/// let summary = summarize("[[1, 2], 3] / count(1, 2, 3)").unwrap();
/// assert_eq!(summary.size, 3);
/// assert_eq!(summary.sum, 6);
/// assert_eq!(summary.average, 2.0);
/// ```
pub fn summarize(source: &str) -> Result<Summary, Error> {
    summarize_program(&parse_source(source)?)
}
