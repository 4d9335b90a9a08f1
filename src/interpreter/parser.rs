/// Program-level parsing.
///
/// Holds the parser entry points, the division production and the `expect`
/// primitive every grammar mismatch is reported through.
pub mod core;

/// List parsing.
///
/// Handles bracketed lists, their elements and nested sublists.
pub mod list;
