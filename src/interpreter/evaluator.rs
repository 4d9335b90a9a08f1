/// Program evaluation.
///
/// Checks the `count()` operand against the dividend and computes the mean.
pub mod core;

/// List flattening.
///
/// Turns nested list nodes into one ordered run of integers.
pub mod flatten;
