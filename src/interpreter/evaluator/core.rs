use tracing::debug;

use crate::{
    ast::{CountNode, DivisionNode, NumberNode},
    error::Error,
    interpreter::{evaluator::flatten::flatten, value::Summary},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// [`Error`] describing the failure.
pub type EvalResult<T> = Result<T, Error>;

/// Evaluates a program to the mean of its dividend.
///
/// # Errors
/// See [`summarize_program`].
pub fn evaluate(program: &DivisionNode) -> EvalResult<f64> {
    summarize_program(program).map(|summary| summary.average)
}

/// Evaluates a program and returns its size, sum and mean.
///
/// Both operands are flattened first. The `count()` operand must restate the
/// dividend exactly (same integers, same order, same repetitions); only then
/// is the dividend averaged.
///
/// # Errors
/// - [`Error::Semantic`] if the two flattened lists differ.
/// - [`Error::EmptyInput`] if the dividend flattens to no integers.
pub fn summarize_program(program: &DivisionNode) -> EvalResult<Summary> {
    let dividend = flatten(&program.left);
    let divisor = flatten(&program.right.list);

    debug!(dividend = ?values(&dividend), divisor = ?values(&divisor), "flattened operands");

    check_count_operand(&dividend, &divisor, &program.right)?;

    let size = dividend.len();
    if size == 0 {
        return Err(Error::EmptyInput { message: "list must not be empty".to_string() });
    }

    let sum: i128 = dividend.iter().map(|number| i128::from(number.value)).sum();
    let average = mean(sum, size);

    debug!(size, sum = %sum, average, "computed average");

    Ok(Summary { size,
                 sum,
                 average })
}

/// Requires the count operand to equal the dividend element for element.
///
/// The error points at the first differing element of the count operand, or
/// at the `count` keyword when the operand runs out early.
fn check_count_operand(dividend: &[&NumberNode],
                       divisor: &[&NumberNode],
                       count: &CountNode)
                       -> EvalResult<()> {
    let mismatch = dividend.iter()
                           .zip(divisor)
                           .find(|(expected, found)| expected.value != found.value)
                           .map(|(_, found)| found.offset);

    let offset = match mismatch {
        Some(offset) => offset,
        None if dividend.len() < divisor.len() => divisor[dividend.len()].offset,
        None if dividend.len() > divisor.len() => count.offset,
        None => return Ok(()),
    };

    Err(Error::Semantic { message: "count() list must match the source list".to_string(),
                          offset:  Some(offset), })
}

#[allow(clippy::cast_precision_loss)]
fn mean(sum: i128, size: usize) -> f64 {
    sum as f64 / size as f64
}

fn values(numbers: &[&NumberNode]) -> Vec<i64> {
    numbers.iter().map(|number| number.value).collect()
}
