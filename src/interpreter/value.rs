use std::fmt;

/// The statistics computed for a valid program.
///
/// Displays as one `Name: value` line per field, the mean last:
/// ```
/// use countavg::summarize;
///
/// let summary = summarize("[1, 2, 3, 4] / count(1, 2, 3, 4)").unwrap();
/// assert_eq!(summary.to_string(), "Size: 4\nSum: 10\nAverage: 2.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// How many integers the dividend flattens to. Never zero.
    pub size:    usize,
    /// The sum of those integers.
    pub sum:     i128,
    /// `sum / size`.
    pub average: f64,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Size: {}", self.size)?;
        writeln!(f, "Sum: {}", self.sum)?;
        write!(f, "Average: {}", self.average)
    }
}

/// A [`Summary`] preceded by the program it was computed from.
///
/// ```
/// use countavg::{interpreter::value::Report, summarize};
///
/// let source = "[2, 4] / count(2, 4)";
/// let report = Report { input:   source,
///                       summary: summarize(source).unwrap(), };
/// assert_eq!(report.to_string(),
///            "Input: [2, 4] / count(2, 4)\nSize: 2\nSum: 6\nAverage: 3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report<'a> {
    /// The program text as it was run.
    pub input:   &'a str,
    /// What the program evaluated to.
    pub summary: Summary,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Input: {}", self.input)?;
        write!(f, "{}", self.summary)
    }
}
