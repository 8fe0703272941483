//! Plain-text rendering of a [`Summary`].

use core::fmt;

use crate::stats::Summary;

/// Textual report of a [`Summary`], one statistic per line.
///
/// # Examples
/// ```
/// use u_stats::report::Report;
/// use u_stats::stats::Summary;
/// let summary = Summary::from_values(&[5, 1, 4, 1, 2]).unwrap();
/// assert_eq!(
///     Report(&summary).to_string(),
///     "Number of elements: 5\n\
///      Mean:   2.60\n\
///      Median: 2.00\n\
///      Mode(s): 1 (frequency: 2)\n"
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Report<'a>(pub &'a Summary);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.0;
        writeln!(f, "Number of elements: {}", summary.count)?;
        writeln!(f, "Mean:   {:.2}", summary.mean)?;
        writeln!(f, "Median: {:.2}", summary.median)?;
        writeln!(f, "Mode(s): {}", summary.modes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(data: &[i32]) -> String {
        Report(&Summary::from_values(data).unwrap()).to_string()
    }

    #[test]
    fn test_report_constant() {
        assert_eq!(
            render(&[3, 3, 3, 3]),
            "Number of elements: 4\nMean:   3.00\nMedian: 3.00\nMode(s): 3 (frequency: 4)\n"
        );
    }

    #[test]
    fn test_report_full_tie() {
        assert_eq!(
            render(&[10, 20]),
            "Number of elements: 2\nMean:   15.00\nMedian: 15.00\nMode(s): 10, 20 (frequency: 1)\n"
        );
    }

    #[test]
    fn test_report_single() {
        assert_eq!(
            render(&[7]),
            "Number of elements: 1\nMean:   7.00\nMedian: 7.00\nMode(s): 7 (frequency: 1)\n"
        );
    }

    #[test]
    fn test_report_negative_fraction() {
        let out = render(&[-1, -2]);
        assert!(out.contains("Mean:   -1.50\n"), "{out}");
        assert!(out.contains("Median: -1.50\n"), "{out}");
    }
}
