//! Right-aligned printing of 2-D numeric arrays.
//!
//! Every element is rendered with one [`NumFormat`] and padded to a common
//! width. Without an explicit width the longest rendered element sets it;
//! an explicit width narrower than an element lets that element overflow.

use unc_core::NumFormat;

use crate::error::{TableError, TableResult};

pub fn format_matrix(rows: &[Vec<f64>], fmt: &NumFormat, width: Option<usize>) -> Vec<String> {
    let rendered: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(|&x| fmt.format(x)).collect())
        .collect();

    let width = width.unwrap_or_else(|| {
        rendered
            .iter()
            .flatten()
            .map(|s| s.chars().count())
            .max()
            .unwrap_or(0)
    });

    rendered
        .iter()
        .map(|row| {
            row.iter()
                .map(|s| format!("{:>width$}", s))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

pub fn print_matrix(rows: &[Vec<f64>], fmt: &NumFormat, width: Option<usize>) {
    for line in format_matrix(rows, fmt, width) {
        println!("{}", line);
    }
}

/// Parse rows of numbers separated by whitespace and/or commas. Blank lines
/// and lines starting with `#` are skipped. Rows may differ in length.
pub fn parse_matrix(text: &str) -> TableResult<Vec<Vec<f64>>> {
    let mut rows = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let row = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|tok| !tok.is_empty())
            .map(|tok| {
                tok.parse::<f64>().map_err(|_| TableError::Parse {
                    line: idx + 1,
                    token: tok.to_string(),
                })
            })
            .collect::<TableResult<Vec<f64>>>()?;
        rows.push(row);
    }
    tracing::debug!(rows = rows.len(), "parsed matrix");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Vec<f64>> {
        vec![
            vec![0.0, 1.0, 2.0],
            vec![1.0, 0.002, 3.0],
            vec![2.0, 3.0, 0.04],
            vec![3e-1, 4.0, 5000.0],
        ]
    }

    #[test]
    fn general_format_uses_longest_element() {
        let lines = format_matrix(&sample(), &"g".parse().unwrap(), None);
        assert_eq!(
            lines,
            vec![
                "    0     1     2",
                "    1 0.002     3",
                "    2     3  0.04",
                "  0.3     4  5000",
            ]
        );
    }

    #[test]
    fn exponent_format() {
        let lines = format_matrix(&sample(), &"e".parse().unwrap(), None);
        assert_eq!(lines[0], "0.000000e+00 1.000000e+00 2.000000e+00");
        assert_eq!(lines[3], "3.000000e-01 4.000000e+00 5.000000e+03");
    }

    #[test]
    fn fixed_format_with_width() {
        let lines = format_matrix(&sample(), &"f".parse().unwrap(), Some(12));
        assert_eq!(lines[1], "    1.000000     0.002000     3.000000");
        assert_eq!(lines[3], "    0.300000     4.000000  5000.000000");
    }

    #[test]
    fn zero_width_does_not_pad() {
        let lines = format_matrix(&sample(), &".2f".parse().unwrap(), Some(0));
        assert_eq!(lines[1], "1.00 0.00 3.00");
        assert_eq!(lines[3], "0.30 4.00 5000.00");
    }

    #[test]
    fn empty_matrix() {
        assert!(format_matrix(&[], &NumFormat::default(), None).is_empty());
    }

    #[test]
    fn parse_mixed_separators() {
        let text = "# header\n1, 2 3\n\n  4.5\t-6e2 \n";
        let rows = parse_matrix(text).unwrap();
        assert_eq!(rows, vec![vec![1.0, 2.0, 3.0], vec![4.5, -600.0]]);
    }

    #[test]
    fn parse_reports_bad_token() {
        let err = parse_matrix("1 2\n3 x\n").unwrap_err();
        assert_eq!(
            err,
            TableError::Parse {
                line: 2,
                token: "x".into()
            }
        );
    }
}
