//! Text datasets of named syndrome decoding cases.
//!
//! ```text
//! ### TEST CASE: small ###
//! 3 6
//! 1 0 0 1 1 0
//! 0 1 0 1 0 1
//! 0 0 1 0 1 1
//! 1 0 1
//! 2
//! ### END ###
//! ```
//!
//! Each case is a header, a `rows cols` line, `rows` matrix lines, the syndrome
//! line (left out when `rows` is 0) and the weight. Blank lines are skipped and
//! reading stops at the first header containing `END`. Entries only have to be
//! integers here; [`TestCase::instance`] checks them per case.

use crate::isd::{InstanceError, SyndromeInstance};
use std::fmt::Write as _;
use std::path::Path;

pub const END_MARKER: &str = "### END ###";

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: unexpected end of input, expected {expected}")]
    UnexpectedEof { line: usize, expected: &'static str },
    #[error("line {line}: expected a `### <name> ###` header")]
    MalformedHeader { line: usize },
    #[error("line {line}: expected {expected}, got `{got}`")]
    ParseInt { line: usize, expected: &'static str, got: String },
}

/// One case as written in the file, before validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestCase {
    pub name: String,
    pub cols: usize,
    pub rows: Vec<Vec<i64>>,
    pub syndrome: Vec<i64>,
    pub weight: i64,
}

impl TestCase {
    pub fn instance(&self) -> Result<SyndromeInstance, InstanceError> {
        SyndromeInstance::from_raw(self.cols, &self.rows, &self.syndrome, self.weight)
    }
}

struct Lines<'a> {
    inner: std::iter::Enumerate<std::str::Lines<'a>>,
    last: usize,
}

impl<'a> Lines<'a> {
    fn new(text: &'a str) -> Self {
        Self { inner: text.lines().enumerate(), last: 0 }
    }

    /// Next non-blank line with its 1-based number.
    fn next_line(&mut self) -> Option<(usize, &'a str)> {
        for (i, line) in self.inner.by_ref() {
            self.last = i + 1;
            let line = line.trim();
            if !line.is_empty() {
                return Some((i + 1, line));
            }
        }
        None
    }

    fn expect_line(&mut self, expected: &'static str) -> Result<(usize, &'a str), DatasetError> {
        self.next_line()
            .ok_or(DatasetError::UnexpectedEof { line: self.last, expected })
    }
}

fn parse_tokens<T: std::str::FromStr>(
    line_no: usize,
    line: &str,
    expected: &'static str,
) -> Result<Vec<T>, DatasetError> {
    line.split_whitespace()
        .map(|tok| {
            tok.parse().map_err(|_| DatasetError::ParseInt {
                line: line_no,
                expected,
                got: tok.to_string(),
            })
        })
        .collect()
}

fn header_name(line: &str) -> Option<String> {
    let body = line.strip_prefix("###")?;
    let body = body.trim_end().strip_suffix("###").unwrap_or(body);
    let name = match body.split_once(':') {
        Some((_, name)) => name,
        None => body,
    };
    Some(name.trim().to_string())
}

pub fn parse_dataset(text: &str) -> Result<Vec<TestCase>, DatasetError> {
    let mut lines = Lines::new(text);
    let mut cases = Vec::new();

    while let Some((line_no, line)) = lines.next_line() {
        let name = header_name(line).ok_or(DatasetError::MalformedHeader { line: line_no })?;
        if line.contains("END") {
            break;
        }

        let (dim_no, dim_line) = lines.expect_line("`rows cols`")?;
        let dims: Vec<usize> = parse_tokens(dim_no, dim_line, "`rows cols`")?;
        let (row_count, cols) = match dims[..] {
            [r, c] => (r, c),
            _ => {
                return Err(DatasetError::ParseInt {
                    line: dim_no,
                    expected: "`rows cols`",
                    got: dim_line.to_string(),
                })
            }
        };

        // row_count is unchecked input; a short file ends in UnexpectedEof
        let mut rows = Vec::new();
        for _ in 0..row_count {
            let (no, l) = lines.expect_line("a matrix row")?;
            rows.push(parse_tokens(no, l, "integer matrix entries")?);
        }

        let syndrome = if row_count == 0 {
            Vec::new()
        } else {
            let (no, l) = lines.expect_line("the syndrome")?;
            parse_tokens(no, l, "integer syndrome entries")?
        };

        let (w_no, w_line) = lines.expect_line("the weight")?;
        let weight = w_line.parse().map_err(|_| DatasetError::ParseInt {
            line: w_no,
            expected: "an integer weight",
            got: w_line.to_string(),
        })?;

        cases.push(TestCase { name, cols, rows, syndrome, weight });
    }

    Ok(cases)
}

pub fn read_dataset(path: impl AsRef<Path>) -> Result<Vec<TestCase>, DatasetError> {
    let text = std::fs::read_to_string(path)?;
    parse_dataset(&text)
}

/// One case in dataset format, without the terminator.
pub fn format_case(name: &str, instance: &SyndromeInstance) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "### TEST CASE: {name} ###");
    let _ = writeln!(out, "{} {}", instance.redundancy(), instance.n());
    for row in instance.h().rows() {
        let _ = writeln!(out, "{}", row.to_bit_string(" "));
    }
    if instance.redundancy() > 0 {
        let _ = writeln!(out, "{}", instance.s().to_bit_string(" "));
    }
    let _ = writeln!(out, "{}", instance.w());
    out
}
