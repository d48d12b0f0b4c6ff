use std::fmt;

use crate::error::{AppError, AppResult};

/// Line counts for a single file that differs from the remote branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeSummary {
    pub additions: u64,
    pub deletions: u64,
    pub path: String,
}

impl ChangeSummary {
    /// Parses `git diff-index --numstat` output, one summary per non-blank line.
    pub fn parse_numstat(output: &str) -> AppResult<Vec<Self>> {
        output
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(Self::parse_line)
            .collect()
    }

    fn parse_line(line: &str) -> AppResult<Self> {
        let (additions, deletions, path) = split_fields(line)
            .ok_or_else(|| AppError::Parse(format!("expected three fields in '{line}'")))?;

        let path = path.trim_end_matches('\r');
        if path.is_empty() {
            return Err(AppError::Parse(format!("missing path in '{line}'")));
        }

        Ok(Self {
            additions: parse_count(additions, line)?,
            deletions: parse_count(deletions, line)?,
            path: path.to_string(),
        })
    }
}

impl fmt::Display for ChangeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{} -{} {}", self.additions, self.deletions, self.path)
    }
}

// git separates numstat fields with tabs; anything else falls back to whitespace
// so the path keeps whatever follows the second count.
fn split_fields(line: &str) -> Option<(&str, &str, &str)> {
    if line.contains('\t') {
        let mut fields = line.splitn(3, '\t');
        return Some((fields.next()?, fields.next()?, fields.next()?));
    }

    let rest = line.trim_start();
    let (additions, rest) = rest.split_once(char::is_whitespace)?;
    let rest = rest.trim_start();
    let (deletions, rest) = rest.split_once(char::is_whitespace)?;
    Some((additions, deletions, rest.trim_start()))
}

fn parse_count(field: &str, line: &str) -> AppResult<u64> {
    field
        .trim()
        .parse::<u64>()
        .map_err(|err| AppError::Parse(format!("invalid count '{field}' in '{line}': {err}")))
}
