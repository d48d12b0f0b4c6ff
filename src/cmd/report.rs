use std::io::Write;

use crate::context::AppContext;
use crate::domain::report::ChangeReport;
use crate::error::AppResult;
use crate::workflow::report::build_change_report;

pub async fn run(ctx: &AppContext, out: &mut impl Write) -> AppResult<()> {
    let report = build_change_report(ctx).await?;
    print_report(&report, out)
}

/// Writes the report as a single line; a closed pipe surfaces as an error.
pub fn print_report(report: &ChangeReport, out: &mut impl Write) -> AppResult<()> {
    writeln!(out, "{report}")?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io;

    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::domain::branch::BranchName;
    use crate::domain::change::ChangeSummary;
    use crate::domain::user::User;
    use crate::error::AppError;

    fn report() -> ChangeReport {
        ChangeReport::new(
            User::new("Jane Doe", "jane@example.com").unwrap(),
            BranchName("feature-x".to_string()),
            "master".to_string(),
            vec![ChangeSummary {
                additions: 3,
                deletions: 1,
                path: "README.md".to_string(),
            }],
            Utc.with_ymd_and_hms(2026, 10, 17, 9, 30, 0).unwrap(),
        )
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn prints_one_line() {
        let mut out = Vec::new();
        print_report(&report(), &mut out).unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.starts_with("ChangeReport(user=Jane Doe <jane@example.com>"));
        assert!(printed.contains("changes=[+3 -1 README.md]"));
        assert!(printed.ends_with(")\n"));
        assert_eq!(printed.lines().count(), 1);
    }

    #[test]
    fn closed_stdout_is_an_io_error() {
        let err = print_report(&report(), &mut ClosedPipe).unwrap_err();
        assert!(
            matches!(err, AppError::Io(ref io_err) if io_err.kind() == io::ErrorKind::BrokenPipe)
        );
    }
}
