use std::ffi::OsString;

use clap::Parser;
use tracing::{debug, warn};

use crate::count::{is_plain_count, parse_count};
use crate::RandError;

#[derive(Parser, Debug)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// Number of values to print
    n: OsString,
}

/// Parse the full argument vector (program name first) into a value count.
///
/// Anything other than exactly one argument after the program name is a
/// usage error. The argument itself is parsed leniently and never rejected.
pub fn parse_args<I, T>(args: I) -> Result<usize, RandError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let program = args
        .first()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());

    let [name, value] = args.as_slice() else {
        debug!(arguments = args.len().saturating_sub(1), "wrong argument count");
        return Err(RandError::InvalidArgumentCount { program });
    };

    // After `--` clap takes the count verbatim, even `--` or `-4`
    let forwarded = [name.clone(), OsString::from("--"), value.clone()];
    let parsed = Args::try_parse_from(forwarded).map_err(|err| {
        debug!(kind = ?err.kind(), "rejected arguments");
        RandError::InvalidArgumentCount {
            program: program.clone(),
        }
    })?;

    let text = parsed.n.to_string_lossy();
    let count = parse_count(&text);
    if !is_plain_count(&text) {
        warn!(argument = %text, count, "count is not a plain integer, using best-effort value");
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usage_program(result: Result<usize, RandError>) -> String {
        match result {
            Err(RandError::InvalidArgumentCount { program }) => program,
            other => panic!("expected usage error, got {:?}", other),
        }
    }

    #[test]
    fn test_single_argument() {
        assert_eq!(parse_args(["rand-fixed", "3"]).unwrap(), 3);
        assert_eq!(parse_args(["rand-fixed", "0"]).unwrap(), 0);
    }

    #[test]
    fn test_lenient_argument() {
        assert_eq!(parse_args(["rand-fixed", "abc"]).unwrap(), 0);
        assert_eq!(parse_args(["rand-fixed", "12abc"]).unwrap(), 12);
        assert_eq!(parse_args(["rand-fixed", "-4"]).unwrap(), 0);
        assert_eq!(parse_args(["rand-fixed", ""]).unwrap(), 0);
    }

    #[test]
    fn test_missing_argument() {
        assert_eq!(usage_program(parse_args(["./rand-fixed"])), "./rand-fixed");
    }

    #[test]
    fn test_too_many_arguments() {
        assert_eq!(
            usage_program(parse_args(["/usr/bin/rand-general", "1", "2"])),
            "/usr/bin/rand-general"
        );
        assert_eq!(usage_program(parse_args(["rand-fixed", "1", "2", "3"])), "rand-fixed");
    }

    #[test]
    fn test_double_dash_counts_as_an_argument() {
        assert_eq!(usage_program(parse_args(["p", "--", "5"])), "p");
        assert_eq!(parse_args(["p", "--"]).unwrap(), 0);
        assert_eq!(parse_args(["p", "-"]).unwrap(), 0);
        assert_eq!(parse_args(["p", "--help"]).unwrap(), 0);
    }

    #[test]
    fn test_empty_argv_uses_package_name() {
        let empty: [&str; 0] = [];
        assert_eq!(usage_program(parse_args(empty)), "randfloats");
    }
}
