//! Custom assertion macros for CLI and scenario tests.
//!
//! These macros provide descriptive failure messages to aid debugging.

/// Assert that output (stdout or stderr) contains expected pattern.
///
/// # Example
/// ```ignore
/// assert_output_contains!(result, "Menu OK");
/// ```
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $pattern:expr) => {
        assert!(
            $result.stdout.contains($pattern) || $result.stderr.contains($pattern),
            "Expected output to contain '{}'\n\
             stdout:\n{}\n\
             stderr:\n{}",
            $pattern,
            $result.stdout,
            $result.stderr
        );
    };
}

/// Assert that a command succeeded, showing its output otherwise.
#[macro_export]
macro_rules! assert_success {
    ($result:expr) => {
        assert!(
            $result.success,
            "Expected success, got exit code {}\n\
             stdout:\n{}\n\
             stderr:\n{}",
            $result.exit_code,
            $result.stdout,
            $result.stderr
        );
    };
}

/// Assert that stdout has a line equal to `expected` once trailing spaces are removed.
#[macro_export]
macro_rules! assert_line {
    ($result:expr, $expected:expr) => {
        assert!(
            $result.stdout.lines().any(|line| line.trim_end() == $expected),
            "Expected a line '{}' in stdout:\n{}",
            $expected,
            $result.stdout
        );
    };
}
