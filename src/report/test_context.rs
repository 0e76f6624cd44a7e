//! Impl [`Report`] for regular `#[test]` functions

use super::Report;
use crate::error::Failure;

/// Reporting context of a single test
///
/// Non-fatal failures are collected while the test runs. [`TestContext::finish`]
/// (or dropping the context) panics with every collected failure, so one test run
/// shows all of them instead of only the first.
///
/// Failures recorded after a fatal failure (for example a stream closed while the
/// test unwinds) stay in [`TestContext::failures`] and are written to stderr when
/// the context is dropped.
///
/// # Example
/// ```should_panic
/// use testing_assert::prelude::*;
///
/// let mut t = TestContext::new("parse_config");
///
/// let err = std::io::Error::other("boom");
/// assert_error(&mut t, None, Some(&err));
///
/// t.finish();
/// ```
#[derive(Debug)]
pub struct TestContext {
    name: String,
    failures: Vec<Failure>,
    /// Count of failures already part of a panic message
    reported: usize,
}

impl TestContext {
    /// Create new [`TestContext`] for the test `name`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            failures: Vec::new(),
            reported: 0,
        }
    }

    /// Get test name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get failures recorded so far
    #[inline]
    #[must_use]
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    /// Returns `true` if any failure was recorded
    #[inline]
    #[must_use]
    pub fn failed(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Ends the test
    ///
    /// # Panics
    /// If any failure was recorded
    #[allow(clippy::panic)]
    pub fn finish(mut self) {
        if self.failures.is_empty() {
            return;
        }

        let failures = std::mem::take(&mut self.failures);
        panic!("{}", render(&self.name, &failures));
    }
}

impl Report for TestContext {
    fn error(&mut self, failure: Failure) {
        #[cfg(feature = "tracing")]
        tracing::debug!(test = %self.name, %failure, "Assertion failed");

        self.failures.push(failure);
    }

    #[allow(clippy::panic)]
    fn fatal(&mut self, failure: Failure) -> ! {
        #[cfg(feature = "tracing")]
        tracing::debug!(test = %self.name, %failure, "Fatal assertion failure");

        self.failures.push(failure);
        self.reported = self.failures.len();

        panic!("{}", render(&self.name, &self.failures));
    }
}

impl Drop for TestContext {
    #[allow(clippy::panic)]
    fn drop(&mut self) {
        if self.reported > 0 || std::thread::panicking() {
            for failure in self.failures.iter().skip(self.reported) {
                eprintln!("test `{}` failed after abort: {failure}", self.name);
            }

            return;
        }

        if self.failures.is_empty() {
            return;
        }

        let failures = std::mem::take(&mut self.failures);
        panic!("{}", render(&self.name, &failures));
    }
}

fn render(name: &str, failures: &[Failure]) -> String {
    let list = failures
        .iter()
        .enumerate()
        .map(|(index, failure)| format!("[{}] {failure}", index + 1))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "test `{name}` failed with {} failure(s):\n\n{list}",
        failures.len()
    )
}
