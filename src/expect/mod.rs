//! Assertions over error outcomes
//!
//! An [`ErrorCheck`] inspects an error and reports what it finds. Checks are built
//! with the `expected_*` functions, combined with [`expected_error_checks`] and run
//! with [`assert_error`] or [`assert_result`].
//!
//! # Example
//! ```
//! use testing_assert::prelude::*;
//! use std::io;
//!
//! fn open() -> Result<(), io::Error> {
//!     Err(io::Error::new(io::ErrorKind::NotFound, "config.toml is missing"))
//! }
//!
//! let mut t = TestContext::new("open");
//! let check = expected_error_checks(vec![
//!     expected_io_error_kind(io::ErrorKind::NotFound),
//!     expected_error_string_contains("config.toml"),
//! ]);
//!
//! assert_result(&mut t, Some(&check), &open());
//! t.finish();
//! ```

pub mod expect_contains;
pub mod expect_is;
pub mod expect_type;

pub use expect_contains::expected_error_string_contains;
pub use expect_is::{expected_error_is, expected_io_error_kind};
pub use expect_type::{expected_error_is_of_type, expected_error_variant};

use crate::{error::Failure, report::Report};
use std::error::Error;

/// A check run against an error
///
/// Checks report failures through the [`Report`] they are given and return nothing,
/// so several of them can run against the same error.
pub type ErrorCheck = Box<dyn Fn(&mut dyn Report, &(dyn Error + 'static))>;

/// Checks the error outcome of an operation
///
/// | `error` | `check` | result |
/// |---|---|---|
/// | `Some` | `Some` | `check` runs against the error |
/// | `Some` | `None` | [`Failure::UnexpectedError`] |
/// | `None` | `Some` | [`Failure::MissingError`] |
/// | `None` | `None` | nothing is reported |
pub fn assert_error(
    report: &mut dyn Report,
    check: Option<&ErrorCheck>,
    error: Option<&(dyn Error + 'static)>,
) {
    match (error, check) {
        (Some(error), Some(check)) => check(report, error),
        (Some(error), None) => report.error(Failure::UnexpectedError {
            kind: format!("{error:?}"),
            message: error.to_string(),
        }),
        (None, Some(_)) => report.error(Failure::MissingError),
        (None, None) => {}
    }
}

/// Same as [`assert_error`] for the error of a [`Result`]
pub fn assert_result<T, E>(report: &mut dyn Report, check: Option<&ErrorCheck>, result: &Result<T, E>)
where
    E: Error + 'static,
{
    let error = result
        .as_ref()
        .err()
        .map(|error| -> &(dyn Error + 'static) { error });
    assert_error(report, check, error);
}

/// Combines checks into one that runs all of them in order
///
/// Every check runs even if an earlier one reported a failure.
pub fn expected_error_checks(checks: impl IntoIterator<Item = ErrorCheck>) -> ErrorCheck {
    let checks: Vec<_> = checks.into_iter().collect();

    Box::new(
        move |report: &mut dyn Report, error: &(dyn Error + 'static)| {
            for check in &checks {
                check(&mut *report, error);
            }
        },
    )
}

/// Renders an error as `Debug(Display)`
pub(crate) fn describe(error: &dyn Error) -> String {
    format!("{error:?}({error})")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        report::{Recorder, TestContext},
        test_utils::{Inner, Outer, Unrelated},
    };
    use std::{cell::Cell, rc::Rc};

    fn counting_check(calls: &Rc<Cell<usize>>) -> ErrorCheck {
        let calls = Rc::clone(calls);
        Box::new(move |_: &mut dyn Report, _: &(dyn Error + 'static)| {
            calls.set(calls.get() + 1);
        })
    }

    #[cfg_attr(feature = "tracing", tracing_test::traced_test)]
    #[test]
    fn error_and_check_runs_check_only() {
        let calls = Rc::default();
        let check = counting_check(&calls);
        let mut recorder = Recorder::default();

        assert_error(&mut recorder, Some(&check), Some(&Inner::Timeout));

        assert_eq!(calls.get(), 1);
        assert!(recorder.is_clean());
    }

    #[cfg_attr(feature = "tracing", tracing_test::traced_test)]
    #[test]
    fn error_without_check_is_unexpected() {
        let mut recorder = Recorder::default();

        assert_error(&mut recorder, None, Some(&Inner::Code(4)));

        assert_eq!(
            recorder.failures(),
            &[Failure::UnexpectedError {
                kind: "Code(4)".to_string(),
                message: "code 4".to_string(),
            }]
        );
    }

    #[cfg_attr(feature = "tracing", tracing_test::traced_test)]
    #[test]
    fn check_without_error_is_missing() {
        let calls = Rc::default();
        let check = counting_check(&calls);
        let mut recorder = Recorder::default();

        assert_error(&mut recorder, Some(&check), None);

        assert_eq!(calls.get(), 0);
        assert_eq!(recorder.failures(), &[Failure::MissingError]);
    }

    #[cfg_attr(feature = "tracing", tracing_test::traced_test)]
    #[test]
    fn nothing_expected_nothing_returned() {
        let mut recorder = Recorder::default();

        assert_error(&mut recorder, None, None);

        assert!(recorder.is_clean());
    }

    #[cfg_attr(feature = "tracing", tracing_test::traced_test)]
    #[test]
    fn result_ok_and_err() {
        let ok: Result<u8, Inner> = Ok(1);
        let err: Result<u8, Inner> = Err(Inner::NotFound);
        let check = expected_error_is([Inner::NotFound]);
        let mut recorder = Recorder::default();

        assert_result(&mut recorder, None, &ok);
        assert_result(&mut recorder, Some(&check), &err);
        assert!(recorder.is_clean());

        assert_result(&mut recorder, Some(&check), &ok);
        assert_eq!(recorder.failures(), &[Failure::MissingError]);
    }

    #[cfg_attr(feature = "tracing", tracing_test::traced_test)]
    #[test]
    fn combined_checks_report_every_failure() {
        let calls = Rc::default();
        let check = expected_error_checks(vec![
            expected_error_is_of_type::<Unrelated>(),
            counting_check(&calls),
            expected_error_string_contains("nope"),
            expected_error_is([Inner::Timeout]),
        ]);
        let mut recorder = Recorder::default();

        assert_error(&mut recorder, Some(&check), Some(&Outer::Wrapped(Inner::Timeout)));

        assert_eq!(calls.get(), 1);
        let failures = recorder.into_failures();
        assert_eq!(failures.len(), 2);
        assert!(matches!(failures[0], Failure::TypeMismatch { .. }));
        assert!(matches!(failures[1], Failure::MissingSubstring { .. }));
    }

    #[cfg_attr(feature = "tracing", tracing_test::traced_test)]
    #[test]
    fn empty_combination_accepts_any_error() {
        let check = expected_error_checks(Vec::new());
        let mut recorder = Recorder::default();

        assert_error(&mut recorder, Some(&check), Some(&Unrelated));

        assert!(recorder.is_clean());
    }

    #[cfg_attr(feature = "tracing", tracing_test::traced_test)]
    #[test]
    #[should_panic(expected = "unexpected error returned")]
    fn unexpected_error_fails_test() {
        let mut t = TestContext::new("unexpected_error_fails_test");

        assert_error(&mut t, None, Some(&Unrelated));
    }

    #[test]
    fn describe_has_kind_and_message() {
        assert_eq!(describe(&Inner::NotFound), "NotFound(not found)");
    }
}
