use super::ErrorCheck;
use crate::{error::Failure, report::Report};
use std::error::Error;

/// Expects the rendered error message to contain `expected`
///
/// Only the top-level message is inspected.
pub fn expected_error_string_contains(expected: impl Into<String>) -> ErrorCheck {
    let expected = expected.into();

    Box::new(
        move |report: &mut dyn Report, error: &(dyn Error + 'static)| {
            let message = error.to_string();
            if !message.contains(&expected) {
                report.error(Failure::MissingSubstring {
                    expected: expected.clone(),
                    actual: message,
                });
            }
        },
    )
}
