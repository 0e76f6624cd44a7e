//! Checks for specific errors in a chain

use super::{ErrorCheck, describe};
use crate::{chain::any_in_chain, error::Failure, report::Report};
use std::{error::Error, io};

/// Expects every error of `expected` somewhere in the chain
///
/// A chain member matches when it is of type `E` and equal to the expected value.
/// Each expected error is checked on its own and reported with
/// [`Failure::NotInChain`] when missing.
///
/// # Example
/// ```
/// use testing_assert::prelude::*;
/// use thiserror::Error;
///
/// #[derive(Debug, Error, PartialEq)]
/// enum StoreError {
///     #[error("key not found")]
///     NotFound,
/// }
///
/// #[derive(Debug, Error)]
/// #[error("lookup failed")]
/// struct LookupError(#[from] StoreError);
///
/// let mut t = TestContext::new("lookup");
/// let check = expected_error_is([StoreError::NotFound]);
///
/// assert_error(&mut t, Some(&check), Some(&LookupError(StoreError::NotFound)));
/// t.finish();
/// ```
pub fn expected_error_is<E>(expected: impl IntoIterator<Item = E>) -> ErrorCheck
where
    E: Error + PartialEq + 'static,
{
    let expected: Vec<E> = expected.into_iter().collect();

    Box::new(
        move |report: &mut dyn Report, error: &(dyn Error + 'static)| {
            for expected in &expected {
                let found = any_in_chain(Some(error), |member| {
                    member.downcast_ref::<E>() == Some(expected)
                });

                if !found {
                    report.error(Failure::NotInChain {
                        expected: describe(expected),
                        actual: describe(error),
                    });
                }
            }
        },
    )
}

/// Expects an [`io::Error`] of `kind` somewhere in the chain
///
/// [`io::Error`] has no equality, so sentinel I/O errors are matched by kind.
pub fn expected_io_error_kind(kind: io::ErrorKind) -> ErrorCheck {
    Box::new(
        move |report: &mut dyn Report, error: &(dyn Error + 'static)| {
            let found = any_in_chain(Some(error), |member| {
                member
                    .downcast_ref::<io::Error>()
                    .is_some_and(|member| member.kind() == kind)
            });

            if !found {
                report.error(Failure::NotInChain {
                    expected: format!("io::Error({kind:?})"),
                    actual: describe(error),
                });
            }
        },
    )
}
