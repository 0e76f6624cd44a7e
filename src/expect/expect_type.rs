//! Checks for kinds of errors in a chain

use super::{ErrorCheck, describe};
use crate::{chain::any_in_chain, error::Failure, report::Report};
use std::{any::type_name, error::Error, mem::discriminant};

/// Expects an error of type `E` somewhere in the chain
///
/// # Example
/// ```
/// use testing_assert::prelude::*;
///
/// let mut t = TestContext::new("parse");
/// let error = "x".parse::<u8>().unwrap_err();
///
/// assert_error(&mut t, Some(&expected_error_is_of_type::<std::num::ParseIntError>()), Some(&error));
/// t.finish();
/// ```
pub fn expected_error_is_of_type<E>() -> ErrorCheck
where
    E: Error + 'static,
{
    Box::new(
        |report: &mut dyn Report, error: &(dyn Error + 'static)| {
            if !any_in_chain(Some(error), |member| member.is::<E>()) {
                report.error(Failure::TypeMismatch {
                    expected: type_name::<E>().to_string(),
                    actual: describe(error),
                });
            }
        },
    )
}

/// Expects an error of the same enum variant as `expected` somewhere in the chain
///
/// Only the variant of `expected` is compared, never its fields. For a type that is
/// not an enum this is the same as [`expected_error_is_of_type`].
pub fn expected_error_variant<E>(expected: E) -> ErrorCheck
where
    E: Error + 'static,
{
    let variant = discriminant(&expected);
    let name = format!("{}::{}", type_name::<E>(), variant_name(&expected));

    Box::new(
        move |report: &mut dyn Report, error: &(dyn Error + 'static)| {
            let found = any_in_chain(Some(error), |member| {
                member
                    .downcast_ref::<E>()
                    .is_some_and(|member| discriminant(member) == variant)
            });

            if !found {
                report.error(Failure::TypeMismatch {
                    expected: name.clone(),
                    actual: describe(error),
                });
            }
        },
    )
}

/// Name of the variant from the `Debug` rendering, `Code(7)` -> `Code`
fn variant_name(value: &impl std::fmt::Debug) -> String {
    let debug = format!("{value:?}");
    debug
        .split(|c: char| c == '(' || c == '{' || c.is_whitespace())
        .next()
        .unwrap_or_default()
        .to_string()
}
