//! Partial equality of nested mappings
//!
//! Only the keys of the expected mapping are checked. Keys that exist only in the
//! subject are ignored, at every level of nesting.

use crate::{error::Failure, report::Report};
use serde::Serialize;
use serde_yml::{Mapping, Value};
use std::collections::HashMap;

/// String-keyed mapping of arbitrary values
pub type Properties = HashMap<String, Value>;

/// Checks that `subject` contains every entry of `expected`
///
/// For each expected key:
/// - missing from `subject`: [`Failure::MissingField`], then the next key is checked
/// - both values are mappings: compared the same way, recursively
/// - otherwise: [`Failure::NotEqual`] if the values differ
///
/// # Example
/// ```
/// use testing_assert::prelude::*;
///
/// let subject: Properties = serde_yml::from_str("id: 7\nuser:\n  name: ann\n  age: 31").unwrap();
/// let expected: Properties = serde_yml::from_str("user:\n  name: ann").unwrap();
///
/// let mut t = TestContext::new("user");
/// assert_partial_eq_map(&mut t, &subject, &expected);
/// t.finish();
/// ```
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(keys = expected.len())))]
pub fn assert_partial_eq_map(report: &mut dyn Report, subject: &Properties, expected: &Properties) {
    for (key, expected) in expected {
        compare_field(report, key.clone(), subject.get(key), expected);
    }
}

/// Same as [`assert_partial_eq_map`] for any serializable values
///
/// Both values are converted to [`Value`] first. A conversion error is fatal.
/// Values that are not mappings are compared for equality.
///
/// # Example
/// ```
/// use testing_assert::prelude::*;
/// use serde::Serialize;
/// use std::collections::BTreeMap;
///
/// #[derive(Serialize)]
/// struct Server {
///     host: String,
///     port: u16,
/// }
///
/// let server = Server { host: "localhost".to_string(), port: 8080 };
/// let expected = BTreeMap::from([("port", 8080)]);
///
/// let mut t = TestContext::new("server");
/// assert_partial_eq(&mut t, &server, &expected);
/// t.finish();
/// ```
pub fn assert_partial_eq<S, E>(report: &mut dyn Report, subject: &S, expected: &E)
where
    S: Serialize + ?Sized,
    E: Serialize + ?Sized,
{
    let subject = to_value(report, "subject", subject);
    let expected = to_value(report, "expected", expected);

    compare_field(report, String::new(), Some(&subject), &expected);
}

fn to_value<T: Serialize + ?Sized>(report: &mut dyn Report, side: &'static str, value: &T) -> Value {
    serde_yml::to_value(value).unwrap_or_else(|error| {
        report.fatal(Failure::Serialize {
            side,
            message: error.to_string(),
        })
    })
}

fn compare_field(report: &mut dyn Report, path: String, actual: Option<&Value>, expected: &Value) {
    let Some(actual) = actual else {
        #[cfg(feature = "tracing")]
        tracing::debug!(%path, "Missing field");

        report.error(Failure::MissingField { path });
        return;
    };

    if let (Value::Mapping(actual), Value::Mapping(expected)) = (actual, expected) {
        compare_mappings(report, &path, actual, expected);
        return;
    }

    if actual != expected {
        #[cfg(feature = "tracing")]
        tracing::debug!(%path, "Values are not equal");

        report.error(Failure::NotEqual {
            path,
            expected: render(expected),
            actual: render(actual),
        });
    }
}

fn compare_mappings(report: &mut dyn Report, prefix: &str, subject: &Mapping, expected: &Mapping) {
    for (key, expected) in expected.iter() {
        let path = match key.as_str() {
            Some(key) => join(prefix, key),
            None => join(prefix, &render(key)),
        };

        compare_field(report, path, subject.get(key), expected);
    }
}

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

fn render(value: &Value) -> String {
    serde_yml::to_string(value).map_or_else(
        |_| format!("{value:?}"),
        |yaml| yaml.trim_end().to_string(),
    )
}
