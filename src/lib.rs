//! `testing-assert` - Assertions for error chains and nested mappings in Rust tests
//!
//! Provides helpers for:
//! - Checking the error outcome of an operation, including errors deep in a cause chain
//! - Reading a stream to the end while making sure it gets closed
//! - Comparing nested mappings partially, ignoring keys the test does not care about
//!
//! Helpers never panic on a mismatch. They report every [`Failure`] to a [`Report`]
//! context, so one assertion can show several problems at once.
//!
//! ## Usage
//! Add to `Cargo.toml`:
//! ```toml
//! [dev-dependencies]
//! testing-assert = "0.1"
//! ```
//!
//! ## Examples
//!
//! ### Errors
//! ```
//! use testing_assert::prelude::*;
//! use thiserror::Error;
//!
//! #[derive(Debug, Error, PartialEq)]
//! #[error("connection refused")]
//! struct Refused;
//!
//! #[derive(Debug, Error)]
//! #[error("request failed")]
//! struct RequestError(#[from] Refused);
//!
//! let mut t = TestContext::new("request");
//! let check = expected_error_checks(vec![
//!     expected_error_is([Refused]),
//!     expected_error_string_contains("request"),
//! ]);
//!
//! let result: Result<(), RequestError> = Err(Refused.into());
//! assert_result(&mut t, Some(&check), &result);
//! t.finish();
//! ```
//!
//! ### Mappings
//! ```
//! use testing_assert::prelude::*;
//!
//! let subject: Properties = serde_yml::from_str("a:\n  x: 1\n  y: 2\nb: 2").unwrap();
//! let expected: Properties = serde_yml::from_str("a:\n  x: 1").unwrap();
//!
//! let mut recorder = Recorder::default();
//! assert_partial_eq_map(&mut recorder, &subject, &expected);
//! assert!(recorder.is_clean());
//! ```
//!
//! ## Logging
//! With the `tracing` feature every reported failure is logged at `debug` level.
//!
//! [`Failure`]: crate::error::Failure
//! [`Report`]: crate::report::Report

//#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::cargo)]
#![warn(clippy::nursery)]
#![warn(clippy::perf)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::panic)]
#![warn(clippy::needless_pass_by_value)]
#![warn(clippy::unreadable_literal)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::as_conversions)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod chain;
pub mod error;
pub mod expect;
pub mod partial_map;
pub mod prelude;
pub mod report;
pub mod stream;

#[cfg(test)]
pub(crate) mod test_utils;
