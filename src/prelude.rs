//! All prelude

pub use crate::chain::{Aggregate, any_in_chain};
pub use crate::error::Failure;
pub use crate::expect::{
    ErrorCheck, assert_error, assert_result, expected_error_checks, expected_error_is,
    expected_error_is_of_type, expected_error_string_contains, expected_error_variant,
    expected_io_error_kind,
};
pub use crate::partial_map::{Properties, assert_partial_eq, assert_partial_eq_map};
pub use crate::report::{Recorder, Report, TestContext};
pub use crate::stream::{Close, read_and_close};
