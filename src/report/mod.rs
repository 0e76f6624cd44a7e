//! Test-reporting contexts
//!
//! Helpers never panic or return failures directly. They hand each [`Failure`] to a
//! [`Report`] implementation, which decides how the failure affects the running test:
//! - [`TestContext`] collects failures and fails the test once it is finished
//! - [`Recorder`] only collects them, for inspecting what a helper reported

pub mod recorder;
pub mod test_context;

pub use recorder::Recorder;
pub use test_context::TestContext;

use crate::error::Failure;

/// Receives assertion failures
pub trait Report {
    /// Records a failure and lets the test continue
    fn error(&mut self, failure: Failure);

    /// Records a failure and aborts the current test
    fn fatal(&mut self, failure: Failure) -> !;
}
