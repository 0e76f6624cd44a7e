//! Impl [`Report`] that only records

use super::Report;
use crate::error::Failure;

/// Records failures without failing the test
///
/// Useful to check what a helper reports. [`Report::fatal`] still unwinds, so
/// fatal paths are observed with [`std::panic::catch_unwind`].
///
/// # Example
/// ```
/// use testing_assert::prelude::*;
///
/// let mut recorder = Recorder::default();
/// assert_error(&mut recorder, Some(&expected_error_checks(vec![])), None);
///
/// assert_eq!(recorder.failures(), &[Failure::MissingError]);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Recorder {
    failures: Vec<Failure>,
}

impl Recorder {
    /// Get recorded failures
    #[inline]
    #[must_use]
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    /// Take recorded failures
    #[inline]
    #[must_use]
    pub fn into_failures(self) -> Vec<Failure> {
        self.failures
    }

    /// Returns `true` if nothing was recorded
    #[inline]
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

impl Report for Recorder {
    fn error(&mut self, failure: Failure) {
        #[cfg(feature = "tracing")]
        tracing::trace!(%failure, "Record failure");

        self.failures.push(failure);
    }

    #[allow(clippy::panic)]
    fn fatal(&mut self, failure: Failure) -> ! {
        #[cfg(feature = "tracing")]
        tracing::trace!(%failure, "Record fatal failure");

        let message = failure.to_string();
        self.failures.push(failure);

        panic!("fatal: {message}");
    }
}
