//! Error with several causes

use std::error::Error;
use thiserror::Error;

type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// An error made of several underlying errors
///
/// [`Aggregate`] has no single [`Error::source`]. Its causes are reached with
/// [`Aggregate::causes`], which [`any_in_chain`] walks left to right.
///
/// The rendered message is the messages of all causes joined by a newline.
///
/// # Example
/// ```
/// use testing_assert::chain::Aggregate;
///
/// let aggregate: Aggregate = [
///     std::io::Error::other("first"),
///     std::io::Error::other("second"),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(aggregate.len(), 2);
/// assert_eq!(aggregate.to_string(), "first\nsecond");
/// ```
///
/// [`any_in_chain`]: crate::chain::any_in_chain
#[derive(Debug, Default, Error)]
#[error("{}", join(.errors))]
pub struct Aggregate {
    errors: Vec<BoxError>,
}

impl Aggregate {
    /// Create new empty [`Aggregate`]
    #[must_use]
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Add cause
    pub fn push(&mut self, error: impl Into<BoxError>) {
        self.errors.push(error.into());
    }

    /// Get causes in insertion order
    pub fn causes(&self) -> impl Iterator<Item = &(dyn Error + 'static)> {
        self.errors
            .iter()
            .map(|error| -> &(dyn Error + 'static) { error.as_ref() })
    }

    /// Count causes
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns `true` if there are no causes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl<E> FromIterator<E> for Aggregate
where
    E: Into<BoxError>,
{
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().map(Into::into).collect(),
        }
    }
}

fn join(errors: &[BoxError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
