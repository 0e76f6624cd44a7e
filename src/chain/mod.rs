//! Walking error chains
//!
//! An error links to its causes either through [`Error::source`] (one cause) or, for
//! [`Aggregate`], through [`Aggregate::causes`] (many causes). [`any_in_chain`] visits
//! every error reachable this way, depth first.

pub mod aggregate;

pub use aggregate::Aggregate;

use std::error::Error;

/// Maximum number of errors followed along one path of a chain
///
/// Chains deeper than this (including cyclic ones) are treated as not matching.
pub const MAX_CHAIN_DEPTH: usize = 1024;

/// How an error links to its causes
#[derive(Debug, Clone, Copy)]
pub enum Cause<'a> {
    /// Exactly one cause, from [`Error::source`]
    Single(&'a (dyn Error + 'static)),

    /// Several causes
    Many(&'a Aggregate),

    /// No cause
    Leaf,
}

impl<'a> Cause<'a> {
    /// Get causes of `error`
    #[must_use]
    pub fn of(error: &'a (dyn Error + 'static)) -> Self {
        if let Some(aggregate) = error.downcast_ref::<Aggregate>() {
            return Self::Many(aggregate);
        }

        error.source().map_or(Self::Leaf, Self::Single)
    }
}

/// Returns `true` if `check` holds for `error` or any error in its chain
///
/// Causes of an [`Aggregate`] are visited left to right, stopping at the first match.
///
/// # Example
/// ```
/// use testing_assert::chain::{Aggregate, any_in_chain};
/// use std::io;
///
/// let aggregate: Aggregate = [io::Error::other("a"), io::Error::from(io::ErrorKind::TimedOut)]
///     .into_iter()
///     .collect();
///
/// let timed_out = any_in_chain(Some(&aggregate), |error| {
///     error
///         .downcast_ref::<io::Error>()
///         .is_some_and(|error| error.kind() == io::ErrorKind::TimedOut)
/// });
///
/// assert!(timed_out);
/// assert!(!any_in_chain(None, |_| true));
/// ```
pub fn any_in_chain<F>(error: Option<&(dyn Error + 'static)>, mut check: F) -> bool
where
    F: FnMut(&(dyn Error + 'static)) -> bool,
{
    walk(error, &mut check, 0)
}

fn walk(
    error: Option<&(dyn Error + 'static)>,
    check: &mut dyn FnMut(&(dyn Error + 'static)) -> bool,
    depth: usize,
) -> bool {
    let Some(error) = error else {
        return false;
    };

    if depth >= MAX_CHAIN_DEPTH {
        #[cfg(feature = "tracing")]
        tracing::debug!(depth, "Error chain too deep, stop walking");

        return false;
    }

    if check(error) {
        #[cfg(feature = "tracing")]
        tracing::trace!(depth, %error, "Match in error chain");

        return true;
    }

    match Cause::of(error) {
        Cause::Single(source) => walk(Some(source), check, depth + 1),
        Cause::Many(aggregate) => aggregate
            .causes()
            .any(|cause| walk(Some(cause), check, depth + 1)),
        Cause::Leaf => false,
    }
}
