use crate::{
    error::UnwrapMismatch,
    inspect::{Inspect, InspectOptions, Style},
};
use alloc::{format, string::String, vec, vec::Vec};
use core::{iter::FusedIterator, option};
use serde::{Deserialize, Serialize};

/// A two-variant container holding either a success payload or a failure
/// payload, never both.
///
/// Containers are immutable: every combinator consumes `self` and returns
/// either the container unchanged or a brand-new one.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Outcome<T, F> {
    /// A successful computation and its payload.
    Success(T),
    /// A failed computation and its payload.
    Failure(F),
}

impl<T, F> Outcome<T, F> {
    /// Returns `true` if the container is the success variant.
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the container is the failure variant.
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns the success payload.
    ///
    /// # Panics
    ///
    /// Panics with an [`UnwrapMismatch`](crate::UnwrapMismatch) message if
    /// the container is the failure variant.
    pub fn unwrap_success(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => panic!("{}", UnwrapMismatch::expected_success()),
        }
    }

    /// Returns the success payload, panicking with `message` on the failure
    /// variant.
    ///
    /// # Panics
    ///
    /// Panics with `message`, verbatim, if the container is the failure
    /// variant.
    pub fn expect_success(self, message: &str) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => panic!("{}", UnwrapMismatch::new(message)),
        }
    }

    /// Returns the failure payload.
    ///
    /// # Panics
    ///
    /// Panics with an [`UnwrapMismatch`](crate::UnwrapMismatch) message if
    /// the container is the success variant.
    pub fn unwrap_failure(self) -> F {
        match self {
            Self::Success(_) => panic!("{}", UnwrapMismatch::expected_failure()),
            Self::Failure(failure) => failure,
        }
    }

    /// Returns the failure payload, panicking with `message` on the success
    /// variant.
    ///
    /// # Panics
    ///
    /// Panics with `message`, verbatim, if the container is the success
    /// variant.
    pub fn expect_failure(self, message: &str) -> F {
        match self {
            Self::Success(_) => panic!("{}", UnwrapMismatch::new(message)),
            Self::Failure(failure) => failure,
        }
    }

    /// Applies a function to the success payload, passing the failure
    /// variant through unchanged. The function is never invoked on the
    /// failure variant.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, F> {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Applies a function to the failure payload, passing the success
    /// variant through unchanged. The function is never invoked on the
    /// success variant.
    pub fn map_failure<G>(self, f: impl FnOnce(F) -> G) -> Outcome<T, G> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(failure) => Outcome::Failure(f(failure)),
        }
    }

    /// Returns `other` if the container is the success variant, or the
    /// failure container unchanged otherwise.
    ///
    /// `other` is evaluated eagerly at the call site; use
    /// [`and_then`](Self::and_then) to defer it.
    pub fn and<U>(self, other: Outcome<U, F>) -> Outcome<U, F> {
        match self {
            Self::Success(_) => other,
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Returns the success container unchanged, or `other` if the container
    /// is the failure variant.
    ///
    /// `other` is evaluated eagerly at the call site; use
    /// [`or_else`](Self::or_else) to defer it.
    pub fn or<G>(self, other: Outcome<T, G>) -> Outcome<T, G> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(_) => other,
        }
    }

    /// Invokes a function on the success payload and returns its container
    /// directly, passing the failure variant through unchanged.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U, F>) -> Outcome<U, F> {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Invokes a function on the failure payload and returns its container
    /// directly, passing the success variant through unchanged.
    pub fn or_else<G>(self, f: impl FnOnce(F) -> Outcome<T, G>) -> Outcome<T, G> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(failure) => f(failure),
        }
    }

    /// Returns the success payload, or `default` on the failure variant.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the success payload, or the result of invoking `f` on the
    /// failure payload.
    pub fn unwrap_or_else(self, f: impl FnOnce(F) -> T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(failure) => f(failure),
        }
    }

    /// Converts the container into a vector holding the success payload, or
    /// an empty one on the failure variant.
    pub fn to_vec(self) -> Vec<T> {
        match self {
            Self::Success(value) => vec![value],
            Self::Failure(_) => Vec::new(),
        }
    }

    /// Dispatches to exactly one of two handlers with the active payload
    /// and returns its result.
    pub fn dispatch<R>(self, success: impl FnOnce(T) -> R, failure: impl FnOnce(F) -> R) -> R {
        match self {
            Self::Success(value) => success(value),
            Self::Failure(payload) => failure(payload),
        }
    }

    /// Returns an iterator yielding the success payload by reference, or
    /// nothing on the failure variant.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: match self {
                Self::Success(value) => Some(value),
                Self::Failure(_) => None,
            }
            .into_iter(),
        }
    }
}

impl<T: Inspect, F: Inspect> Outcome<T, F> {
    /// Renders the whole container and passes the string to a sink.
    pub fn debug(&self, sink: impl FnOnce(&str), options: &InspectOptions) {
        sink(&self.inspect(options.budget(), options));
    }

    /// Renders only the success payload and passes the string to a sink,
    /// returning the container unchanged for use inline in a chain.
    pub fn debug_success(self, sink: impl FnOnce(&str), options: &InspectOptions) -> Self {
        if let Self::Success(value) = &self {
            sink(&value.inspect(options.budget(), options));
        }

        self
    }

    /// Renders only the failure payload and passes the string to a sink,
    /// returning the container unchanged for use inline in a chain.
    pub fn debug_failure(self, sink: impl FnOnce(&str), options: &InspectOptions) -> Self {
        if let Self::Failure(failure) = &self {
            sink(&failure.inspect(options.budget(), options));
        }

        self
    }
}

impl<T: Inspect, F: Inspect> Inspect for Outcome<T, F> {
    fn inspect(&self, depth: i32, options: &InspectOptions) -> String {
        let tag = if self.is_success() { "Success" } else { "Failure" };

        if depth < 0 {
            return options.stylize(&format!("[{tag}]"), Style::Tag);
        }

        let nested = options.descend();
        let payload = match self {
            Self::Success(value) => value.inspect(nested.budget(), &nested),
            Self::Failure(failure) => failure.inspect(nested.budget(), &nested),
        };

        format!("{}( {payload} )", options.stylize(tag, Style::Tag))
    }
}

impl<T, F> From<Result<T, F>> for Outcome<T, F> {
    fn from(result: Result<T, F>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, F> From<Outcome<T, F>> for Result<T, F> {
    fn from(outcome: Outcome<T, F>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(failure) => Err(failure),
        }
    }
}

impl<'a, T, F> IntoIterator for &'a Outcome<T, F> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the success payload of an [`Outcome`].
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    inner: option::IntoIter<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
