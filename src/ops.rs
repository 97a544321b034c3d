//! Free-function forms of the [`Outcome`] operations.
//!
//! Every instance operation is mirrored as a thin wrapper taking the
//! container as its first argument, for point-free composition pipelines
//! where operations are passed by reference rather than invoked as methods.

use crate::{Inspect, InspectOptions, Outcome};
use alloc::vec::Vec;

/// Returns `true` if the container is the success variant.
pub const fn is_success<T, F>(outcome: &Outcome<T, F>) -> bool {
    outcome.is_success()
}

/// Returns `true` if the container is the failure variant.
pub const fn is_failure<T, F>(outcome: &Outcome<T, F>) -> bool {
    outcome.is_failure()
}

/// Returns the success payload.
///
/// # Panics
///
/// Panics if the container is the failure variant.
pub fn unwrap_success<T, F>(outcome: Outcome<T, F>) -> T {
    outcome.unwrap_success()
}

/// Returns the success payload, panicking with `message` on the failure
/// variant.
///
/// # Panics
///
/// Panics with `message` if the container is the failure variant.
pub fn expect_success<T, F>(outcome: Outcome<T, F>, message: &str) -> T {
    outcome.expect_success(message)
}

/// Returns the failure payload.
///
/// # Panics
///
/// Panics if the container is the success variant.
pub fn unwrap_failure<T, F>(outcome: Outcome<T, F>) -> F {
    outcome.unwrap_failure()
}

/// Returns the failure payload, panicking with `message` on the success
/// variant.
///
/// # Panics
///
/// Panics with `message` if the container is the success variant.
pub fn expect_failure<T, F>(outcome: Outcome<T, F>, message: &str) -> F {
    outcome.expect_failure(message)
}

/// Applies a function to the success payload, passing the failure variant
/// through unchanged.
pub fn map<T, U, F>(outcome: Outcome<T, F>, f: impl FnOnce(T) -> U) -> Outcome<U, F> {
    outcome.map(f)
}

/// Applies a function to the failure payload, passing the success variant
/// through unchanged.
pub fn map_failure<T, F, G>(outcome: Outcome<T, F>, f: impl FnOnce(F) -> G) -> Outcome<T, G> {
    outcome.map_failure(f)
}

/// Returns `other` if the container is the success variant, or the failure
/// container unchanged otherwise.
pub fn and<T, U, F>(outcome: Outcome<T, F>, other: Outcome<U, F>) -> Outcome<U, F> {
    outcome.and(other)
}

/// Returns the success container unchanged, or `other` if the container is
/// the failure variant.
pub fn or<T, F, G>(outcome: Outcome<T, F>, other: Outcome<T, G>) -> Outcome<T, G> {
    outcome.or(other)
}

/// Invokes a function on the success payload and returns its container
/// directly, passing the failure variant through unchanged.
pub fn and_then<T, U, F>(
    outcome: Outcome<T, F>,
    f: impl FnOnce(T) -> Outcome<U, F>,
) -> Outcome<U, F> {
    outcome.and_then(f)
}

/// Invokes a function on the failure payload and returns its container
/// directly, passing the success variant through unchanged.
pub fn or_else<T, F, G>(
    outcome: Outcome<T, F>,
    f: impl FnOnce(F) -> Outcome<T, G>,
) -> Outcome<T, G> {
    outcome.or_else(f)
}

/// Returns the success payload, or `default` on the failure variant.
pub fn unwrap_or<T, F>(outcome: Outcome<T, F>, default: T) -> T {
    outcome.unwrap_or(default)
}

/// Returns the success payload, or the result of invoking `f` on the
/// failure payload.
pub fn unwrap_or_else<T, F>(outcome: Outcome<T, F>, f: impl FnOnce(F) -> T) -> T {
    outcome.unwrap_or_else(f)
}

/// Converts the container into a vector holding the success payload, or an
/// empty one on the failure variant.
pub fn to_vec<T, F>(outcome: Outcome<T, F>) -> Vec<T> {
    outcome.to_vec()
}

/// Dispatches to exactly one of two handlers with the active payload and
/// returns its result.
pub fn dispatch<T, F, R>(
    outcome: Outcome<T, F>,
    success: impl FnOnce(T) -> R,
    failure: impl FnOnce(F) -> R,
) -> R {
    outcome.dispatch(success, failure)
}

/// Renders the whole container and passes the string to a sink.
pub fn debug<T: Inspect, F: Inspect>(
    outcome: &Outcome<T, F>,
    sink: impl FnOnce(&str),
    options: &InspectOptions,
) {
    outcome.debug(sink, options);
}

/// Renders only the success payload and passes the string to a sink,
/// returning the container unchanged.
pub fn debug_success<T: Inspect, F: Inspect>(
    outcome: Outcome<T, F>,
    sink: impl FnOnce(&str),
    options: &InspectOptions,
) -> Outcome<T, F> {
    outcome.debug_success(sink, options)
}

/// Renders only the failure payload and passes the string to a sink,
/// returning the container unchanged.
pub fn debug_failure<T: Inspect, F: Inspect>(
    outcome: Outcome<T, F>,
    sink: impl FnOnce(&str),
    options: &InspectOptions,
) -> Outcome<T, F> {
    outcome.debug_failure(sink, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;
    use pretty_assertions::assert_eq;

    type Subject = Outcome<i32, &'static str>;

    #[test]
    fn forward_to_methods() {
        assert!(is_success(&Subject::Success(1)));
        assert!(is_failure(&Subject::Failure("e")));
        assert_eq!(unwrap_success(Subject::Success(1)), 1);
        assert_eq!(unwrap_failure(Subject::Failure("e")), "e");
        assert_eq!(map(Subject::Success(1), |value| value + 1), Outcome::Success(2));
        assert_eq!(
            map_failure(Subject::Failure("e"), str::len),
            Outcome::Failure(1)
        );
        assert_eq!(
            and(Subject::Failure("e"), Subject::Success(2)),
            Outcome::Failure("e")
        );
        assert_eq!(
            or(Subject::Failure("e"), Subject::Success(2)),
            Outcome::Success(2)
        );
        assert_eq!(
            and_then(Subject::Success(1), |value| Subject::Success(value + 1)),
            Outcome::Success(2)
        );
        assert_eq!(
            or_else(Subject::Failure("e"), |_| Subject::Success(0)),
            Outcome::Success(0)
        );
        assert_eq!(unwrap_or(Subject::Failure("e"), 0), 0);
        assert_eq!(unwrap_or_else(Subject::Failure("e"), |failure| failure.len() as i32), 1);
        assert_eq!(to_vec(Subject::Success(1)), [1]);
        assert_eq!(dispatch(Subject::Success(3), |value| value * 2, |_| -1), 6);
    }

    #[test]
    fn compose_point_free() {
        let outcome = and_then(
            map(Subject::Success(3), |value| value + 1),
            Subject::Success,
        );

        assert_eq!(unwrap_or(outcome, 0), 4);
    }

    #[test]
    fn forward_debug_operations() {
        let messages = RefCell::new(Vec::new());
        let options = InspectOptions::new();

        debug(&Subject::Success(3), |message| {
            messages.borrow_mut().push(message.to_owned());
        }, &options);

        assert_eq!(
            debug_success(Subject::Success(3), |message| {
                messages.borrow_mut().push(message.to_owned());
            }, &options),
            Outcome::Success(3)
        );
        assert_eq!(
            debug_failure(Subject::Failure("e"), |message| {
                messages.borrow_mut().push(message.to_owned());
            }, &options),
            Outcome::Failure("e")
        );
        assert_eq!(*messages.borrow(), ["Success( 3 )", "3", "\"e\""]);
    }
}
