use alloc::string::String;
use core::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// An error describing an attempt to unwrap the wrong variant of a
/// container.
///
/// This is the only error the crate defines. It surfaces through the panics
/// raised by [`Outcome::unwrap_success`](crate::Outcome::unwrap_success) and
/// its three siblings; its [`Display`] output is the panic message.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnwrapMismatch {
    message: String,
}

impl UnwrapMismatch {
    /// Creates a mismatch error with a caller-supplied message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub(crate) fn expected_success() -> Self {
        Self::new("Attempted to unwrap Success(t) but got Failure(f) instead.")
    }

    pub(crate) fn expected_failure() -> Self {
        Self::new("Attempted to unwrap Failure(f) but got Success(t) instead.")
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for UnwrapMismatch {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.message)
    }
}

impl Error for UnwrapMismatch {}
