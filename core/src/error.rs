use std::any::Any;
use thiserror::Error;

/// Returned by [`Maybe::try_unwrap`](crate::maybe::Maybe::try_unwrap) when
/// the container holds no value. [`Maybe::unwrap`](crate::maybe::Maybe::unwrap)
/// panics with this error's message instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("called `Maybe::unwrap()` on an `Absent` value")]
pub struct EmptyContainerError;

/// Returned by [`Outcome::try_unwrap`](crate::outcome::Outcome::try_unwrap)
/// on a `Failure`. Carries the stored error so it is not lost.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("called `Outcome::unwrap()` on a `Failure` value: {error:?}")]
pub struct UnwrapFailureError<E> {
    pub error: E,
}

impl<E> UnwrapFailureError<E> {
    /// Gives back the error that was stored in the `Failure`.
    pub fn into_inner(self) -> E {
        self.error
    }
}

/// Returned by [`Outcome::try_unwrap_err`](crate::outcome::Outcome::try_unwrap_err)
/// on a `Success`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("called `Outcome::unwrap_err()` on a `Success` value: {value:?}")]
pub struct UnwrapSuccessError<T> {
    pub value: T,
}

impl<T> UnwrapSuccessError<T> {
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Panic trapped by [`Outcome::from_panicking`](crate::outcome::Outcome::from_panicking).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("computation panicked: {message}")]
pub struct CaughtPanic {
    message: String,
}

impl CaughtPanic {
    /// Builds the error from a payload handed over by `catch_unwind`.
    ///
    /// `panic!` with a literal yields `&'static str`, with format arguments
    /// a `String`. Anything else (`panic_any`) has no readable message.
    pub(crate) fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => match payload.downcast::<&'static str>() {
                Ok(message) => message.to_string(),
                Err(_) => "non-string panic payload".into(),
            },
        };

        Self { message }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
