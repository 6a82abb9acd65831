//! Explicit absence and failure containers.
//!
//! [`Maybe`] says "there may be no value", [`Outcome`] says "this may have
//! failed, and here is why". Both are plain enums: immutable once built,
//! taken apart with their methods or with [`match_on`].

pub mod dispatch;
pub mod error;
pub mod maybe;
pub mod nullable;
pub mod outcome;

pub use dispatch::{match_on, Match, MaybeArms, OutcomeArms};
pub use error::{CaughtPanic, EmptyContainerError, UnwrapFailureError, UnwrapSuccessError};
pub use maybe::Maybe;
pub use nullable::Nullable;
pub use outcome::Outcome;
