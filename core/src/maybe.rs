use crate::{dispatch::MaybeArms, error::EmptyContainerError, nullable::Nullable};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Optional value: either `Present` with exactly one `T`, or `Absent`.
///
/// Once built, a `Maybe` never changes state. Every method consumes or
/// borrows it and returns a new container.
///
/// ```rust
/// use fallible_core::maybe::Maybe;
///
/// let name = Maybe::present("Alice");
///
/// assert_eq!(name.map(|n| n.len()).unwrap_or(0), 5);
/// assert_eq!(Maybe::<&str>::absent().unwrap_or("default"), "default");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Maybe<T> {
    Present(T),
    Absent,
}

impl<T> Maybe<T> {
    pub fn present(value: T) -> Self {
        Maybe::Present(value)
    }

    pub fn absent() -> Self {
        Maybe::Absent
    }

    /// Builds `Maybe` from anything with a "no value" sentinel, see [`Nullable`].
    ///
    /// ```rust
    /// use fallible_core::maybe::Maybe;
    ///
    /// let email: Option<&str> = None;
    /// assert!(Maybe::from_nullable(email).is_absent());
    /// ```
    pub fn from_nullable<N>(value: N) -> Self
    where
        N: Nullable<Value = T>,
    {
        value.into_maybe()
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Maybe::Present(_))
    }

    pub fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Converts `&Maybe<T>` into `Maybe<&T>`.
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Present(value) => Maybe::Present(value),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics with [`EmptyContainerError`] on `Absent`. Use [`Maybe::try_unwrap`],
    /// [`Maybe::unwrap_or`] or [`Maybe::match_with`] to handle absence instead.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }

    /// Returns the contained value or `EmptyContainerError`.
    pub fn try_unwrap(self) -> Result<T, EmptyContainerError> {
        match self {
            Maybe::Present(value) => Ok(value),
            Maybe::Absent => Err(EmptyContainerError),
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => default,
        }
    }

    /// Returns the contained value, calling `supplier` only when `Absent`.
    pub fn unwrap_or_else<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => supplier(),
        }
    }

    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(T::default)
    }

    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Present(value) => Maybe::Present(f(value)),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Chains a computation that may itself produce nothing.
    ///
    /// ```rust
    /// use fallible_core::maybe::Maybe;
    ///
    /// let first = Maybe::present("Alice").flat_map(|n| Maybe::from_nullable(n.chars().next()));
    /// assert_eq!(first, Maybe::present('A'));
    /// ```
    pub fn flat_map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Maybe::Present(value) => f(value),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Keeps the value only if `predicate` holds for it.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Maybe::Present(value) if predicate(&value) => Maybe::Present(value),
            _ => Maybe::Absent,
        }
    }

    /// Pairs two values, `Absent` if either side is.
    pub fn zip<U>(self, other: Maybe<U>) -> Maybe<(T, U)> {
        match (self, other) {
            (Maybe::Present(a), Maybe::Present(b)) => Maybe::Present((a, b)),
            _ => Maybe::Absent,
        }
    }

    /// Exhaustive case analysis, calls exactly one of the arms.
    ///
    /// ```rust
    /// use fallible_core::{dispatch::MaybeArms, maybe::Maybe};
    ///
    /// let greeting = Maybe::present("Alice").match_with(MaybeArms {
    ///     present: |n| format!("Hello, {}!", n),
    ///     absent: || "No name".to_string(),
    /// });
    /// assert_eq!(greeting, "Hello, Alice!");
    /// ```
    pub fn match_with<R, P, A>(self, arms: MaybeArms<P, A>) -> R
    where
        P: FnOnce(T) -> R,
        A: FnOnce() -> R,
    {
        match self {
            Maybe::Present(value) => (arms.present)(value),
            Maybe::Absent => (arms.absent)(),
        }
    }

    /// Back to the native nullable form, `None` on `Absent`.
    pub fn into_option(self) -> Option<T> {
        self.into()
    }

    /// Back to a JSON value, `null` on `Absent`.
    pub fn into_json(self) -> Value
    where
        T: Into<Value>,
    {
        match self {
            Maybe::Present(value) => value.into(),
            Maybe::Absent => Value::Null,
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::Absent
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        value.into_maybe()
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        match value {
            Maybe::Present(value) => Some(value),
            Maybe::Absent => None,
        }
    }
}

/// `Absent` is written as `null`, same as `Option`.
impl<T> Serialize for Maybe<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Maybe::Present(value) => serializer.serialize_some(value),
            Maybe::Absent => serializer.serialize_none(),
        }
    }
}

/// `null` reads as `Absent`. Combine with `#[serde(default)]` to treat a
/// missing field the same way.
impl<'de, T> Deserialize<'de> for Maybe<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Maybe::from)
    }
}

#[cfg(test)]
mod tests {
    use super::Maybe;
    use crate::error::EmptyContainerError;
    use serde::{Deserialize, Serialize};
    use serde_json::{json, Value};
    use std::cell::Cell;

    #[test]
    fn test_state_predicates() {
        let name = Maybe::present("Alice");
        assert!(name.is_present());
        assert!(!name.is_absent());

        let empty = Maybe::<&str>::absent();
        assert!(empty.is_absent());
        assert!(!empty.is_present());
    }

    #[test]
    fn test_try_unwrap() {
        assert_eq!(Maybe::present(1).try_unwrap(), Ok(1));
        assert_eq!(Maybe::<i32>::absent().try_unwrap(), Err(EmptyContainerError));
    }

    #[test]
    #[should_panic(expected = "called `Maybe::unwrap()` on an `Absent` value")]
    fn test_unwrap_absent_panics() {
        Maybe::<i32>::absent().unwrap();
    }

    #[test]
    fn test_unwrap_or_else_is_lazy() {
        let calls = Cell::new(0);
        let supplier = || {
            calls.set(calls.get() + 1);
            0
        };

        assert_eq!(Maybe::present(5).unwrap_or_else(supplier), 5);
        assert_eq!(calls.get(), 0);

        assert_eq!(Maybe::absent().unwrap_or_else(supplier), 0);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_map_skips_absent() {
        let calls = Cell::new(0);
        let upper = |s: &str| {
            calls.set(calls.get() + 1);
            s.to_uppercase()
        };

        assert_eq!(Maybe::present("alice").map(upper).unwrap(), "ALICE");
        assert!(Maybe::<&str>::absent().map(upper).is_absent());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_filter() {
        assert_eq!(Maybe::present(4).filter(|v| v % 2 == 0), Maybe::present(4));
        assert!(Maybe::present(3).filter(|v| v % 2 == 0).is_absent());

        let called = Cell::new(false);
        let out = Maybe::<i32>::absent().filter(|_| {
            called.set(true);
            true
        });
        assert!(out.is_absent());
        assert!(!called.get());
    }

    #[test]
    fn test_zip() {
        assert_eq!(Maybe::present(1).zip(Maybe::present(2)).unwrap(), (1, 2));
        assert!(Maybe::present(1).zip(Maybe::<i32>::absent()).is_absent());
        assert!(Maybe::<i32>::absent().zip(Maybe::present(2)).is_absent());
    }

    #[test]
    fn test_option_round_trip() {
        assert_eq!(Maybe::from_nullable(Some("x")).into_option(), Some("x"));
        assert_eq!(Maybe::from_nullable(None::<&str>).into_option(), None);
        assert_eq!(Maybe::from(Some(2)), Maybe::present(2));
    }

    #[test]
    fn test_into_json() {
        assert_eq!(Maybe::present("Alice").into_json(), json!("Alice"));
        assert_eq!(Maybe::<String>::absent().into_json(), Value::Null);
    }

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct User {
        name: String,
        #[serde(default)]
        email: Maybe<String>,
    }

    #[test]
    fn test_serde_null_and_missing_are_absent() -> anyhow::Result<()> {
        let with_null: User = serde_json::from_str(r#"{"name": "Bob", "email": null}"#)?;
        let missing: User = serde_json::from_str(r#"{"name": "Bob"}"#)?;
        let present: User =
            serde_json::from_str(r#"{"name": "Alice", "email": "alice@example.com"}"#)?;

        assert!(with_null.email.is_absent());
        assert!(missing.email.is_absent());
        assert_eq!(present.email, Maybe::present("alice@example.com".to_string()));

        assert_eq!(
            serde_json::to_value(&with_null)?,
            json!({ "name": "Bob", "email": null })
        );
        Ok(())
    }
}
