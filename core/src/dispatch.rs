use crate::{maybe::Maybe, outcome::Outcome};

/// Handlers for both states of a [`Maybe`].
pub struct MaybeArms<P, A> {
    /// Called with the value of `Present`.
    pub present: P,

    /// Called on `Absent`.
    pub absent: A,
}

/// Handlers for both states of an [`Outcome`].
pub struct OutcomeArms<S, F> {
    /// Called with the value of `Success`.
    pub success: S,

    /// Called with the error of `Failure`.
    pub failure: F,
}

/// Trait implemented by containers that can be taken apart by a set of arms `H`.
///
/// Both containers implement it by calling their inherent `match_with`, so the
/// free function [`match_on`] and the method form always agree.
pub trait Match<H> {
    type Output;

    /// Calls exactly one arm of `arms` and returns what it returned.
    fn match_with(self, arms: H) -> Self::Output;
}

impl<T, R, P, A> Match<MaybeArms<P, A>> for Maybe<T>
where
    P: FnOnce(T) -> R,
    A: FnOnce() -> R,
{
    type Output = R;

    fn match_with(self, arms: MaybeArms<P, A>) -> R {
        Maybe::match_with(self, arms)
    }
}

impl<T, E, R, S, F> Match<OutcomeArms<S, F>> for Outcome<T, E>
where
    S: FnOnce(T) -> R,
    F: FnOnce(E) -> R,
{
    type Output = R;

    fn match_with(self, arms: OutcomeArms<S, F>) -> R {
        Outcome::match_with(self, arms)
    }
}

/// Free function form of `match_with`, handy when dispatches nest.
///
/// ```rust
/// use fallible_core::{
///     dispatch::{match_on, MaybeArms},
///     maybe::Maybe,
/// };
///
/// let email: Maybe<&str> = Maybe::absent();
///
/// let line = match_on(Maybe::present("Bob"), MaybeArms {
///     present: |name: &str| match_on(email, MaybeArms {
///         present: |email: &str| format!("{} <{}>", name, email),
///         absent: || format!("{} (no email)", name),
///     }),
///     absent: || "User not found".to_string(),
/// });
///
/// assert_eq!(line, "Bob (no email)");
/// ```
pub fn match_on<C, H>(container: C, arms: H) -> C::Output
where
    C: Match<H>,
{
    container.match_with(arms)
}
