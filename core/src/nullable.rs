use crate::maybe::Maybe;
use serde_json::Value;

/// Types that carry their own "no value" sentinel.
///
/// Implemented for `Option<T>` and for JSON values, where `null` is the
/// sentinel. Used by [`Maybe::from_nullable`].
pub trait Nullable {
    type Value;

    /// Turns Self into `Maybe`, mapping the sentinel to `Absent`.
    fn into_maybe(self) -> Maybe<Self::Value>;
}

impl<T> Nullable for Option<T> {
    type Value = T;

    fn into_maybe(self) -> Maybe<T> {
        match self {
            Some(value) => Maybe::Present(value),
            None => Maybe::Absent,
        }
    }
}

/// Macro for JSON Nullable implementations, owned and borrowed.
macro_rules! derive_json_nullable {
    ([$($lt:lifetime),*] $type:ty) => {
        impl<$($lt),*> Nullable for $type {
            type Value = $type;

            fn into_maybe(self) -> Maybe<Self::Value> {
                match self {
                    Value::Null => Maybe::Absent,
                    value => Maybe::Present(value),
                }
            }
        }
    };
}

derive_json_nullable!([] Value);
derive_json_nullable!(['a] &'a Value);

/// Looks up `key` in a JSON object.
///
/// A missing key and an explicit `null` are both `Absent`, as is any
/// `value` that is not an object.
///
/// ```rust
/// use fallible_core::nullable::json_field;
/// use serde_json::json;
///
/// let user = json!({ "name": "Bob", "email": null });
///
/// assert!(json_field(&user, "name").is_present());
/// assert!(json_field(&user, "email").is_absent());
/// assert!(json_field(&user, "phone").is_absent());
/// ```
pub fn json_field<'a>(value: &'a Value, key: &str) -> Maybe<&'a Value> {
    Maybe::from_nullable(value.get(key)).flat_map(Maybe::from_nullable)
}

#[cfg(test)]
mod tests {
    use super::{json_field, Nullable};
    use crate::maybe::Maybe;
    use serde_json::{json, Value};

    #[test]
    fn test_option_into_maybe() {
        assert_eq!(Some(3).into_maybe(), Maybe::Present(3));
        assert_eq!(None::<i32>.into_maybe(), Maybe::Absent);
    }

    #[test]
    fn test_json_into_maybe() {
        assert_eq!(Value::Null.into_maybe(), Maybe::Absent);
        assert_eq!(json!(1).into_maybe(), Maybe::Present(json!(1)));

        let v = json!("x");
        assert_eq!((&v).into_maybe(), Maybe::Present(&v));
    }

    #[test]
    fn test_json_field() {
        let config = json!({ "port": 3000, "host": null });

        assert_eq!(json_field(&config, "port"), Maybe::Present(&json!(3000)));
        assert!(json_field(&config, "host").is_absent());
        assert!(json_field(&config, "missing").is_absent());
        assert!(json_field(&json!([1, 2]), "port").is_absent());
    }
}
