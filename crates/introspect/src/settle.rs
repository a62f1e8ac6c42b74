//! The empty-value convention
//!
//! Every public Investigator query turns a failure into the empty value of
//! its return type: `0`, `false`, `""`, an empty set, or `None`. Callers
//! cannot tell a legitimate zero from a failure; the `try_*` variants exist
//! for callers that need to.

use std::collections::BTreeSet;

use crate::error::InvestigateError;

/// The value a query returns when it cannot produce a result
pub trait EmptyValue {
    /// The empty value for this type
    fn empty() -> Self;
}

impl EmptyValue for usize {
    fn empty() -> Self {
        0
    }
}

impl EmptyValue for i32 {
    fn empty() -> Self {
        0
    }
}

impl EmptyValue for bool {
    fn empty() -> Self {
        false
    }
}

impl EmptyValue for String {
    fn empty() -> Self {
        String::new()
    }
}

impl<T: Ord> EmptyValue for BTreeSet<T> {
    fn empty() -> Self {
        BTreeSet::new()
    }
}

impl<T> EmptyValue for Vec<T> {
    fn empty() -> Self {
        Vec::new()
    }
}

impl<T> EmptyValue for Option<T> {
    fn empty() -> Self {
        None
    }
}

/// Collapse a query result into its value or the empty value
pub trait Settle<T> {
    /// Return the value, or log the failure and return `T::empty()`
    fn settle(self, operation: &'static str) -> T;
}

impl<T: EmptyValue> Settle<T> for Result<T, InvestigateError> {
    fn settle(self, operation: &'static str) -> T {
        match self {
            Ok(value) => value,
            Err(InvestigateError::NoSubject) => {
                tracing::trace!(operation, "no subject loaded");
                T::empty()
            }
            Err(err) => {
                tracing::debug!(operation, error = %err, "settled to empty value");
                T::empty()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use introspect_meta::ReflectError;

    #[test]
    fn test_empty_values() {
        assert_eq!(<usize as EmptyValue>::empty(), 0);
        assert_eq!(<i32 as EmptyValue>::empty(), 0);
        assert!(!<bool as EmptyValue>::empty());
        assert_eq!(<String as EmptyValue>::empty(), "");
        assert!(<BTreeSet<String> as EmptyValue>::empty().is_empty());
        assert!(<Option<u8> as EmptyValue>::empty().is_none());
    }

    #[test]
    fn test_settle() {
        let ok: Result<usize, InvestigateError> = Ok(7);
        assert_eq!(ok.settle("ok"), 7);

        let missing: Result<usize, InvestigateError> = Err(InvestigateError::NoSubject);
        assert_eq!(missing.settle("missing"), 0);

        let failed: Result<String, InvestigateError> =
            Err(ReflectError::target("boom").into());
        assert_eq!(failed.settle("failed"), "");
    }
}
