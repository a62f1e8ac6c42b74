//! Type references used in member signatures

use std::fmt;

use crate::class::ROOT_QUALIFIED_NAME;
use crate::value::Value;

/// Declared type of a field, parameter or return value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// No value (method return only)
    Void,
    /// `boolean`
    Bool,
    /// `int`, the primitive integer
    Int,
    /// `long`
    Long,
    /// `double`
    Double,
    /// `String`
    Str,
    /// Reference type, by qualified class name
    Object(String),
}

impl TypeRef {
    /// Reference type by qualified class name
    pub fn object(qualified_name: impl Into<String>) -> Self {
        TypeRef::Object(qualified_name.into())
    }

    /// The root reference type (`java.lang.Object`)
    pub fn any() -> Self {
        TypeRef::Object(ROOT_QUALIFIED_NAME.to_string())
    }

    /// Check whether `value` may be passed where this type is declared.
    ///
    /// Primitives widen `int -> long -> double`. Reference types accept null.
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (TypeRef::Void, _) => false,
            (TypeRef::Bool, Value::Bool(_)) => true,
            (TypeRef::Int, Value::Int(_)) => true,
            (TypeRef::Long, Value::Int(_) | Value::Long(_)) => true,
            (TypeRef::Double, Value::Int(_) | Value::Long(_) | Value::Double(_)) => true,
            (TypeRef::Str | TypeRef::Object(_), Value::Null) => true,
            (TypeRef::Str, Value::Str(_)) => true,
            (TypeRef::Object(name), Value::Str(_)) => {
                name == ROOT_QUALIFIED_NAME || name == "java.lang.String"
            }
            (TypeRef::Object(name), Value::Object(obj)) => obj.class().is_assignable_to(name),
            _ => false,
        }
    }

    /// Check whether a method declared to return this type may produce `value`
    pub fn admits_result(&self, value: &Value) -> bool {
        match self {
            TypeRef::Void => value.is_null(),
            _ => self.accepts(value),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Void => write!(f, "void"),
            TypeRef::Bool => write!(f, "boolean"),
            TypeRef::Int => write!(f, "int"),
            TypeRef::Long => write!(f, "long"),
            TypeRef::Double => write!(f, "double"),
            TypeRef::Str => write!(f, "String"),
            TypeRef::Object(name) => write!(f, "{name}"),
        }
    }
}

/// Render a parameter list as `int, String`
pub fn render_signature(params: &[TypeRef]) -> String {
    params
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_acceptance() {
        assert!(TypeRef::Int.accepts(&Value::Int(1)));
        assert!(!TypeRef::Int.accepts(&Value::Long(1)));
        assert!(TypeRef::Long.accepts(&Value::Int(1)));
        assert!(TypeRef::Double.accepts(&Value::Long(1)));
        assert!(!TypeRef::Bool.accepts(&Value::Int(0)));
        assert!(!TypeRef::Int.accepts(&Value::Null));
        assert!(!TypeRef::Void.accepts(&Value::Null));
    }

    #[test]
    fn test_reference_acceptance() {
        assert!(TypeRef::Str.accepts(&Value::from("x")));
        assert!(TypeRef::Str.accepts(&Value::Null));
        assert!(!TypeRef::Str.accepts(&Value::Int(3)));
        assert!(TypeRef::any().accepts(&Value::from("x")));
        assert!(!TypeRef::object("app.Person").accepts(&Value::from("x")));
    }

    #[test]
    fn test_result_admission() {
        assert!(TypeRef::Void.admits_result(&Value::Null));
        assert!(!TypeRef::Void.admits_result(&Value::Int(1)));
        assert!(TypeRef::Int.admits_result(&Value::Int(1)));
        assert!(!TypeRef::Int.admits_result(&Value::Null));
    }

    #[test]
    fn test_display_and_signature() {
        assert_eq!(TypeRef::any().to_string(), "java.lang.Object");
        assert_eq!(
            render_signature(&[TypeRef::Int, TypeRef::Str, TypeRef::object("app.Person")]),
            "int, String, app.Person"
        );
        assert_eq!(render_signature(&[]), "");
    }
}
