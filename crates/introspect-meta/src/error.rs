//! Error types for metadata access and member invocation

use thiserror::Error;

use crate::permissions::ReflectionPermission;

/// Result type for reflective operations
pub type ReflectResult<T> = Result<T, ReflectError>;

/// Errors raised while reading metadata or invoking members
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReflectError {
    /// The class does not open the permission the operation needs
    #[error("Access denied on {class}: requires {required}")]
    AccessDenied {
        /// Qualified name of the class
        class: String,
        /// Permission that was missing
        required: ReflectionPermission,
    },

    /// No declared method matched the lookup
    #[error("No such method: {class}.{name}({signature})")]
    NoSuchMethod {
        /// Qualified name of the class
        class: String,
        /// Method name
        name: String,
        /// Rendered parameter types
        signature: String,
    },

    /// No declared constructor matched the lookup
    #[error("No constructor of {class} takes {arity} argument(s)")]
    NoSuchConstructor {
        /// Qualified name of the class
        class: String,
        /// Requested parameter count
        arity: usize,
    },

    /// Wrong number of arguments for a member
    #[error("Arity mismatch: expected {expected} argument(s), got {got}")]
    ArityMismatch {
        /// Declared parameter count
        expected: usize,
        /// Supplied argument count
        got: usize,
    },

    /// Argument not assignable to the declared parameter type
    #[error("Argument {index}: expected {expected}, got {got}")]
    ArgumentType {
        /// Zero-based argument position
        index: usize,
        /// Declared parameter type
        expected: String,
        /// Type of the supplied value
        got: String,
    },

    /// Member body returned a value not matching its declared return type
    #[error("Return type mismatch: declared {declared}, got {got}")]
    ReturnType {
        /// Declared return type
        declared: String,
        /// Type of the produced value
        got: String,
    },

    /// Member body failed
    #[error("Target fault: {0}")]
    Target(String),

    /// Member body panicked
    #[error("Member panicked: {0}")]
    Panicked(String),

    /// Receiver was not of the type the member body expects
    #[error("Receiver type mismatch: expected {expected}")]
    Receiver {
        /// Rust type name the body wanted
        expected: &'static str,
    },

    /// Receiver is not an instance of the declaring class
    #[error("Object of type {got} is not an instance of {expected}")]
    WrongReceiver {
        /// Declaring class
        expected: String,
        /// Receiver's class
        got: String,
    },

    /// Non-public member used without elevated access
    #[error("{member} is not accessible without elevation")]
    Inaccessible {
        /// Rendered member
        member: String,
    },

    /// Constructor produced an instance of a different class
    #[error("Constructor of {expected} produced an instance of {got}")]
    ConstructedType {
        /// Class whose constructor was invoked
        expected: String,
        /// Class of the produced instance
        got: String,
    },

    /// Abstract class or member cannot be instantiated or called
    #[error("{0} is abstract")]
    Abstract(String),

    /// Unparseable permission expression
    #[error("Invalid permission value: {0}")]
    InvalidPermission(String),
}

impl ReflectError {
    /// Shorthand for a fault raised inside a member body
    pub fn target(msg: impl Into<String>) -> Self {
        ReflectError::Target(msg.into())
    }
}

impl From<String> for ReflectError {
    fn from(s: String) -> Self {
        ReflectError::Target(s)
    }
}

impl From<&str> for ReflectError {
    fn from(s: &str) -> Self {
        ReflectError::Target(s.to_string())
    }
}
