//! Class Descriptors
//!
//! A [`Class`] is the runtime metadata of one reflectable type: its declared
//! fields, methods and constructors, its parent class and the interfaces it
//! declares directly. Descriptors are immutable once built and shared via
//! `Arc`. Reads that honour reflection permissions go through
//! [`Mirror`](crate::mirror::Mirror); this module only holds the data.

use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::error::ReflectResult;
use crate::modifiers::Modifiers;
use crate::object::{ObjectRef, Reflect};
use crate::permissions::ReflectionPermission;
use crate::ty::TypeRef;
use crate::value::Value;

/// Simple name of the universal root type
pub const ROOT_NAME: &str = "Object";
/// Package of the universal root type
pub const ROOT_PACKAGE: &str = "java.lang";
/// Qualified name of the universal root type
pub const ROOT_QUALIFIED_NAME: &str = "java.lang.Object";

/// Implementation of a method: receiver plus arguments
pub type MethodBody = Arc<dyn Fn(&dyn Reflect, &[Value]) -> ReflectResult<Value> + Send + Sync>;

/// Implementation of a constructor
pub type ConstructorBody = Arc<dyn Fn(&[Value]) -> ReflectResult<ObjectRef> + Send + Sync>;

/// Field information for reflection
#[derive(Debug, Clone, PartialEq)]
pub struct FieldInfo {
    /// Field name
    pub name: String,
    /// Declared type
    pub ty: TypeRef,
    /// Modifier flags
    pub modifiers: Modifiers,
}

/// Method information for reflection
#[derive(Clone)]
pub struct MethodInfo {
    /// Method name
    pub name: String,
    /// Parameter types, in order
    pub params: Vec<TypeRef>,
    /// Return type
    pub return_type: TypeRef,
    /// Modifier flags
    pub modifiers: Modifiers,
    pub(crate) body: Option<MethodBody>,
}

impl MethodInfo {
    /// Number of formal parameters
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Check name and exact parameter-type signature
    pub fn has_signature(&self, name: &str, params: &[TypeRef]) -> bool {
        self.name == name && self.params == params
    }

    /// Check if the method has an implementation
    pub fn has_body(&self) -> bool {
        self.body.is_some()
    }
}

impl fmt::Debug for MethodInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodInfo")
            .field("name", &self.name)
            .field("params", &self.params)
            .field("return_type", &self.return_type)
            .field("modifiers", &self.modifiers)
            .field("has_body", &self.has_body())
            .finish()
    }
}

/// Constructor information for reflection
#[derive(Clone)]
pub struct ConstructorInfo {
    /// Parameter types, in order
    pub params: Vec<TypeRef>,
    /// Modifier flags
    pub modifiers: Modifiers,
    pub(crate) body: ConstructorBody,
}

impl ConstructorInfo {
    /// Number of formal parameters
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

impl fmt::Debug for ConstructorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstructorInfo")
            .field("params", &self.params)
            .field("modifiers", &self.modifiers)
            .finish()
    }
}

/// Runtime metadata for a single class or interface
#[derive(Debug)]
pub struct Class {
    pub(crate) name: String,
    pub(crate) package: String,
    pub(crate) modifiers: Modifiers,
    pub(crate) parent: Option<Arc<Class>>,
    pub(crate) interfaces: Vec<Arc<Class>>,
    pub(crate) fields: Vec<FieldInfo>,
    pub(crate) methods: Vec<MethodInfo>,
    pub(crate) constructors: Vec<ConstructorInfo>,
    pub(crate) opens: ReflectionPermission,
}

static ROOT: Lazy<Arc<Class>> = Lazy::new(|| {
    Arc::new(Class {
        name: ROOT_NAME.to_string(),
        package: ROOT_PACKAGE.to_string(),
        modifiers: Modifiers::PUBLIC,
        parent: None,
        interfaces: Vec::new(),
        fields: Vec::new(),
        methods: Vec::new(),
        constructors: Vec::new(),
        opens: ReflectionPermission::ALL,
    })
});

impl Class {
    /// The universal root type every class ultimately extends
    pub fn root() -> Arc<Class> {
        Arc::clone(&ROOT)
    }

    /// Simple (unqualified) name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Package path, empty for the default package
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Package-qualified name
    pub fn qualified_name(&self) -> String {
        if self.package.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.package, self.name)
        }
    }

    /// Class modifier flags
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Reflective capabilities this class opens
    pub fn opens(&self) -> ReflectionPermission {
        self.opens
    }

    /// Check if this is the universal root type
    pub fn is_root(&self) -> bool {
        self.parent.is_none() && self.package == ROOT_PACKAGE && self.name == ROOT_NAME
    }

    /// Check if the class cannot be instantiated directly
    pub fn is_abstract(&self) -> bool {
        self.modifiers.is_abstract()
    }

    /// Check if this is an interface
    pub fn is_interface(&self) -> bool {
        self.modifiers.is_interface()
    }

    /// This class followed by each parent up to the root type.
    ///
    /// Unchecked: reads that honour reflection permissions use
    /// [`Mirror::hierarchy`](crate::mirror::Mirror::hierarchy).
    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors { next: Some(self) }
    }

    /// Check whether an instance of this class can be used where
    /// `qualified_name` is expected. This is the runtime's own type check
    /// and is not subject to reflection permissions.
    pub fn is_assignable_to(&self, qualified_name: &str) -> bool {
        if qualified_name == ROOT_QUALIFIED_NAME {
            return true;
        }
        self.ancestors().any(|class| {
            class.qualified_name() == qualified_name
                || class
                    .interfaces
                    .iter()
                    .any(|iface| iface.is_assignable_to(qualified_name))
        })
    }

    /// Check if `self` is `other` or one of its descendants
    pub fn is_subclass_of(&self, other: &Class) -> bool {
        let target = other.qualified_name();
        self.ancestors().any(|class| class.qualified_name() == target)
    }
}

/// Iterator returned by [`Class::ancestors`]
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    next: Option<&'a Class>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a Class;

    fn next(&mut self) -> Option<&'a Class> {
        let current = self.next?;
        self.next = current.parent.as_deref();
        Some(current)
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_interface() { "interface" } else { "class" };
        write!(f, "{} {}", kind, self.qualified_name())
    }
}
