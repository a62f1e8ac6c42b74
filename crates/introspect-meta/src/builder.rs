//! Class Builder
//!
//! Fluent construction of [`Class`] descriptors. This is how an embedding
//! system supplies runtime type metadata for its Rust types:
//!
//! ```ignore
//! static PERSON: Lazy<Arc<Class>> = Lazy::new(|| {
//!     ClassBuilder::new("Person")
//!         .package("app.model")
//!         .field("name", TypeRef::Str, Modifiers::PRIVATE | Modifiers::FINAL)
//!         .method("getAge", [], TypeRef::Int, Modifiers::PRIVATE, |recv, _| {
//!             Ok(downcast::<Person>(recv)?.age.into())
//!         })
//!         .constructor([TypeRef::Str, TypeRef::Int], Modifiers::PUBLIC, |args| {
//!             Ok(Person::new(arg(args, 0)?, arg(args, 1)?))
//!         })
//!         .build()
//! });
//! ```
//!
//! Classes without an explicit parent extend the universal root type;
//! interfaces have no parent.

use std::sync::Arc;

use crate::class::{Class, ConstructorInfo, FieldInfo, MethodInfo};
use crate::error::ReflectResult;
use crate::modifiers::Modifiers;
use crate::object::{ObjectRef, Reflect};
use crate::permissions::ReflectionPermission;
use crate::ty::TypeRef;
use crate::value::Value;

/// Builder for [`Class`] descriptors
#[derive(Debug)]
pub struct ClassBuilder {
    name: String,
    package: String,
    modifiers: Modifiers,
    parent: Option<Arc<Class>>,
    interfaces: Vec<Arc<Class>>,
    fields: Vec<FieldInfo>,
    methods: Vec<MethodInfo>,
    constructors: Vec<ConstructorInfo>,
    opens: ReflectionPermission,
}

impl ClassBuilder {
    /// Start a public class extending the root type
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: String::new(),
            modifiers: Modifiers::PUBLIC,
            parent: Some(Class::root()),
            interfaces: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            constructors: Vec::new(),
            opens: ReflectionPermission::ALL,
        }
    }

    /// Start a public interface
    pub fn interface(name: impl Into<String>) -> Self {
        let mut builder = Self::new(name);
        builder.modifiers = Modifiers::PUBLIC | Modifiers::INTERFACE | Modifiers::ABSTRACT;
        builder.parent = None;
        builder
    }

    /// Set the package path (dot separated)
    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    /// Replace the class modifiers, keeping the interface flag
    pub fn modifiers(mut self, modifiers: Modifiers) -> Self {
        let interface = self.modifiers & Modifiers::INTERFACE;
        self.modifiers = modifiers | interface;
        self
    }

    /// Mark the class abstract
    pub fn abstract_class(mut self) -> Self {
        self.modifiers |= Modifiers::ABSTRACT;
        self
    }

    /// Set the parent class
    pub fn extends(mut self, parent: &Arc<Class>) -> Self {
        self.parent = Some(Arc::clone(parent));
        self
    }

    /// Declare a directly implemented interface (super-interface for interfaces)
    pub fn implements(mut self, interface: &Arc<Class>) -> Self {
        self.interfaces.push(Arc::clone(interface));
        self
    }

    /// Restrict the reflective capabilities the class opens
    pub fn opens(mut self, permissions: ReflectionPermission) -> Self {
        self.opens = permissions;
        self
    }

    /// Declare a field
    pub fn field(mut self, name: impl Into<String>, ty: TypeRef, modifiers: Modifiers) -> Self {
        self.fields.push(FieldInfo {
            name: name.into(),
            ty,
            modifiers,
        });
        self
    }

    /// Declare a method with an implementation
    pub fn method<P, F>(
        mut self,
        name: impl Into<String>,
        params: P,
        return_type: TypeRef,
        modifiers: Modifiers,
        body: F,
    ) -> Self
    where
        P: IntoIterator<Item = TypeRef>,
        F: Fn(&dyn Reflect, &[Value]) -> ReflectResult<Value> + Send + Sync + 'static,
    {
        self.methods.push(MethodInfo {
            name: name.into(),
            params: params.into_iter().collect(),
            return_type,
            modifiers,
            body: Some(Arc::new(body)),
        });
        self
    }

    /// Declare a static method; the body never sees a receiver
    pub fn static_method<P, F>(
        self,
        name: impl Into<String>,
        params: P,
        return_type: TypeRef,
        modifiers: Modifiers,
        body: F,
    ) -> Self
    where
        P: IntoIterator<Item = TypeRef>,
        F: Fn(&[Value]) -> ReflectResult<Value> + Send + Sync + 'static,
    {
        self.method(
            name,
            params,
            return_type,
            modifiers | Modifiers::STATIC,
            move |_, args| body(args),
        )
    }

    /// Declare an abstract method (no implementation)
    pub fn abstract_method<P>(
        mut self,
        name: impl Into<String>,
        params: P,
        return_type: TypeRef,
        modifiers: Modifiers,
    ) -> Self
    where
        P: IntoIterator<Item = TypeRef>,
    {
        self.methods.push(MethodInfo {
            name: name.into(),
            params: params.into_iter().collect(),
            return_type,
            modifiers: modifiers | Modifiers::ABSTRACT,
            body: None,
        });
        self
    }

    /// Declare a constructor producing `T`
    pub fn constructor<P, T, F>(mut self, params: P, modifiers: Modifiers, body: F) -> Self
    where
        P: IntoIterator<Item = TypeRef>,
        T: Reflect,
        F: Fn(&[Value]) -> ReflectResult<T> + Send + Sync + 'static,
    {
        self.constructors.push(ConstructorInfo {
            params: params.into_iter().collect(),
            modifiers,
            body: Arc::new(move |args| body(args).map(|obj| Arc::new(obj) as ObjectRef)),
        });
        self
    }

    /// Finish the descriptor
    pub fn build(self) -> Arc<Class> {
        Arc::new(Class {
            name: self.name,
            package: self.package,
            modifiers: self.modifiers,
            parent: self.parent,
            interfaces: self.interfaces,
            fields: self.fields,
            methods: self.methods,
            constructors: self.constructors,
            opens: self.opens,
        })
    }
}
