//! Permission-checked view of a class
//!
//! A [`Mirror`] pairs a [`Class`] with the [`PermissionPolicy`] in force and
//! is the only way to read member metadata or invoke members reflectively.
//! Every read re-checks permissions; nothing is cached.

use std::sync::Arc;

use crate::class::{Class, ConstructorInfo, FieldInfo, MethodInfo};
use crate::error::{ReflectError, ReflectResult};
use crate::invoke::{self, Access};
use crate::object::{ObjectRef, Reflect};
use crate::permissions::{PermissionPolicy, ReflectionPermission};
use crate::ty::{render_signature, TypeRef};
use crate::value::Value;

/// Class metadata as seen through a permission policy
#[derive(Debug, Clone)]
pub struct Mirror<'p> {
    class: Arc<Class>,
    policy: &'p PermissionPolicy,
}

impl<'p> Mirror<'p> {
    /// Reflect on `class` under `policy`
    pub fn new(class: Arc<Class>, policy: &'p PermissionPolicy) -> Self {
        Self { class, policy }
    }

    /// Reflect on the runtime class of `object`
    pub fn of(object: &dyn Reflect, policy: &'p PermissionPolicy) -> Self {
        Self::new(object.class(), policy)
    }

    /// The underlying descriptor
    pub fn class(&self) -> &Arc<Class> {
        &self.class
    }

    /// Simple name; always readable
    pub fn name(&self) -> &str {
        self.class.name()
    }

    fn require(&self, permission: ReflectionPermission) -> ReflectResult<()> {
        self.policy.check(&self.class, permission)
    }

    /// Fields declared directly on this class
    pub fn declared_fields(&self) -> ReflectResult<&[FieldInfo]> {
        self.require(ReflectionPermission::INTROSPECT)?;
        Ok(&self.class.fields)
    }

    /// Methods declared directly on this class, in declaration order
    pub fn declared_methods(&self) -> ReflectResult<&[MethodInfo]> {
        self.require(ReflectionPermission::INTROSPECT)?;
        Ok(&self.class.methods)
    }

    /// Constructors declared on this class, in declaration order
    pub fn declared_constructors(&self) -> ReflectResult<&[ConstructorInfo]> {
        self.require(ReflectionPermission::INTROSPECT)?;
        Ok(&self.class.constructors)
    }

    /// Interfaces declared directly on this class
    pub fn interfaces(&self) -> ReflectResult<&[Arc<Class>]> {
        self.require(ReflectionPermission::HIERARCHY)?;
        Ok(&self.class.interfaces)
    }

    /// Parent class; `None` for the root type and for interfaces
    pub fn parent(&self) -> ReflectResult<Option<Mirror<'p>>> {
        self.require(ReflectionPermission::HIERARCHY)?;
        Ok(self
            .class
            .parent
            .as_ref()
            .map(|parent| Mirror::new(Arc::clone(parent), self.policy)))
    }

    /// Parent class unless it is the universal root type
    pub fn non_root_parent(&self) -> ReflectResult<Option<Mirror<'p>>> {
        Ok(self.parent()?.filter(|parent| !parent.class.is_root()))
    }

    /// This class followed by every ancestor, up to and including the root
    pub fn hierarchy(&self) -> ReflectResult<Vec<Mirror<'p>>> {
        let mut chain = vec![self.clone()];
        let mut current = self.parent()?;
        while let Some(mirror) = current {
            current = mirror.parent()?;
            chain.push(mirror);
        }
        Ok(chain)
    }

    /// Look up a declared method by exact name and parameter types
    pub fn declared_method(&self, name: &str, params: &[TypeRef]) -> ReflectResult<&MethodInfo> {
        self.declared_methods()?
            .iter()
            .find(|method| method.has_signature(name, params))
            .ok_or_else(|| ReflectError::NoSuchMethod {
                class: self.class.qualified_name(),
                name: name.to_string(),
                signature: render_signature(params),
            })
    }

    /// First declared constructor taking `arity` parameters
    pub fn declared_constructor_with_arity(&self, arity: usize) -> ReflectResult<&ConstructorInfo> {
        self.declared_constructors()?
            .iter()
            .find(|ctor| ctor.arity() == arity)
            .ok_or_else(|| ReflectError::NoSuchConstructor {
                class: self.class.qualified_name(),
                arity,
            })
    }

    /// Invoke a method declared on this class
    pub fn invoke(
        &self,
        method: &MethodInfo,
        receiver: &dyn Reflect,
        args: &[Value],
        access: Access,
    ) -> ReflectResult<Value> {
        invoke::call_method(self.policy, &self.class, method, receiver, args, access)
    }

    /// Create an instance through a constructor declared on this class
    pub fn construct(
        &self,
        ctor: &ConstructorInfo,
        args: &[Value],
        access: Access,
    ) -> ReflectResult<ObjectRef> {
        invoke::construct(self.policy, &self.class, ctor, args, access)
    }
}
