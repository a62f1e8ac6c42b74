//! Runtime type metadata for introspect
//!
//! Rust erases type information at compile time, so reflectable types
//! describe themselves: each implements [`Reflect`] and hands out a
//! [`Class`] descriptor built with [`ClassBuilder`]. On top of that model
//! this crate provides:
//!
//! - [`Mirror`]: permission-checked reads of declared members and ancestry
//! - [`invoke`]: elevated or checked invocation of methods and constructors
//! - [`PermissionPolicy`]: what an embedding system allows reflection to do
//!
//! # Example
//!
//! ```ignore
//! let policy = PermissionPolicy::new();
//! let mirror = Mirror::of(subject.as_ref(), &policy);
//! let get_age = mirror.declared_method("getAge", &[])?;
//! let age = mirror.invoke(get_age, subject.as_ref(), &[], Access::Elevated)?;
//! ```

#![warn(missing_docs)]

pub mod builder;
pub mod class;
pub mod error;
pub mod invoke;
pub mod mirror;
pub mod modifiers;
pub mod object;
pub mod permissions;
pub mod ty;
pub mod value;

pub use builder::ClassBuilder;
pub use class::{
    Ancestors, Class, ConstructorBody, ConstructorInfo, FieldInfo, MethodBody, MethodInfo, ROOT_NAME,
    ROOT_PACKAGE, ROOT_QUALIFIED_NAME,
};
pub use error::{ReflectError, ReflectResult};
pub use invoke::Access;
pub use mirror::Mirror;
pub use modifiers::Modifiers;
pub use object::{downcast, is, ObjectRef, Reflect};
pub use permissions::{PackageRule, PermissionPolicy, ReflectionPermission};
pub use ty::TypeRef;
pub use value::{arg, FromValue, Value};
