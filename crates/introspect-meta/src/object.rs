//! Reflectable objects

use std::any::{type_name, Any};
use std::sync::Arc;

use crate::class::Class;
use crate::error::{ReflectError, ReflectResult};

/// A type whose instances carry runtime metadata.
///
/// Implementors hand out their [`Class`] descriptor, typically a clone of a
/// lazily built static, so `class()` is cheap and stable.
pub trait Reflect: Any + Send + Sync {
    /// Runtime class of this instance
    fn class(&self) -> Arc<Class>;

    /// Upcast for downcasting in member bodies
    fn as_any(&self) -> &dyn Any;
}

/// Shared handle to a reflectable object
pub type ObjectRef = Arc<dyn Reflect>;

/// Downcast a receiver to its concrete Rust type
pub fn downcast<T: Reflect>(receiver: &dyn Reflect) -> ReflectResult<&T> {
    receiver
        .as_any()
        .downcast_ref::<T>()
        .ok_or(ReflectError::Receiver {
            expected: type_name::<T>(),
        })
}

/// Check whether `object` is exactly of the Rust type `T`
pub fn is<T: Reflect>(object: &ObjectRef) -> bool {
    object.as_any().is::<T>()
}
