//! Member invocation
//!
//! Calls go through four gates, in order:
//!
//! 1. access: public members need `INVOKE_PUBLIC` / `CONSTRUCT_PUBLIC`;
//!    non-public members need [`Access::Elevated`] plus the matching
//!    `*_PRIVATE` permission
//! 2. receiver: instance methods require a receiver of the declaring class
//! 3. arguments: arity and per-parameter [`TypeRef::accepts`]
//! 4. body: run under `catch_unwind`; results are checked against the
//!    declared return type, constructed instances against the class

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::class::{Class, ConstructorInfo, MethodInfo};
use crate::error::{ReflectError, ReflectResult};
use crate::modifiers::Modifiers;
use crate::object::{ObjectRef, Reflect};
use crate::permissions::{PermissionPolicy, ReflectionPermission};
use crate::ty::{render_signature, TypeRef};
use crate::value::Value;

/// How visibility is treated for a call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Access {
    /// Only public members may be used
    #[default]
    Checked,
    /// Visibility is suppressed, subject to the `*_PRIVATE` permissions
    Elevated,
}

fn require_access(
    policy: &PermissionPolicy,
    class: &Class,
    modifiers: Modifiers,
    access: Access,
    public: ReflectionPermission,
    private: ReflectionPermission,
    member: impl FnOnce() -> String,
) -> ReflectResult<()> {
    if modifiers.is_public() {
        return policy.check(class, public);
    }
    match access {
        Access::Checked => Err(ReflectError::Inaccessible { member: member() }),
        Access::Elevated => policy.check(class, private),
    }
}

/// Check arity and argument types against declared parameters
pub fn check_arguments(params: &[TypeRef], args: &[Value]) -> ReflectResult<()> {
    if params.len() != args.len() {
        return Err(ReflectError::ArityMismatch {
            expected: params.len(),
            got: args.len(),
        });
    }
    for (index, (param, arg)) in params.iter().zip(args).enumerate() {
        if !param.accepts(arg) {
            return Err(ReflectError::ArgumentType {
                index,
                expected: param.to_string(),
                got: arg.type_name(),
            });
        }
    }
    Ok(())
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

fn guarded<T>(f: impl FnOnce() -> ReflectResult<T>) -> ReflectResult<T> {
    catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|payload| {
        Err(ReflectError::Panicked(panic_message(payload)))
    })
}

/// Invoke `method`, declared on `class`, against `receiver`
pub fn call_method(
    policy: &PermissionPolicy,
    class: &Class,
    method: &MethodInfo,
    receiver: &dyn Reflect,
    args: &[Value],
    access: Access,
) -> ReflectResult<Value> {
    require_access(
        policy,
        class,
        method.modifiers,
        access,
        ReflectionPermission::INVOKE_PUBLIC,
        ReflectionPermission::INVOKE_PRIVATE,
        || format!("{}.{}({})", class.qualified_name(), method.name, render_signature(&method.params)),
    )?;

    if !method.modifiers.is_static() {
        let receiver_class = receiver.class();
        if !receiver_class.is_subclass_of(class) {
            return Err(ReflectError::WrongReceiver {
                expected: class.qualified_name(),
                got: receiver_class.qualified_name(),
            });
        }
    }

    check_arguments(&method.params, args)?;

    let body = method
        .body
        .as_ref()
        .ok_or_else(|| ReflectError::Abstract(format!("{}.{}", class.qualified_name(), method.name)))?;

    tracing::trace!(class = %class.qualified_name(), method = %method.name, ?access, "invoke");
    let result = guarded(|| body(receiver, args))?;

    if !method.return_type.admits_result(&result) {
        return Err(ReflectError::ReturnType {
            declared: method.return_type.to_string(),
            got: result.type_name(),
        });
    }
    Ok(result)
}

/// Create a new instance of `class` through `ctor`
pub fn construct(
    policy: &PermissionPolicy,
    class: &Class,
    ctor: &ConstructorInfo,
    args: &[Value],
    access: Access,
) -> ReflectResult<ObjectRef> {
    if class.is_abstract() {
        return Err(ReflectError::Abstract(class.qualified_name()));
    }

    require_access(
        policy,
        class,
        ctor.modifiers,
        access,
        ReflectionPermission::CONSTRUCT_PUBLIC,
        ReflectionPermission::CONSTRUCT_PRIVATE,
        || format!("{}({})", class.qualified_name(), render_signature(&ctor.params)),
    )?;

    check_arguments(&ctor.params, args)?;

    tracing::trace!(class = %class.qualified_name(), arity = ctor.arity(), ?access, "construct");
    let object = guarded(|| (ctor.body)(args))?;

    let produced = object.class();
    if produced.qualified_name() != class.qualified_name() {
        return Err(ReflectError::ConstructedType {
            expected: class.qualified_name(),
            got: produced.qualified_name(),
        });
    }
    Ok(object)
}
