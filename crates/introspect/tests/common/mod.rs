//! Reflectable fixture types shared by the integration tests
#![allow(dead_code)]

use std::any::Any;
use std::sync::Arc;

use introspect::{arg, downcast, Class, ClassBuilder, Modifiers, ObjectRef, Reflect, ReflectError,
    ReflectionPermission, TypeRef, Value};
use once_cell::sync::Lazy;

/// Route `tracing` output to the test harness; `RUST_LOG=debug` shows settled failures
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

macro_rules! reflect_via {
    ($ty:ty, $class:ident) => {
        impl Reflect for $ty {
            fn class(&self) -> Arc<Class> {
                Arc::clone(&$class)
            }

            fn as_any(&self) -> &dyn Any {
                self
            }
        }
    };
}

// ============================================================================
// Interfaces
// ============================================================================

pub static GREETER: Lazy<Arc<Class>> =
    Lazy::new(|| ClassBuilder::interface("Greeter").package("app.api").build());

pub static IDENTIFIABLE: Lazy<Arc<Class>> =
    Lazy::new(|| ClassBuilder::interface("Identifiable").package("app.api").build());

pub static LIVING: Lazy<Arc<Class>> =
    Lazy::new(|| ClassBuilder::interface("Living").package("app.api").build());

// ============================================================================
// Person: root-only ancestry, two interfaces, private members
// ============================================================================

#[derive(Debug)]
pub struct Person {
    pub name: String,
    pub age: i32,
}

pub static PERSON: Lazy<Arc<Class>> = Lazy::new(|| {
    ClassBuilder::new("Person")
        .package("app.model")
        .implements(&GREETER)
        .implements(&IDENTIFIABLE)
        .field("name", TypeRef::Str, Modifiers::PRIVATE | Modifiers::FINAL)
        .field("age", TypeRef::Int, Modifiers::PRIVATE)
        .field(
            "SPECIES",
            TypeRef::Str,
            Modifiers::PUBLIC | Modifiers::STATIC | Modifiers::FINAL,
        )
        .method("getAge", [], TypeRef::Int, Modifiers::PRIVATE, |recv, _| {
            Ok(Value::Int(downcast::<Person>(recv)?.age))
        })
        .method("getName", [], TypeRef::Str, Modifiers::PUBLIC, |recv, _| {
            Ok(Value::from(downcast::<Person>(recv)?.name.as_str()))
        })
        .method(
            "ageIn",
            [TypeRef::Int],
            TypeRef::Int,
            Modifiers::PRIVATE,
            |recv, args| Ok(Value::Int(downcast::<Person>(recv)?.age + arg::<i32>(args, 0)?)),
        )
        .method("greet", [TypeRef::Str], TypeRef::Void, Modifiers::PROTECTED, |_, args| {
            arg::<String>(args, 0)?;
            Ok(Value::Null)
        })
        .method(
            "describe",
            [TypeRef::Str, TypeRef::Int],
            TypeRef::Str,
            Modifiers::PRIVATE,
            |recv, args| {
                let person = downcast::<Person>(recv)?;
                let prefix: String = arg(args, 0)?;
                let times: i32 = arg(args, 1)?;
                Ok(Value::from(format!("{}{}", prefix, person.name.repeat(times as usize))))
            },
        )
        .static_method("defaultAge", [], TypeRef::Int, Modifiers::PUBLIC, |_| {
            Ok(Value::Int(18))
        })
        .constructor([TypeRef::Str, TypeRef::Int], Modifiers::PUBLIC, |args| {
            Ok(Person {
                name: arg(args, 0)?,
                age: arg(args, 1)?,
            })
        })
        .constructor([], Modifiers::PRIVATE, |_| {
            Ok(Person {
                name: "anonymous".to_string(),
                age: 0,
            })
        })
        .build()
});

reflect_via!(Person, PERSON);

pub fn person(name: &str, age: i32) -> ObjectRef {
    Arc::new(Person {
        name: name.to_string(),
        age,
    })
}

// ============================================================================
// A <- B <- C: plain three-level chain
// ============================================================================

pub struct C;

pub static A: Lazy<Arc<Class>> = Lazy::new(|| {
    ClassBuilder::new("A")
        .package("app.chain")
        .field("id", TypeRef::Int, Modifiers::PRIVATE)
        .build()
});

pub static B: Lazy<Arc<Class>> = Lazy::new(|| {
    ClassBuilder::new("B")
        .package("app.chain")
        .extends(&A)
        .field("label", TypeRef::Str, Modifiers::PROTECTED)
        .build()
});

pub static C_CLASS: Lazy<Arc<Class>> = Lazy::new(|| {
    ClassBuilder::new("C")
        .package("app.chain")
        .extends(&B)
        .field("id", TypeRef::Int, Modifiers::PRIVATE)
        .build()
});

reflect_via!(C, C_CLASS);

pub fn c() -> ObjectRef {
    Arc::new(C)
}

// ============================================================================
// Animal (abstract, implements Living) <- Dog (implements Greeter)
// ============================================================================

pub struct Dog {
    pub legs: i32,
}

pub static ANIMAL: Lazy<Arc<Class>> = Lazy::new(|| {
    ClassBuilder::new("Animal")
        .package("app.zoo")
        .abstract_class()
        .implements(&LIVING)
        .field("legs", TypeRef::Int, Modifiers::PROTECTED)
        .abstract_method("sound", [], TypeRef::Str, Modifiers::PUBLIC)
        .build()
});

pub static DOG: Lazy<Arc<Class>> = Lazy::new(|| {
    ClassBuilder::new("Dog")
        .package("app.zoo")
        .extends(&ANIMAL)
        .implements(&GREETER)
        .field("breed", TypeRef::Str, Modifiers::PRIVATE)
        .method("sound", [], TypeRef::Str, Modifiers::PUBLIC, |_, _| Ok(Value::from("woof")))
        .method("legCount", [], TypeRef::Int, Modifiers::PUBLIC, |recv, _| {
            Ok(Value::Int(downcast::<Dog>(recv)?.legs))
        })
        .constructor([TypeRef::Int], Modifiers::PUBLIC, |args| Ok(Dog { legs: arg(args, 0)? }))
        .build()
});

reflect_via!(Dog, DOG);

pub fn dog() -> ObjectRef {
    Arc::new(Dog { legs: 4 })
}

// ============================================================================
// Faulty: members that fail in every way a body can
// ============================================================================

pub struct Faulty;

pub static FAULTY: Lazy<Arc<Class>> = Lazy::new(|| {
    ClassBuilder::new("Faulty")
        .package("app.faults")
        .method("refuse", [], TypeRef::Int, Modifiers::PRIVATE, |_, _| {
            Err(ReflectError::target("refused"))
        })
        .method("explode", [], TypeRef::Int, Modifiers::PRIVATE, |_, _| {
            panic!("member body exploded")
        })
        .method("zero", [], TypeRef::Int, Modifiers::PRIVATE, |_, _| Ok(Value::Int(0)))
        .method("count", [], TypeRef::Long, Modifiers::PUBLIC, |_, _| Ok(Value::Long(9)))
        .method("count", [], TypeRef::Int, Modifiers::PUBLIC, |_, _| Ok(Value::Int(7)))
        .constructor([TypeRef::Int], Modifiers::PUBLIC, |_| -> Result<Faulty, ReflectError> {
            Err(ReflectError::target("constructor refused"))
        })
        .constructor([TypeRef::Str], Modifiers::PUBLIC, |_| -> Result<Faulty, ReflectError> {
            panic!("constructor exploded")
        })
        .build()
});

reflect_via!(Faulty, FAULTY);

pub fn faulty() -> ObjectRef {
    Arc::new(Faulty)
}

// ============================================================================
// Widget: a constructor that builds the wrong type
// ============================================================================

pub struct Widget;

pub static WIDGET: Lazy<Arc<Class>> = Lazy::new(|| {
    ClassBuilder::new("Widget")
        .package("app.ui")
        .constructor([TypeRef::Str, TypeRef::Int], Modifiers::PUBLIC, |args| {
            Ok(Person {
                name: arg(args, 0)?,
                age: arg(args, 1)?,
            })
        })
        .build()
});

reflect_via!(Widget, WIDGET);

pub fn widget() -> ObjectRef {
    Arc::new(Widget)
}

/// An instance of the universal root type itself
pub struct Plain;

impl Reflect for Plain {
    fn class(&self) -> Arc<Class> {
        Class::root()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

pub fn plain() -> ObjectRef {
    Arc::new(Plain)
}

// ============================================================================
// Sealed types: classes that refuse reflective access
// ============================================================================

pub struct Vault;

pub static VAULT: Lazy<Arc<Class>> = Lazy::new(|| {
    ClassBuilder::new("Vault")
        .package("app.secure")
        .opens(ReflectionPermission::empty())
        .field("secret", TypeRef::Str, Modifiers::PRIVATE | Modifiers::FINAL)
        .method("code", [], TypeRef::Int, Modifiers::PRIVATE, |_, _| Ok(Value::Int(1234)))
        .constructor([], Modifiers::PUBLIC, |_| Ok(Vault))
        .build()
});

reflect_via!(Vault, VAULT);

pub fn vault() -> ObjectRef {
    Arc::new(Vault)
}

/// Opens member metadata but hides its own parent link
pub static SHROUDED: Lazy<Arc<Class>> = Lazy::new(|| {
    ClassBuilder::new("Shrouded")
        .package("app.secure")
        .opens(ReflectionPermission::INTROSPECT)
        .field("hidden", TypeRef::Int, Modifiers::PRIVATE)
        .build()
});

pub struct Leaf;

pub static LEAF: Lazy<Arc<Class>> = Lazy::new(|| {
    ClassBuilder::new("Leaf")
        .package("app.secure")
        .extends(&SHROUDED)
        .field("visible", TypeRef::Int, Modifiers::PUBLIC)
        .build()
});

reflect_via!(Leaf, LEAF);

pub fn leaf() -> ObjectRef {
    Arc::new(Leaf)
}
