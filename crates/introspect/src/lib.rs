//! introspect - metadata queries against a loaded object
//!
//! An [`Investigator`] holds one subject at a time and reports on its
//! runtime class: member counts, directly declared interfaces, ancestry and
//! inherited field names. It can also invoke methods and constructors with
//! visibility elevated.
//!
//! Failures never cross the public query surface: each query returns the
//! empty value of its type (see [`settle`]). Every query has a `try_*`
//! counterpart that reports the failure instead.
//!
//! # Example
//!
//! ```ignore
//! use introspect::{Investigator, Value};
//!
//! let mut investigator = Investigator::new();
//! assert_eq!(investigator.total_fields(), 0);
//!
//! investigator.load(person);
//! let age = investigator.invoke_method_that_returns_int("getAge", &[]);
//! let copy = investigator.create_instance(2, &[Value::from("Ada"), Value::from(36)]);
//! println!("{}", investigator.inheritance_chain("->"));
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod investigator;
pub mod report;
pub mod settle;

pub use config::InvestigatorConfig;
pub use error::{ConfigError, InvestigateError};
pub use investigator::Investigator;
pub use report::SubjectReport;
pub use settle::{EmptyValue, Settle};

pub use introspect_meta::{
    arg, downcast, is, Access, Class, ClassBuilder, FromValue, Mirror, Modifiers, ObjectRef,
    PermissionPolicy, Reflect, ReflectError, ReflectionPermission, TypeRef, Value,
};
