//! The Investigator
//!
//! Holds at most one subject and answers metadata queries about its runtime
//! class. Every query re-derives what it needs from the subject's [`Class`]
//! at call time through a [`Mirror`]; nothing is cached between calls.
//!
//! Each query exists twice:
//!
//! | Form        | Failure behaviour                                     |
//! |-------------|-------------------------------------------------------|
//! | `try_<op>`  | `Err(InvestigateError)` naming what went wrong        |
//! | `<op>`      | the empty value of the return type (see [`settle`])   |
//!
//! [`Class`]: introspect_meta::Class
//! [`settle`]: crate::settle

use std::collections::BTreeSet;
use std::fmt;

use introspect_meta::{Access, Mirror, ObjectRef, ReflectError, TypeRef, Value};

use crate::config::InvestigatorConfig;
use crate::error::InvestigateError;
use crate::report::SubjectReport;
use crate::settle::Settle;

type Result<T> = std::result::Result<T, InvestigateError>;

/// Metadata queries and elevated invocation against one loaded object
#[derive(Default)]
pub struct Investigator {
    subject: Option<ObjectRef>,
    config: InvestigatorConfig,
}

impl fmt::Debug for Investigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Investigator")
            .field(
                "subject",
                &self.subject.as_ref().map(|s| s.class().qualified_name()),
            )
            .field("config", &self.config)
            .finish()
    }
}

impl Investigator {
    /// Investigator with no subject and a permissive policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Investigator with no subject and the given configuration
    pub fn with_config(config: InvestigatorConfig) -> Self {
        Self {
            subject: None,
            config,
        }
    }

    /// Configuration in force
    pub fn config(&self) -> &InvestigatorConfig {
        &self.config
    }

    /// Replace the subject. `None` returns to the empty state.
    pub fn load(&mut self, instance: impl Into<Option<ObjectRef>>) {
        self.subject = instance.into();
        match &self.subject {
            Some(subject) => {
                tracing::trace!(class = %subject.class().qualified_name(), "subject loaded")
            }
            None => tracing::trace!("subject cleared"),
        }
    }

    /// Currently loaded subject
    pub fn subject(&self) -> Option<&ObjectRef> {
        self.subject.as_ref()
    }

    /// Check if a subject is loaded
    pub fn is_loaded(&self) -> bool {
        self.subject.is_some()
    }

    fn mirror(&self) -> Result<(&ObjectRef, Mirror<'_>)> {
        let subject = self.subject.as_ref().ok_or(InvestigateError::NoSubject)?;
        Ok((subject, Mirror::of(subject.as_ref(), self.config.policy())))
    }

    // ========================================================================
    // Structural counts
    // ========================================================================

    /// Methods declared on the subject's own class
    pub fn try_total_methods(&self) -> Result<usize> {
        let (_, mirror) = self.mirror()?;
        Ok(mirror.declared_methods()?.len())
    }

    /// Methods declared on the subject's own class, or 0
    pub fn total_methods(&self) -> usize {
        self.try_total_methods().settle("total_methods")
    }

    /// Constructors declared on the subject's own class
    pub fn try_total_constructors(&self) -> Result<usize> {
        let (_, mirror) = self.mirror()?;
        Ok(mirror.declared_constructors()?.len())
    }

    /// Constructors declared on the subject's own class, or 0
    pub fn total_constructors(&self) -> usize {
        self.try_total_constructors().settle("total_constructors")
    }

    /// Fields declared on the subject's own class
    pub fn try_total_fields(&self) -> Result<usize> {
        let (_, mirror) = self.mirror()?;
        Ok(mirror.declared_fields()?.len())
    }

    /// Fields declared on the subject's own class, or 0
    pub fn total_fields(&self) -> usize {
        self.try_total_fields().settle("total_fields")
    }

    /// Simple names of interfaces declared directly on the subject's class
    pub fn try_all_implemented_interfaces(&self) -> Result<BTreeSet<String>> {
        let (_, mirror) = self.mirror()?;
        Ok(mirror
            .interfaces()?
            .iter()
            .map(|iface| iface.name().to_string())
            .collect())
    }

    /// Simple names of directly declared interfaces, or an empty set
    pub fn all_implemented_interfaces(&self) -> BTreeSet<String> {
        self.try_all_implemented_interfaces()
            .settle("all_implemented_interfaces")
    }

    /// Own fields marked final
    pub fn try_count_of_constant_fields(&self) -> Result<usize> {
        let (_, mirror) = self.mirror()?;
        Ok(mirror
            .declared_fields()?
            .iter()
            .filter(|field| field.modifiers.is_final())
            .count())
    }

    /// Own fields marked final, or 0
    pub fn count_of_constant_fields(&self) -> usize {
        self.try_count_of_constant_fields()
            .settle("count_of_constant_fields")
    }

    /// Own methods marked static
    pub fn try_count_of_static_methods(&self) -> Result<usize> {
        let (_, mirror) = self.mirror()?;
        Ok(mirror
            .declared_methods()?
            .iter()
            .filter(|method| method.modifiers.is_static())
            .count())
    }

    /// Own methods marked static, or 0
    pub fn count_of_static_methods(&self) -> usize {
        self.try_count_of_static_methods()
            .settle("count_of_static_methods")
    }

    // ========================================================================
    // Inheritance
    // ========================================================================

    /// Whether the subject's class has a parent other than the root type
    pub fn try_is_extending(&self) -> Result<bool> {
        let (_, mirror) = self.mirror()?;
        Ok(mirror.non_root_parent()?.is_some())
    }

    /// Whether the subject's class has a non-root parent, or false
    pub fn is_extending(&self) -> bool {
        self.try_is_extending().settle("is_extending")
    }

    /// Simple name of the non-root parent, empty if there is none
    pub fn try_parent_class_simple_name(&self) -> Result<String> {
        let (_, mirror) = self.mirror()?;
        Ok(mirror
            .non_root_parent()?
            .map(|parent| parent.name().to_string())
            .unwrap_or_default())
    }

    /// Simple name of the non-root parent, or ""
    pub fn parent_class_simple_name(&self) -> String {
        self.try_parent_class_simple_name()
            .settle("parent_class_simple_name")
    }

    /// Whether the non-root parent is abstract; false if there is none
    pub fn try_is_parent_class_abstract(&self) -> Result<bool> {
        let (_, mirror) = self.mirror()?;
        Ok(mirror
            .non_root_parent()?
            .is_some_and(|parent| parent.class().is_abstract()))
    }

    /// Whether the non-root parent is abstract, or false
    pub fn is_parent_class_abstract(&self) -> bool {
        self.try_is_parent_class_abstract()
            .settle("is_parent_class_abstract")
    }

    /// Every field name declared on the subject's class or any ancestor,
    /// root type included.
    ///
    /// A failure anywhere in the walk fails the whole query; names collected
    /// from levels already visited are dropped, not returned.
    pub fn try_names_of_all_fields_including_inheritance_chain(&self) -> Result<BTreeSet<String>> {
        let (_, mirror) = self.mirror()?;
        let mut names = BTreeSet::new();
        let mut current = Some(mirror);
        while let Some(level) = current {
            names.extend(level.declared_fields()?.iter().map(|field| field.name.clone()));
            current = level.parent()?;
        }
        Ok(names)
    }

    /// Every field name in the hierarchy, or an empty set on any failure
    pub fn names_of_all_fields_including_inheritance_chain(&self) -> BTreeSet<String> {
        self.try_names_of_all_fields_including_inheritance_chain()
            .settle("names_of_all_fields_including_inheritance_chain")
    }

    /// Simple names from the root-most ancestor down to the subject's class.
    /// The universal root type is left out unless it is the subject's own
    /// class.
    pub fn try_inheritance_chain_names(&self) -> Result<Vec<String>> {
        let (_, mirror) = self.mirror()?;
        Ok(mirror
            .hierarchy()?
            .iter()
            .enumerate()
            .rev()
            .filter(|(depth, level)| *depth == 0 || !level.class().is_root())
            .map(|(_, level)| level.name().to_string())
            .collect())
    }

    /// Chain names joined by `delimiter`, e.g. `"A->B->C"`
    pub fn try_inheritance_chain(&self, delimiter: &str) -> Result<String> {
        Ok(self.try_inheritance_chain_names()?.join(delimiter))
    }

    /// Chain names joined by `delimiter`, or ""
    pub fn inheritance_chain(&self, delimiter: &str) -> String {
        self.try_inheritance_chain(delimiter)
            .settle("inheritance_chain")
    }

    // ========================================================================
    // Dynamic invocation
    // ========================================================================

    /// Invoke the first own method named `method_name` whose return type is
    /// `int`, with visibility elevated
    pub fn try_invoke_method_that_returns_int(&self, method_name: &str, args: &[Value]) -> Result<i32> {
        let (subject, mirror) = self.mirror()?;
        let method = mirror
            .declared_methods()?
            .iter()
            .find(|method| method.name == method_name && method.return_type == TypeRef::Int)
            .ok_or_else(|| ReflectError::NoSuchMethod {
                class: mirror.class().qualified_name(),
                name: method_name.to_string(),
                signature: "..".to_string(),
            })?;

        let result = mirror.invoke(method, subject.as_ref(), args, Access::Elevated)?;
        result.as_int().ok_or_else(|| {
            ReflectError::ReturnType {
                declared: TypeRef::Int.to_string(),
                got: result.type_name(),
            }
            .into()
        })
    }

    /// Result of the int-returning method, or 0 on any failure
    pub fn invoke_method_that_returns_int(&self, method_name: &str, args: &[Value]) -> i32 {
        self.try_invoke_method_that_returns_int(method_name, args)
            .settle("invoke_method_that_returns_int")
    }

    /// Construct a new instance through the first own constructor taking
    /// `number_of_args` parameters, with visibility elevated
    pub fn try_create_instance(&self, number_of_args: usize, args: &[Value]) -> Result<ObjectRef> {
        let (_, mirror) = self.mirror()?;
        let ctor = mirror.declared_constructor_with_arity(number_of_args)?;
        Ok(mirror.construct(ctor, args, Access::Elevated)?)
    }

    /// New instance, or `None` on any failure
    pub fn create_instance(&self, number_of_args: usize, args: &[Value]) -> Option<ObjectRef> {
        self.try_create_instance(number_of_args, args)
            .map(Some)
            .settle("create_instance")
    }

    /// Invoke the own method with exactly this name and parameter-type
    /// signature, with visibility elevated. Void methods yield `Value::Null`.
    pub fn try_elevate_method_and_invoke(
        &self,
        name: &str,
        parameter_types: &[TypeRef],
        args: &[Value],
    ) -> Result<Value> {
        let (subject, mirror) = self.mirror()?;
        let method = mirror.declared_method(name, parameter_types)?;
        Ok(mirror.invoke(method, subject.as_ref(), args, Access::Elevated)?)
    }

    /// Method result, or `None` on any failure
    pub fn elevate_method_and_invoke(
        &self,
        name: &str,
        parameter_types: &[TypeRef],
        args: &[Value],
    ) -> Option<Value> {
        self.try_elevate_method_and_invoke(name, parameter_types, args)
            .map(Some)
            .settle("elevate_method_and_invoke")
    }

    // ========================================================================
    // Reporting
    // ========================================================================

    /// Run every metadata query; `None` when no subject is loaded
    pub fn report(&self) -> Option<SubjectReport> {
        let subject = self.subject.as_ref()?;
        let class = subject.class();
        Some(SubjectReport {
            class_name: class.qualified_name(),
            simple_name: class.name().to_string(),
            total_methods: self.total_methods(),
            total_constructors: self.total_constructors(),
            total_fields: self.total_fields(),
            constant_fields: self.count_of_constant_fields(),
            static_methods: self.count_of_static_methods(),
            interfaces: self.all_implemented_interfaces(),
            extending: self.is_extending(),
            parent: self.parent_class_simple_name(),
            parent_abstract: self.is_parent_class_abstract(),
            all_field_names: self.names_of_all_fields_including_inheritance_chain(),
            inheritance_chain: self
                .try_inheritance_chain_names()
                .settle("inheritance_chain_names"),
        })
    }
}
