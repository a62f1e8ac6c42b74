//! Reflection Permissions
//!
//! Controls which reflective capabilities a class opens to introspection.
//! Two layers decide the effective permission for a class:
//!
//! - the class itself declares what it opens (`Class::opens`, default `ALL`)
//! - the embedding system may narrow that with a [`PermissionPolicy`]
//!
//! The effective permission is the intersection of both.
//!
//! ## Policy resolution
//!
//! | Order | Rule                         | Example key      |
//! |-------|------------------------------|------------------|
//! | 1     | Exact class                  | `app.Secret`     |
//! | 2     | Exact package                | `app.internal`   |
//! | 3     | Package pattern (first wins) | `vendor.*`       |
//! | 4     | Global default               |                  |
//!
//! Patterns: `pkg.*` matches packages directly below `pkg`, `pkg.**` matches
//! `pkg` and everything below it, `*` and `**` match every package.

use std::fmt;

use bitflags::bitflags;
use rustc_hash::FxHashMap;

use crate::class::Class;
use crate::error::{ReflectError, ReflectResult};

bitflags! {
    /// Reflective capabilities a class may open
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ReflectionPermission: u8 {
        /// Enumerate declared members and their modifiers
        const INTROSPECT = 0x01;
        /// Read the parent class and declared interfaces
        const HIERARCHY = 0x02;
        /// Invoke public methods
        const INVOKE_PUBLIC = 0x04;
        /// Invoke non-public methods (elevated access)
        const INVOKE_PRIVATE = 0x08;
        /// Call public constructors
        const CONSTRUCT_PUBLIC = 0x10;
        /// Call non-public constructors (elevated access)
        const CONSTRUCT_PRIVATE = 0x20;

        /// INTROSPECT | HIERARCHY
        const READ_ALL = 0x03;
        /// INVOKE_PUBLIC | INVOKE_PRIVATE
        const INVOKE_ALL = 0x0C;
        /// CONSTRUCT_PUBLIC | CONSTRUCT_PRIVATE
        const CONSTRUCT_ALL = 0x30;
        /// Metadata plus public invocation and construction
        const PUBLIC_ONLY = 0x17;
        /// Everything
        const ALL = 0x3F;
    }
}

impl ReflectionPermission {
    /// Parse a single flag name, a hex literal (`0x0F`) or a decimal value
    pub fn parse_one(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("NONE") {
            return Some(Self::empty());
        }
        if let Some(flag) = Self::from_name(&s.to_uppercase()) {
            return Some(flag);
        }
        let bits = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            u8::from_str_radix(hex, 16).ok()?
        } else {
            s.parse::<u8>().ok()?
        };
        Self::from_bits(bits)
    }

    /// Parse flags joined by `|` (e.g. `"INTROSPECT | INVOKE_PUBLIC"`)
    pub fn parse(s: &str) -> ReflectResult<Self> {
        let mut result = Self::empty();
        for part in s.split('|') {
            let flag = Self::parse_one(part)
                .ok_or_else(|| ReflectError::InvalidPermission(s.trim().to_string()))?;
            result |= flag;
        }
        Ok(result)
    }
}

impl Default for ReflectionPermission {
    fn default() -> Self {
        Self::ALL
    }
}

impl fmt::Display for ReflectionPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "NONE");
        }
        bitflags::parser::to_writer(self, f)
    }
}

/// Package permission pattern
#[derive(Debug, Clone, PartialEq)]
pub struct PackageRule {
    /// Pattern (e.g. `"vendor.*"`, `"app.**"`)
    pub pattern: String,
    /// Permissions for matching packages
    pub permissions: ReflectionPermission,
}

impl PackageRule {
    /// Create a rule
    pub fn new(pattern: impl Into<String>, permissions: ReflectionPermission) -> Self {
        Self {
            pattern: pattern.into(),
            permissions,
        }
    }

    /// Check if a package name matches this pattern
    pub fn matches(&self, package: &str) -> bool {
        if self.pattern == "*" || self.pattern == "**" {
            return true;
        }

        if let Some(prefix) = self.pattern.strip_suffix(".**") {
            package == prefix
                || package
                    .strip_prefix(prefix)
                    .is_some_and(|rest| rest.starts_with('.'))
        } else if let Some(prefix) = self.pattern.strip_suffix(".*") {
            package
                .strip_prefix(prefix)
                .and_then(|rest| rest.strip_prefix('.'))
                .is_some_and(|rest| !rest.is_empty() && !rest.contains('.'))
        } else {
            self.pattern == package
        }
    }
}

/// Embedding-level reflection policy
#[derive(Debug, Clone)]
pub struct PermissionPolicy {
    global: ReflectionPermission,
    classes: FxHashMap<String, ReflectionPermission>,
    packages: FxHashMap<String, ReflectionPermission>,
    rules: Vec<PackageRule>,
}

impl Default for PermissionPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl PermissionPolicy {
    /// Policy that grants everything
    pub fn new() -> Self {
        Self {
            global: ReflectionPermission::ALL,
            classes: FxHashMap::default(),
            packages: FxHashMap::default(),
            rules: Vec::new(),
        }
    }

    /// Check if the policy narrows anything at all
    pub fn has_any_restrictions(&self) -> bool {
        self.global != ReflectionPermission::ALL
            || !self.classes.is_empty()
            || !self.packages.is_empty()
            || !self.rules.is_empty()
    }

    /// Set the global default
    pub fn set_global(&mut self, permissions: ReflectionPermission) {
        self.global = permissions;
    }

    /// Global default
    pub fn global(&self) -> ReflectionPermission {
        self.global
    }

    /// Set permissions for a class by qualified name
    pub fn set_class(&mut self, qualified_name: impl Into<String>, permissions: ReflectionPermission) {
        self.classes.insert(qualified_name.into(), permissions);
    }

    /// Set permissions for a package; keys containing `*` become pattern rules
    pub fn set_package(&mut self, package: impl Into<String>, permissions: ReflectionPermission) {
        let package = package.into();
        if package.contains('*') {
            self.rules.push(PackageRule::new(package, permissions));
        } else {
            self.packages.insert(package, permissions);
        }
    }

    /// Resolve permissions for a class name within a package
    pub fn resolve_name(&self, qualified_name: &str, package: &str) -> ReflectionPermission {
        if let Some(perms) = self.classes.get(qualified_name) {
            return *perms;
        }
        if let Some(perms) = self.packages.get(package) {
            return *perms;
        }
        self.rules
            .iter()
            .find(|rule| rule.matches(package))
            .map(|rule| rule.permissions)
            .unwrap_or(self.global)
    }

    /// Effective permissions for a class: what it opens, narrowed by the policy
    pub fn effective(&self, class: &Class) -> ReflectionPermission {
        class.opens() & self.resolve_name(&class.qualified_name(), class.package())
    }

    /// Fail with `AccessDenied` unless `required` is effective for the class
    pub fn check(&self, class: &Class, required: ReflectionPermission) -> ReflectResult<()> {
        if self.effective(class).contains(required) {
            Ok(())
        } else {
            Err(ReflectError::AccessDenied {
                class: class.qualified_name(),
                required,
            })
        }
    }
}
