//! Investigator configuration
//!
//! The only tunable is the reflection permission policy. It can be built in
//! code or loaded from TOML:
//!
//! ```toml
//! [reflect.permissions]
//! global = "ALL"
//!
//! [reflect.permissions.classes]
//! "app.Secret" = "PUBLIC_ONLY"
//!
//! [reflect.permissions.packages]
//! "app.internal" = "READ_ALL"
//! "vendor.*" = "INTROSPECT | HIERARCHY"
//! ```
//!
//! Package patterns are tried longest first, so `vendor.acme.*` wins over
//! `vendor.**` regardless of their order in the file.

use std::collections::BTreeMap;
use std::path::Path;

use introspect_meta::{PermissionPolicy, ReflectionPermission};
use serde::Deserialize;

use crate::error::ConfigError;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    reflect: ReflectSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ReflectSection {
    #[serde(default)]
    permissions: PermissionsSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PermissionsSection {
    global: Option<String>,
    #[serde(default)]
    classes: BTreeMap<String, String>,
    #[serde(default)]
    packages: BTreeMap<String, String>,
}

fn parse_permission(key: &str, value: &str) -> Result<ReflectionPermission, ConfigError> {
    ReflectionPermission::parse(value).map_err(|source| ConfigError::Permission {
        key: key.to_string(),
        source,
    })
}

/// Settings for an [`Investigator`](crate::Investigator)
#[derive(Debug, Clone, Default)]
pub struct InvestigatorConfig {
    policy: PermissionPolicy,
}

impl InvestigatorConfig {
    /// Permissive configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the permission policy
    pub fn with_policy(mut self, policy: PermissionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Permission policy in force
    pub fn policy(&self) -> &PermissionPolicy {
        &self.policy
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;
        let section = file.reflect.permissions;
        let mut policy = PermissionPolicy::new();

        if let Some(global) = &section.global {
            policy.set_global(parse_permission("global", global)?);
        }
        for (class, value) in &section.classes {
            policy.set_class(class.as_str(), parse_permission(class, value)?);
        }

        let mut packages: Vec<(&String, &String)> = section.packages.iter().collect();
        packages.sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        for (package, value) in packages {
            policy.set_package(package.as_str(), parse_permission(package, value)?);
        }

        tracing::debug!(restricted = policy.has_any_restrictions(), "loaded reflection config");
        Ok(Self { policy })
    }

    /// Load configuration from a TOML file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }
}
