//! Serializable snapshot of every query against a subject

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Result of running every metadata query against the loaded subject.
///
/// Values follow the empty-value convention of the individual queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectReport {
    /// Qualified name of the subject's class
    pub class_name: String,
    /// Simple name of the subject's class
    pub simple_name: String,
    /// Declared methods on the subject's own class
    pub total_methods: usize,
    /// Declared constructors on the subject's own class
    pub total_constructors: usize,
    /// Declared fields on the subject's own class
    pub total_fields: usize,
    /// Declared final fields
    pub constant_fields: usize,
    /// Declared static methods
    pub static_methods: usize,
    /// Simple names of directly declared interfaces
    pub interfaces: BTreeSet<String>,
    /// Whether the class extends something other than the root type
    pub extending: bool,
    /// Simple name of the non-root parent, or empty
    pub parent: String,
    /// Whether the non-root parent is abstract
    pub parent_abstract: bool,
    /// Field names declared anywhere in the hierarchy
    pub all_field_names: BTreeSet<String>,
    /// Root-most first, subject last, root type excluded
    pub inheritance_chain: Vec<String>,
}

impl SubjectReport {
    /// Render as pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
