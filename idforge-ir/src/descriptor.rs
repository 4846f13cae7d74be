//! Resolved summaries of annotated declarations.

use serde::Serialize;

use crate::ParentChain;

/// Everything the emitter needs to know about one annotated declaration.
///
/// Descriptors are produced by the scanner and never mutated afterwards; a
/// changed declaration yields a brand new descriptor. Structural equality and
/// hashing make them usable as memo-table keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DeclarationDescriptor {
    /// The declaration's own name.
    pub name: String,
    /// Dotted namespace the declaration lives in; empty for the global scope.
    pub namespace: String,
    /// Template name requested on the annotation, if any.
    pub template_name: Option<String>,
    /// Enclosing type scopes, outermost first; `None` for top-level types.
    pub parents: Option<ParentChain>,
    /// False when the annotation's configuration could not be read; emission
    /// is suppressed for invalid descriptors.
    pub is_valid: bool,
}

impl DeclarationDescriptor {
    /// The placeholder descriptor for a misconfigured declaration.
    ///
    /// Carries no usable data; it exists only so the scan result can be
    /// cached and filtered like any other.
    pub fn invalid() -> Self {
        Self {
            name: String::new(),
            namespace: String::new(),
            template_name: None,
            parents: None,
            is_valid: false,
        }
    }

    /// Returns true if the declaration is nested inside other type scopes.
    pub fn is_nested(&self) -> bool {
        self.parents.is_some()
    }
}
