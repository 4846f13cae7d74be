//! Whole-compilation input: declarations plus assembly-scope units.

use idforge_ir::Location;
use serde::{Deserialize, Serialize};

use crate::{Annotation, TypeDeclaration};

/// An assembly-scope node carrying program-wide configuration annotations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssemblyUnit {
    /// Identifier for the unit, typically the file that declared the
    /// assembly-scope annotations.
    #[serde(default)]
    pub name: String,
    /// Annotations attached at assembly scope, in source order.
    #[serde(default, rename = "annotation")]
    pub annotations: Vec<Annotation>,
    /// Where the unit's annotation list appears.
    #[serde(default)]
    pub location: Location,
}

impl AssemblyUnit {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotations: Vec::new(),
            location: Location::default(),
        }
    }

    /// Attach an assembly-scope annotation.
    pub fn annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }
}

/// The full input to one generator run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compilation {
    /// All type declarations the host considers candidates.
    #[serde(default, rename = "declaration")]
    pub declarations: Vec<TypeDeclaration>,
    /// All assembly-scope units.
    #[serde(default, rename = "unit")]
    pub units: Vec<AssemblyUnit>,
}

impl Compilation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a declaration.
    pub fn declaration(mut self, declaration: TypeDeclaration) -> Self {
        self.declarations.push(declaration);
        self
    }

    /// Add an assembly-scope unit.
    pub fn unit(mut self, unit: AssemblyUnit) -> Self {
        self.units.push(unit);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty() && self.units.is_empty()
    }
}
