//! Type declaration nodes and their enclosing-scope ancestry.

use idforge_ir::Location;
use serde::{Deserialize, Serialize};

use crate::Annotation;

/// The kind of a type declaration or type scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Class,
    Struct,
    Record,
}

impl TypeKind {
    /// The declaration keyword for this kind.
    pub fn keyword(&self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Struct => "struct",
            TypeKind::Record => "record",
        }
    }
}

/// One ancestor scope of a declaration.
///
/// Ancestors are listed innermost first: index 0 is the scope immediately
/// enclosing the declaration, the last entry is the outermost scope in the
/// file. This mirrors walking a syntax tree upwards through parent links.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "scope", rename_all = "lowercase")]
pub enum Ancestor {
    /// An enclosing namespace scope.
    Namespace { name: String },
    /// An enclosing type scope eligible for the parent chain.
    Type {
        kind: TypeKind,
        name: String,
        /// Generic parameter list text, verbatim (e.g. `<T>`). Empty when
        /// the scope is not generic.
        #[serde(default)]
        generics: String,
        /// Generic constraint clauses, verbatim. Empty when none.
        #[serde(default)]
        constraints: String,
    },
    /// Any other enclosing scope (a method body, an accessor, ...).
    /// Terminates both the namespace search and the parent-chain walk.
    Other,
}

/// A user-written type declaration, as handed over by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeDeclaration {
    /// The declared type's name.
    pub name: String,
    /// What kind of type declaration this is.
    pub kind: TypeKind,
    /// Whether the declaration carries the `partial` modifier.
    #[serde(default, rename = "partial")]
    pub is_partial: bool,
    /// Annotations attached to the declaration, in source order.
    #[serde(default, rename = "annotation")]
    pub annotations: Vec<Annotation>,
    /// Enclosing scopes, innermost first.
    #[serde(default, rename = "ancestor")]
    pub ancestors: Vec<Ancestor>,
    /// Where the declaration appears.
    #[serde(default)]
    pub location: Location,
}

impl TypeDeclaration {
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            is_partial: false,
            annotations: Vec::new(),
            ancestors: Vec::new(),
            location: Location::default(),
        }
    }

    /// Mark the declaration as `partial`.
    pub fn partial(mut self) -> Self {
        self.is_partial = true;
        self
    }

    /// Attach an annotation.
    pub fn annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Add the next enclosing scope, working outwards: the first call adds
    /// the immediate parent, later calls add scopes further out.
    pub fn inside(mut self, ancestor: Ancestor) -> Self {
        self.ancestors.push(ancestor);
        self
    }

    /// Set the declaration's location.
    pub fn at(mut self, location: Location) -> Self {
        self.location = location;
        self
    }
}
