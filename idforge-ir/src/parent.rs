//! Enclosing-scope chains for nested declarations.

use serde::Serialize;

/// One enclosing type scope of an annotated declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ParentScope {
    /// The scope's declaration keyword (`class`, `struct`, or `record`).
    pub keyword: String,
    /// The scope's name with its generic parameter list text appended
    /// verbatim, e.g. `Outer<T>`.
    pub name: String,
    /// The scope's generic constraint clauses, verbatim. Empty when none.
    pub constraints: String,
}

impl ParentScope {
    pub fn new(
        keyword: impl Into<String>,
        name: impl Into<String>,
        constraints: impl Into<String>,
    ) -> Self {
        Self {
            keyword: keyword.into(),
            name: name.into(),
            constraints: constraints.into(),
        }
    }
}

/// The ordered chain of type scopes enclosing a declaration.
///
/// The chain runs outermost → innermost and never contains the declaration
/// itself; its length equals the enclosing-scope depth. Only class, struct
/// and record scopes appear; the walk that builds the chain stops at the
/// first intervening scope of any other kind. Nesting mirrors lexical scope,
/// so no cycles are possible.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ParentChain {
    scopes: Vec<ParentScope>,
}

impl ParentChain {
    /// Build a chain from scopes ordered outermost first.
    ///
    /// Returns `None` for an empty list: a declaration with no enclosing
    /// type scopes has no chain at all.
    pub fn from_outermost(scopes: Vec<ParentScope>) -> Option<Self> {
        if scopes.is_empty() {
            None
        } else {
            Some(Self { scopes })
        }
    }

    /// The outermost enclosing scope, the head of the chain.
    pub fn outermost(&self) -> &ParentScope {
        &self.scopes[0]
    }

    /// All scopes, outermost first.
    pub fn scopes(&self) -> &[ParentScope] {
        &self.scopes
    }

    /// Number of enclosing scopes.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Scope names (with generics), outermost first.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.scopes.iter().map(|scope| scope.name.as_str())
    }

    /// Scope names joined with `.`, e.g. `Outer<T>.Mid`.
    pub fn dotted_names(&self) -> String {
        self.names().collect::<Vec<_>>().join(".")
    }
}
