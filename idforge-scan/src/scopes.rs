//! Enclosing-scope reconstruction.
//!
//! Generated code must land back inside the namespace and type nesting the
//! original declaration was written in. These walks recover that context
//! from a declaration's ancestor list (innermost first, mirroring upward
//! traversal of a syntax tree).

use idforge_ir::{ParentChain, ParentScope};
use idforge_syntax::Ancestor;

/// The dotted namespace a declaration lives in.
///
/// Walks outwards past any enclosing type scopes until the first namespace
/// scope, then concatenates the contiguous run of namespace ancestors
/// outer-to-inner with `.`. Returns the empty string for the global scope.
pub fn namespace_of(ancestors: &[Ancestor]) -> String {
    let mut iter = ancestors.iter();

    let innermost = loop {
        match iter.next() {
            Some(Ancestor::Namespace { name }) => break name,
            Some(_) => continue,
            None => return String::new(),
        }
    };

    let mut namespace = innermost.clone();
    for ancestor in iter {
        match ancestor {
            Ancestor::Namespace { name } => namespace = format!("{name}.{namespace}"),
            _ => break,
        }
    }
    namespace
}

/// The chain of type scopes enclosing a declaration, outermost first.
///
/// Takes the contiguous leading run of class/struct/record ancestors; the
/// first ancestor of any other kind ends the walk. Generic parameter lists
/// and constraint clauses are carried verbatim.
pub fn parent_chain_of(ancestors: &[Ancestor]) -> Option<ParentChain> {
    let mut scopes = Vec::new();

    for ancestor in ancestors {
        match ancestor {
            Ancestor::Type {
                kind,
                name,
                generics,
                constraints,
            } => scopes.push(ParentScope::new(
                kind.keyword(),
                format!("{name}{generics}"),
                constraints.clone(),
            )),
            _ => break,
        }
    }

    // Collected innermost-first; the chain is outermost-first.
    scopes.reverse();
    ParentChain::from_outermost(scopes)
}

#[cfg(test)]
mod tests {
    use idforge_syntax::TypeKind;

    use super::*;

    fn type_scope(name: &str) -> Ancestor {
        Ancestor::Type {
            kind: TypeKind::Class,
            name: name.into(),
            generics: String::new(),
            constraints: String::new(),
        }
    }

    fn namespace(name: &str) -> Ancestor {
        Ancestor::Namespace { name: name.into() }
    }

    #[test]
    fn test_global_scope_has_empty_namespace() {
        assert_eq!(namespace_of(&[]), "");
        assert_eq!(namespace_of(&[type_scope("Outer")]), "");
    }

    #[test]
    fn test_namespace_skips_type_scopes() {
        let ancestors = [type_scope("Outer"), namespace("Shop")];
        assert_eq!(namespace_of(&ancestors), "Shop");
    }

    #[test]
    fn test_nested_namespaces_concatenate_outer_to_inner() {
        let ancestors = [namespace("Billing"), namespace("Shop"), namespace("Acme")];
        assert_eq!(namespace_of(&ancestors), "Acme.Shop.Billing");
    }

    #[test]
    fn test_namespace_run_stops_at_non_namespace() {
        // A namespace beyond an intervening non-namespace scope is not part
        // of the contiguous run.
        let ancestors = [namespace("Inner"), Ancestor::Other, namespace("Outer")];
        assert_eq!(namespace_of(&ancestors), "Inner");
    }

    #[test]
    fn test_parent_chain_outermost_first() {
        let ancestors = [
            Ancestor::Type {
                kind: TypeKind::Struct,
                name: "Mid".into(),
                generics: String::new(),
                constraints: String::new(),
            },
            Ancestor::Type {
                kind: TypeKind::Class,
                name: "Outer".into(),
                generics: "<T>".into(),
                constraints: "where T : new()".into(),
            },
            namespace("Shop"),
        ];
        let chain = parent_chain_of(&ancestors).unwrap();

        assert_eq!(chain.depth(), 2);
        assert_eq!(chain.outermost().name, "Outer<T>");
        assert_eq!(chain.outermost().keyword, "class");
        assert_eq!(chain.outermost().constraints, "where T : new()");
        assert_eq!(chain.scopes()[1].name, "Mid");
        assert_eq!(chain.scopes()[1].keyword, "struct");
    }

    #[test]
    fn test_parent_chain_stops_at_non_type_scope() {
        let ancestors = [
            type_scope("Inner"),
            Ancestor::Other,
            type_scope("Unreachable"),
        ];
        let chain = parent_chain_of(&ancestors).unwrap();
        assert_eq!(chain.depth(), 1);
        assert_eq!(chain.outermost().name, "Inner");
    }

    #[test]
    fn test_top_level_declaration_has_no_chain() {
        assert!(parent_chain_of(&[namespace("Shop")]).is_none());
    }
}
