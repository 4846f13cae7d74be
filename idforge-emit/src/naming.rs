//! Deterministic artifact naming.

use idforge_ir::DeclarationDescriptor;

/// File-name suffix for generated artifacts.
const ARTIFACT_SUFFIX: &str = ".g.cs";

/// Derive the artifact name for a descriptor.
///
/// Namespace, parent scope names and the declaration name are joined with
/// `.`; generic parameter punctuation is sanitized so the result is a valid
/// file name. Because the full nesting path participates, two declarations
/// in the same run can never collide.
pub fn artifact_name(descriptor: &DeclarationDescriptor) -> String {
    let mut parts: Vec<&str> = Vec::new();
    if !descriptor.namespace.is_empty() {
        parts.push(&descriptor.namespace);
    }
    if let Some(parents) = &descriptor.parents {
        parts.extend(parents.names());
    }
    parts.push(&descriptor.name);

    let mut name = sanitize(&parts.join("."));
    name.push_str(ARTIFACT_SUFFIX);
    name
}

/// Strip generic punctuation: `<` becomes `_`, and `>`, `,` and spaces are
/// removed, so `Outer<T, U>` turns into `Outer_TU`.
fn sanitize(name: &str) -> String {
    name.chars()
        .filter_map(|c| match c {
            '<' => Some('_'),
            '>' | ',' | ' ' => None,
            other => Some(other),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use idforge_ir::{ParentChain, ParentScope};

    use super::*;

    fn descriptor(namespace: &str, parents: Option<ParentChain>, name: &str) -> DeclarationDescriptor {
        DeclarationDescriptor {
            name: name.into(),
            namespace: namespace.into(),
            template_name: None,
            parents,
            is_valid: true,
        }
    }

    #[test]
    fn test_top_level_name() {
        assert_eq!(
            artifact_name(&descriptor("Shop", None, "OrderId")),
            "Shop.OrderId.g.cs"
        );
    }

    #[test]
    fn test_global_scope_name() {
        assert_eq!(artifact_name(&descriptor("", None, "OrderId")), "OrderId.g.cs");
    }

    #[test]
    fn test_nested_generic_name() {
        let parents = ParentChain::from_outermost(vec![
            ParentScope::new("class", "Outer<T, U>", ""),
            ParentScope::new("struct", "Mid", ""),
        ]);
        assert_eq!(
            artifact_name(&descriptor("Shop", parents, "Inner")),
            "Shop.Outer_TU.Mid.Inner.g.cs"
        );
    }
}
