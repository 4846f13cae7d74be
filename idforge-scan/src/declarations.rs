//! Scanning annotated declarations into descriptors.

use idforge_ir::{DeclarationDescriptor, Diagnosed, DiagnosticInfo};
use idforge_syntax::{ArgValue, TypeDeclaration, TypeKind};

use crate::{
    annotations::constructor_template, is_typed_id, namespace_of, parent_chain_of,
};

/// The predicate deciding whether a declaration is worth scanning at all:
/// a struct declaration carrying the recognized annotation.
pub fn is_candidate(declaration: &TypeDeclaration) -> bool {
    declaration.kind == TypeKind::Struct && declaration.annotations.iter().any(is_typed_id)
}

/// Scan one annotated declaration into a descriptor plus diagnostics.
///
/// Returns `None` when the declaration is not a candidate; the scanner
/// simply does not run for it.
///
/// Configuration precedence: the constructor-style argument is read first,
/// then named arguments are scanned and the last successfully-typed value
/// wins. Any error-typed argument marks the whole declaration invalid and
/// generation is suppressed for it. No partial output is ever produced for
/// a misconfigured declaration.
///
/// A missing `partial` modifier only attaches an advisory diagnostic; the
/// descriptor stays usable and emission is still attempted.
pub fn scan_declaration(declaration: &TypeDeclaration) -> Option<Diagnosed<DeclarationDescriptor>> {
    if declaration.kind != TypeKind::Struct {
        return None;
    }
    let annotation = declaration.annotations.iter().find(|a| is_typed_id(a))?;

    let (mut template_name, mut misconfigured) = constructor_template(annotation);

    for named in &annotation.named {
        match &named.value {
            ArgValue::Error => {
                misconfigured = true;
                break;
            }
            ArgValue::Text(text) => {
                template_name = Some(text.clone());
                if text.trim().is_empty() {
                    misconfigured = true;
                }
            }
        }
    }

    if misconfigured {
        return Some(Diagnosed::clean(DeclarationDescriptor::invalid()));
    }

    let mut diagnostics = Vec::new();
    if !declaration.is_partial {
        diagnostics.push(DiagnosticInfo::not_partial(declaration.location.clone()));
    }

    let descriptor = DeclarationDescriptor {
        name: declaration.name.clone(),
        namespace: namespace_of(&declaration.ancestors),
        template_name,
        parents: parent_chain_of(&declaration.ancestors),
        is_valid: true,
    };
    Some(Diagnosed::new(descriptor, diagnostics))
}

#[cfg(test)]
mod tests {
    use idforge_ir::{DiagnosticKind, Location};
    use idforge_syntax::{Ancestor, Annotation};

    use super::*;
    use crate::TYPED_ID_ANNOTATION;

    fn annotated(name: &str) -> TypeDeclaration {
        TypeDeclaration::new(name, TypeKind::Struct)
            .partial()
            .annotation(Annotation::new(TYPED_ID_ANNOTATION).arg("Int"))
    }

    #[test]
    fn test_unannotated_declaration_is_skipped() {
        let plain = TypeDeclaration::new("OrderId", TypeKind::Struct).partial();
        assert!(scan_declaration(&plain).is_none());
        assert!(!is_candidate(&plain));
    }

    #[test]
    fn test_non_struct_is_skipped() {
        let class = TypeDeclaration::new("OrderId", TypeKind::Class)
            .partial()
            .annotation(Annotation::new(TYPED_ID_ANNOTATION));
        assert!(scan_declaration(&class).is_none());
        assert!(!is_candidate(&class));
    }

    #[test]
    fn test_constructor_argument_is_read() {
        let scanned = scan_declaration(&annotated("OrderId")).unwrap();
        assert!(scanned.value.is_valid);
        assert_eq!(scanned.value.template_name.as_deref(), Some("Int"));
        assert!(scanned.diagnostics.is_empty());
    }

    #[test]
    fn test_no_arguments_means_use_defaults() {
        let declaration = TypeDeclaration::new("OrderId", TypeKind::Struct)
            .partial()
            .annotation(Annotation::new(TYPED_ID_ANNOTATION));
        let scanned = scan_declaration(&declaration).unwrap();
        assert!(scanned.value.is_valid);
        assert_eq!(scanned.value.template_name, None);
    }

    #[test]
    fn test_last_named_argument_wins() {
        let declaration = TypeDeclaration::new("OrderId", TypeKind::Struct)
            .partial()
            .annotation(
                Annotation::new(TYPED_ID_ANNOTATION)
                    .arg("Ctor")
                    .named("templateName", ArgValue::Text("First".into()))
                    .named("templateName", ArgValue::Text("Second".into())),
            );
        let scanned = scan_declaration(&declaration).unwrap();
        assert_eq!(scanned.value.template_name.as_deref(), Some("Second"));
    }

    #[test]
    fn test_error_argument_suppresses_generation() {
        let declaration = TypeDeclaration::new("OrderId", TypeKind::Struct)
            .partial()
            .annotation(Annotation::new(TYPED_ID_ANNOTATION).error_arg());
        let scanned = scan_declaration(&declaration).unwrap();

        assert!(!scanned.value.is_valid);
        // Suppression is silent: the host compiler reports the bad literal.
        assert!(scanned.diagnostics.is_empty());
    }

    #[test]
    fn test_error_named_argument_stops_the_scan() {
        let declaration = TypeDeclaration::new("OrderId", TypeKind::Struct)
            .partial()
            .annotation(
                Annotation::new(TYPED_ID_ANNOTATION)
                    .named("templateName", ArgValue::Error)
                    .named("templateName", ArgValue::Text("Ignored".into())),
            );
        let scanned = scan_declaration(&declaration).unwrap();
        assert!(!scanned.value.is_valid);
    }

    #[test]
    fn test_missing_partial_is_advisory() {
        let declaration = TypeDeclaration::new("OrderId", TypeKind::Struct)
            .annotation(Annotation::new(TYPED_ID_ANNOTATION).arg("Int"))
            .at(Location::new("Ids.cs", 10, 30));
        let scanned = scan_declaration(&declaration).unwrap();

        assert!(scanned.value.is_valid);
        assert_eq!(scanned.diagnostics.len(), 1);
        assert_eq!(scanned.diagnostics[0].kind, DiagnosticKind::NotPartial);
        assert_eq!(scanned.diagnostics[0].location.file, "Ids.cs");
    }

    #[test]
    fn test_descriptor_captures_scopes() {
        let declaration = annotated("OrderId")
            .inside(Ancestor::Type {
                kind: TypeKind::Class,
                name: "Orders".into(),
                generics: String::new(),
                constraints: String::new(),
            })
            .inside(Ancestor::Namespace {
                name: "Shop".into(),
            });
        let scanned = scan_declaration(&declaration).unwrap();

        assert_eq!(scanned.value.namespace, "Shop");
        let parents = scanned.value.parents.as_ref().unwrap();
        assert_eq!(parents.depth(), 1);
        assert_eq!(parents.outermost().name, "Orders");
    }
}
