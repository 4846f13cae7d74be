//! Snapshot tests for emitted artifacts.
//!
//! Run `cargo insta review` to update snapshots when making intentional
//! changes to the emission format.

use idforge::{
    Ancestor, Annotation, Compilation, Generator, TemplateResource, TypeDeclaration, TypeKind,
};

fn generate_one(compilation: &Compilation, resources: &[TemplateResource]) -> String {
    let run = Generator::new().run(compilation, resources).unwrap();
    assert_eq!(run.artifacts.len(), 1, "expected exactly one artifact");
    run.artifacts[0].source_text.clone()
}

#[test]
fn test_simple_artifact() {
    let compilation = Compilation::new().declaration(
        TypeDeclaration::new("OrderId", TypeKind::Struct)
            .partial()
            .annotation(Annotation::new("IdForge.TypedId").arg("Int"))
            .inside(Ancestor::Namespace {
                name: "Shop".into(),
            }),
    );
    let resources = vec![TemplateResource::new(
        "IdForge_Int.txt",
        "readonly partial struct {NAME}\n{\n    public int Value { get; }\n}",
    )];

    let artifact = generate_one(&compilation, &resources);
    insta::assert_snapshot!("simple_artifact", artifact);
}

#[test]
fn test_nested_artifact() {
    let compilation = Compilation::new().declaration(
        TypeDeclaration::new("Inner", TypeKind::Struct)
            .partial()
            .annotation(Annotation::new("IdForge.TypedId").arg("Id"))
            .inside(Ancestor::Type {
                kind: TypeKind::Struct,
                name: "Mid".into(),
                generics: String::new(),
                constraints: String::new(),
            })
            .inside(Ancestor::Type {
                kind: TypeKind::Class,
                name: "Outer".into(),
                generics: "<T>".into(),
                constraints: String::new(),
            })
            .inside(Ancestor::Namespace {
                name: "Shop".into(),
            })
            .inside(Ancestor::Namespace {
                name: "Acme".into(),
            }),
    );
    let resources = vec![TemplateResource::new(
        "IdForge_Id.txt",
        "partial struct {NAME} { }",
    )];

    let artifact = generate_one(&compilation, &resources);
    insta::assert_snapshot!("nested_artifact", artifact);
}
