//! Incremental generator for strongly-typed identifier wrappers.
//!
//! idforge turns annotated type declarations into generated wrapper types,
//! using pluggable text templates, and re-emits every generated type inside
//! its original namespace and type nesting. The whole pipeline is wired
//! through content-addressed memo tables, so re-running over a large,
//! frequently re-parsed program only recomputes the declarations whose
//! relevant inputs actually changed.
//!
//! # Pipeline
//!
//! ```text
//! declarations ──▶ scan ─────────┐
//! assembly units ─▶ defaults ──▶ combine ──▶ emit ──▶ artifacts
//! template files ─▶ repository ──┘
//! ```
//!
//! The entry point is [`Generator`]: construct one, keep it alive across
//! runs, and call [`Generator::run`] with the current [`Compilation`] and
//! template resources. The returned [`GenerationRun`] carries the
//! artifacts, the diagnostics stream and the set of artifacts that were
//! actually recomputed.
//!
//! # Example
//!
//! ```
//! use idforge::{Annotation, Compilation, Generator, TemplateResource, TypeDeclaration, TypeKind};
//!
//! let compilation = Compilation::new().declaration(
//!     TypeDeclaration::new("OrderId", TypeKind::Struct)
//!         .partial()
//!         .annotation(Annotation::new("IdForge.TypedId").arg("Int")),
//! );
//! let resources = vec![TemplateResource::new(
//!     "IdForge_Int.txt",
//!     "readonly partial struct {NAME} { }",
//! )];
//!
//! let generator = Generator::new();
//! let run = generator.run(&compilation, &resources).unwrap();
//! assert_eq!(run.artifacts.len(), 1);
//! assert_eq!(run.artifacts[0].artifact_name, "OrderId.g.cs");
//! ```

mod generator;

pub use generator::{GenerationRun, Generator, RunStats};
pub use idforge_emit::{ArtifactWriter, FALLBACK_TEMPLATE, artifact_name, emit};
pub use idforge_incremental::{CacheStats, CancelToken, Cancelled};
pub use idforge_ir::{
    DeclarationDescriptor, DefaultsResolution, Diagnosed, DiagnosticInfo, DiagnosticKind,
    Emission, Location, ParentChain, ParentScope,
};
pub use idforge_scan::{
    TYPED_ID_ANNOTATION, TYPED_ID_DEFAULTS_ANNOTATION, is_candidate, scan_declaration,
};
pub use idforge_syntax::{
    Ancestor, Annotation, ArgValue, AssemblyUnit, Compilation, NamedArg, TypeDeclaration, TypeKind,
};
pub use idforge_templates::{
    RejectReason, RejectedTemplate, Template, TemplateResource, TemplateSet,
};
