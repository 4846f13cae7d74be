//! Data model for the idforge generation pipeline.
//!
//! This crate provides the immutable value types that flow between pipeline
//! stages: the resolved summary of an annotated declaration, the enclosing
//! scope chain needed to regenerate correct nesting, diagnostics, and the
//! final emitted artifact.
//!
//! # Architecture
//!
//! ```text
//! input nodes → idforge-scan (descriptors) → combine → idforge-emit (artifacts)
//! ```
//!
//! Every type here is compared by structural equality and hashed by content,
//! because the caching engine keys its memo tables on these values. A changed
//! input always produces a *new* value; nothing is mutated in place after
//! creation.

mod defaults;
mod descriptor;
mod diagnostic;
mod emission;
mod location;
mod parent;
mod result;

pub use defaults::DefaultsResolution;
pub use descriptor::DeclarationDescriptor;
pub use diagnostic::{DiagnosticInfo, DiagnosticKind};
pub use emission::Emission;
pub use location::Location;
pub use parent::{ParentChain, ParentScope};
pub use result::Diagnosed;
