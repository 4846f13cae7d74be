//! Artifact emission for the idforge generator.
//!
//! Given a resolved descriptor, the template mapping and the run-wide
//! default template name, the emitter either produces one complete artifact
//! or nothing at all. Emission is pure string assembly: select a template,
//! substitute the descriptor's context into its body, wrap the result in
//! the declaration's original namespace/type nesting, and name the artifact
//! deterministically.
//!
//! Writing artifacts to disk is a separate concern, see [`ArtifactWriter`].

mod emitter;
mod naming;
mod scaffold;
mod write;

pub use emitter::{FALLBACK_TEMPLATE, emit, select_template_name};
pub use naming::artifact_name;
pub use scaffold::ScaffoldWriter;
pub use write::ArtifactWriter;
