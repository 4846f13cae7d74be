//! Declaration scanning and configuration resolution.
//!
//! Three pure analyses over the input node model, each returning its result
//! together with any diagnostics it produced:
//!
//! - [`scan_declaration`]: one annotated type declaration to a
//!   [`idforge_ir::DeclarationDescriptor`]
//! - [`resolve_defaults`]: one assembly-scope unit to the program-wide
//!   default template configuration
//! - [`namespace_of`] / [`parent_chain_of`]: enclosing-scope
//!   reconstruction for correct re-emission
//!
//! Nothing here touches I/O or global state; every function is a candidate
//! for content-addressed memoization.

mod annotations;
mod declarations;
mod defaults;
mod scopes;

pub use annotations::{
    TYPED_ID_ANNOTATION, TYPED_ID_DEFAULTS_ANNOTATION, is_typed_id, is_typed_id_defaults,
};
pub use declarations::{is_candidate, scan_declaration};
pub use defaults::{has_defaults_annotation, resolve_defaults};
pub use scopes::{namespace_of, parent_chain_of};
