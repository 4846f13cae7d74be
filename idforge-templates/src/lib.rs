//! Template repository for the idforge generator.
//!
//! Templates are opaque text resources named by convention:
//! `IdForge_<name>.txt`, with the prefix and the suffix matched
//! case-insensitively. The part between them is the template's logical name,
//! which declarations select case-insensitively.
//!
//! Resources that match the convention but are unusable (blank derived name,
//! unreadable content) are kept in a separate rejected stream instead of the
//! lookup set; they are not currently surfaced as user diagnostics.

mod resource;
mod set;

pub use resource::{TEMPLATE_PREFIX, TEMPLATE_SUFFIX, TemplateResource};
pub use set::{RejectReason, RejectedTemplate, Template, TemplateSet, parse_resource};
