// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Input node model for the idforge generator.
//!
//! The pipeline does not parse host source text itself; the host hands it a
//! [`Compilation`] of already-materialized nodes: annotated type
//! declarations with their enclosing-scope ancestry, and assembly-scope
//! units carrying program-wide configuration annotations.
//!
//! For tests and simple hosts, a compilation can also be described as a TOML
//! fixture and loaded with [`Compilation::from_str`] or
//! [`Compilation::from_file`].

mod annotation;
mod compilation;
mod declaration;
mod error;
mod load;

pub use annotation::{Annotation, ArgValue, NamedArg};
pub use compilation::{AssemblyUnit, Compilation};
pub use declaration::{Ancestor, TypeDeclaration, TypeKind};
pub use error::{Error, Result};
