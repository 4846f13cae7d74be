//! Diagnostics reported alongside pipeline results.
//!
//! Diagnostics are values, not errors: a declaration that triggers one still
//! flows through the rest of the pipeline unless the specific kind says
//! otherwise. They surface to the user through the host's own reporting
//! channel.

use serde::Serialize;

use crate::Location;

/// The kinds of problems the pipeline reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DiagnosticKind {
    /// The annotated declaration is missing the `partial` modifier.
    ///
    /// Advisory only: generation is still attempted, the host's compiler is
    /// what actually enforces mergeability.
    NotPartial,
    /// More than one default-template configuration was found; the first one
    /// encountered wins and every later occurrence gets this diagnostic.
    MultipleDefaults,
    /// An annotation argument failed its upstream type-check.
    ///
    /// Currently never attached: misconfigured declarations are silently
    /// suppressed and the host compiler reports the underlying error.
    MisconfiguredInput,
}

impl DiagnosticKind {
    /// Stable identifier for this diagnostic kind.
    pub fn code(&self) -> &'static str {
        match self {
            DiagnosticKind::NotPartial => "IDF001",
            DiagnosticKind::MultipleDefaults => "IDF002",
            DiagnosticKind::MisconfiguredInput => "IDF003",
        }
    }

    /// Human-readable message for this diagnostic kind.
    pub fn message(&self) -> &'static str {
        match self {
            DiagnosticKind::NotPartial => {
                "annotated declaration is missing the partial modifier"
            }
            DiagnosticKind::MultipleDefaults => {
                "multiple default template configurations; the first occurrence wins"
            }
            DiagnosticKind::MisconfiguredInput => "annotation argument could not be read",
        }
    }
}

/// A single reported problem, pinned to the input node that caused it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DiagnosticInfo {
    /// What went wrong.
    pub kind: DiagnosticKind,
    /// Where it went wrong.
    pub location: Location,
}

impl DiagnosticInfo {
    /// Diagnostic for a declaration missing the partial modifier.
    pub fn not_partial(location: Location) -> Self {
        Self {
            kind: DiagnosticKind::NotPartial,
            location,
        }
    }

    /// Diagnostic for a redundant default-template configuration.
    pub fn multiple_defaults(location: Location) -> Self {
        Self {
            kind: DiagnosticKind::MultipleDefaults,
            location,
        }
    }

    /// Diagnostic for an error-typed annotation argument.
    pub fn misconfigured(location: Location) -> Self {
        Self {
            kind: DiagnosticKind::MisconfiguredInput,
            location,
        }
    }
}

impl std::fmt::Display for DiagnosticInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind.code(), self.kind.message())?;
        if !self.location.is_unknown() {
            write!(f, " (at {})", self.location)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(DiagnosticKind::NotPartial.code(), "IDF001");
        assert_eq!(DiagnosticKind::MultipleDefaults.code(), "IDF002");
        assert_eq!(DiagnosticKind::MisconfiguredInput.code(), "IDF003");
    }

    #[test]
    fn test_display_with_location() {
        let diag = DiagnosticInfo::not_partial(Location::new("Ids.cs", 42, 10));
        let rendered = diag.to_string();
        assert!(rendered.starts_with("IDF001:"));
        assert!(rendered.contains("Ids.cs:42"));
    }

    #[test]
    fn test_display_without_location() {
        let diag = DiagnosticInfo::multiple_defaults(Location::default());
        assert!(!diag.to_string().contains("at"));
    }
}
