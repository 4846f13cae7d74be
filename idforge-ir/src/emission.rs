//! Final generated artifacts.

use serde::Serialize;

/// One generated source artifact, ready to hand back to the host.
///
/// Write-once: an emission is produced in full or not at all; the pipeline
/// never publishes a partially assembled artifact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Emission {
    /// Unique artifact name, derived from namespace, parent chain and
    /// declaration name.
    pub artifact_name: String,
    /// The complete generated source text.
    pub source_text: String,
}

impl Emission {
    pub fn new(artifact_name: impl Into<String>, source_text: impl Into<String>) -> Self {
        Self {
            artifact_name: artifact_name.into(),
            source_text: source_text.into(),
        }
    }
}
