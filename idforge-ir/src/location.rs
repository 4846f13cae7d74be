//! Source locations for input nodes and diagnostics.

use serde::{Deserialize, Serialize};

/// A position in a host source file.
///
/// Locations are supplied by the host on input nodes and attached verbatim to
/// the diagnostics produced for those nodes. The pipeline never interprets
/// them; it only carries them through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Path of the file the node was read from. Empty when unknown.
    #[serde(default)]
    pub file: String,
    /// Byte offset of the node within the file.
    #[serde(default)]
    pub offset: usize,
    /// Length of the node in bytes.
    #[serde(default)]
    pub len: usize,
}

impl Location {
    /// Create a location covering `len` bytes at `offset` in `file`.
    pub fn new(file: impl Into<String>, offset: usize, len: usize) -> Self {
        Self {
            file: file.into(),
            offset,
            len,
        }
    }

    /// Returns true if this is the unknown location.
    pub fn is_unknown(&self) -> bool {
        self.file.is_empty()
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_unknown() {
            write!(f, "<unknown>")
        } else {
            write!(f, "{}:{}", self.file, self.offset)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_known() {
        let loc = Location::new("Shop/OrderId.cs", 120, 8);
        assert_eq!(loc.to_string(), "Shop/OrderId.cs:120");
    }

    #[test]
    fn test_display_unknown() {
        assert_eq!(Location::default().to_string(), "<unknown>");
        assert!(Location::default().is_unknown());
    }
}
