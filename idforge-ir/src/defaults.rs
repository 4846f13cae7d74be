//! Resolved program-wide default configuration.

use serde::Serialize;

/// Outcome of scanning one assembly-scope unit for default configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DefaultsResolution {
    /// The selected default template name. `None` when the configuration
    /// carried no usable name.
    pub template_name: Option<String>,
    /// False when an argument of the configuration failed its type-check;
    /// invalid resolutions are dropped before default selection.
    pub is_valid: bool,
}

impl DefaultsResolution {
    pub fn valid(template_name: Option<String>) -> Self {
        Self {
            template_name,
            is_valid: true,
        }
    }

    /// The resolution for a misconfigured occurrence: no name, not usable.
    pub fn invalid() -> Self {
        Self {
            template_name: None,
            is_valid: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_resolution_has_no_name() {
        let resolution = DefaultsResolution::invalid();
        assert!(!resolution.is_valid);
        assert!(resolution.template_name.is_none());
    }
}
