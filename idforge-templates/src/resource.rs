//! Raw template resources as handed over by the host.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// File-name prefix that marks a resource as a template.
pub const TEMPLATE_PREFIX: &str = "IdForge_";

/// File-name suffix for template resources.
pub const TEMPLATE_SUFFIX: &str = ".txt";

/// A named text resource offered to the template repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateResource {
    /// The resource's path as enumerated by the host.
    pub path: String,
    /// The resource's text, or `None` when it could not be read.
    pub content: Option<String>,
}

impl TemplateResource {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: Some(content.into()),
        }
    }

    /// A resource whose content could not be read.
    pub fn unreadable(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: None,
        }
    }

    /// Returns true if the resource's file name matches the
    /// `IdForge_<name>.txt` convention, ignoring ASCII case on both ends.
    pub fn matches_convention(&self) -> bool {
        self.file_name().is_some_and(|name| {
            has_prefix_ignore_case(name, TEMPLATE_PREFIX)
                && has_suffix_ignore_case(name, TEMPLATE_SUFFIX)
                && name.len() >= TEMPLATE_PREFIX.len() + TEMPLATE_SUFFIX.len()
        })
    }

    /// The logical template name: the file-name stem with the prefix
    /// stripped. `None` when the resource does not match the convention;
    /// the returned name may still be blank.
    pub fn logical_name(&self) -> Option<String> {
        if !self.matches_convention() {
            return None;
        }
        let name = self.file_name()?;
        let stem = name.get(..name.len() - TEMPLATE_SUFFIX.len())?;
        Some(stem.get(TEMPLATE_PREFIX.len()..)?.to_string())
    }

    fn file_name(&self) -> Option<&str> {
        Path::new(&self.path).file_name()?.to_str()
    }
}

fn has_prefix_ignore_case(name: &str, prefix: &str) -> bool {
    name.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

fn has_suffix_ignore_case(name: &str, suffix: &str) -> bool {
    name.len() >= suffix.len()
        && name
            .get(name.len() - suffix.len()..)
            .is_some_and(|tail| tail.eq_ignore_ascii_case(suffix))
}
