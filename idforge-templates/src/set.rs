//! The usable template mapping and the rejected-resource stream.

use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;

use crate::TemplateResource;

/// A usable template: logical name plus body text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Template {
    /// Logical name as derived from the resource, original casing kept.
    pub name: String,
    /// The opaque template body.
    pub content: String,
}

impl Template {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Why a convention-matching resource was excluded from the usable set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize)]
pub enum RejectReason {
    #[error("derived template name is blank")]
    BlankName,
    #[error("template content could not be read")]
    UnreadableContent,
}

/// A convention-matching resource that could not be used.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RejectedTemplate {
    /// The offending resource's path.
    pub path: String,
    pub reason: RejectReason,
}

/// Classify one convention-matching resource.
///
/// Resources that do not match the naming convention are not template
/// candidates at all and should be filtered out before this point; calling
/// this on one rejects it as blank-named.
pub fn parse_resource(resource: &TemplateResource) -> Result<Template, RejectedTemplate> {
    let name = resource.logical_name().unwrap_or_default();
    if name.trim().is_empty() {
        return Err(RejectedTemplate {
            path: resource.path.clone(),
            reason: RejectReason::BlankName,
        });
    }
    match &resource.content {
        Some(content) => Ok(Template::new(name, content.clone())),
        None => Err(RejectedTemplate {
            path: resource.path.clone(),
            reason: RejectReason::UnreadableContent,
        }),
    }
}

/// The case-insensitive logical-name → template mapping for one run.
///
/// Lookup keys are folded to ASCII lowercase. When two resources derive the
/// same logical name, the one observed later in enumeration order wins; the
/// enumeration order itself is whatever the host produced.
///
/// Entries are stored sorted by folded name so that equal sets are equal
/// values regardless of the order they were built in. The set is itself a
/// cache key downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct TemplateSet {
    entries: Vec<Template>,
}

impl TemplateSet {
    /// An empty set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build the set from already-classified templates, applying the
    /// later-wins collision policy before canonicalizing.
    pub fn from_templates(templates: impl IntoIterator<Item = Template>) -> Self {
        let mut by_name: IndexMap<String, Template> = IndexMap::new();
        for template in templates {
            // insert replaces the value but keeps the first-seen position;
            // later content wins either way
            by_name.insert(fold(&template.name), template);
        }

        let mut entries: Vec<Template> = by_name.into_values().collect();
        entries.sort_by(|a, b| fold(&a.name).cmp(&fold(&b.name)));
        Self { entries }
    }

    /// Build the set straight from raw resources, returning the rejected
    /// stream alongside. Non-matching resources are silently skipped.
    pub fn from_resources<'a>(
        resources: impl IntoIterator<Item = &'a TemplateResource>,
    ) -> (Self, Vec<RejectedTemplate>) {
        let mut templates = Vec::new();
        let mut rejected = Vec::new();
        for resource in resources {
            if !resource.matches_convention() {
                continue;
            }
            match parse_resource(resource) {
                Ok(template) => templates.push(template),
                Err(reject) => rejected.push(reject),
            }
        }
        (Self::from_templates(templates), rejected)
    }

    /// Look up a template body by logical name, ignoring ASCII case.
    pub fn get(&self, name: &str) -> Option<&str> {
        let key = fold(name);
        self.entries
            .binary_search_by(|entry| fold(&entry.name).cmp(&key))
            .ok()
            .map(|index| self.entries[index].content.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Logical names in canonical (folded, sorted) order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }
}

fn fold(name: &str) -> String {
    name.to_ascii_lowercase()
}
