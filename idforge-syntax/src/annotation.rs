//! Annotation nodes and their argument values.

use idforge_ir::Location;
use serde::{Deserialize, Serialize};

/// One argument value on an annotation, as typed by the host.
///
/// The host type-checks annotation arguments before the pipeline ever sees
/// them; a literal that failed that check arrives as [`ArgValue::Error`]
/// rather than as text. In fixtures an error value is written as a marker
/// table, e.g. `args = [{ error = true }]`; any marker table counts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "ArgValueRepr", into = "ArgValueRepr")]
pub enum ArgValue {
    /// A successfully typed string value.
    Text(String),
    /// A value whose upstream type-check failed.
    Error,
}

impl ArgValue {
    pub fn is_error(&self) -> bool {
        matches!(self, ArgValue::Error)
    }

    /// The text of a successfully typed value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ArgValue::Text(text) => Some(text),
            ArgValue::Error => None,
        }
    }
}

/// Serde representation: a bare string or an error-marker table.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum ArgValueRepr {
    Text(String),
    Marker { error: bool },
}

impl From<ArgValueRepr> for ArgValue {
    fn from(repr: ArgValueRepr) -> Self {
        match repr {
            ArgValueRepr::Text(text) => ArgValue::Text(text),
            ArgValueRepr::Marker { .. } => ArgValue::Error,
        }
    }
}

impl From<ArgValue> for ArgValueRepr {
    fn from(value: ArgValue) -> Self {
        match value {
            ArgValue::Text(text) => ArgValueRepr::Text(text),
            ArgValue::Error => ArgValueRepr::Marker { error: true },
        }
    }
}

/// A named annotation argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedArg {
    pub name: String,
    pub value: ArgValue,
}

impl NamedArg {
    pub fn new(name: impl Into<String>, value: ArgValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// An annotation attached to a declaration or assembly-scope unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Annotation {
    /// Fully qualified annotation path, e.g. `IdForge.TypedId`.
    pub path: String,
    /// Constructor-style arguments, in declaration order.
    #[serde(default)]
    pub args: Vec<ArgValue>,
    /// Named arguments, in declaration order.
    #[serde(default)]
    pub named: Vec<NamedArg>,
    /// Where the annotation itself appears.
    #[serde(default)]
    pub location: Location,
}

impl Annotation {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            args: Vec::new(),
            named: Vec::new(),
            location: Location::default(),
        }
    }

    /// Append a constructor-style string argument.
    pub fn arg(mut self, text: impl Into<String>) -> Self {
        self.args.push(ArgValue::Text(text.into()));
        self
    }

    /// Append a constructor-style argument whose type-check failed.
    pub fn error_arg(mut self) -> Self {
        self.args.push(ArgValue::Error);
        self
    }

    /// Append a named argument.
    pub fn named(mut self, name: impl Into<String>, value: ArgValue) -> Self {
        self.named.push(NamedArg::new(name, value));
        self
    }

    /// Set the annotation's location.
    pub fn at(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    /// The path segment after the last `.`, e.g. `TypedId`.
    pub fn short_name(&self) -> &str {
        self.path.rsplit('.').next().unwrap_or(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_name() {
        assert_eq!(Annotation::new("IdForge.TypedId").short_name(), "TypedId");
        assert_eq!(Annotation::new("TypedId").short_name(), "TypedId");
    }

    #[test]
    fn test_arg_value_from_toml() {
        #[derive(Deserialize)]
        struct Holder {
            args: Vec<ArgValue>,
        }

        let holder: Holder =
            toml::from_str(r#"args = ["Int", { error = true }]"#).expect("should parse");
        assert_eq!(holder.args[0], ArgValue::Text("Int".to_string()));
        assert!(holder.args[1].is_error());
    }

    #[test]
    fn test_builder() {
        let annotation = Annotation::new("IdForge.TypedId")
            .arg("Guid")
            .named("templateName", ArgValue::Text("Int".into()));

        assert_eq!(annotation.args.len(), 1);
        assert_eq!(annotation.named[0].value.as_text(), Some("Int"));
    }
}
