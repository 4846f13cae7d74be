//! Recognition of the annotations this generator reacts to.

use idforge_syntax::{Annotation, ArgValue};

/// Fully qualified path of the per-declaration annotation.
pub const TYPED_ID_ANNOTATION: &str = "IdForge.TypedId";

/// Fully qualified path of the assembly-scope defaults annotation.
pub const TYPED_ID_DEFAULTS_ANNOTATION: &str = "IdForge.TypedIdDefaults";

/// Returns true for the per-declaration annotation. Hosts may hand the path
/// over with or without the conventional `Attribute` suffix.
pub fn is_typed_id(annotation: &Annotation) -> bool {
    matches_path(&annotation.path, TYPED_ID_ANNOTATION)
}

/// Returns true for the assembly-scope defaults annotation.
pub fn is_typed_id_defaults(annotation: &Annotation) -> bool {
    matches_path(&annotation.path, TYPED_ID_DEFAULTS_ANNOTATION)
}

fn matches_path(path: &str, base: &str) -> bool {
    match path.strip_suffix("Attribute") {
        Some(stripped) => stripped == base,
        None => path == base,
    }
}

/// Read the template name from constructor-style arguments.
///
/// Returns the extracted name (if any) and whether the argument list is
/// misconfigured: an error-typed argument anywhere in the list, or a blank
/// name, suppresses generation for the whole annotation. An empty argument
/// list means "use defaults" and is never misconfigured.
pub(crate) fn constructor_template(annotation: &Annotation) -> (Option<String>, bool) {
    if annotation.args.is_empty() {
        return (None, false);
    }

    let mut misconfigured = annotation.args.iter().any(ArgValue::is_error);

    let template_name = annotation.args[0].as_text().map(str::to_string);
    if template_name.as_deref().is_none_or(|name| name.trim().is_empty()) {
        // TODO: attach a MisconfiguredInput diagnostic once blank names are
        // reported rather than silently suppressed
        misconfigured = true;
    }

    (template_name, misconfigured)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognizes_both_spellings() {
        assert!(is_typed_id(&Annotation::new("IdForge.TypedId")));
        assert!(is_typed_id(&Annotation::new("IdForge.TypedIdAttribute")));
        assert!(!is_typed_id(&Annotation::new("IdForge.TypedIdDefaults")));
        assert!(!is_typed_id(&Annotation::new("Other.TypedId")));
    }

    #[test]
    fn test_defaults_spellings() {
        assert!(is_typed_id_defaults(&Annotation::new(
            "IdForge.TypedIdDefaults"
        )));
        assert!(is_typed_id_defaults(&Annotation::new(
            "IdForge.TypedIdDefaultsAttribute"
        )));
        assert!(!is_typed_id_defaults(&Annotation::new("IdForge.TypedId")));
    }

    #[test]
    fn test_constructor_template_extraction() {
        let annotation = Annotation::new(TYPED_ID_ANNOTATION).arg("Int");
        assert_eq!(
            constructor_template(&annotation),
            (Some("Int".to_string()), false)
        );

        let empty = Annotation::new(TYPED_ID_ANNOTATION);
        assert_eq!(constructor_template(&empty), (None, false));

        let blank = Annotation::new(TYPED_ID_ANNOTATION).arg("  ");
        assert_eq!(constructor_template(&blank), (Some("  ".to_string()), true));

        let errored = Annotation::new(TYPED_ID_ANNOTATION).error_arg();
        assert_eq!(constructor_template(&errored), (None, true));
    }
}
