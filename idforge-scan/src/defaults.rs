//! Resolving the program-wide default template configuration.

use idforge_ir::{DefaultsResolution, Diagnosed, DiagnosticInfo};
use idforge_syntax::{ArgValue, AssemblyUnit};

use crate::{annotations::constructor_template, is_typed_id_defaults};

/// The predicate deciding whether an assembly-scope unit is worth resolving.
pub fn has_defaults_annotation(unit: &AssemblyUnit) -> bool {
    unit.annotations.iter().any(is_typed_id_defaults)
}

/// Resolve one assembly-scope unit's default configuration.
///
/// Returns `None` when the unit carries no recognized defaults annotation:
/// absence of defaults, not an error.
///
/// Only the first occurrence that produced a usable name is honored; every
/// later occurrence gets a `MultipleDefaults` diagnostic at its own location
/// but cannot change the selection. First-wins is the opposite of the
/// scanner's last-named-argument-wins policy, and kept that way on purpose.
///
/// An error-typed argument marks the whole result invalid and stops the
/// scan: remaining occurrences are not inspected.
pub fn resolve_defaults(unit: &AssemblyUnit) -> Option<Diagnosed<DefaultsResolution>> {
    let mut template_name: Option<String> = None;
    let mut diagnostics = Vec::new();
    let mut misconfigured = false;
    let mut matched = false;

    for annotation in &unit.annotations {
        if !is_typed_id_defaults(annotation) {
            continue;
        }
        matched = true;

        if template_name
            .as_deref()
            .is_some_and(|name| !name.trim().is_empty())
        {
            diagnostics.push(DiagnosticInfo::multiple_defaults(annotation.location.clone()));
            continue;
        }

        let (ctor_name, ctor_misconfigured) = constructor_template(annotation);
        if ctor_name.is_some() {
            template_name = ctor_name;
        }
        misconfigured |= ctor_misconfigured;

        // Unlike the scanner, only the first named argument is consulted.
        if let Some(named) = annotation.named.first() {
            match &named.value {
                ArgValue::Error => misconfigured = true,
                ArgValue::Text(text) => {
                    template_name = Some(text.clone());
                    if text.trim().is_empty() {
                        misconfigured = true;
                    }
                }
            }
        }

        if misconfigured {
            // Let the host compiler surface the underlying error; nothing
            // after this occurrence is inspected.
            break;
        }
    }

    if !matched {
        return None;
    }

    let resolution = if misconfigured {
        DefaultsResolution::invalid()
    } else {
        DefaultsResolution::valid(template_name)
    };
    Some(Diagnosed::new(resolution, diagnostics))
}

#[cfg(test)]
mod tests {
    use idforge_ir::{DiagnosticKind, Location};
    use idforge_syntax::Annotation;

    use super::*;
    use crate::TYPED_ID_DEFAULTS_ANNOTATION;

    fn defaults(name: &str) -> Annotation {
        Annotation::new(TYPED_ID_DEFAULTS_ANNOTATION).arg(name)
    }

    #[test]
    fn test_no_annotation_is_absence() {
        let unit = AssemblyUnit::new("AssemblyInfo.cs")
            .annotation(Annotation::new("Some.OtherAttribute"));
        assert!(resolve_defaults(&unit).is_none());
        assert!(!has_defaults_annotation(&unit));
    }

    #[test]
    fn test_single_occurrence_wins() {
        let unit = AssemblyUnit::new("AssemblyInfo.cs").annotation(defaults("Guid"));
        let resolved = resolve_defaults(&unit).unwrap();

        assert!(resolved.value.is_valid);
        assert_eq!(resolved.value.template_name.as_deref(), Some("Guid"));
        assert!(resolved.diagnostics.is_empty());
    }

    #[test]
    fn test_first_occurrence_wins_later_ones_diagnosed() {
        let unit = AssemblyUnit::new("AssemblyInfo.cs")
            .annotation(defaults("First"))
            .annotation(defaults("Second").at(Location::new("AssemblyInfo.cs", 80, 40)))
            .annotation(defaults("Third").at(Location::new("AssemblyInfo.cs", 130, 40)));
        let resolved = resolve_defaults(&unit).unwrap();

        assert_eq!(resolved.value.template_name.as_deref(), Some("First"));
        assert_eq!(resolved.diagnostics.len(), 2);
        assert!(
            resolved
                .diagnostics
                .iter()
                .all(|d| d.kind == DiagnosticKind::MultipleDefaults)
        );
        assert_eq!(resolved.diagnostics[0].location.offset, 80);
        assert_eq!(resolved.diagnostics[1].location.offset, 130);
    }

    #[test]
    fn test_error_argument_invalidates_and_stops() {
        let unit = AssemblyUnit::new("AssemblyInfo.cs")
            .annotation(Annotation::new(TYPED_ID_DEFAULTS_ANNOTATION).error_arg())
            .annotation(defaults("Ignored"));
        let resolved = resolve_defaults(&unit).unwrap();

        assert!(!resolved.value.is_valid);
        assert!(resolved.value.template_name.is_none());
        // The later occurrence was never inspected, so no MultipleDefaults.
        assert!(resolved.diagnostics.is_empty());
    }

    #[test]
    fn test_named_argument_first_one_counts() {
        let unit = AssemblyUnit::new("AssemblyInfo.cs").annotation(
            Annotation::new(TYPED_ID_DEFAULTS_ANNOTATION)
                .named("templateName", ArgValue::Text("Named".into()))
                .named("templateName", ArgValue::Text("Ignored".into())),
        );
        let resolved = resolve_defaults(&unit).unwrap();
        assert_eq!(resolved.value.template_name.as_deref(), Some("Named"));
    }
}
