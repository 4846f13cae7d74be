//! Template selection, substitution and artifact assembly.

use idforge_ir::{DeclarationDescriptor, Emission};
use idforge_templates::TemplateSet;

use crate::{ScaffoldWriter, artifact_name};

/// Template used when neither the declaration nor the program configures one.
pub const FALLBACK_TEMPLATE: &str = "Guid";

const HEADER: &str = "\
//------------------------------------------------------------------------------
// <auto-generated>
//     This code was generated by the idforge source generator.
//     Changes may be lost if the code is regenerated.
// </auto-generated>
//------------------------------------------------------------------------------";

/// Pick the template name to look up for a descriptor.
///
/// Precedence: the declaration's own template name, then the program-wide
/// default, then [`FALLBACK_TEMPLATE`]. The first non-blank candidate wins.
pub fn select_template_name<'a>(
    descriptor: &'a DeclarationDescriptor,
    default_template: Option<&'a str>,
) -> &'a str {
    descriptor
        .template_name
        .as_deref()
        .into_iter()
        .chain(default_template)
        .find(|name| !name.trim().is_empty())
        .unwrap_or(FALLBACK_TEMPLATE)
}

/// Produce the artifact for one descriptor, or nothing.
///
/// Nothing is produced when the selected template name is not present in
/// the set; no diagnostic is raised for that case today, the missing
/// artifact is the only symptom.
pub fn emit(
    descriptor: &DeclarationDescriptor,
    templates: &TemplateSet,
    default_template: Option<&str>,
) -> Option<Emission> {
    let template_name = select_template_name(descriptor, default_template);
    let template = templates.get(template_name)?;

    let body = substitute(template, descriptor);
    Some(Emission::new(
        artifact_name(descriptor),
        wrap(descriptor, &body),
    ))
}

/// Replace the context tokens in a template body.
///
/// `{NAMESPACE}` is the dotted namespace, `{PARENTS}` the dotted parent
/// scope names (empty for top-level declarations), `{NAME}` the
/// declaration's own name. Everything else passes through untouched.
fn substitute(template: &str, descriptor: &DeclarationDescriptor) -> String {
    let parents = descriptor
        .parents
        .as_ref()
        .map(|chain| chain.dotted_names())
        .unwrap_or_default();

    template
        .replace("{NAMESPACE}", &descriptor.namespace)
        .replace("{PARENTS}", &parents)
        .replace("{NAME}", &descriptor.name)
}

/// Wrap a substituted body in the declaration's original nesting.
fn wrap(descriptor: &DeclarationDescriptor, body: &str) -> String {
    let mut writer = ScaffoldWriter::new();
    writer.body(HEADER);
    writer.blank();

    if !descriptor.namespace.is_empty() {
        writer.open(&format!("namespace {}", descriptor.namespace));
    }
    if let Some(parents) = &descriptor.parents {
        for scope in parents.scopes() {
            let mut header = format!("partial {} {}", scope.keyword, scope.name);
            if !scope.constraints.is_empty() {
                header.push(' ');
                header.push_str(&scope.constraints);
            }
            writer.open(&header);
        }
    }

    writer.body(body);

    // Closing braces in reverse: innermost parent first, namespace last.
    while writer.depth() > 0 {
        writer.close();
    }
    writer.finish()
}
