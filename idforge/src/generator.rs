//! The generator: pipeline wiring and run reports.

use std::sync::Arc;

use eyre::Result;
use idforge_emit::emit;
use idforge_incremental::{CacheStats, CancelToken, MemoTable, Stream};
use idforge_ir::{DeclarationDescriptor, DefaultsResolution, Diagnosed, DiagnosticInfo, Emission};
use idforge_scan::{has_defaults_annotation, is_candidate, resolve_defaults, scan_declaration};
use idforge_syntax::{AssemblyUnit, Compilation, TypeDeclaration};
use idforge_templates::{RejectedTemplate, Template, TemplateResource, TemplateSet, parse_resource};
use serde::Serialize;

/// The joint per-declaration node: descriptor, template mapping, selected
/// default. Everything the emitter needs, compared as one value.
type EmitKey = ((DeclarationDescriptor, Arc<TemplateSet>), Arc<Option<String>>);

/// Cache hit/miss counters per pipeline stage, for one generator lifetime.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RunStats {
    pub scan: CacheStats,
    pub defaults: CacheStats,
    pub templates: CacheStats,
    pub template_collect: CacheStats,
    pub emit: CacheStats,
}

/// Everything one run produced.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationRun {
    /// Artifacts for every successfully resolved declaration, in
    /// declaration order.
    pub artifacts: Vec<Emission>,
    /// The diagnostics stream: declaration diagnostics first, then
    /// defaults diagnostics, each in input order.
    pub diagnostics: Vec<DiagnosticInfo>,
    /// Names of the artifacts that were actually recomputed this run. Empty
    /// when the inputs were byte-identical to an earlier run.
    pub changed: Vec<String>,
    /// Convention-matching template resources that could not be used. Not
    /// part of the diagnostics stream today.
    pub rejected_templates: Vec<RejectedTemplate>,
    /// Per-stage cache statistics at the end of the run.
    pub stats: RunStats,
}

impl GenerationRun {
    /// Find an artifact by name.
    pub fn artifact(&self, name: &str) -> Option<&Emission> {
        self.artifacts.iter().find(|e| e.artifact_name == name)
    }

    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// The incremental generator.
///
/// Owns one memo table per pipeline stage; keep the generator alive across
/// runs to get incrementality. Every stage is keyed on the structural value
/// of its input, so a run over unchanged inputs is all cache hits and an
/// empty changed set.
///
/// All tables tolerate concurrent access; the generator itself is `Sync`
/// and a host may share it across threads.
#[derive(Debug, Default)]
pub struct Generator {
    seen_declarations: MemoTable<TypeDeclaration, ()>,
    seen_units: MemoTable<AssemblyUnit, ()>,
    seen_resources: MemoTable<TemplateResource, ()>,
    scanned: MemoTable<TypeDeclaration, Option<Diagnosed<DeclarationDescriptor>>>,
    resolved_defaults: MemoTable<AssemblyUnit, Option<Diagnosed<DefaultsResolution>>>,
    parsed_templates: MemoTable<TemplateResource, Result<Template, RejectedTemplate>>,
    collected_templates: MemoTable<Vec<Template>, Vec<Template>>,
    template_sets: MemoTable<Vec<Template>, TemplateSet>,
    collected_defaults: MemoTable<Vec<Option<String>>, Vec<Option<String>>>,
    selected_default: MemoTable<Vec<Option<String>>, Option<String>>,
    emissions: MemoTable<EmitKey, Option<Emission>>,
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the pipeline over the given compilation and template resources.
    pub fn run(
        &self,
        compilation: &Compilation,
        resources: &[TemplateResource],
    ) -> Result<GenerationRun> {
        self.run_with_cancellation(compilation, resources, &CancelToken::new())
    }

    /// Run the pipeline, checking `cancel` between independent items.
    ///
    /// A cancelled run returns an error without publishing any partial
    /// artifact; the memo tables keep whatever finished items they already
    /// absorbed, which the next run reuses.
    pub fn run_with_cancellation(
        &self,
        compilation: &Compilation,
        resources: &[TemplateResource],
        cancel: &CancelToken,
    ) -> Result<GenerationRun> {
        let mut diagnostics = Vec::new();

        // Template repository: filter by convention, classify each
        // resource, then collect the survivors into one mapping.
        let candidates: Vec<TemplateResource> = resources
            .iter()
            .filter(|resource| resource.matches_convention())
            .cloned()
            .collect();
        let resource_stream = Stream::input(candidates, &self.seen_resources, cancel)?;
        let parsed = resource_stream.map(&self.parsed_templates, cancel, parse_resource)?;

        let rejected_templates: Vec<RejectedTemplate> = parsed
            .values()
            .filter_map(|result| result.as_ref().err().cloned())
            .collect();

        let template_set = parsed
            .filter_map(|result| result.as_ref().ok().cloned())
            .collect(&self.collected_templates)
            .map(&self.template_sets, |templates| {
                TemplateSet::from_templates(templates.iter().cloned())
            });

        // Declaration scanning, one independent item per declaration.
        let candidates: Vec<TypeDeclaration> = compilation
            .declarations
            .iter()
            .filter(|declaration| is_candidate(declaration))
            .cloned()
            .collect();
        let declaration_stream = Stream::input(candidates, &self.seen_declarations, cancel)?;
        let scanned = declaration_stream.map(&self.scanned, cancel, scan_declaration)?;

        for item in scanned.iter() {
            if let Some(result) = item.value() {
                diagnostics.extend(result.diagnostics.iter().cloned());
            }
        }

        let descriptors = scanned.filter_map(|scan| {
            scan.as_ref()
                .filter(|result| result.value.is_valid)
                .map(|result| result.value.clone())
        });

        // Program-wide defaults: resolve per unit, then select the first
        // valid occurrence across the whole collection.
        let units: Vec<AssemblyUnit> = compilation
            .units
            .iter()
            .filter(|unit| has_defaults_annotation(unit))
            .cloned()
            .collect();
        let unit_stream = Stream::input(units, &self.seen_units, cancel)?;
        let resolved = unit_stream.map(&self.resolved_defaults, cancel, resolve_defaults)?;

        for item in resolved.iter() {
            if let Some(result) = item.value() {
                diagnostics.extend(result.diagnostics.iter().cloned());
            }
        }

        let default_template = resolved
            .filter_map(|resolution| {
                resolution.as_ref().and_then(|result| {
                    result
                        .value
                        .is_valid
                        .then(|| result.value.template_name.clone())
                })
            })
            .collect(&self.collected_defaults)
            .map(&self.selected_default, |names| {
                names.first().cloned().flatten()
            });

        // Joint node per declaration, then emission.
        let emitted = descriptors
            .combine_each(&template_set)
            .combine_each(&default_template)
            .map(&self.emissions, cancel, |((descriptor, templates), default)| {
                emit(descriptor, templates, default.as_deref())
            })?;

        let mut artifacts = Vec::new();
        let mut changed = Vec::new();
        for item in emitted.iter() {
            if let Some(emission) = item.value() {
                if item.is_changed() {
                    changed.push(emission.artifact_name.clone());
                }
                artifacts.push(emission.clone());
            }
        }

        Ok(GenerationRun {
            artifacts,
            diagnostics,
            changed,
            rejected_templates,
            stats: self.stats(),
        })
    }

    /// Current cache statistics across all stages.
    pub fn stats(&self) -> RunStats {
        RunStats {
            scan: self.scanned.stats(),
            defaults: self.resolved_defaults.stats(),
            templates: self.parsed_templates.stats(),
            template_collect: self.collected_templates.stats(),
            emit: self.emissions.stats(),
        }
    }
}
