//! Generation planning: gate the interactive prompts, resolve the effective
//! options, and compute target paths. Emission is separate so `--dry-run`
//! can stop at the plan.
use crate::config::{Configuration, DEFAULT_GENERATE_SPEC};
use crate::options::{self, has_option_flag, Input};
use crate::project::{self, DEFAULT_PROJECT_LABEL};
use crate::prompt::{ask_for_module_name, ask_for_project_name, Prompt, Selection};
use anyhow::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Inputs for one generate invocation, as collected from the CLI.
pub struct GenerateRequest<'a> {
    pub schematic: &'a str,
    pub name: &'a str,
    pub project: Option<&'a str>,
    /// Name/value pairs for the explicitly passed generation flags.
    pub inputs: &'a [Input],
    /// Raw `--spec-file-suffix` value; empty means not supplied.
    pub spec_file_suffix: &'a str,
}

/// Fully resolved plan for a single artifact.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GenerationPlan {
    pub schematic: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    pub source_root: String,
    pub spec: bool,
    pub flat: bool,
    pub spec_file_suffix: String,
    /// File extension for the generated sources.
    pub language: String,
    pub artifact_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec_path: Option<String>,
}

pub enum PlanOutcome {
    Plan(GenerationPlan),
    /// The user abandoned an interactive prompt.
    Cancelled,
}

/// Build the generation plan, prompting for a project and/or parent module
/// when the schematic and configuration call for it.
pub fn build_plan(
    config: &Configuration,
    request: &GenerateRequest<'_>,
    prompt: &mut dyn Prompt,
) -> Result<PlanOutcome> {
    let mut app_name = request.project.unwrap_or("").to_string();
    if project::should_ask_for_project(request.schematic, &config.projects, &app_name) {
        let choices = project_choices(config);
        match ask_for_project_name(prompt, &choices)? {
            Selection::Selected(choice) => {
                app_name = choice.replacen(DEFAULT_PROJECT_LABEL, "", 1);
            }
            Selection::Cancelled => return Ok(PlanOutcome::Cancelled),
        }
    }

    let source_root = effective_source_root(config, &app_name);

    let mut module = None;
    if project::should_ask_for_module(request.schematic) {
        let modules = project::module_folders(Path::new(&source_root));
        if modules.is_empty() {
            tracing::debug!(source_root = %source_root, "no module folders to offer");
        } else {
            match ask_for_module_name(prompt, &modules)? {
                Selection::Selected(choice) => module = Some(choice),
                Selection::Cancelled => return Ok(PlanOutcome::Cancelled),
            }
        }
    }

    let cli_spec = if has_option_flag(request.inputs, "spec") {
        Some(true)
    } else if has_option_flag(request.inputs, "no-spec") {
        Some(false)
    } else {
        None
    };
    let spec = options::should_generate_spec(
        config,
        request.schematic,
        &app_name,
        cli_spec,
        DEFAULT_GENERATE_SPEC,
    );
    let flat =
        options::should_generate_flat(config, &app_name, has_option_flag(request.inputs, "flat"));
    let spec_file_suffix = options::spec_file_suffix(config, &app_name, request.spec_file_suffix);
    tracing::debug!(
        schematic = request.schematic,
        app_name = %app_name,
        spec,
        flat,
        spec_file_suffix = %spec_file_suffix,
        "resolved generation options"
    );

    let mut target_dir = PathBuf::from(&source_root);
    if let Some(module) = &module {
        target_dir.push(module);
    }
    if !flat {
        target_dir.push(request.name);
    }
    let file_stem = format!("{}.{}", request.name, request.schematic);
    let language = config.language.clone();
    let artifact_path = target_dir.join(format!("{file_stem}.{language}"));
    let spec_path = spec.then(|| {
        target_dir
            .join(format!("{file_stem}.{spec_file_suffix}.{language}"))
            .display()
            .to_string()
    });

    Ok(PlanOutcome::Plan(GenerationPlan {
        schematic: request.schematic.to_string(),
        name: request.name.to_string(),
        project: (!app_name.is_empty()).then(|| app_name.clone()),
        module,
        source_root,
        spec,
        flat,
        spec_file_suffix,
        language,
        artifact_path: artifact_path.display().to_string(),
        spec_path,
    }))
}

/// Project names offered for selection, default project first when one is
/// configured.
fn project_choices(config: &Configuration) -> Vec<String> {
    match &config.default_project {
        Some(default) => project::move_default_project_to_start(
            config,
            &format!("{default}{DEFAULT_PROJECT_LABEL}"),
            DEFAULT_PROJECT_LABEL,
        ),
        None => config.projects.keys().cloned().collect(),
    }
}

fn effective_source_root(config: &Configuration, app_name: &str) -> String {
    if !app_name.is_empty() {
        if let Some(project) = config.projects.get(app_name) {
            if let Some(root) = &project.source_root {
                return root.clone();
            }
        }
    }
    config.source_root.clone()
}
