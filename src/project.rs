//! Project and module selection helpers for the generate command.
use crate::config::{Configuration, ProjectConfiguration, DEFAULT_SOURCE_ROOT};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Schematics that define a project rather than belong to one.
pub const PROJECT_SCHEMATICS: &[&str] = &["app", "sub-app", "library", "lib"];

/// Schematics that need a parent module chosen before generation.
pub const SUBMODULE_SCHEMATICS: &[&str] = &["sub-module", "sub-service"];

/// Label appended to the default project's name in selection prompts.
pub const DEFAULT_PROJECT_LABEL: &str = " (default)";

/// Prompt for a project only when the schematic belongs to one, the
/// configuration actually lists projects, and none was supplied up front.
pub fn should_ask_for_project(
    schematic: &str,
    projects: &BTreeMap<String, ProjectConfiguration>,
    app_name: &str,
) -> bool {
    !PROJECT_SCHEMATICS.contains(&schematic) && !projects.is_empty() && app_name.is_empty()
}

pub fn should_ask_for_module(schematic: &str) -> bool {
    SUBMODULE_SCHEMATICS.contains(&schematic)
}

/// Immediate child directory names under `source_root`, sorted for a stable
/// prompt order. An unreadable or missing root degrades to an empty list.
pub fn module_folders(source_root: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(source_root) else {
        tracing::debug!(path = %source_root.display(), "source root not readable");
        return Vec::new();
    };
    let mut folders: Vec<String> = entries
        .flatten()
        .filter(|entry| entry.file_type().is_ok_and(|kind| kind.is_dir()))
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    folders.sort();
    folders
}

/// Order the configured project names with the default project first.
///
/// `default_project_name` carries the selection label. An exact duplicate of
/// the default is always dropped from the remainder; when the source root is
/// not the conventional default, the bare name (label stripped) is dropped
/// too, so the default is never listed twice.
pub fn move_default_project_to_start(
    config: &Configuration,
    default_project_name: &str,
    default_label: &str,
) -> Vec<String> {
    let mut projects: Vec<String> = config.projects.keys().cloned().collect();
    projects.retain(|project| project != default_project_name);
    if config.source_root != DEFAULT_SOURCE_ROOT {
        let bare_name = default_project_name.replacen(default_label, "", 1);
        projects.retain(|project| *project != bare_name);
    }
    projects.insert(0, default_project_name.to_string());
    projects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Configuration;

    fn projects(names: &[&str]) -> BTreeMap<String, ProjectConfiguration> {
        names
            .iter()
            .map(|name| (name.to_string(), ProjectConfiguration::default()))
            .collect()
    }

    #[test]
    fn project_defining_schematics_never_prompt() {
        let configured = projects(&["p1"]);
        for schematic in PROJECT_SCHEMATICS {
            assert!(!should_ask_for_project(schematic, &configured, ""));
        }
    }

    #[test]
    fn prompts_only_when_projects_exist_and_none_supplied() {
        assert!(should_ask_for_project("service", &projects(&["p1"]), ""));
        assert!(!should_ask_for_project("service", &projects(&[]), ""));
        assert!(!should_ask_for_project("service", &projects(&["p1"]), "p1"));
    }

    #[test]
    fn submodule_schematics_prompt_for_module() {
        assert!(should_ask_for_module("sub-module"));
        assert!(should_ask_for_module("sub-service"));
        assert!(!should_ask_for_module("module"));
        assert!(!should_ask_for_module("service"));
    }

    #[test]
    fn module_folders_lists_one_level_of_directories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("users")).unwrap();
        std::fs::create_dir(dir.path().join("billing")).unwrap();
        std::fs::create_dir(dir.path().join("users").join("nested")).unwrap();
        std::fs::write(dir.path().join("main.ts"), "").unwrap();

        assert_eq!(module_folders(dir.path()), vec!["billing", "users"]);
    }

    #[test]
    fn module_folders_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(module_folders(&dir.path().join("missing")).is_empty());
        assert!(module_folders(dir.path()).is_empty());
    }

    #[test]
    fn default_project_moves_to_front() {
        let config = Configuration {
            projects: projects(&["a", "b"]),
            ..Configuration::default()
        };
        let labeled = format!("a{DEFAULT_PROJECT_LABEL}");
        // Conventional source root: no filtering, so the bare entry stays.
        assert_eq!(
            move_default_project_to_start(&config, &labeled, DEFAULT_PROJECT_LABEL),
            vec![labeled.clone(), "a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn unlabeled_default_is_never_listed_twice() {
        let config = Configuration {
            projects: projects(&["a", "b"]),
            ..Configuration::default()
        };
        assert_eq!(
            move_default_project_to_start(&config, "a", ""),
            vec!["a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn custom_source_root_drops_bare_duplicate() {
        let config = Configuration {
            source_root: "custom".to_string(),
            projects: projects(&["a", "b"]),
            ..Configuration::default()
        };
        let labeled = format!("a{DEFAULT_PROJECT_LABEL}");
        assert_eq!(
            move_default_project_to_start(&config, &labeled, DEFAULT_PROJECT_LABEL),
            vec![labeled, "b".to_string()]
        );
    }
}
