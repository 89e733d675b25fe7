//! Workspace configuration for the scaffolding CLI.
//!
//! The config file (`scaffold.json`) is owned by the user's project; this
//! module only loads and normalizes it. A missing file is not an error: every
//! consumer of the configuration has a defined fallback, so generation works
//! out of the box in an unconfigured workspace.
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub const DEFAULT_SOURCE_ROOT: &str = "src";
pub const DEFAULT_LANGUAGE: &str = "ts";
pub const DEFAULT_SPEC_FILE_SUFFIX: &str = "spec";
/// Spec files are generated unless the user or configuration opts out.
pub const DEFAULT_GENERATE_SPEC: bool = true;

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Configuration {
    pub source_root: String,
    /// File extension for generated artifacts.
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_project: Option<String>,
    pub projects: BTreeMap<String, ProjectConfiguration>,
    pub generate_options: GenerateOptions,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            source_root: DEFAULT_SOURCE_ROOT.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            default_project: None,
            projects: BTreeMap::new(),
            generate_options: GenerateOptions::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_root: Option<String>,
    pub generate_options: GenerateOptions,
}

/// Per-scope generation toggles. Every field is optional; absence means
/// "defer to the next precedence tier".
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec: Option<OptionValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flat: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec_file_suffix: Option<String>,
}

/// A boolean generation option is either a single flag or a per-schematic
/// table (`"spec": {"module": true, "service": false}`).
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(untagged)]
pub enum OptionValue {
    Flag(bool),
    PerSchematic(BTreeMap<String, bool>),
}

/// Load `scaffold.json`, falling back to defaults when the file is absent.
pub fn load_config(path: &Path) -> Result<Configuration> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no configuration file, using defaults");
        return Ok(Configuration::default());
    }
    let bytes = fs::read(path).with_context(|| format!("read config {}", path.display()))?;
    let config: Configuration =
        serde_json::from_slice(&bytes).with_context(|| format!("parse config {}", path.display()))?;
    Ok(config)
}

/// Render a pretty JSON config stub for `scaffold init`.
pub fn config_stub() -> String {
    let config = Configuration {
        generate_options: GenerateOptions {
            spec: Some(OptionValue::Flag(DEFAULT_GENERATE_SPEC)),
            flat: Some(false),
            spec_file_suffix: Some(DEFAULT_SPEC_FILE_SUFFIX.to_string()),
        },
        ..Configuration::default()
    };
    serde_json::to_string_pretty(&config).expect("serialize config stub")
}
