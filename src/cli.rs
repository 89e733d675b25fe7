//! CLI argument parsing for the scaffolding workflow.
use crate::options::{self, Input};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default location of the workspace configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "scaffold.json";

#[derive(Parser, Debug)]
#[command(
    name = "scaffold",
    version,
    about = "Schematic-driven code scaffolding",
    after_help = "Examples:\n  scaffold init\n  scaffold generate service user\n  scaffold generate module billing --project api --no-spec\n  scaffold generate sub-service audit --flat --dry-run --json",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    Init(InitArgs),
    Generate(GenerateArgs),
}

/// Init command inputs for bootstrapping a workspace config.
#[derive(Parser, Debug)]
#[command(about = "Write a scaffold.json configuration stub")]
pub struct InitArgs {
    /// Path for the generated configuration file
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Overwrite an existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Generate command inputs for a single artifact.
#[derive(Parser, Debug)]
#[command(about = "Generate an artifact from a schematic")]
pub struct GenerateArgs {
    /// Schematic to generate (e.g. module, service, sub-service, library)
    pub schematic: String,

    /// Name of the generated artifact
    pub name: String,

    /// Project whose source root receives the artifact
    #[arg(long, value_name = "NAME")]
    pub project: Option<String>,

    /// Generate a spec file alongside the artifact
    #[arg(long, overrides_with = "no_spec")]
    pub spec: bool,

    /// Skip the spec file even when configuration asks for one
    #[arg(long, overrides_with = "spec")]
    pub no_spec: bool,

    /// Place the artifact directly in the source root (no folder)
    #[arg(long)]
    pub flat: bool,

    /// Suffix for the generated spec file name
    #[arg(long, value_name = "SUFFIX", default_value = "")]
    pub spec_file_suffix: String,

    /// Extra name[=value] options forwarded to the schematic
    #[arg(long = "option", value_name = "NAME[=VALUE]")]
    pub options: Vec<String>,

    /// Path to the workspace configuration file
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Print the generation plan without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Emit the plan as machine-readable JSON
    #[arg(long)]
    pub json: bool,
}

impl GenerateArgs {
    /// Flatten the explicitly passed generation flags into name/value pairs,
    /// the shape the option resolver and downstream pipeline consume.
    pub fn option_inputs(&self) -> Vec<Input> {
        let mut inputs = Vec::new();
        if self.spec {
            inputs.push(Input::new("spec", true));
        }
        if self.no_spec {
            inputs.push(Input::new("no-spec", true));
        }
        if self.flat {
            inputs.push(Input::new("flat", true));
        }
        for raw in &self.options {
            inputs.push(options::parse_option_pair(raw));
        }
        inputs
    }
}
