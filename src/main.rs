use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::fs;

mod cli;
mod config;
mod emit;
mod generate;
mod options;
mod project;
mod prompt;

use cli::{Command, GenerateArgs, InitArgs, RootArgs};
use generate::{GenerateRequest, PlanOutcome};

fn main() -> Result<()> {
    init_tracing();
    let args = RootArgs::parse();
    match args.command {
        Command::Init(args) => cmd_init(args),
        Command::Generate(args) => cmd_generate(args),
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_init(args: InitArgs) -> Result<()> {
    if args.config.exists() && !args.force {
        return Err(anyhow!(
            "refusing to overwrite {} (pass --force to replace it)",
            args.config.display()
        ));
    }
    fs::write(&args.config, config::config_stub())
        .with_context(|| format!("write {}", args.config.display()))?;
    println!("Wrote {}", args.config.display());
    Ok(())
}

fn cmd_generate(args: GenerateArgs) -> Result<()> {
    let config = config::load_config(&args.config)?;
    let inputs = args.option_inputs();
    let request = GenerateRequest {
        schematic: &args.schematic,
        name: &args.name,
        project: args.project.as_deref(),
        inputs: &inputs,
        spec_file_suffix: &args.spec_file_suffix,
    };

    let mut prompt = prompt::InteractivePrompt;
    let plan = match generate::build_plan(&config, &request, &mut prompt)? {
        PlanOutcome::Plan(plan) => plan,
        PlanOutcome::Cancelled => {
            tracing::info!("generation cancelled at prompt");
            println!("Aborted.");
            return Ok(());
        }
    };

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&plan).context("serialize generation plan")?
        );
    } else {
        print_plan(&plan);
    }
    if args.dry_run {
        return Ok(());
    }

    for path in emit::emit_plan(&plan)? {
        println!("CREATE {}", path.display());
    }
    Ok(())
}

fn print_plan(plan: &generate::GenerationPlan) {
    println!("schematic: {}", plan.schematic);
    println!("name: {}", plan.name);
    if let Some(project) = &plan.project {
        println!("project: {project}");
    }
    if let Some(module) = &plan.module {
        println!("module: {module}");
    }
    println!("source root: {}", plan.source_root);
    println!("spec: {}", plan.spec);
    println!("flat: {}", plan.flat);
    println!("spec file suffix: {}", plan.spec_file_suffix);
    println!("artifact: {}", plan.artifact_path);
    if let Some(spec_path) = &plan.spec_path {
        println!("spec file: {spec_path}");
    }
}
