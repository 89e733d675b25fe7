//! Interactive selection behind a small trait seam.
//!
//! Abandoning a prompt (Esc or an interrupted read) is not an error; it
//! surfaces as [`Selection::Cancelled`] and the caller decides whether the
//! process ends. Only genuine I/O failures propagate as errors.
use anyhow::{Context, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;
use std::io;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Selected(String),
    Cancelled,
}

pub trait Prompt {
    fn select(&mut self, message: &str, choices: &[String]) -> Result<Selection>;
}

/// Terminal prompt backed by dialoguer.
pub struct InteractivePrompt;

impl Prompt for InteractivePrompt {
    fn select(&mut self, message: &str, choices: &[String]) -> Result<Selection> {
        let result = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(message)
            .items(choices)
            .default(0)
            .interact_opt();
        match result {
            Ok(Some(index)) => Ok(Selection::Selected(choices[index].clone())),
            Ok(None) => Ok(Selection::Cancelled),
            Err(dialoguer::Error::IO(err)) if err.kind() == io::ErrorKind::Interrupted => {
                Ok(Selection::Cancelled)
            }
            Err(err) => Err(err).context("read interactive selection"),
        }
    }
}

pub fn ask_for_project_name(prompt: &mut dyn Prompt, projects: &[String]) -> Result<Selection> {
    prompt.select("Which project would you like to generate to?", projects)
}

pub fn ask_for_module_name(prompt: &mut dyn Prompt, modules: &[String]) -> Result<Selection> {
    prompt.select(
        "Which module should contain the generated artifact?",
        modules,
    )
}
