//! Artifact emission from a resolved generation plan.
//!
//! Templates are deliberately tiny: a class stub and a matching spec file.
//! Existing files are never overwritten; generation refuses rather than
//! clobbering user code.
use crate::generate::GenerationPlan;
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Write the planned files and return their paths in creation order.
pub fn emit_plan(plan: &GenerationPlan) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    let artifact = PathBuf::from(&plan.artifact_path);
    write_new_file(&artifact, &artifact_contents(plan))?;
    tracing::info!(path = %artifact.display(), "wrote artifact");
    written.push(artifact);

    if let Some(spec_path) = &plan.spec_path {
        let spec = PathBuf::from(spec_path);
        write_new_file(&spec, &spec_contents(plan))?;
        tracing::info!(path = %spec.display(), "wrote spec file");
        written.push(spec);
    }
    Ok(written)
}

fn write_new_file(path: &Path, contents: &str) -> Result<()> {
    if path.exists() {
        return Err(anyhow!("refusing to overwrite {}", path.display()));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

fn class_name(plan: &GenerationPlan) -> String {
    format!("{}{}", pascal_case(&plan.name), pascal_case(&plan.schematic))
}

fn artifact_contents(plan: &GenerationPlan) -> String {
    format!("export class {} {{}}\n", class_name(plan))
}

fn spec_contents(plan: &GenerationPlan) -> String {
    let class = class_name(plan);
    let import = format!("./{}.{}", plan.name, plan.schematic);
    format!(
        "import {{ {class} }} from '{import}';

describe('{class}', () => {{
  it('should be defined', () => {{
    expect({class}).toBeDefined();
  }});
}});
"
    )
}

fn pascal_case(input: &str) -> String {
    input
        .split(['-', '_', '.', ' '])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan_in(dir: &Path, flat: bool, spec: bool) -> GenerationPlan {
        let target = if flat {
            dir.to_path_buf()
        } else {
            dir.join("user")
        };
        GenerationPlan {
            schematic: "service".to_string(),
            name: "user".to_string(),
            project: None,
            module: None,
            source_root: dir.display().to_string(),
            spec,
            flat,
            spec_file_suffix: "spec".to_string(),
            language: "ts".to_string(),
            artifact_path: target.join("user.service.ts").display().to_string(),
            spec_path: spec.then(|| target.join("user.service.spec.ts").display().to_string()),
        }
    }

    #[test]
    fn emits_artifact_and_spec_in_a_folder() {
        let dir = tempfile::tempdir().unwrap();
        let written = emit_plan(&plan_in(dir.path(), false, true)).unwrap();
        assert_eq!(written.len(), 2);
        let artifact = fs::read_to_string(dir.path().join("user/user.service.ts")).unwrap();
        assert_eq!(artifact, "export class UserService {}\n");
        let spec = fs::read_to_string(dir.path().join("user/user.service.spec.ts")).unwrap();
        assert!(spec.contains("import { UserService } from './user.service';"));
        assert!(spec.contains("describe('UserService', () => {"));
    }

    #[test]
    fn flat_plan_skips_the_folder_and_spec_is_optional() {
        let dir = tempfile::tempdir().unwrap();
        let written = emit_plan(&plan_in(dir.path(), true, false)).unwrap();
        assert_eq!(written.len(), 1);
        assert!(dir.path().join("user.service.ts").exists());
        assert!(!dir.path().join("user.service.spec.ts").exists());
    }

    #[test]
    fn refuses_to_overwrite_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        let plan = plan_in(dir.path(), true, false);
        fs::write(dir.path().join("user.service.ts"), "// mine").unwrap();
        let err = emit_plan(&plan).unwrap_err();
        assert!(err.to_string().contains("refusing to overwrite"));
        assert_eq!(
            fs::read_to_string(dir.path().join("user.service.ts")).unwrap(),
            "// mine"
        );
    }

    #[test]
    fn pascal_case_joins_separated_words() {
        assert_eq!(pascal_case("user"), "User");
        assert_eq!(pascal_case("sub-service"), "SubService");
        assert_eq!(pascal_case("audit_log"), "AuditLog");
        assert_eq!(pascal_case("a.b"), "AB");
    }
}
