//! Generation-option precedence resolution.
//!
//! Each resolver merges a command-line value with the layered configuration,
//! stopping at the first tier that yields a definite answer:
//! command line, project-scoped `generateOptions`, global `generateOptions`,
//! then the caller-supplied default. Lookups only read the configuration and
//! never fail; a malformed or absent value just defers to the next tier.
use crate::config::{Configuration, GenerateOptions, OptionValue, DEFAULT_SPEC_FILE_SUFFIX};

/// A name/value option pair as supplied on the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Input {
    pub name: String,
    pub value: InputValue,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputValue {
    Bool(bool),
    Str(String),
    Num(i64),
}

impl Input {
    pub fn new(name: impl Into<String>, value: impl Into<InputValue>) -> Self {
        Input {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl From<bool> for InputValue {
    fn from(value: bool) -> Self {
        InputValue::Bool(value)
    }
}

impl From<&str> for InputValue {
    fn from(value: &str) -> Self {
        InputValue::Str(value.to_string())
    }
}

impl From<i64> for InputValue {
    fn from(value: i64) -> Self {
        InputValue::Num(value)
    }
}

/// True iff `options` carries `name` with exactly `value`.
pub fn has_option_value(options: &[Input], name: &str, value: &InputValue) -> bool {
    options
        .iter()
        .any(|option| option.name == name && option.value == *value)
}

/// True iff `options` carries `name` as a set flag.
pub fn has_option_flag(options: &[Input], name: &str) -> bool {
    has_option_value(options, name, &InputValue::Bool(true))
}

/// Parse a raw `name[=value]` pair. A bare name is a set flag; values parse
/// as bool, then integer, then fall back to a string.
pub fn parse_option_pair(raw: &str) -> Input {
    match raw.split_once('=') {
        None => Input::new(raw, true),
        Some((name, "true")) => Input::new(name, true),
        Some((name, "false")) => Input::new(name, false),
        Some((name, value)) => match value.parse::<i64>() {
            Ok(number) => Input::new(name, number),
            Err(_) => Input::new(name, value),
        },
    }
}

/// Look up a `generateOptions` field under `app_name`, falling back to the
/// global options when the project scope has no entry (or no such project).
/// An empty `app_name` consults the global scope directly.
fn scoped_option<'a, T: ?Sized>(
    config: &'a Configuration,
    app_name: &str,
    field: impl Fn(&'a GenerateOptions) -> Option<&'a T>,
) -> Option<&'a T> {
    if !app_name.is_empty() {
        if let Some(project) = config.projects.get(app_name) {
            if let Some(value) = field(&project.generate_options) {
                return Some(value);
            }
        }
    }
    field(&config.generate_options)
}

/// Resolve whether a spec file accompanies the generated artifact.
///
/// `cli` is `Some` only when the user passed `--spec`/`--no-spec` explicitly;
/// an explicit value always wins. When the scoped value is a per-schematic
/// table without an entry for `schematic` and a project scope was requested,
/// the global table gets one more chance before the default applies.
pub fn should_generate_spec(
    config: &Configuration,
    schematic: &str,
    app_name: &str,
    cli: Option<bool>,
    default_value: bool,
) -> bool {
    if let Some(value) = cli {
        return value;
    }

    match scoped_option(config, app_name, |options| options.spec.as_ref()) {
        Some(OptionValue::Flag(value)) => *value,
        Some(OptionValue::PerSchematic(map)) => match map.get(schematic) {
            Some(value) => *value,
            // The scoped table exists but not for this schematic: consult the
            // global table before giving up.
            None if !app_name.is_empty() => match config.generate_options.spec.as_ref() {
                Some(OptionValue::Flag(value)) => *value,
                Some(OptionValue::PerSchematic(global)) => {
                    global.get(schematic).copied().unwrap_or(default_value)
                }
                None => default_value,
            },
            None => default_value,
        },
        None => default_value,
    }
}

/// Resolve whether the artifact is placed directly in the source root.
/// Flag presence on the command line wins outright.
pub fn should_generate_flat(config: &Configuration, app_name: &str, flat_value: bool) -> bool {
    if flat_value {
        return flat_value;
    }
    scoped_option(config, app_name, |options| options.flat.as_ref())
        .copied()
        .unwrap_or(flat_value)
}

/// Resolve the spec-file suffix. A non-empty command-line value wins;
/// otherwise the scoped configuration value or the `"spec"` default.
pub fn spec_file_suffix(config: &Configuration, app_name: &str, cli_value: &str) -> String {
    if !cli_value.is_empty() {
        return cli_value.to_string();
    }
    scoped_option(config, app_name, |options| {
        options.spec_file_suffix.as_deref()
    })
    .unwrap_or(DEFAULT_SPEC_FILE_SUFFIX)
    .to_string()
}
