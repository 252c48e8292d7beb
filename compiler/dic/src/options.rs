//! Command line parsing.
//!
//! Flags are matched by hand, in the same `--name=value` style for every
//! command. Anything unrecognised is a usage error rather than being
//! silently ignored.

use std::path::PathBuf;

use di_compiler::CompileConfig;
use di_diagnostic::emitter::ColorMode;
use di_resolve::{MarkerPolicy, OrderingPolicy};

use crate::CliError;

/// How diagnostics are reported.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum OutputFormat {
    /// Terminal format on stderr.
    #[default]
    Human,
    /// JSON array on stdout.
    Json,
}

/// Options shared by `generate` and `check`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub format: OutputFormat,
    pub color: ColorMode,
    /// Directory generated files are written to; the working directory
    /// when unset.
    pub output_dir: Option<PathBuf>,
    pub config: CompileConfig,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Generate { manifest: PathBuf },
    Check { manifest: PathBuf },
    Explain { code: String },
    Help,
    Version,
}

/// A parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub command: Command,
    pub options: CliOptions,
}

/// Parse the arguments after the program name.
pub fn parse_args(args: &[String]) -> Result<Invocation, CliError> {
    let Some(command) = args.first() else {
        return Ok(Invocation {
            command: Command::Help,
            options: CliOptions::default(),
        });
    };

    let command = match command.as_str() {
        "generate" | "check" => {
            let (manifest, options) = parse_compile_args(command, &args[1..])?;
            let command = if command == "generate" {
                Command::Generate { manifest }
            } else {
                Command::Check { manifest }
            };
            return Ok(Invocation { command, options });
        }
        "--explain" | "explain" => match args.get(1) {
            Some(code) => Command::Explain { code: code.clone() },
            None => return Err(CliError::usage("missing error code (e.g. dic --explain DI1002)")),
        },
        "help" | "--help" | "-h" => Command::Help,
        "version" | "--version" | "-V" => Command::Version,
        other => return Err(CliError::usage(format!("unknown command '{other}'"))),
    };

    Ok(Invocation {
        command,
        options: CliOptions::default(),
    })
}

fn parse_compile_args(command: &str, args: &[String]) -> Result<(PathBuf, CliOptions), CliError> {
    let mut options = CliOptions::default();
    let mut manifest = None;

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        if arg == "-o" {
            let Some(dir) = args.get(i + 1) else {
                return Err(CliError::usage("-o requires a directory"));
            };
            options.output_dir = Some(PathBuf::from(dir));
            i += 2;
            continue;
        }

        if let Some(dir) = arg.strip_prefix("--out-dir=") {
            options.output_dir = Some(PathBuf::from(dir));
        } else if let Some(format) = arg.strip_prefix("--format=") {
            options.format = parse_format(format)?;
        } else if let Some(color) = arg.strip_prefix("--color=") {
            options.color = parse_color(color)?;
        } else if let Some(name) = arg.strip_prefix("--container=") {
            options.config.emit.container_class = non_empty("--container", name)?;
        } else if let Some(namespace) = arg.strip_prefix("--namespace=") {
            options.config.emit.namespace = Some(non_empty("--namespace", namespace)?);
        } else if let Some(using) = arg.strip_prefix("--using=") {
            options.config.emit.usings.push(non_empty("--using", using)?);
        } else if arg == "--no-attributes" {
            options.config.emit_attributes = false;
        } else if arg == "--keep-order" {
            options.config.ordering = OrderingPolicy::FirstSeen;
        } else if arg == "--lenient-markers" {
            options.config.marker_policy = MarkerPolicy::FallThrough;
        } else if arg.starts_with('-') {
            return Err(CliError::usage(format!("unknown option '{arg}'")));
        } else if manifest.is_none() {
            manifest = Some(PathBuf::from(arg));
        } else {
            return Err(CliError::usage(format!("unexpected argument '{arg}'")));
        }
        i += 1;
    }

    let Some(manifest) = manifest else {
        return Err(CliError::usage(format!(
            "missing manifest path (usage: dic {command} <manifest.json>)"
        )));
    };
    Ok((manifest, options))
}

fn parse_format(value: &str) -> Result<OutputFormat, CliError> {
    match value {
        "human" => Ok(OutputFormat::Human),
        "json" => Ok(OutputFormat::Json),
        _ => Err(CliError::usage(format!(
            "invalid --format '{value}' (expected human or json)"
        ))),
    }
}

fn parse_color(value: &str) -> Result<ColorMode, CliError> {
    match value {
        "auto" => Ok(ColorMode::Auto),
        "always" => Ok(ColorMode::Always),
        "never" => Ok(ColorMode::Never),
        _ => Err(CliError::usage(format!(
            "invalid --color '{value}' (expected auto, always or never)"
        ))),
    }
}

fn non_empty(flag: &str, value: &str) -> Result<String, CliError> {
    let value = value.trim();
    if value.is_empty() {
        Err(CliError::usage(format!("{flag} requires a value")))
    } else {
        Ok(value.to_string())
    }
}
