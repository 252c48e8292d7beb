//! Dependency-injection registration compiler CLI.

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use di_compiler::CompileOutput;
use dic::commands::{check, explain, generate, report_diagnostics};
use dic::{parse_args, CliError, CliOptions, Command, Invocation, OutputFormat};

fn main() -> ExitCode {
    dic::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            if matches!(err, CliError::Usage(_)) {
                eprintln!();
                eprintln!("Run `dic help` for usage.");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<ExitCode, CliError> {
    let Invocation { command, options } = parse_args(args)?;

    match command {
        Command::Help => {
            print_usage();
            Ok(ExitCode::SUCCESS)
        }
        Command::Version => {
            println!("dic {}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }
        Command::Explain { code } => {
            println!("{}", explain(&code)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { manifest } => {
            let output = check(&manifest, &options.config)?;
            Ok(finish(&output, &options))
        }
        Command::Generate { manifest } => {
            let out_dir = options
                .output_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from("."));
            let report = generate(&manifest, &out_dir, &options.config)?;
            if options.format == OutputFormat::Human {
                println!(
                    "Generated {} file(s) in {} ({} unchanged)",
                    report.written.len(),
                    out_dir.display(),
                    report.unchanged.len()
                );
            }
            Ok(finish(&report.output, &options))
        }
    }
}

/// Report diagnostics and map them to the exit status.
fn finish(output: &CompileOutput, options: &CliOptions) -> ExitCode {
    match options.format {
        OutputFormat::Human => {
            let is_tty = io::stderr().is_terminal();
            report_diagnostics(
                &output.diagnostics,
                options.format,
                options.color,
                is_tty,
                io::stderr(),
            );
        }
        OutputFormat::Json => {
            report_diagnostics(
                &output.diagnostics,
                options.format,
                options.color,
                false,
                io::stdout().lock(),
            );
        }
    }

    if output.has_errors() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn print_usage() {
    println!("dic - dependency-injection registration compiler");
    println!();
    println!("Usage: dic <command> [options]");
    println!();
    println!("Commands:");
    println!("  generate <manifest.json>  Write the generated C# sources");
    println!("  check <manifest.json>     Report diagnostics without writing files");
    println!("  --explain <code>          Explain a diagnostic code (e.g., DI1002)");
    println!("  help                      Show this help message");
    println!("  version                   Show version information");
    println!();
    println!("Options:");
    println!("  -o <dir>                  Output directory (default: current directory)");
    println!("  --format=<fmt>            Diagnostics format: human (default), json");
    println!("  --color=<when>            Colors: auto (default), always, never");
    println!("  --container=<name>        Partial container class (default: InjectionContainer)");
    println!("  --namespace=<ns>          Namespace of the container class");
    println!("  --using=<ns>              Extra using directive (repeatable)");
    println!("  --no-attributes           Do not generate the attribute classes");
    println!("  --keep-order              Register in declaration order, not dependency order");
    println!("  --lenient-markers         Ignore conflicting [Constructor] markers");
    println!();
    println!("Environment:");
    println!("  RUST_LOG                  Enable tracing output (e.g., RUST_LOG=di_resolve=debug)");
    println!();
    println!("Examples:");
    println!("  dic generate di.json -o Generated");
    println!("  dic check di.json --format=json");
    println!("  dic --explain DI3001");
}
