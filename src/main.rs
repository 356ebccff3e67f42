//! codesim CLI binary entry point.
//! Delegates to the library facade and prints results.

use clap::Parser;
use codesim::cli::{Cli, Commands, Common};
use codesim::config::{self, Effective, Overrides};
use codesim::dialect::Dialect;
use codesim::lint::{dialect_for_path, run_lint};
use codesim::models::{AnalysisRequest, Cursor};
use codesim::simulator::Simulator;
use codesim::utils::{error_prefix, info_prefix, note_prefix};
use codesim::{extract, logging, output};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, Read};
use std::path::Path;
use std::process;

fn die(msg: impl std::fmt::Display) -> ! {
    eprintln!("{} {}", error_prefix(), msg);
    process::exit(2);
}

/// Resolve config and start logging; exits on an unsupported dialect.
fn effective(ov: &Overrides<'_>) -> Effective {
    let eff = config::resolve_effective(ov).unwrap_or_else(|e| die(e));
    logging::init(eff.log_level, eff.log_format);
    if !eff.config_found && eff.output != "json" {
        tracing::debug!("no codesim.toml found; using defaults");
    }
    eff
}

fn common_overrides(common: &Common) -> Overrides<'_> {
    Overrides {
        root: common.root.as_deref(),
        dialect: common.dialect.as_deref(),
        output: common.output.as_deref(),
        ..Overrides::default()
    }
}

fn read_source(file: &str) -> String {
    if file == "-" {
        let mut s = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut s) {
            die(format!("cannot read stdin: {e}"));
        }
        return s;
    }
    std::fs::read_to_string(file).unwrap_or_else(|e| die(format!("cannot read {file}: {e}")))
}

/// `--dialect` > file extension > configured dialect.
fn pick_dialect(file: &str, common: &Common, eff: &Effective) -> Dialect {
    let explicit = common
        .dialect
        .as_deref()
        .map(|d| d.parse::<Dialect>().unwrap_or_else(|e| die(e)));
    dialect_for_path(Path::new(file), explicit, eff.dialect)
        .unwrap_or_else(|| die(format!("cannot determine dialect for {file}; pass --dialect")))
}

fn request_for(file: &str, common: &Common) -> (Effective, AnalysisRequest) {
    let eff = effective(&common_overrides(common));
    let src = read_source(file);
    let dialect = pick_dialect(file, common, &eff);
    (eff, AnalysisRequest::new(src, dialect.id()))
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Run {
            file,
            common,
            seed,
            no_faults,
            no_latency,
        } => {
            let eff = effective(&Overrides {
                seed,
                faults: no_faults.then_some(false),
                latency: no_latency.then_some(false),
                ..common_overrides(&common)
            });
            let src = read_source(&file);
            let dialect = pick_dialect(&file, &common, &eff);
            let req = AnalysisRequest::new(src, dialect.id());
            let mut rng = match eff.seed {
                Some(s) => StdRng::seed_from_u64(s),
                None => StdRng::from_entropy(),
            };
            let sim = Simulator::new(eff.settings());
            match sim.run_code(&req, &mut rng).await {
                Ok(res) => {
                    output::print_run(&res, &eff.output);
                    if res.error.is_some() {
                        process::exit(1);
                    }
                }
                Err(e) => die(e),
            }
        }
        Commands::Lint { patterns, common } => {
            let eff = effective(&common_overrides(&common));
            let explicit = common
                .dialect
                .as_deref()
                .map(|d| d.parse::<Dialect>().unwrap_or_else(|e| die(e)));
            let (report, errors) = run_lint(&eff.root, &patterns, explicit, eff.dialect);
            for e in &errors {
                eprintln!("{} {}", note_prefix(), e);
            }
            if report.files.is_empty() && eff.output != "json" {
                eprintln!("{} no files matched {}", info_prefix(), patterns.join(" "));
            }
            output::print_lint(&report, &eff.output);
            if report.summary.errors > 0 {
                process::exit(1);
            }
            if report.files.is_empty() && !errors.is_empty() {
                process::exit(2);
            }
        }
        Commands::Suggest {
            file,
            common,
            line,
            column,
        } => {
            let (eff, mut req) = request_for(&file, &common);
            let end = Cursor::end_of(&req.source_text);
            // no --column: end of the chosen line
            req = req.with_cursor(Cursor::new(line.unwrap_or(end.line), column.unwrap_or(usize::MAX)));
            let sim = Simulator::new(eff.settings());
            match sim.completions(&req).await {
                Ok(found) => output::print_suggestions(&found, &eff.output),
                Err(e) => die(e),
            }
        }
        Commands::Docs { file, common } => {
            let (eff, req) = request_for(&file, &common);
            let sim = Simulator::new(eff.settings());
            match sim.generate_documentation(&req).await {
                Ok(doc) => output::print_docs(&doc, &eff.output),
                Err(e) => die(e),
            }
        }
        Commands::Exec { command, output } => {
            let eff = effective(&Overrides {
                output: output.as_deref(),
                ..Overrides::default()
            });
            let command = command.join(" ");
            let sim = Simulator::new(eff.settings());
            let response = sim.execute_command(&command).await;
            output::print_command(&command, &response, &eff.output);
        }
        Commands::Extract { image, output } => {
            let eff = effective(&Overrides {
                output: output.as_deref(),
                ..Overrides::default()
            });
            output::print_extracted(&extract::extract_code_from_image(&image), &eff.output);
        }
        Commands::Dialects { output } => {
            output::print_dialects(output.as_deref().unwrap_or("human"));
        }
        Commands::Sample { dialect } => {
            let d = dialect.parse::<Dialect>().unwrap_or_else(|e| die(e));
            println!("{}", d.sample_source());
        }
    }
}
