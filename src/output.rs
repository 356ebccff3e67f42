//! Output rendering for run, lint, suggest, docs, and the terminal stub.
//!
//! Supports `human` (default) and `json` outputs. The JSON forms are built
//! by pure `compose_*` functions so their shape can be tested directly.

use crate::dialect::Dialect;
use crate::extract::ExtractedCode;
use crate::models::{DocumentationRecord, ExecutionResult, LintReport, Severity, Suggestion};
use crate::utils::use_colors;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

fn print_json(v: &JsonVal) {
    match serde_json::to_string_pretty(v) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("{} {}", crate::utils::error_prefix(), e),
    }
}

/// Print a simulated run: stdout as-is, then the error (if any) and timing.
pub fn print_run(res: &ExecutionResult, output: &str) {
    match output {
        "json" => print_json(&compose_run_json(res)),
        _ => {
            let color = use_colors(output);
            print!("{}", res.stdout);
            if let Some(err) = &res.error {
                if color {
                    println!("{}", err.red());
                } else {
                    println!("{err}");
                }
            }
            let timing = format!("— finished in {:.3}s —", res.execution_time_seconds);
            if color {
                eprintln!("{}", timing.bright_black());
            } else {
                eprintln!("{timing}");
            }
        }
    }
}

/// Print lint results in the requested format.
pub fn print_lint(res: &LintReport, output: &str) {
    match output {
        "json" => print_json(&compose_lint_json(res)),
        _ => {
            let color = use_colors(output);
            for f in &res.files {
                for is in &f.issues {
                    let (icon, sev) = match is.severity {
                        Severity::Error => ("✖".red().to_string(), "⟦error⟧".red().bold().to_string()),
                        Severity::Warning => ("▲".yellow().to_string(), "⟦warn⟧".yellow().bold().to_string()),
                        Severity::Info => ("◆".blue().to_string(), "⟦info⟧".blue().bold().to_string()),
                    };
                    let (icon, sev) = if color {
                        (icon, sev)
                    } else {
                        (plain_icon(is.severity).to_string(), format!("⟦{}⟧", is.severity.as_str()))
                    };
                    let loc = format!("{}:{}:{}", f.file, is.line, is.column);
                    let loc = if color { loc.bold().to_string() } else { loc };
                    println!("{} {} {} — {}", icon, sev, loc, is.message);
                    if let Some(fix) = &is.fix {
                        if color {
                            println!("    {} {}", "fix:".green(), fix);
                        } else {
                            println!("    fix: {fix}");
                        }
                    }
                }
            }
            let summary = format!(
                "— Summary — errors={} warnings={} infos={} files={}",
                res.summary.errors, res.summary.warnings, res.summary.infos, res.summary.files
            );
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{summary}");
            }
        }
    }
}

fn plain_icon(s: Severity) -> &'static str {
    match s {
        Severity::Error => "✖",
        Severity::Warning => "▲",
        Severity::Info => "◆",
    }
}

/// Print the surfaced suggestion (index 0), if any.
pub fn print_suggestions(found: &[Suggestion], output: &str) {
    match output {
        "json" => print_json(&compose_suggestions_json(found)),
        _ => match found.first() {
            Some(s) => {
                let head = format!("suggestion ({:?}, confidence {:.2}):", s.kind, s.confidence).to_lowercase();
                if use_colors(output) {
                    println!("{}", head.cyan().bold());
                } else {
                    println!("{head}");
                }
                println!("{}", s.insertion_text);
            }
            None => println!("no suggestion"),
        },
    }
}

pub fn print_docs(doc: &DocumentationRecord, output: &str) {
    match output {
        "json" => print_json(&serde_json::to_value(doc).unwrap_or(JsonVal::Null)),
        _ => {
            let color = use_colors(output);
            println!("{}", doc.summary);
            if !doc.parameters.is_empty() {
                println!();
                println!("{}", if color { "Parameters".bold().to_string() } else { "Parameters".into() });
                for p in &doc.parameters {
                    println!("  {} ({}) — {}", p.name, p.ty, p.description);
                }
            }
            if !doc.returns.ty.is_empty() {
                println!();
                println!("{}", if color { "Returns".bold().to_string() } else { "Returns".into() });
                println!("  {} — {}", doc.returns.ty, doc.returns.description);
            }
        }
    }
}

pub fn print_command(command: &str, response: &str, output: &str) {
    match output {
        "json" => print_json(&json!({"command": command, "output": response})),
        _ => println!("{response}"),
    }
}

pub fn print_extracted(x: &ExtractedCode, output: &str) {
    match output {
        "json" => print_json(&serde_json::to_value(x).unwrap_or(JsonVal::Null)),
        _ => {
            let head = format!("— {} (confidence {:.2}) —", x.dialect.label(), x.confidence);
            if use_colors(output) {
                eprintln!("{}", head.bright_black());
            } else {
                eprintln!("{head}");
            }
            println!("{}", x.code);
        }
    }
}

pub fn print_dialects(output: &str) {
    match output {
        "json" => print_json(&compose_dialects_json()),
        _ => {
            for d in Dialect::ALL {
                let r = d.rules();
                println!("{:<11} {:<11} output={} comment={}", d.id(), d.label(), r.output_call, r.comment_marker);
            }
        }
    }
}

/// Compose run JSON object (pure) for testing/snapshot purposes.
pub fn compose_run_json(res: &ExecutionResult) -> JsonVal {
    json!({
        "stdout": res.stdout,
        "error": res.error,
        "executionTimeSeconds": res.execution_time_seconds,
    })
}

/// Compose lint JSON object (pure) for testing/snapshot purposes.
pub fn compose_lint_json(res: &LintReport) -> JsonVal {
    serde_json::to_value(res).unwrap_or(JsonVal::Null)
}

pub fn compose_suggestions_json(found: &[Suggestion]) -> JsonVal {
    json!({
        "suggestions": found,
        "surfaced": found.first(),
    })
}

pub fn compose_dialects_json() -> JsonVal {
    let items: Vec<_> = Dialect::ALL
        .iter()
        .map(|d| {
            let r = d.rules();
            json!({
                "id": d.id(),
                "label": d.label(),
                "outputCall": r.output_call,
                "raise": r.raise_phrase.join(" "),
                "comment": r.comment_marker,
            })
        })
        .collect();
    json!({ "dialects": items })
}
