//! Async facade over the analysis passes.
//!
//! Each operation is independent and stateless apart from the settings it
//! was built with. Simulated latency is a plain sleep before returning; it
//! carries no ordering guarantee between overlapping calls. Only an
//! unsupported dialect turns into an `Err`; empty input resolves to a
//! neutral result without touching the dialect registry.

use crate::assemble::assemble;
use crate::debounce::LatestGate;
use crate::dialect;
use crate::docs;
use crate::error::{validate_source, AnalysisError};
use crate::fault::{FaultInjector, DEFAULT_FAULT_PROBABILITY};
use crate::lint::lint_source;
use crate::models::{AnalysisRequest, DocumentationRecord, ExecutionResult, LintIssue, Suggestion};
use crate::suggest::{suggest, MIN_SOURCE_LEN};
use crate::terminal;
use rand::Rng;
use std::time::Duration;
use tracing::{debug, info};

/// Simulated per-operation delays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    pub run: Duration,
    pub lint: Duration,
    pub completion: Duration,
    pub docs: Duration,
    pub command: Duration,
}

impl Default for Latency {
    fn default() -> Self {
        Latency {
            run: Duration::from_millis(1000),
            lint: Duration::from_millis(300),
            completion: Duration::from_millis(500),
            docs: Duration::from_millis(800),
            command: Duration::from_millis(600),
        }
    }
}

impl Latency {
    pub fn none() -> Latency {
        Latency {
            run: Duration::ZERO,
            lint: Duration::ZERO,
            completion: Duration::ZERO,
            docs: Duration::ZERO,
            command: Duration::ZERO,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub fault_probability: f64,
    pub latency: Latency,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            fault_probability: DEFAULT_FAULT_PROBABILITY,
            latency: Latency::default(),
        }
    }
}

impl Settings {
    /// No delays and no injected faults.
    pub fn deterministic() -> Settings {
        Settings {
            fault_probability: 0.0,
            latency: Latency::none(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Simulator {
    settings: Settings,
}

async fn pause(d: Duration) {
    if !d.is_zero() {
        tokio::time::sleep(d).await;
    }
}

impl Simulator {
    pub fn new(settings: Settings) -> Simulator {
        Simulator { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Simulate running the request's source. `rng` drives fault injection
    /// and the reported execution time.
    pub async fn run_code<R: Rng + ?Sized>(
        &self,
        req: &AnalysisRequest,
        rng: &mut R,
    ) -> Result<ExecutionResult, AnalysisError> {
        if validate_source(&req.source_text).is_err() {
            return Ok(ExecutionResult::empty());
        }
        let rules = dialect::resolve(&req.dialect)?;
        let assembled = assemble(&req.source_text, rules);
        let faults = FaultInjector::new(self.settings.fault_probability);
        let injected = faults.maybe_inject(rules.dialect, assembled.error_text.as_deref(), rng);
        if injected.is_some() {
            debug!(dialect = %rules.dialect, "injected simulated fault");
        }
        let execution_time_seconds = rng.gen_range(0.1..0.6);
        let stdout = assembled.stdout();
        let error = assembled.error_text.or(injected);
        info!(
            dialect = %rules.dialect,
            lines = assembled.stdout_lines.len(),
            failed = error.is_some(),
            "simulated run"
        );
        pause(self.settings.latency.run).await;
        Ok(ExecutionResult {
            stdout,
            error,
            execution_time_seconds,
        })
    }

    pub async fn lint(&self, req: &AnalysisRequest) -> Result<Vec<LintIssue>, AnalysisError> {
        if validate_source(&req.source_text).is_err() {
            return Ok(Vec::new());
        }
        let rules = dialect::resolve(&req.dialect)?;
        let issues = lint_source(&req.source_text, rules);
        info!(dialect = %rules.dialect, issues = issues.len(), "lint");
        pause(self.settings.latency.lint).await;
        Ok(issues)
    }

    /// Zero or one suggestions; the caller surfaces index 0. The cursor
    /// defaults to the end of the source.
    pub async fn completions(&self, req: &AnalysisRequest) -> Result<Vec<Suggestion>, AnalysisError> {
        if req.source_text.chars().count() < MIN_SOURCE_LEN || validate_source(&req.source_text).is_err() {
            return Ok(Vec::new());
        }
        let rules = dialect::resolve(&req.dialect)?;
        let found = suggest(&req.source_text, rules, req.cursor_or_end());
        debug!(dialect = %rules.dialect, found = found.is_some(), "completion");
        pause(self.settings.latency.completion).await;
        Ok(found.into_iter().collect())
    }

    /// Like [`Simulator::completions`], but returns `None` when a newer
    /// request went through `gate` before this one finished.
    pub async fn latest_completions(
        &self,
        gate: &LatestGate,
        req: &AnalysisRequest,
    ) -> Result<Option<Vec<Suggestion>>, AnalysisError> {
        let ticket = gate.begin();
        let found = self.completions(req).await?;
        Ok(gate.admit(ticket, found))
    }

    pub async fn generate_documentation(
        &self,
        req: &AnalysisRequest,
    ) -> Result<DocumentationRecord, AnalysisError> {
        if validate_source(&req.source_text).is_err() {
            return Ok(DocumentationRecord::default());
        }
        let rules = dialect::resolve(&req.dialect)?;
        debug!(dialect = %rules.dialect, "documentation");
        pause(self.settings.latency.docs).await;
        Ok(docs::synthesize(&req.source_text))
    }

    pub async fn execute_command(&self, command: &str) -> String {
        let out = terminal::respond(command);
        pause(self.settings.latency.command).await;
        out
    }
}
