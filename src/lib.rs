//! codesim core library.
//!
//! Simulates running, linting, completing, and documenting short source
//! programs with text heuristics. Nothing here executes user code.
//!
//! High-level modules:
//! - `dialect`: Registry of supported dialects and their per-dialect rules.
//! - `assemble`: Output-call collection and first-error detection.
//! - `literal`: Classification and rendering of output arguments.
//! - `fault`: Probabilistic simulated interpreter crashes.
//! - `lint`: Line-level heuristics, plus glob-driven linting over files.
//! - `suggest`: Cursor-line completion suggestions.
//! - `debounce`: Quiet-window scheduling and latest-response gating.
//! - `docs`, `terminal`, `extract`: Fixed-shape stubs.
//! - `simulator`: Async facade with simulated latency.
//! - `config`, `cli`, `logging`, `output`, `utils`: CLI plumbing.
pub mod assemble;
pub mod cli;
pub mod config;
pub mod debounce;
pub mod dialect;
pub mod docs;
pub mod error;
pub mod extract;
pub mod fault;
pub mod lint;
pub mod literal;
pub mod logging;
pub mod models;
pub mod output;
pub mod scan;
pub mod simulator;
pub mod suggest;
pub mod terminal;
pub mod utils;
