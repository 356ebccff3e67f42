//! CLI argument parsing via `clap`.

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "codesim",
    version,
    about = "Heuristic code run/lint/suggest simulator",
    long_about = "codesim — simulates running, linting, completing, and documenting source text without executing it.\n\nConfiguration precedence: CLI > codesim.toml > defaults.",
    after_help = "Examples:\n  codesim run hello.py\n  codesim lint 'src/**/*.js' --output json\n  codesim suggest app.js --line 3 --column 10\n  codesim exec npm install express",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Args, Clone, Default)]
/// Flags shared by every source-reading subcommand.
pub struct Common {
    #[arg(long, help = "Project root used for config discovery (default: current dir)")]
    pub root: Option<String>,
    #[arg(long, help = "Dialect: javascript|typescript|python|java (default: from extension or config)")]
    pub dialect: Option<String>,
    #[arg(long, help = "Output mode: human|json (default: human)")]
    pub output: Option<String>,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current codesim version.")]
    Version,
    /// Simulate running a source file
    #[command(
        about = "Simulate a run",
        long_about = "Collect output calls in source order, detect the first error-raising statement, and occasionally inject a simulated interpreter crash.",
        after_help = "Examples:\n  codesim run main.js\n  codesim run - --dialect python --seed 7 --no-faults"
    )]
    Run {
        #[arg(help = "Source file, or - for stdin")]
        file: String,
        #[command(flatten)]
        common: Common,
        #[arg(long, help = "Seed for fault injection and timing")]
        seed: Option<u64>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Disable simulated interpreter crashes")]
        no_faults: bool,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Skip the simulated execution delay")]
        no_latency: bool,
    },
    /// Lint files matched by glob patterns
    #[command(
        about = "Run lint heuristics",
        long_about = "Scan files line by line for leftover output calls, TODO markers, and (JS/TS) unguarded member access.",
        after_help = "Examples:\n  codesim lint 'src/**/*.js'\n  codesim lint app.py --output json"
    )]
    Lint {
        #[arg(required = true, help = "Glob patterns relative to the project root")]
        patterns: Vec<String>,
        #[command(flatten)]
        common: Common,
    },
    /// Propose a completion at a cursor position
    #[command(
        about = "Suggest a completion",
        long_about = "Inspect the line under the cursor and propose a single insertion. The cursor defaults to the end of the source."
    )]
    Suggest {
        #[arg(help = "Source file, or - for stdin")]
        file: String,
        #[command(flatten)]
        common: Common,
        #[arg(long, help = "1-based cursor line")]
        line: Option<usize>,
        #[arg(long, help = "1-based cursor column")]
        column: Option<usize>,
    },
    /// Produce a documentation stub
    #[command(about = "Generate documentation", long_about = "Return a fixed-shape documentation record for the source.")]
    Docs {
        #[arg(help = "Source file, or - for stdin")]
        file: String,
        #[command(flatten)]
        common: Common,
    },
    /// Answer a shell command with a canned transcript
    #[command(about = "Simulate a terminal command")]
    Exec {
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true, help = "Command words")]
        command: Vec<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
    /// Simulate extracting code from a screenshot
    #[command(about = "Extract code from an image (simulated)")]
    Extract {
        #[arg(help = "Image file name")]
        image: String,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
    /// List registered dialects
    #[command(about = "List dialects")]
    Dialects {
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
    /// Print a dialect's starter program
    #[command(about = "Print a starter program")]
    Sample {
        #[arg(help = "Dialect identifier")]
        dialect: String,
    },
}
