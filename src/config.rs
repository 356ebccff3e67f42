//! Configuration discovery and effective settings resolution.
//!
//! codesim reads `codesim.toml|yaml|yml` from the project root (or closest
//! ancestor) and merges it with CLI flags to produce an `Effective` config.
//! Defaults:
//! - `dialect`: none (files fall back to their extension)
//! - `output`: `human`
//! - `seed`: none (entropy-seeded)
//! - `run.faults`: true, `run.latency`: true
//! - `log.level`: `warn`, `log.format`: `compact`
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::dialect::Dialect;
use crate::error::AnalysisError;
use crate::fault::DEFAULT_FAULT_PROBABILITY;
use crate::logging::LogFormat;
use crate::simulator::{Latency, Settings};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::Level;

const CONFIG_NAMES: [&str; 3] = ["codesim.toml", "codesim.yaml", "codesim.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
/// Simulation section under `[run]`.
pub struct RunCfg {
    pub faults: Option<bool>,
    pub latency: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Logging section under `[log]`.
pub struct LogCfg {
    pub level: Option<String>,
    pub format: Option<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `codesim.toml|yaml`.
pub struct SimConfig {
    pub dialect: Option<String>,
    pub output: Option<String>,
    pub seed: Option<u64>,
    #[serde(default)]
    pub run: Option<RunCfg>,
    #[serde(default)]
    pub log: Option<LogCfg>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub root: PathBuf,
    pub config_found: bool,
    pub dialect: Option<Dialect>,
    pub output: String,
    pub seed: Option<u64>,
    pub faults: bool,
    pub latency: bool,
    pub log_level: Level,
    pub log_format: LogFormat,
}

impl Effective {
    pub fn settings(&self) -> Settings {
        Settings {
            fault_probability: if self.faults {
                DEFAULT_FAULT_PROBABILITY
            } else {
                0.0
            },
            latency: if self.latency {
                Latency::default()
            } else {
                Latency::none()
            },
        }
    }
}

/// CLI-side overrides; `None` means "not given on the command line".
#[derive(Debug, Default, Clone)]
pub struct Overrides<'a> {
    pub root: Option<&'a str>,
    pub dialect: Option<&'a str>,
    pub output: Option<&'a str>,
    pub seed: Option<u64>,
    pub faults: Option<bool>,
    pub latency: Option<bool>,
}

/// Walk upward from `start` to detect the project root.
///
/// Stops when a `codesim.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_NAMES.iter().any(|n| cur.join(n).exists()) {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `SimConfig` from `codesim.toml` or `codesim.yaml|yml` if present.
pub fn load_config(root: &Path) -> Option<SimConfig> {
    let toml_path = root.join("codesim.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        let cfg: SimConfig = toml::from_str(&s).ok()?;
        return Some(cfg);
    }
    for yml in ["codesim.yaml", "codesim.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            let cfg: SimConfig = serde_yaml::from_str(&s).ok()?;
            return Some(cfg);
        }
    }
    None
}

fn parse_level(s: &str) -> Option<Level> {
    match s.trim().to_ascii_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" | "warning" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
///
/// A dialect named in either place must be registered; anything else is an
/// `UnsupportedDialect` error rather than a silent fallback.
pub fn resolve_effective(cli: &Overrides<'_>) -> Result<Effective, AnalysisError> {
    let start = PathBuf::from(cli.root.unwrap_or("."));
    let root = detect_root(&start);
    let loaded = load_config(&root);
    let config_found = loaded.is_some();
    let cfg = loaded.unwrap_or_default();

    let dialect = match cli.dialect.map(str::to_string).or(cfg.dialect) {
        Some(id) => Some(id.parse::<Dialect>()?),
        None => None,
    };

    let output = cli
        .output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    let seed = cli.seed.or(cfg.seed);
    let faults = cli
        .faults
        .or_else(|| cfg.run.as_ref().and_then(|r| r.faults))
        .unwrap_or(true);
    let latency = cli
        .latency
        .or_else(|| cfg.run.as_ref().and_then(|r| r.latency))
        .unwrap_or(true);

    let log_level = cfg
        .log
        .as_ref()
        .and_then(|l| l.level.as_deref())
        .and_then(parse_level)
        .unwrap_or(Level::WARN);
    let log_format = cfg
        .log
        .as_ref()
        .and_then(|l| l.format.as_deref())
        .and_then(LogFormat::parse)
        .unwrap_or(LogFormat::Compact);

    Ok(Effective {
        root,
        config_found,
        dialect,
        output,
        seed,
        faults,
        latency,
        log_level,
        log_format,
    })
}
