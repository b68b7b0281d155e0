//! Runtime configuration from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `KLINGON_CLOCK_TICK_MS` | `1000` | Sampling cadence, clamped to 50..=60000 |
//! | `KLINGON_CLOCK_UTC` | off | Sample UTC instead of local time |
//! | `KLINGON_CLOCK_HEADLESS` | unset | `text` or `json`: print one reading and exit |
//! | `KLINGON_CLOCK_OWNER` | empty | Name shown in the footer |
//! | `KLINGON_CLOCK_ANALOG_DISABLED` | off | Hide the analog dial |
//! | `KLINGON_CLOCK_LOG_PATH` | unset | File that receives tracing output |
//!
//! Bad values never abort startup. They fall back to the default and leave
//! a message in [`ClockConfig::warnings`], which the runner logs once
//! tracing is up.

use std::path::PathBuf;

use crate::types::{MAX_TICK_MS, MIN_TICK_MS, TICK_MS};

/// How headless mode prints the reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadlessFormat {
    Text,
    Json,
}

impl HeadlessFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "plain" => Some(HeadlessFormat::Text),
            "json" => Some(HeadlessFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockConfig {
    pub tick_ms: u32,
    pub utc: bool,
    pub headless: Option<HeadlessFormat>,
    pub owner: String,
    pub analog: bool,
    pub log_path: Option<PathBuf>,
    pub warnings: Vec<String>,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            utc: false,
            headless: None,
            owner: String::new(),
            analog: true,
            log_path: None,
            warnings: Vec::new(),
        }
    }
}

impl ClockConfig {
    /// Create from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        if let Some(raw) = get("KLINGON_CLOCK_TICK_MS") {
            match raw.parse::<u32>() {
                Ok(ms) => {
                    config.tick_ms = ms.clamp(MIN_TICK_MS, MAX_TICK_MS);
                    if config.tick_ms != ms {
                        config.warnings.push(format!(
                            "KLINGON_CLOCK_TICK_MS={} out of range, using {}",
                            ms, config.tick_ms
                        ));
                    }
                }
                Err(_) => config.warnings.push(format!(
                    "KLINGON_CLOCK_TICK_MS={:?} is not a number, using {}",
                    raw, TICK_MS
                )),
            }
        }

        config.utc = get("KLINGON_CLOCK_UTC").map(|v| is_truthy(&v)).unwrap_or(false);
        config.analog = !get("KLINGON_CLOCK_ANALOG_DISABLED")
            .map(|v| is_truthy(&v))
            .unwrap_or(false);

        if let Some(raw) = get("KLINGON_CLOCK_HEADLESS") {
            config.headless = HeadlessFormat::from_str(&raw);
            if config.headless.is_none() {
                config.warnings.push(format!(
                    "KLINGON_CLOCK_HEADLESS={:?} is not one of text, json; starting the terminal clock",
                    raw
                ));
            }
        }

        config.owner = get("KLINGON_CLOCK_OWNER").unwrap_or_default();
        config.log_path = get("KLINGON_CLOCK_LOG_PATH").map(PathBuf::from);
        config
    }
}

fn is_truthy(v: &str) -> bool {
    v == "1" || v.eq_ignore_ascii_case("true") || v.eq_ignore_ascii_case("yes")
}
