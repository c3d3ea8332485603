//! Logging setup and search statistics for sffuzzy tools
//!
//! This crate provides:
//! - Structured logging with tracing (compact or JSON, always on stderr)
//! - A per-process session id for correlating log lines
//! - Search counters and duration histograms
//! - Timers that feed the histograms

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};
use std::time::{Duration, Instant};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use uuid::Uuid;

/// Global statistics registry
static STATS: Lazy<SearchStats> = Lazy::new(SearchStats::new);

/// Global session ID for correlating logs
static SESSION_ID: Lazy<String> = Lazy::new(|| Uuid::new_v4().to_string());

/// Initialize logging with the default configuration
pub fn init() -> anyhow::Result<()> {
    init_with_config(TelemetryConfig::default())
}

/// Initialize with custom configuration
///
/// `RUST_LOG` takes precedence over `config.log_level`.
pub fn init_with_config(config: TelemetryConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let result = if config.json {
        let subscriber = tracing_subscriber::registry().with(filter).with(
            fmt::layer()
                .json()
                .with_target(config.show_target)
                .with_writer(std::io::stderr),
        );
        tracing::subscriber::set_global_default(subscriber)
    } else {
        let subscriber = tracing_subscriber::registry().with(filter).with(
            fmt::layer()
                .with_target(config.show_target)
                .with_writer(std::io::stderr)
                .compact(),
        );
        tracing::subscriber::set_global_default(subscriber)
    };

    result.map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {}", e))?;

    tracing::debug!(
        session_id = %session_id(),
        version = env!("CARGO_PKG_VERSION"),
        "Telemetry initialized"
    );

    Ok(())
}

/// Get the current session ID
pub fn session_id() -> &'static str {
    &SESSION_ID
}

/// Telemetry configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Filter directive used when `RUST_LOG` is unset
    #[serde(rename = "level")]
    pub log_level: String,
    /// Emit JSON lines instead of compact text
    pub json: bool,
    /// Include the event target (module path)
    pub show_target: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            json: false,
            show_target: false,
        }
    }
}

/// Counters and duration histograms for search operations
pub struct SearchStats {
    searches: AtomicU64,
    empty_phrases: AtomicU64,
    targets_scored: AtomicU64,
    results_returned: AtomicU64,
    durations: RwLock<HashMap<String, Vec<f64>>>,
    start_time: Instant,
}

impl SearchStats {
    fn new() -> Self {
        Self {
            searches: AtomicU64::new(0),
            empty_phrases: AtomicU64::new(0),
            targets_scored: AtomicU64::new(0),
            results_returned: AtomicU64::new(0),
            durations: RwLock::new(HashMap::new()),
            start_time: Instant::now(),
        }
    }

    /// Record a completed search
    pub fn record_search(&self, targets: usize, returned: usize) {
        self.searches.fetch_add(1, Ordering::Relaxed);
        self.targets_scored.fetch_add(targets as u64, Ordering::Relaxed);
        self.results_returned.fetch_add(returned as u64, Ordering::Relaxed);
    }

    /// Record a search rejected for an empty phrase
    pub fn record_empty_phrase(&self) {
        self.empty_phrases.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an operation duration in milliseconds
    pub fn record_duration(&self, name: &str, millis: f64) {
        let mut durations = self.durations.write().unwrap_or_else(PoisonError::into_inner);
        durations.entry(name.to_string()).or_default().push(millis);
    }

    /// Number of completed searches
    pub fn searches(&self) -> u64 {
        self.searches.load(Ordering::Relaxed)
    }

    /// Get uptime in milliseconds
    pub fn uptime_ms(&self) -> u64 {
        u64::try_from(self.start_time.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    /// Export statistics as JSON
    pub fn export_json(&self) -> serde_json::Value {
        let durations = self.durations.read().unwrap_or_else(PoisonError::into_inner);

        let duration_stats: HashMap<&str, HistogramStats> = durations
            .iter()
            .map(|(k, v)| (k.as_str(), HistogramStats::from_values(v)))
            .collect();

        serde_json::json!({
            "session_id": session_id(),
            "uptime_ms": self.uptime_ms(),
            "searches": self.searches(),
            "empty_phrases": self.empty_phrases.load(Ordering::Relaxed),
            "targets_scored": self.targets_scored.load(Ordering::Relaxed),
            "results_returned": self.results_returned.load(Ordering::Relaxed),
            "durations_ms": duration_stats,
        })
    }
}

/// Histogram statistics
#[derive(Debug, Serialize)]
pub struct HistogramStats {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub p50: f64,
    pub p95: f64,
    pub p99: f64,
}

impl HistogramStats {
    fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self {
                count: 0,
                min: 0.0,
                max: 0.0,
                mean: 0.0,
                p50: 0.0,
                p95: 0.0,
                p99: 0.0,
            };
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let count = sorted.len();
        let sum: f64 = sorted.iter().sum();

        Self {
            count,
            min: sorted[0],
            max: sorted[count - 1],
            mean: sum / count as f64,
            p50: percentile(&sorted, 50.0),
            p95: percentile(&sorted, 95.0),
            p99: percentile(&sorted, 99.0),
        }
    }
}

fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let idx = ((p / 100.0) * (sorted.len() - 1) as f64).round() as usize;
    sorted[idx.min(sorted.len() - 1)]
}

/// Get the global statistics registry
pub fn stats() -> &'static SearchStats {
    &STATS
}

/// Timer for measuring operation duration
pub struct Timer {
    name: String,
    start: Instant,
}

impl Timer {
    /// Start a new timer
    pub fn start(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start: Instant::now(),
        }
    }

    /// Stop the timer and record the duration
    pub fn stop(self) -> Duration {
        let duration = self.start.elapsed();
        stats().record_duration(&self.name, duration.as_secs_f64() * 1000.0);
        tracing::debug!(
            operation = %self.name,
            duration_ms = duration.as_secs_f64() * 1000.0,
            "Timer completed"
        );
        duration
    }
}
