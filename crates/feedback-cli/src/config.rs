use std::env;
use std::time::Duration;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Clone, Debug)]
pub struct CliConfig {
    pub log_level: String,
    pub log_format: LogFormat,
    pub busy_timeout: Duration,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_format: LogFormat::Text,
            busy_timeout: feedback_core::storage::DEFAULT_BUSY_TIMEOUT,
        }
    }
}

impl CliConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();
        if let Some(v) = get("FEEDBACK_LOG") {
            cfg.log_level = v;
        }
        if let Some(v) = get("FEEDBACK_LOG_FORMAT") {
            if v.eq_ignore_ascii_case("json") {
                cfg.log_format = LogFormat::Json;
            }
        }
        if let Some(v) = get("FEEDBACK_BUSY_TIMEOUT_MS") {
            if let Ok(n) = v.parse() {
                cfg.busy_timeout = Duration::from_millis(n);
            }
        }
        cfg
    }
}

/// Logs go to stderr so stdout stays free for command output.
pub fn init_logging(cfg: &CliConfig) {
    let filter = EnvFilter::try_new(&cfg.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = fmt()
        .with_env_filter(filter)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_target(true)
        .with_writer(std::io::stderr);

    match cfg.log_format {
        LogFormat::Json => builder.json().with_current_span(false).init(),
        LogFormat::Text => builder.init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_env() {
        let cfg = CliConfig::from_lookup(lookup(&[]));
        assert_eq!(cfg.log_level, "warn");
        assert_eq!(cfg.log_format, LogFormat::Text);
        assert_eq!(cfg.busy_timeout, Duration::from_millis(5000));
    }

    #[test]
    fn env_overrides() {
        let cfg = CliConfig::from_lookup(lookup(&[
            ("FEEDBACK_LOG", "feedback_core=debug"),
            ("FEEDBACK_LOG_FORMAT", "JSON"),
            ("FEEDBACK_BUSY_TIMEOUT_MS", "250"),
        ]));
        assert_eq!(cfg.log_level, "feedback_core=debug");
        assert_eq!(cfg.log_format, LogFormat::Json);
        assert_eq!(cfg.busy_timeout, Duration::from_millis(250));
    }

    #[test]
    fn unparsable_timeout_keeps_default() {
        let cfg = CliConfig::from_lookup(lookup(&[("FEEDBACK_BUSY_TIMEOUT_MS", "soon")]));
        assert_eq!(cfg.busy_timeout, Duration::from_millis(5000));
    }
}
