// Copyright (C) 2026 Ledger Tx REST Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error(
        "Invalid Prometheus prefix '{0}': must start with [a-zA-Z_:] and contain only [a-zA-Z0-9_:]"
    )]
    InvalidPrometheusPrefix(String),

    #[error("Invalid Loki URL '{url}': {source}")]
    InvalidLokiUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Configuration for Prometheus metrics and Loki logging
#[derive(Debug, Clone)]
pub struct MetricsConfig {
    /// Enable or disable metrics collection and the `/metrics` endpoint
    ///
    /// Env: LTR_METRICS_ENABLED
    /// Default: false
    pub enabled: bool,

    /// Prometheus metric name prefix
    ///
    /// Env: LTR_METRICS_PROMETHEUS_PREFIX
    /// Default: ledger_tx_rest
    pub prometheus_prefix: String,

    /// Loki push endpoint for log aggregation
    ///
    /// Env: LTR_METRICS_LOKI_URL
    pub loki_url: Option<String>,
}

pub(crate) fn default_prometheus_prefix() -> String {
    "ledger_tx_rest".to_string()
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            prometheus_prefix: default_prometheus_prefix(),
            loki_url: None,
        }
    }
}

/// Prometheus metric names: `[a-zA-Z_:][a-zA-Z0-9_:]*`
fn is_valid_prometheus_prefix(prefix: &str) -> bool {
    let mut chars = prefix.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == ':' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ':')
}

impl MetricsConfig {
    pub(crate) fn validate(&self) -> Result<(), MetricsError> {
        if !is_valid_prometheus_prefix(&self.prometheus_prefix) {
            return Err(MetricsError::InvalidPrometheusPrefix(
                self.prometheus_prefix.clone(),
            ));
        }

        if let Some(url) = &self.loki_url {
            url::Url::parse(url).map_err(|source| MetricsError::InvalidLokiUrl {
                url: url.clone(),
                source,
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_metrics_config_is_valid() {
        assert!(MetricsConfig::default().validate().is_ok());
    }

    #[test]
    fn test_prometheus_prefix_grammar() {
        assert!(is_valid_prometheus_prefix("ledger_tx_rest"));
        assert!(is_valid_prometheus_prefix(":ns:sub"));
        assert!(!is_valid_prometheus_prefix(""));
        assert!(!is_valid_prometheus_prefix("1abc"));
        assert!(!is_valid_prometheus_prefix("has-dash"));
    }

    #[test]
    fn test_invalid_loki_url() {
        let config = MetricsConfig {
            loki_url: Some("not a url".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(MetricsError::InvalidLokiUrl { .. })
        ));
    }

    #[test]
    fn test_valid_loki_url() {
        let config = MetricsConfig {
            loki_url: Some("http://127.0.0.1:3100".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
