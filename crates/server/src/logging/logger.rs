use config::GatewayConfig;
use rolling_file::*;
use std::path::PathBuf;
use thiserror::Error;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log level '{level}': {source}")]
    InvalidLogLevel {
        level: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("Failed to create log directory or file appender: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse Loki URL '{url}': {source}")]
    InvalidLokiUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Failed to configure Loki integration: {0}")]
    LokiError(#[from] tracing_loki::Error),

    #[error("A global tracing subscriber is already installed: {0}")]
    AlreadyInitialized(#[from] tracing_subscriber::util::TryInitError),
}

/// Configuration for logging initialization
pub struct LoggingConfig<'a> {
    pub level: &'a str,
    pub json_format: bool,
    pub strip_ansi: bool,
    pub write_to_file: bool,
    pub write_path: &'a str,
    pub write_max_file_size: u64,
    pub write_max_files: usize,
    pub loki_url: Option<&'a str>,
}

impl<'a> LoggingConfig<'a> {
    pub fn from_gateway(config: &'a GatewayConfig) -> Self {
        Self {
            level: &config.log.level,
            json_format: config.log.json,
            strip_ansi: config.log.strip_ansi,
            write_to_file: config.log.write,
            write_path: &config.log.write_path,
            write_max_file_size: config.log.write_max_file_size,
            write_max_files: config.log.write_max_files,
            loki_url: config.metrics.loki_url.as_deref(),
        }
    }
}

/// Filter directive for a configured level. `http` enables request logs on top of `info`.
fn filter_directive(level: &str) -> &str {
    if level == "http" {
        "info,http=debug"
    } else {
        level
    }
}

fn build_filter(level: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(filter_directive(level)).map_err(|source| LoggingError::InvalidLogLevel {
        level: level.to_string(),
        source,
    })
}

/// Initialize tracing/logging with the specified configuration
///
/// # Examples
/// ```no_run
/// use ledger_tx_rest::logging::{self, LoggingConfig};
///
/// logging::init_with_config(LoggingConfig {
///     level: "debug",
///     json_format: false,
///     strip_ansi: false,
///     write_to_file: false,
///     write_path: "./logs",
///     write_max_file_size: 5242880,
///     write_max_files: 5,
///     loki_url: None,
/// })?;
/// # Ok::<(), ledger_tx_rest::logging::LoggingError>(())
/// ```
///
/// # Loki Integration
/// When a Loki URL is provided, logs are shipped asynchronously with the labels
/// `service` = "ledger-tx-rest" and `pid`. The background task is spawned with
/// `tokio::spawn`, so this must be called inside a tokio runtime.
///
/// # Log Rotation
/// When a log file reaches `write_max_file_size`, it is rotated:
/// - Current: logs.log
/// - After rotation: logs.log.1, logs.log.2, etc.
/// - Keeps `write_max_files` files in total, the current one included
pub fn init_with_config(config: LoggingConfig) -> Result<(), LoggingError> {
    let filter = build_filter(config.level)?;

    let loki_layer = match config.loki_url {
        Some(url) => {
            let parsed_url =
                url::Url::parse(url).map_err(|source| LoggingError::InvalidLokiUrl {
                    url: url.to_string(),
                    source,
                })?;

            let (layer, task) = tracing_loki::builder()
                .label("service", "ledger-tx-rest")?
                .extra_field("pid", format!("{}", std::process::id()))?
                .build_url(parsed_url)?;

            tokio::spawn(task);
            Some(layer)
        }
        None => None,
    };

    let console_layer = if config.json_format {
        fmt::layer().json().boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(!config.strip_ansi)
            .boxed()
    };

    let file_layer = if config.write_to_file {
        std::fs::create_dir_all(config.write_path)?;

        let log_file_path = PathBuf::from(config.write_path).join("logs.log");
        // write_max_files includes the current file
        let rotated_files_count = config.write_max_files.saturating_sub(1);
        let file_appender = BasicRollingFileAppender::new(
            log_file_path,
            RollingConditionBasic::new().max_size(config.write_max_file_size),
            rotated_files_count,
        )?;

        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        // The writer flushes on drop of the guard; it has to live as long as the process.
        std::mem::forget(guard);

        let layer = if config.json_format {
            fmt::layer().json().with_writer(non_blocking).boxed()
        } else {
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false)
                .with_writer(non_blocking)
                .boxed()
        };
        Some(layer)
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .with(loki_layer)
        .try_init()?;

    Ok(())
}
